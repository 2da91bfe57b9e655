//! Recorded action logs that can be replayed through a builder.

use serde::{Deserialize, Serialize};
use tracing::warn;
use vr_builder::{Action, RangeField, ValueRangeBuilder};
use vr_core::RangeId;

/// One recorded action. Tags other than the three known ones load as
/// `Unknown` and are skipped on replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionDef {
    AddValueRange {
        id: RangeId,
        /// Next swatch color when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    UpdateValueRange {
        id: RangeId,
        field: RangeField,
        value: String,
    },
    DeleteValueRange {
        id: RangeId,
    },
    #[serde(other)]
    Unknown,
}

impl ActionDef {
    /// Concrete action against the builder's current state. `None` for
    /// unknown tags.
    pub fn to_action(&self, builder: &ValueRangeBuilder) -> Option<Action> {
        match self {
            ActionDef::AddValueRange { id, color } => Some(Action::Add {
                id: id.clone(),
                color: color.clone().unwrap_or_else(|| {
                    vr_builder::next_color(builder.value_ranges(), &builder.state().color_swatch)
                }),
            }),
            ActionDef::UpdateValueRange { id, field, value } => Some(Action::Update {
                id: id.clone(),
                field: *field,
                value: value.clone(),
            }),
            ActionDef::DeleteValueRange { id } => Some(Action::Delete { id: id.clone() }),
            ActionDef::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionScript {
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

/// Replay every action in order. `on_step` sees the step index, the action
/// and the builder after it was applied.
pub fn replay(
    builder: &mut ValueRangeBuilder,
    script: &ActionScript,
    mut on_step: impl FnMut(usize, &ActionDef, &ValueRangeBuilder),
) {
    for (idx, def) in script.actions.iter().enumerate() {
        match def.to_action(builder) {
            Some(action) => builder.dispatch(action),
            None => warn!(step = idx, "skipping unrecognized action"),
        }
        on_step(idx, def, builder);
    }
}
