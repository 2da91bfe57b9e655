//! Owner of a range set.
//!
//! The builder keeps the current snapshot, runs the reducer for each action,
//! recomputes validation straight after, and tells the listener whenever
//! aggregate validation changed.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};
use vr_core::RangeId;

use crate::color::{ColorSwatch, next_color};
use crate::error::{BuilderError, BuilderResult};
use crate::query::coerce_ranges;
use crate::range::{NumericValueRange, RangeField, ValueRange};
use crate::state::{Action, RangeSetState, reduce};
use crate::validation::{
    OVERLAP_MESSAGE, RangeIssue, ValidationMap, are_distinct_value_ranges_valid,
    are_ranges_valid, compute_validation_map,
};

/// Inputs for a new builder.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    pub initial_ranges: Vec<ValueRange>,
    /// Palette for new ranges; the default swatch when `None`.
    pub custom_swatch: Option<ColorSwatch>,
    pub min_ranges: usize,
    /// Cap checked by [`ValueRangeBuilder::add_range`]. `None` means no cap;
    /// `Some(0)` is a cap of zero and refuses every add.
    pub max_ranges: Option<usize>,
}

/// Receives aggregate validity: all ranges distinctly valid and none overlapping.
pub type ValidityListener = Box<dyn FnMut(bool)>;

pub struct ValueRangeBuilder {
    state: RangeSetState,
    validation_map: ValidationMap,
    listener: Option<ValidityListener>,
}

impl ValueRangeBuilder {
    /// Fails if two initial ranges share an id.
    pub fn new(config: BuilderConfig) -> BuilderResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = config.initial_ranges.iter().find(|r| !seen.insert(&r.id)) {
            return Err(BuilderError::DuplicateId { id: dup.id.clone() });
        }

        let state = RangeSetState::initial(
            config.initial_ranges,
            config.custom_swatch.unwrap_or_default(),
            config.min_ranges,
            config.max_ranges,
        );
        let validation_map = compute_validation_map(&state.value_ranges);
        debug!(
            ranges = state.len(),
            valid = are_ranges_valid(&validation_map),
            "value range builder initialized"
        );
        Ok(Self {
            state,
            validation_map,
            listener: None,
        })
    }

    /// Attach a validity listener. It is called once right away with the
    /// current validity.
    pub fn with_listener(mut self, listener: impl FnMut(bool) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self.notify();
        self
    }

    /// Apply one action and bring validation up to date.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.state, &action);
        if next == self.state {
            debug!(?action, "action left range set unchanged");
            return;
        }
        self.state = next;

        let validation_map = compute_validation_map(&self.state.value_ranges);
        if validation_map != self.validation_map {
            self.validation_map = validation_map;
            self.notify();
        }
    }

    /// Append a blank range with a generated id and the next swatch color.
    pub fn add_range(&mut self) -> BuilderResult<RangeId> {
        if let Some(max) = self.state.max_ranges.filter(|_| !self.can_add()) {
            warn!(max, "refusing to add value range past the maximum");
            return Err(BuilderError::MaxRangesReached { max });
        }
        let id = RangeId::generate();
        let color = next_color(&self.state.value_ranges, &self.state.color_swatch);
        debug!(%id, %color, "adding value range");
        self.dispatch(Action::Add {
            id: id.clone(),
            color,
        });
        Ok(id)
    }

    pub fn update_range(
        &mut self,
        id: &RangeId,
        field: RangeField,
        value: impl Into<String>,
    ) -> BuilderResult<()> {
        self.ensure_known(id)?;
        self.dispatch(Action::Update {
            id: id.clone(),
            field,
            value: value.into(),
        });
        Ok(())
    }

    pub fn delete_range(&mut self, id: &RangeId) -> BuilderResult<()> {
        self.ensure_known(id)?;
        if !self.can_delete() {
            return Err(BuilderError::MinRangesReached {
                min: self.state.min_ranges,
            });
        }
        self.dispatch(Action::Delete { id: id.clone() });
        Ok(())
    }

    /// False once the set holds `max_ranges` ranges.
    pub fn can_add(&self) -> bool {
        self.state.max_ranges.is_none_or(|max| self.state.len() < max)
    }

    /// False once the set is at or below `min_ranges`.
    pub fn can_delete(&self) -> bool {
        self.state.len() > self.state.min_ranges
    }

    pub fn state(&self) -> &RangeSetState {
        &self.state
    }

    pub fn value_ranges(&self) -> &[ValueRange] {
        &self.state.value_ranges
    }

    pub fn validation_map(&self) -> &ValidationMap {
        &self.validation_map
    }

    pub fn are_ranges_valid(&self) -> bool {
        are_ranges_valid(&self.validation_map)
    }

    /// Row problems, in list order.
    pub fn issues(&self) -> Vec<(RangeId, RangeIssue)> {
        self.state
            .value_ranges
            .iter()
            .filter_map(|r| {
                let issue = self.validation_map.get(&r.id)?.issue()?;
                Some((r.id.clone(), issue))
            })
            .collect()
    }

    /// Overlap warning, shown only when every row is otherwise valid.
    pub fn overlap_message(&self) -> Option<&'static str> {
        (are_distinct_value_ranges_valid(&self.validation_map) && self.validation_map.overlap_found)
            .then_some(OVERLAP_MESSAGE)
    }

    /// Current ranges with bounds coerced to numbers.
    pub fn get_value_ranges(&self) -> Vec<NumericValueRange> {
        coerce_ranges(&self.state.value_ranges)
    }

    fn ensure_known(&self, id: &RangeId) -> BuilderResult<()> {
        if self.state.contains(id) {
            Ok(())
        } else {
            Err(BuilderError::UnknownRange { id: id.clone() })
        }
    }

    fn notify(&mut self) {
        let valid = are_ranges_valid(&self.validation_map);
        if let Some(listener) = self.listener.as_mut() {
            listener(valid);
        }
    }
}

impl fmt::Debug for ValueRangeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRangeBuilder")
            .field("state", &self.state)
            .field("validation_map", &self.validation_map)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |valid| sink.borrow_mut().push(valid))
    }

    #[test]
    fn duplicate_initial_ids_rejected() {
        let result = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![
                ValueRange::new("a", "5", "1", "#1"),
                ValueRange::new("a", "20", "30", "#2"),
            ],
            ..Default::default()
        });
        assert_eq!(
            result.err(),
            Some(BuilderError::DuplicateId { id: "a".into() })
        );
    }

    #[test]
    fn zero_cap_refuses_every_add() {
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            max_ranges: Some(0),
            ..Default::default()
        })
        .unwrap();
        assert!(!builder.can_add());
        assert_eq!(
            builder.add_range(),
            Err(BuilderError::MaxRangesReached { max: 0 })
        );
    }

    #[test]
    fn listener_called_on_attach() {
        let (seen, listener) = recorder();
        let _builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![ValueRange::new("a", "0", "10", "#1")],
            ..Default::default()
        })
        .unwrap()
        .with_listener(listener);
        assert_eq!(*seen.borrow(), [true]);
    }

    #[test]
    fn color_change_does_not_notify() {
        let (seen, listener) = recorder();
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![ValueRange::new("a", "0", "10", "#1")],
            ..Default::default()
        })
        .unwrap()
        .with_listener(listener);
        builder
            .update_range(&"a".into(), RangeField::Color, "#2")
            .unwrap();
        assert_eq!(builder.value_ranges()[0].color, "#2");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn add_refused_at_max() {
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![ValueRange::new("a", "0", "10", "#1")],
            max_ranges: Some(2),
            ..Default::default()
        })
        .unwrap();
        assert!(builder.can_add());
        builder.add_range().unwrap();
        assert!(!builder.can_add());
        assert_eq!(
            builder.add_range(),
            Err(BuilderError::MaxRangesReached { max: 2 })
        );
        assert_eq!(builder.value_ranges().len(), 2);
    }

    #[test]
    fn added_range_takes_next_color() {
        let swatch = ColorSwatch::new(vec!["#1".into(), "#2".into()]).unwrap();
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![ValueRange::new("a", "0", "10", "#1")],
            custom_swatch: Some(swatch),
            ..Default::default()
        })
        .unwrap();
        let id = builder.add_range().unwrap();
        assert_eq!(builder.state().get(&id).unwrap().color, "#2");
    }

    #[test]
    fn delete_respects_min_ranges() {
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![
                ValueRange::new("a", "0", "10", "#1"),
                ValueRange::new("b", "20", "30", "#2"),
            ],
            min_ranges: 1,
            ..Default::default()
        })
        .unwrap();
        builder.delete_range(&"a".into()).unwrap();
        assert!(!builder.can_delete());
        assert_eq!(
            builder.delete_range(&"b".into()),
            Err(BuilderError::MinRangesReached { min: 1 })
        );
    }

    #[test]
    fn unknown_id_reported_by_helpers_but_ignored_by_dispatch() {
        let mut builder = ValueRangeBuilder::new(BuilderConfig::default()).unwrap();
        assert!(matches!(
            builder.update_range(&"zz".into(), RangeField::Min, "1"),
            Err(BuilderError::UnknownRange { .. })
        ));
        builder.dispatch(Action::Delete { id: "zz".into() });
        assert!(builder.value_ranges().is_empty());
    }

    #[test]
    fn overlap_message_hidden_while_rows_invalid() {
        let mut builder = ValueRangeBuilder::new(BuilderConfig {
            initial_ranges: vec![
                ValueRange::new("a", "0", "10", "#1"),
                ValueRange::new("b", "5", "15", "#2"),
            ],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(builder.overlap_message(), Some(OVERLAP_MESSAGE));

        let c = builder.add_range().unwrap();
        assert!(builder.validation_map().overlap_found);
        assert_eq!(builder.overlap_message(), None);
        assert_eq!(builder.issues(), vec![(c, RangeIssue::InvalidMin)]);
    }
}
