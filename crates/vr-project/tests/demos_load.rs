use std::path::Path;

use vr_builder::ValueRangeBuilder;

fn demos_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/ranges")
}

#[test]
fn demos_load_and_validate() {
    for name in ["pump_temperature.yaml", "tank_level.json"] {
        let path = demos_dir().join(name);
        let document = vr_project::load_document(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        vr_project::validate_document(&document)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
    }
}

#[test]
fn pump_demo_is_sorted_and_valid() {
    let document = vr_project::load_yaml(&demos_dir().join("pump_temperature.yaml")).unwrap();
    let builder = ValueRangeBuilder::new(document.builder_config()).unwrap();

    let ids: Vec<&str> = builder.value_ranges().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["cold", "normal", "hot"]);
    assert!(builder.are_ranges_valid());
}

#[test]
fn tank_demo_edit_session_resolves_overlap() {
    let document = vr_project::load_json(&demos_dir().join("tank_level.json")).unwrap();
    let script = vr_project::load_action_script(&demos_dir().join("edit_session.yaml")).unwrap();

    let mut builder = ValueRangeBuilder::new(document.builder_config()).unwrap();
    // low and mid touch at 25
    assert!(builder.validation_map().overlap_found);

    let mut validity = Vec::new();
    vr_project::replay(&mut builder, &script, |_, _, b| validity.push(b.are_ranges_valid()));

    assert_eq!(validity, [false, false, false, true, true]);
    let high = builder.state().get(&"high".into()).unwrap();
    assert_eq!(high.color, "#1F78B4");
    assert_eq!(high.message.as_deref(), Some("Nearly full"));
}
