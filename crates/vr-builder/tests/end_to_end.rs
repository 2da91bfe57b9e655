use std::cell::RefCell;
use std::rc::Rc;

use vr_builder::*;
use vr_core::RangeId;

#[test]
fn add_then_update_into_overlap_reports_invalid() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut builder = ValueRangeBuilder::new(BuilderConfig {
        initial_ranges: vec![ValueRange::new("a", "0", "10", "#C32F27")],
        ..Default::default()
    })
    .unwrap()
    .with_listener(move |valid| sink.borrow_mut().push(valid));

    let b = RangeId::from("b");
    builder.dispatch(Action::Add {
        id: b.clone(),
        color: next_color(builder.value_ranges(), &builder.state().color_swatch),
    });
    builder.dispatch(Action::Update {
        id: b.clone(),
        field: RangeField::Min,
        value: "5".to_string(),
    });
    builder.dispatch(Action::Update {
        id: b.clone(),
        field: RangeField::Max,
        value: "15".to_string(),
    });

    let map = builder.validation_map();
    for id in [RangeId::from("a"), b.clone()] {
        let entry = map.get(&id).unwrap();
        assert!(entry.is_distinctly_valid(), "{id} should be valid");
    }
    assert!(detect_overlap(builder.value_ranges(), map));
    assert_eq!(seen.borrow().last(), Some(&false));
    assert!(!builder.are_ranges_valid());
    assert_eq!(builder.overlap_message(), Some(OVERLAP_MESSAGE));
}

#[test]
fn fixing_overlap_flips_listener_back_to_valid() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let mut builder = ValueRangeBuilder::new(BuilderConfig {
        initial_ranges: vec![
            ValueRange::new("a", "0", "10", "#1"),
            ValueRange::new("b", "10", "20", "#2"),
        ],
        ..Default::default()
    })
    .unwrap()
    .with_listener(move |valid| sink.borrow_mut().push(valid));

    builder
        .update_range(&"b".into(), RangeField::Min, "11")
        .unwrap();

    assert_eq!(*seen.borrow(), [false, true]);
}

#[test]
fn query_surface_returns_numeric_bounds_in_sorted_order() {
    let builder = ValueRangeBuilder::new(BuilderConfig {
        initial_ranges: vec![
            ValueRange::new("hot", "50", "100", "#F00").with_message("Too hot"),
            ValueRange::new("ok", "5", "10", "#0F0"),
        ],
        ..Default::default()
    })
    .unwrap();

    let ranges = builder.get_value_ranges();
    assert_eq!(ranges[0].id.as_str(), "ok");
    assert_eq!((ranges[0].min, ranges[0].max), (5.0, 10.0));
    assert_eq!(ranges[1].message.as_deref(), Some("Too hot"));
}

#[test]
fn fresh_range_reads_back_as_nan() {
    let mut builder = ValueRangeBuilder::new(BuilderConfig::default()).unwrap();
    let id = builder.add_range().unwrap();
    let ranges = builder.get_value_ranges();
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0].id, id);
    assert!(ranges[0].min.is_nan() && ranges[0].max.is_nan());
    assert_eq!(ranges[0].color, DEFAULT_SWATCH[0]);
}
