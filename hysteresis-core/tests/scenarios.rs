//! End-to-end scenarios: configuration → geometry → gesture → report.

use hysteresis_core::layout::FontSizeMetrics;
use hysteresis_core::{
    ControlConfig, DragState, Geometry, HysteresisControl, Point, Range, Scene, Viewport,
};

fn thermostat() -> ControlConfig {
    ControlConfig::from_toml_str(
        r#"
        step = 5
        unit = "°C"

        [bounds]
        min = 0
        max = 50

        [initial]
        min = 10
        max = 40
        "#,
    )
    .unwrap()
}

fn mount(config: &ControlConfig) -> (HysteresisControl, Geometry) {
    let config = config.normalized();
    let geometry = Geometry::compute(&config, Viewport::new(540.0, 200.0), &FontSizeMetrics);
    let control = HysteresisControl::new(config.value_bounds(), config.initial);
    (control, geometry)
}

#[test]
fn eleven_ticks_from_zero_to_fifty() {
    let (_, geometry) = mount(&thermostat());
    let values: Vec<f64> = geometry.ticks().into_iter().map(|t| t.value).collect();
    assert_eq!(values.len(), 11);
    for (i, v) in values.iter().enumerate() {
        assert_eq!(*v, i as f64 * 5.0);
    }
}

#[test]
fn dragging_max_to_thirty_seven_snaps_to_thirty_five() {
    let (mut control, geometry) = mount(&thermostat());
    let start = geometry.knob_center(40.0);
    assert_eq!(control.begin(&geometry, start), DragState::DraggingMax);
    control.update(&geometry, Point::new(geometry.value_to_x(37.0), start.y));
    assert_eq!(control.end(), Some(Range::new(10.0, 35.0)));
}

#[test]
fn dragging_min_past_max_is_rejected() {
    let (mut control, geometry) = mount(&thermostat());
    control.begin(&geometry, geometry.knob_center(10.0));
    let changed = control.update(&geometry, Point::new(geometry.value_to_x(45.0), 0.0));
    assert!(!changed);
    assert_eq!(control.range().min, 10.0);
    assert_eq!(control.end(), Some(Range::new(10.0, 40.0)));
}

#[test]
fn collapsed_bounds_render_and_never_drag() {
    let mut config = thermostat();
    config.bounds = Range::new(20.0, 20.0);
    let (mut control, geometry) = mount(&config);

    assert!(geometry.is_degenerate());
    assert_eq!(geometry.axis_len, 0.0);
    let scene = Scene::build(
        &config,
        &geometry,
        control.range(),
        control.drag_state(),
        &FontSizeMetrics,
    );
    assert!(!scene.is_empty());

    assert_eq!(control.begin(&geometry, geometry.knob_center(20.0)), DragState::Idle);
    assert!(!control.update(&geometry, Point::new(400.0, geometry.control_y)));
    assert_eq!(control.end(), None);
    assert_eq!(control.range(), Range::new(20.0, 20.0));
}

#[test]
fn one_report_per_gesture_with_last_accepted_values() {
    let (mut control, geometry) = mount(&thermostat());
    let mut reports = Vec::new();

    for target in [15.0, 20.0, 25.0] {
        let start = geometry.knob_center(control.range().min);
        control.begin(&geometry, start);
        control.update(&geometry, Point::new(geometry.value_to_x(target - 5.0), start.y));
        control.update(&geometry, Point::new(geometry.value_to_x(target), start.y));
        if let Some(range) = control.end() {
            reports.push(range);
        }
    }

    assert_eq!(
        reports,
        vec![
            Range::new(15.0, 40.0),
            Range::new(20.0, 40.0),
            Range::new(25.0, 40.0),
        ]
    );
}

#[test]
fn zero_step_is_handled_without_panicking() {
    let mut config = thermostat();
    config.step = 0.0;
    let (mut control, geometry) = mount(&config);
    assert!(geometry.is_degenerate());
    assert_eq!(geometry.ticks().len(), 1);
    assert_eq!(control.begin(&geometry, geometry.knob_center(10.0)), DragState::Idle);
}

#[test]
fn config_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("control.toml");
    std::fs::write(&path, thermostat().to_toml_string().unwrap()).unwrap();
    let loaded = ControlConfig::load(&path).unwrap();
    assert_eq!(loaded, thermostat());
}

#[test]
fn geometry_and_report_serialize_as_json() {
    let (mut control, geometry) = mount(&thermostat());

    let json = serde_json::to_value(&geometry).unwrap();
    assert_eq!(json["step_count"], 10);
    assert_eq!(json["viewport"]["width"], 540.0);
    assert_eq!(json["line_space"], 50.0);
    assert!(json.get("bounds").is_none());

    let start = geometry.knob_center(40.0);
    control.begin(&geometry, start);
    control.update(&geometry, Point::new(geometry.value_to_x(45.0), start.y));
    let reported = control.end().unwrap();
    let text = serde_json::to_string(&reported).unwrap();
    let back: Range = serde_json::from_str(&text).unwrap();
    assert_eq!(back, Range::new(10.0, 45.0));
}
