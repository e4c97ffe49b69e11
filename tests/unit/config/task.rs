use super::*;
use crate::animation::ease::Ease;
use crate::catalog::shape::ShapeKind;

#[test]
fn defaults_are_valid() {
    let cfg = TaskConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.animation.frames_per_phase, 25);
    assert_eq!(cfg.catalog.shapes.len(), 10);
    assert!(cfg.sampler.unique);
}

#[test]
fn empty_object_uses_defaults() {
    let cfg = TaskConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg.domain, "shape_two_step");
    assert_eq!(cfg.canvas.width, 640);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let json = r##"{
        "canvas": {"width": 320, "height": 240},
        "animation": {"frames_per_phase": 5, "ease": "in_out_quad"},
        "video": {"enabled": false, "fps": 24},
        "catalog": {
            "shapes": ["circle", "square"],
            "color_pairs": [["blue", "red"]],
            "scale_pairs": [["small", "large"]]
        }
    }"##;
    let cfg = TaskConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.animation.frames_per_phase, 5);
    assert_eq!(cfg.animation.hold_frames, 20);
    assert_eq!(cfg.animation.ease, Ease::InOutQuad);
    assert!(!cfg.video.enabled);
    assert_eq!(cfg.video.fps.num, 24);
    assert_eq!(cfg.catalog.shapes, vec![ShapeKind::Circle, ShapeKind::Square]);
    assert_eq!(cfg.catalog().unwrap().transformation_count(), 1);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = TaskConfig::from_reader(r#"{"colour": 1}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, TwostepError::Config(_)));
}

#[test]
fn load_time_validation_catches_static_errors() {
    let bad_catalog = r#"{"catalog": {"shapes": ["circle"]}}"#;
    assert!(TaskConfig::from_reader(bad_catalog.as_bytes()).is_err());

    let odd_canvas = r#"{"canvas": {"width": 641, "height": 400}}"#;
    assert!(TaskConfig::from_reader(odd_canvas.as_bytes()).is_err());

    let zero_fps = r#"{"video": {"fps": 0}}"#;
    assert!(TaskConfig::from_reader(zero_fps.as_bytes()).is_err());

    let zero_hold = r#"{"animation": {"hold_frames": 0}}"#;
    assert!(TaskConfig::from_reader(zero_hold.as_bytes()).is_err());

    let noop_pair = r#"{"catalog": {"color_pairs": [["red", "red"]]}}"#;
    assert!(TaskConfig::from_reader(noop_pair.as_bytes()).is_err());
}

#[test]
fn domain_and_geometry_checks() {
    let cfg = TaskConfig {
        domain: "bad/domain".to_owned(),
        ..TaskConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = TaskConfig {
        margin: 400,
        ..TaskConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = TaskConfig {
        shape_size: 0,
        ..TaskConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn zero_fps_set_in_code_is_rejected() {
    let mut cfg = TaskConfig::default();
    cfg.video.fps = Fps { num: 0, den: 1 };
    assert!(matches!(cfg.validate(), Err(TwostepError::Config(_))));

    cfg.video.fps = Fps { num: 10, den: 0 };
    assert!(cfg.validate().is_err());

    // Checked whether or not video output is enabled.
    cfg.video.enabled = false;
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = TaskConfig::from_path("target/does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open config JSON"));
}
