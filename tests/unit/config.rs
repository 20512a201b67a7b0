use super::*;

#[test]
fn defaults_follow_reference_program() {
    let c = RenderConfig::default();
    assert_eq!((c.width, c.height), (200, 200));
    assert_eq!(c.sharpness, 0.07);
    assert_eq!(c.focus, 1.0);
    assert_eq!((c.depth, c.size), (12, 24));
    assert_eq!(c.frames, 60);
    assert_eq!(c.partitions, 4);
    assert!(!c.pattern && !c.gray);
    c.validate().unwrap();
}

#[test]
fn network_config_tracks_gray_flag() {
    let mut c = RenderConfig::default();
    assert_eq!(c.network_config().num_outputs, 3);
    c.gray = true;
    let n = c.network_config();
    assert_eq!(n.num_inputs, 5);
    assert_eq!(n.num_outputs, 1);
    assert_eq!(n.num_hidden_layers, 12);
    assert_eq!(n.num_hidden_neurons, 24);
}

#[test]
fn render_mode_tracks_flags() {
    let c = RenderConfig {
        pattern: true,
        gray: true,
        ..RenderConfig::default()
    };
    assert_eq!(
        c.render_mode(),
        RenderMode {
            features: FeatureMode::Pattern,
            color: ColorMode::Gray,
        }
    );
}

#[test]
fn validate_rejects_bad_values() {
    let base = RenderConfig::default();
    let cases = [
        RenderConfig {
            width: 0,
            ..base.clone()
        },
        RenderConfig {
            depth: 0,
            ..base.clone()
        },
        RenderConfig {
            size: 0,
            ..base.clone()
        },
        RenderConfig {
            sharpness: 0.0,
            ..base.clone()
        },
        RenderConfig {
            focus: f64::NAN,
            ..base.clone()
        },
        RenderConfig {
            pattern: true,
            density: -1.0,
            ..base.clone()
        },
        RenderConfig {
            frames: 0,
            ..base.clone()
        },
        RenderConfig {
            cycles: 0,
            ..base.clone()
        },
        RenderConfig {
            partitions: 0,
            ..base.clone()
        },
        RenderConfig {
            partitions: 4_294_900_000,
            ..base.clone()
        },
        RenderConfig {
            partitions: MAX_PARTITIONS + 1,
            ..base.clone()
        },
        RenderConfig {
            width: 2,
            height: 2,
            partitions: 5,
            ..base.clone()
        },
        RenderConfig {
            threads: Some(0),
            ..base.clone()
        },
    ];
    for c in cases {
        let err = c.validate().unwrap_err();
        assert!(matches!(err, LoopError::InvalidConfiguration(_)), "{c:?}");
    }
}

#[test]
fn partitions_up_to_limit_are_accepted() {
    let c = RenderConfig {
        partitions: MAX_PARTITIONS,
        ..RenderConfig::default()
    };
    c.validate().unwrap();
    assert_eq!(c.partition_grid().unwrap().count(), MAX_PARTITIONS as usize);
}

#[test]
fn density_is_ignored_without_pattern() {
    let c = RenderConfig {
        density: -1.0,
        ..RenderConfig::default()
    };
    c.validate().unwrap();
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let c = RenderConfig::from_reader(r#"{ "seed": 12345, "gray": true, "width": 32 }"#.as_bytes())
        .unwrap();
    assert_eq!(c.seed, 12345);
    assert!(c.gray);
    assert_eq!(c.width, 32);
    assert_eq!(c.height, 200);
}

#[test]
fn json_rejects_unknown_fields() {
    let err = RenderConfig::from_reader(r#"{ "colour": true }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, LoopError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = RenderConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, LoopError::InvalidConfiguration(_)));
}

#[test]
fn output_path_appends_gif_extension() {
    let c = RenderConfig {
        name: "waves".to_string(),
        ..RenderConfig::default()
    };
    assert_eq!(c.output_path("out"), Path::new("out").join("waves.gif"));
}
