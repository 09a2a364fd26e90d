use super::*;

#[test]
fn defaults_match_reference_behaviour() {
    let config = DeckConfig::default();
    assert_eq!(config.threshold_fraction, 0.25);
    assert_eq!(config.swipe_out_duration_millis, 100);
    assert_eq!(config.max_rotation_degrees, 90.0);
    assert_eq!(config.stack_offset, 10.0);
    assert!(config.reset_spring.damping_ratio < 1.0);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn derived_distances_follow_viewport() {
    let config = DeckConfig::default().with_viewport_width(400.0);
    assert_eq!(config.swipe_threshold(), 100.0);
    assert_eq!(config.swipe_out_distance(), 800.0);
}

#[test]
fn rejects_unusable_values() {
    assert_eq!(
        DeckConfig::default().with_viewport_width(0.0).validate(),
        Err(ConfigError::NonPositiveViewport { width: 0.0 })
    );
    assert!(matches!(
        DeckConfig::default().with_viewport_width(f32::NAN).validate(),
        Err(ConfigError::NonPositiveViewport { .. })
    ));
    assert_eq!(
        DeckConfig::default().with_threshold_fraction(1.5).validate(),
        Err(ConfigError::ThresholdOutOfRange { fraction: 1.5 })
    );
    assert_eq!(
        DeckConfig::default().with_threshold_fraction(0.0).validate(),
        Err(ConfigError::ThresholdOutOfRange { fraction: 0.0 })
    );
    assert_eq!(
        DeckConfig::default().with_stack_offset(-1.0).validate(),
        Err(ConfigError::NegativeStackOffset { offset: -1.0 })
    );
    assert_eq!(
        DeckConfig::default().with_max_rotation(f32::INFINITY).validate(),
        Err(ConfigError::InvalidRotation {
            degrees: f32::INFINITY
        })
    );
}

#[test]
fn errors_render_readably() {
    let message = ConfigError::ThresholdOutOfRange { fraction: 2.0 }.to_string();
    assert_eq!(message, "swipe threshold fraction must be in (0, 1], got 2");
}
