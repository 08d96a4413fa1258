use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::new(30, 1).unwrap().as_f64(), 30.0);
}

#[test]
fn fps_frame_duration_and_secs() {
    let fps = Fps::new(30000, 1001).unwrap();
    assert!((fps.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-15);
    let fps = Fps::new(10, 1).unwrap();
    assert!((fps.frames_to_secs(25) - 2.5).abs() < 1e-12);
}

#[test]
fn steps_round_and_never_drop_below_one() {
    let fps = Fps::new(10, 1).unwrap();
    assert_eq!(fps.steps_for_secs(1.0), 10);
    assert_eq!(fps.steps_for_secs(0.26), 3);
    assert_eq!(fps.steps_for_secs(0.0), 1);
    assert_eq!(fps.steps_for_secs(0.01), 1);
}

#[test]
fn defaults_match_presets() {
    assert_eq!(Fps::default(), Fps { num: 60, den: 1 });
    assert_eq!(
        Canvas::default(),
        Canvas {
            width: 1920,
            height: 1080
        }
    );
}

#[test]
fn rgb_new_clamps_and_rejects_non_finite() {
    let c = Rgb::new(1.5, -0.2, 0.25).unwrap();
    assert_eq!(c, Rgb::from_unit(1.0, 0.0, 0.25));
    assert!(Rgb::new(f64::NAN, 0.0, 0.0).is_err());
    assert!(Rgb::new(0.0, f64::INFINITY, 0.0).is_err());
}

#[test]
fn rgb_to_rgb8_rounds() {
    assert_eq!(Rgb::from_unit(1.0, 0.5, 0.0).to_rgb8(), [255, 128, 0]);
}

#[test]
fn ensure_helpers_reject_bad_values() {
    assert!(ensure_finite("x", f64::NAN).is_err());
    assert_eq!(ensure_finite("x", -3.0).unwrap(), -3.0);
    assert!(ensure_finite_vec("v", Vec2::new(0.0, f64::INFINITY)).is_err());
    assert!(ensure_positive("s", 0.0).is_err());
    assert!(ensure_positive("s", -1.0).is_err());
    assert_eq!(ensure_positive("s", 2.0).unwrap(), 2.0);

    let err = ensure_positive("scale factor", 0.0).unwrap_err();
    assert!(matches!(err, AnimaticError::InvalidParameter(_)));
    assert!(err.to_string().contains("scale factor"));
}
