use super::*;

#[test]
fn every_curve_is_pinned_at_endpoints() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?} at 0");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?} at 1");
    }
}

#[test]
fn input_outside_unit_interval_is_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-0.5), 0.0);
        assert_eq!(ease.apply(1.5), 1.0);
    }
}

#[test]
fn linear_is_identity() {
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert_eq!(Ease::Linear.apply(t), t);
    }
}

#[test]
fn in_out_curves_are_symmetric_at_half() {
    for ease in [
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::InOutSine,
        Ease::InOutBack,
        Ease::Smooth,
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn non_back_curves_are_monotonic_and_bounded() {
    for ease in Ease::ALL.into_iter().filter(|e| !e.overshoots()) {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!((0.0..=1.0).contains(&v), "{ease:?} left [0, 1]: {v}");
            assert!(v >= prev - 1e-12, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn back_family_overshoots() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
    assert!(Ease::InOutBack.apply(0.1) < 0.0);
    assert!(Ease::InOutBack.apply(0.9) > 1.0);
    assert!(Ease::OutBack.overshoots());
    assert!(!Ease::Smooth.overshoots());
}

#[test]
fn smooth_has_flat_ends() {
    let h = 1e-4;
    assert!(Ease::Smooth.apply(h) / h < 1e-3);
    assert!((1.0 - Ease::Smooth.apply(1.0 - h)) / h < 1e-3);
}

#[test]
fn parses_names_and_aliases() {
    for ease in Ease::ALL {
        assert_eq!(ease.name().parse::<Ease>().unwrap(), ease);
    }
    assert_eq!("in-out-cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert_eq!("ease_in_out_sine".parse::<Ease>().unwrap(), Ease::InOutSine);
    assert_eq!(" Smooth ".parse::<Ease>().unwrap(), Ease::Smooth);
    assert!(matches!(
        "wobble".parse::<Ease>(),
        Err(AnimaticError::InvalidParameter(_))
    ));
}

#[test]
fn serde_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&Ease::InOutBack).unwrap(),
        "\"in_out_back\""
    );
    assert_eq!(Ease::default(), Ease::Linear);
}
