use super::*;
use crate::animation::anim::{Animation, AnimationPhase};
use crate::foundation::constants::{BLUE, RED};
use crate::foundation::error::AnimaticError;
use crate::scene::registry::SceneRegistry;

fn registry_with(obj: DrawableObject) -> (SceneRegistry, ObjectId) {
    let mut reg = SceneRegistry::new();
    let id = reg.add(obj);
    (reg, id)
}

#[test]
fn constructors_validate_arguments() {
    let id = DrawableObject::circle(1.0).unwrap().id();
    assert!(Tween::scale(id, 0.0).is_err());
    assert!(Tween::scale(id, -2.0).is_err());
    assert!(Tween::rotate(id, f64::INFINITY).is_err());
    assert!(Tween::move_to(id, Vec2::new(f64::NAN, 0.0)).is_err());
    assert!(Tween::color_change(id, Rgb::from_unit(f64::NAN, 0.0, 0.0)).is_err());

    let Ok(tw) = Tween::opacity_change(id, 3.0) else {
        panic!("opacity is clamped, not rejected");
    };
    assert!(matches!(tw.kind(), AnimationKind::OpacityChange(o) if *o == 1.0));
}

#[test]
fn fade_in_starts_transparent() {
    let (mut reg, id) = registry_with(DrawableObject::circle(1.0).unwrap());
    let mut tw = Tween::fade_in(id);
    tw.interpolate(0.0, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().opacity(), 0.0);
    tw.interpolate(0.5, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().opacity(), 0.5);
    tw.interpolate(1.0, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().opacity(), 1.0);
}

#[test]
fn fade_out_goes_from_current_opacity() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    obj.set_opacity(0.8).unwrap();
    let (mut reg, id) = registry_with(obj);
    let mut tw = Tween::fade_out(id);
    tw.interpolate(0.5, &mut reg).unwrap();
    assert!((reg.get(id).unwrap().opacity() - 0.4).abs() < 1e-12);
    tw.interpolate(1.0, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().opacity(), 0.0);
}

#[test]
fn color_change_blends_channels() {
    let (mut reg, id) = registry_with(DrawableObject::circle(1.0).unwrap().with_color(RED).unwrap());
    let mut tw = Tween::color_change(id, BLUE).unwrap();
    tw.interpolate(0.5, &mut reg).unwrap();
    let c = reg.get(id).unwrap().color();
    assert!((c.r - 0.5).abs() < 1e-12 && (c.b - 0.5).abs() < 1e-12);
    assert_eq!(c.g, 0.0);
}

#[test]
fn shift_and_rotate_are_relative_to_arming_state() {
    let obj = DrawableObject::square(1.0)
        .unwrap()
        .at(Vec2::new(1.0, 1.0))
        .unwrap();
    let (mut reg, id) = registry_with(obj);
    let mut shift = Tween::shift(id, Vec2::new(2.0, -1.0)).unwrap();
    shift.interpolate(1.0, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().position(), Vec2::new(3.0, 0.0));

    let mut rot = Tween::rotate(id, std::f64::consts::PI).unwrap();
    rot.interpolate(0.5, &mut reg).unwrap();
    assert!((reg.get(id).unwrap().rotation() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn scale_tween_never_leaves_positive_domain() {
    let (mut reg, id) = registry_with(DrawableObject::circle(1.0).unwrap());
    let mut tw = Tween::scale(id, 0.5).unwrap();
    // Overshoot past the end: 1 + (0.5 - 1) * 3 = -0.5 before the domain rule.
    tw.interpolate(3.0, &mut reg).unwrap();
    assert!(reg.get(id).unwrap().scale() > 0.0);
}

#[test]
fn transform_morphs_into_target_properties() {
    let (mut reg, id) = registry_with(DrawableObject::circle(1.0).unwrap());
    let into = DrawableObject::circle(3.0)
        .unwrap()
        .with_color(BLUE)
        .unwrap()
        .at(Vec2::new(2.0, 2.0))
        .unwrap();
    let expected = into.snapshot();
    let mut tw = Tween::transform(id, into);

    tw.interpolate(0.5, &mut reg).unwrap();
    assert_eq!(
        reg.get(id).unwrap().snapshot().scalar(crate::scene::props::PropertyKey::Radius),
        Some(2.0)
    );
    tw.interpolate(1.0, &mut reg).unwrap();
    assert_eq!(reg.get(id).unwrap().snapshot(), expected);
    assert_eq!(tw.phase(), AnimationPhase::Done);
}

#[test]
fn transform_across_shape_kinds_is_a_mismatch() {
    let (mut reg, id) = registry_with(DrawableObject::circle(1.0).unwrap());
    let before = reg.get(id).unwrap().snapshot();
    let mut tw = Tween::transform(id, DrawableObject::square(1.0).unwrap());
    let err = tw.interpolate(0.5, &mut reg).unwrap_err();
    assert!(matches!(err, AnimaticError::PropertyMismatch(_)));
    assert_eq!(reg.get(id).unwrap().snapshot(), before);
    assert_eq!(tw.phase(), AnimationPhase::Unstarted);
}

#[test]
fn unit_alpha_kinds() {
    assert!(AnimationKind::FadeIn.requires_unit_alpha());
    assert!(AnimationKind::ColorChange(RED).requires_unit_alpha());
    assert!(!AnimationKind::Move(Vec2::ZERO).requires_unit_alpha());
    assert!(!AnimationKind::Replay(Vec::new()).requires_unit_alpha());
    assert_eq!(AnimationKind::Replay(Vec::new()).name(), "animate");
}
