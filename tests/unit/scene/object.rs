use super::*;
use crate::scene::props::MIN_POSITIVE;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn ids_are_unique_and_survive_clone() {
    let a = DrawableObject::circle(1.0).unwrap();
    let b = DrawableObject::circle(1.0).unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.clone().id(), a.id());
    assert_eq!(a.id().to_string(), format!("#{}", a.id().get()));
}

#[test]
fn constructors_validate_geometry() {
    assert!(DrawableObject::circle(0.0).is_err());
    assert!(DrawableObject::circle(f64::NAN).is_err());
    assert!(DrawableObject::rectangle(1.0, -2.0).is_err());
    assert!(DrawableObject::square(0.0).is_err());
    assert!(DrawableObject::line(Vec2::ZERO, Vec2::new(f64::INFINITY, 0.0)).is_err());
    assert!(DrawableObject::text("hi", 0.0).is_err());
}

#[test]
fn square_is_an_equal_sided_rectangle() {
    let sq = DrawableObject::square(2.0).unwrap();
    assert_eq!(
        sq.shape(),
        &Shape::Rectangle {
            width: 2.0,
            height: 2.0
        }
    );
    assert_eq!(sq.kind(), ShapeKind::Rectangle);
}

#[test]
fn default_style_strokes_without_fill() {
    let c = DrawableObject::circle(1.0).unwrap();
    assert_eq!(c.color(), WHITE);
    assert_eq!(c.opacity(), 1.0);
    assert_eq!(c.style().fill_opacity, 0.0);
    assert_eq!(c.style().stroke_opacity, 1.0);

    let t = DrawableObject::text("abc", 0.5).unwrap();
    assert_eq!(t.style().fill_opacity, 1.0);
}

#[test]
fn mutators_apply_immediately() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    obj.move_to(Vec2::new(1.0, 2.0))
        .unwrap()
        .shift(Vec2::new(0.5, -1.0))
        .unwrap()
        .scale_by(2.0)
        .unwrap()
        .rotate_by(0.25)
        .unwrap();
    assert_eq!(obj.position(), Vec2::new(1.5, 1.0));
    assert_eq!(obj.scale(), 2.0);
    assert_eq!(obj.rotation(), 0.25);
}

#[test]
fn mutators_reject_or_clamp_bad_input() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    assert!(obj.scale_by(0.0).is_err());
    assert!(obj.scale_by(-1.0).is_err());
    assert!(obj.rotate_by(f64::NAN).is_err());
    assert!(obj.set_stroke_width(-0.1).is_err());
    assert_eq!(obj.scale(), 1.0);

    obj.set_opacity(1.7).unwrap();
    assert_eq!(obj.opacity(), 1.0);
    obj.set_fill_opacity(-0.3).unwrap();
    assert_eq!(obj.style().fill_opacity, 0.0);
    obj.set_color(Rgb::from_unit(2.0, 0.5, -1.0)).unwrap();
    assert_eq!(obj.color(), Rgb::from_unit(1.0, 0.5, 0.0));
}

#[test]
fn builder_helpers_only_fit_their_shape() {
    assert!(
        DrawableObject::circle(1.0)
            .unwrap()
            .with_tip(0.3, 0.2)
            .is_err()
    );
    assert!(
        DrawableObject::circle(1.0)
            .unwrap()
            .with_font("Serif", true)
            .is_err()
    );
    let t = DrawableObject::text("x", 1.0)
        .unwrap()
        .with_font("Serif", true)
        .unwrap();
    let Shape::Text {
        font_family, bold, ..
    } = t.shape()
    else {
        panic!("expected text");
    };
    assert_eq!(font_family, "Serif");
    assert!(*bold);
}

#[test]
fn bounding_box_follows_scale_and_position() {
    let obj = DrawableObject::rectangle(2.0, 1.0)
        .unwrap()
        .at(Vec2::new(3.0, -1.0))
        .unwrap();
    let mut obj = obj;
    obj.scale_by(2.0).unwrap();
    let bb = obj.bounding_box();
    assert!(approx(bb.x0, 1.0));
    assert!(approx(bb.x1, 5.0));
    assert!(approx(bb.y0, -2.0));
    assert!(approx(bb.y1, 0.0));
}

#[test]
fn bounding_box_of_rotated_square_grows() {
    let mut sq = DrawableObject::square(2.0).unwrap();
    sq.rotate_by(std::f64::consts::FRAC_PI_4).unwrap();
    let bb = sq.bounding_box();
    assert!(approx(bb.width(), 2.0 * 2f64.sqrt()));
    assert!(approx(bb.height(), 2.0 * 2f64.sqrt()));
}

#[test]
fn text_bounds_estimate_width_from_chars() {
    let t = DrawableObject::text("abcd", 0.5).unwrap();
    let bb = t.shape().local_bounds();
    assert!(approx(bb.width(), 4.0 * 0.5 * 0.6));
    assert!(approx(bb.height(), 0.5));
}

#[test]
fn arrow_tip_is_symmetric_behind_the_end() {
    let [l, r] = arrow_tip(Vec2::ZERO, Vec2::new(2.0, 0.0), 0.5, 0.25).unwrap();
    assert!(approx(l.x, 1.5) && approx(l.y, 0.25));
    assert!(approx(r.x, 1.5) && approx(r.y, -0.25));
    assert!(arrow_tip(Vec2::ZERO, Vec2::ZERO, 0.5, 0.25).is_none());

    let arrow = DrawableObject::arrow(Vec2::ZERO, Vec2::new(2.0, 0.0)).unwrap();
    let bb = arrow.shape().local_bounds();
    assert!(approx(bb.y0, -0.15) && approx(bb.y1, 0.15));
}

#[test]
fn snapshot_carries_shape_parameters() {
    let c = DrawableObject::circle(1.5).unwrap();
    let s = c.snapshot();
    assert_eq!(s.scalar(PropertyKey::Radius), Some(1.5));
    assert_eq!(s.get(PropertyKey::Width), None);

    let l = DrawableObject::line(Vec2::ZERO, Vec2::new(1.0, 1.0)).unwrap();
    let s = l.snapshot();
    assert_eq!(s.vector(PropertyKey::End), Some(Vec2::new(1.0, 1.0)));
    assert_eq!(s.get(PropertyKey::Radius), None);
}

#[test]
fn apply_snapshot_round_trips_state() {
    let mut a = DrawableObject::circle(1.0).unwrap();
    let mut b = DrawableObject::circle(2.0).unwrap();
    b.move_to(Vec2::new(4.0, 4.0)).unwrap().set_opacity(0.5).unwrap();

    a.apply_snapshot(&b.snapshot()).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
    assert_ne!(a.id(), b.id());
}

#[test]
fn set_property_enforces_domains() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    obj.set_property(PropertyKey::Scale, PropertyValue::Scalar(-2.0))
        .unwrap();
    assert_eq!(obj.scale(), MIN_POSITIVE);
    obj.set_property(PropertyKey::Opacity, PropertyValue::Scalar(1.2))
        .unwrap();
    assert_eq!(obj.opacity(), 1.0);
}

#[test]
fn set_property_rejects_foreign_keys() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    let err = obj
        .set_property(PropertyKey::Width, PropertyValue::Scalar(1.0))
        .unwrap_err();
    assert!(matches!(err, AnimaticError::PropertyMismatch(_)));
    let err = obj
        .set_property(PropertyKey::Position, PropertyValue::Scalar(1.0))
        .unwrap_err();
    assert!(matches!(err, AnimaticError::PropertyMismatch(_)));
}

#[test]
fn with_color_clamps_channels_and_rejects_nan() {
    let obj = DrawableObject::circle(1.0)
        .unwrap()
        .with_color(Rgb::from_unit(5.0, -2.0, 0.5))
        .unwrap();
    assert_eq!(obj.color(), Rgb::from_unit(1.0, 0.0, 0.5));
    assert_eq!(obj.snapshot().color(PropertyKey::Color), Some(obj.color()));

    let err = DrawableObject::square(1.0)
        .unwrap()
        .with_color(Rgb::from_unit(0.2, f64::NAN, 0.2))
        .unwrap_err();
    assert!(matches!(err, AnimaticError::InvalidParameter(_)));
}

#[test]
fn scale_by_rejects_a_product_that_underflows() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    obj.scale_by(1e-200).unwrap();
    assert!(matches!(
        obj.scale_by(1e-200),
        Err(AnimaticError::InvalidParameter(_))
    ));
    assert_eq!(obj.scale(), 1e-200);
}

#[test]
fn scale_by_rejects_a_product_that_overflows() {
    let mut obj = DrawableObject::circle(1.0).unwrap();
    obj.scale_by(1e200).unwrap();
    assert!(matches!(
        obj.scale_by(1e200),
        Err(AnimaticError::InvalidParameter(_))
    ));
    assert_eq!(obj.scale(), 1e200);
    assert!(obj.bounding_box().is_finite());
}
