use super::*;
use crate::foundation::core::Vec2;

#[test]
fn insertion_order_is_paint_order() {
    let mut reg = SceneRegistry::new();
    let a = reg.add(DrawableObject::circle(1.0).unwrap());
    let b = reg.add(DrawableObject::square(1.0).unwrap());
    let c = reg.add(DrawableObject::text("t", 1.0).unwrap());
    assert_eq!(reg.ids(), &[a, b, c]);
    let kinds: Vec<ShapeKind> = reg.snapshot().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Text]
    );
}

#[test]
fn re_adding_keeps_paint_position() {
    let mut reg = SceneRegistry::new();
    let mut first = DrawableObject::circle(1.0).unwrap();
    let a = reg.add(first.clone());
    let b = reg.add(DrawableObject::circle(1.0).unwrap());

    first.move_to(Vec2::new(5.0, 0.0)).unwrap();
    assert_eq!(reg.add(first), a);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.ids(), &[a, b]);
    assert_eq!(reg.get(a).unwrap().position(), Vec2::new(5.0, 0.0));
}

#[test]
fn remove_and_lookup_of_unknown_ids_fail() {
    let mut reg = SceneRegistry::new();
    let a = reg.add(DrawableObject::circle(1.0).unwrap());
    let stray = DrawableObject::circle(1.0).unwrap().id();

    assert!(matches!(
        reg.remove(stray),
        Err(AnimaticError::UnregisteredObject(id)) if id == stray
    ));
    assert!(reg.get(stray).is_err());
    assert!(reg.get_mut(stray).is_err());

    let removed = reg.remove(a).unwrap();
    assert_eq!(removed.id(), a);
    assert!(!reg.contains(a));
    assert!(reg.is_empty());
}

#[test]
fn clear_drops_everything() {
    let mut reg = SceneRegistry::new();
    reg.add(DrawableObject::circle(1.0).unwrap());
    reg.add(DrawableObject::circle(2.0).unwrap());
    reg.clear();
    assert!(reg.is_empty());
    assert!(reg.snapshot().is_empty());
}

#[test]
fn object_snapshot_keeps_non_animatable_fields() {
    let text = DrawableObject::text("hello", 0.5).unwrap();
    let snap = ObjectSnapshot::of(&text);
    assert_eq!(snap.id, text.id());
    assert_eq!(snap.kind, ShapeKind::Text);
    assert!(matches!(&snap.shape, Shape::Text { content, .. } if content == "hello"));
    assert_eq!(snap.props, text.snapshot());

    let json = serde_json::to_string(&snap).unwrap();
    let back: ObjectSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
