use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    animation::builder::AnimateBuilder,
    foundation::constants::WHITE,
    foundation::core::{
        Affine, Point, Rect, Rgb, Vec2, ensure_finite, ensure_finite_vec, ensure_positive,
    },
    foundation::error::{AnimaticError, AnimaticResult},
    scene::props::{PropertyKey, PropertyValue, StateSnapshot},
};

/// Stable identity of a drawable object, usable as a map key.
///
/// Ids are allocated from a process-wide counter when an object is constructed and survive
/// cloning, so a structural copy of an object still refers to the same scene entity.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ObjectId(u64);

impl ObjectId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Start a deferred animation of the object with this id.
    pub fn animate(self) -> AnimateBuilder {
        AnimateBuilder::new(self)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape-specific local geometry. Every shape is centered on its local origin.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Circle of `radius`.
    Circle {
        /// Radius in world units.
        radius: f64,
    },
    /// Axis-aligned rectangle (before rotation).
    Rectangle {
        /// Width in world units.
        width: f64,
        /// Height in world units.
        height: f64,
    },
    /// Straight segment.
    Line {
        /// Local start point.
        start: Vec2,
        /// Local end point.
        end: Vec2,
    },
    /// Segment with an open arrowhead at `end`.
    Arrow {
        /// Local start point.
        start: Vec2,
        /// Local end point (tip).
        end: Vec2,
        /// Tip length along the shaft.
        tip_length: f64,
        /// Tip half-width.
        tip_width: f64,
    },
    /// Single line of text.
    Text {
        /// Text content.
        content: String,
        /// Font size in world units.
        font_size: f64,
        /// Font family name.
        font_family: String,
        /// Bold weight.
        bold: bool,
    },
}

/// Tag identifying a [`Shape`] variant without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// [`Shape::Circle`].
    Circle,
    /// [`Shape::Rectangle`].
    Rectangle,
    /// [`Shape::Line`].
    Line,
    /// [`Shape::Arrow`].
    Arrow,
    /// [`Shape::Text`].
    Text,
}

const TEXT_ADVANCE_EM: f64 = 0.6;

impl Shape {
    /// Variant tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Line { .. } => ShapeKind::Line,
            Self::Arrow { .. } => ShapeKind::Arrow,
            Self::Text { .. } => ShapeKind::Text,
        }
    }

    /// Axis-aligned bounds in local (untransformed) space.
    pub fn local_bounds(&self) -> Rect {
        match self {
            Self::Circle { radius } => Rect::new(-radius, -radius, *radius, *radius),
            Self::Rectangle { width, height } => {
                Rect::from_center_size(Point::ORIGIN, (*width, *height))
            }
            Self::Line { start, end } => Rect::from_points(start.to_point(), end.to_point()),
            Self::Arrow {
                start,
                end,
                tip_length,
                tip_width,
            } => {
                let shaft = Rect::from_points(start.to_point(), end.to_point());
                arrow_tip(*start, *end, *tip_length, *tip_width)
                    .into_iter()
                    .flatten()
                    .fold(shaft, |r, p| r.union_pt(p.to_point()))
            }
            // No font metrics at this layer: estimate with a fixed advance per char.
            Self::Text {
                content, font_size, ..
            } => {
                let width = content.chars().count() as f64 * font_size * TEXT_ADVANCE_EM;
                Rect::from_center_size(Point::ORIGIN, (width, *font_size))
            }
        }
    }

    fn write_params(&self, out: &mut StateSnapshot) {
        use PropertyKey as K;
        use PropertyValue as V;
        match self {
            Self::Circle { radius } => out.insert(K::Radius, V::Scalar(*radius)),
            Self::Rectangle { width, height } => {
                out.insert(K::Width, V::Scalar(*width));
                out.insert(K::Height, V::Scalar(*height));
            }
            Self::Line { start, end } => {
                out.insert(K::Start, V::Vector(*start));
                out.insert(K::End, V::Vector(*end));
            }
            Self::Arrow {
                start,
                end,
                tip_length,
                tip_width,
            } => {
                out.insert(K::Start, V::Vector(*start));
                out.insert(K::End, V::Vector(*end));
                out.insert(K::TipLength, V::Scalar(*tip_length));
                out.insert(K::TipWidth, V::Scalar(*tip_width));
            }
            Self::Text { font_size, .. } => out.insert(K::FontSize, V::Scalar(*font_size)),
        }
    }

    fn param_mut(&mut self, key: PropertyKey) -> Option<ParamSlot<'_>> {
        use PropertyKey as K;
        match (self, key) {
            (Self::Circle { radius }, K::Radius) => Some(ParamSlot::Scalar(radius)),
            (Self::Rectangle { width, .. }, K::Width) => Some(ParamSlot::Scalar(width)),
            (Self::Rectangle { height, .. }, K::Height) => Some(ParamSlot::Scalar(height)),
            (Self::Line { start, .. } | Self::Arrow { start, .. }, K::Start) => {
                Some(ParamSlot::Vector(start))
            }
            (Self::Line { end, .. } | Self::Arrow { end, .. }, K::End) => {
                Some(ParamSlot::Vector(end))
            }
            (Self::Arrow { tip_length, .. }, K::TipLength) => Some(ParamSlot::Scalar(tip_length)),
            (Self::Arrow { tip_width, .. }, K::TipWidth) => Some(ParamSlot::Scalar(tip_width)),
            (Self::Text { font_size, .. }, K::FontSize) => Some(ParamSlot::Scalar(font_size)),
            _ => None,
        }
    }
}

enum ParamSlot<'a> {
    Scalar(&'a mut f64),
    Vector(&'a mut Vec2),
}

/// Left and right corners of an arrowhead ending at `end`.
///
/// Degenerate (zero-length) arrows have no tip.
pub fn arrow_tip(start: Vec2, end: Vec2, tip_length: f64, tip_width: f64) -> Option<[Vec2; 2]> {
    let dir = end - start;
    let len = dir.hypot();
    if len <= 0.0 {
        return None;
    }
    let dir = dir / len;
    let perp = Vec2::new(-dir.y, dir.x);
    let base = end - dir * tip_length;
    Some([base + perp * tip_width, base - perp * tip_width])
}

/// Fill and stroke styling of an object.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Base color used for both fill and stroke.
    pub color: Rgb,
    /// Overall opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Fill opacity in `[0, 1]`; zero disables the fill.
    pub fill_opacity: f64,
    /// Stroke opacity in `[0, 1]`; zero disables the stroke.
    pub stroke_opacity: f64,
    /// Stroke width in world units.
    pub stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: WHITE,
            opacity: 1.0,
            fill_opacity: 0.0,
            stroke_opacity: 1.0,
            stroke_width: 0.04,
        }
    }
}

/// A scene entity: local geometry plus a mutable property bag.
///
/// All mutators validate their input and apply the change immediately. They are the unanimated
/// forms used by authoring code and by the animate builder's replay.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawableObject {
    id: ObjectId,
    shape: Shape,
    position: Vec2,
    scale: f64,
    rotation: f64,
    style: Style,
}

impl DrawableObject {
    fn with_shape(shape: Shape) -> Self {
        Self {
            id: ObjectId::next(),
            shape,
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            style: Style::default(),
        }
    }

    /// Circle of `radius` at the origin.
    pub fn circle(radius: f64) -> AnimaticResult<Self> {
        let radius = ensure_positive("circle radius", radius)?;
        Ok(Self::with_shape(Shape::Circle { radius }))
    }

    /// Rectangle of `width` x `height` centered at the origin.
    pub fn rectangle(width: f64, height: f64) -> AnimaticResult<Self> {
        let width = ensure_positive("rectangle width", width)?;
        let height = ensure_positive("rectangle height", height)?;
        Ok(Self::with_shape(Shape::Rectangle { width, height }))
    }

    /// Square with sides of `side`.
    pub fn square(side: f64) -> AnimaticResult<Self> {
        Self::rectangle(side, side)
    }

    /// Segment from `start` to `end` in local space.
    pub fn line(start: Vec2, end: Vec2) -> AnimaticResult<Self> {
        let start = ensure_finite_vec("line start", start)?;
        let end = ensure_finite_vec("line end", end)?;
        Ok(Self::with_shape(Shape::Line { start, end }))
    }

    /// Arrow from `start` to `end` with the default tip size.
    pub fn arrow(start: Vec2, end: Vec2) -> AnimaticResult<Self> {
        let start = ensure_finite_vec("arrow start", start)?;
        let end = ensure_finite_vec("arrow end", end)?;
        Ok(Self::with_shape(Shape::Arrow {
            start,
            end,
            tip_length: 0.2,
            tip_width: 0.15,
        }))
    }

    /// Text in the default sans family.
    pub fn text(content: impl Into<String>, font_size: f64) -> AnimaticResult<Self> {
        let font_size = ensure_positive("font size", font_size)?;
        let mut obj = Self::with_shape(Shape::Text {
            content: content.into(),
            font_size,
            font_family: "Sans".to_owned(),
            bold: false,
        });
        obj.style.fill_opacity = 1.0;
        Ok(obj)
    }

    /// Place the object at `position`.
    pub fn at(mut self, position: Vec2) -> AnimaticResult<Self> {
        self.move_to(position)?;
        Ok(self)
    }

    /// Set the base color, clamping every channel into `[0, 1]`.
    pub fn with_color(mut self, color: Rgb) -> AnimaticResult<Self> {
        self.set_color(color)?;
        Ok(self)
    }

    /// Set the fill opacity (clamped into `[0, 1]`).
    pub fn with_fill_opacity(mut self, opacity: f64) -> AnimaticResult<Self> {
        self.set_fill_opacity(opacity)?;
        Ok(self)
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> AnimaticResult<Self> {
        self.set_stroke_width(width)?;
        Ok(self)
    }

    /// Set the arrowhead size. Fails on anything but an arrow.
    pub fn with_tip(mut self, length: f64, width: f64) -> AnimaticResult<Self> {
        let Shape::Arrow {
            tip_length,
            tip_width,
            ..
        } = &mut self.shape
        else {
            return Err(AnimaticError::invalid_parameter(
                "tip size only applies to arrows",
            ));
        };
        *tip_length = ensure_finite("tip length", length)?.max(0.0);
        *tip_width = ensure_finite("tip width", width)?.max(0.0);
        Ok(self)
    }

    /// Set text family and weight. Fails on anything but text.
    pub fn with_font(mut self, family: impl Into<String>, is_bold: bool) -> AnimaticResult<Self> {
        let Shape::Text {
            font_family, bold, ..
        } = &mut self.shape
        else {
            return Err(AnimaticError::invalid_parameter(
                "font settings only apply to text",
            ));
        };
        *font_family = family.into();
        *bold = is_bold;
        Ok(self)
    }

    /// Stable identity.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Local geometry.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Shape variant tag.
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// World-space center.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Uniform scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Styling.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Base color.
    pub fn color(&self) -> Rgb {
        self.style.color
    }

    /// Overall opacity.
    pub fn opacity(&self) -> f64 {
        self.style.opacity
    }

    /// Move the center to `point`.
    pub fn move_to(&mut self, point: Vec2) -> AnimaticResult<&mut Self> {
        self.position = ensure_finite_vec("move_to target", point)?;
        Ok(self)
    }

    /// Translate by `delta`.
    pub fn shift(&mut self, delta: Vec2) -> AnimaticResult<&mut Self> {
        let delta = ensure_finite_vec("shift delta", delta)?;
        self.position += delta;
        Ok(self)
    }

    /// Multiply the scale by `factor` (`> 0`).
    ///
    /// Fails when the product underflows to zero or overflows to infinity.
    pub fn scale_by(&mut self, factor: f64) -> AnimaticResult<&mut Self> {
        let factor = ensure_positive("scale factor", factor)?;
        self.scale = ensure_positive("resulting scale", self.scale * factor)?;
        Ok(self)
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate_by(&mut self, angle: f64) -> AnimaticResult<&mut Self> {
        self.rotation += ensure_finite("rotation angle", angle)?;
        Ok(self)
    }

    /// Replace the base color.
    pub fn set_color(&mut self, color: Rgb) -> AnimaticResult<&mut Self> {
        self.style.color = Rgb::new(color.r, color.g, color.b)?;
        Ok(self)
    }

    /// Set the overall opacity, clamped into `[0, 1]`.
    pub fn set_opacity(&mut self, opacity: f64) -> AnimaticResult<&mut Self> {
        self.style.opacity = ensure_finite("opacity", opacity)?.clamp(0.0, 1.0);
        Ok(self)
    }

    /// Set the fill opacity, clamped into `[0, 1]`.
    pub fn set_fill_opacity(&mut self, opacity: f64) -> AnimaticResult<&mut Self> {
        self.style.fill_opacity = ensure_finite("fill opacity", opacity)?.clamp(0.0, 1.0);
        Ok(self)
    }

    /// Set the stroke opacity, clamped into `[0, 1]`.
    pub fn set_stroke_opacity(&mut self, opacity: f64) -> AnimaticResult<&mut Self> {
        self.style.stroke_opacity = ensure_finite("stroke opacity", opacity)?.clamp(0.0, 1.0);
        Ok(self)
    }

    /// Set the stroke width (`>= 0`).
    pub fn set_stroke_width(&mut self, width: f64) -> AnimaticResult<&mut Self> {
        let width = ensure_finite("stroke width", width)?;
        if width < 0.0 {
            return Err(AnimaticError::invalid_parameter(format!(
                "stroke width must be >= 0, got {width}"
            )));
        }
        self.style.stroke_width = width;
        Ok(self)
    }

    /// Local-to-world transform: scale, then rotate, then translate.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.position) * Affine::rotate(self.rotation) * Affine::scale(self.scale)
    }

    /// World-space axis-aligned bounding box of the transformed local geometry.
    pub fn bounding_box(&self) -> Rect {
        self.transform()
            .transform_rect_bbox(self.shape.local_bounds())
    }

    /// Start a deferred animation of this object.
    pub fn animate(&self) -> AnimateBuilder {
        AnimateBuilder::new(self.id)
    }

    /// Structural copy of every animatable property.
    pub fn snapshot(&self) -> StateSnapshot {
        use PropertyKey as K;
        use PropertyValue as V;
        let mut out: StateSnapshot = [
            (K::Position, V::Vector(self.position)),
            (K::Scale, V::Scalar(self.scale)),
            (K::Rotation, V::Scalar(self.rotation)),
            (K::Color, V::Color(self.style.color)),
            (K::Opacity, V::Scalar(self.style.opacity)),
            (K::FillOpacity, V::Scalar(self.style.fill_opacity)),
            (K::StrokeOpacity, V::Scalar(self.style.stroke_opacity)),
            (K::StrokeWidth, V::Scalar(self.style.stroke_width)),
        ]
        .into_iter()
        .collect();
        self.shape.write_params(&mut out);
        out
    }

    /// Write every property of `state` back, enforcing each key's domain.
    pub fn apply_snapshot(&mut self, state: &StateSnapshot) -> AnimaticResult<()> {
        for (key, value) in state.iter() {
            self.set_property(key, *value)?;
        }
        Ok(())
    }

    /// Write one property, enforcing the key's domain.
    pub fn set_property(&mut self, key: PropertyKey, value: PropertyValue) -> AnimaticResult<()> {
        use PropertyKey as K;
        let value = value.constrained(key.domain());
        match (key, value) {
            (K::Position, PropertyValue::Vector(v)) => self.position = v,
            (K::Scale, PropertyValue::Scalar(v)) => self.scale = v,
            (K::Rotation, PropertyValue::Scalar(v)) => self.rotation = v,
            (K::Color, PropertyValue::Color(c)) => self.style.color = c,
            (K::Opacity, PropertyValue::Scalar(v)) => self.style.opacity = v,
            (K::FillOpacity, PropertyValue::Scalar(v)) => self.style.fill_opacity = v,
            (K::StrokeOpacity, PropertyValue::Scalar(v)) => self.style.stroke_opacity = v,
            (K::StrokeWidth, PropertyValue::Scalar(v)) => self.style.stroke_width = v,
            _ => {
                let kind = self.shape.kind();
                match (self.shape.param_mut(key), value) {
                    (Some(ParamSlot::Scalar(slot)), PropertyValue::Scalar(v)) => *slot = v,
                    (Some(ParamSlot::Vector(slot)), PropertyValue::Vector(v)) => *slot = v,
                    _ => {
                        return Err(AnimaticError::property_mismatch(format!(
                            "{key:?} cannot take {value:?} on a {kind:?}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/object.rs"]
mod tests;
