use std::collections::BTreeMap;

use crate::{
    animation::anim::Lerp,
    foundation::core::{Rgb, Vec2},
    foundation::error::{AnimaticError, AnimaticResult},
};

/// Closed set of animatable property kinds.
///
/// The first eight are carried by every object; the rest only by the shape kinds whose local
/// geometry uses them.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKey {
    /// World-space center.
    Position,
    /// Uniform scale factor (`> 0`).
    Scale,
    /// Rotation in radians, counter-clockwise.
    Rotation,
    /// Base color.
    Color,
    /// Overall opacity in `[0, 1]`.
    Opacity,
    /// Fill opacity in `[0, 1]`.
    FillOpacity,
    /// Stroke opacity in `[0, 1]`.
    StrokeOpacity,
    /// Stroke width in world units (`>= 0`).
    StrokeWidth,
    /// Circle radius.
    Radius,
    /// Rectangle width.
    Width,
    /// Rectangle height.
    Height,
    /// Line/arrow local start point.
    Start,
    /// Line/arrow local end point.
    End,
    /// Arrow tip length.
    TipLength,
    /// Arrow tip half-width.
    TipWidth,
    /// Text font size.
    FontSize,
}

/// How a property is brought back into its valid domain after interpolation.
///
/// Overshooting easings can push a lerp past either endpoint; the object model keeps its
/// invariants by applying the rule on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// Any finite value.
    Unbounded,
    /// Clamped into `[0, 1]` (per channel for colors).
    UnitInterval,
    /// Strictly positive; values at or below zero collapse to [`MIN_POSITIVE`].
    Positive,
    /// Non-negative.
    NonNegative,
}

/// Smallest value a strictly positive property collapses to.
pub const MIN_POSITIVE: f64 = 1e-6;

impl PropertyKey {
    /// Domain the object model enforces for this key.
    pub fn domain(self) -> Domain {
        match self {
            Self::Position | Self::Rotation | Self::Start | Self::End => Domain::Unbounded,
            Self::Color | Self::Opacity | Self::FillOpacity | Self::StrokeOpacity => {
                Domain::UnitInterval
            }
            Self::Scale | Self::Radius | Self::Width | Self::Height | Self::FontSize => {
                Domain::Positive
            }
            Self::StrokeWidth | Self::TipLength | Self::TipWidth => Domain::NonNegative,
        }
    }
}

/// Tagged property value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Scalar quantity.
    Scalar(f64),
    /// 2D vector quantity.
    Vector(Vec2),
    /// RGB color.
    Color(Rgb),
}

impl PropertyValue {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Color(_) => "color",
        }
    }

    /// Interpolate two values of the same representation.
    pub fn lerp(key: PropertyKey, a: &Self, b: &Self, t: f64) -> AnimaticResult<Self> {
        match (a, b) {
            // kurbo's inherent `Vec2::lerp` shadows the trait method; name `Lerp` explicitly.
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(<f64 as Lerp>::lerp(a, b, t))),
            (Self::Vector(a), Self::Vector(b)) => {
                Ok(Self::Vector(<Vec2 as Lerp>::lerp(a, b, t)))
            }
            (Self::Color(a), Self::Color(b)) => Ok(Self::Color(<Rgb as Lerp>::lerp(a, b, t))),
            _ => Err(AnimaticError::property_mismatch(format!(
                "{key:?} is a {} initially but a {} finally",
                a.kind_name(),
                b.kind_name()
            ))),
        }
    }

    /// Bring the value into `domain`.
    pub fn constrained(self, domain: Domain) -> Self {
        match (self, domain) {
            (v, Domain::Unbounded) => v,
            (Self::Scalar(v), Domain::UnitInterval) => Self::Scalar(v.clamp(0.0, 1.0)),
            (Self::Color(c), Domain::UnitInterval) => Self::Color(Rgb::clamped(c.r, c.g, c.b)),
            (Self::Scalar(v), Domain::Positive) => Self::Scalar(v.max(MIN_POSITIVE)),
            (Self::Scalar(v), Domain::NonNegative) => Self::Scalar(v.max(0.0)),
            (v, _) => v,
        }
    }
}

/// Structural copy of an object's animatable properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StateSnapshot(BTreeMap<PropertyKey, PropertyValue>);

impl StateSnapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace one property.
    pub fn insert(&mut self, key: PropertyKey, value: PropertyValue) {
        self.0.insert(key, value);
    }

    /// Look up one property.
    pub fn get(&self, key: PropertyKey) -> Option<&PropertyValue> {
        self.0.get(&key)
    }

    /// Scalar property, if present and scalar.
    pub fn scalar(&self, key: PropertyKey) -> Option<f64> {
        match self.0.get(&key) {
            Some(PropertyValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Vector property, if present and a vector.
    pub fn vector(&self, key: PropertyKey) -> Option<Vec2> {
        match self.0.get(&key) {
            Some(PropertyValue::Vector(v)) => Some(*v),
            _ => None,
        }
    }

    /// Color property, if present and a color.
    pub fn color(&self, key: PropertyKey) -> Option<Rgb> {
        match self.0.get(&key) {
            Some(PropertyValue::Color(v)) => Some(*v),
            _ => None,
        }
    }

    /// Iterate properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyKey, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Property keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = PropertyKey> + '_ {
        self.0.keys().copied()
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when no property is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that `other` carries exactly the same property keys.
    pub fn ensure_same_keys(&self, other: &Self) -> AnimaticResult<()> {
        let missing: Vec<PropertyKey> = self.keys().filter(|k| !other.0.contains_key(k)).collect();
        let extra: Vec<PropertyKey> = other.keys().filter(|k| !self.0.contains_key(k)).collect();
        if missing.is_empty() && extra.is_empty() {
            return Ok(());
        }
        Err(AnimaticError::property_mismatch(format!(
            "final state lacks {missing:?} and adds {extra:?}"
        )))
    }

    /// Per-property interpolation between two snapshots with identical key sets.
    ///
    /// Each value is computed only from `a` and `b`; at `t == 0` the result equals `a` and at
    /// `t == 1` it equals `b` bit for bit.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> AnimaticResult<Self> {
        a.ensure_same_keys(b)?;
        let mut out = BTreeMap::new();
        for (key, av) in a.iter() {
            let Some(bv) = b.get(key) else {
                continue;
            };
            out.insert(key, PropertyValue::lerp(key, av, bv, t)?);
        }
        Ok(Self(out))
    }
}

impl FromIterator<(PropertyKey, PropertyValue)> for StateSnapshot {
    fn from_iter<I: IntoIterator<Item = (PropertyKey, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/props.rs"]
mod tests;
