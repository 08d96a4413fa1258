use crate::scene::object::ObjectId;

/// Convenience result type used across animatic.
pub type AnimaticResult<T> = Result<T, AnimaticError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every error is surfaced synchronously to the caller. Nothing is retried and nothing is
/// swallowed: a failed authoring call halts the batch instead of producing a corrupt frame run.
#[derive(thiserror::Error, Debug)]
pub enum AnimaticError {
    /// Out-of-range or malformed property value (for example a non-positive scale factor).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An animation's final state does not cover the same property set as its initial state.
    #[error("property mismatch: {0}")]
    PropertyMismatch(String),

    /// Two animations in one batch (or group) write the same object.
    #[error("target conflict: object {0} is animated more than once in the same batch")]
    TargetConflict(ObjectId),

    /// Playback or removal referenced an object that is not in the scene registry.
    #[error("unregistered object: {0} is not in the scene registry")]
    UnregisteredObject(ObjectId),

    /// Errors when serializing snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimaticError {
    /// Build an [`AnimaticError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build an [`AnimaticError::PropertyMismatch`] value.
    pub fn property_mismatch(msg: impl Into<String>) -> Self {
        Self::PropertyMismatch(msg.into())
    }

    /// Build an [`AnimaticError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
