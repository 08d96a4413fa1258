use std::collections::HashMap;

use crate::{
    foundation::error::{AnimaticError, AnimaticResult},
    scene::object::{DrawableObject, ObjectId, Shape, ShapeKind},
    scene::props::StateSnapshot,
};

/// Ordered collection of live objects. Insertion order is paint order (back to front).
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    order: Vec<ObjectId>,
    objects: HashMap<ObjectId, DrawableObject>,
}

impl SceneRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `obj` on top of the paint order and return its id.
    ///
    /// Adding an id that is already registered replaces its state in place and keeps its paint
    /// position.
    pub fn add(&mut self, obj: DrawableObject) -> ObjectId {
        let id = obj.id();
        if self.objects.insert(id, obj).is_none() {
            self.order.push(id);
        }
        id
    }

    /// Unregister `id` and hand back its final state.
    pub fn remove(&mut self, id: ObjectId) -> AnimaticResult<DrawableObject> {
        let obj = self
            .objects
            .remove(&id)
            .ok_or(AnimaticError::UnregisteredObject(id))?;
        self.order.retain(|o| *o != id);
        Ok(obj)
    }

    /// Drop every object.
    pub fn clear(&mut self) {
        self.order.clear();
        self.objects.clear();
    }

    /// Return `true` when `id` is registered.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Borrow a registered object.
    pub fn get(&self, id: ObjectId) -> AnimaticResult<&DrawableObject> {
        self.objects
            .get(&id)
            .ok_or(AnimaticError::UnregisteredObject(id))
    }

    /// Mutably borrow a registered object.
    pub fn get_mut(&mut self, id: ObjectId) -> AnimaticResult<&mut DrawableObject> {
        self.objects
            .get_mut(&id)
            .ok_or(AnimaticError::UnregisteredObject(id))
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Ids in paint order.
    pub fn ids(&self) -> &[ObjectId] {
        &self.order
    }

    /// Objects in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawableObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Immutable per-object view of the whole registry, in paint order.
    pub fn snapshot(&self) -> Vec<ObjectSnapshot> {
        self.iter().map(ObjectSnapshot::of).collect()
    }
}

/// Resolved state of one object as handed to the rendering collaborator.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectSnapshot {
    /// Object identity.
    pub id: ObjectId,
    /// Shape tag.
    pub kind: ShapeKind,
    /// Full local geometry (includes non-animatable fields such as text content).
    pub shape: Shape,
    /// Resolved property bag.
    pub props: StateSnapshot,
}

impl ObjectSnapshot {
    /// Capture `obj`.
    pub fn of(obj: &DrawableObject) -> Self {
        Self {
            id: obj.id(),
            kind: obj.kind(),
            shape: obj.shape().clone(),
            props: obj.snapshot(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/registry.rs"]
mod tests;
