//! Collider Registry
//!
//! Static colliders come from level geometry and live for the session.
//! Dynamic colliders mirror moving entities and are rebuilt every tick.

use tracing::trace;

use crate::core::aabb::Aabb;
use crate::game::entity::{Body, EntityId};

/// A solid box, optionally tagged with the entity it mirrors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    /// Solid area
    pub bounds: Aabb,
    /// Mirrored entity; `None` for level geometry
    pub owner: Option<EntityId>,
}

impl Collider {
    /// Level geometry collider.
    pub const fn fixed(bounds: Aabb) -> Self {
        Self { bounds, owner: None }
    }

    /// Collider mirroring an entity.
    pub const fn owned(bounds: Aabb, owner: EntityId) -> Self {
        Self {
            bounds,
            owner: Some(owner),
        }
    }

    /// True when this collider mirrors `id`.
    #[inline]
    pub fn is_owned_by(&self, id: EntityId) -> bool {
        self.owner == Some(id)
    }
}

/// Static and dynamic collider sets.
#[derive(Clone, Debug, Default)]
pub struct ColliderRegistry {
    static_colliders: Vec<Collider>,
    dynamic_colliders: Vec<Collider>,
}

impl ColliderRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append level geometry. No deduplication.
    pub fn add_static<I>(&mut self, bounds: I)
    where
        I: IntoIterator<Item = Aabb>,
    {
        self.static_colliders
            .extend(bounds.into_iter().map(Collider::fixed));
    }

    /// Drop all level geometry (level reload).
    pub fn clear_static(&mut self) {
        self.static_colliders.clear();
    }

    /// Replace the dynamic set with one collider per body.
    pub fn rebuild_dynamic<'a, I>(&mut self, bodies: I)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        self.dynamic_colliders.clear();
        self.dynamic_colliders.extend(
            bodies
                .into_iter()
                .map(|body| Collider::owned(body.bounds(), body.id)),
        );
        trace!(count = self.dynamic_colliders.len(), "rebuilt dynamic colliders");
    }

    /// Move the dynamic collider owned by `body.id` to the body's current box.
    ///
    /// Returns false if the body has no dynamic collider this tick.
    pub fn refresh_dynamic(&mut self, body: &Body) -> bool {
        match self
            .dynamic_colliders
            .iter_mut()
            .find(|c| c.is_owned_by(body.id))
        {
            Some(collider) => {
                collider.bounds = body.bounds();
                true
            }
            None => false,
        }
    }

    /// Drop every dynamic collider. Called at the end of each tick.
    pub fn clear_dynamic(&mut self) {
        self.dynamic_colliders.clear();
    }

    /// Level geometry colliders.
    pub fn static_colliders(&self) -> &[Collider] {
        &self.static_colliders
    }

    /// Entity colliders for the current tick.
    pub fn dynamic_colliders(&self) -> &[Collider] {
        &self.dynamic_colliders
    }

    /// All colliders, static first, then dynamic.
    pub fn iter(&self) -> impl Iterator<Item = &Collider> + '_ {
        self.static_colliders
            .iter()
            .chain(self.dynamic_colliders.iter())
    }

    /// All colliders except those owned by `id`.
    pub fn obstacles_for(&self, id: EntityId) -> impl Iterator<Item = &Collider> + '_ {
        self.iter().filter(move |c| !c.is_owned_by(id))
    }

    /// Total number of colliders.
    pub fn len(&self) -> usize {
        self.static_colliders.len() + self.dynamic_colliders.len()
    }

    /// True when there are no colliders at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
