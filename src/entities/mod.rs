//! Entities: shape + material composition, and a flat aggregate of entities.

mod flat_aggregate;
mod simple_entity;

pub use flat_aggregate::FlatAggregate;
pub use simple_entity::SimpleEntity;

use crate::geometry::{Aabb, Ray, SurfaceInteraction};
use rand::Rng;

/// A renderable object: either one shape paired with one material, or a
/// flat ordered collection of sub-entities.
#[derive(Clone)]
pub enum Entity {
    Simple(SimpleEntity),
    Aggregate(FlatAggregate),
}

impl Entity {
    pub fn bounds(&self) -> Aabb {
        match self {
            Entity::Simple(e) => e.bounds(),
            Entity::Aggregate(e) => e.bounds(),
        }
    }

    /// Intersects `ray` against this entity, updating `ray.t_max` and
    /// fully populating `interaction` on a hit. Returns whether a hit
    /// occurred.
    pub fn intersect(&self, ray: &mut Ray, interaction: &mut SurfaceInteraction, rng: &mut impl Rng) -> bool {
        match self {
            Entity::Simple(e) => e.intersect(ray, interaction, rng),
            Entity::Aggregate(e) => e.intersect(ray, interaction, rng),
        }
    }
}

impl From<SimpleEntity> for Entity {
    fn from(e: SimpleEntity) -> Self {
        Entity::Simple(e)
    }
}

impl From<FlatAggregate> for Entity {
    fn from(e: FlatAggregate) -> Self {
        Entity::Aggregate(e)
    }
}
