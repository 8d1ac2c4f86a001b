//! An ordered collection of entities with no acceleration structure.

use crate::entities::Entity;
use crate::geometry::{Aabb, Ray, SurfaceInteraction};
use rand::Rng;

#[derive(Clone)]
pub struct FlatAggregate {
    entities: Vec<Entity>,
}

impl FlatAggregate {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::union_all(self.entities.iter().map(Entity::bounds))
    }

    /// Intersects every child in order against the same ray and
    /// interaction. Children only ever *decrease* `ray.t_max`, so the
    /// closest hit wins regardless of iteration order and no short-circuit
    /// is needed or performed — see spec.md §4.3/§9.
    pub fn intersect(&self, ray: &mut Ray, interaction: &mut SurfaceInteraction, rng: &mut impl Rng) -> bool {
        let mut hit_any = false;
        for entity in &self.entities {
            if entity.intersect(ray, interaction, rng) {
                hit_any = true;
            }
        }
        hit_any
    }
}
