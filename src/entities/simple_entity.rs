//! A single shape wired to a single material.

use crate::geometry::{Aabb, Ray, SurfaceInteraction};
use crate::materials::Material;
use crate::shapes::Shape;
use rand::Rng;

#[derive(Clone)]
pub struct SimpleEntity {
    pub shape: Shape,
    pub material: Material,
}

impl SimpleEntity {
    pub fn new(shape: impl Into<Shape>, material: impl Into<Material>) -> Self {
        Self {
            shape: shape.into(),
            material: material.into(),
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.shape.bounds()
    }

    pub fn intersect(&self, ray: &mut Ray, interaction: &mut SurfaceInteraction, rng: &mut impl Rng) -> bool {
        if !self.shape.intersect(ray, interaction) {
            return false;
        }
        self.material.scatter(ray, interaction, rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::ConstantLight;
    use crate::shapes::Circle;
    use crate::spectrum::Spectrum;
    use crate::vec2::Vec2;
    use rand::thread_rng;

    #[test]
    fn hit_populates_every_field() {
        let entity = SimpleEntity::new(
            Circle::new(Vec2::ZERO, 1.0),
            ConstantLight::new(Spectrum::new(1.0, 1.0, 1.0)),
        );
        let mut ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(entity.intersect(&mut ray, &mut interaction, &mut thread_rng()));
        assert_eq!(interaction.li, Spectrum::new(1.0, 1.0, 1.0));
        assert!(!interaction.scatters());
    }

    #[test]
    fn miss_does_not_call_material() {
        let entity = SimpleEntity::new(
            Circle::new(Vec2::new(100.0, 100.0), 1.0),
            ConstantLight::new(Spectrum::new(1.0, 1.0, 1.0)),
        );
        let mut ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(!entity.intersect(&mut ray, &mut interaction, &mut thread_rng()));
        assert_eq!(interaction.li, Spectrum::ZERO);
    }
}
