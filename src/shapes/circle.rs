//! Circle shape: center + radius.

use crate::geometry::{Aabb, Ray, SurfaceInteraction};
use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn bounds(&self) -> Aabb {
        let r = Vec2::new(self.radius, self.radius);
        Aabb::new(self.center - r, self.center + r)
    }

    /// Ray-vs-circle intersection. See `original_source/light2d/shapes/circle.py`
    /// for the reference derivation this mirrors exactly, including the
    /// tangent/grazing edge cases.
    pub fn intersect(&self, ray: &mut Ray, interaction: &mut SurfaceInteraction) -> bool {
        let d_norm = ray.direction.norm();
        let d_hat = ray.direction / d_norm;

        let oc = self.center - ray.origin;
        let b = d_hat.dot(oc);
        let delta = b * b - oc.dot(oc) + self.radius * self.radius;
        if delta < 0.0 {
            return false;
        }

        let sqrt_delta = delta.sqrt();
        let t1 = (b - sqrt_delta) / d_norm;
        if !(t1 < ray.t_max) {
            return false;
        }
        let t = if t1 > 0.0 {
            t1
        } else {
            let t2 = (b + sqrt_delta) / d_norm;
            if t2 > 0.0 && t2 < ray.t_max {
                t2
            } else {
                return false;
            }
        };

        let p = ray.at(t);
        let n = (p - self.center).normalize();
        ray.t_max = t;
        interaction.p = p;
        interaction.n = n;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_circle() -> Circle {
        Circle::new(Vec2::ZERO, 1.0)
    }

    #[test]
    fn hit_decreases_t_max_and_reports_correct_t() {
        let mut ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(unit_circle().intersect(&mut ray, &mut interaction));
        assert_relative_eq!(ray.t_max, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn tangent_grazing_miss_at_exact_t_max() {
        // Ray starting exactly tangent from far away: t_max starts at +inf so
        // this still hits; instead verify the t1 >= t_max miss branch directly
        // by pre-shrinking t_max below the true hit distance.
        let mut ray = Ray::new(Vec2::new(-5.0, 0.0), Vec2::new(1.0, 0.0));
        ray.t_max = 3.0; // true hit is at t = 4.0
        let mut interaction = SurfaceInteraction::default();
        assert!(!unit_circle().intersect(&mut ray, &mut interaction));
    }

    #[test]
    fn grazing_tangent_ray_misses_just_outside() {
        let eps = 1e-3;
        let mut ray = Ray::new(Vec2::new(-5.0, 1.0 + 2.0 * eps), Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(!unit_circle().intersect(&mut ray, &mut interaction));
    }

    #[test]
    fn interior_ray_hits_far_side() {
        let mut ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(unit_circle().intersect(&mut ray, &mut interaction));
        assert_relative_eq!(ray.t_max, 1.0, epsilon = 1e-5);
        assert_relative_eq!(interaction.n.0, 1.0, epsilon = 1e-5);
        assert_relative_eq!(interaction.n.1, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn hit_point_lies_within_bounds() {
        let circle = Circle::new(Vec2::new(2.0, -1.0), 0.5);
        let mut ray = Ray::new(Vec2::new(2.0, -5.0), Vec2::new(0.0, 1.0));
        let mut interaction = SurfaceInteraction::default();
        assert!(circle.intersect(&mut ray, &mut interaction));
        assert!(circle.bounds().contains_within(interaction.p, 1e-4));
    }

    #[test]
    fn miss_leaves_t_max_unchanged() {
        let mut ray = Ray::new(Vec2::new(-5.0, 10.0), Vec2::new(1.0, 0.0));
        let before = ray.t_max;
        let mut interaction = SurfaceInteraction::default();
        assert!(!unit_circle().intersect(&mut ray, &mut interaction));
        assert_eq!(ray.t_max, before);
    }
}
