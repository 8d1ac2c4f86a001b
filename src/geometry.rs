//! Ray, axis-aligned bounding box, and the surface-interaction record shared
//! between shapes and materials.

use crate::spectrum::Spectrum;
use crate::vec2::Vec2;

/// A ray with an origin, a (not necessarily unit-length) direction, and a
/// maximum parametric distance. `origin + direction * t` for `t` in
/// `[0, t_max)` is the segment that may be intersected.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec2,
    pub direction: Vec2,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: Vec2, direction: Vec2) -> Self {
        Self {
            origin,
            direction,
            t_max: f32::INFINITY,
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box: `(min, max)` corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The empty box: `(+inf, -inf)`, identity of [`Aabb::union`].
    pub fn empty() -> Self {
        Self {
            min: Vec2::new(f32::INFINITY, f32::INFINITY),
            max: Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    pub fn union(self, other: Self) -> Self {
        Self {
            min: Vec2::new(self.min.0.min(other.min.0), self.min.1.min(other.min.1)),
            max: Vec2::new(self.max.0.max(other.max.0), self.max.1.max(other.max.1)),
        }
    }

    /// Union of an iterator of boxes; `empty()` if the iterator yields none.
    pub fn union_all(boxes: impl IntoIterator<Item = Aabb>) -> Self {
        boxes.into_iter().fold(Aabb::empty(), Aabb::union)
    }

    /// Whether `p` lies within the box, up to `epsilon` slack per axis.
    pub fn contains_within(&self, p: Vec2, epsilon: f32) -> bool {
        p.0 >= self.min.0 - epsilon
            && p.0 <= self.max.0 + epsilon
            && p.1 >= self.min.1 - epsilon
            && p.1 <= self.max.1 + epsilon
    }
}

/// The result of a successful intersection plus material shading.
///
/// Fields are filled in a fixed order: the shape sets `p` and `n`; the
/// material then sets `li`, `attenuation`, and (if scattering) `d_out`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceInteraction {
    /// Hit point.
    pub p: Vec2,
    /// Outward-pointing surface normal (not required unit-length, non-zero).
    pub n: Vec2,
    /// Emitted radiance at the hit point; zero when non-emissive.
    pub li: Spectrum,
    /// Multiplicative attenuation applied to the scattered contribution.
    /// [`Spectrum::ABSORB`] (no positive component) means "absorb here".
    pub attenuation: Spectrum,
    /// Direction of the scattered ray, valid only if `attenuation` has a
    /// positive component.
    pub d_out: Vec2,
}

impl SurfaceInteraction {
    #[inline]
    pub fn scatters(&self) -> bool {
        self.attenuation.has_positive_component()
    }
}
