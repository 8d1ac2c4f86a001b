//! Pure-emitter material: always terminates the path here.

use crate::geometry::{Ray, SurfaceInteraction};
use crate::spectrum::Spectrum;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct ConstantLight {
    pub li: Spectrum,
}

impl ConstantLight {
    pub fn new(li: Spectrum) -> Self {
        Self { li }
    }

    /// Sets the emitted radiance and the absorbing sentinel attenuation;
    /// `d_out` is left undefined, matching the contract that a non-scattering
    /// interaction never has its scattered direction read.
    pub fn scatter(&self, _ray: &Ray, interaction: &mut SurfaceInteraction, _rng: &mut impl Rng) {
        interaction.li = self.li;
        interaction.attenuation = Spectrum::ABSORB;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2::Vec2;
    use rand::thread_rng;

    #[test]
    fn emits_configured_radiance_and_absorbs() {
        let mat = ConstantLight::new(Spectrum::new(0.6, 0.8, 1.0));
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let mut interaction = SurfaceInteraction::default();
        mat.scatter(&ray, &mut interaction, &mut thread_rng());
        assert_eq!(interaction.li, Spectrum::new(0.6, 0.8, 1.0));
        assert!(!interaction.scatters());
    }
}
