//! Materials: emission and scattering at a surface interaction.

mod constant_light;

pub use constant_light::ConstantLight;

use crate::geometry::{Ray, SurfaceInteraction};
use rand::Rng;

/// A concrete surface material. Given a ray and an interaction whose `p`
/// and `n` fields a shape has already filled in, a material writes `li`,
/// `attenuation`, and (if scattering) `d_out`. Any randomness a material
/// needs is drawn from the caller-supplied RNG — no global RNG state.
#[derive(Clone, Copy, Debug)]
pub enum Material {
    ConstantLight(ConstantLight),
}

impl Material {
    pub fn scatter(&self, ray: &Ray, interaction: &mut SurfaceInteraction, rng: &mut impl Rng) {
        match self {
            Material::ConstantLight(m) => m.scatter(ray, interaction, rng),
        }
    }
}

impl From<ConstantLight> for Material {
    fn from(m: ConstantLight) -> Self {
        Material::ConstantLight(m)
    }
}
