//! JSON scene description: a convenience on top of the programmatic
//! constructors in [`crate::entities`], [`crate::materials`], and
//! [`crate::shapes`] for the CLI harness.

use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::Deserialize;

use crate::entities::{Entity, FlatAggregate, SimpleEntity};
use crate::error::RenderError;
use crate::integrator::{Integrator, PathTracer};
use crate::materials::{ConstantLight, Material};
use crate::render::RenderSettings;
use crate::shapes::{Circle, Shape};
use crate::spectrum::Spectrum;
use crate::vec2::Vec2;

#[derive(Deserialize)]
struct MaterialJson {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    li: Option<[f32; 3]>,
}

impl MaterialJson {
    fn into_material(self) -> Result<Material, RenderError> {
        match self.kind.as_str() {
            "constant_light" => {
                let li = self
                    .li
                    .ok_or_else(|| RenderError::UnknownMaterial("constant_light missing \"li\"".into()))?;
                Ok(ConstantLight::new(Spectrum::from(li)).into())
            }
            other => Err(RenderError::UnknownMaterial(other.to_string())),
        }
    }
}

#[derive(Deserialize)]
struct EntityJson {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    center: Option<[f32; 2]>,
    #[serde(default)]
    radius: Option<f32>,
    material: MaterialJson,
}

impl EntityJson {
    fn into_entity(self) -> Result<Entity, RenderError> {
        let material = self.material.into_material()?;
        let shape: Shape = match self.kind.as_str() {
            "circle" => {
                let center = self
                    .center
                    .ok_or_else(|| RenderError::UnknownShape("circle missing \"center\"".into()))?;
                let radius = self
                    .radius
                    .ok_or_else(|| RenderError::UnknownShape("circle missing \"radius\"".into()))?;
                Circle::new(Vec2::from(center), radius).into()
            }
            other => return Err(RenderError::UnknownShape(other.to_string())),
        };
        Ok(SimpleEntity::new(shape, material).into())
    }
}

fn default_n_steps() -> u32 {
    3
}

fn default_russian_roulette_q() -> f32 {
    0.05
}

#[derive(Deserialize)]
struct IntegratorJson {
    n_samples: u32,
    #[serde(default = "default_n_steps")]
    n_steps: u32,
    #[serde(default = "default_russian_roulette_q")]
    russian_roulette_q: f32,
}

fn default_n_tiles() -> u32 {
    1
}

fn default_seed() -> u64 {
    0
}

#[derive(Deserialize)]
struct RenderJson {
    region: ([f32; 2], [f32; 2]),
    film_size: (u32, u32),
    #[serde(default = "default_n_tiles")]
    n_tiles: u32,
    #[serde(default = "default_seed")]
    seed: u64,
}

#[derive(Deserialize)]
struct SceneFile {
    entities: Vec<EntityJson>,
    integrator: IntegratorJson,
    render: RenderJson,
}

/// A fully resolved scene: an integrator ready to drive, and the render
/// settings to drive it with.
pub struct LoadedScene {
    pub integrator: Integrator,
    pub settings: RenderSettings,
}

/// Loads and resolves a scene JSON file into a [`LoadedScene`].
pub fn load(path: impl AsRef<Path>) -> Result<LoadedScene, RenderError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)?;
    let file: SceneFile = serde_json::from_str(&data)?;

    let entities = file
        .entities
        .into_iter()
        .map(EntityJson::into_entity)
        .collect::<Result<Vec<_>, _>>()?;
    info!("loaded {} entities from {}", entities.len(), path.display());

    let root: Entity = FlatAggregate::new(entities).into();
    let integrator: Integrator = PathTracer::new(
        Arc::new(root),
        file.integrator.n_samples,
        file.integrator.n_steps,
        file.integrator.russian_roulette_q,
    )?
    .into();

    let (min, max) = file.render.region;
    let settings = RenderSettings::new(
        (Vec2::from(min), Vec2::from(max)),
        file.render.film_size,
        file.render.n_tiles,
        file.render.seed,
    )?;

    Ok(LoadedScene { integrator, settings })
}
