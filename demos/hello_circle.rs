//! Reproduces `original_source/examples/hello-circle/hello_circle.py`
//! using the programmatic scene-construction API directly (no JSON).

use std::sync::Arc;

use light2d::entities::{Entity, SimpleEntity};
use light2d::materials::ConstantLight;
use light2d::shapes::Circle;
use light2d::{PathTracer, RenderSettings, Spectrum, Vec2};

fn main() {
    env_logger::init();

    let entity: Arc<Entity> = Arc::new(
        SimpleEntity::new(
            Circle::new(Vec2::ZERO, 1.0),
            ConstantLight::new(Spectrum::new(0.6, 0.8, 1.0)),
        )
        .into(),
    );

    let integrator = PathTracer::new(entity, 16, 3, 0.05)
        .expect("valid integrator parameters")
        .into();

    let settings = RenderSettings::new(
        (Vec2::new(-2.0, -2.0), Vec2::new(2.0, 2.0)),
        (512, 512),
        6,
        1,
    )
    .expect("valid render settings");

    let film = light2d::render(&integrator, &settings);

    let out_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/hello_circle.png");
    light2d::image_io::save(&film, &out_path, light2d::image_io::DEFAULT_GAMMA)
        .expect("failed to save hello_circle.png");
    println!("saved -> {}", out_path.display());
}
