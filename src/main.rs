use std::env;
use std::path::PathBuf;
use std::time::Instant;

use log::info;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "--quiet" || a == "-q");
    let scene_path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with('-'))
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/hello_circle.json")
        });

    let scene = match light2d::scene::load(&scene_path) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("failed to load scene {}: {e}", scene_path.display());
            std::process::exit(1);
        }
    };

    if !quiet {
        println!(
            "rendering {}x{} ({} tiles/axis) from {}",
            scene.settings.film_size.0,
            scene.settings.film_size.1,
            scene.settings.n_tiles,
            scene_path.display()
        );
    }

    let start = Instant::now();
    let film = light2d::render(&scene.integrator, &scene.settings);
    info!("render finished in {:.2?}", start.elapsed());

    let out_path = scene_path.with_extension("png");
    if let Err(e) = light2d::image_io::save(&film, &out_path, light2d::image_io::DEFAULT_GAMMA) {
        eprintln!("failed to save {}: {e}", out_path.display());
        std::process::exit(1);
    }

    if !quiet {
        println!("saved -> {}", out_path.display());
    }
}
