//! Tile decomposition, parallel dispatch, and film assembly.

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use rayon::prelude::*;

use crate::error::RenderError;
use crate::film::Film;
use crate::geometry::Aabb;
use crate::integrator::Integrator;
use crate::vec2::Vec2;

/// A world-space render region: `(min, max)` corners.
pub type Region = (Vec2, Vec2);

/// The argument bundle to [`render`]: output region, film size, tile count,
/// and master RNG seed.
#[derive(Clone, Copy, Debug)]
pub struct RenderSettings {
    pub region: Region,
    pub film_size: (u32, u32),
    pub n_tiles: u32,
    pub seed: u64,
}

impl RenderSettings {
    pub fn new(region: Region, film_size: (u32, u32), n_tiles: u32, seed: u64) -> Result<Self, RenderError> {
        let (min, max) = region;
        if !(min.0 < max.0 && min.1 < max.1) {
            return Err(RenderError::InvalidRegion {
                min: (min.0, min.1),
                max: (max.0, max.1),
            });
        }
        let (width, height) = film_size;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidFilmSize {
                width: width as i64,
                height: height as i64,
            });
        }
        if n_tiles == 0 {
            return Err(RenderError::InvalidTileCount(n_tiles as i64));
        }
        Ok(Self {
            region,
            film_size,
            n_tiles,
            seed,
        })
    }
}

/// Renders `integrator` over `settings.region` into a film of
/// `settings.film_size`, split into `settings.n_tiles x settings.n_tiles`
/// tiles and dispatched to rayon's worker pool. Aspect-ratio mismatches
/// between `region` and `film_size` are accepted silently and produce
/// non-square pixels, per spec.
pub fn render(integrator: &Integrator, settings: &RenderSettings) -> Film {
    let (width, height) = settings.film_size;
    let (region_min, region_max) = settings.region;
    let n_tiles = settings.n_tiles;

    if n_tiles <= 1 {
        info!(
            "rendering {}x{} in a single tile (n_samples-agnostic)",
            width, height
        );
        let mut master_rng = Pcg32::seed_from_u64(settings.seed);
        let tile_seed: u64 = master_rng.gen();
        return render_tile(
            integrator,
            (region_min, region_max),
            (width, height),
            tile_seed,
        );
    }

    let col_bounds = tile_bounds(width, n_tiles);
    let row_bounds = tile_bounds(height, n_tiles);

    let col_world = tile_world_bounds(&col_bounds, width, region_min.0, region_max.0);
    let row_world = tile_world_bounds(&row_bounds, height, region_min.1, region_max.1);

    // Seeds are drawn from the master RNG in a fixed row-major order before
    // dispatch, so the result is independent of tile completion order.
    let mut master_rng = Pcg32::seed_from_u64(settings.seed);
    let mut tasks = Vec::with_capacity((n_tiles * n_tiles) as usize);
    for row in 0..n_tiles as usize {
        for col in 0..n_tiles as usize {
            let seed: u64 = master_rng.gen();
            let tile_region = (
                Vec2::new(col_world[col], row_world[row]),
                Vec2::new(col_world[col + 1], row_world[row + 1]),
            );
            let tile_pixels = (
                col_bounds[col + 1] - col_bounds[col],
                row_bounds[row + 1] - row_bounds[row],
            );
            tasks.push((row, col, tile_region, tile_pixels, seed));
        }
    }

    info!(
        "rendering {}x{} across a {n_tiles}x{n_tiles} tile grid ({} tiles)",
        width,
        height,
        tasks.len()
    );

    let progress = indicatif::ProgressBar::new(tasks.len() as u64);
    progress.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} tiles | {elapsed_precise} | ETA: {eta}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar()),
    );

    let rendered: Vec<_> = tasks
        .into_par_iter()
        .map(|(row, col, tile_region, tile_pixels, seed)| {
            let tile = render_tile(integrator, tile_region, tile_pixels, seed);
            progress.inc(1);
            debug!("tile (row={row}, col={col}) done, seed={seed}");
            (row, col, tile)
        })
        .collect();
    progress.finish_with_message("render complete");

    let mut film = Film::new(width as usize, height as usize);
    for (row, col, tile) in rendered {
        let row_range = (row_bounds[row] as usize, row_bounds[row + 1] as usize);
        let col_range = (col_bounds[col] as usize, col_bounds[col + 1] as usize);
        film.blit(&tile, row_range, col_range);
    }
    film
}

/// Seeds a per-tile RNG and renders every pixel of a single tile.
fn render_tile(integrator: &Integrator, tile_region: Region, tile_pixels: (u32, u32), seed: u64) -> Film {
    let (w, h) = tile_pixels;
    let mut rng = Pcg32::seed_from_u64(seed);
    let (min, max) = tile_region;

    let x_range = linspace(min.0, max.0, w as usize + 1);
    let y_range = linspace(min.1, max.1, h as usize + 1);

    let mut film = Film::new(w as usize, h as usize);
    for row in 0..h as usize {
        let (y_min, y_max) = (y_range[row], y_range[row + 1]);
        for col in 0..w as usize {
            let (x_min, x_max) = (x_range[col], x_range[col + 1]);
            let pixel_region = Aabb::new(Vec2::new(x_min, y_min), Vec2::new(x_max, y_max));
            film.set(row, col, integrator.integrate(pixel_region, &mut rng));
        }
    }
    film
}

/// Pixel-index boundaries of `n_tiles` contiguous ranges covering `[0, len)`,
/// each of width `ceil(len / n_tiles)` except the last, which absorbs the
/// remainder. Returns `n_tiles + 1` boundaries.
fn tile_bounds(len: u32, n_tiles: u32) -> Vec<u32> {
    let tile_width = (len + n_tiles - 1) / n_tiles;
    let mut bounds: Vec<u32> = (0..n_tiles).map(|i| (i * tile_width).min(len)).collect();
    bounds.push(len);
    bounds
}

/// Linearly interpolates each pixel-index boundary against `[world_min, world_max]`.
fn tile_world_bounds(bounds: &[u32], len: u32, world_min: f32, world_max: f32) -> Vec<f32> {
    bounds
        .iter()
        .map(|&b| {
            let t = b as f32 / len as f32;
            world_min * (1.0 - t) + world_max * t
        })
        .collect()
}

fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count as f32 - 1.0);
    (0..count)
        .map(|i| if i == count - 1 { end } else { start + step * i as f32 })
        .collect()
}
