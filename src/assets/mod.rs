//! Map loading — everything that happens before the render loop starts.
//!
//! Two ways to get a terrain pair:
//! * [`load_terrain`] decodes a grayscale heightmap image and a colormap
//!   image from disk; the colormap's distinct RGB values become the
//!   palette (exact quantization, at most 256 colors).
//! * [`procedural_terrain`] synthesizes an island from value noise, so the
//!   viewer runs with no files at all.
//!
//! Either path fails fast, before the renderer ever sees a grid.

use std::collections::HashMap;
use std::path::Path;

use image::{GrayImage, RgbImage};
use thiserror::Error;

use crate::world::{MapGrid, Palette, TerrainError, TerrainMaps};

/// Errors that can be encountered while preparing terrain assets.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Decoding failure from the `image` crate, propagated unchanged.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Colormap uses more distinct RGB values than a palette can hold.
    #[error("colormap has {0} distinct colors, palette holds at most 255")]
    TooManyColors(usize),

    /// Grid precondition violation (mismatched or empty dimensions).
    #[error(transparent)]
    Terrain(#[from] TerrainError),
}

/// Load a height/color image pair and derive the display palette.
pub fn load_terrain<P: AsRef<Path>>(
    height_path: P,
    color_path: P,
) -> Result<(TerrainMaps, Palette), AssetError> {
    let height_img = image::open(height_path)?.into_luma8();
    let color_img = image::open(color_path)?.into_rgb8();

    let heights = height_grid(&height_img)?;
    let (colors, palette) = color_grid(&color_img)?;
    let maps = TerrainMaps::new(heights, colors)?;
    Ok((maps, palette))
}

/// Luma samples become elevation samples one for one.
fn height_grid(img: &GrayImage) -> Result<MapGrid, AssetError> {
    let (w, h) = img.dimensions();
    Ok(MapGrid::from_raw(
        w as usize,
        h as usize,
        img.as_raw().clone(),
    )?)
}

/// Quantize an RGB colormap into palette indices.
///
/// Index 0 is reserved for the sky, so at most 255 distinct terrain colors
/// fit. Assignment order is scan order, which keeps loading deterministic.
fn color_grid(img: &RgbImage) -> Result<(MapGrid, Palette), AssetError> {
    let (w, h) = img.dimensions();
    let mut palette = Palette([0u32; 256]);
    palette.set_sky();

    let mut by_rgb: HashMap<[u8; 3], u8> = HashMap::new();
    let mut indices = Vec::with_capacity((w * h) as usize);
    let mut next = 1u16;

    for pixel in img.pixels() {
        let rgb = pixel.0;
        let idx = match by_rgb.get(&rgb) {
            Some(&idx) => idx,
            None => {
                if next > 255 {
                    return Err(AssetError::TooManyColors(by_rgb.len() + 1));
                }
                let idx = next as u8;
                palette.set(idx, rgb[0], rgb[1], rgb[2]);
                by_rgb.insert(rgb, idx);
                next += 1;
                idx
            }
        };
        indices.push(idx);
    }

    Ok((MapGrid::from_raw(w as usize, h as usize, indices)?, palette))
}

/*───────────────────────── procedural fallback ───────────────────────*/

fn noise_hash(x: i32, y: i32, seed: u32) -> f32 {
    let mut h = seed.wrapping_add(x as u32).wrapping_mul(374761393);
    h = h.wrapping_add(y as u32).wrapping_mul(668265263);
    h = (h ^ (h >> 13)).wrapping_mul(1274126177);
    h ^= h >> 16;
    (h & 0x7fff) as f32 / 0x7fff as f32
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Bilinear value noise over a lattice that repeats every `period` cells,
/// so the generated terrain tiles seamlessly on the torus.
fn value_noise(x: f32, y: f32, period: i32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = smoothstep(x - ix as f32);
    let fy = smoothstep(y - iy as f32);

    let wrap = |v: i32| v.rem_euclid(period);
    let c00 = noise_hash(wrap(ix), wrap(iy), seed);
    let c10 = noise_hash(wrap(ix + 1), wrap(iy), seed);
    let c01 = noise_hash(wrap(ix), wrap(iy + 1), seed);
    let c11 = noise_hash(wrap(ix + 1), wrap(iy + 1), seed);

    let x0 = c00 + (c10 - c00) * fx;
    let x1 = c01 + (c11 - c01) * fx;
    x0 + (x1 - x0) * fy
}

fn fbm(x: f32, y: f32, period: i32, seed: u32) -> f32 {
    let mut sum = 0.0;
    let mut amp = 0.5;
    let mut freq = 1.0;
    for octave in 0..5u32 {
        sum += amp
            * value_noise(
                x * freq,
                y * freq,
                period << octave,
                seed.wrapping_add(octave),
            );
        amp *= 0.5;
        freq *= 2.0;
    }
    sum
}

/// Elevation bands of the generated island, low to high.
const BAND_RGB: [(u8, u8, u8); 6] = [
    (24, 48, 96),    // deep water
    (40, 80, 140),   // shallows
    (194, 178, 128), // sand
    (80, 124, 48),   // grass
    (124, 108, 92),  // rock
    (236, 236, 240), // snow
];
const BAND_SPLITS: [u8; 5] = [70, 85, 100, 160, 210];

/// Synthesize a tiling fractal terrain with a banded color palette.
pub fn procedural_terrain(size: usize, seed: u32) -> Result<(TerrainMaps, Palette), AssetError> {
    const LATTICE: i32 = 8; // base noise cells across the map

    let mut heights = Vec::with_capacity(size * size);
    let mut colors = Vec::with_capacity(size * size);
    let scale = LATTICE as f32 / size as f32;

    for y in 0..size {
        for x in 0..size {
            let n = fbm(x as f32 * scale, y as f32 * scale, LATTICE, seed);
            let elevation = (n.clamp(0.0, 1.0) * 255.0) as u8;
            heights.push(elevation);

            let band = BAND_SPLITS.iter().filter(|&&s| elevation >= s).count();
            colors.push(band as u8 + 1);
        }
    }

    let mut palette = Palette([0u32; 256]);
    palette.set_sky();
    for (i, (r, g, b)) in BAND_RGB.into_iter().enumerate() {
        palette.set(i as u8 + 1, r, g, b);
    }

    let maps = TerrainMaps::new(
        MapGrid::from_raw(size, size, heights)?,
        MapGrid::from_raw(size, size, colors)?,
    )?;
    Ok((maps, palette))
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn height_grid_copies_luma_samples() {
        let mut img = GrayImage::new(4, 2);
        img.put_pixel(3, 1, Luma([200]));
        let grid = height_grid(&img).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.at(3, 1), 200);
        assert_eq!(grid.at(0, 0), 0);
    }

    #[test]
    fn color_grid_assigns_stable_indices() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(0, 1, Rgb([255, 0, 0]));
        img.put_pixel(1, 1, Rgb([0, 0, 0]));

        let (grid, pal) = color_grid(&img).unwrap();
        // scan order: red=1, green=2, black=3; repeats reuse the index
        assert_eq!(grid.at(0, 0), 1);
        assert_eq!(grid.at(1, 0), 2);
        assert_eq!(grid.at(0, 1), 1);
        assert_eq!(grid.at(1, 1), 3);
        assert_eq!(pal[1], 0x00_FF0000);
        assert_eq!(pal[2], 0x00_00FF00);
        assert_eq!(pal[0], 0x00_242438); // sky stays reserved
    }

    #[test]
    fn too_many_colors_rejected() {
        let mut img = RgbImage::new(16, 16); // 256 distinct colors
        for y in 0..16 {
            for x in 0..16 {
                img.put_pixel(x, y, Rgb([x as u8 * 16, y as u8 * 16, 1]));
            }
        }
        match color_grid(&img) {
            Err(AssetError::TooManyColors(n)) => assert_eq!(n, 256),
            other => panic!("expected TooManyColors, got {other:?}"),
        }
    }

    #[test]
    fn procedural_terrain_is_deterministic_and_well_formed() {
        let (a, pal) = procedural_terrain(64, 7).unwrap();
        let (b, _) = procedural_terrain(64, 7).unwrap();
        assert_eq!(a.width(), 64);
        assert_eq!(a.depth(), 64);
        for y in 0..64i32 {
            for x in 0..64i32 {
                assert_eq!(a.height_at(x, y), b.height_at(x, y));
                let c = a.color_at(x, y);
                assert!((1..=6).contains(&c), "band index {c} out of range");
            }
        }
        assert_eq!(pal[0], 0x00_242438);
    }

    #[test]
    fn different_seeds_differ() {
        let (a, _) = procedural_terrain(32, 1).unwrap();
        let (b, _) = procedural_terrain(32, 2).unwrap();
        let same = (0..32i32)
            .flat_map(|y| (0..32i32).map(move |x| (x, y)))
            .all(|(x, y)| a.height_at(x, y) == b.height_at(x, y));
        assert!(!same);
    }
}
