//! Per-column ray march — the heart of the voxel-space technique.
//!
//! One ray walks outward from the camera in whole depth steps. Every
//! sampled terrain cell projects to a screen row by perspective division,
//! and only the span strictly above the lowest row drawn so far gets
//! painted. Occlusion falls out of the near-to-far march order alone;
//! no depth is ever compared between two cells.

use super::{FrameBuffer, FrustumCorners};
use crate::world::{Camera, TerrainMaps};

/// Render screen column `col` into `fb`.
///
/// Columns share no mutable state, so callers may run them in any order
/// (or in parallel over disjoint buffers) and get identical pixels.
pub fn march_column(
    col: usize,
    cam: &Camera,
    corners: &FrustumCorners,
    maps: &TerrainMaps,
    scale_factor: f32,
    fb: &mut FrameBuffer,
) {
    let step = corners.ray_step(col, fb.width(), cam.far_plane);
    let mut ray = cam.pos();
    let screen_h = fb.height() as i32;

    // Lowest screen row not yet painted; rows grow downward, so higher
    // terrain means a smaller row index.
    let mut frontier = screen_h;

    for z in 1..cam.far_plane as i32 {
        ray += step;
        let (mx, my) = (ray.x as i32, ray.y as i32);

        let elevation = maps.height_at(mx, my) as f32;
        let row = (((cam.altitude - elevation) / z as f32) * scale_factor + cam.horizon).floor()
            as i32;
        let row = row.clamp(0, screen_h - 1);

        if row < frontier {
            let color = maps.color_at(mx, my);
            fb.fill_column_span(col, row as usize, frontier as usize, color);
            frontier = row;
            if frontier == 0 {
                // Column fully painted; nothing farther can draw higher.
                break;
            }
        }
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
