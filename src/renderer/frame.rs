use super::{FrameBuffer, FrustumCorners, march_column};
use crate::world::{Camera, TerrainMaps};

/// Classic mode-13h resolution the original targeted.
pub const SCREEN_WIDTH: usize = 320;
pub const SCREEN_HEIGHT: usize = 200;

/// Perspective scale: screen rows per unit of `elevation / depth`.
pub const SCALE_FACTOR: f32 = 150.0;

/// One-frame orchestrator: clear, compute frustum corners once, march every
/// column left to right.
///
/// Rendering a frame is a pure function of `(camera, maps)` — same inputs,
/// byte-identical output — and never fails. Columns touch disjoint pixels,
/// so the sequential sweep below is an ordering choice, not a requirement.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer {
    pub width: usize,
    pub height: usize,
    pub scale_factor: f32,
    /// Palette index the sky is cleared to.
    pub background: u8,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            scale_factor: SCALE_FACTOR,
            background: 0,
        }
    }
}

impl FrameRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Paint one complete frame into `fb`, reshaping it if needed.
    pub fn render_frame(&self, cam: &Camera, maps: &TerrainMaps, fb: &mut FrameBuffer) {
        fb.reset(self.width, self.height, self.background);
        let corners = FrustumCorners::from_pose(cam.yaw, cam.far_plane);
        for col in 0..self.width {
            march_column(col, cam, &corners, maps, self.scale_factor, fb);
        }
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
