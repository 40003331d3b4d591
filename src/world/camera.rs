use glam::{Vec2, vec2};
use thiserror::Error;

/// A pose field left non-finite by upstream input corruption.
#[derive(Error, Debug, PartialEq)]
#[error("camera field `{field}` is not finite ({value})")]
pub struct CameraError {
    pub field: &'static str,
    pub value: f32,
}

/// Fly-over view-point above the terrain plane.
///
/// * `x`, `y` live on the (wrapping) map plane; `altitude` is height above
///   the terrain datum, not above the ground below the camera.
/// * `horizon` shifts every projected row down the screen — the poor man's
///   pitch. Schemes without pitch keys simply never change it.
/// * Nothing is clamped and `yaw` is never wrapped; `sin`/`cos` periodicity
///   makes any finite angle valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub altitude: f32,
    pub yaw: f32,
    pub horizon: f32,
    pub far_plane: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32, altitude: f32, yaw: f32, horizon: f32, far_plane: f32) -> Self {
        Self {
            x,
            y,
            altitude,
            yaw,
            horizon,
            far_plane,
        }
    }

    /// Spawn pose of the original flyover: map centre, 150 units up,
    /// horizon at mid-screen, 500-unit far plane.
    pub fn classic_start() -> Self {
        Self::new(512.0, 512.0, 150.0, 0.0, 100.0, 500.0)
    }

    /// Map-plane position as a vector.
    #[inline]
    pub fn pos(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector the camera flies along when moving forward.
    ///
    /// Matches the frustum orientation: at `yaw = 0` forward is `(0, -1)`,
    /// i.e. towards decreasing map `y`.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        vec2(-s, -c)
    }

    /// Unit vector to the camera's right, for strafing.
    #[inline]
    pub fn right(&self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        vec2(c, -s)
    }

    /*──────────────────────── preconditions ─────────────────────────*/

    /// Reject a non-finite pose before it can corrupt a frame.
    ///
    /// Meant to run at setup time; during the loop the only mutation source
    /// is the input translator, which adds finite constants.
    pub fn validate(&self) -> Result<(), CameraError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("altitude", self.altitude),
            ("yaw", self.yaw),
            ("horizon", self.horizon),
            ("far_plane", self.far_plane),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CameraError { field, value });
            }
        }
        Ok(())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
