use glam::{Vec2, vec2};

/// Left and right endpoints of the visible far-plane segment, as offsets
/// from the camera position.
///
/// The canonical (yaw = 0) corners are `(-zfar, -zfar)` and `(zfar, -zfar)`;
/// any other yaw rotates them around the camera. Cheap enough to recompute
/// every frame, which it must be since yaw and the far plane can change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumCorners {
    pub left: Vec2,
    pub right: Vec2,
}

impl FrustumCorners {
    pub fn from_pose(yaw: f32, far_plane: f32) -> Self {
        let (s, c) = yaw.sin_cos();
        Self {
            left: vec2((-c - s) * far_plane, (s - c) * far_plane),
            right: vec2((c - s) * far_plane, (-s - c) * far_plane),
        }
    }

    /// Per-depth-step ray increment for screen column `col` of `width`.
    ///
    /// Linear interpolation across the far-plane segment at `col / width`,
    /// divided back by the far-plane distance so one march step advances
    /// exactly one depth unit.
    #[inline]
    pub fn ray_step(&self, col: usize, width: usize, far_plane: f32) -> Vec2 {
        let t = col as f32 / width as f32;
        (self.left + (self.right - self.left) * t) / far_plane
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn canonical_corners_at_zero_yaw() {
        let fc = FrustumCorners::from_pose(0.0, 500.0);
        assert!((fc.left - vec2(-500.0, -500.0)).length() < 1e-3);
        assert!((fc.right - vec2(500.0, -500.0)).length() < 1e-3);
    }

    #[test]
    fn corners_match_reference_formulas() {
        let (yaw, zfar): (f32, f32) = (0.73, 350.0);
        let (s, c) = yaw.sin_cos();
        let fc = FrustumCorners::from_pose(yaw, zfar);
        assert_eq!(fc.left.x, (-c - s) * zfar);
        assert_eq!(fc.left.y, (s - c) * zfar);
        assert_eq!(fc.right.x, (c - s) * zfar);
        assert_eq!(fc.right.y, (-s - c) * zfar);
    }

    #[test]
    fn ray_step_sweeps_left_to_right() {
        let fc = FrustumCorners::from_pose(0.0, 100.0);
        let l = fc.ray_step(0, 320, 100.0);
        let m = fc.ray_step(160, 320, 100.0);
        let r = fc.ray_step(319, 320, 100.0);
        assert!((l - vec2(-1.0, -1.0)).length() < 1e-4);
        assert!((m - vec2(0.0, -1.0)).length() < 1e-4);
        assert!(r.x > m.x && l.x < m.x);
        // every step advances exactly one depth unit along forward
        assert!((l.y - -1.0).abs() < 1e-4 && (r.y - -1.0).abs() < 1e-4);
    }

    #[test]
    fn half_turn_reverses_each_ray() {
        let ahead = FrustumCorners::from_pose(0.0, 200.0);
        let behind = FrustumCorners::from_pose(PI, 200.0);
        for col in [0usize, 57, 160, 319] {
            let a = ahead.ray_step(col, 320, 200.0);
            let b = behind.ray_step(col, 320, 200.0);
            assert!((a + b).length() < 1e-4, "column {col} not reversed");
        }
    }
}
