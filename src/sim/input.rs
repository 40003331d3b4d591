//! Held-control set → one frame's worth of camera-pose deltas.
//!
//! All increments are per-frame constants, like the original: apparent
//! speed is tied to the frame rate on purpose (the viewer paces frames, so
//! the classic feel survives). Normalising by elapsed time was considered
//! and rejected — see DESIGN.md.

use bitflags::bitflags;

use crate::world::Camera;

bitflags! {
    /// Controls held down during the current frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Controls: u16 {
        const FORWARD      = 1 << 0;
        const BACK         = 1 << 1;
        const TURN_LEFT    = 1 << 2;
        const TURN_RIGHT   = 1 << 3;
        const STRAFE_LEFT  = 1 << 4;
        const STRAFE_RIGHT = 1 << 5;
        const RISE         = 1 << 6;
        const DESCEND      = 1 << 7;
        const PITCH_UP     = 1 << 8;
        const PITCH_DOWN   = 1 << 9;
    }
}

/// Which of the two historical control variants is active.
///
/// The source shipped two near-identical programs; here one flag selects
/// the feature set instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlScheme {
    /// Move, turn, rise/descend only.
    Classic,
    /// Adds strafing and horizon pitch.
    #[default]
    Extended,
}

/// Applies held controls to the camera, one frame at a time.
#[derive(Clone, Copy, Debug)]
pub struct InputTranslator {
    pub scheme: ControlScheme,
    move_step: f32,
    turn_step: f32,
    lift_step: f32,
    pitch_step: f32,
}

impl Default for InputTranslator {
    /// Reference increments: 1 map unit, 0.02 rad, 1 altitude unit,
    /// 2 horizon rows per frame.
    fn default() -> Self {
        Self {
            scheme: ControlScheme::default(),
            move_step: 1.0,
            turn_step: 0.02,
            lift_step: 1.0,
            pitch_step: 2.0,
        }
    }
}

impl InputTranslator {
    pub fn with_scheme(scheme: ControlScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    /// Fold one frame of held controls into the camera pose.
    ///
    /// No clamping anywhere: position roams the torus freely, yaw relies on
    /// `sin`/`cos` periodicity, altitude may dive below the terrain.
    pub fn apply(&self, held: Controls, cam: &mut Camera) {
        let fwd = cam.forward();
        if held.contains(Controls::FORWARD) {
            cam.x += fwd.x * self.move_step;
            cam.y += fwd.y * self.move_step;
        }
        if held.contains(Controls::BACK) {
            cam.x -= fwd.x * self.move_step;
            cam.y -= fwd.y * self.move_step;
        }

        if held.contains(Controls::TURN_LEFT) {
            cam.yaw += self.turn_step;
        }
        if held.contains(Controls::TURN_RIGHT) {
            cam.yaw -= self.turn_step;
        }

        if held.contains(Controls::RISE) {
            cam.altitude += self.lift_step;
        }
        if held.contains(Controls::DESCEND) {
            cam.altitude -= self.lift_step;
        }

        if self.scheme == ControlScheme::Extended {
            let right = cam.right();
            if held.contains(Controls::STRAFE_RIGHT) {
                cam.x += right.x * self.move_step;
                cam.y += right.y * self.move_step;
            }
            if held.contains(Controls::STRAFE_LEFT) {
                cam.x -= right.x * self.move_step;
                cam.y -= right.y * self.move_step;
            }
            if held.contains(Controls::PITCH_UP) {
                cam.horizon += self.pitch_step;
            }
            if held.contains(Controls::PITCH_DOWN) {
                cam.horizon -= self.pitch_step;
            }
        }
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn cam() -> Camera {
        Camera::new(0.0, 0.0, 50.0, 0.0, 0.0, 100.0)
    }

    #[test]
    fn turn_left_accumulates_exactly() {
        let tr = InputTranslator::default();
        let mut c = cam();
        for _ in 0..100 {
            tr.apply(Controls::TURN_LEFT, &mut c);
        }
        // N frames held = N increments, nothing else touches yaw
        assert!((c.yaw - 100.0 * 0.02).abs() < 1e-4);
    }

    #[test]
    fn yaw_is_never_wrapped() {
        let tr = InputTranslator::default();
        let mut c = cam();
        for _ in 0..1000 {
            tr.apply(Controls::TURN_LEFT, &mut c);
        }
        // 20 rad > 2π: translator must not reduce it
        assert!(c.yaw > 19.9);
    }

    #[test]
    fn forward_at_zero_yaw_decreases_y() {
        let tr = InputTranslator::default();
        let mut c = cam();
        tr.apply(Controls::FORWARD, &mut c);
        assert!((c.x - 0.0).abs() < 1e-6);
        assert!((c.y - -1.0).abs() < 1e-6);
    }

    #[test]
    fn back_undoes_forward() {
        let tr = InputTranslator::default();
        let mut c = cam();
        c.yaw = 1.3;
        let start = c;
        tr.apply(Controls::FORWARD, &mut c);
        tr.apply(Controls::BACK, &mut c);
        assert!((c.x - start.x).abs() < 1e-5);
        assert!((c.y - start.y).abs() < 1e-5);
    }

    #[test]
    fn opposed_controls_cancel_in_one_frame() {
        let tr = InputTranslator::default();
        let mut c = cam();
        tr.apply(Controls::TURN_LEFT | Controls::TURN_RIGHT, &mut c);
        assert_eq!(c.yaw, 0.0);
    }

    #[test]
    fn altitude_keys_step_by_one() {
        let tr = InputTranslator::default();
        let mut c = cam();
        tr.apply(Controls::RISE, &mut c);
        assert_eq!(c.altitude, 51.0);
        tr.apply(Controls::DESCEND, &mut c);
        tr.apply(Controls::DESCEND, &mut c);
        assert_eq!(c.altitude, 49.0);
    }

    #[test]
    fn strafe_right_at_zero_yaw_increases_x() {
        let tr = InputTranslator::default();
        let mut c = cam();
        tr.apply(Controls::STRAFE_RIGHT, &mut c);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!(c.y.abs() < 1e-6);
    }

    #[test]
    fn pitch_moves_horizon_by_two() {
        let tr = InputTranslator::default();
        let mut c = cam();
        tr.apply(Controls::PITCH_UP, &mut c);
        assert_eq!(c.horizon, 2.0);
    }

    #[test]
    fn classic_scheme_ignores_strafe_and_pitch() {
        let tr = InputTranslator::with_scheme(ControlScheme::Classic);
        let mut c = cam();
        tr.apply(
            Controls::STRAFE_RIGHT | Controls::PITCH_UP | Controls::PITCH_DOWN,
            &mut c,
        );
        assert_eq!(c, cam());
    }
}
