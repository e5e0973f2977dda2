//! Smoothed cursor following.

use eframe::egui::Pos2;
use std::time::Duration;

/// Tick period of the follow loop. The timer re-arms only after the previous
/// tick returns, so ticks are delayed under load rather than queued.
pub const TICK: Duration = Duration::from_millis(16);

/// Fraction of the remaining cursor distance closed per pen-down tick.
pub const DRAG_SMOOTHING: f32 = 0.1;

/// Advances the pen position by one tick.
///
/// Pen up: snap straight to the cursor. Pen down: first-order exponential
/// smoothing toward the cursor, which gives the stroke its trailing lag.
pub fn follow_step(current: Pos2, cursor: Pos2, pen_down: bool) -> Pos2 {
    if pen_down {
        current + (cursor - current) * DRAG_SMOOTHING
    } else {
        cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eframe::egui::pos2;

    #[test]
    fn pen_up_snaps_to_cursor() {
        let next = follow_step(pos2(500.0, -40.0), pos2(12.5, 30.0), false);
        assert_eq!(next, pos2(12.5, 30.0));
    }

    #[test]
    fn pen_down_closes_a_tenth_of_the_gap() {
        let next = follow_step(pos2(0.0, 0.0), pos2(100.0, 50.0), true);
        assert_relative_eq!(next.x, 10.0, epsilon = 1e-5);
        assert_relative_eq!(next.y, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn pen_down_converges_geometrically() {
        let cursor = pos2(100.0, 50.0);
        let mut pos = pos2(0.0, 0.0);
        let initial = (cursor - pos).length();

        let ticks = 20;
        for _ in 0..ticks {
            pos = follow_step(pos, cursor, true);
        }

        let expected = 0.9_f32.powi(ticks) * initial;
        assert_relative_eq!((cursor - pos).length(), expected, max_relative = 1e-3);
    }

    #[test]
    fn pen_down_at_cursor_stays_put() {
        let cursor = pos2(42.0, 24.0);
        let next = follow_step(cursor, cursor, true);
        assert_eq!(next, cursor);
    }
}
