use eframe::egui::{Pos2, Vec2};

/// Physical canvas size in centimeters, fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paper {
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Paper {
    /// Full usable bed of an AxiDraw SE/A1.
    pub const FULL_BED: Paper = Paper {
        width_cm: 50.0,
        height_cm: 35.3,
    };

    pub const A3: Paper = Paper {
        width_cm: 42.0,
        height_cm: 29.7,
    };

    pub const A4: Paper = Paper {
        width_cm: 29.7,
        height_cm: 21.0,
    };

    pub fn new(width_cm: f64, height_cm: f64) -> Self {
        Paper {
            width_cm,
            height_cm,
        }
    }
}

impl Default for Paper {
    fn default() -> Self {
        Paper::FULL_BED
    }
}

/// A point on the paper, in centimeters.
///
/// Deliberately a different type from the screen-space [`Pos2`]: every
/// crossing between the two spaces goes through [`to_paper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperPoint {
    pub x_cm: f64,
    pub y_cm: f64,
}

/// Maps a screen-space point to paper-space centimeters.
///
/// Linear in each axis: the window origin maps to the paper origin and the
/// far window corner maps to the far paper corner. Points outside the window
/// map outside the paper; no clamping is applied. The caller must ensure
/// `window` has positive extent in both axes.
pub fn to_paper(point: Pos2, window: Vec2, paper: Paper) -> PaperPoint {
    PaperPoint {
        x_cm: point.x as f64 / window.x as f64 * paper.width_cm,
        y_cm: point.y as f64 / window.y as f64 * paper.height_cm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eframe::egui::{pos2, vec2};

    const WINDOW: Vec2 = vec2(720.0, 576.0);

    #[test]
    fn origin_maps_to_origin() {
        let p = to_paper(pos2(0.0, 0.0), WINDOW, Paper::FULL_BED);
        assert_relative_eq!(p.x_cm, 0.0);
        assert_relative_eq!(p.y_cm, 0.0);
    }

    #[test]
    fn window_corner_maps_to_paper_corner() {
        let p = to_paper(pos2(720.0, 576.0), WINDOW, Paper::FULL_BED);
        assert_relative_eq!(p.x_cm, 50.0, epsilon = 1e-9);
        assert_relative_eq!(p.y_cm, 35.3, epsilon = 1e-9);
    }

    #[test]
    fn window_center_maps_to_paper_center() {
        let p = to_paper(pos2(360.0, 288.0), WINDOW, Paper::FULL_BED);
        assert_relative_eq!(p.x_cm, 25.0, epsilon = 1e-9);
        assert_relative_eq!(p.y_cm, 17.65, epsilon = 1e-9);
    }

    #[test]
    fn linear_in_each_axis() {
        let paper = Paper::new(10.0, 20.0);
        let a = to_paper(pos2(90.0, 30.0), WINDOW, paper);
        let b = to_paper(pos2(180.0, 60.0), WINDOW, paper);
        assert_relative_eq!(b.x_cm, 2.0 * a.x_cm, epsilon = 1e-9);
        assert_relative_eq!(b.y_cm, 2.0 * a.y_cm, epsilon = 1e-9);
    }

    #[test]
    fn outside_window_is_not_clamped() {
        let p = to_paper(pos2(-72.0, 633.6), WINDOW, Paper::FULL_BED);
        assert_relative_eq!(p.x_cm, -5.0, epsilon = 1e-9);
        assert!(p.y_cm > 35.3);
    }
}
