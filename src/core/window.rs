use std::ops::Range;

pub const RANGE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Axis ranges for a trajectory plot, always anchored at the launch point.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisWindow {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl AxisWindow {
    /// Smallest padded window holding every point, stretched to a 2:1 span.
    pub fn fit<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (0.0f64, 0.0f64, 0.0f64, 0.0f64);
        for (x, y) in points.into_iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let raw_x_span = (max_x - min_x).max(1.0);
        let raw_y_span = (max_y - min_y).max(1.0);
        let mut x_span = raw_x_span * (1.0 + X_PADDING_RATIO);
        let mut y_span = raw_y_span * (1.0 + Y_PADDING_RATIO);

        if x_span / y_span < RANGE_TO_HEIGHT_RATIO {
            x_span = y_span * RANGE_TO_HEIGHT_RATIO;
        } else {
            y_span = x_span / RANGE_TO_HEIGHT_RATIO;
        }

        Self {
            x: min_x..min_x + x_span,
            y: min_y..min_y + y_span,
        }
    }

    pub fn width(&self) -> f64 {
        self.x.end - self.x.start
    }

    pub fn height(&self) -> f64 {
        self.y.end - self.y.start
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisWindow, RANGE_TO_HEIGHT_RATIO};

    #[test]
    fn keeps_two_to_one_ratio_for_flat_shots() {
        let window = AxisWindow::fit([(0.0, 0.0), (100.0, 5.0)]);
        assert!((window.width() / window.height() - RANGE_TO_HEIGHT_RATIO).abs() < 1e-12);
        assert!(window.x.end >= 100.0);
        assert_eq!(window.x.start, 0.0);
    }

    #[test]
    fn widens_range_for_steep_shots() {
        let window = AxisWindow::fit([(0.0, 0.0), (2.0, 50.0)]);
        assert!((window.width() / window.height() - RANGE_TO_HEIGHT_RATIO).abs() < 1e-12);
        assert!(window.y.end >= 50.0);
        assert!(window.width() >= 100.0);
    }

    #[test]
    fn includes_points_below_ground() {
        let window = AxisWindow::fit([(0.0, 0.0), (10.0, 3.0), (11.0, -0.5)]);
        assert_eq!(window.y.start, -0.5);
    }

    #[test]
    fn empty_input_gives_unit_window() {
        let window = AxisWindow::fit(std::iter::empty::<(f64, f64)>());
        assert!(window.height() >= 1.0);
        assert!(window.width() >= 2.0);
    }
}
