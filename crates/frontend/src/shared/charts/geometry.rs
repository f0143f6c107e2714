//! Pure SVG geometry for the dashboard charts

use std::f64::consts::PI;

/// Rectangle inside the SVG viewport where data is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Plot area of a `width` x `height` viewport with room for axis labels
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            left: padding * 2.0,
            top: padding,
            width: (width - padding * 3.0).max(0.0),
            height: (height - padding * 2.0).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// X of point `index` out of `count`, first on the left edge, last on the right
    pub fn x_at(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.left + self.width / 2.0
        } else {
            self.left + self.width * index as f64 / (count - 1) as f64
        }
    }

    /// Y of `value` on a 0..=max scale
    pub fn y_at(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.bottom();
        }
        self.bottom() - self.height * (value / max)
    }
}

/// Rounded-up axis maximum for the given values. Never zero.
pub fn nice_max(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0_f64, f64::max);
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }

    let magnitude = 10_f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0]
        .into_iter()
        .find(|step| *step >= normalized)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced ticks from 0 to `max`
pub fn y_ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

pub fn line_points(values: &[f64], max: f64, area: &PlotArea) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (area.x_at(i, values.len()), area.y_at(*v, max)))
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarRect {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// One bar per value; `gap` is the share of each category slot left empty (0.3 = 30%)
pub fn bar_rects(values: &[f64], max: f64, area: &PlotArea, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let slot = area.width / values.len() as f64;
    let width = slot * (1.0 - gap.clamp(0.0, 1.0));

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = area.y_at(v.max(0.0), max);
            BarRect {
                x: area.left + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: area.bottom() - y,
            }
        })
        .collect()
}

/// Pie slice in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Share of the whole, 0.0..=1.0
    pub fraction: f64,
}

impl PieSlice {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Slices for the given values. Negative values count as zero; all-zero input gives no slices.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = v.max(0.0) / total;
            let start_angle = angle;
            angle += fraction * 2.0 * PI;
            PieSlice {
                start_angle,
                end_angle: angle,
                fraction,
            }
        })
        .collect()
}

/// Point on a circle at `angle` radians clockwise from 12 o'clock
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// SVG path of a pie slice. A full circle is drawn as two half arcs.
pub fn slice_path(cx: f64, cy: f64, radius: f64, slice: &PieSlice) -> String {
    let sweep = slice.end_angle - slice.start_angle;
    if sweep <= 0.0 {
        return String::new();
    }

    if sweep >= 2.0 * PI - 1e-9 {
        let (top_x, top_y) = polar(cx, cy, radius, 0.0);
        let (bottom_x, bottom_y) = polar(cx, cy, radius, PI);
        return format!(
            "M {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} A {r:.2} {r:.2} 0 1 1 {:.2} {:.2} Z",
            top_x,
            top_y,
            bottom_x,
            bottom_y,
            top_x,
            top_y,
            r = radius
        );
    }

    let (start_x, start_y) = polar(cx, cy, radius, slice.start_angle);
    let (end_x, end_y) = polar(cx, cy, radius, slice.end_angle);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {r:.2} {r:.2} 0 {} 1 {:.2} {:.2} Z",
        cx,
        cy,
        start_x,
        start_y,
        large_arc,
        end_x,
        end_y,
        r = radius
    )
}

/// Whole-percent label of a slice: `42%`
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(Vec::<f64>::new()), 1.0);
        assert_eq!(nice_max(vec![0.0, -5.0]), 1.0);
        assert_eq!(nice_max(vec![64500.0, 12000.0]), 80000.0);
        assert_eq!(nice_max(vec![200.0]), 200.0);
        assert_eq!(nice_max(vec![201.0]), 250.0);
        assert_eq!(nice_max(vec![9.5]), 10.0);
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(y_ticks(100.0, 0), vec![0.0]);
    }

    #[test]
    fn test_plot_area_mapping() {
        let area = PlotArea::new(200.0, 120.0, 10.0);
        assert_eq!(area.left, 20.0);
        assert_eq!(area.right(), 190.0);
        assert_eq!(area.bottom(), 110.0);

        assert_eq!(area.x_at(0, 3), 20.0);
        assert_eq!(area.x_at(2, 3), 190.0);
        assert_eq!(area.x_at(0, 1), 105.0);

        assert_eq!(area.y_at(0.0, 50.0), 110.0);
        assert_eq!(area.y_at(50.0, 50.0), 10.0);
        assert_eq!(area.y_at(10.0, 0.0), 110.0);
    }

    #[test]
    fn test_line_points_attr() {
        let area = PlotArea::new(200.0, 120.0, 10.0);
        let points = line_points(&[0.0, 100.0], 100.0, &area);
        assert_eq!(points, vec![(20.0, 110.0), (190.0, 10.0)]);
        assert_eq!(points_attr(&points), "20.0,110.0 190.0,10.0");
        assert_eq!(points_attr(&[]), "");
    }

    #[test]
    fn test_bar_rects() {
        let area = PlotArea::new(230.0, 120.0, 10.0);
        let bars = bar_rects(&[100.0, 50.0], 100.0, &area, 0.3);
        assert_eq!(bars.len(), 2);
        assert!(close(bars[0].width, 70.0));
        assert!(close(bars[0].x, 35.0));
        assert!(close(bars[0].height, 100.0));
        assert!(close(bars[1].height, 50.0));
        assert!(close(bars[1].y, 60.0));
        assert!(close(bars[1].center_x(), 170.0));
        assert!(bar_rects(&[], 1.0, &area, 0.3).is_empty());
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[300.0, 100.0]);
        assert_eq!(slices.len(), 2);
        assert!(close(slices[0].fraction, 0.75));
        assert!(close(slices[0].end_angle, 1.5 * PI));
        assert!(close(slices[1].start_angle, slices[0].end_angle));
        assert!(close(slices[1].end_angle, 2.0 * PI));
        assert_eq!(percent_label(slices[1].fraction), "25%");
    }

    #[test]
    fn test_pie_slices_without_total() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn test_slice_paths() {
        let quarter = PieSlice {
            start_angle: 0.0,
            end_angle: PI / 2.0,
            fraction: 0.25,
        };
        assert_eq!(
            slice_path(100.0, 100.0, 50.0, &quarter),
            "M 100.00 100.00 L 100.00 50.00 A 50.00 50.00 0 0 1 150.00 100.00 Z"
        );

        let full = pie_slices(&[42.0]);
        let path = slice_path(100.0, 100.0, 50.0, &full[0]);
        assert!(path.starts_with("M 100.00 50.00 A"));
        assert_eq!(path.matches(" A ").count(), 2);

        let empty = PieSlice {
            start_angle: 1.0,
            end_angle: 1.0,
            fraction: 0.0,
        };
        assert_eq!(slice_path(100.0, 100.0, 50.0, &empty), "");
    }
}
