/// Page geometry: proportional column scaling and uniform week rows

use crate::{Error, PageConfig, Result};
use serde::{Deserialize, Serialize};

/// Axis-aligned box in layout space (points, origin at the top-left of the page)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrink by `dx` on the left and right, `dy` on the top and bottom
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }
}

pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Scale nominal column weights so the columns exactly fill `drawable_width`.
///
/// Every column gets `weight / sum(weights) * drawable_width`. The leading
/// columns are snapped to a power-of-two grid far below a printer dot, so
/// their running sum is exact and the last column takes the exact remainder:
/// the left-to-right sum of all widths compares equal to `drawable_width`.
pub fn scale_columns(nominal_widths: &[f64], drawable_width: f64) -> Result<Vec<f64>> {
    if nominal_widths.is_empty() {
        return Err(Error::ConfigError("no columns to lay out".to_string()));
    }
    if !is_positive(drawable_width) {
        return Err(Error::ConfigError(format!(
            "drawable width must be positive, got {drawable_width}"
        )));
    }
    if let Some(bad) = nominal_widths.iter().find(|w| !is_positive(**w)) {
        return Err(Error::ConfigError(format!(
            "nominal column widths must be positive, got {bad}"
        )));
    }

    let total: f64 = nominal_widths.iter().sum();
    let scale = drawable_width / total;
    let step = snap_step(drawable_width);
    let leading = &nominal_widths[..nominal_widths.len() - 1];

    let mut widths: Vec<f64> = leading.iter().map(|w| (w * scale / step).round() * step).collect();
    let placed: f64 = widths.iter().sum();
    widths.push(drawable_width - placed);

    if widths.iter().any(|w| !is_positive(*w)) || widths.iter().sum::<f64>() != drawable_width {
        return Err(Error::ConfigError(format!(
            "cannot split {drawable_width}pt into columns weighted {nominal_widths:?}"
        )));
    }
    Ok(widths)
}

// Power of two about 40 binades below `value`. Multiples of it up to
// `2 * value` need at most 42 significant bits, so sums of them are exact and
// `value - sum` is exact too.
fn snap_step(value: f64) -> f64 {
    let exponent = value.log2().floor() as i32;
    2f64.powi((exponent - 40).max(f64::MIN_EXP - 1))
}

/// Height of each body row once the header row is taken out.
pub fn row_height(drawable_height: f64, header_height: f64, row_count: usize) -> Result<f64> {
    if row_count == 0 {
        return Err(Error::ConfigError("row count must be at least 1".to_string()));
    }
    let height = (drawable_height - header_height) / row_count as f64;
    if !is_positive(height) {
        return Err(Error::ConfigError(format!(
            "rows would be {height}pt tall ({drawable_height}pt drawable, {header_height}pt header, {row_count} rows)"
        )));
    }
    Ok(height)
}

/// Resolved positions for every cell on the page.
///
/// Computed once per render and shared by the header and all week rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub drawable_width: f64,
    pub drawable_height: f64,
    pub header_height: f64,
    pub row_height: f64,
    pub column_widths: Vec<f64>,
    column_edges: Vec<f64>,
}

impl PageGeometry {
    pub fn compute(config: &PageConfig, nominal_widths: &[f64], week_rows: usize) -> Result<Self> {
        config.validate()?;
        let drawable_width = config.page_width - 2.0 * config.margin;
        let drawable_height = config.page_height - 2.0 * config.margin;

        let column_widths = scale_columns(nominal_widths, drawable_width)?;
        let row_height = row_height(drawable_height, config.header_height, week_rows)?;

        let mut column_edges = Vec::with_capacity(column_widths.len() + 1);
        let mut x = config.margin;
        column_edges.push(x);
        for w in &column_widths {
            x += w;
            column_edges.push(x);
        }

        log::debug!(
            "page geometry: {drawable_width}x{drawable_height}pt drawable, {} columns, rows {row_height}pt",
            column_widths.len()
        );

        Ok(Self {
            origin_x: config.margin,
            origin_y: config.margin,
            drawable_width,
            drawable_height,
            header_height: config.header_height,
            row_height,
            column_widths,
            column_edges,
        })
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn header_cell(&self, column: usize) -> Rect {
        Rect::new(
            self.column_edges[column],
            self.origin_y,
            self.column_widths[column],
            self.header_height,
        )
    }

    /// Cell for zero-based `week` in `column`
    pub fn week_cell(&self, week: usize, column: usize) -> Rect {
        Rect::new(
            self.column_edges[column],
            self.origin_y + self.header_height + week as f64 * self.row_height,
            self.column_widths[column],
            self.row_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(widths: &[f64]) -> f64 {
        widths.iter().sum()
    }

    #[test]
    fn scale_columns_is_proportional() {
        let widths = scale_columns(&[1.0, 2.0, 1.0], 100.0).unwrap();
        assert_eq!(widths, vec![25.0, 50.0, 25.0]);
    }

    #[test]
    fn scale_columns_sums_exactly() {
        let cases: &[(&[f64], f64)] = &[
            (&[40.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 80.0], 752.0),
            (&[40.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0], 752.0),
            (&[1.0, 1.0, 1.0], 100.0),
            (&[3.0, 7.0, 11.0, 13.0], 751.3),
            (&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7], 1.0 / 3.0),
            (&[1.0, 99.0], 0.3),
            (&[99.0, 1.0], 1e6 + 0.7),
            (&[42.0], 17.25),
        ];
        for (weights, drawable) in cases {
            let widths = scale_columns(weights, *drawable).unwrap();
            assert_eq!(widths.len(), weights.len());
            assert_eq!(sum(&widths), *drawable, "{weights:?} into {drawable}");
            assert!(widths.iter().all(|w| *w > 0.0));
        }
    }

    #[test]
    fn scale_columns_rejects_degenerate_input() {
        assert!(matches!(scale_columns(&[], 100.0), Err(Error::ConfigError(_))));
        assert!(matches!(scale_columns(&[1.0], 0.0), Err(Error::ConfigError(_))));
        assert!(matches!(scale_columns(&[1.0], -5.0), Err(Error::ConfigError(_))));
        assert!(matches!(scale_columns(&[1.0, 0.0], 10.0), Err(Error::ConfigError(_))));
        assert!(matches!(scale_columns(&[1.0], f64::NAN), Err(Error::ConfigError(_))));
    }

    #[test]
    fn row_height_fills_remaining_space() {
        let h = row_height(572.0, 20.0, 10).unwrap();
        assert!((h - 55.2).abs() < 1e-9);
        assert!(h * 10.0 + 20.0 <= 572.0 + 1e-9);
        assert!((h * 10.0 + 20.0 - 572.0).abs() < 1e-9);

        assert!(matches!(row_height(20.0, 20.0, 10), Err(Error::ConfigError(_))));
        assert!(matches!(row_height(10.0, 20.0, 10), Err(Error::ConfigError(_))));
        assert!(matches!(row_height(100.0, 20.0, 0), Err(Error::ConfigError(_))));
    }

    #[test]
    fn geometry_tiles_the_drawable_area() {
        let config = PageConfig::default();
        let g = PageGeometry::compute(&config, &[40.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 80.0], 10)
            .unwrap();
        assert_eq!(g.drawable_width, 752.0);
        assert_eq!(g.drawable_height, 572.0);

        let header = g.header_cell(0);
        assert_eq!((header.x, header.y, header.height), (20.0, 20.0, 20.0));

        let last = g.week_cell(9, g.column_count() - 1);
        assert!((last.right() - 772.0).abs() < 1e-9);
        assert!((last.bottom() - 592.0).abs() < 1e-9);

        let first_row = g.week_cell(0, 1);
        assert_eq!(first_row.y, 40.0);
        assert_eq!(first_row.x, g.header_cell(1).x);
    }

    #[test]
    fn scale_columns_sums_exactly_when_the_remainder_has_finer_bits() {
        let cases: &[(&[f64], f64)] = &[
            (&[427.6801030927835, 662.9996907216495], 30822.346153846152),
            (&[383.87, 937.61], 53914.192307692305),
        ];
        for (weights, drawable) in cases {
            let widths = scale_columns(weights, *drawable).unwrap();
            assert_eq!(sum(&widths), *drawable, "{weights:?} into {drawable}");
        }
    }

    #[test]
    fn scale_columns_sums_exactly_for_random_weights() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(0x7e4_3ee4);
        for _ in 0..50_000 {
            let count = rng.random_range(1..=12usize);
            let weights: Vec<f64> = (0..count).map(|_| rng.random_range(0.01..1031.0)).collect();
            let drawable = rng.random_range(0.5..76923.0);

            let widths = scale_columns(&weights, drawable).unwrap();
            assert_eq!(widths.len(), count);
            assert_eq!(sum(&widths), drawable, "{weights:?} into {drawable}");
            assert!(widths.iter().all(|w| *w > 0.0), "{weights:?} into {drawable}");

            let total: f64 = weights.iter().sum();
            for (w, width) in weights.iter().zip(&widths) {
                let ideal = w / total * drawable;
                assert!((width - ideal).abs() <= drawable * 1e-9, "{weights:?} into {drawable}");
            }
        }
    }

    #[test]
    fn rect_inset_clamps() {
        let r = Rect::new(0.0, 0.0, 3.0, 10.0).inset(2.0, 1.0);
        assert_eq!(r, Rect::new(2.0, 1.0, 0.0, 8.0));
    }
}
