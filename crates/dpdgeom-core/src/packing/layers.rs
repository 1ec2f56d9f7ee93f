use super::SQRT_3;
use nalgebra::Point3;

/// Position of a close-packed layer within the ABC stacking sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StackingPosition {
    A,
    B,
    C,
}

impl StackingPosition {
    /// Row offset in y as a fraction of the row spacing.
    fn row_offset_fraction(self) -> f64 {
        match self {
            StackingPosition::A => 0.0,
            StackingPosition::B => 1.0 / 3.0,
            StackingPosition::C => 2.0 / 3.0,
        }
    }

    fn stagger_parity(self) -> i64 {
        match self {
            StackingPosition::A | StackingPosition::C => 0,
            StackingPosition::B => 1,
        }
    }
}

pub(crate) const HEXAGONAL_STACKING: [StackingPosition; 2] =
    [StackingPosition::A, StackingPosition::B];

pub(crate) const FACE_CENTERED_STACKING: [StackingPosition; 3] =
    [StackingPosition::A, StackingPosition::B, StackingPosition::C];

/// Number of points `start, start + spacing, ...` that do not exceed `edge`.
pub(crate) fn axis_count(edge: f64, start: f64, spacing: f64) -> usize {
    if edge < start {
        0
    } else {
        ((edge - start) / spacing) as usize + 1
    }
}

/// In-plane arrangement of the sphere centers of one lattice layer.
///
/// Rows run along x at `y = row_offset + row * row_spacing`. In staggered layers a row whose
/// index plus the stagger parity is odd is shifted by half a column, which turns the square grid
/// into the triangular grid of a close-packed plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayerPattern {
    column_spacing: f64,
    row_spacing: f64,
    row_offset: f64,
    stagger_parity: Option<i64>,
}

impl LayerPattern {
    pub fn square(particle_radius: f64) -> Self {
        let spacing = 2.0 * particle_radius;
        Self {
            column_spacing: spacing,
            row_spacing: spacing,
            row_offset: 0.0,
            stagger_parity: None,
        }
    }

    pub fn close_packed(particle_radius: f64, position: StackingPosition) -> Self {
        let row_spacing = SQRT_3 * particle_radius;
        Self {
            column_spacing: 2.0 * particle_radius,
            row_spacing,
            row_offset: position.row_offset_fraction() * row_spacing,
            stagger_parity: Some(position.stagger_parity()),
        }
    }

    #[inline]
    fn row_y(&self, row: i64) -> f64 {
        self.row_offset + row as f64 * self.row_spacing
    }

    #[inline]
    fn row_x_start(&self, row: i64) -> f64 {
        match self.stagger_parity {
            Some(parity) if (row + parity).rem_euclid(2) == 1 => 0.5 * self.column_spacing,
            _ => 0.0,
        }
    }

    /// Rows `-j` and `j` coincide up to the sign of y only when the layer is not shifted.
    #[inline]
    fn is_mirror_symmetric_in_y(&self) -> bool {
        self.row_offset == 0.0
    }

    /// Appends the centers of this layer at height `z` that lie in `[0, x] x [0, y]`.
    pub fn fill_rectangle(&self, x_length: f64, y_length: f64, z: f64, out: &mut Vec<Point3<f64>>) {
        let rows = axis_count(y_length, self.row_offset, self.row_spacing);
        for row in 0..rows as i64 {
            let y = self.row_y(row);
            let x_start = self.row_x_start(row);
            let columns = axis_count(x_length, x_start, self.column_spacing);
            out.extend(
                (0..columns).map(|i| Point3::new(x_start + i as f64 * self.column_spacing, y, z)),
            );
        }
    }

    /// Appends the centers of this layer at height `z` that lie inside the origin-centered
    /// sphere of radius `sphere_radius`.
    ///
    /// Row and column ranges are upper bounds padded by one step; membership is decided only by
    /// the distance from the origin, so centers exactly on the surface are kept.
    pub fn fill_disc(&self, z: f64, sphere_radius: f64, out: &mut Vec<Point3<f64>>) {
        if z.abs() > sphere_radius {
            return;
        }
        let disc_radius = (sphere_radius * sphere_radius - z * z).max(0.0).sqrt();

        if self.is_mirror_symmetric_in_y() {
            let max_row = (disc_radius / self.row_spacing) as i64 + 1;
            for row in 0..=max_row {
                let y = self.row_y(row);
                self.fill_row(row, y, z, sphere_radius, out);
                if row > 0 {
                    self.fill_row(row, -y, z, sphere_radius, out);
                }
            }
        } else {
            let min_row = ((-disc_radius - self.row_offset) / self.row_spacing).ceil() as i64 - 1;
            let max_row = ((disc_radius - self.row_offset) / self.row_spacing).floor() as i64 + 1;
            for row in min_row..=max_row {
                self.fill_row(row, self.row_y(row), z, sphere_radius, out);
            }
        }
    }

    fn fill_row(&self, row: i64, y: f64, z: f64, sphere_radius: f64, out: &mut Vec<Point3<f64>>) {
        let x_start = self.row_x_start(row);
        if x_start > sphere_radius {
            return;
        }

        let mut columns = ((sphere_radius - x_start) / self.column_spacing) as usize + 2;
        while columns > 0 {
            let x = x_start + (columns - 1) as f64 * self.column_spacing;
            if Point3::new(x, y, z).coords.norm() <= sphere_radius {
                break;
            }
            columns -= 1;
        }

        for i in 0..columns {
            let x = x_start + i as f64 * self.column_spacing;
            out.push(Point3::new(x, y, z));
            if x != 0.0 {
                out.push(Point3::new(-x, y, z));
            }
        }
    }
}

/// Stacks `patterns` cyclically from `z = 0` upwards inside `[0, x] x [0, y] x [0, z]`.
pub(crate) fn fill_cuboid(
    patterns: &[LayerPattern],
    layer_spacing: f64,
    x_length: f64,
    y_length: f64,
    z_length: f64,
) -> Vec<Point3<f64>> {
    let mut points = Vec::new();
    let layers = axis_count(z_length, 0.0, layer_spacing);
    for layer in 0..layers {
        let pattern = &patterns[layer % patterns.len()];
        pattern.fill_rectangle(x_length, y_length, layer as f64 * layer_spacing, &mut points);
    }
    points
}

/// Fills a sphere with a stacking whose layer `-k` matches layer `k`, so every layer above the
/// equator is reflected below it.
pub(crate) fn fill_sphere_mirrored(
    patterns: &[LayerPattern],
    layer_spacing: f64,
    sphere_radius: f64,
) -> Vec<Point3<f64>> {
    let mut points = Vec::new();
    let max_layer = (sphere_radius / layer_spacing) as usize + 1;
    for layer in 0..=max_layer {
        let pattern = &patterns[layer % patterns.len()];
        let z = layer as f64 * layer_spacing;
        pattern.fill_disc(z, sphere_radius, &mut points);
        if layer > 0 {
            pattern.fill_disc(-z, sphere_radius, &mut points);
        }
    }
    points
}

/// Fills a sphere layer by layer from the bottom, continuing the stacking cycle below the
/// equator instead of reflecting it.
pub(crate) fn fill_sphere_stacked(
    patterns: &[LayerPattern],
    layer_spacing: f64,
    sphere_radius: f64,
) -> Vec<Point3<f64>> {
    let mut points = Vec::new();
    let max_layer = (sphere_radius / layer_spacing) as i64 + 1;
    let cycle = patterns.len() as i64;
    for layer in -max_layer..=max_layer {
        let pattern = &patterns[layer.rem_euclid(cycle) as usize];
        pattern.fill_disc(layer as f64 * layer_spacing, sphere_radius, &mut points);
    }
    points
}
