//! Grid geometry definitions
//!
//! Axis records collected from the header are kept here together with the
//! quantities derived from them (dimensions, spacing).

/// Three-component vector used for origins, axis vectors and extents
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl core::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Cell counts along the three logical axes, each at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub nu: u32,
    pub nv: u32,
    pub nw: u32,
}

impl Dimensions {
    /// Build dimensions, rejecting zero counts
    pub const fn new(nu: u32, nv: u32, nw: u32) -> Option<Self> {
        if nu == 0 || nv == 0 || nw == 0 {
            return None;
        }
        Some(Self { nu, nv, nw })
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> u64 {
        self.nu as u64 * self.nv as u64 * self.nw as u64
    }

    pub const fn as_array(&self) -> [u32; 3] {
        [self.nu, self.nv, self.nw]
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} x {} x {}", self.nu, self.nv, self.nw)
    }
}

/// Geometric model of an axis-aligned structured grid
///
/// Every field is optional because headers are parsed best-effort: a
/// header lacking `AXIS_N` still yields a geometry, just without
/// dimensions or spacing.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGeometry {
    pub dimensions: Option<Dimensions>,
    pub origin: Option<Vec3>,
    pub u: Option<Vec3>,
    pub v: Option<Vec3>,
    pub w: Option<Vec3>,
    pub spacing: Option<Vec3>,
    pub min_bound: Option<Vec3>,
    pub max_bound: Option<Vec3>,
}

impl GridGeometry {
    /// Number of cells every property of this grid must hold
    pub fn cell_count(&self) -> Option<u64> {
        self.dimensions.map(|d| d.cell_count())
    }
}

/// Spacing along one axis: vector length over `count - 1` intervals
///
/// A single-cell axis has no intervals, so the raw length is returned.
pub fn axis_spacing(axis: Vec3, count: u32) -> f64 {
    let length = axis.magnitude();
    if count > 1 {
        length / f64::from(count - 1)
    } else {
        length
    }
}

/// Per-axis spacing for the given axis vectors and dimensions
pub fn grid_spacing(u: Vec3, v: Vec3, w: Vec3, dims: Dimensions) -> Vec3 {
    Vec3::new(
        axis_spacing(u, dims.nu),
        axis_spacing(v, dims.nv),
        axis_spacing(w, dims.nw),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_reject_zero() {
        assert!(Dimensions::new(0, 1, 1).is_none());
        assert!(Dimensions::new(1, 0, 1).is_none());
        assert!(Dimensions::new(1, 1, 0).is_none());
        assert_eq!(Dimensions::new(10, 20, 5).map(|d| d.cell_count()), Some(1000));
    }

    #[test]
    fn test_axis_spacing() {
        let u = Vec3::new(1000.0, 0.0, 0.0);
        assert_eq!(axis_spacing(u, 10), 1000.0 / 9.0);
        // Single cell falls back to the raw length
        assert_eq!(axis_spacing(u, 1), 1000.0);
        assert_eq!(axis_spacing(Vec3::new(3.0, 4.0, 0.0), 2), 5.0);
        assert_eq!(axis_spacing(Vec3::ZERO, 7), 0.0);
    }

    #[test]
    fn test_grid_spacing_non_negative() {
        let dims = Dimensions::new(3, 1, 5).unwrap();
        let spacing = grid_spacing(
            Vec3::new(-20.0, 0.0, 0.0),
            Vec3::new(0.0, -7.5, 0.0),
            Vec3::new(0.0, 0.0, -100.0),
            dims,
        );
        assert_eq!(spacing, Vec3::new(10.0, 7.5, 25.0));
    }
}
