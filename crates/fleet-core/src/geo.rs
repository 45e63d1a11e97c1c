//! Geographic coordinate type.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  At the
//! equator this gives ~1 m precision — more than sufficient for city-scale
//! vehicle tracking while halving memory consumption vs. `f64`.

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
