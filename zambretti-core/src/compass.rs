//! Compass Sectors and Circular Statistics
//!
//! ## Why circular statistics?
//!
//! Wind direction is angular data: 350° and 10° are 20° apart, not 340°.
//! A plain arithmetic mean of {350, 10} gives 180 - the exact opposite of
//! the true average heading. The fix is vector averaging: treat each
//! bearing as a unit vector, sum the vectors, and take the angle of the
//! resultant:
//!
//! ```text
//! mean = atan2(Σ sin(θᵢ), Σ cos(θᵢ))
//! ```
//!
//! When the resultant is (near) zero - e.g. exactly opposing samples - the
//! mean direction is undefined and we report `None` rather than an
//! arbitrary angle.
//!
//! ## Sectors
//!
//! Bearings are quantized into the classic 16-point compass rose. Sector
//! boundaries are centered on the cardinal bearings, so anything within
//! ±11.25° of due north is `N`. The discriminant order matches the rose
//! going clockwise from north, which lets the catalogs index per-sector
//! arrays directly by `sector as usize`.

/// One of the 16 compass sectors, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassSector {
    /// North (348.75°..11.25°)
    N = 0,
    /// North-northeast
    Nne = 1,
    /// Northeast
    Ne = 2,
    /// East-northeast
    Ene = 3,
    /// East
    E = 4,
    /// East-southeast
    Ese = 5,
    /// Southeast
    Se = 6,
    /// South-southeast
    Sse = 7,
    /// South
    S = 8,
    /// South-southwest
    Ssw = 9,
    /// Southwest
    Sw = 10,
    /// West-southwest
    Wsw = 11,
    /// West
    W = 12,
    /// West-northwest
    Wnw = 13,
    /// Northwest
    Nw = 14,
    /// North-northwest
    Nnw = 15,
}

/// Width of one compass sector in degrees
pub const SECTOR_WIDTH_DEG: f32 = 22.5;

impl CompassSector {
    /// All sectors in rose order, usable for per-sector table indexing
    pub const ALL: [CompassSector; 16] = [
        Self::N,
        Self::Nne,
        Self::Ne,
        Self::Ene,
        Self::E,
        Self::Ese,
        Self::Se,
        Self::Sse,
        Self::S,
        Self::Ssw,
        Self::Sw,
        Self::Wsw,
        Self::W,
        Self::Wnw,
        Self::Nw,
        Self::Nnw,
    ];

    /// Quantize a continuous bearing (degrees, any sign) to a sector
    pub fn from_degrees(degrees: f32) -> Self {
        let mut deg = degrees % 360.0;
        if deg < 0.0 {
            deg += 360.0;
        }
        let index = libm::roundf(deg / SECTOR_WIDTH_DEG) as usize % 16;
        Self::ALL[index]
    }

    /// Conventional short label, e.g. `"N-NE"`
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "N-NE",
            Self::Ne => "NE",
            Self::Ene => "E-NE",
            Self::E => "E",
            Self::Ese => "E-SE",
            Self::Se => "SE",
            Self::Sse => "S-SE",
            Self::S => "S",
            Self::Ssw => "S-SW",
            Self::Sw => "SW",
            Self::Wsw => "W-SW",
            Self::W => "W",
            Self::Wnw => "W-NW",
            Self::Nw => "NW",
            Self::Nnw => "N-NW",
        }
    }

    /// Cardinal direction the wind settles toward when veering (clockwise)
    pub const fn veering_target(self) -> CompassSector {
        match self {
            Self::N | Self::Nne | Self::Ne | Self::Ene => Self::E,
            Self::E | Self::Ese | Self::Se | Self::Sse => Self::S,
            Self::S | Self::Ssw | Self::Sw | Self::Wsw => Self::W,
            Self::W | Self::Wnw | Self::Nw | Self::Nnw => Self::N,
        }
    }

    /// Cardinal direction the wind settles toward when backing (counter-clockwise)
    pub const fn backing_target(self) -> CompassSector {
        match self {
            Self::N => Self::W,
            Self::Nne | Self::Ne | Self::Ene | Self::E => Self::N,
            Self::Ese | Self::Se | Self::Sse | Self::S => Self::E,
            Self::Ssw | Self::Sw | Self::Wsw | Self::W => Self::S,
            Self::Wnw | Self::Nw | Self::Nnw => Self::W,
        }
    }
}

/// Minimum resultant length below which a circular mean is undefined
///
/// With unit vectors, perfectly opposing samples cancel to zero; anything
/// this close to zero has no meaningful mean direction.
const MIN_RESULTANT: f32 = 1e-4;

/// Circular mean of bearings in degrees, `None` for empty or degenerate input
///
/// Result is normalized to `[0, 360)`.
pub fn circular_mean(degrees: impl Iterator<Item = f32>) -> Option<f32> {
    let mut sin_sum = 0.0f32;
    let mut cos_sum = 0.0f32;
    let mut n = 0usize;

    for deg in degrees {
        if !deg.is_finite() {
            continue;
        }
        let rad = deg.to_radians();
        sin_sum += libm::sinf(rad);
        cos_sum += libm::cosf(rad);
        n += 1;
    }

    if n == 0 {
        return None;
    }

    if libm::sqrtf(sin_sum * sin_sum + cos_sum * cos_sum) < MIN_RESULTANT {
        return None;
    }

    let mut mean = libm::atan2f(sin_sum, cos_sum).to_degrees();
    if mean < 0.0 {
        mean += 360.0;
    }
    // A tiny negative angle can round up to exactly 360.0
    if mean >= 360.0 {
        mean = 0.0;
    }
    Some(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantization_wraps_at_north() {
        assert_eq!(CompassSector::from_degrees(0.0), CompassSector::N);
        assert_eq!(CompassSector::from_degrees(359.0), CompassSector::N);
        assert_eq!(CompassSector::from_degrees(348.8), CompassSector::N);
        assert_eq!(CompassSector::from_degrees(11.0), CompassSector::N);
        assert_eq!(CompassSector::from_degrees(22.5), CompassSector::Nne);
        assert_eq!(CompassSector::from_degrees(180.0), CompassSector::S);
        assert_eq!(CompassSector::from_degrees(-90.0), CompassSector::W);
    }

    #[test]
    fn mean_across_north_boundary() {
        // The defining case: a plain average of {350, 10} would be 180.
        let mean = circular_mean([350.0, 10.0].into_iter()).unwrap();
        assert!(mean < 1.0 || mean > 359.0, "got {mean}");
    }

    #[test]
    fn mean_of_single_bearing() {
        let mean = circular_mean([135.0].into_iter()).unwrap();
        assert!((mean - 135.0).abs() < 0.01);
    }

    #[test]
    fn opposing_bearings_have_no_mean() {
        assert_eq!(circular_mean([0.0, 180.0].into_iter()), None);
        assert_eq!(circular_mean(core::iter::empty()), None);
    }

    #[test]
    fn veering_and_backing_targets() {
        assert_eq!(CompassSector::Sw.veering_target(), CompassSector::W);
        assert_eq!(CompassSector::Sw.backing_target(), CompassSector::S);
        assert_eq!(CompassSector::N.backing_target(), CompassSector::W);
        assert_eq!(CompassSector::Nnw.veering_target(), CompassSector::N);
    }
}
