//! Error types for forecast computation
//!
//! The engine's contract is "always return a complete, plausible forecast",
//! so almost nothing here ever escapes `ForecastEngine::compute`. Analyzers
//! that hit `InsufficientData` substitute their documented degraded default
//! and flag it through history counts; `UnresolvedRegion` degrades to a
//! generic label and fallback text. Only `InvalidConfiguration` is returned
//! to the caller, and only at configuration time.
//!
//! Errors are kept small and `Copy` with inline data only (no `String`),
//! so they stay cheap on embedded targets.

use thiserror_no_std::Error;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Analysis errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum AnalysisError {
    /// Fewer usable samples than the analyzer's minimum
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of finite samples the analyzer needs
        required: usize,
        /// Finite samples actually present
        available: usize,
    },

    /// Location not contained by any configured region bounding box
    #[error("No region contains ({latitude}, {longitude})")]
    UnresolvedRegion {
        /// Latitude that failed to match
        latitude: f32,
        /// Longitude that failed to match
        longitude: f32,
    },

    /// Out-of-range configuration, rejected at configuration time
    #[error("Configuration value {value} outside [{min}, {max}]")]
    InvalidConfiguration {
        /// The offending value
        value: f32,
        /// Lower bound (inclusive)
        min: f32,
        /// Upper bound (inclusive)
        max: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for AnalysisError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientData { required, available } => {
                defmt::write!(fmt, "Need {} samples, have {}", required, available)
            }
            Self::UnresolvedRegion { latitude, longitude } => {
                defmt::write!(fmt, "No region at ({}, {})", latitude, longitude)
            }
            Self::InvalidConfiguration { value, min, max } => {
                defmt::write!(fmt, "Config {} outside [{}, {}]", value, min, max)
            }
        }
    }
}
