//! Timestamped sensor samples
//!
//! The engine never fetches history itself: the host collaborator hands each
//! analyzer a slice of `Sample`s already filtered to the relevant lookback
//! window (10 minutes for wind, 2 hours for temperature, 1-12 configurable
//! hours for pressure). Slices are borrowed for the duration of one forecast
//! computation and never retained.
//!
//! Non-finite values (NaN, infinity) are treated as missing readings: they
//! are skipped by every iterator here and do not count toward the minimum
//! sample requirements. A channel full of garbage therefore degrades to the
//! same "insufficient data" behavior as an empty channel.

use crate::time::Timestamp;

/// A single sensor reading: timestamp plus numeric value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// When the reading was captured, in milliseconds
    pub timestamp: Timestamp,
    /// The reading itself (hPa, knots, degrees, °C or %RH depending on channel)
    pub value: f32,
}

impl Sample {
    /// Construct a sample
    pub const fn new(timestamp: Timestamp, value: f32) -> Self {
        Self { timestamp, value }
    }

    /// Whether the value is a usable number
    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
    }
}

/// Iterator over the finite samples of a slice, in input order
pub fn valid(samples: &[Sample]) -> impl Iterator<Item = &Sample> {
    samples.iter().filter(|s| s.is_valid())
}

/// Number of finite samples in the slice
pub fn valid_count(samples: &[Sample]) -> usize {
    valid(samples).count()
}

/// Arithmetic mean of the finite values, `None` when there are none
pub fn mean(samples: &[Sample]) -> Option<f32> {
    let mut sum = 0.0f32;
    let mut n = 0usize;
    for s in valid(samples) {
        sum += s.value;
        n += 1;
    }
    if n == 0 {
        None
    } else {
        Some(sum / n as f32)
    }
}

/// First finite sample (oldest, assuming chronological input)
pub fn first_valid(samples: &[Sample]) -> Option<&Sample> {
    valid(samples).next()
}

/// Last finite sample (newest, assuming chronological input)
pub fn last_valid(samples: &[Sample]) -> Option<&Sample> {
    valid(samples).last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_are_skipped() {
        let series = [
            Sample::new(0, 1013.0),
            Sample::new(1000, f32::NAN),
            Sample::new(2000, 1014.0),
            Sample::new(3000, f32::INFINITY),
        ];
        assert_eq!(valid_count(&series), 2);
        assert_eq!(first_valid(&series).unwrap().value, 1013.0);
        assert_eq!(last_valid(&series).unwrap().timestamp, 2000);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[Sample::new(0, f32::NAN)]), None);
    }

    #[test]
    fn mean_of_values() {
        let series = [Sample::new(0, 10.0), Sample::new(1, 20.0)];
        assert_eq!(mean(&series), Some(15.0));
    }
}
