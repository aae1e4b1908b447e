//! Timestamp type and window arithmetic
//!
//! All sample timestamps are milliseconds since epoch (or since device boot
//! for monotonic sources). The engine only ever computes differences, so the
//! choice of epoch is the caller's.

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Milliseconds per hour, for slope conversions
pub const MS_PER_HOUR: u64 = 3_600_000;

/// Milliseconds per minute
pub const MS_PER_MINUTE: u64 = 60_000;

/// Elapsed hours between two timestamps, saturating at zero
pub fn hours_between(earlier: Timestamp, later: Timestamp) -> f32 {
    later.saturating_sub(earlier) as f32 / MS_PER_HOUR as f32
}

/// True when `t` lies inside `[center - before, center + after]`
///
/// Used for the sunrise/sunset suppression windows in the temperature
/// analyzer.
pub fn within_window(t: Timestamp, center: Timestamp, before: u64, after: u64) -> bool {
    t >= center.saturating_sub(before) && t <= center.saturating_add(after)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_between_saturates() {
        assert_eq!(hours_between(2 * MS_PER_HOUR, 0), 0.0);
        assert_eq!(hours_between(0, 3 * MS_PER_HOUR), 3.0);
        assert_eq!(hours_between(0, MS_PER_HOUR / 2), 0.5);
    }

    #[test]
    fn window_bounds_inclusive() {
        let center = 10 * MS_PER_HOUR;
        assert!(within_window(center - MS_PER_HOUR, center, MS_PER_HOUR, 0));
        assert!(within_window(center + MS_PER_HOUR, center, 0, MS_PER_HOUR));
        assert!(!within_window(center + MS_PER_HOUR + 1, center, 0, MS_PER_HOUR));
    }
}
