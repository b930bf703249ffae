//! Episode numbering and watch-progress arithmetic.
//!
//! Pure functions shared by the persistence layer (which builds new series)
//! and the API layer (which reports progress). No I/O happens here.

use std::ops::RangeInclusive;

use crate::error::CoreError;
use crate::types::EpisodeNumber;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum number of episodes a single series may be created with.
///
/// Episodes are materialized eagerly, so this bounds the size of one insert.
pub const MAX_EPISODES_PER_SERIES: u32 = 10_000;

// ---------------------------------------------------------------------------
// Episode numbering
// ---------------------------------------------------------------------------

/// Validate a requested episode count and convert it to the storage type.
pub fn validate_episode_count(count: u32) -> Result<EpisodeNumber, CoreError> {
    if count > MAX_EPISODES_PER_SERIES {
        return Err(CoreError::Validation(format!(
            "qt_episodes must be <= {MAX_EPISODES_PER_SERIES}, got {count}"
        )));
    }
    EpisodeNumber::try_from(count)
        .map_err(|_| CoreError::Validation(format!("qt_episodes out of range: {count}")))
}

/// Episode numbers for a freshly created series: `1..=count`.
///
/// A count of zero (or less) yields an empty range.
pub fn episode_numbers(count: EpisodeNumber) -> RangeInclusive<EpisodeNumber> {
    1..=count
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Percentage of watched episodes, rounded to the nearest integer.
///
/// Halves round up (away from zero), so 1 of 8 reports 13. Computed in
/// integer arithmetic as `(200 * watched + total) / (2 * total)`.
/// A series without episodes reports 0.
pub fn progress_percent(watched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let watched = watched.min(total) as u64;
    let total = total as u64;
    // Bounded by 100 after the clamp above.
    ((200 * watched + total) / (2 * total)) as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_episode_count ----------------------------------------------

    #[test]
    fn zero_episodes_is_allowed() {
        assert_eq!(validate_episode_count(0).unwrap(), 0);
    }

    #[test]
    fn count_at_limit_is_allowed() {
        assert_eq!(
            validate_episode_count(MAX_EPISODES_PER_SERIES).unwrap(),
            10_000
        );
    }

    #[test]
    fn rejects_count_above_limit() {
        let err = validate_episode_count(MAX_EPISODES_PER_SERIES + 1).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    // -- episode_numbers -----------------------------------------------------

    #[test]
    fn numbers_start_at_one() {
        let numbers: Vec<_> = episode_numbers(3).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn zero_count_has_no_numbers() {
        assert_eq!(episode_numbers(0).count(), 0);
    }

    // -- progress_percent ----------------------------------------------------

    #[test]
    fn one_of_three_is_33() {
        assert_eq!(progress_percent(1, 3), 33);
    }

    #[test]
    fn two_of_four_is_50() {
        assert_eq!(progress_percent(2, 4), 50);
    }

    #[test]
    fn two_of_three_rounds_up_to_67() {
        assert_eq!(progress_percent(2, 3), 67);
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        // 12.5% -> 13
        assert_eq!(progress_percent(1, 8), 13);
    }

    #[test]
    fn nothing_watched_is_zero() {
        assert_eq!(progress_percent(0, 12), 0);
    }

    #[test]
    fn everything_watched_is_100() {
        assert_eq!(progress_percent(7, 7), 100);
    }

    #[test]
    fn empty_series_is_zero() {
        assert_eq!(progress_percent(0, 0), 0);
    }
}
