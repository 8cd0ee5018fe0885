//! Batch generation with name uniqueness enforcement.
//!
//! A batch is generated in one pass and accepted only if every name in it is
//! distinct. A batch containing any duplicate is discarded whole and
//! regenerated from scratch, up to a configured number of attempts.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::date::{DateWindow, random_date};
use crate::error::GenerationError;
use crate::name::{DEFAULT_NAME_LENGTH, name_space_size, random_name};
use crate::record::UserRecord;

/// Default number of users in a batch.
pub const DEFAULT_USER_COUNT: usize = 20_000;

/// Default number of batches generated before giving up on uniqueness.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Parameters controlling batch generation.
///
/// # Example
///
/// ```
/// use user_fixtures::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_name_length(6).with_max_attempts(5);
///
/// assert_eq!(config.name_length(), 6);
/// assert_eq!(config.max_attempts(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    name_length: usize,
    date_window: DateWindow,
    max_attempts: usize,
}

impl GeneratorConfig {
    /// Sets the length of generated names.
    #[must_use]
    pub const fn with_name_length(mut self, name_length: usize) -> Self {
        self.name_length = name_length;
        self
    }

    /// Sets the window birthdays are drawn from.
    #[must_use]
    pub const fn with_date_window(mut self, date_window: DateWindow) -> Self {
        self.date_window = date_window;
        self
    }

    /// Sets how many batches may be generated before failing.
    ///
    /// Zero is treated as a single attempt.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the length of generated names.
    #[must_use]
    pub const fn name_length(&self) -> usize {
        self.name_length
    }

    /// Returns the window birthdays are drawn from.
    #[must_use]
    pub const fn date_window(&self) -> &DateWindow {
        &self.date_window
    }

    /// Returns how many batches may be generated before failing.
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name_length: DEFAULT_NAME_LENGTH,
            date_window: DateWindow::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Builds the random source used for generation.
///
/// A `Some` seed yields a deterministic generator; `None` seeds from the
/// operating system.
#[must_use]
pub fn fixture_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64)
}

/// Generates `count` users whose names are pairwise distinct.
///
/// Records appear in generation order. The same RNG state and configuration
/// always produce the same batch.
///
/// # Errors
///
/// Returns [`GenerationError`] if:
/// - The date window is invalid
/// - `count` exceeds the number of distinct names of the configured length
/// - Memory for `count` records cannot be reserved
/// - Every attempt produced a batch with a duplicate name
///
/// # Example
///
/// ```
/// use user_fixtures::{GeneratorConfig, fixture_rng, generate_users};
///
/// let mut rng = fixture_rng(Some(42));
/// let users = generate_users(&mut rng, 5, &GeneratorConfig::default()).expect("generated");
///
/// assert_eq!(users.len(), 5);
/// // Same seed produces identical users
/// let again = generate_users(&mut fixture_rng(Some(42)), 5, &GeneratorConfig::default())
///     .expect("generated");
/// assert_eq!(users, again);
/// ```
pub fn generate_users<R: Rng>(
    rng: &mut R,
    count: usize,
    config: &GeneratorConfig,
) -> Result<Vec<UserRecord>, GenerationError> {
    config.date_window().latest()?;

    let capacity = name_space_size(config.name_length());
    if u128::try_from(count).is_ok_and(|requested| requested > capacity) {
        return Err(GenerationError::NameSpaceTooSmall {
            count,
            name_length: config.name_length(),
        });
    }

    let max_attempts = config.max_attempts().max(1);
    for attempt in 1..=max_attempts {
        let batch = generate_batch(rng, count, config)?;
        let distinct = count_distinct_names(&batch);
        if distinct == count {
            debug!(count, attempt, "user batch accepted");
            return Ok(batch);
        }
        warn!(
            attempt,
            distinct,
            requested = count,
            "duplicate names in user batch; regenerating"
        );
    }

    Err(GenerationError::GenerationFailed { max_attempts })
}

fn generate_batch<R: Rng>(
    rng: &mut R,
    count: usize,
    config: &GeneratorConfig,
) -> Result<Vec<UserRecord>, GenerationError> {
    let mut users = Vec::new();
    users
        .try_reserve_exact(count)
        .map_err(|_| GenerationError::BatchTooLarge { count })?;
    for _ in 0..count {
        let name = random_name(rng, config.name_length());
        let birthday = random_date(rng, config.date_window())?;
        users.push(UserRecord { name, birthday });
    }
    Ok(users)
}

fn count_distinct_names(users: &[UserRecord]) -> usize {
    users
        .iter()
        .map(|user| user.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::name::is_valid_name;

    /// Generates users with the given seed and asserts a predicate holds for
    /// every user.
    ///
    /// # Panics
    ///
    /// Panics if generation fails or the predicate returns `false` for any
    /// user.
    fn assert_all_users<F>(config: &GeneratorConfig, count: usize, predicate: F)
    where
        F: Fn(&UserRecord) -> bool,
    {
        let mut rng = fixture_rng(Some(42));
        let users = generate_users(&mut rng, count, config).expect("generation should succeed");

        for user in &users {
            assert!(predicate(user), "Predicate failed for user: {user:?}");
        }
    }

    #[fixture]
    fn config() -> GeneratorConfig {
        GeneratorConfig::default()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    #[case(1_000)]
    fn generates_requested_number_of_unique_users(config: GeneratorConfig, #[case] count: usize) {
        let mut rng = fixture_rng(Some(7));
        let users = generate_users(&mut rng, count, &config).expect("generated");

        assert_eq!(users.len(), count);
        assert_eq!(count_distinct_names(&users), count);
    }

    #[rstest]
    fn generation_is_deterministic(config: GeneratorConfig) {
        let first = generate_users(&mut fixture_rng(Some(2026)), 50, &config).expect("generated");
        let second = generate_users(&mut fixture_rng(Some(2026)), 50, &config).expect("generated");

        assert_eq!(first, second);
    }

    #[rstest]
    fn different_seeds_produce_different_users(config: GeneratorConfig) {
        let first = generate_users(&mut fixture_rng(Some(1)), 10, &config).expect("generated");
        let second = generate_users(&mut fixture_rng(Some(2)), 10, &config).expect("generated");

        assert_ne!(first, second);
    }

    #[rstest]
    fn unseeded_runs_differ(config: GeneratorConfig) {
        let first = generate_users(&mut fixture_rng(None), 10, &config).expect("generated");
        let second = generate_users(&mut fixture_rng(None), 10, &config).expect("generated");

        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[rstest]
    fn all_names_are_valid(config: GeneratorConfig) {
        assert_all_users(&config, 200, |user| is_valid_name(&user.name, 10));
    }

    #[rstest]
    fn all_birthdays_fall_within_window(config: GeneratorConfig) {
        let window = *config.date_window();
        assert_all_users(&config, 200, |user| window.contains(user.birthday));
    }

    #[test]
    fn honours_custom_name_length_and_window() {
        let criterion = NaiveDate::from_ymd_opt(2020, 2, 28).expect("valid date");
        let window = DateWindow::new(criterion, 2);
        let config = GeneratorConfig::default()
            .with_name_length(4)
            .with_date_window(window);

        assert_all_users(&config, 100, |user| {
            is_valid_name(&user.name, 4) && window.contains(user.birthday)
        });
    }

    #[test]
    fn retries_until_a_batch_is_unique() {
        // Five one-letter names collide in roughly a third of batches.
        let config = GeneratorConfig::default().with_name_length(1);
        for seed in 0..20 {
            let users =
                generate_users(&mut fixture_rng(Some(seed)), 5, &config).expect("generated");
            assert_eq!(count_distinct_names(&users), 5);
        }
    }

    #[test]
    fn fails_after_exhausting_attempts() {
        let config = GeneratorConfig::default()
            .with_name_length(1)
            .with_max_attempts(3);

        let result = generate_users(&mut fixture_rng(Some(42)), 26, &config);
        assert_eq!(
            result,
            Err(GenerationError::GenerationFailed { max_attempts: 3 })
        );
    }

    #[test]
    fn zero_max_attempts_still_tries_once() {
        let config = GeneratorConfig::default().with_max_attempts(0);

        let users = generate_users(&mut fixture_rng(Some(3)), 3, &config).expect("generated");
        assert_eq!(users.len(), 3);
    }

    #[test]
    fn rejects_counts_beyond_name_space() {
        let config = GeneratorConfig::default().with_name_length(1);

        let result = generate_users(&mut fixture_rng(Some(42)), 27, &config);
        assert_eq!(
            result,
            Err(GenerationError::NameSpaceTooSmall {
                count: 27,
                name_length: 1,
            })
        );
    }

    #[test]
    fn reports_unallocatable_batches() {
        let config = GeneratorConfig::default().with_name_length(64);

        let result = generate_users(&mut fixture_rng(Some(42)), usize::MAX, &config);
        assert_eq!(
            result,
            Err(GenerationError::BatchTooLarge { count: usize::MAX })
        );
    }

    #[test]
    fn zero_length_names_allow_a_single_user() {
        let config = GeneratorConfig::default().with_name_length(0);

        let users = generate_users(&mut fixture_rng(Some(42)), 1, &config).expect("generated");
        assert_eq!(users.len(), 1);
        assert_eq!(users.first().map(|u| u.name.as_str()), Some(""));
    }

    #[test]
    fn rejects_negative_days_range_before_generating() {
        let criterion = NaiveDate::from_ymd_opt(1900, 1, 1).expect("valid date");
        let config = GeneratorConfig::default().with_date_window(DateWindow::new(criterion, -10));

        let result = generate_users(&mut fixture_rng(Some(42)), 0, &config);
        assert_eq!(
            result,
            Err(GenerationError::InvalidDaysRange { days_range: -10 })
        );
    }
}
