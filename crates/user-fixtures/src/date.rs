//! Random birthday sampling within a fixed calendar window.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::error::GenerationError;

/// Default number of days covered by a [`DateWindow`].
pub const DEFAULT_DAYS_RANGE: i64 = 40_000;

// `from_ymd_opt` only fails for invalid calendar dates.
const DEFAULT_CRITERION: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

/// An inclusive range of dates starting at `criterion` and spanning
/// `days_range` days.
///
/// The default window starts on 1900-01-01 and covers 40 000 days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use user_fixtures::DateWindow;
///
/// let window = DateWindow::default();
/// let latest = window.latest().expect("default window is valid");
///
/// assert_eq!(window.criterion(), NaiveDate::from_ymd_opt(1900, 1, 1).expect("date"));
/// assert_eq!(latest, NaiveDate::from_ymd_opt(2009, 7, 8).expect("date"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    criterion: NaiveDate,
    days_range: i64,
}

impl DateWindow {
    /// Creates a window starting at `criterion` and spanning `days_range`
    /// days.
    ///
    /// The range is validated lazily; see [`DateWindow::latest`].
    #[must_use]
    pub const fn new(criterion: NaiveDate, days_range: i64) -> Self {
        Self {
            criterion,
            days_range,
        }
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn criterion(&self) -> NaiveDate {
        self.criterion
    }

    /// Returns the number of days the window spans.
    #[must_use]
    pub const fn days_range(&self) -> i64 {
        self.days_range
    }

    /// Returns the last date of the window, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidDaysRange`] for a negative range and
    /// [`GenerationError::DateOutOfRange`] if the window runs past the last
    /// representable date.
    pub fn latest(&self) -> Result<NaiveDate, GenerationError> {
        let span = self.span()?;
        self.offset_by(span)
    }

    /// Returns `true` if `date` falls inside the window.
    ///
    /// Invalid windows contain no dates.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.latest()
            .is_ok_and(|latest| (self.criterion..=latest).contains(&date))
    }

    fn span(&self) -> Result<u64, GenerationError> {
        u64::try_from(self.days_range).map_err(|_| GenerationError::InvalidDaysRange {
            days_range: self.days_range,
        })
    }

    fn offset_by(&self, days: u64) -> Result<NaiveDate, GenerationError> {
        self.criterion
            .checked_add_days(Days::new(days))
            .ok_or(GenerationError::DateOutOfRange {
                criterion: self.criterion,
                days,
            })
    }
}

impl Default for DateWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CRITERION, DEFAULT_DAYS_RANGE)
    }
}

/// Samples a date uniformly from `window`, both ends inclusive.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDaysRange`] if the window's range is
/// negative, or [`GenerationError::DateOutOfRange`] if the sampled offset
/// runs past the last representable date.
pub fn random_date<R: Rng>(
    rng: &mut R,
    window: &DateWindow,
) -> Result<NaiveDate, GenerationError> {
    let span = window.span()?;
    let offset = rng.random_range(0..=span);
    window.offset_by(offset)
}
