//! Splitting a year range into the 5-year periods the CORDEX dataset
//! expects as `start_year` / `end_year` request values.
//!
//! Two modes exist:
//! - regular stride ([`stride_windows`]): 5-year windows anchored at the
//!   requested start year, used when the whole experiment period is asked for;
//! - grid filter ([`grid_windows`]): the canonical 1951-anchored period grid
//!   filtered to the requested window.
//!
//! In grid mode the start and end lists are filtered independently, so a
//! window that does not line up with the grid can yield lists of different
//! lengths. [`RangePolicy::Lenient`] keeps that output as is;
//! [`RangePolicy::Strict`] rejects it.

use log::warn;

use crate::error::{Error, Result};
use crate::experiment::Experiment;

/// Width of one period in years.
pub const PERIOD_YEARS: i32 = 5;

/// First year of the canonical period grid.
pub const GRID_FIRST_YEAR: i32 = 1951;

/// Last year of the canonical period grid.
pub const GRID_LAST_YEAR: i32 = 2100;

/// Iterator over the canonical `(start, end)` periods:
/// 1951-1955, 1956-1960, ..., 2096-2100.
pub fn period_grid() -> impl Iterator<Item = (i32, i32)> {
    (GRID_FIRST_YEAR..=GRID_LAST_YEAR)
        .step_by(PERIOD_YEARS as usize)
        .map(|s| (s, s + PERIOD_YEARS - 1))
}

/// What to do when the requested range falls outside the experiment period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Log a warning and return best-effort output.
    #[default]
    Lenient,
    /// Fail with [`Error::Range`] or [`Error::UnbalancedPartition`].
    Strict,
}

/// Start and end years, as request-ready strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub start_years: Vec<String>,
    pub end_years: Vec<String>,
}

impl Partition {
    fn from_years(
        starts: impl IntoIterator<Item = i32>,
        ends: impl IntoIterator<Item = i32>,
    ) -> Self {
        Self {
            start_years: starts.into_iter().map(|y| y.to_string()).collect(),
            end_years: ends.into_iter().map(|y| y.to_string()).collect(),
        }
    }

    /// Both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.start_years.is_empty() && self.end_years.is_empty()
    }

    /// Both lists have the same length, i.e. every start has an end.
    pub fn is_balanced(&self) -> bool {
        self.start_years.len() == self.end_years.len()
    }

    /// Zip starts and ends into `(start, end)` pairs.
    ///
    /// Returns `None` when the partition is unbalanced.
    pub fn periods(&self) -> Option<Vec<(&str, &str)>> {
        if !self.is_balanced() {
            return None;
        }
        Some(
            self.start_years
                .iter()
                .zip(&self.end_years)
                .map(|(s, e)| (s.as_str(), e.as_str()))
                .collect(),
        )
    }
}

/// Windows of [`PERIOD_YEARS`] anchored at `start_year`.
///
/// Starts run `start_year, start_year + 5, ...` while strictly below
/// `end_year`; ends run `start_year + 4, start_year + 9, ...` while at or
/// below `end_year`. A span that is not a multiple of five therefore ends up
/// with one start more than it has ends.
pub fn stride_windows(start_year: i32, end_year: i32) -> Partition {
    let step = PERIOD_YEARS as usize;
    Partition::from_years(
        (start_year..end_year).step_by(step),
        (start_year + PERIOD_YEARS - 1..=end_year).step_by(step),
    )
}

/// Canonical grid periods whose start, respectively end, lies in
/// `[start_year, end_year]`.
pub fn grid_windows(start_year: i32, end_year: i32) -> Partition {
    let within = |y: i32| start_year <= y && y <= end_year;
    Partition::from_years(
        period_grid().map(|(s, _)| s).filter(|s| within(*s)),
        period_grid().map(|(_, e)| e).filter(|e| within(*e)),
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Partitioner {
    pub policy: RangePolicy,
}

impl Partitioner {
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    pub fn lenient() -> Self {
        Self::new(RangePolicy::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(RangePolicy::Strict)
    }

    /// Partition `[start_year, end_year]` for `experiment`.
    ///
    /// With `full_timespan` the given years are ignored and the experiment's
    /// whole period is split in regular-stride mode; otherwise the canonical
    /// grid is filtered to the requested window.
    pub fn partition(
        &self,
        experiment: &str,
        start_year: i32,
        end_year: i32,
        full_timespan: bool,
    ) -> Result<Partition> {
        let experiment: Experiment = experiment.parse()?;
        let (earliest, latest) = experiment.valid_interval().ok_or_else(|| {
            Error::Configuration(format!("experiment {experiment} has no year periods"))
        })?;

        let (start_year, end_year) = if full_timespan {
            (earliest, latest)
        } else {
            (start_year, end_year)
        };

        if !(earliest <= start_year && start_year <= end_year && end_year <= latest) {
            let err = Error::Range {
                start: start_year,
                end: end_year,
                earliest,
                latest,
            };
            match self.policy {
                RangePolicy::Strict => return Err(err),
                RangePolicy::Lenient => warn!("{err}; continuing with best-effort periods"),
            }
        }

        let partition = if full_timespan {
            stride_windows(start_year, end_year)
        } else {
            grid_windows(start_year, end_year)
        };

        if self.policy == RangePolicy::Strict && !partition.is_balanced() {
            return Err(Error::UnbalancedPartition {
                starts: partition.start_years.len(),
                ends: partition.end_years.len(),
            });
        }

        Ok(partition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn grid_has_thirty_periods() {
        let grid: Vec<_> = period_grid().collect();
        assert_eq!(grid.len(), 30);
        assert_eq!(grid[0], (1951, 1955));
        assert_eq!(grid[1], (1956, 1960));
        assert_eq!(grid[10], (2001, 2005));
        assert_eq!(grid[11], (2006, 2010));
        assert_eq!(grid[29], (2096, 2100));
    }

    #[test]
    fn full_timespan_covers_experiment_period() {
        let p = Partitioner::strict();
        for exp in ["historical", "rcp_2_6", "rcp_4_5", "rcp_8_5"] {
            let e: Experiment = exp.parse().unwrap();
            let (earliest, latest) = e.valid_interval().unwrap();

            let part = p.partition(exp, 0, 0, true).unwrap();
            let periods = part.periods().unwrap();
            assert!(!periods.is_empty());

            let mut expected_start = earliest;
            for (s, e) in &periods {
                let s: i32 = s.parse().unwrap();
                let e: i32 = e.parse().unwrap();
                assert_eq!(s, expected_start, "gap or overlap in {exp}");
                assert_eq!(e, s + 4);
                expected_start = e + 1;
            }
            assert_eq!(expected_start - 1, latest);
        }
    }

    #[test]
    fn full_timespan_historical() {
        let part = Partitioner::lenient()
            .partition("historical", 1990, 1995, true)
            .unwrap();
        assert_eq!(part.start_years.len(), 11);
        assert_eq!(part.start_years.first().unwrap(), "1951");
        assert_eq!(part.start_years.last().unwrap(), "2001");
        assert_eq!(part.end_years.first().unwrap(), "1955");
        assert_eq!(part.end_years.last().unwrap(), "2005");
    }

    #[test]
    fn stride_single_window() {
        let part = stride_windows(2006, 2010);
        assert_eq!(part.start_years, years(&["2006"]));
        assert_eq!(part.end_years, years(&["2010"]));
    }

    #[test]
    fn stride_short_span_has_start_without_end() {
        let part = stride_windows(2006, 2008);
        assert_eq!(part.start_years, years(&["2006"]));
        assert!(part.end_years.is_empty());
        assert!(!part.is_balanced());
        assert_eq!(part.periods(), None);
    }

    #[test]
    fn stride_equal_bounds() {
        let part = stride_windows(2006, 2006);
        assert!(part.start_years.is_empty());
        assert!(part.end_years.is_empty());
        assert!(part.is_empty());
    }

    #[test]
    fn stride_is_relative_to_query() {
        let part = stride_windows(2008, 2017);
        assert_eq!(part.start_years, years(&["2008", "2013"]));
        assert_eq!(part.end_years, years(&["2012", "2017"]));
    }

    #[test]
    fn grid_aligned_window() {
        let part = Partitioner::strict()
            .partition("historical", 1951, 1955, false)
            .unwrap();
        assert_eq!(part.start_years, years(&["1951"]));
        assert_eq!(part.end_years, years(&["1955"]));
    }

    #[test]
    fn grid_multi_period_window() {
        let part = grid_windows(2006, 2020);
        assert_eq!(part.start_years, years(&["2006", "2011", "2016"]));
        assert_eq!(part.end_years, years(&["2010", "2015", "2020"]));
    }

    #[test]
    fn grid_misaligned_windows_filter_independently() {
        let part = grid_windows(1952, 1957);
        assert_eq!(part.start_years, years(&["1956"]));
        assert_eq!(part.end_years, years(&["1955"]));

        let part = grid_windows(1953, 1963);
        assert_eq!(part.start_years, years(&["1956", "1961"]));
        assert_eq!(part.end_years, years(&["1955", "1960"]));
    }

    #[test]
    fn lenient_keeps_unbalanced_grid_output() {
        // 1950 is before the historical period, so this also warns.
        let part = Partitioner::lenient()
            .partition("historical", 1950, 1958, false)
            .unwrap();
        assert_eq!(part.start_years, years(&["1951", "1956"]));
        assert_eq!(part.end_years, years(&["1955"]));
        assert!(!part.is_balanced());
    }

    #[test]
    fn strict_rejects_unbalanced_grid_output() {
        let err = Partitioner::strict()
            .partition("rcp_4_5", 2006, 2013, false)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnbalancedPartition { starts: 2, ends: 1 }
        ));
    }

    #[test]
    fn out_of_range_is_lenient_by_default() {
        let part = Partitioner::default()
            .partition("historical", 1990, 2010, false)
            .unwrap();
        // Periods past 2005 still come from the grid.
        assert_eq!(part.start_years, years(&["1991", "1996", "2001", "2006"]));
        assert_eq!(
            part.end_years,
            years(&["1990", "1995", "2000", "2005", "2010"])
        );
    }

    #[test]
    fn out_of_range_fails_in_strict_mode() {
        let err = Partitioner::strict()
            .partition("historical", 1990, 2010, false)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Range {
                start: 1990,
                end: 2010,
                earliest: 1951,
                latest: 2005
            }
        ));

        let err = Partitioner::strict()
            .partition("rcp_8_5", 2050, 2040, false)
            .unwrap_err();
        assert!(matches!(err, Error::Range { .. }));
    }

    #[test]
    fn inverted_range_is_empty_in_lenient_mode() {
        let part = Partitioner::lenient()
            .partition("rcp_8_5", 2050, 2040, false)
            .unwrap();
        assert!(part.is_empty());
    }

    #[test]
    fn unknown_experiment_is_configuration_error() {
        for policy in [RangePolicy::Lenient, RangePolicy::Strict] {
            let err = Partitioner::new(policy)
                .partition("rcp_6_0", 2006, 2010, false)
                .unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        }
    }

    #[test]
    fn evaluation_has_no_periods() {
        let err = Partitioner::lenient()
            .partition("evaluation", 1980, 2010, true)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
