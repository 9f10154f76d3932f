use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// CORDEX experiment (scenario) tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Experiment {
    Evaluation,
    Historical,
    Rcp26,
    Rcp45,
    Rcp85,
}

impl Experiment {
    pub const ALL: [Experiment; 5] = [
        Experiment::Evaluation,
        Experiment::Historical,
        Experiment::Rcp26,
        Experiment::Rcp45,
        Experiment::Rcp85,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Experiment::Evaluation => "evaluation",
            Experiment::Historical => "historical",
            Experiment::Rcp26 => "rcp_2_6",
            Experiment::Rcp45 => "rcp_4_5",
            Experiment::Rcp85 => "rcp_8_5",
        }
    }

    /// Inclusive `(earliest, latest)` years covered by the scenario runs.
    ///
    /// Evaluation runs are driven by reanalysis and do not follow the
    /// 5-year period grid, so they have no interval here.
    pub fn valid_interval(self) -> Option<(i32, i32)> {
        match self {
            Experiment::Historical => Some((1951, 2005)),
            Experiment::Rcp26 | Experiment::Rcp45 | Experiment::Rcp85 => Some((2006, 2100)),
            Experiment::Evaluation => None,
        }
    }

    pub fn is_rcp(self) -> bool {
        matches!(self, Experiment::Rcp26 | Experiment::Rcp45 | Experiment::Rcp85)
    }
}

impl FromStr for Experiment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Experiment::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::Configuration(format!("unknown experiment: {s}")))
    }
}

impl fmt::Display for Experiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
