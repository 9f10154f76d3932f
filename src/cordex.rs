//! Requests for `projections-cordex-domains-single-levels`.

use crate::allow_list::AllowLists;
use crate::catalog::{arctic, cordex};
use crate::download::{Product, compose_file_name, span_of};
use crate::error::{Error, Result};
use crate::partition::{Partition, Partitioner, RangePolicy};
use crate::request::Request;

/// Which vocabulary a request is checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CordexProfile {
    /// Any CORDEX domain.
    #[default]
    Domains,
    /// The ARCTIC-CORDEX runs known to be complete.
    Arctic,
}

impl CordexProfile {
    pub fn allow_lists(self) -> AllowLists {
        match self {
            CordexProfile::Domains => AllowLists::new()
                .field("variable", cordex::VARIABLES)
                .field("domain", cordex::DOMAINS)
                .field("experiment", cordex::EXPERIMENTS)
                .field("horizontal_resolution", cordex::HORIZONTAL_RESOLUTIONS)
                .field("temporal_resolution", cordex::TEMPORAL_RESOLUTIONS)
                .field("gcm_model", cordex::GCMS)
                .field("rcm_model", cordex::RCMS)
                .field("ensemble_member", cordex::ENSEMBLE_MEMBERS),
            CordexProfile::Arctic => AllowLists::new()
                .field("variable", arctic::VARIABLES)
                .field("domain", arctic::DOMAINS)
                .field("experiment", arctic::EXPERIMENTS)
                .field("horizontal_resolution", arctic::HORIZONTAL_RESOLUTIONS)
                .field("temporal_resolution", arctic::TEMPORAL_RESOLUTIONS)
                .field("gcm_model", arctic::GCMS)
                .field("rcm_model", arctic::RCMS)
                .field("ensemble_member", arctic::ENSEMBLE_MEMBERS),
        }
    }
}

/// How `start_year` / `end_year` are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSelection {
    /// One start and one end year, checked against 1950-2100.
    Span { start: i32, end: i32 },
    /// The experiment's whole period in 5-year steps.
    FullTimespan,
    /// The canonical 5-year periods inside `[start, end]`.
    Grid { start: i32, end: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CordexRequest {
    pub profile: CordexProfile,
    pub variables: Vec<String>,
    pub domain: String,
    pub experiment: String,
    pub horizontal_resolution: String,
    pub temporal_resolution: String,
    pub gcm: String,
    pub rcm: String,
    pub ensemble: String,
    pub years: YearSelection,
    /// Applies to [`YearSelection::FullTimespan`] and [`YearSelection::Grid`].
    pub range_policy: RangePolicy,
}

impl Default for CordexRequest {
    fn default() -> Self {
        Self {
            profile: CordexProfile::Domains,
            variables: vec!["2m_air_temperature".to_string()],
            domain: "arctic".to_string(),
            experiment: "rcp_2_6".to_string(),
            horizontal_resolution: "0_11_degree_x_0_11_degree".to_string(),
            temporal_resolution: "seasonal_mean".to_string(),
            gcm: "cnrm_cerfacs_cm5".to_string(),
            rcm: "gerics_remo2015".to_string(),
            ensemble: "r1i1p1".to_string(),
            years: YearSelection::Span {
                start: 2005,
                end: 2010,
            },
            range_policy: RangePolicy::Lenient,
        }
    }
}

impl CordexRequest {
    /// ARCTIC-CORDEX request for the whole experiment period.
    pub fn arctic<S: Into<String>>(
        experiment: impl Into<String>,
        variables: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            profile: CordexProfile::Arctic,
            variables: variables.into_iter().map(Into::into).collect(),
            domain: "arctic".to_string(),
            experiment: experiment.into(),
            horizontal_resolution: arctic::DEFAULT_HORIZONTAL_RESOLUTION.to_string(),
            temporal_resolution: "daily_mean".to_string(),
            gcm: "cccma_canesm2".to_string(),
            rcm: "cccma_canrcm4".to_string(),
            ensemble: "r1i1p1".to_string(),
            years: YearSelection::FullTimespan,
            range_policy: RangePolicy::Lenient,
        }
    }

    /// Start and end year lists for the request.
    pub fn year_lists(&self) -> Result<Partition> {
        let partitioner = Partitioner::new(self.range_policy);
        let partition = match self.years {
            YearSelection::Span { start, end } => {
                let (earliest, latest) = (cordex::EARLIEST_YEAR, cordex::LATEST_YEAR);
                if !(earliest <= start && start <= end && end <= latest) {
                    return Err(Error::Range {
                        start,
                        end,
                        earliest,
                        latest,
                    });
                }
                Partition {
                    start_years: vec![start.to_string()],
                    end_years: vec![end.to_string()],
                }
            }
            YearSelection::FullTimespan => partitioner.partition(&self.experiment, 0, 0, true)?,
            YearSelection::Grid { start, end } => {
                partitioner.partition(&self.experiment, start, end, false)?
            }
        };

        if partition.start_years.is_empty() || partition.end_years.is_empty() {
            return Err(Error::EmptyPartition);
        }
        Ok(partition)
    }
}

impl Product for CordexRequest {
    fn dataset(&self) -> &'static str {
        cordex::DATASET
    }

    fn to_request(&self) -> Result<Request> {
        self.profile
            .allow_lists()
            .validator()
            .values("variable", &self.variables)
            .value("domain", &self.domain)
            .value("experiment", &self.experiment)
            .value("horizontal_resolution", &self.horizontal_resolution)
            .value("temporal_resolution", &self.temporal_resolution)
            .value("gcm_model", &self.gcm)
            .value("rcm_model", &self.rcm)
            .value("ensemble_member", &self.ensemble)
            .finish()?;

        let years = self.year_lists()?;

        Ok(Request::new()
            .kw("domain", &self.domain)
            .kw("experiment", &self.experiment)
            .kw("horizontal_resolution", &self.horizontal_resolution)
            .kw("temporal_resolution", &self.temporal_resolution)
            .kw("variable", self.variables.as_slice())
            .kw("gcm_model", &self.gcm)
            .kw("rcm_model", &self.rcm)
            .kw("ensemble_member", &self.ensemble)
            .kw("start_year", years.start_years)
            .kw("end_year", years.end_years))
    }

    fn file_name(&self, request: &Request) -> String {
        compose_file_name(
            self.dataset(),
            &[
                self.domain.clone(),
                self.experiment.clone(),
                self.gcm.clone(),
                self.rcm.clone(),
                self.ensemble.clone(),
                self.variables.join("-"),
                span_of(request, "start_year", "end_year"),
            ],
            "zip",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::Downloader;
    use crate::download::testing::FakeRetriever;
    use crate::request::RequestValue;

    fn strs(xs: &[&str]) -> RequestValue {
        RequestValue::StrList(xs.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn default_request_has_all_keys() {
        let req = CordexRequest::default().to_request().unwrap();
        let json = req.to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": "arctic",
                "experiment": "rcp_2_6",
                "horizontal_resolution": "0_11_degree_x_0_11_degree",
                "temporal_resolution": "seasonal_mean",
                "variable": ["2m_air_temperature"],
                "gcm_model": "cnrm_cerfacs_cm5",
                "rcm_model": "gerics_remo2015",
                "ensemble_member": "r1i1p1",
                "start_year": ["2005"],
                "end_year": ["2010"],
            })
        );
    }

    #[test]
    fn reports_every_misspelled_value() {
        let req = CordexRequest {
            variables: vec!["2m_air_temperature".into(), "2m_temprature".into()],
            gcm: "cnrm".into(),
            ensemble: "r1".into(),
            ..CordexRequest::default()
        };
        let Err(Error::Validation(vs)) = req.to_request() else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = vs.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["variable", "gcm_model", "ensemble_member"]);
        assert_eq!(vs[0].value, "2m_temprature");
    }

    #[test]
    fn span_outside_bounds_is_rejected() {
        let req = CordexRequest {
            years: YearSelection::Span {
                start: 1940,
                end: 1960,
            },
            ..CordexRequest::default()
        };
        assert!(matches!(req.to_request(), Err(Error::Range { earliest: 1950, .. })));

        let req = CordexRequest {
            years: YearSelection::Span {
                start: 2010,
                end: 2005,
            },
            ..CordexRequest::default()
        };
        assert!(matches!(req.to_request(), Err(Error::Range { .. })));
    }

    #[test]
    fn grid_selection_uses_canonical_periods() {
        let req = CordexRequest {
            experiment: "rcp_4_5".into(),
            years: YearSelection::Grid {
                start: 2006,
                end: 2020,
            },
            ..CordexRequest::default()
        };
        let r = req.to_request().unwrap();
        assert_eq!(r.get("start_year"), Some(&strs(&["2006", "2011", "2016"])));
        assert_eq!(r.get("end_year"), Some(&strs(&["2010", "2015", "2020"])));
    }

    #[test]
    fn empty_partition_is_caught_before_download() {
        // No grid period ends inside 2007-2009.
        let req = CordexRequest {
            experiment: "rcp_4_5".into(),
            years: YearSelection::Grid {
                start: 2007,
                end: 2009,
            },
            ..CordexRequest::default()
        };
        assert!(matches!(req.to_request(), Err(Error::EmptyPartition)));

        let root = tempfile::tempdir().unwrap();
        let fake = FakeRetriever::default();
        assert!(Downloader::new(root.path()).download(&req, &fake).is_err());
        assert!(fake.calls.borrow().is_empty());
    }

    #[test]
    fn strict_policy_rejects_out_of_period_grid() {
        let req = CordexRequest {
            experiment: "historical".into(),
            years: YearSelection::Grid {
                start: 1991,
                end: 2010,
            },
            range_policy: RangePolicy::Strict,
            ..CordexRequest::default()
        };
        assert!(matches!(req.to_request(), Err(Error::Range { .. })));

        let lenient = CordexRequest {
            range_policy: RangePolicy::Lenient,
            ..req
        };
        let r = lenient.to_request().unwrap();
        assert_eq!(
            r.get("start_year"),
            Some(&strs(&["1991", "1996", "2001", "2006"]))
        );
    }

    #[test]
    fn evaluation_needs_explicit_years() {
        let req = CordexRequest {
            experiment: "evaluation".into(),
            gcm: "era_interim".into(),
            years: YearSelection::FullTimespan,
            ..CordexRequest::default()
        };
        assert!(matches!(req.to_request(), Err(Error::Configuration(_))));

        let req = CordexRequest {
            years: YearSelection::Span {
                start: 1980,
                end: 2010,
            },
            ..req
        };
        req.to_request().unwrap();
    }

    #[test]
    fn arctic_full_timespan() {
        let req = CordexRequest::arctic("historical", ["2m_air_temperature"]);
        let r = req.to_request().unwrap();
        let starts = r.get("start_year").unwrap().as_strings();
        let ends = r.get("end_year").unwrap().as_strings();
        assert_eq!(starts.len(), 11);
        assert_eq!(ends.len(), 11);
        assert_eq!(starts[0], "1951");
        assert_eq!(ends[10], "2005");
        assert_eq!(
            r.get("horizontal_resolution"),
            Some(&RequestValue::Str("0_22_degree_x_0_22_degree".into()))
        );
        assert_eq!(
            req.file_name(&r),
            "projections-cordex-domains-single-levels_arctic_historical_cccma_canesm2_cccma_canrcm4_r1i1p1_2m_air_temperature_1951-2005.zip"
        );
    }

    #[test]
    fn arctic_profile_is_narrower() {
        // Valid for CORDEX in general, but not among the arctic runs.
        let req = CordexRequest::arctic("rcp_2_6", ["orography"]);
        let Err(Error::Validation(vs)) = req.to_request() else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = vs.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["variable", "experiment"]);
    }

    #[test]
    fn downloads_into_data_dir() {
        let root = tempfile::tempdir().unwrap();
        let fake = FakeRetriever::default();
        let req = CordexRequest::arctic("rcp_8_5", ["2m_air_temperature", "evaporation"]);

        let r = Downloader::new(root.path())
            .download(&req, &fake)
            .unwrap()
            .unwrap();
        assert_eq!(
            r.target.file_name().unwrap().to_str().unwrap(),
            "projections-cordex-domains-single-levels_arctic_rcp_8_5_cccma_canesm2_cccma_canrcm4_r1i1p1_2m_air_temperature-evaporation_2006-2100.zip"
        );
        let calls = fake.calls.borrow();
        assert_eq!(calls[0].0, "projections-cordex-domains-single-levels");
        assert_eq!(calls[0].1.get("end_year").unwrap().as_strings().len(), 19);
    }
}
