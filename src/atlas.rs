//! Requests for `multi-origin-c3s-atlas` (CORDEX-CORE and EURO-CORDEX
//! monthly indicators).

use log::warn;

use crate::allow_list::AllowLists;
use crate::area::Area;
use crate::catalog::atlas;
use crate::download::{Product, compose_file_name};
use crate::error::{Error, Result};
use crate::experiment::Experiment;
use crate::request::Request;

#[derive(Debug, Clone, PartialEq)]
pub struct AtlasRequest {
    pub origin: String,
    pub experiment: String,
    /// One variable per request.
    pub variable: String,
    pub area: Area,
}

impl Default for AtlasRequest {
    fn default() -> Self {
        Self {
            origin: "cordex_eur_11".to_string(),
            experiment: "rcp_2_6".to_string(),
            variable: "monthly_mean_of_daily_mean_temperature".to_string(),
            area: Area::GLOBAL,
        }
    }
}

impl AtlasRequest {
    /// Spatial domain that `origin` covers.
    pub fn domain(&self) -> Option<&'static str> {
        match self.origin.as_str() {
            "cordex_core" => Some("global_mosaic"),
            "cordex_eur_11" => Some("eur_cordex"),
            _ => None,
        }
    }

    /// Aggregation period offered for the experiment.
    pub fn period(&self) -> Option<&'static str> {
        match self.experiment.parse::<Experiment>().ok()? {
            Experiment::Historical => Some(atlas::HISTORICAL_PERIOD),
            e if e.is_rcp() => Some(atlas::PROJECTION_PERIOD),
            _ => None,
        }
    }

    fn allow_lists() -> AllowLists {
        AllowLists::new()
            .field("origin", atlas::ORIGINS)
            .field("experiment", atlas::EXPERIMENTS)
            .field("variable", atlas::VARIABLES)
    }
}

impl Product for AtlasRequest {
    fn dataset(&self) -> &'static str {
        atlas::DATASET
    }

    fn to_request(&self) -> Result<Request> {
        if self.origin == "cordex_core" && self.experiment == "rcp_4_5" {
            return Err(Error::UnsupportedCombination(
                "origin cordex_core has no rcp_4_5 experiment".into(),
            ));
        }

        Self::allow_lists()
            .validator()
            .value("origin", &self.origin)
            .value("experiment", &self.experiment)
            .value("variable", &self.variable)
            .finish()?;
        self.area.validate()?;

        let (Some(domain), Some(period)) = (self.domain(), self.period()) else {
            return Err(Error::InvalidRequest(format!(
                "no domain or period for {} / {}",
                self.origin, self.experiment
            )));
        };
        warn!(
            "area {} must lie within the {domain} domain, otherwise the file holds no data",
            self.area
        );

        Ok(Request::new()
            .kw("origin", &self.origin)
            .kw("experiment", &self.experiment)
            .kw("domain", domain)
            .kw("period", period)
            .kw("variable", &self.variable)
            .kw("area", self.area))
    }

    fn file_name(&self, _request: &Request) -> String {
        compose_file_name(
            self.dataset(),
            &[&self.origin, &self.experiment, &self.variable],
            "zip",
        )
    }
}
