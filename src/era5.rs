//! Requests for `reanalysis-era5-land-monthly-means`.

use std::fmt;
use std::str::FromStr;

use crate::allow_list::AllowLists;
use crate::area::Area;
use crate::catalog::era5;
use crate::download::{Product, compose_file_name};
use crate::error::{Error, Result, Violation};
use crate::request::Request;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataFormat {
    #[default]
    Grib,
    Netcdf,
}

impl DataFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DataFormat::Grib => "grib",
            DataFormat::Netcdf => "netcdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DataFormat::Grib => "grib",
            DataFormat::Netcdf => "nc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloadFormat {
    Unarchived,
    #[default]
    Zip,
}

impl DownloadFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadFormat::Unarchived => "unarchived",
            DownloadFormat::Zip => "zip",
        }
    }
}

fn unknown(field: &str, value: &str) -> Error {
    Error::Validation(vec![Violation {
        field: field.to_string(),
        value: value.to_string(),
    }])
}

impl FromStr for DataFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grib" => Ok(DataFormat::Grib),
            "netcdf" => Ok(DataFormat::Netcdf),
            _ => Err(unknown("data_format", s)),
        }
    }
}

impl FromStr for DownloadFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "unarchived" => Ok(DownloadFormat::Unarchived),
            "zip" => Ok(DownloadFormat::Zip),
            _ => Err(unknown("download_format", s)),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monthly means for every month of the selected years, at 00:00.
#[derive(Debug, Clone, PartialEq)]
pub struct Era5LandRequest {
    pub variables: Vec<String>,
    pub product_type: String,
    pub start_year: i32,
    pub end_year: i32,
    pub area: Area,
    pub data_format: DataFormat,
    pub download_format: DownloadFormat,
}

impl Default for Era5LandRequest {
    fn default() -> Self {
        Self {
            variables: vec!["2m_temperature".to_string()],
            product_type: "monthly_averaged_reanalysis".to_string(),
            start_year: era5::EARLIEST_YEAR,
            end_year: era5::LATEST_YEAR,
            area: Area::GLOBAL,
            data_format: DataFormat::Grib,
            download_format: DownloadFormat::Zip,
        }
    }
}

impl Era5LandRequest {
    /// Every year from `start_year` to `end_year`, inclusive.
    pub fn years(&self) -> Result<Vec<String>> {
        let (earliest, latest) = (era5::EARLIEST_YEAR, era5::LATEST_YEAR);
        let in_range = earliest <= self.start_year
            && self.start_year <= self.end_year
            && self.end_year <= latest;
        if !in_range {
            return Err(Error::Range {
                start: self.start_year,
                end: self.end_year,
                earliest,
                latest,
            });
        }
        Ok((self.start_year..=self.end_year).map(|y| y.to_string()).collect())
    }
}

impl Product for Era5LandRequest {
    fn dataset(&self) -> &'static str {
        era5::DATASET
    }

    fn to_request(&self) -> Result<Request> {
        AllowLists::new()
            .field("variable", era5::VARIABLES)
            .field("product_type", era5::PRODUCT_TYPES)
            .validator()
            .values("variable", &self.variables)
            .value("product_type", &self.product_type)
            .finish()?;
        let years = self.years()?;
        self.area.validate()?;

        Ok(Request::new()
            .kw("product_type", &self.product_type)
            .kw("variable", self.variables.as_slice())
            .kw("year", years)
            .kw("month", era5::MONTHS)
            .kw("time", era5::TIMES)
            .kw("data_format", self.data_format.as_str())
            .kw("download_format", self.download_format.as_str())
            .kw("area", self.area))
    }

    fn file_name(&self, _request: &Request) -> String {
        let ext = match self.download_format {
            DownloadFormat::Zip => "zip",
            DownloadFormat::Unarchived => self.data_format.extension(),
        };
        compose_file_name(
            self.dataset(),
            &[
                self.variables.join("-"),
                format!("{}-{}", self.start_year, self.end_year),
            ],
            ext,
        )
    }
}
