#![forbid(unsafe_code)]

//! Validated requests for climate datasets on the Copernicus Climate Data
//! Store (CDS).
//!
//! Three datasets are covered: CORDEX regional projections
//! (`projections-cordex-domains-single-levels`), the C3S Atlas
//! (`multi-origin-c3s-atlas`) and ERA5-Land monthly means
//! (`reanalysis-era5-land-monthly-means`). Each request type checks its
//! parameters against the dataset vocabulary before anything is sent, and
//! CORDEX year ranges are split into the 5-year periods the dataset is
//! organised in.
//!
//! **Quick start**
//! ```no_run
//! use cordex_cds::{CdsClient, CordexRequest, Downloader};
//!
//! // Credentials come from CDSAPI_URL / CDSAPI_KEY or ~/.cdsapirc.
//! let client = CdsClient::from_env()?;
//!
//! let request = CordexRequest::arctic("historical", ["2m_air_temperature"]);
//! let downloader = Downloader::in_current_dir()?.skip_existing(true);
//! if let Some(result) = downloader.download(&request, &client)? {
//!     println!("{} bytes to {}", result.size_bytes, result.target.display());
//! }
//! # Ok::<(), cordex_cds::Error>(())
//! ```
//!
//! **Year periods only**
//! ```
//! use cordex_cds::{Partitioner, grid_windows};
//!
//! let part = Partitioner::strict().partition("rcp_4_5", 2006, 2020, false)?;
//! assert_eq!(part.start_years, ["2006", "2011", "2016"]);
//! assert_eq!(part.end_years, ["2010", "2015", "2020"]);
//!
//! // Windows that do not line up with the grid keep independent lists.
//! let part = grid_windows(1950, 1958);
//! assert_eq!(part.start_years, ["1951", "1956"]);
//! assert_eq!(part.end_years, ["1955"]);
//! # Ok::<(), cordex_cds::Error>(())
//! ```
//!
//! Notes:
//! - Nothing is retried. A failed job surfaces as [`Error::JobFailed`].
//! - Data use is governed by the licences of the individual CDS datasets.

mod allow_list;
mod area;
mod atlas;
pub mod catalog;
mod client;
mod config;
mod cordex;
mod download;
mod endpoints;
mod era5;
mod error;
mod experiment;
mod partition;
mod request;
mod sources;

pub use crate::allow_list::{AllowLists, Validator, ensure_allowed};
pub use crate::area::Area;
pub use crate::atlas::AtlasRequest;
pub use crate::client::{Asset, CdsClient, ClientOptions, JobState, JobStatus, Retrieval, Retriever};
pub use crate::config::{Credentials, RcFile, resolve_credentials};
pub use crate::cordex::{CordexProfile, CordexRequest, YearSelection};
pub use crate::download::{DATA_DIR, Downloader, Product, compose_file_name};
pub use crate::endpoints::Endpoints;
pub use crate::era5::{DataFormat, DownloadFormat, Era5LandRequest};
pub use crate::error::{Error, Result, Violation};
pub use crate::experiment::Experiment;
pub use crate::partition::{
    GRID_FIRST_YEAR, GRID_LAST_YEAR, PERIOD_YEARS, Partition, Partitioner, RangePolicy,
    grid_windows, period_grid, stride_windows,
};
pub use crate::request::{Request, RequestValue, expand_numeric_syntax};
pub use crate::sources::{is_http_url, source_to_base_url};
