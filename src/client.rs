use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::config::resolve_credentials;
use crate::endpoints::Endpoints;
use crate::error::{Error, Result as EResult};
use crate::request::Request;
use crate::sources::{is_http_url, source_to_base_url};

/// Anything that can run a request for a dataset and save the result to `target`.
pub trait Retriever {
    fn retrieve(&self, dataset: &str, request: &Request, target: &Path) -> EResult<Retrieval>;
}

/// Outcome of a finished retrieval.
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub dataset: String,
    /// Upstream job id, when the retriever runs jobs.
    pub job_id: Option<String>,
    pub target: PathBuf,
    pub size_bytes: u64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Named source (`cds`, `ads`, `ewds`) or an API base URL.
    pub source: String,
    /// Personal access token.
    pub key: Option<String>,
    pub verify_tls: bool,
    /// First delay between status polls; grows by half each poll.
    pub poll_initial: Duration,
    pub poll_max: Duration,
    /// Give up waiting for a job after this long.
    pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            source: "cds".to_string(),
            key: None,
            verify_tls: true,
            poll_initial: Duration::from_secs(1),
            poll_max: Duration::from_secs(120),
            timeout: None,
        }
    }
}

impl ClientOptions {
    /// Options with credentials from the environment or `~/.cdsapirc`.
    pub fn from_env() -> EResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup(env: impl Fn(&str) -> Option<String>) -> EResult<Self> {
        let creds = resolve_credentials(env)?;
        let defaults = Self::default();
        Ok(Self {
            source: creds.url.unwrap_or(defaults.source.clone()),
            key: Some(creds.key),
            verify_tls: creds.verify_tls,
            ..defaults
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Accepted,
    Running,
    Successful,
    Failed,
    Dismissed,
    #[serde(other)]
    Unknown,
}

impl JobState {
    pub fn is_finished(self) -> bool {
        matches!(self, JobState::Successful | JobState::Failed | JobState::Dismissed)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobStatus {
    #[serde(rename = "jobID")]
    pub job_id: String,
    pub status: JobState,
}

/// Downloadable result of a successful job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(rename = "file:size")]
    pub size: Option<u64>,
}

#[derive(Deserialize)]
struct JobResults {
    asset: AssetValue,
}

#[derive(Deserialize)]
struct AssetValue {
    value: Asset,
}

#[derive(Debug, Default, Deserialize)]
struct ProblemDetails {
    title: Option<String>,
    detail: Option<String>,
}

impl ProblemDetails {
    fn reason(self) -> String {
        match (self.title, self.detail) {
            (Some(t), Some(d)) if !d.is_empty() => format!("{t}: {d}"),
            (Some(t), _) => t,
            (None, Some(d)) => d,
            (None, None) => "no reason given".to_string(),
        }
    }
}

/// Blocking client for the CDS retrieve API: submit a job, poll it, download
/// its asset. Requests are sent once; nothing is retried.
#[derive(Debug, Clone)]
pub struct CdsClient {
    opts: ClientOptions,
    endpoints: Endpoints,
    http: HttpClient,
}

impl CdsClient {
    pub fn new(opts: ClientOptions) -> EResult<Self> {
        let base_url = if is_http_url(&opts.source) {
            opts.source.clone()
        } else {
            source_to_base_url(&opts.source)
                .ok_or_else(|| Error::InvalidRequest(format!("unknown source: {}", opts.source)))?
                .to_string()
        };
        let endpoints = Endpoints::new(&base_url)?;

        let key = opts.key.as_deref().ok_or(Error::MissingCredentials)?;
        let mut token = HeaderValue::from_str(key)
            .map_err(|_| Error::InvalidRequest("api key is not a valid header value".into()))?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("cordex-cds-rs/0.1"));
        headers.insert("private-token", token);

        let mut builder = HttpClient::builder().default_headers(headers);
        if !opts.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let http = builder.build()?;

        Ok(Self {
            opts,
            endpoints,
            http,
        })
    }

    /// Client configured from the environment or `~/.cdsapirc`.
    pub fn from_env() -> EResult<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.opts
    }

    /// Submit `request` as a job for `dataset`.
    pub fn submit(&self, dataset: &str, request: &Request) -> EResult<JobStatus> {
        let body = serde_json::json!({ "inputs": request });
        let status: JobStatus = self
            .http
            .post(self.endpoints.execution(dataset)?)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;
        debug!("submitted job {} for {dataset}", status.job_id);
        Ok(status)
    }

    pub fn status(&self, job_id: &str) -> EResult<JobStatus> {
        Ok(self
            .http
            .get(self.endpoints.job(job_id)?)
            .send()?
            .error_for_status()?
            .json()?)
    }

    /// Poll until the job finishes. A failed or dismissed job is an error.
    pub fn wait(&self, job_id: &str) -> EResult<()> {
        let started = Instant::now();
        let mut delay = self.opts.poll_initial;
        loop {
            let status = self.status(job_id)?;
            debug!("job {job_id} is {:?}", status.status);
            match status.status {
                JobState::Successful => return Ok(()),
                JobState::Failed | JobState::Dismissed => return Err(self.failure(job_id)),
                JobState::Accepted | JobState::Running | JobState::Unknown => {}
            }

            if let Some(limit) = self.opts.timeout {
                if started.elapsed() + delay > limit {
                    return Err(Error::Timeout(format!(
                        "job {job_id} still {:?} after {:?}",
                        status.status,
                        started.elapsed()
                    )));
                }
            }
            thread::sleep(delay);
            delay = next_delay(delay, self.opts.poll_max);
        }
    }

    /// Asset of a successful job.
    pub fn results(&self, job_id: &str) -> EResult<Asset> {
        let results: JobResults = self
            .http
            .get(self.endpoints.results(job_id)?)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(results.asset.value)
    }

    /// Stream `asset` into `target`, returning the number of bytes written.
    pub fn download_asset(&self, asset: &Asset, target: &Path) -> EResult<u64> {
        let url = resolve_href(self.endpoints.base(), &asset.href)?;
        let mut resp = self.http.get(url).send()?.error_for_status()?;

        let part = part_path(target);
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&part)?;
        let written = match resp.copy_to(&mut file) {
            Ok(n) => n,
            Err(e) => {
                drop(file);
                let _ = fs::remove_file(&part);
                return Err(e.into());
            }
        };
        drop(file);
        fs::rename(&part, target)?;

        if let Some(expected) = asset.size {
            if expected != written {
                warn!(
                    "{}: expected {expected} bytes, got {written}",
                    target.display()
                );
            }
        }
        Ok(written)
    }

    fn failure(&self, job_id: &str) -> Error {
        let reason = self
            .endpoints
            .results(job_id)
            .ok()
            .and_then(|url| self.http.get(url).send().ok())
            .and_then(|resp| resp.json::<ProblemDetails>().ok())
            .unwrap_or_default()
            .reason();
        Error::JobFailed {
            job_id: job_id.to_string(),
            reason,
        }
    }
}

impl Retriever for CdsClient {
    fn retrieve(&self, dataset: &str, request: &Request, target: &Path) -> EResult<Retrieval> {
        let job = self.submit(dataset, request)?;
        self.wait(&job.job_id)?;
        let asset = self.results(&job.job_id)?;
        let size_bytes = self.download_asset(&asset, target)?;
        Ok(Retrieval {
            dataset: dataset.to_string(),
            job_id: Some(job.job_id),
            target: target.to_path_buf(),
            size_bytes,
            completed_at: Utc::now(),
        })
    }
}

fn next_delay(current: Duration, max: Duration) -> Duration {
    current.mul_f64(1.5).min(max)
}

fn resolve_href(base: &Url, href: &str) -> EResult<Url> {
    Ok(base.join(href)?)
}

/// `<target>.part`, renamed to `target` once the transfer completes.
fn part_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    target.with_file_name(name)
}
