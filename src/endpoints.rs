use url::Url;

use crate::error::{Error, Result};

/// URLs of the retrieve API below one base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidRequest(format!("not a base url: {base_url}")));
        }
        // Url::join drops the last path segment unless it ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `POST` target that submits a job for `dataset`.
    pub fn execution(&self, dataset: &str) -> Result<Url> {
        Ok(self
            .base
            .join(&format!("retrieve/v1/processes/{dataset}/execution"))?)
    }

    /// Job status document.
    pub fn job(&self, job_id: &str) -> Result<Url> {
        Ok(self.base.join(&format!("retrieve/v1/jobs/{job_id}"))?)
    }

    /// Job results document (asset link, or the failure reason).
    pub fn results(&self, job_id: &str) -> Result<Url> {
        Ok(self.base.join(&format!("retrieve/v1/jobs/{job_id}/results"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_job_urls() {
        let e = Endpoints::new("https://cds.climate.copernicus.eu/api").unwrap();
        assert_eq!(
            e.execution("reanalysis-era5-land-monthly-means").unwrap().as_str(),
            "https://cds.climate.copernicus.eu/api/retrieve/v1/processes/reanalysis-era5-land-monthly-means/execution"
        );
        assert_eq!(
            e.job("abc-123").unwrap().as_str(),
            "https://cds.climate.copernicus.eu/api/retrieve/v1/jobs/abc-123"
        );
        assert_eq!(
            e.results("abc-123").unwrap().as_str(),
            "https://cds.climate.copernicus.eu/api/retrieve/v1/jobs/abc-123/results"
        );
    }

    #[test]
    fn trailing_slash_is_optional() {
        let a = Endpoints::new("http://localhost:8080/api").unwrap();
        let b = Endpoints::new("http://localhost:8080/api/").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.base().as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Endpoints::new("not a url"), Err(Error::Url(_))));
        assert!(matches!(
            Endpoints::new("mailto:someone@example.org"),
            Err(Error::InvalidRequest(_))
        ));
    }
}
