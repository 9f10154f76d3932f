use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::client::{Retrieval, Retriever};
use crate::error::Result;
use crate::request::Request;

/// Name of the directory results are saved in, below the download root.
pub const DATA_DIR: &str = "data";

/// A typed, validated request for one dataset.
pub trait Product {
    /// CDS dataset identifier.
    fn dataset(&self) -> &'static str;

    /// Validate all parameters and build the request.
    fn to_request(&self) -> Result<Request>;

    /// File name for the result of `request`, as built by [`Product::to_request`].
    fn file_name(&self, request: &Request) -> String;
}

/// Join identifying parts into `<dataset>_<part>_..._<part>.<ext>`.
pub fn compose_file_name<S: AsRef<str>>(dataset: &str, parts: &[S], ext: &str) -> String {
    let mut name = dataset.to_string();
    for p in parts {
        name.push('_');
        name.push_str(p.as_ref());
    }
    name.push('.');
    name.push_str(ext);
    name
}

/// First and last string of a list-valued request key, as `first-last`.
pub(crate) fn span_of(request: &Request, start_key: &str, end_key: &str) -> String {
    let first = request
        .get(start_key)
        .and_then(|v| v.as_strings().into_iter().next())
        .unwrap_or_default();
    let last = request
        .get(end_key)
        .and_then(|v| v.as_strings().into_iter().last())
        .unwrap_or_default();
    format!("{first}-{last}")
}

/// Saves products under `<root>/data/`.
#[derive(Debug, Clone)]
pub struct Downloader {
    root: PathBuf,
    skip_existing: bool,
}

impl Downloader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_existing: false,
        }
    }

    /// Downloader rooted at the current working directory.
    pub fn in_current_dir() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// Leave existing target files alone instead of downloading again.
    pub fn skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = skip;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    /// Create the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<PathBuf> {
        let dir = self.data_dir();
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(io::Error::other(format!(
                    "{} exists but is not a directory",
                    dir.display()
                ))
                .into());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("creating data directory {}", dir.display());
                fs::create_dir_all(&dir)?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(dir)
    }

    pub fn target_for<P: Product + ?Sized>(&self, product: &P, request: &Request) -> PathBuf {
        self.data_dir().join(product.file_name(request))
    }

    /// Validate `product`, then hand its request to `retriever`.
    ///
    /// Returns `Ok(None)` when the target already exists and existing files
    /// are skipped. Nothing touches the filesystem or network if validation
    /// fails.
    pub fn download<P, R>(&self, product: &P, retriever: &R) -> Result<Option<Retrieval>>
    where
        P: Product + ?Sized,
        R: Retriever + ?Sized,
    {
        let request = product.to_request()?;
        let dataset = product.dataset();
        self.ensure_data_dir()?;
        let target = self.target_for(product, &request);

        if self.skip_existing && target.exists() {
            info!("{} already exists, skipping", target.display());
            return Ok(None);
        }

        info!(
            "downloading {dataset} to {} (this can take several minutes)",
            target.display()
        );
        let retrieval = match retriever.retrieve(dataset, &request, &target) {
            Ok(r) => r,
            Err(e) => {
                // A partial file would pass the skip-existing check next time.
                if target.exists() {
                    warn!("removing incomplete {}", target.display());
                    if let Err(rm) = fs::remove_file(&target) {
                        warn!("cannot remove {}: {rm}", target.display());
                    }
                }
                return Err(e);
            }
        };
        info!(
            "download of {} completed ({} bytes)",
            target.display(),
            retrieval.size_bytes
        );
        Ok(Some(retrieval))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    use chrono::Utc;

    use crate::client::{Retrieval, Retriever};
    use crate::error::Result;
    use crate::request::Request;

    /// Retriever that records calls and writes a fixed payload.
    #[derive(Default)]
    pub struct FakeRetriever {
        pub calls: RefCell<Vec<(String, Request)>>,
    }

    impl Retriever for FakeRetriever {
        fn retrieve(&self, dataset: &str, request: &Request, target: &Path) -> Result<Retrieval> {
            self.calls
                .borrow_mut()
                .push((dataset.to_string(), request.clone()));
            let payload = b"GRIB fake payload";
            fs::write(target, payload)?;
            Ok(Retrieval {
                dataset: dataset.to_string(),
                job_id: Some(format!("job-{}", self.calls.borrow().len())),
                target: target.to_path_buf(),
                size_bytes: payload.len() as u64,
                completed_at: Utc::now(),
            })
        }
    }
}
