//! Pictogram image sources
//!
//! A source maps a cell code to raw image bytes. Missing pictograms are a
//! normal outcome ([`AssetLookup::NotFound`]); transport failures are
//! reported as [`AssetError`] and the renderer treats both the same way.

use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLookup {
    Found(Vec<u8>),
    NotFound,
}

/// Anything that can resolve a pictogram code to image bytes
pub trait AssetSource {
    fn fetch(
        &self,
        code: u32,
    ) -> impl Future<Output = std::result::Result<AssetLookup, AssetError>> + Send;
}

/// File name of the pictogram for `code`
pub fn asset_file_name(code: u32) -> String {
    format!("{}.png", code)
}

/// Fetches `{base_url}/{code}.png` over HTTP
#[derive(Debug, Clone)]
pub struct HttpAssets {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssets {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, code: u32) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            asset_file_name(code)
        )
    }
}

impl AssetSource for HttpAssets {
    async fn fetch(&self, code: u32) -> std::result::Result<AssetLookup, AssetError> {
        let response = self.client.get(self.url_for(code)).send().await?;
        if !response.status().is_success() {
            log::debug!(
                "Pictogram {} not served ({})",
                code,
                response.status().as_u16()
            );
            return Ok(AssetLookup::NotFound);
        }
        let bytes = response.bytes().await?;
        Ok(AssetLookup::Found(bytes.to_vec()))
    }
}

/// Reads `{dir}/{code}.png` from the local filesystem
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    dir: PathBuf,
}

impl DirectoryAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, code: u32) -> PathBuf {
        self.dir.join(asset_file_name(code))
    }
}

impl AssetSource for DirectoryAssets {
    async fn fetch(&self, code: u32) -> std::result::Result<AssetLookup, AssetError> {
        match tokio::fs::read(self.path_for(code)).await {
            Ok(bytes) => Ok(AssetLookup::Found(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AssetLookup::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Never finds anything; cells get labels only
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    async fn fetch(&self, _code: u32) -> std::result::Result<AssetLookup, AssetError> {
        Ok(AssetLookup::NotFound)
    }
}
