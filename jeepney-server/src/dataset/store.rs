//! Shared route dataset snapshot with reload support.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::RouteSet;

use super::client::{DatasetClient, DatasetClientConfig};
use super::error::DatasetError;
use super::loader;

/// Where the dataset is loaded from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document fetched over HTTP.
    Url(String),
}

/// Resolved source: the URL variant holds a ready-built client.
#[derive(Debug, Clone)]
enum Source {
    File(PathBuf),
    Remote(DatasetClient),
}

/// Thread-safe handle to the current dataset snapshot.
///
/// Queries take an `Arc<RouteSet>` snapshot and never observe a partial
/// load: `reload` builds the replacement in full before swapping it in,
/// and keeps the existing snapshot if the source fails.
#[derive(Clone)]
pub struct RouteStore {
    inner: Arc<RwLock<Arc<RouteSet>>>,
    source: Source,
}

impl RouteStore {
    /// Load the dataset from `source` and create the store.
    pub async fn load(source: DatasetSource) -> Result<Self, DatasetError> {
        let source = match source {
            DatasetSource::File(path) => Source::File(path),
            DatasetSource::Url(url) => {
                Source::Remote(DatasetClient::new(DatasetClientConfig::new(url))?)
            }
        };

        let routes = fetch(&source).await?;
        info!(routes = routes.len(), "route dataset loaded");

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(routes))),
            source,
        })
    }

    /// The current snapshot.
    ///
    /// Cheap to call; in-flight queries keep their snapshot across
    /// reloads.
    pub async fn snapshot(&self) -> Arc<RouteSet> {
        self.inner.read().await.clone()
    }

    /// Re-read the source and swap the snapshot atomically.
    ///
    /// On failure the existing snapshot is preserved and the error is
    /// returned. Returns the new route count on success.
    pub async fn reload(&self) -> Result<usize, DatasetError> {
        let routes = fetch(&self.source).await?;
        let count = routes.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(routes);
        info!(routes = count, "route dataset reloaded");

        Ok(count)
    }
}

async fn fetch(source: &Source) -> Result<RouteSet, DatasetError> {
    match source {
        Source::File(path) => loader::load_from_path(path),
        Source::Remote(client) => client.fetch().await,
    }
}
