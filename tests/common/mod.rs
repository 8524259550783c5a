//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use suburb_insights::config::SnapshotConfig;
use suburb_insights::domain::ports::suburb_source::{SourceError, SuburbSource};
use suburb_insights::domain::values::domain_query::DomainQuery;
use suburb_insights::domain::values::suburb_id::SuburbId;
use suburb_insights::infrastructure::sources::local::LocalSource;
use suburb_insights::SuburbInsights;
use tempfile::TempDir;

/// What a [`StubSource`] hands back for every fetch.
#[derive(Clone)]
pub enum Reply {
    Data(Value),
    Empty,
    Fail,
}

/// In-memory source that answers per domain and counts its calls.
pub struct StubSource {
    name: &'static str,
    replies: Vec<(&'static str, Reply)>,
    default: Reply,
    search_hits: Vec<Value>,
    pub fetches: AtomicUsize,
    pub searches: AtomicUsize,
}

impl StubSource {
    pub fn new(name: &'static str, default: Reply) -> Self {
        Self {
            name,
            replies: vec![],
            default,
            search_hits: vec![],
            fetches: AtomicUsize::new(0),
            searches: AtomicUsize::new(0),
        }
    }

    /// Reply for one domain, keyed by [`DomainQuery::domain`].
    pub fn reply(mut self, domain: &'static str, reply: Reply) -> Self {
        self.replies.push((domain, reply));
        self
    }

    pub fn search_hits(mut self, hits: Vec<Value>) -> Self {
        self.search_hits = hits;
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuburbSource for StubSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, _suburb: &SuburbId, query: &DomainQuery) -> Result<Option<Value>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .iter()
            .find(|(domain, _)| *domain == query.domain())
            .map(|(_, reply)| reply)
            .unwrap_or(&self.default);
        match reply {
            Reply::Data(value) => Ok(Some(value.clone())),
            Reply::Empty => Ok(None),
            Reply::Fail => Err(SourceError::Network("stub failure".into())),
        }
    }

    async fn search(&self, _query: &str) -> Result<Vec<Value>, SourceError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        match self.default {
            Reply::Fail => Err(SourceError::Network("stub failure".into())),
            _ => Ok(self.search_hits.clone()),
        }
    }
}

pub fn suburb(id: &str) -> SuburbId {
    SuburbId::parse(id).unwrap()
}

pub fn setup(source: StubSource) -> SuburbInsights {
    SuburbInsights::with_source(Arc::new(source))
}

/// Writes `contents` to `name` under `dir`.
pub fn write_snapshot(dir: &Path, name: &str, contents: &Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(contents).unwrap()).unwrap();
}

pub fn snapshot_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn local_source(dir: &Path, substitute_missing: bool) -> LocalSource {
    LocalSource::new(&SnapshotConfig {
        data_dir: dir.to_path_buf(),
        substitute_missing,
    })
}
