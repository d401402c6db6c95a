//! API version per action path

use std::collections::HashMap;

use crate::errors::{MwsError, MwsResult};

pub const FEEDS_PATH: &str = "/Feeds/2009-01-01";
pub const PRODUCTS_PATH: &str = "/Products/2011-10-01";
pub const REPORTS_PATH: &str = "/Reports/2009-01-01";
pub const SELLERS_PATH: &str = "/Sellers/2011-07-01";

/// Maps an action path to the `Version` parameter its section expects.
///
/// Built once and shared read-only (usually behind an `Arc`) by every client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRegistry {
    versions: HashMap<String, String>,
}

impl VersionRegistry {
    /// 빈 레지스트리 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections this crate has endpoint wrappers for
    pub fn standard() -> Self {
        Self::new()
            .with_version(FEEDS_PATH, "2009-01-01")
            .with_version(PRODUCTS_PATH, "2011-10-01")
            .with_version(REPORTS_PATH, "2009-01-01")
            .with_version(SELLERS_PATH, "2011-07-01")
    }

    pub fn with_version(mut self, path: impl Into<String>, version: impl Into<String>) -> Self {
        self.versions.insert(path.into(), version.into());
        self
    }

    pub fn version_for(&self, path: &str) -> Option<&str> {
        self.versions.get(path).map(String::as_str)
    }

    /// Like [`version_for`](Self::version_for), but an unregistered path is a
    /// configuration error instead of an empty `Version`.
    pub fn require(&self, path: &str) -> MwsResult<&str> {
        self.version_for(path)
            .ok_or_else(|| MwsError::configuration(format!("no API version registered for {path}")))
    }

    pub fn contains(&self, path: &str) -> bool {
        self.versions.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
