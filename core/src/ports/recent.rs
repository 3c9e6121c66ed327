//! Recent-values repository port (interface).

use crate::error::Result;
use crate::store::RecentValues;

/// Port for recency-list persistence.
///
/// This trait defines the interface for the last-N list of recently used
/// IPs and ports, so callers and tests can swap in an in-memory backend.
pub trait RecentRepository: Send + Sync {
    /// Load the current recency lists.
    fn load(&self) -> impl std::future::Future<Output = Result<RecentValues>> + Send;

    /// Record a recently used IP (dedupe, prepend, cap).
    fn add_recent_ip(&self, ip: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Record a recently used port (dedupe, prepend, cap).
    fn add_recent_port(&self, port: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Drop both lists.
    fn clear(&self) -> impl std::future::Future<Output = Result<()>> + Send;
}
