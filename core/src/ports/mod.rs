//! Ports layer - Trait definitions (interfaces).
//!
//! This module defines the interfaces callers use to persist values.
//! The file-backed implementation lives in `store`.

mod recent;

pub use recent::RecentRepository;
