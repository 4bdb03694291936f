//! Data loading for the route archive.
//!
//! The offline export pipeline produces a zip archive with the route table,
//! per-route hold lists, and per-layout board geometry. This module reads
//! that archive into an immutable [`RouteCatalog`]; everything downstream
//! treats the catalog as read-only for the lifetime of the process.

pub mod archive;
pub mod catalog;

pub use archive::{load_archive, Manifest};
pub use catalog::RouteCatalog;
