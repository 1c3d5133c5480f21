//! Write-path and cross-projection tests
//!
//! Covers canonicalization of editor exports and the agreement between the
//! rendered anchors and the extracted outline.

mod outline;
mod properties;
mod scenarios;
