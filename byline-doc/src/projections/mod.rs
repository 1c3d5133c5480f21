//! Projection implementations
//!
//! This module contains all projections that derive read-side views from a
//! canonical document.

pub mod html;
pub mod json;
pub mod outline;
pub mod text;

pub use html::{get_default_css, HtmlOptions, HtmlProjection};
pub use json::JsonProjection;
pub use outline::OutlineProjection;
pub use text::TextProjection;
