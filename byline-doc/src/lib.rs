//! Document pipeline for byline posts
//!
//!     This crate converts between the three representations a post body lives in:
//!     the block editor's JSON export, the canonical stored document, and the
//!     read-only projections (HTML, outline) the public site consumes.
//!
//!     TLDR: On write, the editor export goes through [`normalize`] and the result
//!     is what gets persisted. On read, the stored document goes through
//!     [`render_html`] for the article body and [`extract_toc`] for the sidebar
//!     outline. Everything in between is a pure, in-memory tree traversal.
//!
//! Architecture
//!
//!     The editor exports either a single node or a bare array of block nodes.
//!     That dual shape exists only at the boundary: it is parsed into the
//!     [`Content`](model::Content) union and immediately canonicalized by the
//!     normalizer into a [`Document`](model::Document) (a `doc`-rooted tree with
//!     a guaranteed leading level-1 heading). Every downstream component only
//!     ever sees a `Document`.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── extract.rs              # Text flattening shared by normalizer and outline
//!     ├── model                   # Node / Content / Document shapes
//!     ├── normalize.rs            # Canonicalization (leading-title invariant)
//!     ├── post.rs                 # Post input validation
//!     ├── projection.rs           # Projection trait definition
//!     ├── projections             # html, outline, text, json projections
//!     ├── registry.rs             # ProjectionRegistry for discovery and selection
//!     ├── slug.rs                 # Slug generation and URL-slug validation
//!     ├── tags.rs                 # Tag aggregation and featured-tag rules
//!     └── toc.rs                  # Outline extraction
//!
//! Projections
//!
//!     Read-side outputs are implemented behind the [`Projection`] trait so the
//!     CLI and any embedding application select them uniformly by name. See
//!     [`ProjectionRegistry`] for discovery. Projections are recomputed on every
//!     read; nothing here caches.
//!
//! Library Choices
//!
//!     HTML is never assembled by string concatenation. The renderer builds an
//!     `RcDom` tree with the html5ever / markup5ever_rcdom stack and lets its
//!     serializer handle escaping and attribute quoting. The node model rides on
//!     serde / serde_json so stored documents round-trip byte-compatibly with
//!     the editor's export, including attribute maps we do not interpret.

pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod post;
pub mod projection;
pub mod projections;
pub mod registry;
pub mod slug;
pub mod tags;
pub mod toc;

pub use error::DocError;
pub use extract::extract_text;
pub use model::{Content, Document, Mark, Node};
pub use normalize::normalize;
pub use projection::Projection;
pub use projections::html::{render_html, render_html_with_options, HtmlOptions};
pub use registry::ProjectionRegistry;
pub use slug::{is_valid_slug, slugify};
pub use toc::{extract_toc, OutlineItem};
