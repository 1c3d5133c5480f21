//! HTML projection
//!
//! Projects a canonical document to the HTML fragment the public article
//! page embeds.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` ecosystem for HTML generation:
//! - `html5ever`: Browser-grade HTML5 serializer from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Markup is built as a DOM tree and serialized, never concatenated, so
//! text escaping and attribute quoting come from the standard serializer.
//!
//! # Element Mapping Table
//!
//! | Node kind        | HTML                          | Notes                                  |
//! |------------------|-------------------------------|----------------------------------------|
//! | doc              | (children only)               | Fragment output, no wrapper element    |
//! | paragraph        | `<p>`                         | Direct mapping                         |
//! | heading          | `<h1>`–`<h6>`                 | Level clamped to 6; h2/h3 get anchors  |
//! | blockquote       | `<blockquote>`                | Direct mapping                         |
//! | bulletList       | `<ul>`                        | Direct mapping                         |
//! | orderedList      | `<ol>`                        | `start` attribute honored when > 1     |
//! | listItem         | `<li>`                        | Direct mapping                         |
//! | codeBlock        | `<pre><code>`                 | `language` attr → `language-*` class   |
//! | horizontalRule   | `<hr>`                        | Void element                           |
//! | hardBreak        | `<br>`                        | Void element                           |
//! | text             | text node                     | Marks wrap it, outermost first         |
//! | (unknown)        | nothing                       | Skipped, logged at debug level         |
//!
//! Marks: bold → `<strong>`, italic → `<em>`, strike → `<s>`, code →
//! `<code>`; unknown marks are ignored.
//!
//! # Anchors
//!
//! Section and subsection headings (`h2`/`h3`) receive an `id` attribute
//! derived from their flattened text via the slug function, so the sidebar
//! outline can link into the article. The id is attached structurally when
//! the element is created — there is no post-pass over the serialized
//! markup, and headings containing nested inline markup work fine. Ids are
//! not deduplicated: two headings with identical text collide, which the
//! product accepts.
//!
//! # Standalone output
//!
//! The fragment is what the blog shell embeds. For previewing a post
//! outside the shell (the CLI's `--standalone` flag), the fragment can be
//! wrapped in a complete HTML5 document with the embedded baseline
//! stylesheet from `css/baseline.css`.

mod serializer;

use crate::error::DocError;
use crate::model::Document;
use crate::projection::Projection;
use std::collections::HashMap;

/// Options for HTML projection
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete standalone HTML document
    pub standalone: bool,
    /// Page title for standalone output (defaults to the first heading's text)
    pub title: Option<String>,
    /// Optional custom CSS appended after the baseline CSS in standalone output
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            title: None,
            custom_css: None,
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Render a document to an HTML fragment.
pub fn render_html(doc: &Document) -> Result<String, DocError> {
    serializer::render_fragment(doc)
}

/// Render a document to HTML with full options.
pub fn render_html_with_options(doc: &Document, options: &HtmlOptions) -> Result<String, DocError> {
    serializer::render_with_options(doc, options)
}

/// The baseline CSS embedded in standalone output.
pub fn get_default_css() -> &'static str {
    include_str!("../../../css/baseline.css")
}

/// Projection implementation for HTML
#[derive(Debug)]
pub struct HtmlProjection {
    options: HtmlOptions,
}

impl Default for HtmlProjection {
    fn default() -> Self {
        Self::new(HtmlOptions::default())
    }
}

impl HtmlProjection {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Projection for HtmlProjection {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Article body as an HTML fragment (or a standalone page)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn project(&self, doc: &Document) -> Result<String, DocError> {
        render_html_with_options(doc, &self.options)
    }

    fn project_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, DocError> {
        let mut opts = self.options.clone();
        if let Some(raw) = options.get("standalone") {
            opts.standalone = matches!(raw.as_str(), "true" | "1" | "yes");
        }
        if let Some(title) = options.get("title") {
            opts.title = Some(title.clone());
        }
        if let Some(css) = options.get("css") {
            opts.custom_css = Some(css.clone());
        }
        render_html_with_options(doc, &opts)
    }
}
