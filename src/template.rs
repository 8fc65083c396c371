//! Template engine for placeholder substitution.
//!
//! This module substitutes `{{NAME}}` tokens in freeform text and JSON
//! templates. It is used for:
//!
//! - Manifest path fields (`from`, `toDir`, `rename`, ...)
//! - Template file contents (`*.tpl.md`, `*.tpl.toml`, `*.tpl.json`)
//!
//! # Syntax
//!
//! - `{{NAME}}` - Substitutes the value of context key `NAME`
//! - Tokens whose name is not a context key are left verbatim, so templates
//!   may reference keys that only newer versions define
//!
//! # JSON templates
//!
//! [`render_json`] substitutes first, then requires the result to parse as
//! JSON and re-emits it with keys in source order, two-space indentation and
//! a single trailing newline so generated config files stay diff-stable.

use crate::context::TemplateContext;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// Matches a `{{NAME}}` placeholder token.
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid placeholder regex")
});

/// Marker inserted before the final extension of template files.
pub const TEMPLATE_MARKER: &str = ".tpl";

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Content was not valid JSON after substitution.
    InvalidJson {
        /// Parser message, including line and column.
        message: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidJson { message } => {
                write!(f, "rendered content is not valid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// How a file's content is produced at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Rendered with [`render_text`].
    Text,
    /// Rendered with [`render_json`].
    Json,
}

impl TemplateKind {
    /// Detect a template-marker suffix (`.tpl.md`, `.tpl.toml`, `.tpl.json`).
    ///
    /// Returns `None` for plain files, which are copied verbatim.
    pub fn detect(file_name: &str) -> Option<Self> {
        let (_, ext) = split_marker(file_name)?;
        match ext {
            "json" => Some(Self::Json),
            _ => Some(Self::Text),
        }
    }
}

/// Extensions that make `<name>.tpl.<ext>` a template.
const TEMPLATE_EXTENSIONS: [&str; 3] = ["md", "toml", "json"];

/// Split `README.tpl.md` into (`README`, `md`).
fn split_marker(file_name: &str) -> Option<(&str, &str)> {
    let (rest, ext) = file_name.rsplit_once('.')?;
    if !TEMPLATE_EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = rest.strip_suffix(TEMPLATE_MARKER)?;
    if stem.is_empty() {
        return None;
    }
    Some((stem, ext))
}

/// Strip the template marker from a file name: `README.tpl.md` -> `README.md`.
///
/// Returns `None` when the name carries no recognized marker.
pub fn strip_template_marker(file_name: &str) -> Option<String> {
    split_marker(file_name).map(|(stem, ext)| format!("{}.{}", stem, ext))
}

/// Substitute every known `{{NAME}}` token in `raw`.
///
/// Unknown tokens pass through unchanged. Substitution is single-pass:
/// values are never re-scanned for further tokens.
///
/// # Examples
///
/// ```ignore
/// let ctx = TemplateContext::from_config(&config); // claude-code defaults
/// assert_eq!(render_text("{{AGENT_DIR}}/x {{LATER}}", &ctx), ".claude/x {{LATER}}");
/// ```
pub fn render_text(raw: &str, context: &TemplateContext) -> String {
    PLACEHOLDER_REGEX
        .replace_all(raw, |caps: &Captures| match context.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Substitute placeholders, then validate and canonically re-serialize as JSON.
pub fn render_json(raw: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    let substituted = render_text(raw, context);

    let value: serde_json::Value =
        serde_json::from_str(&substituted).map_err(|e| TemplateError::InvalidJson {
            message: e.to_string(),
        })?;

    let mut out = serde_json::to_string_pretty(&value).map_err(|e| TemplateError::InvalidJson {
        message: e.to_string(),
    })?;
    out.push('\n');
    Ok(out)
}

/// Render content according to its kind.
pub fn render(
    kind: TemplateKind,
    raw: &str,
    context: &TemplateContext,
) -> Result<String, TemplateError> {
    match kind {
        TemplateKind::Text => Ok(render_text(raw, context)),
        TemplateKind::Json => render_json(raw, context),
    }
}
