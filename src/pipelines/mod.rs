//! Sources a recipe can be imported from. Every pipeline ends in the text
//! importer and yields a [`ParsedRecipeDraft`](crate::ParsedRecipeDraft).

pub mod html;
pub mod text;
pub mod url;

/// Where pasted or fetched recipe content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Plain pasted text
    Text(String),
    /// HTML markup, e.g. a saved page or rich clipboard content
    Html(String),
    /// A recipe page to fetch
    Url(String),
}
