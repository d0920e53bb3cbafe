//! Placeholder substitution for project templates.
//! Replaces the `<NAME>`, `<URL>`, `<DESCRIPTION>` and `<KEYWORDS>` tokens
//! with concrete values in a single pass over the template text.
use crate::constants::{DESCRIPTION_TOKEN, KEYWORDS_TOKEN, NAME_TOKEN, URL_TOKEN};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    let tokens = [NAME_TOKEN, URL_TOKEN, DESCRIPTION_TOKEN, KEYWORDS_TOKEN]
        .map(regex::escape)
        .join("|");
    Regex::new(&tokens).expect("placeholder tokens form a valid pattern")
});

/// Concrete values for the placeholder tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    pub name: String,
    pub url: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl Variables {
    /// Renders the keyword list as `[a, b, c]`, or `[]` when there are none.
    pub fn keywords_list(&self) -> String {
        format!("[{}]", self.keywords.join(", "))
    }

    fn value_for(&self, token: &str) -> String {
        match token {
            NAME_TOKEN => self.name.clone(),
            URL_TOKEN => self.url.clone(),
            DESCRIPTION_TOKEN => self.description.clone(),
            KEYWORDS_TOKEN => self.keywords_list(),
            other => other.to_string(),
        }
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders template text with the given values.
    ///
    /// # Arguments
    /// * `template` - Template text to render
    /// * `variables` - Values for the placeholder tokens
    ///
    /// # Returns
    /// * `String` - Rendered text
    fn render(&self, template: &str, variables: &Variables) -> String;
}

/// Renderer that replaces literal placeholder tokens.
///
/// Substituted values are never scanned again, so a value that itself
/// contains a token is written out verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, variables: &Variables) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| variables.value_for(&caps[0]))
            .into_owned()
    }
}
