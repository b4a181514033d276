use serde::{Deserialize, Serialize};

/// Structural facts extracted from a single web page.
///
/// Produced by the extractor (or supplied directly by the caller) and
/// consumed read-only by all ten heuristic evaluators. `raw_html` is the
/// principal signal source for markup checks; `text_content` is the
/// whitespace-collapsed visible text used for language checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageFacts {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub h1_count: usize,
    #[serde(default)]
    pub img_count: usize,
    #[serde(default)]
    pub img_with_alt: usize,
    #[serde(default)]
    pub link_count: usize,
    #[serde(default)]
    pub form_count: usize,
    #[serde(default)]
    pub input_field_count: usize,
    #[serde(default)]
    pub button_count: usize,
    #[serde(default)]
    pub has_navigation: bool,
    #[serde(default)]
    pub has_footer: bool,
    #[serde(default)]
    pub text_content: String,
    #[serde(default)]
    pub has_https_protocol: bool,
    #[serde(default)]
    pub html_structure: String,
    #[serde(default)]
    pub raw_html: String,
}

impl PageFacts {
    /// Invariant callers must uphold before handing facts to the engine.
    pub fn is_consistent(&self) -> bool {
        self.img_with_alt <= self.img_count
    }
}
