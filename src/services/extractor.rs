use crate::models::PageFacts;
use scraper::{Html, Selector};
use tracing::debug;

const STRUCTURE_PREVIEW_CHARS: usize = 1000;

/// Derives structural page facts from raw markup.
///
/// Pure given (url, html): parses the document once and reads every signal
/// with CSS selectors. No network access and no script execution.
pub struct ExtractorService;

impl ExtractorService {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, url: &str, html: &str) -> PageFacts {
        let document = Html::parse_document(html);

        let title = self.select_text(&document, "title");
        let description = self.select_attr(&document, "meta[name='description']", "content");

        let h1_count = self.count(&document, "h1");
        let (img_count, img_with_alt) = self.count_images(&document);
        let link_count = self.count(&document, "a");
        let form_count = self.count(&document, "form");
        let input_field_count = self.count(&document, "input, textarea, select");
        let button_count = self.count(
            &document,
            "button, input[type='button'], input[type='submit']",
        );

        let has_navigation = self.exists(&document, "nav, header, .nav, .navigation, .menu, #menu");
        let has_footer = self.exists(&document, "footer, .footer, #footer");

        let text_content = self.body_text(&document);
        let has_https_protocol = url.starts_with("https://");
        let html_structure = html.chars().take(STRUCTURE_PREVIEW_CHARS).collect();

        let facts = PageFacts {
            title,
            description,
            h1_count,
            img_count,
            img_with_alt,
            link_count,
            form_count,
            input_field_count,
            button_count,
            has_navigation,
            has_footer,
            text_content,
            has_https_protocol,
            html_structure,
            raw_html: html.to_string(),
        };

        debug!(
            url,
            h1 = facts.h1_count,
            images = facts.img_count,
            links = facts.link_count,
            forms = facts.form_count,
            "Extracted page facts"
        );

        facts
    }

    fn select_text(&self, document: &Html, selector_str: &str) -> String {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text: String = element.text().collect();
                return text.trim().to_string();
            }
        }
        String::new()
    }

    fn select_attr(&self, document: &Html, selector_str: &str, attr: &str) -> String {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                if let Some(value) = element.value().attr(attr) {
                    return value.to_string();
                }
            }
        }
        String::new()
    }

    fn count(&self, document: &Html, selector_str: &str) -> usize {
        Selector::parse(selector_str)
            .map(|selector| document.select(&selector).count())
            .unwrap_or(0)
    }

    fn exists(&self, document: &Html, selector_str: &str) -> bool {
        Selector::parse(selector_str)
            .map(|selector| document.select(&selector).next().is_some())
            .unwrap_or(false)
    }

    fn count_images(&self, document: &Html) -> (usize, usize) {
        let mut img_count = 0;
        let mut img_with_alt = 0;

        if let Ok(selector) = Selector::parse("img") {
            for element in document.select(&selector) {
                img_count += 1;
                // An empty alt attribute does not describe the image.
                if element.value().attr("alt").is_some_and(|alt| !alt.is_empty()) {
                    img_with_alt += 1;
                }
            }
        }

        (img_count, img_with_alt)
    }

    fn body_text(&self, document: &Html) -> String {
        let raw: String = if let Ok(selector) = Selector::parse("body") {
            document
                .select(&selector)
                .next()
                .map(|body| body.text().collect())
                .unwrap_or_default()
        } else {
            String::new()
        };

        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for ExtractorService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title> Example Store </title>
  <meta name="description" content="A small demo storefront">
</head>
<body>
  <nav><a href="/">Home</a><a href="/shop">Shop</a></nav>
  <h1>Welcome</h1>
  <img src="a.png" alt="Product photo">
  <img src="b.png" alt="">
  <img src="c.png">
  <form>
    <input type="search" name="q">
    <select><option>All</option></select>
    <button type="submit">Go</button>
  </form>
  <footer><a href="/contact">Contact</a></footer>
</body>
</html>"#;

    #[test]
    fn extracts_title_and_description() {
        let facts = ExtractorService::new().extract("https://example.com", FIXTURE);
        assert_eq!(facts.title, "Example Store");
        assert_eq!(facts.description, "A small demo storefront");
    }

    #[test]
    fn counts_structural_elements() {
        let facts = ExtractorService::new().extract("https://example.com", FIXTURE);
        assert_eq!(facts.h1_count, 1);
        assert_eq!(facts.link_count, 3);
        assert_eq!(facts.form_count, 1);
        assert_eq!(facts.input_field_count, 2);
        assert_eq!(facts.button_count, 1);
        assert!(facts.has_navigation);
        assert!(facts.has_footer);
    }

    #[test]
    fn empty_alt_attributes_do_not_count_as_coverage() {
        let facts = ExtractorService::new().extract("https://example.com", FIXTURE);
        assert_eq!(facts.img_count, 3);
        assert_eq!(facts.img_with_alt, 1);
        assert!(facts.is_consistent());
    }

    #[test]
    fn collapses_body_whitespace() {
        let facts = ExtractorService::new().extract("https://example.com", FIXTURE);
        assert!(facts.text_content.contains("Home Shop Welcome"));
    }

    #[test]
    fn protocol_comes_from_the_request_url() {
        let extractor = ExtractorService::new();
        assert!(extractor.extract("https://example.com", FIXTURE).has_https_protocol);
        assert!(!extractor.extract("http://example.com", FIXTURE).has_https_protocol);
    }

    #[test]
    fn empty_document_yields_zeroed_facts() {
        let facts = ExtractorService::new().extract("http://example.com", "");
        assert_eq!(facts.title, "");
        assert_eq!(facts.img_count, 0);
        assert!(!facts.has_navigation);
        assert!(facts.is_consistent());
    }

    #[test]
    fn structure_preview_is_truncated() {
        let long = format!("<html><body>{}</body></html>", "x".repeat(5000));
        let facts = ExtractorService::new().extract("https://example.com", &long);
        assert_eq!(facts.html_structure.chars().count(), 1000);
        assert_eq!(facts.raw_html.len(), long.len());
    }
}
