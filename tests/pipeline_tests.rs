//! End-to-end extractor → engine pipeline tests over inline fixture pages.
//!
//! No network access: fixtures are handed straight to the extractor, and the
//! engine runs on the derived facts. Assertions target the output contract
//! (ten results in id order, scores in range, aggregate law) and the relative
//! ordering between a well-built page and a hostile one.

use pretty_assertions::assert_eq;

use usability_audit_engine::engine;
use usability_audit_engine::models::{PageFacts, ScoreBand};
use usability_audit_engine::services::ExtractorService;

const STOREFRONT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Plainwood Furniture Shop</title>
  <meta name="description" content="Hand-built furniture, delivered.">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <style>
    body { margin: 0; padding: 1rem; font-family: serif; color: #333; }
    .grid { display: flex; gap: 1rem; }
  </style>
</head>
<body>
  <nav class="menu">
    <a href="/">Home</a>
    <a href="/shop">Shop</a>
    <a href="/help">Help</a>
    <a href="/contact">Contact</a>
  </nav>
  <h1>Shop our catalog</h1>
  <div class="grid">
    <img src="chair.jpg" alt="Oak chair">
    <img src="table.jpg" alt="Walnut table">
  </div>
  <form action="/search">
    <label for="q">Search</label>
    <input id="q" type="search" name="q" required placeholder="Search products"
           autocomplete="off" aria-invalid="false">
    <button type="submit">Search</button>
    <button type="reset">Clear</button>
  </form>
  <p>Add items to your cart and head to checkout. Need help? Visit the FAQ
     or contact support. A status toast confirms every action, and a loading
     spinner appears while we look things up. Press Cancel to go back.</p>
  <footer class="footer"><a href="/faq">FAQ</a></footer>
</body>
</html>"#;

const HOSTILE: &str = r#"<html>
<body>
  <h1>One</h1><h1>Two</h1><h1>Three</h1>
  <form><input><input><input></form>
  <form><input></form>
  <a>1</a><a>2</a><a>3</a><a>4</a><a>5</a><a>6</a><a>7</a>
  <button>delete</button>
</body>
</html>"#;

fn analyze_fixture(url: &str, html: &str) -> usability_audit_engine::models::AnalysisResult {
    let facts = ExtractorService::new().extract(url, html);
    engine::analyze(url, &facts)
}

#[test]
fn pipeline_emits_ten_results_in_id_order() {
    let result = analyze_fixture("https://plainwood.example", STOREFRONT);
    assert_eq!(result.heuristic_results.len(), 10);
    for (i, heuristic) in result.heuristic_results.iter().enumerate() {
        assert_eq!(heuristic.id as usize, i + 1);
        assert!((1..=100).contains(&heuristic.score));
        assert!(!heuristic.findings.is_empty());
    }
}

#[test]
fn overall_score_matches_the_aggregation_law() {
    let result = analyze_fixture("https://plainwood.example", STOREFRONT);
    let sum: u32 = result
        .heuristic_results
        .iter()
        .map(|r| r.score as u32)
        .sum();
    assert_eq!(result.overall_score, (sum as f64 / 10.0).round() as u8);
}

#[test]
fn pipeline_is_deterministic() {
    let first = analyze_fixture("https://plainwood.example", STOREFRONT);
    let second = analyze_fixture("https://plainwood.example", STOREFRONT);
    assert_eq!(first.heuristic_results, second.heuristic_results);
    assert_eq!(first.overall_score, second.overall_score);
}

#[test]
fn well_built_page_outscores_hostile_page() {
    let good = analyze_fixture("https://plainwood.example", STOREFRONT);
    let bad = analyze_fixture("http://hostile.example", HOSTILE);
    assert!(good.overall_score > bad.overall_score);
}

#[test]
fn hostile_page_findings_name_its_defects() {
    let result = analyze_fixture("http://hostile.example", HOSTILE);

    let consistency = &result.heuristic_results[3];
    assert!(consistency
        .findings
        .iter()
        .any(|f| f.contains("Multiple H1 headings (3)")));

    let prevention = &result.heuristic_results[4];
    assert!(prevention.score < 50);
    assert!(prevention
        .recommendations
        .iter()
        .any(|r| r.contains("form validation")));
}

#[test]
fn storefront_lands_in_the_good_band_for_status() {
    let result = analyze_fixture("https://plainwood.example", STOREFRONT);
    // Title, required, placeholder, feedback terms, and HTTPS all fire.
    let status = &result.heuristic_results[0];
    assert_eq!(status.band(), ScoreBand::Good);
}

#[test]
fn empty_document_still_yields_a_complete_report() {
    let result = analyze_fixture("http://empty.example", "");
    assert_eq!(result.heuristic_results.len(), 10);
    assert!((1..=100).contains(&result.overall_score));
}

#[test]
fn engine_accepts_hand_written_facts() {
    // The engine's input contract is just the facts record; no markup needed.
    let facts = PageFacts {
        title: "Minimal".to_string(),
        has_https_protocol: true,
        ..Default::default()
    };
    let result = engine::analyze("https://minimal.example", &facts);
    assert_eq!(result.heuristic_results.len(), 10);
    assert_eq!(result.url, "https://minimal.example");
}
