//! Extraction pipeline: page URL + saved HTML in, canonical statement text
//! out. The URL picks the extractor, the extractor builds a
//! [`ProblemDocument`], its platform renderer flattens it to text.

pub mod document;
pub mod extract;
pub mod text;

use scraper::Html;
use tracing::{debug, warn};

use crate::error::{ExtractError, Result};
use crate::platform::Platform;
use document::ProblemDocument;

/// Build the structured document for a supported problem page. The DOM is
/// parsed once per call and dropped with it; nothing is cached.
pub fn extract_document(url: &str, html: &str) -> Result<ProblemDocument> {
    let platform = Platform::detect(url);
    if platform == Platform::Unsupported {
        return Err(ExtractError::UnsupportedPlatform(url.to_string()));
    }

    let dom = Html::parse_document(html);
    let result = match platform {
        Platform::Codeforces => extract::codeforces::extract(&dom),
        Platform::AtCoder => extract::atcoder::extract(&dom),
        Platform::CodeChef | Platform::Unsupported => extract::codechef::extract(&dom),
    };
    match &result {
        Ok(doc) => debug!(
            platform = platform.name(),
            title = %doc.title,
            samples = doc.samples.len(),
            "statement extracted"
        ),
        Err(err) => warn!(url, %err, "extraction failed"),
    }
    result
}

/// Render a document into the canonical text layout of its platform, with
/// runs of three or more newlines collapsed to two.
pub fn render_document(doc: &ProblemDocument) -> String {
    let rendered = match doc.platform {
        Platform::Codeforces => extract::codeforces::render(doc),
        Platform::AtCoder => extract::atcoder::render(doc),
        Platform::CodeChef | Platform::Unsupported => extract::codechef::render(doc),
    };
    text::collapse_blank_runs(&rendered)
}

/// One-shot entry point: extract and render in a single call.
pub fn extract_statement(url: &str, html: &str) -> Result<String> {
    let doc = extract_document(url, html)?;
    Ok(render_document(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CF_URL: &str = "https://codeforces.com/problemset/problem/1/A";
    const AC_URL: &str = "https://atcoder.jp/contests/abc1/tasks/abc1_a";
    const CC_URL: &str = "https://www.codechef.com/problems/TWOSUM";

    #[test]
    fn unsupported_platform_never_reaches_an_extractor() {
        // A page any extractor would happily read, behind an unknown URL.
        let html = std::fs::read_to_string("tests/fixtures/codeforces.html").unwrap();
        let err = extract_statement("https://example.com/problem/1", &html).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedPlatform(_)));
    }

    #[test]
    fn failed_extraction_is_distinct_from_unsupported() {
        let err = extract_statement(CF_URL, "<html><body></body></html>").unwrap_err();
        assert!(matches!(err, ExtractError::MissingAnchor(_)));
    }

    #[test]
    fn codeforces_scenario() {
        let html = r#"
            <div class="problem-statement">
              <div class="header">
                <div class="title">Sum of Two</div>
                <div class="time-limit">2 seconds</div>
              </div>
              <div><p>Given two integers, print their sum.</p></div>
              <div class="input-specification"><div class="section-title">Input</div>Two integers a b</div>
              <div class="output-specification"><div class="section-title">Output</div>Print a+b</div>
              <div class="sample-test">
                <div class="input"><pre>1
2</pre></div>
                <div class="output"><pre>3</pre></div>
              </div>
            </div>"#;
        let out = extract_statement(CF_URL, html).unwrap();
        assert!(out.contains("Sum of Two"));
        assert!(out.contains("2 seconds"));
        assert!(out.contains("Given two integers"));
        assert!(out.contains("Input\nTwo integers a b"));
        assert!(out.contains("Input 1:\n1\n2"));
        assert!(out.contains("Output 1:\n3"));
    }

    #[test]
    fn atcoder_scenario() {
        let html = r#"
            <span class="lang-en">
              <div class="part"><section><h3>Problem Statement</h3><p>Find X</p></section></div>
              <div class="part"><section><h3>Constraints</h3><p>1&lt;=N&lt;=10</p></section></div>
              <div class="part"><section><h3>Sample Input 1</h3><pre>5</pre></section></div>
              <div class="part"><section><h3>Sample Output 1</h3><pre>25</pre></section></div>
            </span>"#;
        let out = extract_statement(AC_URL, html).unwrap();
        assert!(out.contains("Problem Statement:\nFind X"));
        assert!(out.contains("Constraints:\n1<=N<=10"));
        assert!(out.contains("Input 1:\n5"));
        assert!(out.contains("Output 1:\n25"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn codechef_scenario() {
        let html = r#"
            <div id="problem-statement">
              <h3>Two Sum</h3>
              <p>array and target</p>
              <h3>Input Format</h3>
              <p>array and target lines</p>
              <h3>Output Format</h3>
              <p>index pair</p>
              <h3>Sample 1:</h3>
              <div><pre>1 2 3</pre><pre>0 1</pre></div>
            </div>"#;
        let out = extract_statement(CC_URL, html).unwrap();
        assert!(out.contains("Two Sum"));
        assert!(out.contains("Output Format:\nindex pair"));
        assert!(out.contains("Input 1:\n1 2 3"));
        assert!(out.contains("Output 1:\n0 1"));
    }

    #[test]
    fn rendered_text_never_has_blank_line_runs() {
        for (url, fixture) in [
            (CF_URL, "tests/fixtures/codeforces.html"),
            (AC_URL, "tests/fixtures/atcoder.html"),
            (CC_URL, "tests/fixtures/codechef.html"),
        ] {
            let html = std::fs::read_to_string(fixture).unwrap();
            let out = extract_statement(url, &html).unwrap();
            assert!(!out.contains("\n\n\n"), "blank-line run for {url}");
        }
    }

    #[test]
    fn document_serializes_for_json_dump() {
        let html = std::fs::read_to_string("tests/fixtures/atcoder.html").unwrap();
        let doc = extract_document(AC_URL, &html).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"platform\":\"AtCoder\""));
        assert!(json.contains("\"samples\""));
    }
}
