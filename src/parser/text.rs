use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize the literal text of a pre-formatted block: every line trimmed,
/// lines that end up empty dropped, the rest rejoined with single newlines.
pub fn normalize_pre(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse any run of three or more newlines to exactly two, and strip
/// surrounding whitespace from the assembled text.
pub fn collapse_blank_runs(text: &str) -> String {
    BLANK_RUN_RE.replace_all(text, "\n\n").trim().to_string()
}

/// Full text of an element (all descendant text nodes), trimmed. The
/// concatenation mirrors what the browser reports as textContent.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Literal text of a sample block. Each text node becomes its own line, so
/// judges that wrap sample lines in per-line elements still split correctly.
pub fn pre_text(el: ElementRef<'_>) -> String {
    normalize_pre(&el.text().collect::<Vec<_>>().join("\n"))
}
