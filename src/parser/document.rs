use serde::Serialize;

use crate::platform::Platform;

/// One sample test, both halves already normalized. Samples keep document
/// order and are numbered 1-based only at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub input: String,
    pub output: String,
}

/// The normalized intermediate representation of one problem page. Built
/// fresh on every extraction, discarded once rendered; holds no DOM handles.
#[derive(Debug, Serialize)]
pub struct ProblemDocument {
    pub platform: Platform,
    pub title: String,
    /// Platform-specific block of time/memory/io-file lines; empty when the
    /// page carries no limits.
    pub limits: String,
    pub body: String,
    /// AtCoder-style constraints section; empty on the other judges.
    pub constraints: String,
    pub input_spec: String,
    pub output_spec: String,
    pub samples: Vec<Sample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ProblemDocument {
    /// The shared "Sample Test Cases" block: `Input n:` / `Output n:` pairs
    /// in document order. Empty string when there are no samples.
    pub fn samples_block(&self) -> String {
        if self.samples.is_empty() {
            return String::new();
        }
        let mut out = String::from("Sample Test Cases:");
        for (i, sample) in self.samples.iter().enumerate() {
            out.push_str(&format!("\n\nInput {}:\n{}", i + 1, sample.input));
            out.push_str(&format!("\n\nOutput {}:\n{}", i + 1, sample.output));
        }
        out
    }
}

/// Join the non-empty sections of a rendered document with blank lines.
pub fn join_sections(parts: Vec<String>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
