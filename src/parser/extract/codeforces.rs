//! Codeforces problem pages: one `.problem-statement` container with a
//! class-tagged region for every section.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::parser::document::{join_sections, ProblemDocument, Sample};
use crate::parser::text::{element_text, pre_text};
use crate::platform::Platform;

use super::{first_text, has_class};

static STATEMENT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".problem-statement").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".title").unwrap());
static TIME_LIMIT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".time-limit").unwrap());
static MEMORY_LIMIT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".memory-limit").unwrap());
static INPUT_FILE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".input-file").unwrap());
static OUTPUT_FILE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".output-file").unwrap());
static SECTION_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".section-title").unwrap());
static INPUT_SPEC: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".input-specification").unwrap());
static OUTPUT_SPEC: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".output-specification").unwrap());
static SAMPLE_TEST: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".sample-test").unwrap());
static SAMPLE_INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".input pre").unwrap());
static SAMPLE_OUTPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".output pre").unwrap());
static NOTE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".note").unwrap());

pub fn extract(dom: &Html) -> Result<ProblemDocument> {
    let statement = dom
        .select(&STATEMENT)
        .next()
        .ok_or(ExtractError::MissingAnchor(".problem-statement"))?;

    Ok(ProblemDocument {
        platform: Platform::Codeforces,
        title: first_text(statement, &TITLE),
        limits: limits_block(statement),
        body: body_text(statement),
        constraints: String::new(),
        input_spec: spec_text(statement, &INPUT_SPEC, "Input"),
        output_spec: spec_text(statement, &OUTPUT_SPEC, "Output"),
        samples: collect_samples(statement),
        note: statement
            .select(&NOTE)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty()),
    })
}

/// Codeforces layout: limits directly under the title, bare `Input` /
/// `Output` labels (the page itself names those sections), trailing note.
pub fn render(doc: &ProblemDocument) -> String {
    let mut sections = vec![doc.title.clone(), doc.limits.clone()];
    if !doc.body.is_empty() {
        sections.push(format!("Problem Statement:\n{}", doc.body));
    }
    if !doc.input_spec.is_empty() {
        sections.push(format!("Input\n{}", doc.input_spec));
    }
    if !doc.output_spec.is_empty() {
        sections.push(format!("Output\n{}", doc.output_spec));
    }
    sections.push(doc.samples_block());
    if let Some(note) = &doc.note {
        sections.push(format!("Note:\n{note}"));
    }
    join_sections(sections)
}

/// Time limit, memory limit, input file, output file: one line each, in that
/// order; absent nodes contribute nothing.
fn limits_block(statement: ElementRef<'_>) -> String {
    [&*TIME_LIMIT, &*MEMORY_LIMIT, &*INPUT_FILE, &*OUTPUT_FILE]
        .into_iter()
        .filter_map(|sel| statement.select(sel).next())
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Narrative sections: the container's direct child divs after the header,
/// up to the input specification. Divs holding a section heading are the
/// class-tagged regions handled elsewhere, so they are skipped here.
fn body_text(statement: ElementRef<'_>) -> String {
    let divs = statement
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "div");

    let mut parts = Vec::new();
    for div in divs.skip(1) {
        if has_class(div, "input-specification") {
            break;
        }
        if has_class(div, "header") || div.select(&SECTION_TITLE).next().is_some() {
            continue;
        }
        let text = element_text(div);
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join("\n\n")
}

/// Region text with its duplicated heading word stripped once from the front
/// (the heading is an inline child of the region, so textContent repeats it).
fn spec_text(statement: ElementRef<'_>, sel: &Selector, label: &str) -> String {
    let Some(region) = statement.select(sel).next() else {
        return String::new();
    };
    element_text(region).replacen(label, "", 1).trim().to_string()
}

/// Every sample-test region in document order; within a region, input blocks
/// pair up with output blocks positionally. A lone half is dropped.
fn collect_samples(statement: ElementRef<'_>) -> Vec<Sample> {
    let mut samples = Vec::new();
    for region in statement.select(&SAMPLE_TEST) {
        for (input, output) in region
            .select(&SAMPLE_INPUT)
            .zip(region.select(&SAMPLE_OUTPUT))
        {
            samples.push(Sample {
                input: pre_text(input),
                output: pre_text(output),
            });
        }
    }
    samples
}
