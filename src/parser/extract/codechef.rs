//! CodeChef problem pages: one flat `#problem-statement` container whose
//! sections are delimited by h3 headings instead of class-tagged regions.

use std::sync::LazyLock;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::parser::document::{join_sections, ProblemDocument, Sample};
use crate::parser::text::{element_text, pre_text};
use crate::platform::Platform;

use super::first_text;

static CONTAINER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#problem-statement").unwrap());
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static PRE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("pre").unwrap());

pub fn extract(dom: &Html) -> Result<ProblemDocument> {
    let container = dom
        .select(&CONTAINER)
        .next()
        .ok_or(ExtractError::MissingAnchor("#problem-statement"))?;

    let title = first_text(container, &HEADING);

    Ok(ProblemDocument {
        platform: Platform::CodeChef,
        title: title.clone(),
        limits: String::new(),
        body: body_text(container, &title),
        constraints: String::new(),
        input_spec: heading_run(dom, "Input Format"),
        output_spec: heading_run(dom, "Output Format"),
        samples: collect_samples(dom),
        note: None,
    })
}

/// CodeChef layout: no limits block, "Format" labels.
pub fn render(doc: &ProblemDocument) -> String {
    let mut sections = vec![doc.title.clone()];
    if !doc.body.is_empty() {
        sections.push(format!("Problem Statement:\n{}", doc.body));
    }
    if !doc.input_spec.is_empty() {
        sections.push(format!("Input Format:\n{}", doc.input_spec));
    }
    if !doc.output_spec.is_empty() {
        sections.push(format!("Output Format:\n{}", doc.output_spec));
    }
    sections.push(doc.samples_block());
    join_sections(sections)
}

/// Narrative: direct children between the title heading and the
/// "Input Format" heading, one line per child.
fn body_text(container: ElementRef<'_>, title: &str) -> String {
    let mut in_statement = false;
    let mut lines = Vec::new();
    for child in container.children().filter_map(ElementRef::wrap) {
        if child.value().name() == "h3" {
            let heading = element_text(child);
            if heading.contains("Input Format") {
                break;
            }
            if heading == title {
                in_statement = true;
            }
            continue;
        }
        if in_statement {
            let text = element_text(child);
            if !text.is_empty() {
                lines.push(text);
            }
        }
    }
    lines.join("\n")
}

/// Text of the siblings following the first h3 containing `label`, up to the
/// next h3. Some page variants hoist these headings out of the statement
/// container, so the search spans the whole document.
fn heading_run(dom: &Html, label: &str) -> String {
    let Some(heading) = dom
        .select(&HEADING)
        .find(|h| element_text(*h).contains(label))
    else {
        return String::new();
    };
    heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|el| el.value().name() != "h3")
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The first "Sample" heading is followed by one holder element of
/// alternating pre blocks: odd positions are inputs, even are outputs.
fn collect_samples(dom: &Html) -> Vec<Sample> {
    let Some(heading) = dom
        .select(&HEADING)
        .find(|h| element_text(*h).contains("Sample"))
    else {
        return Vec::new();
    };
    let Some(holder) = heading.next_siblings().filter_map(ElementRef::wrap).next() else {
        return Vec::new();
    };
    holder
        .select(&PRE)
        .tuples()
        .map(|(input, output)| Sample {
            input: pre_text(input),
            output: pre_text(output),
        })
        .collect()
}
