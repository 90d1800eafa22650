//! AtCoder task pages: the statement lives in the English `.lang-en`
//! wrapper as sequential "part" blocks, each an h3 heading plus a section.
//! Limits sit outside the wrapper as standalone nodes.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::parser::document::{join_sections, ProblemDocument, Sample};
use crate::parser::text::{element_text, pre_text};
use crate::platform::Platform;

use super::first_text;

static LANG_EN: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".lang-en").unwrap());
static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static PART: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"div[class^="part"]"#).unwrap());
static SECTION: LazyLock<Selector> = LazyLock::new(|| Selector::parse("section").unwrap());
static PRE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("pre").unwrap());
static TIME_LIMIT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".time-limit").unwrap());
static MEMORY_LIMIT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".memory-limit").unwrap());

static SAMPLE_NO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// The part headings we map onto document fields, matched case-insensitively
/// as substrings, first matching part per label.
const LABELS: [&str; 4] = ["problem statement", "constraints", "input", "output"];

pub fn extract(dom: &Html) -> Result<ProblemDocument> {
    let english = dom
        .select(&LANG_EN)
        .next()
        .ok_or(ExtractError::MissingAnchor(".lang-en"))?;

    let parts: Vec<ElementRef<'_>> = english.select(&PART).collect();
    let [body, constraints, input_spec, output_spec] =
        LABELS.map(|label| labeled_part(&parts, label));

    Ok(ProblemDocument {
        platform: Platform::AtCoder,
        title: first_text(english, &HEADING),
        limits: limits_block(dom),
        body,
        constraints,
        input_spec,
        output_spec,
        samples: collect_samples(english),
        note: None,
    })
}

/// AtCoder layout: every section conditional, constraints between the
/// narrative and the I/O formats.
pub fn render(doc: &ProblemDocument) -> String {
    let mut sections = vec![doc.title.clone(), doc.limits.clone()];
    if !doc.body.is_empty() {
        sections.push(format!("Problem Statement:\n{}", doc.body));
    }
    if !doc.constraints.is_empty() {
        sections.push(format!("Constraints:\n{}", doc.constraints));
    }
    if !doc.input_spec.is_empty() {
        sections.push(format!("Input:\n{}", doc.input_spec));
    }
    if !doc.output_spec.is_empty() {
        sections.push(format!("Output:\n{}", doc.output_spec));
    }
    sections.push(doc.samples_block());
    join_sections(sections)
}

/// Both limit nodes or nothing; a half-present pair yields no block.
fn limits_block(dom: &Html) -> String {
    match (
        dom.select(&TIME_LIMIT).next(),
        dom.select(&MEMORY_LIMIT).next(),
    ) {
        (Some(time), Some(memory)) => {
            format!("{}\n{}", element_text(time), element_text(memory))
        }
        _ => String::new(),
    }
}

/// Content of the first part whose heading mentions `label`. A part with no
/// section child, or no part matching at all, yields an empty field.
fn labeled_part(parts: &[ElementRef<'_>], label: &str) -> String {
    parts
        .iter()
        .find(|part| {
            part.select(&HEADING)
                .next()
                .is_some_and(|h| element_text(h).to_lowercase().contains(label))
        })
        .and_then(|part| part.select(&SECTION).next())
        .map(section_text)
        .unwrap_or_default()
}

/// A section's content without its own h3 heading, one line per child.
fn section_text(section: ElementRef<'_>) -> String {
    section
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() != "h3")
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Most task layouts give every literal block its own "Sample Input n" /
/// "Sample Output n" heading; older ones just alternate pre blocks. Heading
/// numbering wins whenever it produces at least one complete pair, the
/// positional scan is the fallback.
fn collect_samples(english: ElementRef<'_>) -> Vec<Sample> {
    let numbered = numbered_samples(english);
    if !numbered.is_empty() {
        return numbered;
    }
    alternating_samples(english)
}

fn numbered_samples(english: ElementRef<'_>) -> Vec<Sample> {
    let mut slots: BTreeMap<u32, (Option<String>, Option<String>)> = BTreeMap::new();
    for pre in english.select(&PRE) {
        let Some(heading) = preceding_heading(pre) else {
            continue;
        };
        let heading = element_text(heading).to_lowercase();
        let number = SAMPLE_NO_RE
            .find(&heading)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1);
        if heading.contains("sample input") {
            slots.entry(number).or_default().0 = Some(pre_text(pre));
        } else if heading.contains("sample output") {
            slots.entry(number).or_default().1 = Some(pre_text(pre));
        }
    }
    slots
        .into_values()
        .filter_map(|(input, output)| {
            Some(Sample {
                input: input?,
                output: output?,
            })
        })
        .collect()
}

/// Nearest h3 before the block among its siblings.
fn preceding_heading<'a>(pre: ElementRef<'a>) -> Option<ElementRef<'a>> {
    pre.prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "h3")
}

fn alternating_samples(english: ElementRef<'_>) -> Vec<Sample> {
    english
        .select(&PRE)
        .tuples()
        .map(|(input, output)| Sample {
            input: pre_text(input),
            output: pre_text(output),
        })
        .collect()
}
