pub mod atcoder;
pub mod codechef;
pub mod codeforces;

use scraper::{ElementRef, Selector};

use super::text::element_text;

/// Text of the first match for `sel` under `root`, empty when absent.
pub(crate) fn first_text(root: ElementRef<'_>, sel: &Selector) -> String {
    root.select(sel).next().map(element_text).unwrap_or_default()
}

/// Whether the element carries the given class.
pub(crate) fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|c| c == class))
}
