use serde::Serialize;

/// The judge sites we can read, plus the catch-all for everything else.
/// Exactly one value per URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Platform {
    Codeforces,
    AtCoder,
    CodeChef,
    Unsupported,
}

impl Platform {
    /// Substring match against each judge's domain, fixed priority order,
    /// first match wins. A malformed URL is just a non-matching string.
    pub fn detect(url: &str) -> Platform {
        if url.contains("codeforces.com") {
            Platform::Codeforces
        } else if url.contains("atcoder.jp") {
            Platform::AtCoder
        } else if url.contains("codechef.com") {
            Platform::CodeChef
        } else {
            Platform::Unsupported
        }
    }

    /// Whether the URL points at an actual problem page rather than some
    /// other page on a supported judge (contest list, standings, ...).
    pub fn is_problem_page(url: &str) -> bool {
        match Platform::detect(url) {
            Platform::Codeforces => {
                url.contains("/problemset/problem/")
                    || url.contains("/contest/")
                    || url.contains("/problem/")
            }
            Platform::AtCoder => url.contains("/tasks/"),
            Platform::CodeChef => url.contains("/problems/"),
            Platform::Unsupported => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::AtCoder => "AtCoder",
            Platform::CodeChef => "CodeChef",
            Platform::Unsupported => "Unknown Platform",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_judge() {
        assert_eq!(
            Platform::detect("https://codeforces.com/problemset/problem/1/A"),
            Platform::Codeforces
        );
        assert_eq!(
            Platform::detect("https://atcoder.jp/contests/abc100/tasks/abc100_a"),
            Platform::AtCoder
        );
        assert_eq!(
            Platform::detect("https://www.codechef.com/problems/TWOSUM"),
            Platform::CodeChef
        );
    }

    #[test]
    fn unknown_url_is_unsupported() {
        assert_eq!(
            Platform::detect("https://example.com/problem/1"),
            Platform::Unsupported
        );
        assert_eq!(Platform::detect(""), Platform::Unsupported);
        assert_eq!(Platform::detect("not a url at all"), Platform::Unsupported);
    }

    #[test]
    fn priority_order_is_deterministic() {
        // Both domains present: the first in priority order wins.
        let url = "https://codeforces.com/blog/entry/1?ref=atcoder.jp";
        assert_eq!(Platform::detect(url), Platform::Codeforces);
    }

    #[test]
    fn problem_page_check() {
        assert!(Platform::is_problem_page(
            "https://codeforces.com/problemset/problem/1/A"
        ));
        assert!(Platform::is_problem_page(
            "https://codeforces.com/contest/1500/problem/B"
        ));
        assert!(Platform::is_problem_page(
            "https://atcoder.jp/contests/abc100/tasks/abc100_a"
        ));
        assert!(Platform::is_problem_page(
            "https://www.codechef.com/problems/TWOSUM"
        ));

        assert!(!Platform::is_problem_page("https://codeforces.com/ratings"));
        assert!(!Platform::is_problem_page("https://atcoder.jp/contests/abc100"));
        assert!(!Platform::is_problem_page("https://example.com/problems/X"));
    }
}
