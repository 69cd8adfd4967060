//! Placeholder detection and replacement.
//!
//! Matching is literal substring containment. Replacement is a single pass
//! per token, so text that was just inserted is never scanned again.

use regex::Regex;
use std::sync::LazyLock;

static TEMPLATE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[{}<>\[\]]").expect("static regex is valid"));

/// Tokens from `candidates` that occur in `body`, in declared order.
pub fn find_present_tokens<'t>(body: &str, candidates: &[&'t str]) -> Vec<&'t str> {
    candidates
        .iter()
        .copied()
        .filter(|token| body.contains(token))
        .collect()
}

/// Replace every occurrence of `token` with `value`.
pub fn replace_all(body: &str, token: &str, value: &str) -> String {
    body.replace(token, value)
}

/// Replace the first occurrence of `token` with `value`.
pub fn replace_once(body: &str, token: &str, value: &str) -> String {
    body.replacen(token, value, 1)
}

/// Turn a raw token into a readable prompt label.
///
/// `<one line to give the program's name ...does.>` becomes
/// `one line to give the program's name ...does`.
pub fn sanitize_for_prompt(token: &str) -> String {
    let stripped = TEMPLATE_BRACKETS.replace_all(token, "");
    let label = stripped.strip_suffix('.').unwrap_or(&stripped);
    label.to_string()
}
