use std::sync::LazyLock;

use regex::Regex;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"finished in \d+\.\d+s").unwrap());

/// Replace timings so runs can be compared.
pub fn sanitize_duration(input: &str) -> String {
    DURATION_RE
        .replace_all(input, "finished in 0.00s")
        .to_string()
}
