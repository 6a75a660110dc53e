//! Small helpers shared by formatter implementations.

pub mod color;

/// Width of separator lines.
pub const LINE_WIDTH: usize = 80;

/// Center `text` in a line of dashes, like `----- text -----`.
pub fn separator(text: &str) -> String {
    format!("{:-^width$}", format!(" {text} "), width = LINE_WIDTH)
}

/// `"1 test"`, `"2 tests"`.
pub fn tests_count(count: usize) -> String {
    match count {
        1 => "1 test".to_string(),
        count => format!("{count} tests"),
    }
}
