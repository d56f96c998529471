/// Literal that flags a document as modern-dialect source. Position within
/// the document is unconstrained; it is typically part of a leading
/// directive line such as `ROUTINE Demo [ syntax = modern ]`.
pub const MARKER: &str = "[ syntax = modern";

/// The inner phrase removed by the stripping pass.
pub const MARKER_PHRASE: &str = "syntax = modern";

pub fn is_modern(text: &str) -> bool {
    text.contains(MARKER)
}

/// Removes every occurrence of the marker phrase. Bracket residue on the
/// directive line is left in place; the line count never changes.
pub fn strip_pass(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| l.replace(MARKER_PHRASE, "")).collect()
}
