use crate::config::Config;
use regex::Regex;
use std::sync::LazyLock;

static RE_FIRST_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap());
static RE_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%?[A-Za-z][A-Za-z0-9]*\s*=\s*\S").unwrap());
static RE_INVOKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:##class\(.+\)|%?[A-Za-z][A-Za-z0-9]*)(?:\.%?[A-Za-z][A-Za-z0-9]*)*\(.*\)\s*$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// Already carries a statement keyword or an exempt prefix.
    Explicit,
    /// Implicit assignment: `identifier = expression`.
    Assignment,
    /// Implicit call: `identifier(args)`, a dotted method chain, or
    /// `##class(Name).Method(args)`.
    Invocation,
    Other,
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

pub fn classify(line: &str, config: &Config) -> LineKind {
    let t = line.trim_start();

    if t.trim_end().is_empty() {
        return LineKind::Blank;
    }
    if t.starts_with("//") || t.starts_with("#;") || t.starts_with(';') || t.starts_with("/*") {
        return LineKind::Comment;
    }
    if config
        .exempt_prefixes
        .iter()
        .any(|p| starts_with_ignore_case(t, p))
    {
        return LineKind::Explicit;
    }

    // Whole-token keyword detection; `sets = 5` must stay implicit while
    // `set x = 5` is already explicit.
    if let Some(m) = RE_FIRST_WORD.find(t) {
        let word = m.as_str();
        if word.eq_ignore_ascii_case(&config.assignment_keyword)
            || word.eq_ignore_ascii_case(&config.invocation_keyword)
        {
            return LineKind::Explicit;
        }
        if config
            .command_words
            .iter()
            .any(|w| word.eq_ignore_ascii_case(w))
        {
            return LineKind::Other;
        }
    }

    if RE_ASSIGN.is_match(t) {
        return LineKind::Assignment;
    }
    if RE_INVOKE.is_match(t) {
        return LineKind::Invocation;
    }
    LineKind::Other
}
