use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_assignment_keyword")]
    pub assignment_keyword: String,

    #[serde(default = "default_invocation_keyword")]
    pub invocation_keyword: String,

    /// Line prefixes that are never rewritten, e.g. embedded SQL calls.
    #[serde(default = "default_exempt_prefixes")]
    pub exempt_prefixes: Vec<String>,

    /// Full-word command names; a line opening with one is already a
    /// statement and is left alone.
    #[serde(default = "default_command_words")]
    pub command_words: Vec<String>,
}

fn default_assignment_keyword() -> String {
    "SET".to_string()
}

fn default_invocation_keyword() -> String {
    "DO".to_string()
}

fn default_exempt_prefixes() -> Vec<String> {
    vec!["&sql".to_string()]
}

fn default_command_words() -> Vec<String> {
    // Single-letter abbreviations are deliberately absent: in the modern
    // dialect a bare `w = 5` is an assignment, not an abbreviated WRITE.
    [
        "break", "catch", "close", "continue", "do", "else", "elseif", "for",
        "goto", "halt", "hang", "if", "job", "kill", "lock", "merge", "new",
        "open", "quit", "read", "return", "set", "tcommit", "throw",
        "trollback", "tstart", "try", "use", "while", "write", "xecute",
        "zkill", "zwrite",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            assignment_keyword: default_assignment_keyword(),
            invocation_keyword: default_invocation_keyword(),
            exempt_prefixes: default_exempt_prefixes(),
            command_words: default_command_words(),
        }
    }
}
