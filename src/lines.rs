pub fn split_lines(text: &str) -> Vec<String> {
    // Stabilize line endings only; bytes within a line are compiler payload
    // and must survive untouched.
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n').map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_normalization() {
        let result = split_lines("hello\r\nworld");
        assert_eq!(result, vec!["hello", "world"]);
    }

    #[test]
    fn test_cr_normalization() {
        let result = split_lines("hello\rworld");
        assert_eq!(result, vec!["hello", "world"]);
    }

    #[test]
    fn test_trailing_whitespace_preserved() {
        let result = split_lines(" set x = 1  \ndone");
        assert_eq!(result, vec![" set x = 1  ", "done"]);
    }

    #[test]
    fn test_empty_input() {
        let result = split_lines("");
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_trailing_newline_keeps_empty_line() {
        let result = split_lines("a\n");
        assert_eq!(result, vec!["a", ""]);
    }
}
