use crate::classify::{classify, LineKind};
use crate::config::Config;

fn insert_keyword(line: &str, keyword: &str) -> String {
    let indent = line.len() - line.trim_start().len();
    format!("{}{} {}", &line[..indent], keyword, &line[indent..])
}

pub fn assignment_pass(lines: &[String], config: &Config) -> Vec<String> {
    lines
        .iter()
        .map(|line| match classify(line, config) {
            LineKind::Assignment => insert_keyword(line, &config.assignment_keyword),
            _ => line.clone(),
        })
        .collect()
}

pub fn invocation_pass(lines: &[String], config: &Config) -> Vec<String> {
    lines
        .iter()
        .map(|line| match classify(line, config) {
            LineKind::Invocation => insert_keyword(line, &config.invocation_keyword),
            _ => line.clone(),
        })
        .collect()
}
