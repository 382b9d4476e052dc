/// Regex-based message extraction from translatable sources
use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

use crate::loader::FileRecord;

/// One call site of a translatable string. `line` is 1-based.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Occurrence {
    pub path: String,
    pub line: usize,
}

/// domain -> message id -> call sites in encounter order.
pub type DomainTable = BTreeMap<String, BTreeMap<String, Vec<Occurrence>>>;

/// Builds the call-site pattern for the configured allow-list:
/// whitespace, one recognized name, then `(id, domain)` with both
/// arguments as single- or double-quoted literals. The pattern itself
/// has no escaped-quote support.
fn call_site_pattern(functions: &[String]) -> Regex {
    let names = functions
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");
    let pattern =
        format!(r#"\s(?:{names})\s*\(\s*['"]([^'"]+)['"]\s*,\s*['"]([^'"]+)['"]\s*\)"#);
    Regex::new(&pattern).expect("valid call-site pattern")
}

/// Scans every source file for extraction call sites and accumulates
/// occurrences per (domain, id). The line number counts newline
/// characters strictly before the match offset, which sits on the
/// whitespace preceding the function name.
pub fn extract_messages(files: &FileRecord, functions: &[String]) -> DomainTable {
    let pattern = call_site_pattern(functions);
    let mut domains = DomainTable::new();

    for (path, contents) in files {
        for captures in pattern.captures_iter(contents) {
            let id = captures[1].to_string();
            let domain = captures[2].to_string();
            let offset = captures.get(0).map_or(0, |m| m.start());
            let line = contents[..offset].matches('\n').count() + 1;

            domains
                .entry(domain)
                .or_default()
                .entry(id)
                .or_default()
                .push(Occurrence {
                    path: path.clone(),
                    line,
                });
        }
    }

    domains
}
