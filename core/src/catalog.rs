/// Catalog-file serialization
use std::collections::BTreeMap;

use serde::Serialize;

use crate::extract::DomainTable;

/// domain -> language -> message id -> translation. The empty string
/// means "not yet resolved"; this table is the single source of truth
/// for whether an id still needs a translation request.
pub type TranslationTable = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// One generated catalog, ready for the download sink.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogFile {
    pub name: String,
    pub contents: String,
}

/// Escapes a message payload by doubling embedded double quotes.
pub fn escape_message(message: &str) -> String {
    message.replace('"', "\"\"")
}

/// Reverses [`escape_message`].
pub fn unescape_message(payload: &str) -> String {
    payload.replace("\"\"", "\"")
}

/// Serializes one catalog per (domain, language) pair that has at
/// least one extracted id.
///
/// Each catalog is the header line, then per id (in domain-table
/// order) a blank separator after the first block, a comment listing
/// every `path:line` occurrence, and the `msgid`/`msgstr` pair. An
/// unresolved id serializes with an empty `msgstr`, which is valid
/// output meaning "no translation available". The base name is the
/// language alone when exactly one domain exists, `domain-language`
/// otherwise. An empty return means there is nothing to export.
pub fn build_catalogs(
    domains: &DomainTable,
    languages: &[String],
    translations: &TranslationTable,
) -> Vec<CatalogFile> {
    let total_domains = domains.len();
    let mut files = Vec::new();

    for (domain, ids) in domains {
        if ids.is_empty() {
            continue;
        }

        for language in languages {
            let mut lines = vec![format!("# Domain: {domain}, Language: {language}")];

            for (index, (id, occurrences)) in ids.iter().enumerate() {
                if index > 0 {
                    lines.push(String::new());
                }

                let references: Vec<String> = occurrences
                    .iter()
                    .map(|occurrence| format!("{}:{}", occurrence.path, occurrence.line))
                    .collect();
                lines.push(format!("# {}", references.join(", ")));
                lines.push(format!("msgid \"{}\"", escape_message(id)));

                let translation = translations
                    .get(domain)
                    .and_then(|languages| languages.get(language))
                    .and_then(|ids| ids.get(id))
                    .map(String::as_str)
                    .unwrap_or("");
                lines.push(format!("msgstr \"{}\"", escape_message(translation)));
            }

            let base_name = if total_domains == 1 {
                language.clone()
            } else {
                format!("{domain}-{language}")
            };
            files.push(CatalogFile {
                name: format!("{base_name}.po"),
                contents: lines.join("\n"),
            });
        }
    }

    files
}
