/// Translation-memory parsing of previously generated catalogs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{unescape_message, TranslationTable};
use crate::loader::FileRecord;

static HEADER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^#\s*domain:\s*(.+?),\s*language:\s*(.+?)\s*$")
        .expect("valid header pattern")
});

static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("msgid\\s+\"(.+)\"\r?\nmsgstr\\s+\"(.+)\"").expect("valid entry pattern")
});

/// Seeds a translation table from existing catalog files.
///
/// A file contributes only when its first line is a
/// `# Domain: <domain>, Language: <language>` header (keyword match is
/// case-insensitive). Entry payloads are greedy to the last quote on
/// their line, so doubled quotes survive and are unescaped here. When
/// several files declare the same (domain, language, id), the file
/// later in iteration order wins outright; this is last-write-wins,
/// not a merge.
pub fn parse_catalogs(files: &FileRecord) -> TranslationTable {
    let mut translations = TranslationTable::new();

    for contents in files.values() {
        let Some(header) = contents
            .lines()
            .next()
            .and_then(|line| HEADER_PATTERN.captures(line))
        else {
            continue;
        };

        let domain = header[1].trim().to_string();
        let language = header[2].trim().to_string();
        let slot = translations
            .entry(domain)
            .or_default()
            .entry(language)
            .or_default();

        for captures in ENTRY_PATTERN.captures_iter(contents) {
            slot.insert(
                unescape_message(&captures[1]),
                unescape_message(&captures[2]),
            );
        }
    }

    translations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entries: &[(&str, &str)]) -> FileRecord {
        entries
            .iter()
            .map(|(path, contents)| (path.to_string(), contents.to_string()))
            .collect()
    }

    #[test]
    fn parses_entries_under_the_declared_domain_and_language() {
        let files = record(&[(
            "drop/en.po",
            "# Domain: my-plugin, Language: en\n\
             # plugin/main.php:12\n\
             msgid \"Hello\"\n\
             msgstr \"Hi\"",
        )]);

        let translations = parse_catalogs(&files);

        assert_eq!(translations["my-plugin"]["en"]["Hello"], "Hi");
    }

    #[test]
    fn header_keywords_match_case_insensitively() {
        let files = record(&[(
            "drop/fr.po",
            "# domain: my-plugin, LANGUAGE: fr\nmsgid \"Yes\"\nmsgstr \"Oui\"",
        )]);

        let translations = parse_catalogs(&files);

        assert_eq!(translations["my-plugin"]["fr"]["Yes"], "Oui");
    }

    #[test]
    fn files_without_a_header_contribute_nothing() {
        let files = record(&[(
            "drop/loose.po",
            "msgid \"Hello\"\nmsgstr \"Hi\"",
        )]);

        let translations = parse_catalogs(&files);

        assert!(translations.is_empty());
    }

    #[test]
    fn doubled_quotes_are_unescaped() {
        let files = record(&[(
            "drop/en.po",
            "# Domain: my-plugin, Language: en\n\
             msgid \"Say \"\"Hi\"\"\"\n\
             msgstr \"Dis \"\"salut\"\"\"",
        )]);

        let translations = parse_catalogs(&files);

        assert_eq!(
            translations["my-plugin"]["en"]["Say \"Hi\""],
            "Dis \"salut\""
        );
    }

    #[test]
    fn later_files_overwrite_earlier_entries() {
        let files = record(&[
            (
                "drop/a.po",
                "# Domain: my-plugin, Language: en\nmsgid \"Hello\"\nmsgstr \"First\"",
            ),
            (
                "drop/b.po",
                "# Domain: my-plugin, Language: en\nmsgid \"Hello\"\nmsgstr \"Second\"",
            ),
        ]);

        let translations = parse_catalogs(&files);

        assert_eq!(translations["my-plugin"]["en"]["Hello"], "Second");
    }

    #[test]
    fn empty_msgstr_payloads_stay_unresolved() {
        let files = record(&[(
            "drop/en.po",
            "# Domain: my-plugin, Language: en\nmsgid \"Hello\"\nmsgstr \"\"",
        )]);

        let translations = parse_catalogs(&files);

        assert!(!translations["my-plugin"]["en"].contains_key("Hello"));
    }

    #[test]
    fn multiple_files_can_fill_the_same_pair() {
        let files = record(&[
            (
                "drop/a.po",
                "# Domain: my-plugin, Language: en\nmsgid \"One\"\nmsgstr \"1\"",
            ),
            (
                "drop/b.po",
                "# Domain: my-plugin, Language: en\nmsgid \"Two\"\nmsgstr \"2\"",
            ),
        ]);

        let translations = parse_catalogs(&files);

        assert_eq!(translations["my-plugin"]["en"].len(), 2);
    }
}
