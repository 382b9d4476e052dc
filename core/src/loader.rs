/// Drop-item resolution, extension classification, and content loading
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use futures::future;

use crate::config::HarvestConfig;
use crate::walker::{self, Entry};

/// Raw text contents of a set of loaded files, keyed by drop-relative
/// path. Built once per loading pass and never mutated afterward.
pub type FileRecord = BTreeMap<String, String>;

/// One item of the drop. Only filesystem items resolve to entries;
/// every other drag payload kind is ignored.
#[derive(Debug, Clone)]
pub enum DropItem {
    Path(PathBuf),
    Text(String),
}

/// Resolves every dropped filesystem item to its flat file list,
/// walking all roots concurrently and concatenating the results in
/// item order. Zero items resolves immediately with an empty list.
pub async fn load_entries(items: &[DropItem]) -> io::Result<Vec<Entry>> {
    let walks = items.iter().filter_map(|item| match item {
        DropItem::Path(path) => Some(walker::walk(path)),
        DropItem::Text(_) => None,
    });

    let mut entries = Vec::new();
    for subtree in future::try_join_all(walks).await? {
        entries.extend(subtree);
    }
    Ok(entries)
}

/// Splits entries into (existing catalogs, translatable sources) by
/// lower-cased file extension. Entries matching neither list are
/// dropped.
pub fn classify(entries: Vec<Entry>, config: &HarvestConfig) -> (Vec<Entry>, Vec<Entry>) {
    let mut catalogs = Vec::new();
    let mut sources = Vec::new();

    for entry in entries {
        let extension = Path::new(&entry.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if config.catalog_extensions.contains(&extension) {
            catalogs.push(entry);
        } else if config.source_extensions.contains(&extension) {
            sources.push(entry);
        }
    }

    (catalogs, sources)
}

/// Reads every entry's text concurrently and joins into one
/// path-to-contents map. Zero entries resolves immediately with an
/// empty map; any read error is fatal.
pub async fn load_files(entries: &[Entry]) -> io::Result<FileRecord> {
    let reads = entries.iter().map(|entry| async move {
        let contents = tokio::fs::read_to_string(&entry.abs_path).await?;
        Ok::<_, io::Error>((entry.path.clone(), contents))
    });

    Ok(future::try_join_all(reads).await?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(path: &str, abs_path: PathBuf) -> Entry {
        Entry {
            path: path.to_string(),
            abs_path,
        }
    }

    #[tokio::test]
    async fn zero_items_resolve_to_empty_list() {
        let entries = load_entries(&[]).await.unwrap();

        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn non_file_items_are_ignored() {
        let items = vec![DropItem::Text("plain text payload".into())];

        let entries = load_entries(&items).await.unwrap();

        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn multiple_roots_join_in_item_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");
        fs::create_dir(&first).unwrap();
        fs::create_dir(&second).unwrap();
        fs::write(first.join("a.php"), "<?php").unwrap();
        fs::write(second.join("b.php"), "<?php").unwrap();

        let items = vec![
            DropItem::Path(first),
            DropItem::Text("ignored".into()),
            DropItem::Path(second),
        ];
        let entries = load_entries(&items).await.unwrap();

        let paths: Vec<&str> = entries.iter().map(|entry| entry.path.as_str()).collect();
        assert_eq!(paths, vec!["first/a.php", "second/b.php"]);
    }

    #[tokio::test]
    async fn missing_root_fails_the_whole_load() {
        let dir = TempDir::new().unwrap();
        let items = vec![DropItem::Path(dir.path().join("gone"))];

        assert!(load_entries(&items).await.is_err());
    }

    #[test]
    fn classifies_by_extension_case_insensitively() {
        let config = HarvestConfig::default();
        let entries = vec![
            entry("plugin/main.php", PathBuf::from("/drop/plugin/main.php")),
            entry("plugin/old.PO", PathBuf::from("/drop/plugin/old.PO")),
            entry("plugin/readme.txt", PathBuf::from("/drop/plugin/readme.txt")),
            entry("plugin/noext", PathBuf::from("/drop/plugin/noext")),
        ];

        let (catalogs, sources) = classify(entries, &config);

        assert_eq!(catalogs.len(), 1);
        assert_eq!(catalogs[0].path, "plugin/old.PO");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path, "plugin/main.php");
    }

    #[tokio::test]
    async fn loads_contents_keyed_by_drop_path() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.php");
        let b = dir.path().join("b.php");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();

        let files = load_files(&[entry("plugin/a.php", a), entry("plugin/b.php", b)])
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files["plugin/a.php"], "alpha");
        assert_eq!(files["plugin/b.php"], "beta");
    }

    #[tokio::test]
    async fn zero_entries_load_to_empty_record() {
        let files = load_files(&[]).await.unwrap();

        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn unreadable_entry_fails_the_whole_load() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("ok.php");
        fs::write(&present, "<?php").unwrap();

        let result = load_files(&[
            entry("ok.php", present),
            entry("gone.php", dir.path().join("gone.php")),
        ])
        .await;

        assert!(result.is_err());
    }
}
