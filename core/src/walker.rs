/// Recursive drop traversal with concurrent directory expansion
use std::io;
use std::path::{Path, PathBuf};

use futures::future::{self, BoxFuture};

/// One file discovered inside the drop. `path` is the slash-separated
/// location relative to the drop, rooted at the dropped item's name,
/// and is unique within a single drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub abs_path: PathBuf,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Collects every non-hidden descendant file of a dropped item.
///
/// Dot-prefixed names are excluded at every depth, directories
/// included; a hidden root resolves to an empty list. Directory
/// children are expanded concurrently and joined per directory, so the
/// aggregate resolves exactly once, empty directories included. Any
/// read error aborts the whole walk.
pub async fn walk(root: &Path) -> io::Result<Vec<Entry>> {
    let name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if is_hidden(&name) {
        return Ok(Vec::new());
    }

    let metadata = tokio::fs::metadata(root).await?;
    if metadata.is_file() {
        return Ok(vec![Entry {
            path: name,
            abs_path: root.to_path_buf(),
        }]);
    }
    if metadata.is_dir() {
        return walk_dir(root.to_path_buf(), name).await;
    }

    Ok(Vec::new())
}

fn walk_dir(dir: PathBuf, prefix: String) -> BoxFuture<'static, io::Result<Vec<Entry>>> {
    Box::pin(async move {
        let mut reader = tokio::fs::read_dir(&dir).await?;
        let mut entries = Vec::new();
        let mut subtrees = Vec::new();

        while let Some(child) = reader.next_entry().await? {
            let name = child.file_name().to_string_lossy().into_owned();
            if is_hidden(&name) {
                continue;
            }

            let file_type = child.file_type().await?;
            let path = format!("{prefix}/{name}");
            if file_type.is_file() {
                entries.push(Entry {
                    path,
                    abs_path: child.path(),
                });
            } else if file_type.is_dir() {
                subtrees.push(walk_dir(child.path(), path));
            }
            // Anything else (sockets, dangling symlinks) contributes
            // nothing but must not stall the join.
        }

        for subtree in future::try_join_all(subtrees).await? {
            entries.extend(subtree);
        }

        Ok(entries)
    })
}
