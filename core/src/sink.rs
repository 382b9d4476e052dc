/// Sequential delivery of generated catalogs to the download sink
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use tokio::time::sleep;

use crate::catalog::CatalogFile;

/// External sink that accepts one named text blob at a time.
#[allow(async_fn_in_trait)]
pub trait DownloadSink {
    async fn accept(&mut self, file: &CatalogFile) -> io::Result<()>;
}

/// Writes each offered catalog into a fixed output directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectorySink {
    async fn accept(&mut self, file: &CatalogFile) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.dir.join(&file.name), &file.contents).await
    }
}

/// Offers files to the sink one at a time, in input order, pausing the
/// fixed inter-file delay between consecutive offers so the sink can
/// finish its own asynchronous completion. Zero files completes
/// immediately.
pub async fn deliver<S: DownloadSink>(
    sink: &mut S,
    files: &[CatalogFile],
    delay: Duration,
) -> io::Result<()> {
    let mut remaining = files.iter().peekable();
    while let Some(file) = remaining.next() {
        sink.accept(file).await?;
        if remaining.peek().is_some() {
            sleep(delay).await;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct CollectingSink {
        accepted: Vec<String>,
    }

    impl DownloadSink for CollectingSink {
        async fn accept(&mut self, file: &CatalogFile) -> io::Result<()> {
            self.accepted.push(file.name.clone());
            Ok(())
        }
    }

    fn catalog(name: &str) -> CatalogFile {
        CatalogFile {
            name: name.to_string(),
            contents: format!("# Domain: demo, Language: {name}"),
        }
    }

    #[tokio::test]
    async fn offers_files_in_input_order() {
        let mut sink = CollectingSink::default();
        let files = vec![catalog("fr.po"), catalog("de.po"), catalog("es.po")];

        deliver(&mut sink, &files, Duration::from_millis(1))
            .await
            .unwrap();

        assert_eq!(sink.accepted, vec!["fr.po", "de.po", "es.po"]);
    }

    #[tokio::test]
    async fn zero_files_complete_immediately() {
        let mut sink = CollectingSink::default();

        deliver(&mut sink, &[], Duration::from_secs(60))
            .await
            .unwrap();

        assert!(sink.accepted.is_empty());
    }

    #[tokio::test]
    async fn directory_sink_writes_named_files() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("out"));

        sink.accept(&catalog("fr.po")).await.unwrap();

        let written = fs::read_to_string(dir.path().join("out/fr.po")).unwrap();
        assert_eq!(written, "# Domain: demo, Language: fr.po");
    }
}
