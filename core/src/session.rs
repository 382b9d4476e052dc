/// The end-to-end harvesting session
use std::io;
use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::catalog::{self, CatalogFile};
use crate::config::HarvestConfig;
use crate::extract;
use crate::loader::{self, DropItem};
use crate::memory;
use crate::orchestrator;
use crate::progress::ProgressReporter;
use crate::sink::{self, DownloadSink};
use crate::translate::{TranslationError, Translator};

#[derive(Debug, Error)]
pub enum HarvestError {
    /// A directory or file could not be traversed; the session aborts
    /// with no partial output.
    #[error("file system traversal failed: {0}")]
    Traversal(#[source] io::Error),

    /// A dropped file's contents could not be read.
    #[error("reading dropped file contents failed: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("delivering catalogs failed: {0}")]
    Deliver(#[source] io::Error),
}

/// How a session ended when no error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Catalogs were produced and offered to the sink, in order.
    Completed { files: Vec<CatalogFile> },
    /// Extraction yielded nothing exportable; no downloads were
    /// triggered. Informational, not an error.
    NothingToExport,
}

/// One drag-and-drop session: nothing persists between runs.
pub struct Session<T, S, P> {
    config: HarvestConfig,
    translator: T,
    sink: S,
    progress: P,
}

impl<T, S, P> Session<T, S, P>
where
    T: Translator,
    S: DownloadSink,
    P: ProgressReporter,
{
    pub fn new(config: HarvestConfig, translator: T, sink: S, progress: P) -> Self {
        Self {
            config,
            translator,
            sink,
            progress,
        }
    }

    /// Runs the whole pipeline over one drop: resolve entries,
    /// classify, seed the translation memory from existing catalogs,
    /// extract messages, resolve missing translations, serialize, and
    /// deliver.
    pub async fn run(&mut self, items: &[DropItem]) -> Result<SessionOutcome, HarvestError> {
        let entries = loader::load_entries(items)
            .await
            .map_err(HarvestError::Traversal)?;
        info!("drop resolved to {} file entries", entries.len());

        let (catalog_entries, source_entries) = loader::classify(entries, &self.config);

        let catalog_files = loader::load_files(&catalog_entries)
            .await
            .map_err(HarvestError::Read)?;
        let mut translations = memory::parse_catalogs(&catalog_files);

        let source_files = loader::load_files(&source_entries)
            .await
            .map_err(HarvestError::Read)?;
        let domains = extract::extract_messages(&source_files, &self.config.extraction_functions);
        info!(
            "extracted {} message ids across {} domains",
            domains.values().map(|ids| ids.len()).sum::<usize>(),
            domains.len()
        );

        orchestrator::resolve_missing(
            &domains,
            &mut translations,
            &self.config.languages,
            &self.translator,
            &mut self.progress,
        )
        .await?;

        let catalogs = catalog::build_catalogs(&domains, &self.config.languages, &translations);
        if catalogs.is_empty() {
            info!("no translation text has been found");
            return Ok(SessionOutcome::NothingToExport);
        }

        sink::deliver(
            &mut self.sink,
            &catalogs,
            Duration::from_millis(self.config.download_delay_ms),
        )
        .await
        .map_err(HarvestError::Deliver)?;

        Ok(SessionOutcome::Completed { files: catalogs })
    }
}
