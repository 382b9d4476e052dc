pub mod catalog;
pub mod config;
pub mod extract;
pub mod loader;
pub mod memory;
pub mod orchestrator;
pub mod progress;
pub mod session;
pub mod sink;
pub mod translate;
pub mod walker;

pub use catalog::{build_catalogs, CatalogFile, TranslationTable};
pub use config::{ConfigError, HarvestConfig};
pub use extract::{extract_messages, DomainTable, Occurrence};
pub use loader::{DropItem, FileRecord};
pub use memory::parse_catalogs;
pub use progress::{LogProgress, NullProgress, ProgressReporter};
pub use session::{HarvestError, Session, SessionOutcome};
pub use sink::{DirectorySink, DownloadSink};
pub use translate::{GoogleTranslator, TranslationError, Translator};
pub use walker::Entry;
