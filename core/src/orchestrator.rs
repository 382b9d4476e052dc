/// Deduplicated fan-out/fan-in translation orchestration
use futures::stream::{FuturesUnordered, StreamExt};

use crate::catalog::TranslationTable;
use crate::extract::DomainTable;
use crate::progress::ProgressReporter;
use crate::translate::{TranslationError, Translator};

/// Requests a translation for every (domain, language, id) triple not
/// already present in the table, then fills the table in place.
///
/// The announced progress total is `distinct ids x languages`,
/// computed before deduplication against existing translations; it is
/// a deliberate upfront estimate and may overcount.
///
/// The issuance pass is synchronous: each missing triple gets its
/// empty-string placeholder written before any request is polled, so a
/// triple can never be issued twice no matter how many occurrences
/// reference it. The fan-in resolves once every queued request has
/// completed; zero queued requests completes immediately. The first
/// transport or decode failure aborts the whole pass.
pub async fn resolve_missing<T, P>(
    domains: &DomainTable,
    translations: &mut TranslationTable,
    languages: &[String],
    translator: &T,
    progress: &mut P,
) -> Result<(), TranslationError>
where
    T: Translator,
    P: ProgressReporter,
{
    let total_ids: usize = domains.values().map(|ids| ids.len()).sum();
    progress.reset(total_ids * languages.len());

    let mut pending = Vec::new();
    for (domain, ids) in domains {
        for language in languages {
            let slot = translations
                .entry(domain.clone())
                .or_default()
                .entry(language.clone())
                .or_default();
            for id in ids.keys() {
                if !slot.contains_key(id) {
                    slot.insert(id.clone(), String::new());
                    pending.push((domain.clone(), language.clone(), id.clone()));
                }
            }
        }
    }

    let mut inflight: FuturesUnordered<_> = pending
        .into_iter()
        .map(|(domain, language, id)| async move {
            let translated = translator.translate(&id, &language).await?;
            Ok::<_, TranslationError>((domain, language, id, translated))
        })
        .collect();

    while let Some(resolved) = inflight.next().await {
        let (domain, language, id, translated) = resolved?;
        if let Some(slot) = translations
            .get_mut(&domain)
            .and_then(|languages| languages.get_mut(&language))
        {
            slot.insert(id, translated);
        }
        progress.increment();
    }

    Ok(())
}
