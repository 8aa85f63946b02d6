use log::info;

use super::html;
use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch::RequestFetcher;
use crate::importer::ParsedRecipeDraft;

/// Process a URL into a recipe draft
///
/// This pipeline:
/// 1. Fetches HTML using RequestFetcher
/// 2. Reduces it to visible text, one block per line
/// 3. Runs the text importer on it
///
/// # Returns
/// * `Ok(ParsedRecipeDraft)` - The imported draft
/// * `Err(...)` - If the page cannot be fetched
pub async fn process(url: &str, config: &FetchConfig) -> Result<ParsedRecipeDraft> {
    let fetcher = RequestFetcher::new(config)?;
    let body = fetcher.fetch(url).await?;

    let draft = html::process(&body);
    info!("Imported \"{}\" from {}", draft.title, url);
    Ok(draft)
}
