//! Document loading.
//!
//! The five content documents load as independent asynchronous reads joined
//! before anything is parsed or rendered. If any one read or JSON parse
//! fails, the whole pass is abandoned with that error - no partial render,
//! no retry. The caller's previously rendered page, if any, stays in place.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use vitrina_content::RawDocuments;

/// Load the content documents from a directory.
///
/// Expects `site.json`, `company.json`, `projects.json`, `services.json`,
/// and `news.json`.
pub async fn load_documents(dir: &Path) -> Result<RawDocuments> {
    let (site, company, projects, services, news) = tokio::try_join!(
        load_json(dir.join("site.json")),
        load_json(dir.join("company.json")),
        load_json(dir.join("projects.json")),
        load_json(dir.join("services.json")),
        load_json(dir.join("news.json")),
    )?;

    Ok(RawDocuments {
        site,
        company,
        projects,
        services,
        news,
    })
}

async fn load_json(path: PathBuf) -> Result<Value> {
    let text = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
