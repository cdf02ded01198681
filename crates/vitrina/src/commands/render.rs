//! `vitrina render` - bind a page template and write the result.

use crate::loader;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};
use vitrina_content::ContentNamespace;
use vitrina_render::render_page;
use vitrina_validation::validate;

pub async fn execute(
    page: &Path,
    content: &Path,
    out: Option<&Path>,
    lang: Option<String>,
) -> Result<()> {
    let docs = loader::load_documents(content).await?;
    let mut ns = ContentNamespace::from_documents(docs);
    if let Some(lang) = lang {
        ns.site.infrastructure.lang = Some(lang);
    }

    // Advisory by design: findings are logged and rendering proceeds.
    for diagnostic in validate(&ns) {
        warn!("{}", diagnostic);
    }

    let template = tokio::fs::read_to_string(page)
        .await
        .with_context(|| format!("Failed to read page template {}", page.display()))?;

    let output = render_page(&template, &ns)?;
    for diagnostic in &output.diagnostics {
        warn!("{}", diagnostic);
    }

    match out {
        Some(path) => {
            tokio::fs::write(path, &output.html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                out = %path.display(),
                bytes = output.html.len(),
                "rendered page"
            );
        }
        None => println!("{}", output.html),
    }

    Ok(())
}
