//! `vitrina check` - validate content documents and print findings.

use crate::loader;
use anyhow::Result;
use std::path::Path;
use vitrina_content::ContentNamespace;
use vitrina_validation::validate;

pub async fn execute(content: &Path, strict: bool) -> Result<()> {
    let docs = loader::load_documents(content).await?;
    let ns = ContentNamespace::from_documents(docs);

    let mut diagnostics = ns.parse_diagnostics().to_vec();
    diagnostics.extend(validate(&ns));

    for diagnostic in &diagnostics {
        println!("{}", diagnostic);
    }

    if diagnostics.is_empty() {
        println!("No content findings.");
    } else if strict {
        anyhow::bail!("{} content finding(s)", diagnostics.len());
    }

    Ok(())
}
