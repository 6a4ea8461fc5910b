//! Reading source documents from disk.

use crate::error::{CliError, Result};
use limpid_engine::SourceDocument;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read each input file as UTF-8 text, in the order given.
///
/// Fails if a file cannot be read or if no file contains any
/// non-whitespace text.
pub fn read_documents(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    let mut documents = Vec::with_capacity(paths.len());

    for path in paths {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Input(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), bytes = text.len(), "read input file");
        documents.push(SourceDocument::new(display_name(path), text));
    }

    if documents.iter().all(|doc| doc.text.trim().is_empty()) {
        return Err(CliError::Input(
            "no input file contained any text".to_string(),
        ));
    }

    Ok(documents)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
