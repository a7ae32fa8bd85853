use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::pair::{Pair, split_pair};

/// Errors from scanning a word file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read error: {source}")]
    Read { source: std::io::Error },
}

/// Scan a word file into ordered pairs.
///
/// Everything up to and including the first blank line is a free-text header
/// and is discarded; a file with no blank line is all header. After the
/// header, blank lines and `#`/`//` comment lines are skipped, and lines that
/// do not parse as a pair are dropped silently.
pub fn load_pairs(path: &Path) -> Result<Vec<Pair>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut pairs = Vec::new();
    let mut in_header = true;

    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Read { source })?;
        let trimmed = line.trim();

        if in_header {
            if trimmed.is_empty() {
                in_header = false;
            }
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }

        match split_pair(trimmed) {
            Some(pair) => pairs.push(pair),
            None => tracing::debug!("skipping malformed line: {trimmed}"),
        }
    }

    tracing::info!("loaded {} word pairs from {}", pairs.len(), path.display());

    Ok(pairs)
}
