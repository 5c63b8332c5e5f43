use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;
use crate::table::VocabularyTable;

/// Load the frequency table and join it against the known-vocabulary list.
///
/// The frequency file must exist and carry a `word` column in its header;
/// ranks are assigned by row order starting at 1, any other columns are
/// ignored. The vocabulary file is optional: when it is missing the table
/// loads with every word unknown.
pub fn load(frequency_path: &Path, vocabulary_path: &Path) -> Result<VocabularyTable, LoadError> {
    let known = load_known_vocabulary(vocabulary_path)?;

    tracing::info!("Loading frequency table from {}", frequency_path.display());

    let mut reader =
        csv::Reader::from_path(frequency_path).map_err(|source| LoadError::OpenFrequency {
            path: frequency_path.to_path_buf(),
            source,
        })?;

    let word_idx = reader
        .headers()
        .map_err(|source| LoadError::ReadHeader { source })?
        .iter()
        .position(|name| name == "word")
        .ok_or(LoadError::MissingWordColumn)?;

    let mut words = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|source| LoadError::ReadRow {
            row: idx + 1,
            source,
        })?;

        let word = row.get(word_idx).unwrap_or("");
        if word.is_empty() {
            return Err(LoadError::EmptyWord { row: idx + 1 });
        }

        let is_known = known.contains(word);
        words.push((word.to_string(), is_known));
    }

    let known_count = words.iter().filter(|(_, is_known)| *is_known).count();
    tracing::info!("Loaded {} words ({} known)", words.len(), known_count);

    Ok(VocabularyTable::from_words(words))
}

/// Read the known-vocabulary list: one word per line, surrounding
/// whitespace trimmed, blank lines skipped. A missing file yields an
/// empty set.
fn load_known_vocabulary(path: &Path) -> Result<HashSet<String>, LoadError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "Vocabulary file {} not found, no words will be marked known",
                path.display()
            );
            return Ok(HashSet::new());
        }
        Err(source) => {
            return Err(LoadError::ReadVocabulary {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}
