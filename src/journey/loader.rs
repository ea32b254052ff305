use std::path::Path;

use log::info;

use crate::errors::TrailmateError;
use crate::journey::store::JourneyStore;
use crate::journey::types::Journey;

/// Load a journeys file: JSON lines, one journey per line.
pub fn load_journeys_jsonl(source_file: &Path) -> Result<JourneyStore, TrailmateError> {
    if !source_file.is_file() {
        return Err(TrailmateError::InvalidJourneyFile {
            path: format!("{:?}", source_file),
        });
    }

    let journeys = serde_jsonlines::json_lines(source_file)
        .map_err(|e| TrailmateError::JourneyLoaderError { source: e })?
        .collect::<Result<Vec<Journey>, std::io::Error>>()
        .map_err(|e| TrailmateError::JourneyLoaderError { source: e })?;

    if journeys.is_empty() {
        return Err(TrailmateError::EmptyJourneyFile {
            path: format!("{:?}", source_file),
        });
    }

    info!(
        "Loaded {:?}, found {} journeys with a total of {} checkpoints",
        source_file,
        journeys.len(),
        journeys.iter().map(|j| j.checkpoints.len()).sum::<usize>()
    );
    JourneyStore::new(journeys)
}

impl JourneyStore {
    /// Build a store from a journeys file, see [`load_journeys_jsonl`]
    pub fn from_jsonl(source_file: &Path) -> Result<Self, TrailmateError> {
        load_journeys_jsonl(source_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_invalid() {
        let result = load_journeys_jsonl(Path::new("/definitely/not/here.jsonl"));
        assert!(matches!(
            result,
            Err(TrailmateError::InvalidJourneyFile { .. })
        ));
    }

    #[test]
    fn test_malformed_line_is_loader_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"id\": \"1\", \"name\": ").unwrap();
        let result = load_journeys_jsonl(file.path());
        assert!(matches!(
            result,
            Err(TrailmateError::JourneyLoaderError { .. })
        ));
    }

    #[test]
    fn test_empty_file_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = load_journeys_jsonl(file.path());
        assert!(matches!(result, Err(TrailmateError::EmptyJourneyFile { .. })));
    }
}
