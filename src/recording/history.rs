use super::entry::RecordingEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const HISTORY_PREFIX: &str = "HISTORY_";

#[derive(Debug, Clone)]
pub struct RecordingHistory {
    pub track: String,
    pub path: PathBuf,
    pub entries: Vec<RecordingEntry>,
}

impl RecordingHistory {
    pub fn new(track: impl Into<String>, path: PathBuf, entries: Vec<RecordingEntry>) -> Self {
        Self {
            track: track.into(),
            path,
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, index: usize) -> Option<&RecordingEntry> {
        self.entries.get(index)
    }

    pub fn with_recording_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_recording()).count()
    }
}

pub fn load_history(path: &Path) -> Result<RecordingHistory> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read history file: {}", path.display()))?;

    let entries = parse_history(&content);
    let track = track_name_from_path(path);
    debug!(path = %path.display(), track = %track, count = entries.len(), "Loaded history");

    Ok(RecordingHistory::new(track, path.to_path_buf(), entries))
}

/// Parses JSON-lines history content. Lines that fail to parse are skipped.
pub fn parse_history(content: &str) -> Vec<RecordingEntry> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| match serde_json::from_str(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping invalid history line");
                None
            }
        })
        .collect()
}

/// `HISTORY_Summer 1.txt` -> `Summer 1`
pub fn track_name_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    stem.strip_prefix(HISTORY_PREFIX)
        .map(str::to_string)
        .unwrap_or(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{"id":1,"userId":"a","name":"first","carColors":"","frames":45000,"timestamp":"1717000000","recording":"rec-one"}
{"id":2,"userId":"b","name":"second","carColors":"","frames":61234,"timestamp":1717000100,"recording":""}

not json at all
{"id":3,"userId":"c","name":"third","carColors":"","frames":44000,"timestamp":1717000200}
"#;

    #[test]
    fn test_parse_history_skips_invalid_and_blank_lines() {
        let entries = parse_history(SAMPLE);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_history_recording_presence() {
        let entries = parse_history(SAMPLE);
        assert_eq!(entries[0].recording_text(), Some("rec-one"));
        assert_eq!(entries[1].recording_text(), None);
        assert_eq!(entries[2].recording_text(), None);
    }

    #[test]
    fn test_load_history_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("HISTORY_Summer 1.txt");
        fs::write(&path, SAMPLE).unwrap();

        let history = load_history(&path).unwrap();
        assert_eq!(history.track, "Summer 1");
        assert_eq!(history.len(), 3);
        assert_eq!(history.with_recording_count(), 1);
        assert_eq!(history.get(2).map(|e| e.frames), Some(44000));
    }

    #[test]
    fn test_load_history_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_history(&temp_dir.path().join("nope.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_track_name_without_prefix() {
        assert_eq!(track_name_from_path(Path::new("/tmp/custom.txt")), "custom");
        assert_eq!(track_name_from_path(Path::new("HISTORY_abc.txt")), "abc");
    }
}
