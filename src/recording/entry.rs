use chrono::DateTime;
use serde::{Deserialize, Deserializer};

/// One run from a record-history file.
///
/// The `recording` field is the payload that gets copied. It is optional in
/// the file format and may also be an empty string when the historian could
/// not fetch it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingEntry {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub car_colors: String,
    pub frames: u32,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
    #[serde(default)]
    pub recording: Option<String>,
}

impl RecordingEntry {
    pub fn new(name: impl Into<String>, frames: u32, timestamp: i64) -> Self {
        Self {
            id: 0,
            user_id: String::new(),
            name: name.into(),
            car_colors: String::new(),
            frames,
            timestamp,
            recording: None,
        }
    }

    pub fn with_recording(mut self, recording: impl Into<String>) -> Self {
        self.recording = Some(recording.into());
        self
    }

    /// The text to copy, or `None` when the entry carries no recording.
    pub fn recording_text(&self) -> Option<&str> {
        self.recording.as_deref().filter(|r| !r.is_empty())
    }

    pub fn has_recording(&self) -> bool {
        self.recording_text().is_some()
    }

    pub fn time_display(&self) -> String {
        format_frames(self.frames)
    }

    pub fn date_display(&self) -> String {
        format_timestamp(self.timestamp)
    }
}

/// Formats a run time given in milliseconds ("frames" in the game's API).
pub fn format_frames(frames: u32) -> String {
    if frames > 60000 {
        format!(
            "{}:{:0>2}.{:0>3}",
            frames / 60000,
            frames % 60000 / 1000,
            frames % 1000
        )
    } else {
        format!("{:.3}", f64::from(frames) / 1000.0)
    }
}

pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

// Older historian versions wrote the timestamp as a string.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(ts) => Ok(ts),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
