pub mod entry;
pub mod history;

pub use entry::{format_frames, format_timestamp, RecordingEntry};
pub use history::{load_history, parse_history, RecordingHistory};
