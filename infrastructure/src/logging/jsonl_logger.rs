//! JSONL file writer for storybook events.
//!
//! Each [`ConversationEvent`] becomes one JSON line: the payload fields plus
//! `type`, `model`, `fallback`, `seq` and `timestamp`. The file is opened in
//! append mode so several runs can share one log.

use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use storybook_application::{ConversationEvent, ConversationLogger};

struct Sink {
    writer: BufWriter<File>,
    seq: u64,
}

/// Conversation logger that appends one JSON object per line.
pub struct JsonlConversationLogger {
    sink: Mutex<Sink>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log file, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            sink: Mutex::new(Sink {
                writer: BufWriter::new(file),
                seq: 0,
            }),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent, seq: u64) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::from(event.kind.as_str()));
        map.insert("model".to_string(), Value::from(event.model.to_string()));
        map.insert("fallback".to_string(), Value::from(event.kind.is_fallback()));
        map.insert("seq".to_string(), Value::from(seq));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(mut sink) = self.sink.lock() else {
            return;
        };

        sink.seq += 1;
        let record = Self::record(event, sink.seq);
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        let _ = writeln!(sink.writer, "{}", line);
        let _ = sink.writer.flush();
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = sink.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use storybook_application::EventKind;
    use storybook_domain::Model;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("storybook.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            EventKind::StoryGenerated,
            &Model::Gemini25Flash,
            json!({"title": "Barnaby", "pages": 5}),
        ));
        logger.log(ConversationEvent::new(
            EventKind::ChatReply,
            &Model::Gemini25Flash,
            json!({"message": "hello", "reply": "Hi!"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "story_generated");
        assert_eq!(records[0]["title"], "Barnaby");
        assert_eq!(records[0]["model"], "gemini-2.5-flash");
        assert_eq!(records[0]["fallback"], false);
        assert_eq!(records[0]["seq"], 1);
        assert_eq!(records[1]["type"], "chat_reply");
        assert_eq!(records[1]["seq"], 2);
        assert!(records[1]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            EventKind::ImageFallback,
            &Model::Imagen4,
            json!("timeout"),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "image_fallback");
        assert_eq!(records[0]["data"], "timeout");
        assert_eq!(records[0]["fallback"], true);
    }

    #[test]
    fn test_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new(
                EventKind::StoryFallback,
                &Model::Gemini25Flash,
                json!({}),
            ));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlConversationLogger::open(blocker.join("log.jsonl")).is_err());
    }
}
