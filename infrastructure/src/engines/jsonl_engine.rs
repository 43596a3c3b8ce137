//! JSONL engine: one JSON object per emitted log call.
//!
//! Each record carries `timestamp`, `level`, `logger` and `message`, plus the
//! raw `pattern`, `arguments`, `markers`, `error`, `kv` and `thread` when
//! present. Records go through a buffered writer that is flushed after
//! every line.

use bridge_application::{Emission, EngineError, LoggingEngine};
use bridge_domain::{Level, LoggerName};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Logging engine writing JSONL records.
///
/// Thread-safe via `Mutex<BufWriter<_>>`. Flushes on `Drop`.
pub struct JsonlEngine {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
    min_level: Level,
    path: Option<PathBuf>,
}

impl JsonlEngine {
    /// Open (or create) `path` for appending.
    ///
    /// Creates parent directories if they don't exist.
    pub fn open(path: impl AsRef<Path>, min_level: Level) -> Result<Self, EngineError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(Box::new(file))),
            min_level,
            path: Some(path.to_path_buf()),
        })
    }

    /// Write records to an arbitrary sink
    pub fn from_writer(writer: impl Write + Send + 'static, min_level: Level) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(Box::new(writer))),
            min_level,
            path: None,
        }
    }

    /// Get the path to the log file, if file-backed
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    fn record(logger: &LoggerName, emission: &Emission) -> Value {
        let timestamp: DateTime<Utc> = match emission {
            Emission::Event(event) => event.timestamp,
            Emission::Normalized(_) => Utc::now(),
        };

        let mut map = Map::new();
        map.insert(
            "timestamp".to_string(),
            Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        map.insert(
            "level".to_string(),
            Value::String(emission.level().as_str().to_string()),
        );
        map.insert("logger".to_string(), Value::String(logger.to_string()));
        map.insert(
            "message".to_string(),
            Value::String(emission.rendered_message()),
        );
        map.insert(
            "pattern".to_string(),
            Value::String(emission.pattern().to_string()),
        );

        if !emission.arguments().is_empty() {
            map.insert(
                "arguments".to_string(),
                Value::Array(emission.arguments().to_vec()),
            );
        }

        let markers = emission.markers();
        if !markers.is_empty() {
            map.insert(
                "markers".to_string(),
                serde_json::to_value(&markers).unwrap_or(Value::Null),
            );
        }

        if let Some(throwable) = emission.throwable() {
            map.insert(
                "error".to_string(),
                json!({
                    "message": throwable.message(),
                    "chain": throwable.chain_messages(),
                }),
            );
        }

        if let Emission::Event(event) = emission {
            if !event.key_values.is_empty() {
                let kv: Map<String, Value> = event
                    .key_values
                    .iter()
                    .map(|kv| (kv.key.clone(), kv.value.clone()))
                    .collect();
                map.insert("kv".to_string(), Value::Object(kv));
            }
            if let Some(thread) = &event.thread_name {
                map.insert("thread".to_string(), Value::String(thread.clone()));
            }
        }

        Value::Object(map)
    }
}

impl LoggingEngine for JsonlEngine {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn is_level_enabled(&self, level: Level) -> Result<bool, EngineError> {
        Ok(level.passes(self.min_level))
    }

    fn emit(&self, logger: &LoggerName, emission: Emission) -> Result<(), EngineError> {
        if !emission.level().passes(self.min_level) {
            return Ok(());
        }

        let record = Self::record(logger, &emission);
        let line =
            serde_json::to_string(&record).map_err(|e| EngineError::Serialization(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| EngineError::Rejected("writer lock poisoned".to_string()))?;
        writeln!(writer, "{}", line)?;
        // Flush every line for crash safety; JSONL is append-only
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), EngineError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| EngineError::Rejected("writer lock poisoned".to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

impl Drop for JsonlEngine {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
