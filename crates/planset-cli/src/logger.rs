use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Console logger that also records every entry, so a run can report how
/// many placements or downloads were skipped after the fact.
#[derive(Clone)]
pub struct RunLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    level: LevelFilter,
}

impl RunLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            level,
        }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.level <= Level::Warn)
            .count()
    }
}

impl log::Log for RunLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: format!("{}", record.args()),
        };

        eprintln!(
            "{} {:<5} {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level,
            entry.target,
            entry.message
        );

        self.entries.lock().unwrap().push(entry);
    }

    fn flush(&self) {}
}
