use crate::config::DaybookConfig;
use crate::model::Entry;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<Entry>,
    pub data_path: Option<PathBuf>,
    pub config: Option<DaybookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        self.data_path = path;
        self
    }

    pub fn with_config(mut self, config: DaybookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
