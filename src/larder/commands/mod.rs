use crate::config::LarderConfig;
use crate::index::DisplayIngredient;
use crate::model::Ingredient;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod expiring;
pub mod helpers;
pub mod list;
pub mod modify;
pub mod scan;
pub mod view;

#[derive(Debug, Clone)]
pub struct LarderPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Ingredient>,
    pub listed: Vec<DisplayIngredient>,
    pub config: Option<LarderConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.affected = ingredients;
        self
    }

    pub fn with_listed(mut self, ingredients: Vec<DisplayIngredient>) -> Self {
        self.listed = ingredients;
        self
    }

    pub fn with_config(mut self, config: LarderConfig) -> Self {
        self.config = Some(config);
        self
    }
}
