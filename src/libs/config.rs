//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every section is optional; a missing file or section
//! falls back to defaults, so crewsheet runs without any setup as long as
//! `OPENAI_API_KEY` is available.
//!
//! ```json
//! {
//!   "openai": { "api_url": "https://api.openai.com/v1", "model": "gpt-4o", "transcribe_model": "whisper-1" },
//!   "server": { "host": "0.0.0.0", "port": 3000, "upload_dir": "uploads" },
//!   "report": { "mode": "detailed", "summary": "per-worker" }
//! }
//! ```
//!
//! Environment variables (a `.env` file is honored) take precedence over the
//! file: `OPENAI_MODEL`, `OPENAI_TRANSCRIBE_MODEL` and `PORT`. The API key is
//! only ever read from `OPENAI_API_KEY` and never written to disk.

use super::codec::SummaryStyle;
use super::data_storage::DataStorage;
use super::report::ReportMode;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OpenAiConfig {
    pub api_url: String,
    pub model: String,
    pub transcribe_model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            transcribe_model: "whisper-1".to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "openai".to_string(),
            name: "OpenAI".to_string(),
        }
    }

    /// Applies `OPENAI_MODEL` and `OPENAI_TRANSCRIBE_MODEL` as returned by
    /// `lookup`. Empty values are ignored.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(model) = lookup("OPENAI_MODEL").filter(|v| !v.trim().is_empty()) {
            self.model = model;
        }
        if let Some(model) = lookup("OPENAI_TRANSCRIBE_MODEL").filter(|v| !v.trim().is_empty()) {
            self.transcribe_model = model;
        }
        self
    }

    pub fn init(config: &Option<OpenAiConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleOpenAi);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOpenAiApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptOpenAiModel.to_string())
                .default(config.model)
                .interact_text()?,
            transcribe_model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTranscribeModel.to_string())
                .default(config.transcribe_model)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served at `/` for the browser front end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    /// Where uploaded audio is kept while it is transcribed.
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

impl ServerConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "server".to_string(),
            name: "Server".to_string(),
        }
    }

    /// Applies `PORT` as returned by `lookup` when it is a valid port number.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
            self.port = port;
        }
        self
    }

    pub fn init(config: &Option<ServerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleServer);

        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerHost.to_string())
            .default(config.host)
            .interact_text()?;
        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerPort.to_string())
            .default(config.port)
            .interact_text()?;
        let static_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStaticDir.to_string())
            .default(config.static_dir.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        let upload_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUploadDir.to_string())
            .default(config.upload_dir.display().to_string())
            .interact_text()?;

        Ok(Self {
            host,
            port,
            static_dir: Some(static_dir.trim()).filter(|s| !s.is_empty()).map(PathBuf::from),
            upload_dir: PathBuf::from(upload_dir.trim()),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub mode: ReportMode,
    #[serde(default)]
    pub summary: SummaryStyle,
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report".to_string(),
        }
    }

    pub fn init(config: &Option<ReportConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        let modes = [ReportMode::Detailed, ReportMode::Compact];
        let mode = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReportMode.to_string())
            .items(&["detailed", "compact"])
            .default(modes.iter().position(|m| *m == config.mode).unwrap_or(0))
            .interact()?;

        let styles = [SummaryStyle::PerWorker, SummaryStyle::PerWorkerDate];
        let summary = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSummaryStyle.to_string())
            .items(&["per-worker", "per-worker-date"])
            .default(styles.iter().position(|s| *s == config.summary).unwrap_or(0))
            .interact()?;

        Ok(Self {
            mode: modes[mode],
            summary: styles[summary],
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai: Option<OpenAiConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration file, or defaults when it does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&config_str)?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// OpenAI settings with environment overrides applied.
    pub fn openai_settings(&self) -> OpenAiConfig {
        self.openai.clone().unwrap_or_default().with_env_overrides(env_lookup)
    }

    /// Server settings with environment overrides applied.
    pub fn server_settings(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default().with_env_overrides(env_lookup)
    }

    pub fn report_settings(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![OpenAiConfig::module(), ServerConfig::module(), ReportConfig::module()];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "openai" => config.openai = Some(OpenAiConfig::init(&config.openai)?),
                "server" => config.server = Some(ServerConfig::init(&config.server)?),
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
