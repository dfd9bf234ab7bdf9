use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::git::StatusQuery;

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {s}. Must be 'text' or 'json'")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub debug: Option<bool>,
    pub project_root: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub include_untracked: Option<bool>,
    pub include_ignored: Option<bool>,
}

impl Config {
    pub fn load() -> color_eyre::eyre::Result<Self> {
        let config_path = Self::get_config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn get_config_path() -> PathBuf {
        config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gitstat")
            .join("config.json")
    }

    /// Status query options with untracked files on and ignored files off by default
    pub fn get_status_query(&self) -> StatusQuery {
        let defaults = StatusQuery::default();
        StatusQuery {
            include_untracked: self.include_untracked.unwrap_or(defaults.include_untracked),
            include_ignored: self.include_ignored.unwrap_or(defaults.include_ignored),
        }
    }

    pub fn merge_with_args(&self, args: &Args) -> Self {
        Self {
            debug: if args.debug { Some(true) } else { self.debug },
            project_root: args
                .project
                .clone()
                .or_else(|| self.project_root.clone()),
            output_format: if args.json {
                Some(OutputFormat::Json)
            } else {
                args.format.or(self.output_format)
            },
            include_untracked: if args.no_untracked {
                Some(false)
            } else {
                self.include_untracked
            },
            include_ignored: if args.ignored {
                Some(true)
            } else {
                self.include_ignored
            },
        }
    }
}

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "gitstat", about = "Print git status entries relative to a project directory")]
pub struct Args {
    #[arg(short, long, help = "Print version information and exit")]
    pub version: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(
        short,
        long,
        help = "Project directory inside the repository (default: current directory)"
    )]
    pub project: Option<PathBuf>,

    #[arg(long, help = "Output format (text or json)")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Shorthand for --format json")]
    pub json: bool,

    #[arg(long, help = "Include ignored files")]
    pub ignored: bool,

    #[arg(long, help = "Exclude untracked files")]
    pub no_untracked: bool,
}
