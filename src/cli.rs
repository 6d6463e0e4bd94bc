//! Command line interface.
//!
//! Flags override values from the config file, which override defaults.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::{load_config, ConfigError, ServerConfig};
use crate::docs::find_readme;

#[derive(Debug, Parser)]
#[command(name = "mdv")]
#[command(version, about = "Serve a directory of Markdown documents over HTTP", long_about = None)]
pub struct Cli {
    /// Port to listen on (the next free port is used if taken)
    #[arg(short, long, value_parser = parse_port)]
    pub port: Option<u16>,

    /// Host to bind
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Document root
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug logging, and error details on 5xx pages
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the nearest README.md, searching upward from the current directory
    Readme {
        #[arg(short, long, value_parser = parse_port)]
        port: Option<u16>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no README.md found in {} or any parent directory", .0.display())]
    NoReadme(PathBuf),
}

/// Everything `main` needs to start serving.
#[derive(Debug)]
pub struct Launch {
    pub config: ServerConfig,
    pub quiet: bool,
    /// Document to print the URL of once bound.
    pub open_path: Option<String>,
}

/// Parse a TCP port in `1..=65535`.
pub fn parse_port(value: &str) -> Result<u16, String> {
    match value.parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(format!(
            "Invalid port number: {value}. Must be between 1 and 65535."
        )),
    }
}

impl Cli {
    /// Merge flags over the config file.
    ///
    /// Relative `docs.root` and `docs.template_dir` are taken from `cwd`,
    /// not from the config file's directory.
    pub fn into_launch(self, cwd: &Path) -> Result<Launch, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = self.host {
            config.listener.host = host;
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(dir) = self.dir {
            config.docs.root = dir;
        }
        if config.docs.root.is_relative() {
            config.docs.root = cwd.join(&config.docs.root);
        }
        if let Some(dir) = config.docs.template_dir.take() {
            config.docs.template_dir = Some(if dir.is_relative() { cwd.join(dir) } else { dir });
        }
        if self.debug {
            config.observability.debug = true;
        }

        let mut open_path = None;
        if let Some(Command::Readme { port }) = self.command {
            let readme = find_readme(cwd).ok_or_else(|| CliError::NoReadme(cwd.to_path_buf()))?;
            if let Some(dir) = readme.parent() {
                config.docs.root = dir.to_path_buf();
            }
            config.listener.host = "localhost".to_string();
            if let Some(port) = port {
                config.listener.port = port;
            }
            open_path = readme
                .file_name()
                .map(|name| format!("/{}", name.to_string_lossy()));
        }

        Ok(Launch {
            config,
            quiet: self.quiet,
            open_path,
        })
    }
}
