//! CLI argument parsing and execution

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use dist_github_meta::git::ConfigResolver;
use dist_github_meta::options::MetaOptions;
use dist_github_meta::resources::assemble;

/// Options file looked up in the repository root when `--config` is not given.
const DEFAULT_CONFIG_FILE: &str = "dist.ini";

/// Print homepage, bug tracker and repository metadata derived from a git remote
#[derive(Parser, Debug)]
#[command(name = "dist-github-meta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Repository root (defaults to current directory)
    #[arg(short = 'C', long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Path to options file (defaults to dist.ini in the repository root)
    #[arg(short, long, value_name = "PATH", env = "DIST_GITHUB_META_CONFIG")]
    config: Option<PathBuf>,

    /// Distribution name, substituted for %N
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Git remote to read the repository URL from
    #[arg(long, value_name = "NAME")]
    remote: Option<String>,

    /// Template for the homepage field
    #[arg(long, value_name = "TEMPLATE")]
    homepage: Option<String>,

    /// Template for the bug tracker web field
    #[arg(long, value_name = "TEMPLATE")]
    bugtracker_web: Option<String>,

    /// Template for the repository url field
    #[arg(long, value_name = "TEMPLATE")]
    repository_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Yaml,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&self.log_level))
            .format_timestamp(None)
            .init();

        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        let options = self.load_options(&root)?;
        debug!("Effective options: {:?}", options);

        let resolver = ConfigResolver::new(&root);
        let meta = assemble(&options, &resolver)?;

        let rendered = match self.format {
            OutputFormat::Json => meta.to_json()?,
            OutputFormat::Yaml => meta.to_yaml()?,
        };
        println!("{}", rendered.trim_end());
        Ok(())
    }

    /// Options from the options file (if any) with command-line overrides applied.
    fn load_options(&self, root: &Path) -> Result<MetaOptions> {
        let config_path = match &self.config {
            Some(path) => {
                if !path.exists() {
                    bail!("Options file not found: {}", path.display());
                }
                Some(path.clone())
            }
            None => Some(root.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };

        let mut options = match config_path {
            Some(path) => MetaOptions::from_file(&path, self.name.as_deref())?,
            None => match &self.name {
                Some(name) => MetaOptions::new(name.as_str()),
                None => bail!(
                    "No distribution name given\n  hint: pass --name or create {} with 'name = Your-Dist'",
                    DEFAULT_CONFIG_FILE
                ),
            },
        };

        if let Some(name) = &self.name {
            options.name = name.clone();
        }
        if let Some(remote) = &self.remote {
            options.remote = remote.clone();
        }
        if let Some(template) = &self.homepage {
            options.homepage = template.clone();
        }
        if let Some(template) = &self.bugtracker_web {
            options.bugtracker_web = template.clone();
        }
        if let Some(template) = &self.repository_url {
            options.repository_url = template.clone();
        }

        Ok(options)
    }
}
