use crate::conf::{AnalyzerConfig, load_config, resolve_config_path};
use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to a config file or a directory containing weblog.hcl
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print resolved configuration
    Dump {
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
    }
}

pub fn check(path: PathBuf) -> Result<()> {
    let cfg = load_config(&path)?;

    println!(
        "{} Config loaded from {}",
        "✔".green(),
        resolve_config_path(&path).display()
    );
    print_input("access log", &cfg.access_log_path);
    print_input("error log", &cfg.error_log_path);
    println!("{} top {} entries per table", "✔".green(), cfg.top_n);
    println!(
        "{} device breakdown {}",
        "✔".green(),
        if cfg.device_breakdown {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}

/// A missing log is only a warning here; analysis tolerates it too.
fn print_input(label: &str, path: &Path) {
    if path.is_file() {
        println!("{} {label}: {}", "✔".green(), path.display());
    } else {
        println!(
            "{} {label}: {} (not found)",
            "!".yellow(),
            path.display()
        );
    }
}

pub fn dump(path: PathBuf, json: bool, yaml: bool) -> Result<()> {
    let cfg = load_config(&path)?;

    if yaml {
        dump_yaml(&cfg)?;
    } else if json {
        dump_json(&cfg)?;
    } else {
        dump_hcl(&cfg)?;
    }

    Ok(())
}

fn dump_json(cfg: &AnalyzerConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(cfg)?);
    Ok(())
}

fn dump_yaml(cfg: &AnalyzerConfig) -> Result<()> {
    print!("{}", serde_yaml::to_string(cfg)?);
    Ok(())
}

fn dump_hcl(cfg: &AnalyzerConfig) -> Result<()> {
    print!("{}", hcl::to_string(cfg)?);
    Ok(())
}
