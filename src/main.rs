//! themer-vscode - VS Code theme package generator

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use themer_vscode::config::Config;
use themer_vscode::palette::builtin;
use themer_vscode::{paths, render, render_instructions, writer};

/// Generate a VS Code theme package from a color palette
#[derive(Parser)]
#[command(name = "themer-vscode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in palette name or path to a palette JSON file
    #[arg(long, global = true)]
    palette: Option<String>,

    /// Directory to write the package into
    #[arg(long, short, global = true)]
    out: Option<PathBuf>,

    /// Version written into the package manifest
    #[arg(long, global = true)]
    package_version: Option<String>,

    /// Overwrite existing files
    #[arg(long, global = true)]
    force: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the theme package (the default)
    Render,
    /// Show the effective configuration
    Config {
        /// Print the config file path instead
        #[arg(long)]
        path: bool,
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
    /// List built-in palettes
    Palettes,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(palette) = &self.palette {
            config.palette.clone_from(palette);
        }
        if let Some(out) = &self.out {
            config.output_dir.clone_from(out);
        }
        if let Some(version) = &self.package_version {
            config.version.clone_from(version);
        }
        config.force |= self.force;
        config
    }
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Log to <tmp>/themer-vscode.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        if let Err(e) = std::fs::write(&log_path, "") {
            eprintln!("Warning: Failed to clear log file: {e}");
        }

        let directory = log_path
            .parent()
            .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
        let file_appender = tracing_appender::rolling::never(directory, paths::LOG_FILE_NAME);
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = cli.apply(Config::load()?);

    match cli.command {
        Some(Commands::Config { path, init }) => cmd_config(&config, path, init),
        Some(Commands::Palettes) => {
            for name in builtin::NAMES {
                println!("{name}");
            }
            Ok(())
        }
        Some(Commands::Render) | None => cmd_render(&config),
    }
}

fn cmd_render(config: &Config) -> Result<()> {
    let version = config.validated_version()?;
    let palette = config.load_palette()?;
    let artifacts =
        render(&palette, &version.to_string()).context("Failed to render theme package")?;
    let written = writer::write_artifacts(&config.output_dir, &artifacts, config.force)?;

    let paths: Vec<String> = written
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    for path in &paths {
        println!("Wrote {path}");
    }
    println!("{}", render_instructions(&paths));
    Ok(())
}

fn cmd_config(config: &Config, path: bool, init: bool) -> Result<()> {
    if init {
        config.save()?;
        println!("Wrote {}", Config::default_path().display());
    } else if path {
        println!("{}", Config::default_path().display());
    } else {
        println!("{}", serde_json::to_string_pretty(config)?);
    }
    Ok(())
}
