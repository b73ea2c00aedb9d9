use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cap-convtr")]
#[command(about = "Convert platform JSON caption tracks (json3 events) into SubRip subtitles.")]
pub struct Args {
    /// Path to config TOML (defaults to ./config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a caption track to SRT
    Convert(ConvertCmd),
    /// Print the effective default config as TOML and exit
    PrintDefaultConfig,
}

#[derive(Debug, Parser)]
pub struct ConvertCmd {
    /// Input caption JSON path, or '-' for stdin
    pub input: String,

    /// Output file path (defaults to the input path with an .srt extension)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Shift cue start times by this many milliseconds (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub offset_ms: Option<i64>,

    /// Write to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Allow overwriting output file
    #[arg(long)]
    pub overwrite: bool,
}
