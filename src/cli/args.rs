use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use sitekit::{ResizeFilter, RewriteRuleKind};

#[derive(Parser)]
#[command(name = "sitekit", version, about = "Static site maintenance passes")]
pub struct CliArgs {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    /// Print the final report as JSON instead of a text summary
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Report what would change without writing anything
    #[arg(long, global = true, default_value_t = false)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resize every image in a directory to the reference image's dimensions
    Resize(ResizeArgs),
    /// Rename YYYYMMDD-<id>.<ext> certificate files to YYYYMMDD.<ext>
    Rename(RenameArgs),
    /// Rewrite CSS declarations to use shared variables
    Rewrite(RewriteArgs),
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Directory holding the images
    pub dir: PathBuf,

    /// Reference image whose size all others are brought to (looked up in DIR first)
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// Explicit target size instead of a reference image, e.g. 120x120
    #[arg(long)]
    pub size: Option<String>,

    /// Trim near-white/transparent borders before fitting
    #[arg(long, default_value_t = false)]
    pub trim: bool,

    /// Channel distance from white (and alpha from 0) still treated as border
    #[arg(long)]
    pub tolerance: Option<u8>,

    /// Resampling filter
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// JPEG quality (1-100)
    #[arg(long)]
    pub quality: Option<u8>,

    /// JSON file with resize parameters; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Directory holding the certificate images
    pub dir: PathBuf,

    /// Skip files whose YYYYMMDD prefix is not a real date
    #[arg(long, default_value_t = false)]
    pub validate_dates: bool,

    /// JSON file with rename parameters; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RewriteArgs {
    /// Files to rewrite; when omitted, --root is walked
    pub files: Vec<PathBuf>,

    /// Built-in rule to apply
    #[arg(long, value_enum, conflicts_with = "pattern")]
    pub rule: Option<RewriteRuleKind>,

    /// CSS variable name for the built-in rule (without the leading --)
    #[arg(long)]
    pub variable: Option<String>,

    /// Custom regular expression
    #[arg(long, requires = "replacement")]
    pub pattern: Option<String>,

    /// Replacement for --pattern; $1 / ${name} refer to capture groups
    #[arg(long, requires = "pattern")]
    pub replacement: Option<String>,

    /// Directory to walk for files when none are listed
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// File extension collected from --root
    #[arg(long)]
    pub extension: Option<String>,

    /// JSON file with rewrite parameters; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}
