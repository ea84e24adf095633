use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{Dimensions, ResizeFilter, RewriteRuleKind};

pub const DEFAULT_TRIM_TOLERANCE: u8 = 10;
pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_BORDER_RADIUS_VAR: &str = "border-radius-md";
pub const DEFAULT_DARK_HOVER_VAR: &str = "dark-primary-hover-color";

/// Parameters of the icon normalization pass, suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    /// Reference image; a bare relative path is resolved inside the processed directory
    pub reference: Option<PathBuf>,
    /// Explicit target size, takes precedence over `reference`
    pub target: Option<Dimensions>,
    /// Trim near-white/transparent borders before fitting
    pub trim: bool,
    pub trim_tolerance: u8,
    pub filter: ResizeFilter,
    pub jpeg_quality: u8,
    pub dry_run: bool,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            reference: None,
            target: None,
            trim: false,
            trim_tolerance: DEFAULT_TRIM_TOLERANCE,
            filter: ResizeFilter::Lanczos3,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            dry_run: false,
        }
    }
}

/// Parameters of the certificate renaming pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameParams {
    /// Require the date prefix to be a real `YYYYMMDD` calendar date
    pub validate_dates: bool,
    pub dry_run: bool,
}

/// Which substitution a rewrite pass applies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RewriteRuleSpec {
    /// Built-in rule; `variable` overrides the CSS custom property name (without `--`)
    Builtin {
        rule: RewriteRuleKind,
        #[serde(default)]
        variable: Option<String>,
    },
    Custom {
        pattern: String,
        replacement: String,
    },
}

impl Default for RewriteRuleSpec {
    fn default() -> Self {
        RewriteRuleSpec::Builtin {
            rule: RewriteRuleKind::BorderRadius,
            variable: None,
        }
    }
}

/// Parameters of the CSS rewriting pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteParams {
    pub rule: RewriteRuleSpec,
    /// Explicit file list; when empty, `root` is walked instead
    pub files: Vec<PathBuf>,
    pub root: Option<PathBuf>,
    /// Extension collected when walking `root`
    pub extension: String,
    pub dry_run: bool,
}

impl Default for RewriteParams {
    fn default() -> Self {
        Self {
            rule: RewriteRuleSpec::default(),
            files: Vec::new(),
            root: None,
            extension: "css".to_string(),
            dry_run: false,
        }
    }
}

/// Load any of the parameter structs from a JSON file
pub fn load_params<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
