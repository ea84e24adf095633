//! High-level library API: one entrypoint per maintenance pass, each returning a
//! serializable report. Per-file failures are logged and counted; only problems
//! that make the whole pass meaningless (missing directory, missing reference)
//! are returned as errors.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::{RenameParams, ResizeParams, RewriteParams};
use crate::core::processing::pipeline::{NormalizeOptions, needs_normalization, normalize_image};
use crate::core::processing::save::save_normalized_image;
use crate::core::rename::CertificateName;
use crate::core::rewrite::RewriteRule;
use crate::error::{Error, Result};
use crate::io::read::{open_image, read_dimensions};
use crate::io::scan::{collect_files_with_extension, list_files, list_images};
use crate::io::writers::write_atomic;
use crate::types::{Dimensions, ImageKind};

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Summary of an image normalization pass
#[derive(Debug, Clone, Serialize)]
pub struct ResizeReport {
    pub target: Dimensions,
    pub reference: Option<PathBuf>,
    pub total: usize,
    pub resized: usize,
    pub skipped: usize,
    pub errors: usize,
    pub resized_files: Vec<String>,
}

/// What happened to one image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Resized { from: Dimensions },
    AlreadyMatches,
}

/// Resolve the reference image path: relative paths are looked up inside `dir`
/// first, then relative to the working directory.
pub fn resolve_reference(dir: &Path, reference: &Path) -> PathBuf {
    if reference.is_absolute() {
        return reference.to_path_buf();
    }
    let inside = dir.join(reference);
    if inside.exists() || !reference.exists() {
        inside
    } else {
        reference.to_path_buf()
    }
}

/// Dimensions of the reference image, read from its header.
pub fn reference_dimensions(path: &Path) -> Result<Dimensions> {
    if !path.is_file() {
        return Err(Error::ReferenceNotFound {
            path: path.to_path_buf(),
        });
    }
    read_dimensions(path)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Normalize one image file in place to `options.target`.
pub fn normalize_image_file(
    path: &Path,
    kind: ImageKind,
    options: &NormalizeOptions,
    jpeg_quality: u8,
    dry_run: bool,
) -> Result<ImageOutcome> {
    let img = open_image(path)?;
    let current = Dimensions::new(img.width(), img.height());

    if !needs_normalization(&img, options) {
        return Ok(ImageOutcome::AlreadyMatches);
    }

    if !dry_run {
        let normalized = normalize_image(img, kind, options)?;
        save_normalized_image(&normalized, path, kind, jpeg_quality)?;
    }
    Ok(ImageOutcome::Resized { from: current })
}

/// Bring every image in `dir` to the reference (or explicit target) size.
pub fn normalize_directory(dir: &Path, params: &ResizeParams) -> Result<ResizeReport> {
    let reference = params
        .reference
        .as_deref()
        .map(|r| resolve_reference(dir, r));

    let target = match (params.target, reference.as_deref()) {
        (Some(target), _) => target.validated()?,
        (None, Some(reference)) => reference_dimensions(reference)?.validated()?,
        (None, None) => {
            return Err(Error::MissingArgument {
                arg: "reference or target".to_string(),
            });
        }
    };
    if let Some(reference) = &reference {
        info!("Reference image {:?}: {}", reference, target);
    }

    let options = NormalizeOptions {
        target,
        trim: params.trim.then_some(params.trim_tolerance),
        filter: params.filter,
    };

    let mut report = ResizeReport {
        target,
        reference: reference.clone(),
        total: 0,
        resized: 0,
        skipped: 0,
        errors: 0,
        resized_files: Vec::new(),
    };

    info!("Starting image normalization in directory: {:?}", dir);

    for (path, kind) in list_images(dir)? {
        report.total += 1;
        let name = file_name_of(&path);

        if reference.as_deref().is_some_and(|r| same_file(r, &path)) {
            info!("Skipping: {} (reference image)", name);
            report.skipped += 1;
            continue;
        }

        match normalize_image_file(&path, kind, &options, params.jpeg_quality, params.dry_run) {
            Ok(ImageOutcome::Resized { from }) => {
                info!("Resized: {} - from {} to {}", name, from, target);
                report.resized += 1;
                report.resized_files.push(name);
            }
            Ok(ImageOutcome::AlreadyMatches) => {
                info!("Skipping: {} - already matches {}", name, target);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", name, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Summary of a certificate renaming pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameReport {
    pub renamed: usize,
    pub skipped: usize,
    pub conflicts: usize,
    pub errors: usize,
    pub renames: Vec<(String, String)>,
}

/// Rename `YYYYMMDD-<id>.<ext>` files in `dir` to `YYYYMMDD.<ext>`.
/// Existing files are never overwritten.
pub fn rename_certificates(dir: &Path, params: &RenameParams) -> Result<RenameReport> {
    let mut report = RenameReport::default();
    let mut planned: Vec<PathBuf> = Vec::new();

    for path in list_files(dir)? {
        let name = file_name_of(&path);
        let Some(cert) = CertificateName::parse(&name) else {
            info!("Skipping non-matching file: {}", name);
            report.skipped += 1;
            continue;
        };

        if params.validate_dates && cert.calendar_date().is_none() {
            warn!("Skipping {}: {} is not a valid date", name, cert.date);
            report.skipped += 1;
            continue;
        }

        let new_name = cert.canonical();
        let new_path = dir.join(&new_name);

        if new_path.exists() || planned.contains(&new_path) {
            warn!("Not renaming {} -> {}: target already exists", name, new_name);
            report.conflicts += 1;
            continue;
        }

        if params.dry_run {
            info!("Would rename: {} -> {}", name, new_name);
            planned.push(new_path);
        } else if let Err(e) = fs::rename(&path, &new_path) {
            warn!("Rename failed: {} -> {}: {}", name, new_name, e);
            report.errors += 1;
            continue;
        } else {
            info!("Renamed: {} -> {}", name, new_name);
        }

        report.renamed += 1;
        report.renames.push((name, new_name));
    }

    Ok(report)
}

/// Summary of a CSS rewriting pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteReport {
    pub rule: String,
    pub scanned: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub errors: usize,
    pub replacements: Vec<(PathBuf, usize)>,
}

/// Apply `rule` to one file. Returns the number of matches when the file changed.
pub fn rewrite_file(path: &Path, rule: &RewriteRule, dry_run: bool) -> Result<Option<usize>> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })?;

    let rewritten = rule.apply(&content);
    if !rewritten.changed() {
        return Ok(None);
    }
    if !dry_run {
        write_atomic(path, rewritten.content.as_bytes())?;
    }
    Ok(Some(rewritten.matches))
}

/// Apply `rule` to each of `files`, rewriting only those whose content changes.
pub fn rewrite_files(files: &[PathBuf], rule: &RewriteRule, dry_run: bool) -> RewriteReport {
    let mut report = RewriteReport {
        rule: rule.name.clone(),
        ..Default::default()
    };

    info!("Found {} file(s) for rule {}", files.len(), rule.name);

    for path in files {
        report.scanned += 1;
        match rewrite_file(path, rule, dry_run) {
            Ok(Some(count)) => {
                info!("Updated: {:?} ({} replacement(s))", path, count);
                report.updated += 1;
                report.replacements.push((path.clone(), count));
            }
            Ok(None) => {
                info!("No change: {:?}", path);
                report.unchanged += 1;
            }
            Err(Error::Encoding { .. }) => {
                warn!("{:?}: not valid UTF-8, skipped", path);
                report.errors += 1;
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    report
}

/// Files selected by `params`: the explicit list, or a walk of `root`.
pub fn select_files(params: &RewriteParams) -> Result<Vec<PathBuf>> {
    if !params.files.is_empty() {
        return Ok(params.files.clone());
    }
    match &params.root {
        Some(root) => {
            if !root.is_dir() {
                return Err(Error::InvalidArgument {
                    arg: "root",
                    value: root.display().to_string(),
                });
            }
            Ok(collect_files_with_extension(root, &params.extension))
        }
        None => Err(Error::MissingArgument {
            arg: "files or root".to_string(),
        }),
    }
}

/// Compile the rule in `params` and run it over the selected files.
pub fn rewrite_with_params(params: &RewriteParams) -> Result<RewriteReport> {
    let rule = RewriteRule::from_spec(&params.rule)?;
    let files = select_files(params)?;
    Ok(rewrite_files(&files, &rule, params.dry_run))
}
