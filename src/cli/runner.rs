use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sitekit::{
    Dimensions, RenameParams, RenameReport, ResizeParams, ResizeReport, RewriteParams,
    RewriteReport, RewriteRuleSpec, load_params, normalize_directory, rename_certificates,
    rewrite_with_params,
};

use super::args::{CliArgs, Command, RenameArgs, ResizeArgs, RewriteArgs};
use super::errors::AppError;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(
    config: Option<&Path>,
) -> Result<T, AppError> {
    match config {
        Some(path) => {
            debug!("Loading parameters from {:?}", path);
            Ok(load_params(path)?)
        }
        None => Ok(T::default()),
    }
}

pub(crate) fn resize_params(args: &ResizeArgs, dry_run: bool) -> Result<ResizeParams, AppError> {
    let mut params: ResizeParams = load_or_default(args.config.as_deref())?;

    if let Some(reference) = &args.reference {
        params.reference = Some(reference.clone());
    }
    if let Some(size) = &args.size {
        let target = size
            .parse::<Dimensions>()
            .map_err(|_| AppError::InvalidSize { size: size.clone() })?;
        params.target = Some(target);
    }
    params.trim |= args.trim;
    if let Some(tolerance) = args.tolerance {
        params.trim_tolerance = tolerance;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(quality) = args.quality {
        params.jpeg_quality = quality;
    }
    params.dry_run |= dry_run;

    if !(1..=100).contains(&params.jpeg_quality) {
        return Err(AppError::InvalidQuality {
            quality: params.jpeg_quality,
        });
    }
    if params.reference.is_none() && params.target.is_none() {
        return Err(AppError::MissingArgument {
            arg: "--reference or --size".to_string(),
        });
    }
    Ok(params)
}

pub(crate) fn rename_params(args: &RenameArgs, dry_run: bool) -> Result<RenameParams, AppError> {
    let mut params: RenameParams = load_or_default(args.config.as_deref())?;
    params.validate_dates |= args.validate_dates;
    params.dry_run |= dry_run;
    Ok(params)
}

pub(crate) fn rewrite_params(args: &RewriteArgs, dry_run: bool) -> Result<RewriteParams, AppError> {
    let mut params: RewriteParams = load_or_default(args.config.as_deref())?;

    if let Some(rule) = args.rule {
        params.rule = RewriteRuleSpec::Builtin {
            rule,
            variable: args.variable.clone(),
        };
    } else if let (Some(pattern), Some(replacement)) = (&args.pattern, &args.replacement) {
        params.rule = RewriteRuleSpec::Custom {
            pattern: pattern.clone(),
            replacement: replacement.clone(),
        };
    } else if let (Some(var), RewriteRuleSpec::Builtin { variable, .. }) =
        (&args.variable, &mut params.rule)
    {
        *variable = Some(var.clone());
    }

    if !args.files.is_empty() {
        params.files = args.files.clone();
    }
    if let Some(root) = &args.root {
        params.root = Some(root.clone());
    }
    if let Some(ext) = &args.extension {
        params.extension = ext.clone();
    }
    params.dry_run |= dry_run;

    if params.files.is_empty() && params.root.is_none() {
        return Err(AppError::MissingArgument {
            arg: "FILES or --root".to_string(),
        });
    }
    Ok(params)
}

fn print_json<T: Serialize>(report: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(report).map_err(sitekit::Error::from)?;
    println!("{}", text);
    Ok(())
}

fn print_resize_summary(report: &ResizeReport, dry_run: bool) {
    println!("{}", "=".repeat(80));
    println!("Image normalization complete{}", if dry_run { " (dry run)" } else { "" });
    println!("Total images: {}", report.total);
    println!("Resized: {}", report.resized);
    println!("Skipped: {}", report.skipped);
    println!("Errors: {}", report.errors);
    println!("Target size: {} px", report.target);
    if report.resized_files.is_empty() {
        println!("\nNo files needed resizing.");
    } else {
        println!("\nResized files:");
        for (i, name) in report.resized_files.iter().enumerate() {
            println!("{}. {}", i + 1, name);
        }
    }
}

fn print_rename_summary(report: &RenameReport, dry_run: bool) {
    println!("Rename complete{}", if dry_run { " (dry run)" } else { "" });
    println!("Renamed: {}", report.renamed);
    println!("Skipped: {}", report.skipped);
    println!("Conflicts: {}", report.conflicts);
    println!("Errors: {}", report.errors);
}

fn print_rewrite_summary(report: &RewriteReport, dry_run: bool) {
    println!(
        "Rewrite ({}) complete{}",
        report.rule,
        if dry_run { " (dry run)" } else { "" }
    );
    for (path, count) in &report.replacements {
        println!("{}: {} replacement(s)", path.display(), count);
    }
    println!("Scanned: {}", report.scanned);
    println!("Updated: {}", report.updated);
    println!("Unchanged: {}", report.unchanged);
    println!("Errors: {}", report.errors);
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    match &args.command {
        Command::Resize(cmd) => {
            let params = resize_params(cmd, args.dry_run)?;
            info!("Resizing images in {:?}", cmd.dir);
            let report = normalize_directory(&cmd.dir, &params)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_resize_summary(&report, params.dry_run);
            }
        }
        Command::Rename(cmd) => {
            let params = rename_params(cmd, args.dry_run)?;
            info!("Renaming certificates in {:?}", cmd.dir);
            let report = rename_certificates(&cmd.dir, &params)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_rename_summary(&report, params.dry_run);
            }
        }
        Command::Rewrite(cmd) => {
            let params = rewrite_params(cmd, args.dry_run)?;
            let report = rewrite_with_params(&params)?;
            if args.json {
                print_json(&report)?;
            } else {
                print_rewrite_summary(&report, params.dry_run);
            }
        }
    }

    Ok(())
}
