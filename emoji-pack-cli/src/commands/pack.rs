use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use emoji_pack_core::{CategoryMap, MetaBuilder, PackPlan, RomajiTransliterator};
use emoji_pack_lib::{
    ArchiveOptions, ArchiveProgress, ArchiveSummary, PackError, create_emoji_zip, load_settings,
    resolve_output_path, scan_emoji_files,
};

use crate::error::CliError;

/// Options for the pack command, as given on the command line.
pub(crate) struct PackArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub license: Option<String>,
    pub level: Option<i64>,
    pub dry_run: bool,
}

pub(crate) fn run_pack(args: PackArgs, quiet: bool) -> Result<(), CliError> {
    let settings = load_settings()?;

    log::info!(
        "Scanning emoji files in {}...",
        args.input.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let categories = scan_emoji_files(&args.input)?;
    if categories.is_empty() {
        return Err(PackError::NoInputFound(args.input).into());
    }
    print_categories(&categories);

    log::info!("");
    log::info!("Building metadata...");
    let license = args.license.or_else(|| settings.pack.license.clone());
    let plan = MetaBuilder::new(&RomajiTransliterator)
        .with_license(license)
        .build(&categories);

    log::info!(
        "Total emojis: {}",
        plan.meta.len().if_supports_color(Stdout, |t| t.bold()),
    );
    if !plan.rejections.is_empty() {
        log::warn!(
            "Skipped {} of {} files with invalid names",
            plan.rejections.len(),
            categories.file_count(),
        );
    }

    let output = std::path::absolute(resolve_output_path(args.output, &settings))?;
    log::info!(
        "Output: {}",
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    if args.dry_run {
        log::info!("");
        log::info!(
            "{}",
            "Dry run: no archive will be written".if_supports_color(Stdout, |t| t.dimmed()),
        );
        print_plan(&plan);
        return Ok(());
    }

    let options = ArchiveOptions {
        compression_level: args.level.unwrap_or_else(|| settings.compression_level()),
    };

    log::info!("");
    log::info!("Creating zip file...");
    let summary = write_with_progress(&plan, &output, &options, quiet)?;

    log::info!(
        "Created {} ({} bytes)",
        summary.path.display().if_supports_color(Stdout, |t| t.cyan()),
        summary.bytes,
    );
    if !summary.missing.is_empty() {
        log::warn!(
            "{} files listed in meta.json are missing from the archive",
            summary.missing.len(),
        );
    }

    log::info!("");
    log::info!("{}", "Done!".if_supports_color(Stdout, |t| t.green()));
    Ok(())
}

fn print_categories(categories: &CategoryMap) {
    log::info!(
        "Found {} categories:",
        categories.category_count().if_supports_color(Stdout, |t| t.bold()),
    );
    for category in categories {
        log::info!("  - {}: {} files", category.name, category.files.len());
    }
}

fn print_plan(plan: &PackPlan) {
    for entry in &plan.meta.emojis {
        let source = plan
            .source_for(&entry.file_name)
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        log::info!(
            "  {} -> {} [{}]",
            source.if_supports_color(Stdout, |t| t.dimmed()),
            entry.file_name.if_supports_color(Stdout, |t| t.green()),
            entry.emoji.aliases.as_slice().join(", "),
        );
    }
    for rejection in &plan.rejections {
        log::info!(
            "  {} {} ({})",
            "\u{2717}".if_supports_color(Stdout, |t| t.red()),
            rejection.source_path.display(),
            rejection.reason,
        );
    }
}

fn write_with_progress(
    plan: &PackPlan,
    output: &Path,
    options: &ArchiveOptions,
    quiet: bool,
) -> Result<ArchiveSummary, CliError> {
    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(plan.meta.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=> "),
        );
        pb
    };

    let result = create_emoji_zip(plan, output, options, |event| match event {
        ArchiveProgress::Started { total } => pb.set_length(total as u64),
        ArchiveProgress::Added { file_name, .. } => {
            pb.set_message(file_name);
            pb.inc(1);
        }
        ArchiveProgress::Missing { .. } | ArchiveProgress::Duplicate { .. } => pb.inc(1),
        ArchiveProgress::Done { .. } => pb.finish_and_clear(),
    });

    if result.is_err() {
        pb.abandon();
    }
    Ok(result?)
}
