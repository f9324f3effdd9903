//! Subcommand implementations.

use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rgbmig_asm::assign_source;
use rgbmig_fetch::BranchCheckout;
use rgbmig_map::{correlate_flags, correlate_maps, diff_flags, diff_maps};
use rgbmig_model::ConstantListing;
use rgbmig_report::{FlagMapOptions, render_flag_map, render_map_pairs, render_unused_array};
use rgbmig_sym::{collect_literals, filter_symbols};

use crate::cli::{FilterSymArgs, MapEventsArgs, MapTuplesArgs, OutputFormatArg, UnusedEventsArgs};
use crate::summary::{
    print_filter_summary, print_flag_diff, print_flag_mapping, print_map_diff, print_map_mapping,
    print_unused_listing,
};

/// Clone one branch and assign indexes from its constant listing.
fn listing_for_branch(repo: &str, branch: &str, file: &str) -> Result<ConstantListing> {
    let span = info_span!("branch", branch);
    let _guard = span.enter();

    let checkout = BranchCheckout::clone_branch(repo, branch)
        .with_context(|| format!("clone branch {branch}"))?;
    let source = checkout
        .read_to_string(file)
        .with_context(|| format!("read {file} from branch {branch}"))?;
    let listing =
        assign_source(&source).with_context(|| format!("assign indexes for branch {branch}"))?;
    info!(
        branch,
        flags = listing.flags.len(),
        maps = listing.maps.len(),
        unused = listing.unused.len(),
        "assigned indexes"
    );
    Ok(listing)
}

pub fn run_map_events(args: &MapEventsArgs) -> Result<()> {
    let old = listing_for_branch(&args.repo, &args.old_branch, &args.file)?;
    let new = listing_for_branch(&args.repo, &args.new_branch, &args.file)?;

    if args.diff {
        let missing = diff_flags(&old.flags, &new.flags);
        info!(missing = missing.len(), "flag names without a counterpart");
        print_flag_diff(&args.old_branch, &args.new_branch, &missing);
        return Ok(());
    }

    let mapping = correlate_flags(&old.flags, &new.flags);
    info!(
        mapped = mapping.len(),
        source_total = old.flags.len(),
        "correlated event flags"
    );
    match args.format {
        OutputFormatArg::Cpp => {
            let options = FlagMapOptions {
                from_version: args.from_version.clone(),
                to_version: args.to_version.clone(),
            };
            print!("{}", render_flag_map(&mapping, &options));
        }
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&mapping)?),
        OutputFormatArg::Table => print_flag_mapping(&mapping),
    }
    Ok(())
}

pub fn run_unused_events(args: &UnusedEventsArgs) -> Result<()> {
    let listing = listing_for_branch(&args.repo, &args.branch, &args.file)?;

    info!(unused = listing.unused.len(), "collected unused indexes");
    match args.format {
        OutputFormatArg::Cpp => {
            print!("{}", render_unused_array(&listing.unused, args.per_line));
        }
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&listing.unused)?),
        OutputFormatArg::Table => print_unused_listing(&args.branch, &listing.unused),
    }
    Ok(())
}

pub fn run_map_tuples(args: &MapTuplesArgs) -> Result<()> {
    let old = listing_for_branch(&args.repo, &args.old_branch, &args.file)?;
    let new = listing_for_branch(&args.repo, &args.new_branch, &args.file)?;

    if args.diff {
        let missing = diff_maps(&old.maps, &new.maps);
        info!(missing = missing.len(), "map names without a counterpart");
        print_map_diff(&args.old_branch, &args.new_branch, &missing);
        return Ok(());
    }

    let mapping = correlate_maps(&old.maps, &new.maps);
    info!(
        mapped = mapping.len(),
        source_total = old.maps.len(),
        "correlated map constants"
    );
    match args.format {
        OutputFormatArg::Cpp => print!("{}", render_map_pairs(&mapping)),
        OutputFormatArg::Json => println!("{}", serde_json::to_string_pretty(&mapping)?),
        OutputFormatArg::Table => print_map_mapping(&mapping),
    }
    Ok(())
}

pub fn run_filter_sym(args: &FilterSymArgs) -> Result<()> {
    let literals = collect_literals(&args.source_dirs, &args.extension)
        .context("collect source literals")?;
    info!(literals = literals.len(), "collected string literals");

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let lines: Vec<&str> = input.lines().collect();
    let retained = filter_symbols(lines.iter().copied(), &literals);

    let mut output = retained.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    fs::write(&args.output, output)
        .with_context(|| format!("write {}", args.output.display()))?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        total = lines.len(),
        retained = retained.len(),
        "filtered symbol file"
    );
    print_filter_summary(lines.len(), retained.len(), literals.len());
    Ok(())
}
