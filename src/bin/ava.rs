//! Asset Validator CLI (ava) - Main binary entry point

use ava::cli::args::{CheckArgs, Command, ListArgs, ScanArgs, parse_args};
use ava::cli::output;
use ava::models::{AssetType, Category, ValidationStats};
use ava::services::format::format_timestamp;
use ava::services::validate::report;
use ava::{AssetIndex, AssetValidator, IndexOptions, ValidateOptions};
use std::path::Path;
use std::process;
use std::time::Duration;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug ava scan /path
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Execute command
    let exit_code = match &cli_args.command {
        Command::Scan(scan_args) => handle_scan(scan_args),
        Command::List(list_args) => handle_list(list_args),
        Command::Check(check_args) => handle_check(check_args),
    };

    process::exit(exit_code);
}

fn handle_scan(args: &ScanArgs) -> i32 {
    let root = Path::new(&args.path);
    if !root.is_dir() {
        eprintln!("Error: Path is not a directory: {}", args.path);
        return 2;
    }

    let mut opts = IndexOptions::default();
    if let Some(secs) = args.ttl_secs {
        opts.cache_ttl = Duration::from_secs(secs);
    }
    if args.serial {
        opts.parallel = false;
    }

    let index = AssetIndex::new(root, opts);

    // A prior snapshot can satisfy the scan while it is still fresh
    if let Some(cache_path) = args.cache.as_deref()
        && !args.force
        && index.load_cache(cache_path)
        && !args.quiet
    {
        eprintln!("Loaded cache: {cache_path}");
    }

    if !args.quiet {
        eprintln!("Scanning: {}", args.path);
    }

    if !index.scan(args.force) {
        eprintln!("Error: Scan of {} did not complete", args.path);
        return 4;
    }

    if !args.quiet {
        eprintln!("Indexed {} assets", index.asset_count());
    }

    if let Some(cache_path) = args.cache.as_deref() {
        if index.save_cache(cache_path) {
            if !args.quiet {
                eprintln!("Cache saved: {cache_path}");
            }
        } else {
            eprintln!("Error: Failed to save cache: {cache_path}");
            return 4;
        }
    }

    if !args.quiet {
        output::print_count_summary(&index.category_counts(), &index.type_counts());
    }

    0
}

fn handle_list(args: &ListArgs) -> i32 {
    let snapshot = match ava::io::snapshot::read_snapshot(Path::new(&args.cache)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading cache: {e}");
            return 4;
        }
    };

    let mut records = snapshot.assets;

    if let Some(label) = args.category.as_deref() {
        let Some(category) = Category::from_label(label) else {
            eprintln!(
                "Invalid category: {label}. Use buildings|characters|props|environment|vehicles|misc"
            );
            return 2;
        };
        records.retain(|record| record.category == category);
    }

    if let Some(label) = args.type_name.as_deref() {
        let Some(asset_type) = AssetType::from_label(label) else {
            eprintln!("Invalid type: {label}. Use model|texture|material|audio|video|unknown");
            return 2;
        };
        records.retain(|record| record.asset_type == asset_type);
    }

    // Largest assets first
    records.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    if let Some(top) = args.top {
        records.truncate(top);
    }

    if args.json {
        let json = output::format_records_json(snapshot.scan_time, &records);
        println!("{json}");
        return 0;
    }

    println!(
        "{} ({} assets, scanned {})",
        args.cache,
        records.len(),
        format_timestamp(snapshot.scan_time)
    );
    println!();
    output::print_asset_table(&records);
    output::print_count_summary(
        &output::category_tally(&records),
        &output::type_tally(&records),
    );

    0
}

fn handle_check(args: &CheckArgs) -> i32 {
    let target = Path::new(&args.path);

    let mut opts = ValidateOptions::default();
    if let Some(mib) = args.max_file_size_mib {
        opts.max_file_size = mib * 1024 * 1024;
    }
    if args.serial {
        opts.parallel = false;
    }

    let validator = AssetValidator::new(opts);

    let results = if target.is_dir() {
        if !args.quiet {
            eprintln!("Checking: {}", args.path);
        }
        validator.validate_directory(target)
    } else if target.is_file() {
        vec![validator.validate_one(target)]
    } else {
        eprintln!("Error: Path does not exist: {}", args.path);
        return 2;
    };

    let stats = ValidationStats::from_results(&results);

    let rendered = if args.json {
        let json = output::format_results_json(&results);
        println!("{json}");
        None
    } else {
        let rendered = report::generate_report(&results);
        print!("{rendered}");
        Some(rendered)
    };

    if let Some(report_path) = args.report.as_deref() {
        let text = rendered.unwrap_or_else(|| report::generate_report(&results));
        if report::save_report(Path::new(report_path), &text) {
            if !args.quiet {
                eprintln!("Report saved: {report_path}");
            }
        } else {
            eprintln!("Error: Failed to save report: {report_path}");
            return 4;
        }
    }

    if stats.files_with_errors == 0 { 0 } else { 1 }
}

fn print_help() {
    println!("Asset Validator CLI (ava) - Catalog and check 3D production asset trees");
    println!();
    println!("USAGE:");
    println!("    ava scan <PATH> [OPTIONS]");
    println!("    ava list <CACHE> [OPTIONS]");
    println!("    ava check <PATH> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan      Walk an asset tree, classify every file, and persist a cache");
    println!("    list      Read a cache snapshot and display the catalog instantly");
    println!("    check     Validate assets without opening them in authoring tools");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                Show this help message");
    println!("    -v, --version             Show version information");
    println!();
    println!("SCAN OPTIONS:");
    println!("    --cache <FILE>            Load and save the JSON cache snapshot");
    println!("    --ttl <SECS>              Seconds a finished scan stays fresh (default: 300)");
    println!("    --force                   Rescan even when the cache is still fresh");
    println!("    --serial                  Disable parallel record building");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("LIST OPTIONS:");
    println!("    --category <NAME>         Only one category: buildings|characters|props|environment|vehicles|misc");
    println!("    --type <NAME>             Only one type: model|texture|material|audio|video|unknown");
    println!("    --top <K>                 Show only the K largest assets");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("CHECK OPTIONS:");
    println!("    --report <FILE>           Also write the rendered report to FILE");
    println!("    --max-file-size <MIB>     Size-warning threshold in MiB (default: 500)");
    println!("    --json                    Emit machine-readable results");
    println!("    --serial                  Disable parallel validation");
    println!("    --quiet                   Suppress non-error output");
    println!();
    println!("WORKFLOW:");
    println!("    1. Build the catalog:   ava scan ./assets --cache assets.json");
    println!("    2. Inspect quickly:     ava list assets.json --category props --top 20");
    println!("    3. Gate a delivery:     ava check ./assets --report validation.txt");
    println!();
    println!("EXAMPLES:");
    println!("    ava scan /srv/library --cache /tmp/library.json --ttl 600");
    println!("    ava list /tmp/library.json --type texture --json");
    println!("    ava check ./incoming/hero_character.fbx");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("ava {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
