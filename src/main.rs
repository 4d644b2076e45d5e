use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use locator_guard::aggregator::{ScanAggregator, ScanReport};
use locator_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use locator_guard::config::{Config, ConfigLoader, FileConfigLoader};
use locator_guard::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use locator_guard::scanner::{DirectoryScanner, FileScanner, PrefixFilter};
use locator_guard::strategy::Strategy;
use locator_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Strategies => run_strategies(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> locator_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Create the candidate-file filter
    let mut exclude_patterns = config.exclude.patterns.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = PrefixFilter::new(
        config.scan.prefix.clone(),
        config.scan.extension.clone(),
        &exclude_patterns,
    )?;

    // 4. Discover candidate files
    let use_gitignore = args.gitignore || config.scan.respect_gitignore;
    let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);
    let paths_to_scan = get_scan_paths(args, &config);
    let mut all_files = Vec::new();
    for path in &paths_to_scan {
        let files = scanner.scan(path)?;
        all_files.extend(files);
    }

    if cli.verbose > 0 && !cli.quiet {
        for file in &all_files {
            println!("Scanning file: {}", file.display());
        }
    }

    // 5. Validate every declaration in every file
    let start = Instant::now();
    let aggregator = ScanAggregator::new();
    let report = aggregator.scan_files(&all_files);
    let elapsed = start.elapsed();

    // 6. Format and write the report
    let output = format_output(args.format, &report, cli, elapsed)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    if args.warn_only || report.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> locator_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader;
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(prefix) = &args.prefix {
        config.scan.prefix.clone_from(prefix);
    }

    if let Some(ext) = &args.ext {
        config.scan.extension.clone_from(ext);
    }
}

fn get_scan_paths(args: &CheckArgs, config: &Config) -> Vec<PathBuf> {
    // If CLI paths provided (other than default "."), use them
    let default_path = PathBuf::from(".");
    if args.paths.len() != 1 || args.paths[0] != default_path {
        return args.paths.clone();
    }

    // Use config include_paths if available
    if !config.scan.include_paths.is_empty() {
        return config.scan.include_paths.iter().map(PathBuf::from).collect();
    }

    // Default to current directory
    args.paths.clone()
}

fn format_output(
    format: OutputFormat,
    report: &ScanReport,
    cli: &Cli,
    elapsed: std::time::Duration,
) -> locator_guard::Result<String> {
    match format {
        OutputFormat::Text => {
            let color_mode = color_choice_to_mode(cli.color);
            TextFormatter::new(color_mode)
                .with_elapsed(elapsed)
                .format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> locator_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_strategies() -> i32 {
    println!("{:<38} {}", "STRATEGY", "VALUE RULE");
    for strategy in Strategy::ALL {
        println!("{:<38} {}", strategy.as_str(), strategy.rule());
    }
    EXIT_SUCCESS
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> locator_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(locator_guard::LocatorGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r#"# locator-guard configuration file

[scan]
# Candidate file name prefix (page-object locator files)
prefix = "el_"

# Candidate file extension, without the dot
extension = "py"

# Directories to scan (empty = scan from current directory)
# include_paths = ["tests/pages"]

# Honor .gitignore files while scanning (default: false)
respect_gitignore = false

# Exclude patterns (glob syntax)
[exclude]
patterns = [
    "**/.git/**",
    "**/__pycache__/**",
    "**/venv/**",
    "**/.venv/**",
]
"#
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
