use std::path::PathBuf;

use super::*;

#[test]
fn cli_check_default_path() {
    let cli = Cli::parse_from(["locator-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from(".")]);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["locator-guard", "check", "loc", "pages"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.paths, vec![PathBuf::from("loc"), PathBuf::from("pages")]);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_config() {
    let cli = Cli::parse_from(["locator-guard", "check", "--config", "custom.toml"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_prefix_and_ext() {
    let cli = Cli::parse_from(["locator-guard", "check", "--prefix", "loc_", "--ext", "txt"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.prefix, Some("loc_".to_string()));
            assert_eq!(args.ext, Some("txt".to_string()));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_exclude_patterns() {
    let cli = Cli::parse_from([
        "locator-guard",
        "check",
        "-x",
        "**/legacy/**",
        "-x",
        "**/tmp/**",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.exclude.len(), 2);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_json_format() {
    let cli = Cli::parse_from(["locator-guard", "check", "--format", "json"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["locator-guard", "check", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_warn_only_flag() {
    let cli = Cli::parse_from(["locator-guard", "check", "--warn-only"]);
    match cli.command {
        Commands::Check(args) => assert!(args.warn_only),
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["locator-guard", "-vv", "--quiet", "--no-config", "check"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(cli.no_config);
}

#[test]
fn cli_strategies_subcommand() {
    let cli = Cli::parse_from(["locator-guard", "strategies"]);
    assert!(matches!(cli.command, Commands::Strategies));
}

#[test]
fn cli_init_with_force() {
    let cli = Cli::parse_from(["locator-guard", "init", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.output, PathBuf::from(".locator-guard.toml"));
        }
        _ => panic!("Expected Init command"),
    }
}
