//! Desktop harness for the native module
//!
//! ```bash
//! cargo run --features cli --bin my-rust-lib2-cli -- multiply 3 -4.5
//! cargo run --features cli --bin my-rust-lib2-cli -- info
//! cargo run --features cli --bin my-rust-lib2-cli -- info MyRustLib2
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use my_rust_lib2::logging::{init_logging, LogConfig};
use my_rust_lib2::module::{module_info_for, module_info_json};

#[derive(Parser)]
#[command(name = "my-rust-lib2-cli")]
#[command(about = "Call the MyRustLib2 native module from the desktop", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Multiply two numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Print the React module descriptors as JSON
    Info {
        /// Only print the descriptor of this module
        name: Option<String>,
    },
}

/// Text the command prints on stdout
fn render(command: &Commands) -> Result<String> {
    match command {
        Commands::Multiply { a, b } => Ok(my_rust_lib2::multiply(*a, *b).to_string()),
        Commands::Info { name: None } => Ok(module_info_json()?),
        Commands::Info { name: Some(name) } => {
            Ok(serde_json::to_string_pretty(&module_info_for(name)?)?)
        }
    }
}

/// Install logging; a failure only yields a warning for stderr
fn setup_logging(config: &LogConfig) -> Option<String> {
    init_logging(config)
        .err()
        .map(|e| format!("warning: logging disabled: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    if let Some(warning) = setup_logging(&config) {
        eprintln!("{warning}");
    }

    println!("{}", render(&cli.command)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use my_rust_lib2::{module_info, BridgeError, ModuleInfo};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["my-rust-lib2-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_multiply_negative_operands() {
        let cases = vec![
            (vec!["multiply", "3", "-4.5"], "-13.5"),
            (vec!["multiply", "-1e5", "2"], "-200000"),
            (vec!["multiply", "-2", "-0.25"], "0.5"),
        ];

        for (args, expected) in cases {
            let cli = parse(&args);
            assert!(!cli.verbose);
            assert_eq!(render(&cli.command).unwrap(), expected, "{args:?}");
        }
    }

    #[test]
    fn test_verbose_flag_after_subcommand() {
        let cli = parse(&["multiply", "1", "2", "-v"]);
        assert!(cli.verbose);
        assert_eq!(render(&cli.command).unwrap(), "2");

        let cli = parse(&["--verbose", "info"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_info_stdout_is_only_json() {
        let cli = parse(&["info", "--verbose"]);
        init_logging(&LogConfig::verbose()).unwrap();

        let output = render(&cli.command).unwrap();
        assert_eq!(output, module_info_json().unwrap());

        let parsed: std::collections::BTreeMap<String, ModuleInfo> =
            serde_json::from_str(&output).expect("stdout should be plain JSON");
        assert_eq!(parsed["MyRustLib2"], module_info());
    }

    #[test]
    fn test_info_single_module() {
        let cli = parse(&["info", "MyRustLib2"]);
        let output = render(&cli.command).unwrap();
        let parsed: ModuleInfo = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, module_info());

        let cli = parse(&["info", "Missing"]);
        let err = render(&cli.command).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BridgeError>(),
            Some(BridgeError::UnknownModule(name)) if name == "Missing"
        ));
    }

    #[test]
    fn test_bad_log_filter_does_not_stop_multiply() {
        let config = LogConfig {
            filter: "my_rust_lib2=shout".to_string(),
            ansi: false,
        };
        let warning = setup_logging(&config).expect("bad filter should warn");
        assert!(warning.contains("log filter"), "{warning}");

        let cli = parse(&["multiply", "2", "3"]);
        assert_eq!(render(&cli.command).unwrap(), "6");
    }

    #[test]
    fn test_non_numeric_operand_rejected() {
        let err = Cli::try_parse_from(["my-rust-lib2-cli", "multiply", "3", "four"])
            .err()
            .expect("non-numeric operand should fail");
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["my-rust-lib2-cli", "multiply", "3"])
            .err()
            .expect("missing operand should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
