//! CLI command implementations.

use std::fs;
use ylang_common::Dialect;
use ylang_vm::Config;

/// Options shared by `run` and `check`.
#[derive(Debug, PartialEq, Eq)]
struct Options {
    input: String,
    config: Config,
}

/// Execute a ylang source file.
pub fn run(args: &[String]) -> Result<(), i32> {
    let Options { input, config } = parse_options(args, "run")?;
    let dialect = config.dialect;
    if let Some(banner) = dialect.banner() {
        println!("{banner}");
    }
    let text = read_source(&input, dialect)?;

    tracing::debug!(path = %input, %dialect, "running");

    match ylang_vm::run(&text, &config) {
        Ok(()) => {
            println!("{}", dialect.completion_marker());
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", dialect.runtime_error_prefix());
            Err(3)
        }
    }
}

/// Classify every line of a source file without executing it.
pub fn check(args: &[String]) -> Result<(), i32> {
    let Options { input, config } = parse_options(args, "check")?;
    let text = read_source(&input, config.dialect)?;

    match ylang_syntax::check(&text, config.dialect) {
        Ok(instrs) => {
            println!("OK: {input} ({} instructions)", instrs.len());
            Ok(())
        }
        Err((line, e)) => {
            eprintln!("error: line {line}: {e}");
            Err(1)
        }
    }
}

fn read_source(path: &str, dialect: Dialect) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("{} '{path}': {e}", dialect.read_error_prefix());
        1
    })
}

/// Parse `[--dialect D] [--max-depth N] <file>` in any order.
fn parse_options(args: &[String], command: &str) -> Result<Options, i32> {
    let mut config = Config::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dialect" => {
                let value = expect_value(iter.next(), "--dialect")?;
                config.dialect = value.parse::<Dialect>().map_err(|e| {
                    eprintln!("error: {e}");
                    1
                })?;
            }
            "--max-depth" => {
                let value = expect_value(iter.next(), "--max-depth")?;
                config.max_block_depth = value.parse().map_err(|_| {
                    eprintln!("error: --max-depth expects a non-negative integer, got '{value}'");
                    1
                })?;
            }
            flag if flag.starts_with("--") => {
                eprintln!("error: unknown option '{flag}'");
                eprintln!();
                crate::print_usage();
                return Err(1);
            }
            path => {
                if input.is_some() {
                    eprintln!("error: unexpected argument '{path}'");
                    return Err(1);
                }
                input = Some(path.to_string());
            }
        }
    }

    match input {
        Some(input) => Ok(Options { input, config }),
        None => {
            eprintln!("error: {command} requires an input file");
            eprintln!("Usage: ylang {command} [options] <file.yl>");
            Err(1)
        }
    }
}

fn expect_value<'a>(value: Option<&'a String>, flag: &str) -> Result<&'a str, i32> {
    value.map(String::as_str).ok_or_else(|| {
        eprintln!("error: {flag} requires a value");
        1
    })
}
