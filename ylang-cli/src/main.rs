//! ylang CLI: run and check ylang programs.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage, input, or syntax-check error
//! - 3: Runtime error

mod commands;
mod logging;

use std::process;

fn main() {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "run" => commands::run(&args[2..]),
        "check" => commands::check(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        // `ylang <file>` is shorthand for `ylang run <file>`.
        _ => commands::run(&args[1..]),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

pub(crate) fn print_usage() {
    eprintln!("Usage: ylang [run] [options] <file.yl>");
    eprintln!("       ylang check [options] <file.yl>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <file.yl>      Execute a program (default)");
    eprintln!("  check <file.yl>    Classify every line without executing");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --dialect <english|yohan>   Keyword spelling (default: english)");
    eprintln!("  --max-depth <n>             Maximum block nesting (default: 256)");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=ylang_vm=trace) to trace execution on stderr.");
}
