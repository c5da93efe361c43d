//! zdoc CLI

use std::path::{Path, PathBuf};

use zdocc::commands::{build_docs, canon_type, dump_typedefs, parse_build_options, BuildOptions, TYPEDEFS_ENV};
use zdocc::BuildError;

fn main() {
    zdocc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "build" => {
            if args.len() < 3 {
                eprintln!("Usage: zdoc build <docset.json> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  -o <path>                Output file (default: stdout)");
                eprintln!("  --typedefs=<path>        Extra typedef table (default: ${TYPEDEFS_ENV})");
                eprintln!("  --emit-typedefs=<path>   Write the expanded typedef table");
                eprintln!("  --ignore=<path>          Names left out of the report");
                eprintln!("  --no-report              Skip the missing-description report");
                std::process::exit(1);
            }

            // Parse options, handling -o specially (needs lookahead)
            let mut options = BuildOptions::default();
            let mut i = 3;
            while i < args.len() {
                if args[i] == "-o" && i + 1 < args.len() {
                    options.output = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    let parsed = parse_build_options(&args[i..=i]);
                    options.merge(&parsed);
                    i += 1;
                }
            }
            let options = options.with_env_defaults();

            build_docs(Path::new(&args[2]), &options).map(|(summary, json)| {
                if let Some(json) = json {
                    println!("{json}");
                }
                eprintln!(
                    "{} classes, {} events, {} typedefs, {} missing descriptions, {} warnings",
                    summary.classes,
                    summary.events,
                    summary.typedefs,
                    summary.missing_descriptions,
                    summary.warnings
                );
            })
        }
        "typedefs" => {
            if args.len() < 3 {
                eprintln!("Usage: zdoc typedefs <docset.json> [--typedefs=<path>]");
                std::process::exit(1);
            }
            let table = table_option(&args[3..]);
            dump_typedefs(Path::new(&args[2]), table.as_deref()).map(|json| println!("{json}"))
        }
        "canon" => {
            if args.len() < 3 {
                eprintln!("Usage: zdoc canon <type> [--typedefs=<path>] [--namespace=<A::B>]");
                std::process::exit(1);
            }
            let table = table_option(&args[3..]);
            let namespace = args[3..].iter().find_map(|a| a.strip_prefix("--namespace="));
            canon_type(&args[2], table.as_deref(), namespace).map(|shown| println!("{shown}"))
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("zdoc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
}

/// `--typedefs=<path>` from `args`, else `$ZDOC_TYPEDEFS`.
fn table_option(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .find_map(|a| a.strip_prefix("--typedefs="))
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(TYPEDEFS_ENV).map(PathBuf::from))
}

fn report_error(err: &BuildError) {
    eprintln!("error[{}]: {err}", err.code());
}

fn print_usage() {
    println!("zdoc - documentation builder");
    println!();
    println!("Usage: zdoc <command> [options]");
    println!();
    println!("Commands:");
    println!("  build <docset.json>     Build the trimmed documentation library");
    println!("  typedefs <docset.json>  Print the expanded typedef table");
    println!("  canon <type>            Show the display form of a type");
    println!("  help                    Show this message");
    println!();
    println!("Environment:");
    println!("  {TYPEDEFS_ENV}           Default typedef table");
    println!("  RUST_LOG                Log filter, e.g. zdoc_typedefs=debug");
    println!("  ZDOC_TRACE_TREE         Show logs as a span tree");
}
