//! opgen CLI orchestrator
//!
//! This binary provides the main entry point for opgen: it resolves the
//! generator configuration from flags (optionally layered over a TOML
//! config file) and runs the generation pipeline. No live registry source
//! is wired here; hosts without a linked runtime fall back to the bundled
//! snapshot.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::path::PathBuf;

use config::GeneratorConfig;

fn print_usage(program: &str) {
    println!("opgen — a wrapper compiler for tensor operation registries");
    println!();
    println!("USAGE:");
    println!("    {} [FLAGS]", program);
    println!();
    println!("FLAGS:");
    println!("    --config <path>          Load base configuration from a TOML file");
    println!("    --ops-snapshot <path>    Parse this ops snapshot instead of the live registry");
    println!("    --api-defs <dir>         Scan endpoint-metadata files under <dir>");
    println!("    --out <dir>              Output directory (default: generated)");
    println!("    --offline                Do not try the live registry; use the bundled snapshot");
    println!("    --emit-wrappers          Emit typed wrappers and the coverage report");
    println!("    --verbose                Trace pipeline stages to stderr");
    println!("    --help, -h               Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} --emit-wrappers --out generated", program);
    println!("    {} --ops-snapshot resources/ops.pbtxt --api-defs resources/api_def", program);
}

fn parse_args(args: &[String]) -> Result<GeneratorConfig, String> {
    let mut cfg = match args.iter().position(|a| a == "--config").map(|i| args.get(i + 1)) {
        Some(Some(path)) => GeneratorConfig::from_file(path).map_err(|e| e.to_string())?,
        Some(None) => return Err("--config requires a path argument".to_string()),
        None => GeneratorConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                // already applied as the base configuration
                i += 1;
            }
            "--ops-snapshot" => {
                let value =
                    args.get(i + 1).ok_or("--ops-snapshot requires a path argument")?;
                cfg.ops_snapshot = Some(PathBuf::from(value));
                i += 1;
            }
            "--api-defs" => {
                let value = args.get(i + 1).ok_or("--api-defs requires a directory argument")?;
                cfg.api_def_dir = Some(PathBuf::from(value));
                i += 1;
            }
            "--out" => {
                let value = args.get(i + 1).ok_or("--out requires a directory argument")?;
                cfg.out_dir = PathBuf::from(value);
                i += 1;
            }
            "--offline" => cfg.prefer_runtime = false,
            "--emit-wrappers" => cfg.emit_wrappers = true,
            "--verbose" => cfg.verbose = true,
            other => return Err(format!("unknown flag '{}'", other)),
        }
        i += 1;
    }
    Ok(cfg)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return;
    }

    let cfg = match parse_args(&args[1..]) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Use '{} --help' for usage information", args[0]);
            std::process::exit(1);
        }
    };

    if let Err(e) = pipeline::run(&cfg, None) {
        eprintln!("opgen failed: {}", e);
        std::process::exit(1);
    }
}
