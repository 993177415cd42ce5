#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treefs::cli::{root_for, Args};
use treefs::tree::{render_all, Arg};
use treefs::vfs::DirFs;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("treefs: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_filter());

    let config = args.tree_config();
    let roots: Vec<(DirFs, String)> = args.paths.iter().map(|p| root_for(p)).collect();
    let tree_args: Vec<Arg<'_>> = roots
        .iter()
        .map(|(fs, name)| Arg::new(fs, name.clone()).with_config(config.clone()))
        .collect();

    let report = render_all(&tree_args).context("failed to render tree")?;

    if args.no_report {
        println!("{}", report.graph());
    } else {
        println!("{report}");
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
