mod driver;

use clap::Parser;

use crate::driver::{DEFAULT_DEST_PREFIX, DEFAULT_SOURCE_DIR, RunOptions, run_conversion};

/// Generates Android string resources from the stash-server locale catalogs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print per-file progress, skipped keys, and the reference output
    #[arg(long)]
    debug: bool,

    /// Directory containing the locale JSON catalogs
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    source_dir: String,

    /// Resource directory prefix for the generated documents
    #[arg(long, default_value = DEFAULT_DEST_PREFIX)]
    dest_prefix: String,
}

fn main() {
    let args = Args::parse();

    let options = RunOptions {
        source_dir: args.source_dir,
        dest_prefix: args.dest_prefix,
        debug: args.debug,
    };
    if let Err(e) = run_conversion(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
