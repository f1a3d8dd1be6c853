//! CLI entrypoint for `buildconfig-gen`.

use buildconfig_gen::{Args, GenError, logging, run};
use clap::Parser;

fn main() -> Result<(), GenError> {
    logging::init();
    let args = Args::parse();
    run(&args).map(drop)
}
