//! Print a hello world line from every rank, every 30 seconds, forever.
//!
//! Run with something like: mpirun -n 4 target/release/helloworld_forever
use std::process;
use clap::Parser;
use helloworld::Args;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = helloworld::main(&args) {
        log::error!("{}", err);
        process::exit(1);
    }
}
