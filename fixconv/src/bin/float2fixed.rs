use std::process::ExitCode;

use clap::Parser;
use fixconv::{Float2FixedArgs, finish, init_logging};

fn main() -> ExitCode {
    init_logging();
    let args = Float2FixedArgs::parse();
    finish(args.run(&mut std::io::stdout().lock()))
}
