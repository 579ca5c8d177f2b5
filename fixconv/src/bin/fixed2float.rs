use std::process::ExitCode;

use clap::Parser;
use fixconv::{Fixed2FloatArgs, finish, init_logging};

fn main() -> ExitCode {
    init_logging();
    let args = Fixed2FloatArgs::parse();
    finish(args.run(&mut std::io::stdout().lock()))
}
