#[macro_use]
extern crate clap;

mod cli;

use std::io;

fn main() -> io::Result<()> {
    cli::main()
}
