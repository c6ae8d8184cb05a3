//! CLI argument handling

use crate::cli::Session;
use clap::Arg;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

pub fn main() -> io::Result<()> {
    let app = app_from_crate!()
        .arg(
            Arg::with_name("script")
                .value_name("script.asm")
                .help("File of instruction lines to run (default: standard input)")
                .index(1),
        )
        .arg(
            Arg::with_name("halt-on-error")
                .short("e")
                .long("halt-on-error")
                .help("Stop at the first rejected line with a nonzero exit status"),
        )
        .arg(
            Arg::with_name("echo")
                .long("echo")
                .help("Echo each input line before its output"),
        );

    let matches = app.get_matches();

    let mut session = Session::new(
        matches.is_present("halt-on-error"),
        matches.is_present("echo"),
    );

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let completed = match matches.value_of("script") {
        Some(path) => session.run(BufReader::new(File::open(path)?), &mut out, &mut err)?,
        None => {
            let stdin = io::stdin();
            let input = stdin.lock();

            session.run(input, &mut out, &mut err)?
        }
    };

    if !completed {
        process::exit(1);
    }

    Ok(())
}
