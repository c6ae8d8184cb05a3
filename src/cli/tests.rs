//! Session driver test suite

use crate::cli::Session;
use sm83_repl::sm83::Register8;

fn run(session: &mut Session, script: &str) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let completed = session
        .run(script.as_bytes(), &mut out, &mut err)
        .unwrap();

    (
        completed,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn session_runs_every_line() {
    let mut session = Session::new(false, false);
    let (completed, out, err) = run(&mut session, "ld a, 5\nfoo\np a\n; done\n");

    assert!(completed);
    assert_eq!(out, "5\n");
    assert_eq!(err, "err: unknown mnemonic \"foo\"\n");
}

#[test]
fn session_halts_on_error() {
    let mut session = Session::new(true, false);
    let (completed, out, err) = run(&mut session, "ld a, 5\ninc 3\nld a, 6\n");

    assert!(!completed);
    assert_eq!(out, "");
    assert!(err.starts_with("err: "));
    assert_eq!(session.machine().registers().get8(Register8::A), 5);
}

#[test]
fn session_echoes_input() {
    let mut session = Session::new(false, true);
    let (_, out, _) = run(&mut session, "p 1\nnop\n");

    assert_eq!(out, "p 1\n1\nnop\n");
}
