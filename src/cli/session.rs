//! Feeding lines of text to a machine

use sm83_repl::Machine;
use std::io::{self, BufRead, Write};

/// A machine plus the options governing how input is fed to it.
pub struct Session {
    machine: Machine,
    halt_on_error: bool,
    echo: bool,
}

impl Session {
    pub fn new(halt_on_error: bool, echo: bool) -> Self {
        Session {
            machine: Machine::new(),
            halt_on_error,
            echo,
        }
    }

    #[cfg(test)]
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Execute every line of `input`.
    ///
    /// Instruction output goes to `out` and diagnostics to `err`. Returns
    /// `false` if a rejected line stopped the session early.
    pub fn run<R, O, E>(&mut self, input: R, out: &mut O, err: &mut E) -> io::Result<bool>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;

            if self.echo {
                writeln!(out, "{}", line)?;
            }

            match self.machine.execute_line(&line) {
                Ok(output) => out.write_all(output.as_bytes())?,
                Err(e) => {
                    writeln!(err, "err: {}", e)?;

                    if self.halt_on_error {
                        out.flush()?;
                        return Ok(false);
                    }
                }
            }
        }

        out.flush()?;

        Ok(true)
    }
}
