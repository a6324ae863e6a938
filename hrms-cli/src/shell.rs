//! Line-oriented command loop.
//!
//! Reads one command per line until `exit`/`quit` or end of input. Business
//! rule failures and malformed lines are reported and the loop carries on;
//! only I/O errors on stdin/stdout end the session early.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use hrms_core::Registry;

use crate::commands::{ShellCommand, ShellLine};
use crate::render;

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn run(registry: &mut Registry, input: impl BufRead, interactive: bool) -> Result<()> {
    if interactive {
        println!("HR registry. Type `help` for commands, `exit` to leave.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("hrms> ");
            io::stdout().flush().context("failed to flush prompt")?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read command")?;

        if execute(registry, &line) == Flow::Exit {
            println!("Exiting...");
            break;
        }
    }
    Ok(())
}

/// Parses and runs a single line, printing its status.
pub fn execute(registry: &mut Registry, line: &str) -> Flow {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(err) => {
            println!("{}", render::failure(&format!("could not read command: {err}")));
            return Flow::Continue;
        }
    };
    if words.is_empty() {
        return Flow::Continue;
    }

    let parsed = match ShellLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Help output and usage errors are clap's to render.
            let _ = err.print();
            return Flow::Continue;
        }
    };
    tracing::debug!(command = %words[0], "executing");

    let result = match parsed.command {
        ShellCommand::Exit => return Flow::Exit,
        ShellCommand::List(args) => {
            match args.run(registry) {
                Ok(listing) => println!("{listing}"),
                Err(err) => println!("{}", render::failure(&render::describe_failure(&err))),
            }
            return Flow::Continue;
        }
        ShellCommand::AddDepartment(args) => args.run(registry),
        ShellCommand::RemoveDepartment(args) => args.run(registry),
        ShellCommand::AddEmployee(args) => args.run(registry),
        ShellCommand::RemoveEmployee(args) => args.run(registry),
        ShellCommand::EditEmployee(args) => args.run(registry),
    };

    match result {
        Ok(message) => println!("{}", render::success(&message)),
        Err(err) => println!("{}", render::failure(&render::describe_failure(&err))),
    }
    Flow::Continue
}
