//! Notebook shell entry point.
//!
//! Builds the repository and service here and hands them to the shell; no
//! state lives in globals.

use log::error;
use notebook_cli::{Shell, ShellConfig};
use notebook_core::{init_logging, InMemoryNoteRepository, NoteService};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();
    let config = ShellConfig::from_env();
    for warning in &config.warnings {
        eprintln!("warning: {warning}");
    }

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: file logging disabled: {err}");
        }
    }

    let service = NoteService::new(InMemoryNoteRepository::new());
    let mut shell = Shell::new(service);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match shell.run(&mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
