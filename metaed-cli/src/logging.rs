//! Logger setup.
//!
//! All user-facing output goes through the `log` macros. `info` lines are
//! printed as-is; other levels get a prefix. With `--logfile`, everything is
//! also written to that file with ANSI colour codes removed.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::error::CliError;

/// Writes to stdout and, optionally, an ANSI-stripped log file.
struct Tee {
    stdout: io::Stdout,
    file: Option<strip_ansi_escapes::Writer<File>>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        if let Some(ref mut file) = self.file {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = match logfile {
        Some(path) => Some(strip_ansi_escapes::Writer::new(File::create(path)?)),
        None => None,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env("METAED_LOG")
        .target(env_logger::Target::Pipe(Box::new(Tee {
            stdout: io::stdout(),
            file,
        })))
        .format(move |buf, record| {
            if verbose {
                let now = chrono::Local::now().format("%H:%M:%S%.3f");
                return writeln!(buf, "{} {:<5} {}", now, record.level(), record.args());
            }
            match record.level() {
                Level::Info => writeln!(buf, "{}", record.args()),
                Level::Warn => writeln!(buf, "warning: {}", record.args()),
                Level::Error => writeln!(buf, "error: {}", record.args()),
                other => writeln!(buf, "{}: {}", other.as_str().to_lowercase(), record.args()),
            }
        });
    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
