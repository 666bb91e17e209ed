//! Logger setup: `log` records go to stdout, optionally teed into a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Install the global logger.
///
/// `quiet` keeps warnings and errors only; `verbose` enables debug records
/// with timestamps. `RUST_LOG` overrides both.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            } else {
                match record.level() {
                    Level::Error => writeln!(
                        buf,
                        "{} {}",
                        "error:".if_supports_color(Stdout, |t| t.red()),
                        record.args()
                    ),
                    Level::Warn => writeln!(
                        buf,
                        "{} {}",
                        "warning:".if_supports_color(Stdout, |t| t.yellow()),
                        record.args()
                    ),
                    _ => writeln!(buf, "{}", record.args()),
                }
            }
        })
        .target(env_logger::Target::Pipe(Box::new(LogWriter { file })))
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

/// Writes to stdout and, if set, to a log file with ANSI escapes removed.
struct LogWriter {
    file: Option<File>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
