//! Logger setup: env_logger writing to stdout, optionally teed into a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Writes log lines to stdout and, when configured, a copy with ANSI
/// escapes stripped to a log file.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
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

/// Level implied by the global flags. `--quiet` wins over `--verbose`.
pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides the level
/// picked from the flags.
pub(crate) fn init_logger(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = level_for(quiet, verbose);
    let file = logfile.map(File::create).transpose()?;

    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .format(move |buf, record| {
            let prefix = match record.level() {
                Level::Error => format!(
                    "{} ",
                    "error:".if_supports_color(Stdout, |t| t.red().bold().to_string())
                ),
                Level::Warn => format!(
                    "{} ",
                    "warning:".if_supports_color(Stdout, |t| t.yellow().bold().to_string())
                ),
                _ => String::new(),
            };
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} {}{}",
                    buf.timestamp_millis(),
                    record.level(),
                    prefix,
                    record.args()
                )
            } else {
                writeln!(buf, "{}{}", prefix, record.args())
            }
        });

    builder
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
