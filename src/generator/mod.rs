pub mod prefix;
pub use prefix::all_prefixes;

use crate::logger::Logger;
use crate::log_info;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "phonedict.txt";

/// Suffixes per (prefix, middle code) pair: 0000 through 9999.
const SUFFIX_COUNT: u64 = 10_000;

/// Flush the buffer and report progress every this many numbers.
const FLUSH_INTERVAL: u64 = 10_000;

/// Output file error type
#[derive(Debug)]
pub enum WriteError {
    Create {
        path: String,
        source: std::io::Error,
    },
    Write(std::io::Error),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Create { path, source } => {
                write!(f, "Failed to create {}: {}", path, source)
            }
            WriteError::Write(source) => write!(f, "Failed to write to file: {}", source),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Create { source, .. } => Some(source),
            WriteError::Write(source) => Some(source),
        }
    }
}

/// Writes every prefix × middle code × suffix combination to `path`, one
/// 11-digit number per line, suffix innermost ascending 0000 to 9999.
/// Returns the number of lines written. The file handle and buffer are
/// dropped on every exit path, including write failures.
pub fn generate_phonedict(
    prefixes: &[&str],
    middle_codes: &[String],
    path: &Path,
    logger: &Logger,
) -> Result<u64, WriteError> {
    let file = File::create(path).map_err(|e| WriteError::Create {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let total = prefixes.len() as u64 * middle_codes.len() as u64 * SUFFIX_COUNT;
    log_info!(
        logger,
        "Starting generation: {} prefixes x {} middle codes x suffixes 0000-9999 = {} numbers",
        prefixes.len(),
        middle_codes.len(),
        total
    );

    let mut generated: u64 = 0;
    for prefix in prefixes {
        for middle in middle_codes {
            for suffix in 0..SUFFIX_COUNT {
                writeln!(writer, "{}{}{:04}", prefix, middle, suffix)
                    .map_err(WriteError::Write)?;
                generated += 1;
                if generated % FLUSH_INTERVAL == 0 {
                    writer.flush().map_err(WriteError::Write)?;
                    log_info!(logger, "Generated: {} / {}", generated, total);
                }
            }
        }
    }
    writer.flush().map_err(WriteError::Write)?;

    log_info!(logger, "Generation complete: {} numbers written", generated);
    Ok(generated)
}
