//! Wordlist loading.

use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::{Result, ScanError};

/// Paths read from a wordlist, plus the error that stopped reading early.
#[derive(Debug, Default)]
pub struct Wordlist {
    pub paths: Vec<String>,
    pub error: Option<ScanError>,
}

/// Read every line of `path`, trimmed. A blank line yields the empty path,
/// which probes the base URL itself.
///
/// Reading stops at the first IO error; lines read before it are kept in the
/// returned [`Wordlist`] alongside the error.
pub fn read_wordlist<P: AsRef<Path>>(path: P) -> Wordlist {
    let path = path.as_ref();
    let wrap = |source| ScanError::WordlistRead {
        path: path.display().to_string(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return Wordlist {
                paths: Vec::new(),
                error: Some(wrap(e)),
            };
        }
    };

    let mut paths = Vec::new();
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => paths.push(line.trim().to_string()),
            Err(e) => {
                return Wordlist {
                    paths,
                    error: Some(wrap(e)),
                };
            }
        }
    }

    Wordlist { paths, error: None }
}

/// Strict variant: any read error fails the whole load.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let Wordlist { paths, error } = read_wordlist(path);
    match error {
        Some(err) => Err(err),
        None => Ok(paths),
    }
}

/// Lenient variant used by the scanner: a read failure is reported on the
/// console and the scan continues with whatever was read.
pub fn load_wordlist_lossy<P: AsRef<Path>>(path: P) -> Vec<String> {
    let Wordlist { paths, error } = read_wordlist(path);
    if let Some(err) = error {
        warn!("{err}; continuing with {} paths", paths.len());
        eprintln!("Error reading wordlist: {err}");
    }
    paths
}
