//! Loading assembly source for the generators.

use crate::core::{DocError, DocResult};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read `path`, or stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> DocResult<String> {
    match path {
        Some(path) => {
            log::debug!("reading source from {}", path.display());
            fs::read_to_string(path).map_err(|source| DocError::ReadSource {
                path: path.to_path_buf(),
                source,
            })
        }
        None => {
            log::debug!("reading source from stdin");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(DocError::ReadStdin)?;
            Ok(buffer)
        }
    }
}
