//! All error types for the stashres crate.
//!
//! These are returned from all fallible operations (parsing, serialization,
//! conversion). Any one of them aborts a conversion run; there is no retry or
//! partial-success path.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source file is not a valid JSON object.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let debug = format!("{:?}", Error::Io(io_error));
        assert!(debug.contains("Io"));
    }
}
