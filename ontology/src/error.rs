//! Errors raised while loading an ontology document or reading its
//! settings.
//!
//! Queries against a loaded document never fail; only loading does.

use std::path::PathBuf;

use crate::loader::Format;

/// An ontology document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read ontology file {}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The syntax could not be determined from the file name.
    #[error("cannot detect ontology format of {} (expected .owl, .rdf, .xml, .ttl or .nt)", path.display())]
    UnknownFormat {
        /// Path whose extension was not recognised.
        path: PathBuf,
    },

    /// A format name given in configuration is not supported.
    #[error("unsupported ontology format '{0}' (expected rdfxml, turtle or ntriples)")]
    UnsupportedFormat(String),

    /// A resolution mode name is not supported.
    #[error("unknown resolution mode '{0}' (expected suffix or exact)")]
    UnsupportedResolution(String),

    /// The document is not valid in the given syntax.
    #[error("failed to parse {format} document: {message}")]
    Parse {
        /// Syntax the parser was run with.
        format: Format,
        /// Parser diagnostic.
        message: String,
    },

    /// The parsed graph could not be read back.
    #[error("failed to read parsed graph: {0}")]
    Graph(String),
}

/// Result alias for ontology loading.
pub type Result<T> = std::result::Result<T, Error>;
