//! Error types for the table reconstruction library.
//!
//! Row-local failures (a row whose identifier cell cannot be parsed) are not
//! errors: they are structural rejects, counted by the pipeline and otherwise
//! silent. The variants here cover the two fatal cases — invalid
//! configuration, which refuses to process anything, and malformed input,
//! which aborts the enclosing document.

/// Result type alias for table reconstruction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during table reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid engine configuration (empty column map, negative tolerance, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A fragment element is missing a required position attribute
    #[error("Fragment is missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    /// A fragment position attribute is present but not an integer
    #[error("Invalid value for attribute '{name}': '{value}'")]
    InvalidAttribute {
        /// Attribute name (`top` or `left`)
        name: &'static str,
        /// The offending attribute value
        value: String,
    },

    /// Structurally malformed input document
    #[error("Malformed document: {0}")]
    Malformed(String),

    /// XML parse error in the positioned-fragment input
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
