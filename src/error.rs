use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A colour channel, used to point at the offending column in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in column order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Red => write!(f, "red"),
            Channel::Green => write!(f, "green"),
            Channel::Blue => write!(f, "blue"),
        }
    }
}

/// Reason code for a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    MissingFields,
    NonIntegerChannel,
    OutOfRangeChannel,
}

/// A palette that cannot be turned into a colour list.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line_number}: expected 4 tab-separated fields, found {found}")]
    #[diagnostic(
        code(gplconv::format::missing_fields),
        help("Colour rows look like `red<TAB>green<TAB>blue<TAB>name`")
    )]
    MissingFields {
        line_number: usize,
        line: String,
        found: usize,
    },

    #[error("line {line_number}: {channel} channel `{value}` is not an integer")]
    #[diagnostic(code(gplconv::format::non_integer_channel))]
    NonIntegerChannel {
        line_number: usize,
        line: String,
        channel: Channel,
        value: String,
    },

    #[error("colour `{name}`: {channel} channel {value} is outside 0..=255")]
    #[diagnostic(
        code(gplconv::format::out_of_range_channel),
        help("Find the row naming this colour and set the channel to 0-255, or pass --out-of-range clamp or pass-through")
    )]
    OutOfRangeChannel {
        name: String,
        channel: Channel,
        value: i64,
    },
}

impl FormatError {
    /// The reason code.
    pub fn kind(&self) -> FormatErrorKind {
        match self {
            FormatError::MissingFields { .. } => FormatErrorKind::MissingFields,
            FormatError::NonIntegerChannel { .. } => FormatErrorKind::NonIntegerChannel,
            FormatError::OutOfRangeChannel { .. } => FormatErrorKind::OutOfRangeChannel,
        }
    }

    /// The raw source line, when the error came from the parser.
    pub fn line(&self) -> Option<&str> {
        match self {
            FormatError::MissingFields { line, .. }
            | FormatError::NonIntegerChannel { line, .. } => Some(line),
            FormatError::OutOfRangeChannel { .. } => None,
        }
    }
}

/// Main error type for gplconv operations
#[derive(Error, Diagnostic, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    #[diagnostic(code(gplconv::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(gplconv::io))]
    Io { path: PathBuf, message: String },

    #[error("{}: {source}", .path.display())]
    #[diagnostic(code(gplconv::format))]
    Format {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: FormatError,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(gplconv::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(gplconv::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(gplconv::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ConvertError {
    /// Attach a file path to a format error.
    pub fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        ConvertError::Format {
            path: path.into(),
            source,
        }
    }

    /// The underlying format error, if this is one.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            ConvertError::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
