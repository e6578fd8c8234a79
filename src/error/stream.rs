use std::fmt::{Display, Formatter};
use std::io::ErrorKind;

#[derive(Debug, PartialEq, Eq)]
pub enum StreamError {
    /// A non-final frame was exhausted but the frame source has
    /// no further frame to offer.
    MissingContinuation,

    /// The transport reached EOF before the current frame's
    /// payload was fully delivered.
    UnexpectedEof,

    /// Seeking a live frame stream is not a thing.
    NotSeekable,
}

impl Display for StreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use StreamError::*;
        match self {
            MissingContinuation => write!(f, "No continuation frame for unfinished message"),
            UnexpectedEof => write!(f, "Transport EOF inside frame payload"),
            NotSeekable => write!(f, "Frame stream is read-only and forward-only"),
        }
    }
}

impl std::error::Error for StreamError {}

/// Let stream errors travel through `std::io` signatures.
impl From<StreamError> for std::io::Error {
    fn from(e: StreamError) -> Self {
        use StreamError::*;
        let kind = match &e {
            MissingContinuation => ErrorKind::InvalidData,
            UnexpectedEof => ErrorKind::UnexpectedEof,
            NotSeekable => ErrorKind::Unsupported,
        };
        std::io::Error::new(kind, e)
    }
}
