#![allow(missing_docs)]
//! Errors

mod close;
mod frame;
mod stream;

pub use close::CloseError;
pub use frame::FrameError;
pub use stream::StreamError;

use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum Error {
    Frame(FrameError),

    Stream(StreamError),

    Close(CloseError),

    Io(std::io::Error),
}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self { Error::Frame(e) }
}

impl From<StreamError> for Error {
    fn from(e: StreamError) -> Self { Error::Stream(e) }
}

impl From<CloseError> for Error {
    fn from(e: CloseError) -> Self { Error::Close(e) }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error { Error::Io(e) }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            Frame(e) => write!(f, "Frame error: {}", e),
            Stream(e) => write!(f, "Stream error: {}", e),
            Close(e) => write!(f, "Close error: {}", e),
            Io(e) => write!(f, "Io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match self {
            Frame(e) => e.source(),
            Stream(e) => e.source(),
            Close(e) => e.source(),
            Io(e) => e.source(),
        }
    }
}
