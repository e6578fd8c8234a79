use std::fmt::{Display, Formatter};
use std::str::Utf8Error;

#[derive(Debug, PartialEq, Eq)]
pub enum CloseError {
    BadReason(Utf8Error),
}

impl Display for CloseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use CloseError::*;
        match self {
            BadReason(e) => write!(f, "Close reason is not valid utf-8: {}", e),
        }
    }
}

impl std::error::Error for CloseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use CloseError::*;
        match self {
            BadReason(e) => Some(e),
        }
    }
}
