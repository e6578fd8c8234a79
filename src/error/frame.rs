use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq, Eq)]
pub enum FrameError {
    IllegalMaskKey,

    PayloadOverflow,
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use FrameError::*;
        match self {
            IllegalMaskKey => write!(f, "Mask key must be 4 bytes"),
            PayloadOverflow => write!(f, "Payload length exceeds 2^63 - 1"),
        }
    }
}

// use default impl
impl std::error::Error for FrameError {}
