use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Returned by the strict text decoders. The lenient state decoder never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseError;

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "malformed checkers notation")
    }
}

impl Error for ParseError {}
