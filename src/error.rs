use std::error;
use std::fmt::{self, Display};

pub type Result<T> = std::result::Result<T, Error>;

/// An error arising from decoding a base36 string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Error {
    kind: Kind,
    message: &'static str,
}

impl Error {
    pub(crate) fn new(kind: Kind, message: &'static str) -> Self {
        Error { kind, message }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }
}

/// The kind of decoding failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// The input was empty (or consisted of a bare sign).
    EmptyString,

    /// The input represents a value outside the range of an i64.
    ///
    /// Returned both for inputs that are structurally too long (more than
    /// thirteen digits) and for thirteen-digit inputs whose value exceeds
    /// `i64::MAX`.
    NumberTooLarge,

    /// The input contained a byte outside the alphabet.
    ///
    /// Carries the offset of the offending byte and the byte itself.
    InvalidCharacter(usize, u8),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            Kind::InvalidCharacter(idx, u) => {
                write!(f, "{} (byte {:#04x} at offset {})", self.message, u, idx)
            }
            _ => f.write_str(self.message),
        }
    }
}

impl error::Error for Error {}
