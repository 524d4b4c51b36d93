use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// An index fell outside `[-len, len)` (virtual) or `[0, len)` (physical).
    pub fn out_of_range(index: i128, len: u64) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    pub fn not_selected(position: u64) -> Error {
        Error(ErrorKind::NotSelected { position }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_format(element: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidFormat {
                element: element.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_not_selected(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotSelected { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: i128, len: u64 },

    #[error("position {position} is not selected")]
    NotSelected { position: u64 },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid data for '{element}': {message}")]
    InvalidFormat { element: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let e = Error::out_of_range(-11, 10);
        assert!(e.is_out_of_range());
        assert!(!e.is_not_selected());
        assert_eq!(e.to_string(), "index -11 out of range for length 10");

        let e = Error::not_selected(4);
        assert!(e.is_not_selected());
        assert!(matches!(e.into_kind(), ErrorKind::NotSelected { position: 4 }));

        let e = Error::invalid_arg("stride", "must be positive");
        assert_eq!(e.to_string(), "invalid argument stride: must be positive");
    }
}
