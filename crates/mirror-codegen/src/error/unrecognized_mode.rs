use super::Error;

/// Error when a mapping mode is spelled as neither `readonly` nor
/// `observable`.
#[derive(Debug)]
pub(super) struct UnrecognizedMode {
    text: Box<str>,
}

impl std::error::Error for UnrecognizedMode {}

impl core::fmt::Display for UnrecognizedMode {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unrecognized mapping mode `{}`; expected `readonly` or `observable`",
            self.text
        )
    }
}

impl Error {
    /// Creates an unrecognized mode error.
    pub fn unrecognized_mode(text: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnrecognizedMode(UnrecognizedMode {
            text: text.into().into(),
        }))
    }

    /// Returns `true` if this error is an unrecognized mode error.
    pub fn is_unrecognized_mode(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnrecognizedMode(_)))
    }
}
