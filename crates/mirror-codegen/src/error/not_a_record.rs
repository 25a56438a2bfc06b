use super::Error;

/// Error when the annotated declaration is not record-shaped.
///
/// Mirrors can only be generated for structs with named fields and no
/// generic parameters. Enums, unions, tuple structs and unit structs are
/// rejected.
#[derive(Debug)]
pub(super) struct NotARecord {
    message: Box<str>,
}

impl std::error::Error for NotARecord {}

impl core::fmt::Display for NotARecord {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "not a record declaration: {}", self.message)
    }
}

impl Error {
    /// Creates a not-a-record error.
    pub fn not_a_record(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotARecord(NotARecord {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a not-a-record error.
    pub fn is_not_a_record(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::NotARecord(_)))
    }
}
