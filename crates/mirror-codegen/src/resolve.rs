use crate::ty::TypePath;

use std::collections::HashSet;

/// Answers whether a referenced record has a mirror generated for it.
///
/// The plan compiler asks once per reference found in a field type. Map keys
/// are never asked about.
pub trait Resolve {
    fn is_mapped(&self, path: &TypePath) -> bool;
}

/// Accepts every reference without checking it.
///
/// This is the only resolver available to `#[derive(Mirror)]`, which sees one
/// record at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeMapped;

impl Resolve for AssumeMapped {
    fn is_mapped(&self, _path: &TypePath) -> bool {
        true
    }
}

/// Accepts references whose type name is in a known set of records.
#[derive(Debug, Default, Clone)]
pub struct KnownRecords {
    names: HashSet<String>,
}

impl KnownRecords {
    pub fn new() -> KnownRecords {
        KnownRecords::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for KnownRecords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> KnownRecords {
        KnownRecords {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Resolve for KnownRecords {
    /// Paths are matched by their last segment, so `pets::Dog` resolves when
    /// `Dog` is known.
    fn is_mapped(&self, path: &TypePath) -> bool {
        self.contains(path.name())
    }
}
