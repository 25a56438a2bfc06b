#[macro_use]
mod macros;

/// Converts `record` into its mirror and straight back.
#[macro_export]
macro_rules! round_trip {
    ($mirror:ident, $record:expr) => {
        $mirror::new(&$record).to_persisted()
    };
}
