mod error;
pub(crate) use error::ErrorSet;

mod field;
pub use field::FieldDescriptor;

mod mode;
pub use mode::{AggregateKind, Mode, ModeConfig, Mutability};

mod record;
pub use record::Record;

mod record_attr;
pub(crate) use record_attr::RecordAttr;
