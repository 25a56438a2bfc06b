//! Runtime support for persistent records and their generated mirrors.
//!
//! A persistent record is a plain struct whose persisted fields use the
//! containers in this crate ([`List`], [`MutableSet`], [`Map`]) and the
//! primitive types re-exported here. Deriving [`Mirror`] on it generates a
//! `Readonly<Name>` value mirror or an `Observable<Name>` observable mirror,
//! together with the two conversions between the forms.
//!
//! ```ignore
//! use mirror::{List, Mirror};
//!
//! #[derive(Debug, Default, Mirror)]
//! struct Person {
//!     #[persisted]
//!     name: String,
//!
//!     #[persisted]
//!     hobbies: List<String>,
//! }
//!
//! let person = Person::default();
//! let mirror = ReadonlyPerson::new(&person);
//! let back: Person = mirror.to_persisted();
//! ```

mod list;
pub use list::List;

mod map;
pub use map::Map;

mod observed;
pub use observed::{Observable, Observed};

mod set;
pub use set::MutableSet;

pub mod codegen_support;

pub use mirror_macros::Mirror;

/// Date and time values.
pub type Date = std::time::SystemTime;

/// Opaque binary blobs.
pub type Data = Vec<u8>;

pub use url::Url;
pub use uuid::Uuid;
