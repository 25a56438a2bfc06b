use crate::Error;

use std::fmt;
use std::str::FromStr;

/// Which kind of mirror a record is compiled into.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// An immutable value mirror named `Readonly<Record>`
    #[default]
    Readonly,

    /// A mutable, observable mirror named `Observable<Record>`
    Observable,
}

/// Everything about a mirror that depends on its [`Mode`].
///
/// The plan compiler and the assembler only ever consult this struct, so both
/// modes share one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    /// Prepended to a record's name to name its mirror
    pub prefix: &'static str,

    /// Value or reference semantics for the generated struct
    pub kind: AggregateKind,

    /// Whether generated fields can be changed after construction
    pub mutability: Mutability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKind {
    /// Cloneable and compared by value
    Value,

    /// Shared and mutated in place, marked `Observable`
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// Fields hold plain values
    Immutable,

    /// Fields are `Observed` cells
    Mutable,
}

impl Mode {
    pub fn config(self) -> ModeConfig {
        match self {
            Mode::Readonly => ModeConfig {
                prefix: "Readonly",
                kind: AggregateKind::Value,
                mutability: Mutability::Immutable,
            },
            Mode::Observable => ModeConfig {
                prefix: "Observable",
                kind: AggregateKind::Reference,
                mutability: Mutability::Mutable,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Readonly => "readonly",
            Mode::Observable => "observable",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Parses one of the two literal spellings. Anything else is an error
    /// rather than a silent fallback to `readonly`.
    fn from_str(s: &str) -> Result<Mode, Error> {
        match s {
            "readonly" => Ok(Mode::Readonly),
            "observable" => Ok(Mode::Observable),
            _ => Err(Error::unrecognized_mode(s)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
