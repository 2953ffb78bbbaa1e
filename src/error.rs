//! Error types.
//!
//! Lookups that merely miss return `None`; these types exist for the
//! standard conversion traits and for registry diagnostics.

use crate::descriptor::QualifiedName;
use core::fmt::{self, Display, Formatter};

/// Error returned by the `FromStr` implementations of generated enums.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseEnumError {
    type_name: QualifiedName,
}

impl ParseEnumError {
    /// Creates an error for a failed parse into the enum named `type_name`.
    #[must_use]
    pub const fn new(type_name: QualifiedName) -> Self {
        Self { type_name }
    }

    /// The enum that was parsed into.
    #[must_use]
    pub const fn type_name(&self) -> QualifiedName {
        self.type_name
    }
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "no enumerator of `{}` has this name", self.type_name)
    }
}

impl core::error::Error for ParseEnumError {}

/// Error returned by the `TryFrom<Repr>` implementations of scoped enums.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TryFromReprError {
    type_name: QualifiedName,
    value: i128,
}

impl TryFromReprError {
    /// Creates an error for `value`, which no enumerator of `type_name` has.
    #[must_use]
    pub const fn new(type_name: QualifiedName, value: i128) -> Self {
        Self { type_name, value }
    }

    /// The enum that was converted into.
    #[must_use]
    pub const fn type_name(&self) -> QualifiedName {
        self.type_name
    }

    /// The rejected underlying value.
    #[must_use]
    pub const fn value(&self) -> i128 {
        self.value
    }
}

impl Display for TryFromReprError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not the value of any enumerator of `{}`",
            self.value, self.type_name
        )
    }
}

impl core::error::Error for TryFromReprError {}

/// Inconsistencies found by [`registry::check`].
///
/// [`registry::check`]: crate::registry::check
#[cfg(feature = "registry")]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// Two different types were registered under the same display name.
    AmbiguousName(QualifiedName),
}

#[cfg(feature = "registry")]
impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousName(name) => {
                write!(f, "`{name}` names more than one managed enum")
            }
        }
    }
}

#[cfg(feature = "registry")]
impl core::error::Error for RegistryError {}
