//! Name/value tables, lookups and iteration for enumerations.
//!
//! # Crate organisation
//!
//! Every managed enum carries an [`EnumDescriptor`]: the names of its
//! enumerators and their values, in declaration order. The descriptor is
//! built and checked while compiling and never changes afterwards. The
//! [`Enum`] trait exposes it together with the lookups derived from it:
//! value to name, name to value, value to declaration index, membership and
//! iteration.
//!
//! ## Registration entry points
//!
//! - [`managed_enum!`] declares a C-style enum, modeled as an integer
//!   newtype that may hold undeclared values.
//! - [`scoped_enum!`] declares a native, strongly-scoped Rust enum.
//! - `#[derive(Enum)]` attaches a table to a fieldless enum declared
//!   elsewhere.
//! - [`impl_enum!`] attaches a table to an integer newtype declared
//!   elsewhere.
//!
//! Each of them accepts a namespace path used for the enum's display name.
//! The entry point makes no difference to lookup results.
//!
//! Registration mistakes are compile errors: a duplicated enumerator name
//! fails constant evaluation of the descriptor, and registering a type twice
//! produces conflicting trait implementations. Lookups never fail hard; a
//! miss is `None`, or `""` for [`Enum::to_str`].
//!
//! ## Optional crate features
//!
//! - `registry` (enabled by default): the [`registry`] module, a
//!   process-wide view of every managed enum keyed by [`TypeId`]. This is
//!   the only way to ask whether an arbitrary `T: 'static` is managed.
//!
//! ## Logging
//!
//! Registry lookups log through the [`log`] facade at `trace` and `debug`
//! level, and [`registry::check`] logs collisions as warnings. No logger is
//! installed by this crate.
//!
//! [`TypeId`]: core::any::TypeId
//! [`log`]: https://docs.rs/log

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(
    clippy::all,
    clippy::must_use_candidate,
    clippy::use_self,
    missing_debug_implementations,
    unused
)]

// Lets code generated by `enumeta-macros` name `::enumeta` from inside this
// crate too.
#[allow(unused_extern_crates)]
extern crate self as enumeta;

#[macro_use]
mod macros;

mod descriptor;
mod enums;
mod error;
mod util;

#[cfg(feature = "registry")]
pub mod registry;

pub use self::descriptor::{EnumDescriptor, Origin, QualifiedName};
pub use self::enums::{Entries, Enum, Names, Underlying, Values};
pub use self::error::{ParseEnumError, TryFromReprError};

#[cfg(feature = "registry")]
pub use self::error::RegistryError;

/// Attach a name/value table to an independently declared fieldless enum.
///
/// The enumerators and their values are read from the declaration. The
/// representation comes from `#[repr(..)]` and defaults to `isize`. Add
/// `#[enumeta(namespace = path::to::ns)]` to register the enum under a
/// namespace.
///
/// ```
/// use enumeta::Enum;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enum)]
/// #[enumeta(namespace = legacy)]
/// #[repr(u8)]
/// enum LegacyEnum {
///     OldValue1 = 1,
///     OldValue2,
///     OldValue3,
/// }
///
/// assert_eq!(LegacyEnum::OldValue1.to_str(), "OldValue1");
/// assert_eq!(LegacyEnum::OldValue2.index(), Some(1));
/// assert_eq!(LegacyEnum::OldValue3.to_underlying(), 3);
/// assert_eq!(LegacyEnum::cast("OldValue2"), Some(LegacyEnum::OldValue2));
/// assert_eq!(LegacyEnum::qualified_name().to_string(), "legacy::LegacyEnum");
/// ```
///
/// Variants with fields are rejected:
///
/// ```compile_fail
/// #[derive(Clone, Copy, enumeta::Enum)]
/// enum Shape {
///     Circle(u32),
/// }
/// ```
///
/// So are 128-bit representations, whose values would not fit the registry:
///
/// ```compile_fail
/// #[derive(Clone, Copy, enumeta::Enum)]
/// #[repr(u128)]
/// enum Wide {
///     Low = 1,
///     High = (1 << 64) + 1,
/// }
/// ```
pub use enumeta_macros::Enum;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "registry")]
    pub use inventory;
}
