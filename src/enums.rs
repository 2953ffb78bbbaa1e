//! The [`Enum`] trait and its iterators.
//!
//! Rust enums and C-style enums disagree on a few points that matter here:
//!
//! - A C-style enum may hold a value none of its enumerators declare. Such
//!   enums are modeled as integer newtypes with associated constants (see
//!   [`managed_enum!`]), and every lookup has to cope with "foreign" values.
//! - Several enumerators may share one value. The table keeps all of them,
//!   and value-to-name lookups settle on the first one declared.
//!
//! Every lookup is a linear scan over the declaration-ordered table; enums
//! are small enough that no index is kept.
//!
//! [`managed_enum!`]: crate::managed_enum

use crate::descriptor::{EnumDescriptor, QualifiedName};
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::iter::FusedIterator;
use core::slice;

mod private {
    pub trait Sealed {}
}

/// Integer types usable as the representation of a managed enum.
///
/// This trait is sealed.
pub trait Underlying:
    private::Sealed + Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Widen to `i128`, which holds every supported representation.
    fn to_i128(self) -> i128;
}

macro_rules! impl_underlying {
    ($($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Underlying for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_underlying!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Name/value metadata attached to an enumeration type.
///
/// Implementations are generated by the registration entry points
/// ([`managed_enum!`], [`scoped_enum!`], [`impl_enum!`] and
/// `#[derive(Enum)]`); implementing the trait by hand skips the registry.
/// Only [`DESCRIPTOR`] and [`to_underlying`] are required, every lookup is
/// provided on top of them.
///
/// # Example
///
/// ```
/// use enumeta::{managed_enum, Enum};
///
/// managed_enum! {
///     pub enum MyEnum: i32 {
///         Value1 = 1,
///         Value2,
///         Value3,
///     }
/// }
///
/// assert_eq!(MyEnum::Value1.to_str(), "Value1");
/// assert_eq!(MyEnum::Value2.index(), Some(1));
/// assert_eq!(MyEnum::Value3.to_underlying(), 3);
/// assert_eq!(MyEnum::cast("Value2"), Some(MyEnum::Value2));
/// assert!(enumeta::registry::is_managed::<MyEnum>());
/// ```
///
/// [`managed_enum!`]: crate::managed_enum
/// [`scoped_enum!`]: crate::scoped_enum
/// [`impl_enum!`]: crate::impl_enum
/// [`DESCRIPTOR`]: Enum::DESCRIPTOR
/// [`to_underlying`]: Enum::to_underlying
pub trait Enum: Copy + Send + Sync + 'static {
    /// Integer representation of the enum.
    type Repr: Underlying;

    /// The enumerator table.
    const DESCRIPTOR: EnumDescriptor<Self>;

    /// Number of declared enumerators, aliases included.
    const COUNT: usize = Self::DESCRIPTOR.len();

    /// Convert to the underlying integer. Always succeeds, foreign values
    /// included.
    fn to_underlying(self) -> Self::Repr;

    /// Same as [`to_underlying`](Enum::to_underlying).
    #[inline]
    fn underlying(self) -> Self::Repr {
        self.to_underlying()
    }

    /// Name of this value, or `None` if no enumerator has its underlying
    /// value.
    #[must_use]
    fn name(self) -> Option<&'static str> {
        Self::DESCRIPTOR.name_of(self)
    }

    /// Name of this value, or `""` if no enumerator has its underlying value.
    #[must_use]
    fn to_str(self) -> &'static str {
        self.name().unwrap_or("")
    }

    /// Look up an enumerator by its exact, case-sensitive name.
    #[must_use]
    fn cast(name: &str) -> Option<Self> {
        Self::DESCRIPTOR.get(name)
    }

    /// Zero-based declaration position of this value.
    ///
    /// This is the rank among the declared enumerators, not the underlying
    /// value.
    #[must_use]
    fn index(self) -> Option<usize> {
        Self::DESCRIPTOR.position_of(self)
    }

    /// Enumerator at declaration position `index`.
    #[must_use]
    fn from_index(index: usize) -> Option<Self> {
        Self::DESCRIPTOR.values().get(index).copied()
    }

    /// Enumerator whose underlying value is `raw`.
    ///
    /// Returns `None` when `raw` is not declared, even for enums able to
    /// hold foreign values.
    #[must_use]
    fn from_underlying(raw: Self::Repr) -> Option<Self> {
        Self::DESCRIPTOR
            .values()
            .iter()
            .copied()
            .find(|v| v.to_underlying() == raw)
    }

    /// Returns true if some enumerator has this value's underlying value.
    #[must_use]
    fn is_valid(self) -> bool {
        self.index().is_some()
    }

    /// Iterate over the declared values in declaration order.
    ///
    /// Each call starts a fresh iteration.
    #[must_use]
    fn values() -> Values<Self> {
        Values {
            inner: Self::DESCRIPTOR.values().iter(),
        }
    }

    /// Iterate over the declared names in declaration order.
    #[must_use]
    fn names() -> Names {
        Self::DESCRIPTOR.names().iter().copied()
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    #[must_use]
    fn entries() -> Entries<Self> {
        Entries {
            names: Self::DESCRIPTOR.names().iter(),
            values: Self::DESCRIPTOR.values().iter(),
        }
    }

    /// Display name of the enum type.
    #[must_use]
    fn qualified_name() -> QualifiedName {
        Self::DESCRIPTOR.qualified_name()
    }
}

/// Iterator over the names of a managed enum, see [`Enum::names`].
pub type Names = core::iter::Copied<slice::Iter<'static, &'static str>>;

/// Iterator over the values of a managed enum, see [`Enum::values`].
#[derive(Clone)]
pub struct Values<E: 'static> {
    inner: slice::Iter<'static, E>,
}

impl<E: Copy> Iterator for Values<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E: Copy> DoubleEndedIterator for Values<E> {
    fn next_back(&mut self) -> Option<E> {
        self.inner.next_back().copied()
    }
}

impl<E: Copy> ExactSizeIterator for Values<E> {}

impl<E: Copy> FusedIterator for Values<E> {}

impl<E: 'static> Debug for Values<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Values")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

/// Iterator over `(name, value)` pairs, see [`Enum::entries`].
#[derive(Clone)]
pub struct Entries<E: 'static> {
    names: slice::Iter<'static, &'static str>,
    values: slice::Iter<'static, E>,
}

impl<E: Copy> Iterator for Entries<E> {
    type Item = (&'static str, E);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.names.next()?, *self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<E: Copy> DoubleEndedIterator for Entries<E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((*self.names.next_back()?, *self.values.next_back()?))
    }
}

impl<E: Copy> ExactSizeIterator for Entries<E> {}

impl<E: Copy> FusedIterator for Entries<E> {}

impl<E: 'static> Debug for Entries<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entries")
            .field("remaining", &self.names.len())
            .finish()
    }
}
