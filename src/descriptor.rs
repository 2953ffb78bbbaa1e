//! The static name/value table attached to every managed enum.

use crate::util;
use crate::Enum;
use bitflags::bitflags;
use core::fmt::{self, Debug, Display, Formatter};

bitflags! {
    /// Which registration entry point produced a descriptor.
    ///
    /// An empty set means the enum was declared independently and had its
    /// metadata attached afterwards.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Origin: u8 {
        /// The enumerators were declared by the registering macro itself.
        const INLINE = 1 << 0;
        /// The enum is a native Rust `enum`, which cannot hold values
        /// outside of its declared set.
        const SCOPED = 1 << 1;
        /// The enum was registered under a namespace path.
        const NAMESPACED = 1 << 2;
    }
}

/// Display name of a managed enum, optionally qualified by a namespace path.
///
/// The `Display` implementation joins the segments with `::`, e.g.
/// `net::proto::Kind`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    namespace: &'static [&'static str],
    name: &'static str,
}

impl QualifiedName {
    /// Creates a qualified name from its namespace segments and type name.
    #[must_use]
    pub const fn new(namespace: &'static [&'static str], name: &'static str) -> Self {
        Self { namespace, name }
    }

    /// Unqualified type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Namespace segments, outermost first. Empty if not namespaced.
    #[must_use]
    pub const fn namespace(&self) -> &'static [&'static str] {
        self.namespace
    }

    /// Check whether `path` spells this name, e.g. `"net::proto::Kind"`.
    ///
    /// The comparison is exact and segment-wise; no whitespace is allowed
    /// around the separators.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let mut segments = path.split("::");
        for ns in self.namespace {
            if segments.next() != Some(*ns) {
                return false;
            }
        }
        segments.next() == Some(self.name) && segments.next().is_none()
    }
}

impl Display for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ns in self.namespace {
            write!(f, "{ns}::")?;
        }
        f.write_str(self.name)
    }
}

impl Debug for QualifiedName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Immutable table of the enumerators of `E`, in declaration order.
///
/// `names[i]` is the name of `values[i]`. Names are unique; values may
/// repeat, in which case the first name declared for a value wins every
/// value-to-name lookup.
///
/// Descriptors are built in a `const` context by the registration macros;
/// [`EnumDescriptor::new`] panics on malformed tables, which surfaces as a
/// compile error.
#[derive(Clone, Copy)]
pub struct EnumDescriptor<E: 'static> {
    name: QualifiedName,
    names: &'static [&'static str],
    values: &'static [E],
    origin: Origin,
}

impl<E: 'static> EnumDescriptor<E> {
    /// Builds a descriptor.
    ///
    /// [`Origin::NAMESPACED`] is added automatically when `namespace` is not
    /// empty.
    ///
    /// # Panics
    ///
    /// Panics if `names` and `values` differ in length or if a name appears
    /// twice. Evaluated in a `const`, either panic is a compile error:
    ///
    /// ```compile_fail
    /// use enumeta::{EnumDescriptor, Origin};
    ///
    /// const BROKEN: EnumDescriptor<u8> =
    ///     EnumDescriptor::new(&[], "Broken", &["A", "A"], &[0, 1], Origin::empty());
    /// const _: usize = BROKEN.len();
    /// ```
    #[must_use]
    pub const fn new(
        namespace: &'static [&'static str],
        type_name: &'static str,
        names: &'static [&'static str],
        values: &'static [E],
        origin: Origin,
    ) -> Self {
        assert!(
            names.len() == values.len(),
            "enum registration has a different number of names and values"
        );
        util::assert_unique_names(names);

        let origin = if namespace.is_empty() {
            origin
        } else {
            origin.union(Origin::NAMESPACED)
        };

        Self {
            name: QualifiedName::new(namespace, type_name),
            names,
            values,
            origin,
        }
    }

    /// Display name of the enum type.
    #[must_use]
    pub const fn qualified_name(&self) -> QualifiedName {
        self.name
    }

    /// Enumerator names in declaration order.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Enumerator values in declaration order, parallel to [`names`].
    ///
    /// [`names`]: Self::names
    #[must_use]
    pub const fn values(&self) -> &'static [E] {
        self.values
    }

    /// How the enum was registered.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Number of declared enumerators, aliases included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the enum declares no enumerators.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of the enumerator called `name`, matched exactly.
    #[must_use]
    pub const fn position_of_name(&self, name: &str) -> Option<usize> {
        util::position_of_name(self.names, name)
    }
}

impl<E: Enum> EnumDescriptor<E> {
    /// Position of the first enumerator whose underlying value equals that
    /// of `value`.
    #[must_use]
    pub fn position_of(&self, value: E) -> Option<usize> {
        let raw = value.to_underlying();
        self.values.iter().position(|v| v.to_underlying() == raw)
    }

    /// First declared name for `value`, or `None` for a value outside the
    /// table.
    #[must_use]
    pub fn name_of(&self, value: E) -> Option<&'static str> {
        self.position_of(value).map(|i| self.names[i])
    }

    /// Value of the enumerator called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<E> {
        self.position_of_name(name).map(|i| self.values[i])
    }
}

impl<E: 'static> Debug for EnumDescriptor<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumDescriptor")
            .field("name", &self.name)
            .field("names", &self.names)
            .field("origin", &self.origin)
            .finish()
    }
}
