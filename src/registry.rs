//! Process-wide view of every managed enum, keyed by type identity.
//!
//! Each registration entry point submits a [`Registration`] which the linker
//! gathers into one collection before `main` runs. Nothing is added or
//! removed afterwards, so the collection is shared between threads without
//! any synchronization.
//!
//! The static route to the same data is the [`Enum`] bound itself; this
//! module answers the question for types only known as `T: 'static`.

use crate::descriptor::{Origin, QualifiedName};
use crate::enums::Underlying;
use crate::error::RegistryError;
use crate::Enum;
use core::any::TypeId;
use core::fmt::{self, Debug, Formatter};

/// Type-erased descriptor of one managed enum.
pub struct Registration {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
    name: QualifiedName,
    names: &'static [&'static str],
    origin: Origin,
    underlying_at: fn(usize) -> Option<i128>,
}

impl Registration {
    /// Describe `E` from its descriptor.
    #[must_use]
    pub const fn of<E: Enum>() -> Self {
        Self {
            type_id: TypeId::of::<E>,
            type_name: core::any::type_name::<E>,
            name: E::DESCRIPTOR.qualified_name(),
            names: E::DESCRIPTOR.names(),
            origin: E::DESCRIPTOR.origin(),
            underlying_at: underlying_at::<E>,
        }
    }

    /// Identity of the registered type.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Rust path of the registered type, as reported by
    /// [`core::any::type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Display name given at registration.
    #[must_use]
    pub const fn qualified_name(&self) -> QualifiedName {
        self.name
    }

    /// Enumerator names in declaration order.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// How the enum was registered.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Number of declared enumerators.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no enumerators are declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Underlying value of the enumerator at `index`, widened to `i128`.
    #[must_use]
    pub fn underlying_at(&self, index: usize) -> Option<i128> {
        (self.underlying_at)(index)
    }

    /// `(name, underlying value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, i128)> + '_ {
        self.names
            .iter()
            .enumerate()
            .filter_map(move |(i, name)| Some((*name, self.underlying_at(i)?)))
    }
}

impl Debug for Registration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("type_name", &self.type_name())
            .field("name", &self.name)
            .field("names", &self.names)
            .field("origin", &self.origin)
            .finish()
    }
}

fn underlying_at<E: Enum>(index: usize) -> Option<i128> {
    E::DESCRIPTOR
        .values()
        .get(index)
        .map(|v| v.to_underlying().to_i128())
}

inventory::collect!(Registration);

/// Iterate over every registration in the program, in no particular order.
pub fn registrations() -> impl Iterator<Item = &'static Registration> {
    inventory::iter::<Registration>.into_iter()
}

/// Registration of `T`, if it is a managed enum.
#[must_use]
pub fn lookup<T: ?Sized + 'static>() -> Option<&'static Registration> {
    let id = TypeId::of::<T>();
    let found = registrations().find(|r| r.type_id() == id);
    log::trace!(
        "registry lookup for {}: {}",
        core::any::type_name::<T>(),
        if found.is_some() { "managed" } else { "not managed" }
    );
    found
}

/// Returns true if `T` went through one of the registration entry points.
///
/// Decided from the type alone; a type that was never registered, enum or
/// not, reports `false`.
#[must_use]
pub fn is_managed<T: ?Sized + 'static>() -> bool {
    lookup::<T>().is_some()
}

/// Find a registration by display name, e.g. `"net::proto::Kind"`.
///
/// If several types share the name, an arbitrary one of them is returned;
/// [`check`] reports such collisions.
#[must_use]
pub fn find(qualified_name: &str) -> Option<&'static Registration> {
    let found = registrations().find(|r| r.name.matches(qualified_name));
    log::debug!(
        "registry find `{}`: {:?}",
        qualified_name,
        found.map(Registration::type_name)
    );
    found
}

/// Check the registry for display names shared by different types.
///
/// Every collision is logged as a warning; the first one found is returned.
pub fn check() -> Result<(), RegistryError> {
    let mut first = None;
    for (i, a) in registrations().enumerate() {
        let clash = registrations()
            .skip(i + 1)
            .find(|b| b.name == a.name && b.type_id() != a.type_id());
        if let Some(b) = clash {
            log::warn!(
                "`{}` is registered for both {} and {}",
                a.name,
                a.type_name(),
                b.type_name()
            );
            if first.is_none() {
                first = Some(RegistryError::AmbiguousName(a.name));
            }
        }
    }
    match first {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::EnumDescriptor;

    #[derive(Clone, Copy)]
    struct Unregistered(u8);

    impl Enum for Unregistered {
        type Repr = u8;

        const DESCRIPTOR: EnumDescriptor<Self> =
            EnumDescriptor::new(&[], "Unregistered", &["A"], &[Self(0)], Origin::empty());

        fn to_underlying(self) -> u8 {
            self.0
        }
    }

    crate::managed_enum! {
        in registry::tests;
        enum Registered: u16 {
            First = 0x10,
            Second,
        }
    }

    crate::scoped_enum! {
        in registry::tests;
        enum Scoped: i8 {
            Down = -1,
            Up = 1,
        }
    }

    #[test]
    fn test_is_managed() {
        assert!(is_managed::<Registered>());
        assert!(is_managed::<Scoped>());
        assert!(!is_managed::<Unregistered>());
        assert!(!is_managed::<u8>());
        assert!(!is_managed::<str>());
    }

    #[test]
    fn test_lookup() {
        let reg = lookup::<Registered>().unwrap();
        assert_eq!(reg.names(), ["First", "Second"]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.origin(), Origin::INLINE | Origin::NAMESPACED);
        assert_eq!(reg.underlying_at(1), Some(0x11));
        assert_eq!(reg.underlying_at(2), None);
        assert!(reg.entries().eq([("First", 0x10), ("Second", 0x11)]));
        assert!(reg.type_name().ends_with("Registered"));
    }

    #[test]
    fn test_scoped_namespace() {
        let reg = lookup::<Scoped>().unwrap();
        assert_eq!(
            reg.origin(),
            Origin::INLINE | Origin::SCOPED | Origin::NAMESPACED
        );
        assert_eq!(reg.qualified_name().namespace(), ["registry", "tests"]);
        assert!(reg.entries().eq([("Down", -1), ("Up", 1)]));
        assert_eq!(
            find("registry::tests::Scoped").map(Registration::type_id),
            Some(TypeId::of::<Scoped>())
        );
    }

    #[test]
    fn test_find() {
        let reg = find("registry::tests::Registered").unwrap();
        assert_eq!(reg.type_id(), TypeId::of::<Registered>());
        assert!(find("Registered").is_none());
        assert!(find("Unregistered").is_none());
    }
}
