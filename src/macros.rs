//! Registration entry points.
//!
//! Every macro here ends in the same place: an [`Enum`] implementation whose
//! [`EnumDescriptor`] is checked while compiling, plus a submission to the
//! [`registry`]. They differ only in how the enum and its enumerators are
//! supplied.
//!
//! [`Enum`]: crate::Enum
//! [`EnumDescriptor`]: crate::EnumDescriptor
//! [`registry`]: crate::registry

/// Declare a C-style enum together with its name/value table.
///
/// The enum is modeled as an integer newtype with one associated constant
/// per enumerator, so it converts freely to and from its representation and
/// can hold values none of its enumerators declare. Enumerators without an
/// explicit value take the previous value plus one; the first one defaults
/// to 0. Several enumerators may share a value.
///
/// Prefix the declaration with `in path::to::ns;` to register the enum under
/// a namespace. The namespace only affects its display name.
///
/// Besides [`Enum`](crate::Enum), the generated type implements `Debug`
/// (`Name(raw)` for undeclared values), `Display` (empty for undeclared
/// values), `FromStr`, and `From` conversions with its representation. The
/// lookups are also available as inherent `const fn`s.
///
/// # Example
///
/// ```
/// use enumeta::{managed_enum, Enum};
///
/// managed_enum! {
///     in net::proto;
///     /// Frame kinds.
///     #[must_use]
///     pub enum Frenum: u8 {
///         A = 10,
///         B,
///         C,
///         /// Kept for old peers.
///         Legacy = 10,
///     }
/// }
///
/// assert_eq!(Frenum::B.0, 11);
/// assert_eq!(Frenum::C.index(), Some(2));
/// assert_eq!(Frenum::Legacy.to_str(), "A");
/// assert_eq!(Frenum(200).to_str(), "");
/// assert_eq!(format!("{:?}", Frenum(200)), "Frenum(200)");
/// assert_eq!(u8::from(Frenum::C), 12);
/// assert_eq!(Frenum::qualified_name().to_string(), "net::proto::Frenum");
///
/// const NAME: &str = Frenum::C.to_str();
/// assert_eq!(NAME, "C");
/// ```
///
/// Enumerator names must be unique:
///
/// ```compile_fail
/// enumeta::managed_enum! {
///     enum Twice: u8 { A, A }
/// }
/// ```
///
/// and implicit values must fit in the representation:
///
/// ```compile_fail
/// enumeta::managed_enum! {
///     enum Overflow: u8 { Max = 255, Next }
/// }
/// ```
#[macro_export]
macro_rules! managed_enum {
    (in $($ns:ident)::+ ; $($rest:tt)*) => {
        $crate::__managed_enum! { [$($ns)::+] $($rest)* }
    };
    ($($rest:tt)*) => {
        $crate::__managed_enum! { [] $($rest)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __managed_enum {
    (
        [$($ns:ident)::*]
        $(#[$outer:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $( $(#[$inner:meta])* $variant:ident $(= $value:expr)? ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $vis struct $name(pub $repr);

        #[allow(unused, non_upper_case_globals)]
        impl $name {
            $crate::__enum_consts! { $name; []; $( $(#[$inner])* $variant $(= $value)? ,)* }
        }

        #[allow(unused)]
        impl $name {
            /// Convert to the underlying integer.
            #[inline]
            #[must_use]
            pub const fn underlying(self) -> $repr {
                self.0
            }
        }

        $crate::__const_lookups!($name);

        impl $crate::Enum for $name {
            type Repr = $repr;

            const DESCRIPTOR: $crate::EnumDescriptor<Self> = $crate::EnumDescriptor::new(
                &[$(stringify!($ns)),*],
                stringify!($name),
                &[$(stringify!($variant)),*],
                &[$(Self::$variant),*],
                $crate::Origin::INLINE,
            );

            #[inline]
            fn to_underlying(self) -> $repr {
                self.0
            }
        }

        impl ::core::convert::From<$repr> for $name {
            #[inline]
            fn from(raw: $repr) -> Self {
                Self(raw)
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match <Self as $crate::Enum>::name(*self) {
                    ::core::option::Option::Some(name) => f.write_str(name),
                    ::core::option::Option::None => {
                        ::core::write!(f, "{}({:?})", stringify!($name), self.0)
                    }
                }
            }
        }

        $crate::__string_impls!($name);

        const _: usize = <$name as $crate::Enum>::COUNT;

        $crate::__register!($name);
    };
}

/// Emit one associated constant per enumerator, numbering implicit ones
/// from the previous constant.
#[doc(hidden)]
#[macro_export]
macro_rules! __enum_consts {
    ($name:ident; $prev:tt;) => {};
    ($name:ident; $prev:tt; $(#[$m:meta])* $v:ident = $e:expr, $($rest:tt)*) => {
        $(#[$m])*
        pub const $v: Self = Self($e);
        $crate::__enum_consts! { $name; [$v]; $($rest)* }
    };
    ($name:ident; []; $(#[$m:meta])* $v:ident, $($rest:tt)*) => {
        $(#[$m])*
        pub const $v: Self = Self(0);
        $crate::__enum_consts! { $name; [$v]; $($rest)* }
    };
    ($name:ident; [$p:ident]; $(#[$m:meta])* $v:ident, $($rest:tt)*) => {
        $(#[$m])*
        pub const $v: Self = Self(Self::$p.0 + 1);
        $crate::__enum_consts! { $name; [$v]; $($rest)* }
    };
}

/// Declare a strongly-scoped enum together with its name/value table.
///
/// This produces a native `#[repr(int)]` Rust enum, which cannot hold
/// undeclared values; converting from the representation goes through
/// `TryFrom`. Values follow the usual Rust rules, so two enumerators cannot
/// share one. Otherwise it behaves like [`managed_enum!`], including the
/// optional `in path::to::ns;` prefix.
///
/// # Example
///
/// ```
/// use enumeta::{scoped_enum, Enum};
///
/// scoped_enum! {
///     pub enum Channel: i16 {
///         Left = -1,
///         Center,
///         Right,
///     }
/// }
///
/// assert_eq!(Channel::Right as i16, 1);
/// assert_eq!(Channel::try_from(0i16), Ok(Channel::Center));
/// assert!(Channel::try_from(7i16).is_err());
/// assert_eq!(Channel::Left.to_string(), "Left");
/// assert_eq!("Right".parse::<Channel>(), Ok(Channel::Right));
/// ```
#[macro_export]
macro_rules! scoped_enum {
    (in $($ns:ident)::+ ; $($rest:tt)*) => {
        $crate::__scoped_enum! { [$($ns)::+] $($rest)* }
    };
    ($($rest:tt)*) => {
        $crate::__scoped_enum! { [] $($rest)* }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __scoped_enum {
    ([] $($rest:tt)*) => {
        $crate::__scoped_enum! { @declare [] $($rest)* }
    };
    ([$($ns:ident)::+] $($rest:tt)*) => {
        $crate::__scoped_enum! {
            @declare [#[enumeta(namespace = $($ns)::+)]] $($rest)*
        }
    };
    (
        @declare [$($ns_attr:tt)*]
        $(#[$outer:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $( $(#[$inner:meta])* $variant:ident $(= $value:expr)? ),* $(,)?
        }
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, $crate::Enum)]
        #[enumeta(inline)]
        $($ns_attr)*
        $(#[$outer])*
        #[repr($repr)]
        $vis enum $name {
            $( $(#[$inner])* $variant $(= $value)? ),*
        }

        #[allow(unused)]
        impl $name {
            /// Convert to the underlying integer.
            #[inline]
            #[must_use]
            pub const fn underlying(self) -> $repr {
                self as $repr
            }
        }

        $crate::__const_lookups!($name);

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::TryFromReprError;

            fn try_from(raw: $repr) -> ::core::result::Result<Self, Self::Error> {
                <Self as $crate::Enum>::from_underlying(raw).ok_or_else(|| {
                    $crate::TryFromReprError::new(
                        <Self as $crate::Enum>::qualified_name(),
                        $crate::Underlying::to_i128(raw),
                    )
                })
            }
        }

        impl ::core::convert::From<$name> for $repr {
            #[inline]
            fn from(value: $name) -> Self {
                value as $repr
            }
        }

        $crate::__string_impls!($name);
    };
}

/// Inherent `const fn` lookups, for types that already have an inherent
/// `const fn underlying(self)`.
#[doc(hidden)]
#[macro_export]
macro_rules! __const_lookups {
    ($name:ident) => {
        #[allow(unused)]
        impl $name {
            /// Name of this value, or `""` if no enumerator has its value.
            #[must_use]
            pub const fn to_str(self) -> &'static str {
                match self.index() {
                    ::core::option::Option::Some(i) => {
                        <Self as $crate::Enum>::DESCRIPTOR.names()[i]
                    }
                    ::core::option::Option::None => "",
                }
            }

            /// Zero-based declaration position of this value.
            #[must_use]
            pub const fn index(self) -> ::core::option::Option<usize> {
                let values = <Self as $crate::Enum>::DESCRIPTOR.values();
                let mut i = 0;
                while i < values.len() {
                    if values[i].underlying() == self.underlying() {
                        return ::core::option::Option::Some(i);
                    }
                    i += 1;
                }
                ::core::option::Option::None
            }

            /// Returns true if some enumerator has this value.
            #[must_use]
            pub const fn is_valid(self) -> bool {
                self.index().is_some()
            }

            /// Look up an enumerator by its exact name.
            #[must_use]
            pub const fn cast(name: &str) -> ::core::option::Option<Self> {
                let descriptor = <Self as $crate::Enum>::DESCRIPTOR;
                match descriptor.position_of_name(name) {
                    ::core::option::Option::Some(i) => {
                        ::core::option::Option::Some(descriptor.values()[i])
                    }
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __string_impls {
    ($name:ident) => {
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(<Self as $crate::Enum>::to_str(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::Enum>::cast(s).ok_or_else(|| {
                    $crate::ParseEnumError::new(<Self as $crate::Enum>::qualified_name())
                })
            }
        }
    };
}

/// Attach a name/value table to an integer newtype declared elsewhere.
///
/// The enumerators are listed by name only; their values are read from the
/// type's existing associated constants, in the order given. The type must
/// be a tuple struct whose field `0` holds the representation, like the
/// ones [`managed_enum!`] produces. Prefix with `in path::to::ns;` to
/// register under a namespace.
///
/// # Example
///
/// ```
/// use enumeta::{impl_enum, Enum};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// pub struct LegacyEnum(pub u32);
///
/// #[allow(non_upper_case_globals)]
/// impl LegacyEnum {
///     pub const OldValue1: LegacyEnum = LegacyEnum(1);
///     pub const OldValue2: LegacyEnum = LegacyEnum(2);
///     pub const OldValue3: LegacyEnum = LegacyEnum(3);
/// }
///
/// impl_enum! {
///     in legacy;
///     LegacyEnum: u32 => { OldValue1, OldValue2, OldValue3 }
/// }
///
/// assert_eq!(LegacyEnum::OldValue2.to_str(), "OldValue2");
/// assert_eq!(LegacyEnum::cast("OldValue3"), Some(LegacyEnum::OldValue3));
/// assert_eq!(LegacyEnum(9).index(), None);
/// ```
///
/// Listing a name twice, or registering a type twice, does not compile:
///
/// ```compile_fail
/// #[derive(Clone, Copy)]
/// pub struct Twice(pub u8);
///
/// impl Twice {
///     pub const A: Twice = Twice(0);
/// }
///
/// enumeta::impl_enum! { Twice: u8 => { A, A } }
/// ```
///
/// ```compile_fail
/// #[derive(Clone, Copy)]
/// pub struct Again(pub u8);
///
/// impl Again {
///     pub const A: Again = Again(0);
/// }
///
/// enumeta::impl_enum! { Again: u8 => { A } }
/// enumeta::impl_enum! { Again: u8 => { A } }
/// ```
#[macro_export]
macro_rules! impl_enum {
    (in $($ns:ident)::+ ; $name:ident : $repr:ty => { $($variant:ident),* $(,)? }) => {
        $crate::__impl_enum! { [$($ns)::+] $name : $repr => { $($variant),* } }
    };
    ($name:ident : $repr:ty => { $($variant:ident),* $(,)? }) => {
        $crate::__impl_enum! { [] $name : $repr => { $($variant),* } }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_enum {
    ([$($ns:ident)::*] $name:ident : $repr:ty => { $($variant:ident),* }) => {
        impl $crate::Enum for $name {
            type Repr = $repr;

            const DESCRIPTOR: $crate::EnumDescriptor<Self> = $crate::EnumDescriptor::new(
                &[$(stringify!($ns)),*],
                stringify!($name),
                &[$(stringify!($variant)),*],
                &[$(Self::$variant),*],
                $crate::Origin::empty(),
            );

            #[inline]
            fn to_underlying(self) -> $repr {
                self.0
            }
        }

        const _: usize = <$name as $crate::Enum>::COUNT;

        $crate::__register!($name);
    };
}

#[cfg(feature = "registry")]
#[doc(hidden)]
#[macro_export]
macro_rules! __register {
    ($name:ty) => {
        $crate::__private::inventory::submit! {
            $crate::registry::Registration::of::<$name>()
        }
    };
}

#[cfg(not(feature = "registry"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __register {
    ($name:ty) => {};
}
