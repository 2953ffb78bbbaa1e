#![recursion_limit = "128"]

extern crate proc_macro;

use proc_macro::TokenStream;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, TokenStreamExt};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Error, Fields, Ident, LitStr, Path, PathArguments};

macro_rules! err {
    ($span:expr, $message:expr $(,)?) => {
        Error::new($span.span(), $message).to_compile_error()
    };
    ($span:expr, $message:expr, $($args:expr),*) => {
        Error::new($span.span(), format!($message, $($args),*)).to_compile_error()
    };
}

/// Integer types accepted in `#[repr(..)]`.
const REPR_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "usize", "i8", "i16", "i32", "i64", "isize",
];

/// Integer types Rust accepts in `#[repr(..)]` but `enumeta` cannot store.
const UNSUPPORTED_REPR_TYPES: &[&str] = &["u128", "i128"];

/// Options read from `#[enumeta(..)]` attributes.
#[derive(Default)]
struct Options {
    namespace: Option<Path>,
    inline: bool,
}

fn parse_options(input: &DeriveInput) -> Result<Options, Error> {
    let mut options = Options::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("enumeta") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("namespace") {
                if options.namespace.is_some() {
                    return Err(meta.error("namespace is already set"));
                }
                options.namespace = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("inline") {
                // Set by the declaring macros in the main crate.
                options.inline = true;
                Ok(())
            } else {
                Err(meta.error("unsupported enumeta option, expected `namespace = path`"))
            }
        })?;
    }
    Ok(options)
}

/// Turn `a::b::c` into the string segments `"a"`, `"b"`, `"c"`.
fn namespace_segments(path: &Path) -> Result<Vec<LitStr>, Error> {
    if let Some(colons) = path.leading_colon {
        return Err(Error::new(
            colons.span(),
            "namespace must be a relative path such as `a::b`",
        ));
    }
    path.segments
        .iter()
        .map(|segment| {
            if !matches!(segment.arguments, PathArguments::None) {
                return Err(Error::new(
                    segment.arguments.span(),
                    "namespace segments cannot have generic arguments",
                ));
            }
            Ok(LitStr::new(&segment.ident.to_string(), segment.ident.span()))
        })
        .collect()
}

/// Integer representation from `#[repr(..)]`, `isize` if there is none.
///
/// 128-bit representations are rejected rather than truncated.
fn find_repr(input: &DeriveInput) -> Result<Ident, Error> {
    let mut repr = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.input.peek(syn::token::Paren) {
                // `align(N)`, `packed(N)`: not a representation type.
                let _content;
                syn::parenthesized!(_content in meta.input);
            } else if let Some(ident) = meta.path.get_ident() {
                let name = ident.to_string();
                if REPR_TYPES.contains(&name.as_str()) {
                    repr = Some(ident.clone());
                } else if UNSUPPORTED_REPR_TYPES.contains(&name.as_str()) {
                    return Err(Error::new(
                        ident.span(),
                        format!(
                            "`#[repr({name})]` is not supported, \
                             use an integer type of at most 64 bits"
                        ),
                    ));
                }
            }
            Ok(())
        })?;
    }
    Ok(repr.unwrap_or_else(|| Ident::new("isize", Span::call_site())))
}

/// Custom derive attaching a name/value table to a fieldless enum.
///
/// Implements `enumeta::Enum` for the type and adds it to the
/// `enumeta::registry`. The enumerators are taken from the declaration, in
/// order, and their values from the usual Rust discriminant rules. The
/// representation is read from `#[repr(..)]` and defaults to `isize`.
///
/// The enum must implement `Copy`. Register it under a namespace with
/// `#[enumeta(namespace = path::to::ns)]`.
///
/// # Example
///
/// ```
/// use enumeta::Enum;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Enum)]
/// #[repr(u16)]
/// enum Port {
///     Http = 80,
///     Https = 443,
/// }
///
/// assert_eq!(Port::Https.to_str(), "Https");
/// assert_eq!(Port::from_underlying(80), Some(Port::Http));
/// ```
#[proc_macro_derive(Enum, attributes(enumeta))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let mut errors = TokenStream2::new();

    let ident = &input.ident;
    let data = if let Data::Enum(data) = &input.data {
        data
    } else {
        return err!(ident, "Enum can only be derived for enums").into();
    };

    if !input.generics.params.is_empty() {
        errors.append_all(err!(
            input.generics.params,
            "Enum cannot be derived for generic enums"
        ));
    }
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            errors.append_all(err!(
                variant.fields,
                "variant `{}` has fields, Enum can only be derived for fieldless enums",
                variant.ident
            ));
        }
    }

    let options = match parse_options(&input) {
        Ok(options) => options,
        Err(e) => {
            errors.append_all(e.to_compile_error());
            Options::default()
        }
    };
    let namespace = match options.namespace.as_ref().map(namespace_segments) {
        Some(Ok(segments)) => segments,
        Some(Err(e)) => {
            errors.append_all(e.to_compile_error());
            Vec::new()
        }
        None => Vec::new(),
    };
    let repr = match find_repr(&input) {
        Ok(repr) => repr,
        Err(e) => {
            errors.append_all(e.to_compile_error());
            Ident::new("isize", Span::call_site())
        }
    };

    // show most errors at once instead of one by one
    if !errors.is_empty() {
        return errors.into();
    }

    let type_name = LitStr::new(&ident.to_string(), ident.span());
    let variant_idents: Vec<_> = data.variants.iter().map(|v| &v.ident).collect();
    let variant_names = variant_idents
        .iter()
        .map(|v| LitStr::new(&v.to_string(), v.span()));

    let origin = if options.inline {
        quote!(::enumeta::Origin::INLINE.union(::enumeta::Origin::SCOPED))
    } else {
        quote!(::enumeta::Origin::SCOPED)
    };

    // Casting an uninhabited enum is rejected, but matching on it is fine.
    let to_underlying = if variant_idents.is_empty() {
        quote!(match self {})
    } else {
        quote!(self as #repr)
    };

    quote! {
        impl ::enumeta::Enum for #ident {
            type Repr = #repr;

            const DESCRIPTOR: ::enumeta::EnumDescriptor<Self> = ::enumeta::EnumDescriptor::new(
                &[#(#namespace),*],
                #type_name,
                &[#(#variant_names),*],
                &[#(Self::#variant_idents),*],
                #origin,
            );

            #[inline]
            fn to_underlying(self) -> #repr {
                #to_underlying
            }
        }

        const _: usize = <#ident as ::enumeta::Enum>::COUNT;

        ::enumeta::__register!(#ident);
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_find_repr() {
        let input: DeriveInput = parse_quote! {
            #[repr(align(8), u16)]
            enum E { A }
        };
        assert_eq!(find_repr(&input).unwrap(), "u16");

        let input: DeriveInput = parse_quote! {
            #[repr(C)]
            enum E { A }
        };
        assert_eq!(find_repr(&input).unwrap(), "isize");
    }

    #[test]
    fn test_find_repr_wide() {
        for repr in ["u128", "i128"] {
            let repr = Ident::new(repr, Span::call_site());
            let input: DeriveInput = parse_quote! {
                #[repr(#repr)]
                enum Wide { Low = 1, High = (1 << 64) + 1 }
            };
            let err = find_repr(&input).unwrap_err();
            assert!(err.to_string().contains("is not supported"));
        }
    }
}
