//! `const` string helpers used while building descriptors.
//!
//! Descriptor tables are checked while the compiler evaluates them, so
//! everything here must work in a `const` context on stable.

/// Compare two strings byte by byte.
///
/// `==` on `&str` is not callable in a `const` context, hence this.
#[must_use]
pub const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Find the first position of `name` in `names`.
#[must_use]
pub const fn position_of_name(names: &[&str], name: &str) -> Option<usize> {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Panic if any name appears twice in `names`.
///
/// Used during constant evaluation, where the panic turns into a compile
/// error pointing at the offending enum.
pub const fn assert_unique_names(names: &[&str]) {
    let mut i = 0;
    while i < names.len() {
        let mut j = i + 1;
        while j < names.len() {
            if str_eq(names[i], names[j]) {
                panic!("duplicate enumerator name in enum registration");
            }
            j += 1;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_eq() {
        assert!(str_eq("", ""));
        assert!(str_eq("Value1", "Value1"));
        assert!(!str_eq("Value1", "value1"));
        assert!(!str_eq("Value1", "Value10"));
        assert!(!str_eq("A", ""));
    }

    #[test]
    fn test_position_of_name() {
        const NAMES: &[&str] = &["A", "B", "C"];
        assert_eq!(position_of_name(NAMES, "A"), Some(0));
        assert_eq!(position_of_name(NAMES, "C"), Some(2));
        assert_eq!(position_of_name(NAMES, "D"), None);
        assert_eq!(position_of_name(NAMES, ""), None);
        assert_eq!(position_of_name(&[], "A"), None);
    }

    #[test]
    fn test_assert_unique_names() {
        assert_unique_names(&[]);
        assert_unique_names(&["A", "B", "AB"]);
    }

    #[test]
    #[should_panic(expected = "duplicate enumerator name")]
    fn test_assert_unique_names_duplicate() {
        assert_unique_names(&["A", "B", "A"]);
    }

    // Evaluated by the compiler; a regression here fails the build.
    const _: () = assert!(str_eq("abc", "abc"));
    const _: () = assert!(matches!(position_of_name(&["x", "y"], "y"), Some(1)));
}
