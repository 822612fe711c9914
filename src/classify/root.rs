use crate::{ClassifyOptions, PathChar, PathClass};

/// How the front of the input roots the path
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Root {
    /// One of `Relative`, `SlashRooted`, or `HomeRooted`
    pub class: PathClass,

    /// Number of units belonging to the root
    pub len: usize,
}

/// Determines how the input is rooted
///
/// Only the primary separator roots a path; the minimal recognized root is the
/// single leading unit. A `~` roots the path when it stands alone or is
/// followed by a separator, and the separator after it is not consumed into
/// the root. Nothing else is a root, so no error can come out of this stage.
pub fn classify_root<U: PathChar>(input: &[U], options: ClassifyOptions) -> Root {
    match input.first() {
        Some(&unit) if unit == U::SEPARATOR => Root {
            class: PathClass::SlashRooted,
            len: 1,
        },
        Some(&unit)
            if options.recognise_tilde_home
                && unit.is_home()
                && (input.len() == 1 || input[1] == U::SEPARATOR) =>
        {
            Root {
                class: PathClass::HomeRooted,
                len: 1,
            }
        }
        _ => Root {
            class: PathClass::Relative,
            len: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> ClassifyOptions {
        ClassifyOptions::new().recognise_tilde_home(true)
    }

    #[test]
    fn validate_slash_rooted() {
        let root = classify_root(b"/a/b".as_slice(), ClassifyOptions::new());
        assert_eq!(root.class, PathClass::SlashRooted);
        assert_eq!(root.len, 1);

        // Only the first separator belongs to the root
        let root = classify_root(b"//a".as_slice(), ClassifyOptions::new());
        assert_eq!(root.class, PathClass::SlashRooted);
        assert_eq!(root.len, 1);

        // The alternate separator does not root a path
        let root = classify_root(b"\\a".as_slice(), ClassifyOptions::new());
        assert_eq!(root.class, PathClass::Relative);
        assert_eq!(root.len, 0);
    }

    #[test]
    fn validate_home_rooted() {
        // Bare marker roots
        let root = classify_root(b"~".as_slice(), home());
        assert_eq!(root.class, PathClass::HomeRooted);
        assert_eq!(root.len, 1);

        // Marker followed by a separator roots, without consuming the
        // separator
        let root = classify_root(b"~/notes".as_slice(), home());
        assert_eq!(root.class, PathClass::HomeRooted);
        assert_eq!(root.len, 1);

        // A name after the marker does not root
        let root = classify_root(b"~user".as_slice(), home());
        assert_eq!(root.class, PathClass::Relative);
        assert_eq!(root.len, 0);

        // Without the option the marker is an ordinary unit
        let root = classify_root(b"~".as_slice(), ClassifyOptions::new());
        assert_eq!(root.class, PathClass::Relative);
        assert_eq!(root.len, 0);
    }

    #[test]
    fn validate_relative() {
        let root = classify_root(b"a/b".as_slice(), ClassifyOptions::new());
        assert_eq!(root.class, PathClass::Relative);
        assert_eq!(root.len, 0);
    }
}
