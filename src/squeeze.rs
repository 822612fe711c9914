use crate::classify::classify_units;
use crate::{ClassifyOptions, PathChar};
use alloc::vec::Vec;

/// Renders a path into at most `width` units, eliding the middle with `...`
///
/// The rules, tried in order:
///
/// 1. the whole path fits: copied verbatim;
/// 2. `width` is under 4, leaving no room for an ellipsis: the entry is
///    truncated to at most `width` units;
/// 3. even the entry alone is too wide: the middle of the entry is elided,
///    the left of the keep budget getting the floor and the right the
///    remainder;
/// 4. the entry fits but nothing of the leading path would: the entry is
///    shown alone;
/// 5. otherwise the front of the path is kept, then `...`, then a separator
///    and the entry, filling `width` exactly.
///
/// Structural problems in the input do not matter for display; the path is
/// classified leniently to find its entry.
///
/// # Examples
///
/// ```
/// use sliced_path::squeeze;
///
/// assert_eq!(squeeze("a/b.txt", 16), b"a/b.txt");
/// assert_eq!(
///     squeeze("/home/user/docs/report.txt", 20),
///     b"/home/.../report.txt"
/// );
/// assert_eq!(squeeze("/very/long/dir/name.txt", 10), b"name.txt");
/// ```
pub fn squeeze<U, S>(path: &S, width: usize) -> Vec<U>
where
    U: PathChar,
    S: AsRef<[U]> + ?Sized,
{
    let options = ClassifyOptions::new()
        .ignore_slash_runs(true)
        .ignore_invalid_chars(true);

    classify_units(path.as_ref(), options).squeeze(width)
}

pub(crate) fn render<U: PathChar>(input: &[U], entry: &[U], width: usize) -> Vec<U> {
    let mut out = Vec::with_capacity(width.min(input.len()));

    if input.len() <= width {
        out.extend_from_slice(input);
        return out;
    }

    if width < 4 {
        out.extend_from_slice(&entry[..entry.len().min(width)]);
        return out;
    }

    if entry.len() > width {
        let keep = width - 3;
        let left = keep / 2;
        let right = keep - left;
        out.extend_from_slice(&entry[..left]);
        push_ellipsis(&mut out);
        out.extend_from_slice(&entry[entry.len() - right..]);
        return out;
    }

    if entry.len() + 4 > width {
        out.extend_from_slice(entry);
        return out;
    }

    out.extend_from_slice(&input[..width - entry.len() - 4]);
    push_ellipsis(&mut out);
    out.push(U::SEPARATOR);
    out.extend_from_slice(entry);
    out
}

fn push_ellipsis<U: PathChar>(out: &mut Vec<U>) {
    out.push(U::DOT);
    out.push(U::DOT);
    out.push(U::DOT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widen(bytes: &[u8]) -> Vec<u16> {
        bytes.iter().map(|&b| b as u16).collect()
    }

    #[test]
    fn should_copy_verbatim_when_the_path_fits() {
        assert_eq!(squeeze("a/b.txt", 7), b"a/b.txt");
        assert_eq!(squeeze("a/b.txt", 100), b"a/b.txt");
        assert_eq!(squeeze("", 0), b"");
    }

    #[test]
    fn should_elide_the_front_of_the_path_around_the_entry() {
        assert_eq!(
            squeeze("/home/user/docs/report.txt", 20),
            b"/home/.../report.txt"
        );

        // No room for any leading units: the elision starts immediately
        assert_eq!(squeeze("/very/long/dir/name.txt", 12), b".../name.txt");
    }

    #[test]
    fn should_show_the_entry_alone_when_the_path_cannot_be_elided() {
        // 10 fits the entry but not entry + ellipsis + separator
        assert_eq!(squeeze("/very/long/dir/name.txt", 10), b"name.txt");
    }

    #[test]
    fn should_elide_the_middle_of_an_oversized_entry() {
        assert_eq!(squeeze("averylongfilename.txt", 9), b"ave...txt");

        // The left half of the keep budget gets the floor
        assert_eq!(squeeze("averylongfilename.txt", 8), b"av...txt");
    }

    #[test]
    fn degenerate_widths_should_truncate_the_entry() {
        assert_eq!(squeeze("averylongfilename.txt", 3), b"ave");
        assert_eq!(squeeze("a/b/c/file", 2), b"fi");
        assert_eq!(squeeze("a/b/c/file", 0), b"");
    }

    #[test]
    fn entryless_paths_should_elide_down_to_the_separator() {
        // Trailing separator leaves no entry to preserve
        assert_eq!(squeeze("abcdefgh/", 8), b"abcd.../");
        assert_eq!(squeeze("a/b/", 3), b"");
    }

    #[test]
    fn structural_problems_should_not_block_rendering() {
        assert_eq!(squeeze("a//b//name.txt", 12), b".../name.txt");
        assert_eq!(squeeze("we?ird/na*me.txt", 14), b"w.../na*me.txt");
    }

    #[test]
    fn wide_paths_should_squeeze_like_narrow_paths() {
        let wide = widen(b"/home/user/docs/report.txt");
        assert_eq!(squeeze(&wide, 20), widen(b"/home/.../report.txt"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn output_should_never_exceed_the_width(
                bytes in proptest::collection::vec(any::<u8>(), 0..48),
                width in 0usize..24,
            ) {
                let out = squeeze(&bytes, width);
                prop_assert!(out.len() <= width);
            }

            #[test]
            fn fitting_paths_should_render_verbatim(
                bytes in proptest::collection::vec(any::<u8>(), 0..16),
                width in 16usize..32,
            ) {
                let out = squeeze(&bytes, width);
                prop_assert_eq!(out, bytes);
            }

            #[test]
            fn the_entry_should_survive_whenever_it_fits(
                bytes in proptest::collection::vec(any::<u8>(), 0..48),
                width in 0usize..24,
            ) {
                let options = ClassifyOptions::new()
                    .ignore_slash_runs(true)
                    .ignore_invalid_chars(true);
                let entry = classify_units(bytes.as_slice(), options).entry();

                let out = squeeze(&bytes, width);
                if entry.len() <= width {
                    prop_assert!(out.ends_with(entry));
                }
            }

            #[test]
            fn elision_should_fill_the_width_exactly(
                bytes in proptest::collection::vec(any::<u8>(), 0..48),
                width in 4usize..24,
            ) {
                let options = ClassifyOptions::new()
                    .ignore_slash_runs(true)
                    .ignore_invalid_chars(true);
                let entry = classify_units(bytes.as_slice(), options).entry();

                let out = squeeze(&bytes, width);
                if bytes.len() <= width {
                    prop_assert_eq!(out.len(), bytes.len());
                } else if entry.len() > width || entry.len() + 4 <= width {
                    // Only an entry shown alone may come up short of the width
                    prop_assert_eq!(out.len(), width);
                }
            }
        }
    }
}
