mod root;
mod scan;

use crate::{ClassifiedPath, ClassifyOptions, PathChar, PathClass};

/// Classifies a path and decomposes it into borrowed slices of the input
///
/// The input is inspected in a single forward pass and nothing is allocated;
/// every slice of the returned record aliases `path`. All outcomes, including
/// the invalid ones, are ordinary values and the function never panics.
///
/// Accepts anything that exposes its units as a slice: `str` and byte strings
/// for narrow paths, `[u16]` and friends for wide ones.
///
/// # Examples
///
/// ```
/// use sliced_path::{classify, ClassifyOptions, PathClass};
///
/// let path = classify("/var/log/app/access.log", ClassifyOptions::new());
///
/// assert_eq!(path.class(), PathClass::SlashRooted);
/// assert_eq!(path.root(), b"/");
/// assert_eq!(path.directory(), b"var/log/app/");
/// assert_eq!(path.entry(), b"access.log");
/// assert_eq!(path.stem(), b"access");
/// assert_eq!(path.extension(), b".log");
/// assert_eq!(path.num_directory_parts(), 3);
/// ```
///
/// Structural problems are classifications, not panics:
///
/// ```
/// use sliced_path::{classify, ClassifyOptions, PathClass};
///
/// let path = classify("a//b", ClassifyOptions::new());
///
/// assert_eq!(path.class(), PathClass::InvalidSlashRuns);
/// assert_eq!(path.first_invalid(), Some(b"/".as_slice()));
/// assert!(path.entry().is_empty());
/// ```
///
/// Home-rooted recognition is opt-in:
///
/// ```
/// use sliced_path::{classify, ClassifyOptions, PathClass};
///
/// let options = ClassifyOptions::new().recognise_tilde_home(true);
///
/// assert_eq!(classify("~", options).class(), PathClass::HomeRooted);
/// assert_eq!(classify("~/notes", options).class(), PathClass::HomeRooted);
/// assert_eq!(classify("~user", options).class(), PathClass::Relative);
/// ```
pub fn classify<'a, U, S>(path: &'a S, options: ClassifyOptions) -> ClassifiedPath<'a, U>
where
    U: PathChar,
    S: AsRef<[U]> + ?Sized,
{
    classify_units(path.as_ref(), options)
}

pub(crate) fn classify_units<U: PathChar>(
    input: &[U],
    options: ClassifyOptions,
) -> ClassifiedPath<'_, U> {
    if input.is_empty() {
        return ClassifiedPath::unscanned(PathClass::Empty, input);
    }

    let root = root::classify_root(input, options);

    let scan = match scan::scan_units(input, root.len, options) {
        Ok(scan) => scan,
        Err(err) => {
            let mut path = ClassifiedPath::unscanned(err.class, input);
            path.first_invalid = Some(&input[err.at..err.at + 1]);
            return path;
        }
    };

    // Everything below is arithmetic over positions the scan already found
    let len = input.len();

    let entry = match scan.last_sep {
        // A path ending in a separator has no entry
        Some(at) if at + 1 == len => &input[len..],
        Some(at) => &input[at + 1..],
        None => &input[root.len..],
    };
    let entry_start = len - entry.len();

    let extension = match scan.last_dot {
        // `.` and `..` name directories, not extensions
        Some(_) if entry.len() <= 2 && entry.iter().all(|unit| unit.is_dot()) => &input[len..],
        Some(at) => &input[at..],
        None => &input[len..],
    };

    ClassifiedPath {
        class: root.class,
        input,
        prefix: &input[..0],
        location: &input[..entry_start],
        root: &input[..root.len],
        directory: &input[root.len..entry_start],
        entry,
        stem: &input[entry_start..len - extension.len()],
        extension,
        first_invalid: None,
        num_directory_parts: scan.num_parts,
    }
}
