use crate::{ClassifyOptions, PathChar, PathClass};

/// Positions found by the fused scan, all relative to the start of the input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scan {
    /// Position of the last separator, including a root separator
    pub last_sep: Option<usize>,

    /// Position of the last dot seen after the last separator
    pub last_dot: Option<usize>,

    /// Number of separators crossed after the root that did not continue a
    /// run
    pub num_parts: usize,
}

/// Why the scan gave up
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    /// `InvalidSlashRuns` or `InvalidChars`
    pub class: PathClass,

    /// Position of the offending unit: the unit itself for an invalid
    /// character, the second separator for a run
    pub at: usize,
}

/// Scans the input once for validity and component boundaries
///
/// Slash runs are searched for first, over the whole input, so that a path
/// containing both a run and an invalid character reports the run. The root
/// separator of a slash-rooted path takes part in that search, which is what
/// makes `//a` a run at position 1. The validity checks and the boundary
/// bookkeeping then share a single forward pass.
pub fn scan_units<U: PathChar>(
    input: &[U],
    root_len: usize,
    options: ClassifyOptions,
) -> Result<Scan, ScanError> {
    if !options.ignore_slash_runs {
        if let Some(at) = find_slash_run(input) {
            return Err(ScanError {
                class: PathClass::InvalidSlashRuns,
                at,
            });
        }
    }

    let mut last_sep = None;
    let mut last_dot = None;
    let mut num_parts = 0;
    let mut prev_sep = false;

    for (i, &unit) in input.iter().enumerate() {
        if !options.ignore_invalid_chars {
            if unit.is_disallowed() {
                return Err(ScanError {
                    class: PathClass::InvalidChars,
                    at: i,
                });
            }

            // `:` sits outside the disallowed table but is reported the same
            // way
            if unit.is_reserved() {
                return Err(ScanError {
                    class: PathClass::InvalidChars,
                    at: i,
                });
            }
        }

        let is_sep = unit.is_separator();
        if is_sep {
            if i >= root_len && !prev_sep {
                num_parts += 1;
            }
            last_sep = Some(i);
            last_dot = None;
        } else if unit.is_dot() {
            last_dot = Some(i);
        }
        prev_sep = is_sep;
    }

    Ok(Scan {
        last_sep,
        last_dot,
        num_parts,
    })
}

/// Returns the position of the second separator of the first run, if any
fn find_slash_run<U: PathChar>(input: &[U]) -> Option<usize> {
    let mut prev_sep = false;

    for (i, &unit) in input.iter().enumerate() {
        let is_sep = unit.is_separator();
        if is_sep && prev_sep {
            return Some(i);
        }
        prev_sep = is_sep;
    }

    None
}
