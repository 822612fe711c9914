/// Options controlling how [`classify`](crate::classify) treats its input
///
/// Every toggle defaults to off. Unknown toggles are unrepresentable; there is
/// no spare bit space to misuse.
///
/// # Examples
///
/// ```
/// use sliced_path::{classify, ClassifyOptions, PathClass};
///
/// let options = ClassifyOptions::new().recognise_tilde_home(true);
///
/// assert_eq!(classify("~/notes", options).class(), PathClass::HomeRooted);
/// assert_eq!(classify("~/notes", ClassifyOptions::new()).class(), PathClass::Relative);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub(crate) ignore_slash_runs: bool,
    pub(crate) ignore_invalid_chars: bool,
    pub(crate) recognise_tilde_home: bool,
}

impl ClassifyOptions {
    /// Creates options with every toggle off
    pub const fn new() -> Self {
        Self {
            ignore_slash_runs: false,
            ignore_invalid_chars: false,
            recognise_tilde_home: false,
        }
    }

    /// Permits runs of consecutive separators instead of classifying them as
    /// [`InvalidSlashRuns`](crate::PathClass::InvalidSlashRuns)
    ///
    /// Separators continuing a run never count as a component boundary, so
    /// [`num_directory_parts`](crate::ClassifiedPath::num_directory_parts) may
    /// undercount when runs are permitted.
    pub const fn ignore_slash_runs(mut self, ignore: bool) -> Self {
        self.ignore_slash_runs = ignore;
        self
    }

    /// Skips the disallowed-unit and reserved-`:` checks instead of
    /// classifying offending input as
    /// [`InvalidChars`](crate::PathClass::InvalidChars)
    pub const fn ignore_invalid_chars(mut self, ignore: bool) -> Self {
        self.ignore_invalid_chars = ignore;
        self
    }

    /// Recognizes a leading `~`, alone or followed by a separator, as rooting
    /// the path at the home directory
    ///
    /// A name directly after the marker (`~user`) is not recognized; such a
    /// path stays relative.
    pub const fn recognise_tilde_home(mut self, recognise: bool) -> Self {
        self.recognise_tilde_home = recognise;
        self
    }
}
