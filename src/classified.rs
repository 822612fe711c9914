use crate::{PathChar, PathClass};
use alloc::vec::Vec;

/// Decomposition of a classified path into borrowed slices of its input
///
/// Produced by [`classify`](crate::classify). Every slice aliases the buffer
/// the path was classified from, and the lifetime parameter keeps the record
/// from outliving that buffer. For the non-error classifications the slices
/// partition the input:
///
/// ```text
/// root ++ directory ++ entry == input
/// stem ++ extension == entry
/// ```
///
/// On an error classification only [`input`](Self::input) and
/// [`first_invalid`](Self::first_invalid) carry data; every decomposition
/// slice is left empty rather than handing out a partial parse.
///
/// # Examples
///
/// ```
/// use sliced_path::{classify, ClassifyOptions, PathClass};
///
/// let path = classify("/etc/ssh/sshd_config", ClassifyOptions::new());
///
/// assert_eq!(path.class(), PathClass::SlashRooted);
/// assert_eq!(path.root(), b"/");
/// assert_eq!(path.directory(), b"etc/ssh/");
/// assert_eq!(path.entry(), b"sshd_config");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedPath<'a, U> {
    pub(crate) class: PathClass,
    pub(crate) input: &'a [U],
    pub(crate) prefix: &'a [U],
    pub(crate) location: &'a [U],
    pub(crate) root: &'a [U],
    pub(crate) directory: &'a [U],
    pub(crate) entry: &'a [U],
    pub(crate) stem: &'a [U],
    pub(crate) extension: &'a [U],
    pub(crate) first_invalid: Option<&'a [U]>,
    pub(crate) num_directory_parts: usize,
}

impl<'a, U> ClassifiedPath<'a, U> {
    /// A record for input that never went through the scan: the given class
    /// with every decomposition slice empty
    pub(crate) fn unscanned(class: PathClass, input: &'a [U]) -> Self {
        let empty = &input[..0];
        Self {
            class,
            input,
            prefix: empty,
            location: empty,
            root: empty,
            directory: empty,
            entry: empty,
            stem: empty,
            extension: empty,
            first_invalid: None,
            num_directory_parts: 0,
        }
    }

    /// Returns the classification of the input
    #[inline]
    pub fn class(&self) -> PathClass {
        self.class
    }

    /// Returns the input exactly as it was handed to the classifier
    #[inline]
    pub fn input(&self) -> &'a [U] {
        self.input
    }

    /// Returns the recognized prefix of the input
    ///
    /// Always empty under this root scheme; reserved for classifiers that
    /// recognize longer drive or share prefixes.
    #[inline]
    pub fn prefix(&self) -> &'a [U] {
        self.prefix
    }

    /// Returns everything from the start of the input through the end of
    /// [`directory`](Self::directory)
    ///
    /// # Examples
    ///
    /// ```
    /// use sliced_path::{classify, ClassifyOptions};
    ///
    /// let path = classify("/var/log/dmesg", ClassifyOptions::new());
    ///
    /// assert_eq!(path.location(), b"/var/log/");
    /// ```
    #[inline]
    pub fn location(&self) -> &'a [U] {
        self.location
    }

    /// Returns the root of the path: the leading separator for a slash-rooted
    /// path, the `~` marker for a home-rooted one, and empty otherwise
    #[inline]
    pub fn root(&self) -> &'a [U] {
        self.root
    }

    /// Returns the directory portion between the root and the entry,
    /// including the separator that ends it
    #[inline]
    pub fn directory(&self) -> &'a [U] {
        self.directory
    }

    /// Returns the final path component, or an empty slice when the path ends
    /// in a separator
    ///
    /// # Examples
    ///
    /// ```
    /// use sliced_path::{classify, ClassifyOptions};
    ///
    /// let options = ClassifyOptions::new();
    ///
    /// assert_eq!(classify("a/b/c.txt", options).entry(), b"c.txt");
    /// assert_eq!(classify("a/b/", options).entry(), b"");
    /// ```
    #[inline]
    pub fn entry(&self) -> &'a [U] {
        self.entry
    }

    /// Returns the entry up to its extension
    #[inline]
    pub fn stem(&self) -> &'a [U] {
        self.stem
    }

    /// Returns the extension of the entry, beginning at its last dot
    ///
    /// Empty when the entry has no dot and for the special names `.` and
    /// `..`. An entry that is nothing but a dotted name, such as `.profile`,
    /// is all extension and has an empty stem.
    ///
    /// # Examples
    ///
    /// ```
    /// use sliced_path::{classify, ClassifyOptions};
    ///
    /// let options = ClassifyOptions::new();
    ///
    /// assert_eq!(classify("b.tar.gz", options).extension(), b".gz");
    /// assert_eq!(classify(".profile", options).extension(), b".profile");
    /// assert_eq!(classify("..", options).extension(), b"");
    /// ```
    #[inline]
    pub fn extension(&self) -> &'a [U] {
        self.extension
    }

    /// Returns the one-unit slice at the position that made the
    /// classification fail, and `None` for every non-error classification
    ///
    /// For [`InvalidChars`](PathClass::InvalidChars) this is the offending
    /// unit itself; for [`InvalidSlashRuns`](PathClass::InvalidSlashRuns) it
    /// is the second separator of the run.
    #[inline]
    pub fn first_invalid(&self) -> Option<&'a [U]> {
        self.first_invalid
    }

    /// Returns the number of directory components crossed after the root
    #[inline]
    pub fn num_directory_parts(&self) -> usize {
        self.num_directory_parts
    }
}

impl<'a, U: PathChar> ClassifiedPath<'a, U> {
    /// Renders the path into at most `width` units, eliding the middle with
    /// `...` while keeping the entry readable
    ///
    /// See [`squeeze`](crate::squeeze) for the free-function form and the
    /// elision rules.
    pub fn squeeze(&self, width: usize) -> Vec<U> {
        crate::squeeze::render(self.input, self.entry, width)
    }
}
