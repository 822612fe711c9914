/// Outcome of classifying a path
///
/// Error classifications sort before every successful classification,
/// mirroring the convention of keeping failures below the well-formed kinds.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathClass {
    /// Two or more consecutive separators with no component between them
    InvalidSlashRuns,

    /// A disallowed unit, or the reserved `:`, appeared in the path
    InvalidChars,

    /// Reserved for classifiers with broader validation; never produced here
    Invalid,

    /// Zero-length input
    Empty,

    /// No recognized root; the path is interpreted against some working
    /// directory
    Relative,

    /// Rooted by a leading separator
    SlashRooted,

    /// Rooted at the home directory by a leading `~`
    HomeRooted,
}

impl PathClass {
    /// Returns true for the error classifications
    ///
    /// # Examples
    ///
    /// ```
    /// use sliced_path::PathClass;
    ///
    /// assert!(PathClass::InvalidChars.is_invalid());
    /// assert!(PathClass::InvalidSlashRuns.is_invalid());
    /// assert!(!PathClass::Empty.is_invalid());
    /// assert!(!PathClass::Relative.is_invalid());
    /// ```
    #[inline]
    pub fn is_invalid(self) -> bool {
        matches!(
            self,
            Self::InvalidSlashRuns | Self::InvalidChars | Self::Invalid
        )
    }

    /// Returns true if the path is anchored rather than relative
    ///
    /// # Examples
    ///
    /// ```
    /// use sliced_path::PathClass;
    ///
    /// assert!(PathClass::SlashRooted.is_rooted());
    /// assert!(PathClass::HomeRooted.is_rooted());
    /// assert!(!PathClass::Relative.is_rooted());
    /// ```
    #[inline]
    pub fn is_rooted(self) -> bool {
        matches!(self, Self::SlashRooted | Self::HomeRooted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classes_should_order_below_success_classes() {
        assert!(PathClass::InvalidSlashRuns < PathClass::Empty);
        assert!(PathClass::InvalidChars < PathClass::Relative);
        assert!(PathClass::Invalid < PathClass::HomeRooted);
    }
}
