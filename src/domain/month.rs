use strum::IntoEnumIterator;

/// The months that get a vertical band, in band order (top to bottom).
/// Any other `Month` value in a file is never plotted.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    PartialOrd,
    Ord,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::AsRefStr,
)]
pub enum CanonicalMonth {
    March,
    April,
    May,
}

impl CanonicalMonth {
    /// Exact, case-sensitive match against the raw `Month` string.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    /// Canonical months in band order that satisfy `present`.
    pub fn present_in(mut present: impl FnMut(CanonicalMonth) -> bool) -> Vec<CanonicalMonth> {
        CanonicalMonth::iter().filter(|m| present(*m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(CanonicalMonth::parse("April"), Some(CanonicalMonth::April));
        assert_eq!(CanonicalMonth::parse("april"), None);
        assert_eq!(CanonicalMonth::parse("June"), None);
        assert_eq!(CanonicalMonth::parse(""), None);
    }

    #[test]
    fn test_present_in_keeps_canonical_order() {
        let months = CanonicalMonth::present_in(|m| m != CanonicalMonth::April);
        assert_eq!(months, vec![CanonicalMonth::March, CanonicalMonth::May]);
    }
}
