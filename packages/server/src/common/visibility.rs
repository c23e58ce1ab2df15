//! Disclosure levels and member visibility filtering.
//!
//! This is the policy layer the directory queries go through. The level a
//! client asks for is advisory only: `resolve_disclosure_level` caps it at
//! what the viewer's authentication state allows, and the member model
//! translates the resulting [`MemberFilter`] into the SQL predicate. Nothing
//! a client sends can widen the rows a query returns.

use std::fmt;

/// Viewer clearance for member data, ordered from least to most privileged.
///
/// Stored on each member row as `public_level`: the minimum clearance a
/// viewer needs before the row may appear in their directory results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DisclosureLevel {
    /// Anonymous visitors. Only rows opted into general publication.
    General = 1,
    /// Signed-in members.
    MembersOnly = 2,
    /// Full member detail (signed-in, or admin).
    Full = 3,
}

impl DisclosureLevel {
    /// Parse a client-supplied level. Out-of-range values are rejected, not
    /// clamped.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(DisclosureLevel::General),
            2 => Some(DisclosureLevel::MembersOnly),
            3 => Some(DisclosureLevel::Full),
            _ => None,
        }
    }

    /// The value compared against the `public_level` column.
    pub fn as_i16(self) -> i16 {
        self as i16
    }
}

impl fmt::Display for DisclosureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as i16)
    }
}

/// Authentication state of the caller, as far as visibility is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Member,
    Admin,
}

/// Decide the disclosure level a query will actually run at.
///
/// - Anonymous viewers are pinned to [`DisclosureLevel::General`] no matter
///   what they requested (the server-side downgrade; the client toggle is
///   a preference, not an authorization).
/// - Signed-in members choose between [`DisclosureLevel::MembersOnly`] and
///   [`DisclosureLevel::Full`]; with no preference they get full detail.
/// - Admins always query at full detail (row-level bypass is handled by the
///   dedicated admin listing, not by a level).
pub fn resolve_disclosure_level(
    viewer: Viewer,
    requested: Option<DisclosureLevel>,
) -> DisclosureLevel {
    match viewer {
        Viewer::Anonymous => DisclosureLevel::General,
        Viewer::Admin => DisclosureLevel::Full,
        Viewer::Member => requested
            .unwrap_or(DisclosureLevel::Full)
            .max(DisclosureLevel::MembersOnly),
    }
}

/// Row constraints for a directory member query at a given level.
///
/// The member model binds these straight into the WHERE clause; see
/// `Member::find_directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberFilter {
    /// Always true for directory reads - hidden rows never leave the store.
    pub visible: bool,
    /// Rows must have `public_level <= max_public_level`.
    pub max_public_level: DisclosureLevel,
    /// Level-1 reads additionally require the general-publication opt-in.
    pub require_general_public: bool,
}

impl MemberFilter {
    pub fn for_level(level: DisclosureLevel) -> Self {
        MemberFilter {
            visible: true,
            max_public_level: level,
            require_general_public: level == DisclosureLevel::General,
        }
    }

    /// The predicate the SQL translation enforces, expressed over one row.
    ///
    /// Kept in sync with `Member::find_directory`; the property tests run
    /// against this form.
    pub fn matches(&self, visible: bool, public_level: i16, general_public: bool) -> bool {
        visible == self.visible
            && public_level <= self.max_public_level.as_i16()
            && (!self.require_general_public || general_public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(DisclosureLevel::General < DisclosureLevel::MembersOnly);
        assert!(DisclosureLevel::MembersOnly < DisclosureLevel::Full);
        assert_eq!(DisclosureLevel::General.as_i16(), 1);
        assert_eq!(DisclosureLevel::MembersOnly.as_i16(), 2);
        assert_eq!(DisclosureLevel::Full.as_i16(), 3);
    }

    #[test]
    fn test_from_i32_rejects_out_of_range() {
        assert_eq!(DisclosureLevel::from_i32(1), Some(DisclosureLevel::General));
        assert_eq!(DisclosureLevel::from_i32(3), Some(DisclosureLevel::Full));
        assert_eq!(DisclosureLevel::from_i32(0), None);
        assert_eq!(DisclosureLevel::from_i32(4), None);
        assert_eq!(DisclosureLevel::from_i32(-1), None);
    }

    #[test]
    fn test_anonymous_is_always_downgraded() {
        for requested in [
            None,
            Some(DisclosureLevel::General),
            Some(DisclosureLevel::MembersOnly),
            Some(DisclosureLevel::Full),
        ] {
            assert_eq!(
                resolve_disclosure_level(Viewer::Anonymous, requested),
                DisclosureLevel::General
            );
        }
    }

    #[test]
    fn test_member_chooses_between_two_and_three() {
        assert_eq!(
            resolve_disclosure_level(Viewer::Member, Some(DisclosureLevel::MembersOnly)),
            DisclosureLevel::MembersOnly
        );
        assert_eq!(
            resolve_disclosure_level(Viewer::Member, Some(DisclosureLevel::Full)),
            DisclosureLevel::Full
        );
        // No stated preference defaults to full detail.
        assert_eq!(
            resolve_disclosure_level(Viewer::Member, None),
            DisclosureLevel::Full
        );
        // Level 1 is below a signed-in member's floor.
        assert_eq!(
            resolve_disclosure_level(Viewer::Member, Some(DisclosureLevel::General)),
            DisclosureLevel::MembersOnly
        );
    }

    #[test]
    fn test_admin_queries_at_full() {
        assert_eq!(
            resolve_disclosure_level(Viewer::Admin, Some(DisclosureLevel::General)),
            DisclosureLevel::Full
        );
        assert_eq!(
            resolve_disclosure_level(Viewer::Admin, None),
            DisclosureLevel::Full
        );
    }

    #[test]
    fn test_filter_construction() {
        let f = MemberFilter::for_level(DisclosureLevel::General);
        assert!(f.visible);
        assert_eq!(f.max_public_level, DisclosureLevel::General);
        assert!(f.require_general_public);

        let f = MemberFilter::for_level(DisclosureLevel::MembersOnly);
        assert!(!f.require_general_public);

        let f = MemberFilter::for_level(DisclosureLevel::Full);
        assert_eq!(f.max_public_level, DisclosureLevel::Full);
        assert!(!f.require_general_public);
    }

    #[test]
    fn test_filter_never_matches_hidden_rows() {
        for level in [
            DisclosureLevel::General,
            DisclosureLevel::MembersOnly,
            DisclosureLevel::Full,
        ] {
            let f = MemberFilter::for_level(level);
            for public_level in 1..=3 {
                assert!(!f.matches(false, public_level, true));
                assert!(!f.matches(false, public_level, false));
            }
        }
    }

    #[test]
    fn test_filter_respects_clearance_ordering() {
        let f = MemberFilter::for_level(DisclosureLevel::MembersOnly);
        assert!(f.matches(true, 1, false));
        assert!(f.matches(true, 2, false));
        assert!(!f.matches(true, 3, false));
    }

    #[test]
    fn test_anonymous_filter_requires_general_public() {
        let f = MemberFilter::for_level(DisclosureLevel::General);
        assert!(f.matches(true, 1, true));
        assert!(!f.matches(true, 1, false));
        assert!(!f.matches(true, 2, true));
    }
}
