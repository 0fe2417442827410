//! Character domain constants.
//!
//! Field bounds are counted in Unicode characters. The input DTOs in
//! `lore-db` validate against these constants; the `characters` migration
//! repeats them as `CHECK` constraints and must be kept in step.

/// Entity name used in error messages.
pub const ENTITY_NAME: &str = "Character";

pub const NAME_MAX_LEN: u64 = 100;
pub const TITLE_MAX_LEN: u64 = 100;
pub const RACE_MAX_LEN: u64 = 50;
pub const OCCUPATION_MAX_LEN: u64 = 100;
pub const STATUS_MAX_LEN: u64 = 50;

/// Status assigned when a create request omits it.
pub const DEFAULT_STATUS: &str = "Alive";

/// Conventional status values. Not enforced: any string within
/// [`STATUS_MAX_LEN`] is accepted.
pub const KNOWN_STATUSES: &[&str] = &["Alive", "Deceased", "Unknown"];

/// Whether `status` is one of the conventional values (case-sensitive).
pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}

/// Resolve the status to store on create.
pub fn status_or_default(status: Option<&str>) -> &str {
    status.unwrap_or(DEFAULT_STATUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_known() {
        assert!(is_known_status(DEFAULT_STATUS));
    }

    #[test]
    fn unconventional_status_is_not_known() {
        assert!(!is_known_status("Ascended"));
        assert!(!is_known_status("alive"));
    }

    #[test]
    fn missing_status_falls_back_to_default() {
        assert_eq!(status_or_default(None), "Alive");
        assert_eq!(status_or_default(Some("Deceased")), "Deceased");
    }
}
