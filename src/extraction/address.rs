//! Property-address cleanup.

/// Trim and collapse every run of whitespace into a single space.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop the free-text suffix the portal appends after the state/postcode
/// segment, e.g. `"… SA 5092 - Building Rules Application"`.
///
/// The `" - "` delimiter is searched for only at or after the `" SA "`
/// token. House numbers may themselves contain hyphens (`12-14 Main Road`),
/// so starting the search any earlier could truncate inside the street
/// address. No `" SA "` token means no truncation.
pub fn strip_state_suffix(address: &str) -> &str {
    if let Some(state) = address.find(" SA ") {
        if let Some(dash) = address[state..].find(" - ") {
            return &address[..state + dash];
        }
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_runs() {
        assert_eq!(normalize("123   Smith  St"), "123 Smith St");
        assert_eq!(normalize("  10 Park Lane  "), "10 Park Lane");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("10 \t Park\n Lane SA  5091");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_strip_suffix_after_state() {
        assert_eq!(
            strip_state_suffix("12-14 Main Road SA 5092 - Building Rules Application"),
            "12-14 Main Road SA 5092"
        );
    }

    #[test]
    fn test_strip_ignores_house_number_hyphen() {
        // No suffix after the state segment; the house-number hyphen stays.
        assert_eq!(
            strip_state_suffix("12-14 Main Road SA 5092"),
            "12-14 Main Road SA 5092"
        );
    }

    #[test]
    fn test_strip_without_state_token() {
        assert_eq!(
            strip_state_suffix("10 Park Lane - Land Division"),
            "10 Park Lane - Land Division"
        );
    }

    #[test]
    fn test_strip_with_dash_before_state() {
        // A " - " before the state token must not be the cut point.
        assert_eq!(
            strip_state_suffix("Lot 2 - 6 High St SA 5000 - Shed"),
            "Lot 2 - 6 High St SA 5000"
        );
    }
}
