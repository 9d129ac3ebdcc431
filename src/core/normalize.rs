/// Normalize a comma-separated free-text field into a matching-ready tag list
///
/// Entries are trimmed, lower-cased, deduplicated and sorted. Empty entries
/// (including the ones produced by trailing commas) are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = raw
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    tags.sort();
    tags.dedup();
    tags
}

/// Apply the same normalization to an already-split tag list
///
/// Profile rows are only compared through their normalized form, so the
/// store runs every save through this.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    tags.sort();
    tags.dedup();
    tags
}

/// Split a comma-separated field into trimmed entries, preserving case
///
/// For display-only fields (amenities) where the original spelling matters.
pub fn split_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_lowercases() {
        let tags = parse_tags(" Austin , DALLAS,bangalore ");
        assert_eq!(tags, vec!["austin", "bangalore", "dallas"]);
    }

    #[test]
    fn test_parse_tags_drops_empty_entries() {
        let tags = parse_tags("quiet,, non-smoker, ,");
        assert_eq!(tags, vec!["non-smoker", "quiet"]);
    }

    #[test]
    fn test_parse_tags_dedups() {
        let tags = parse_tags("Quiet, quiet, QUIET");
        assert_eq!(tags, vec!["quiet"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  ,  ").is_empty());
    }

    #[test]
    fn test_normalize_tags_matches_parse_tags() {
        let split = vec!["  Mumbai".to_string(), "PUNE ".to_string(), "pune".to_string()];
        assert_eq!(normalize_tags(&split), vec!["mumbai", "pune"]);
    }

    #[test]
    fn test_split_field_preserves_case() {
        let entries = split_field("WiFi, AC , Washing Machine,");
        assert_eq!(entries, vec!["WiFi", "AC", "Washing Machine"]);
    }
}
