//! Game mode classification
//!
//! Maps a map identifier (e.g. `koth_viaduct`) to a display label by looking
//! up its prefix in a fixed table.

/// Label for maps whose prefix is not in [`GAMEMODE_TABLE`]
pub const OTHER_GAMEMODE: &str = "Other";

/// Map-name prefix → game mode label
pub const GAMEMODE_TABLE: &[(&str, &str)] = &[
    ("cp_", "Control Points"),
    ("pl_", "Payload"),
    ("plr_", "Payload Race"),
    ("ctf_", "Capture the Flag"),
    ("koth_", "King of the Hill"),
    ("arena_", "Arena"),
    ("mvm_", "Mann vs Machine"),
    ("sd_", "Special Delivery"),
    ("tc_", "Territorial Control"),
    ("tr_", "Training"),
    ("pd_", "Player Destruction"),
    ("pass_", "PASS Time"),
    ("rd_", "Robot Destruction"),
    ("mge_", "MGE"),
    ("jump_", "Jump"),
    ("trade_", "Trade"),
    ("achievement_", "Achievement"),
];

/// Look up the label for an exact prefix (including the trailing `_`)
pub fn label_for_prefix(prefix: &str) -> Option<&'static str> {
    GAMEMODE_TABLE
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, label)| *label)
}

/// Classify a map into a game mode
///
/// Returns `None` for an empty map: those servers carry no game mode and the
/// filter lets them through instead of counting them as "Other".
///
/// # Examples
/// ```
/// use quickplaytui::logic::gamemode::classify_map;
///
/// assert_eq!(classify_map("pl_upward"), Some("Payload"));
/// assert_eq!(classify_map("customzzz"), Some("Other"));
/// assert_eq!(classify_map(""), None);
/// ```
pub fn classify_map(map: &str) -> Option<&'static str> {
    if map.is_empty() {
        return None;
    }

    let segment = map.split('_').next().unwrap_or(map);
    let prefix = format!("{}_", segment);

    Some(label_for_prefix(&prefix).unwrap_or(OTHER_GAMEMODE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        assert_eq!(classify_map("cp_badlands"), Some("Control Points"));
        assert_eq!(classify_map("koth_viaduct"), Some("King of the Hill"));
        assert_eq!(classify_map("plr_hightower"), Some("Payload Race"));
        assert_eq!(classify_map("achievement_idle"), Some("Achievement"));
    }

    #[test]
    fn test_only_first_segment_is_used() {
        // "pl_" not "pl_upward_"
        assert_eq!(classify_map("pl_upward_rc2"), Some("Payload"));
    }

    #[test]
    fn test_unknown_prefix_is_other() {
        assert_eq!(classify_map("customzzz"), Some(OTHER_GAMEMODE));
        assert_eq!(classify_map("surf_ski"), Some(OTHER_GAMEMODE));
        assert_eq!(classify_map("_leading"), Some(OTHER_GAMEMODE));
    }

    #[test]
    fn test_empty_map_is_unclassified() {
        assert_eq!(classify_map(""), None);
    }

    #[test]
    fn test_prefix_lookup_is_case_sensitive() {
        assert_eq!(classify_map("CP_Badlands"), Some(OTHER_GAMEMODE));
    }

    #[test]
    fn test_table_prefixes_end_with_underscore() {
        assert!(GAMEMODE_TABLE.iter().all(|(prefix, _)| prefix.ends_with('_')));
    }
}
