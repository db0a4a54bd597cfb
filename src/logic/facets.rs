//! Facet extraction
//!
//! Derives the filterable dimensions (regions and game modes) present in a
//! server list. Every facet found starts enabled.

use std::collections::BTreeMap;

use crate::api::ServerRecord;
use crate::logic::gamemode::classify_map;

/// Distinct regions and game modes of a server list, each mapped to `true`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub regions: BTreeMap<String, bool>,
    pub gamemodes: BTreeMap<String, bool>,
}

/// Collect every non-empty region and every classified game mode
///
/// Servers with an empty map contribute no game mode. Input order does not
/// matter and duplicates collapse.
pub fn extract_facets(servers: &[ServerRecord]) -> Facets {
    let mut facets = Facets::default();

    for server in servers {
        if !server.region.is_empty() {
            facets.regions.insert(server.region.clone(), true);
        }

        if let Some(gamemode) = classify_map(&server.map) {
            facets.gamemodes.insert(gamemode.to_string(), true);
        }
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(region: &str, map: &str) -> ServerRecord {
        ServerRecord {
            id: format!("{}-{}", region, map),
            name: "test".to_string(),
            map: map.to_string(),
            players: "0/24".to_string(),
            region: region.to_string(),
            address: "127.0.0.1:27015".to_string(),
        }
    }

    #[test]
    fn test_extract_regions_and_gamemodes() {
        let servers = vec![
            server("NA", "cp_badlands"),
            server("EU", "koth_viaduct"),
            server("NA", ""),
        ];

        let facets = extract_facets(&servers);

        let regions: Vec<&str> = facets.regions.keys().map(String::as_str).collect();
        let gamemodes: Vec<&str> = facets.gamemodes.keys().map(String::as_str).collect();
        assert_eq!(regions, vec!["EU", "NA"]);
        assert_eq!(gamemodes, vec!["Control Points", "King of the Hill"]);
        assert!(facets.regions.values().all(|enabled| *enabled));
        assert!(facets.gamemodes.values().all(|enabled| *enabled));
    }

    #[test]
    fn test_empty_region_is_not_a_facet() {
        let facets = extract_facets(&[server("", "pl_upward")]);
        assert!(facets.regions.is_empty());
        assert_eq!(facets.gamemodes.len(), 1);
    }

    #[test]
    fn test_unknown_maps_collapse_into_other() {
        let facets = extract_facets(&[server("NA", "surf_ski"), server("NA", "customzzz")]);
        assert_eq!(facets.gamemodes.len(), 1);
        assert_eq!(facets.gamemodes.get("Other"), Some(&true));
    }

    #[test]
    fn test_order_independent() {
        let a = vec![server("NA", "cp_badlands"), server("EU", "koth_viaduct")];
        let b = vec![server("EU", "koth_viaduct"), server("NA", "cp_badlands")];
        assert_eq!(extract_facets(&a), extract_facets(&b));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(extract_facets(&[]), Facets::default());
    }
}
