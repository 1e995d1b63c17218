//! City name resolution.
//!
//! Stored records carry whatever spelling the source used; clients type
//! whatever they like. [`CityAliases`] maps both onto one canonical stored
//! spelling for filtering and one display spelling for responses.

use std::collections::HashMap;

/// Resolves user-facing and stored city spellings.
#[cfg_attr(test, mockall::automock)]
pub trait CityAliases: Send + Sync {
    /// Stored spelling to filter on. Unknown names come back trimmed.
    fn canonical_name(&self, raw: &str) -> String;

    /// Spelling to expose in responses. Unknown names come back unchanged.
    fn display_name(&self, stored: &str) -> String;
}

struct CityEntry {
    canonical: &'static str,
    display: &'static str,
    aliases: &'static [&'static str],
}

const CITIES: &[CityEntry] = &[
    CityEntry {
        canonical: "Hồ Chí Minh",
        display: "Ho Chi Minh City",
        aliases: &[
            "ho chi minh",
            "thành phố hồ chí minh",
            "thanh pho ho chi minh",
            "tp hồ chí minh",
            "tp. hồ chí minh",
            "tp hcm",
            "tp.hcm",
            "tphcm",
            "hcm",
            "hcmc",
            "saigon",
            "sài gòn",
            "sai gon",
        ],
    },
    CityEntry {
        canonical: "Hà Nội",
        display: "Hanoi",
        aliases: &["ha noi", "thành phố hà nội", "thanh pho ha noi", "hn"],
    },
    CityEntry {
        canonical: "Đà Nẵng",
        display: "Da Nang",
        aliases: &["danang", "thành phố đà nẵng", "dn"],
    },
    CityEntry {
        canonical: "Hải Phòng",
        display: "Hai Phong",
        aliases: &["haiphong", "thành phố hải phòng"],
    },
    CityEntry {
        canonical: "Cần Thơ",
        display: "Can Tho",
        aliases: &["cantho", "thành phố cần thơ"],
    },
    CityEntry {
        canonical: "Huế",
        display: "Hue",
        aliases: &["thành phố huế", "thua thien hue"],
    },
    CityEntry {
        canonical: "Nha Trang",
        display: "Nha Trang",
        aliases: &["nhatrang"],
    },
    CityEntry {
        canonical: "Đà Lạt",
        display: "Da Lat",
        aliases: &["dalat"],
    },
    CityEntry {
        canonical: "Vũng Tàu",
        display: "Vung Tau",
        aliases: &["vungtau"],
    },
    CityEntry {
        canonical: "Hội An",
        display: "Hoi An",
        aliases: &["hoian"],
    },
];

/// Built-in alias table for the major Vietnamese cities.
///
/// # Examples
/// ```
/// use backend::domain::{CityAliases, StaticCityAliases};
///
/// let aliases = StaticCityAliases::new();
/// assert_eq!(aliases.canonical_name(" Saigon "), "Hồ Chí Minh");
/// assert_eq!(aliases.display_name("Hồ Chí Minh"), "Ho Chi Minh City");
/// assert_eq!(aliases.canonical_name("Vinh"), "Vinh");
/// ```
#[derive(Debug, Clone)]
pub struct StaticCityAliases {
    canonical: HashMap<String, &'static str>,
    display: HashMap<String, &'static str>,
}

impl StaticCityAliases {
    pub fn new() -> Self {
        let mut canonical = HashMap::new();
        let mut display = HashMap::new();
        for entry in CITIES {
            let names = [entry.canonical, entry.display]
                .into_iter()
                .chain(entry.aliases.iter().copied());
            for name in names {
                canonical.insert(lookup_key(name), entry.canonical);
            }
            display.insert(lookup_key(entry.canonical), entry.display);
        }
        Self { canonical, display }
    }
}

impl Default for StaticCityAliases {
    fn default() -> Self {
        Self::new()
    }
}

impl CityAliases for StaticCityAliases {
    fn canonical_name(&self, raw: &str) -> String {
        self.canonical
            .get(&lookup_key(raw))
            .map_or_else(|| raw.trim().to_owned(), |name| (*name).to_owned())
    }

    fn display_name(&self, stored: &str) -> String {
        self.display
            .get(&lookup_key(stored))
            .map_or_else(|| stored.to_owned(), |name| (*name).to_owned())
    }
}

fn lookup_key(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn aliases() -> StaticCityAliases {
        StaticCityAliases::new()
    }

    #[rstest]
    #[case("saigon", "Hồ Chí Minh")]
    #[case("HCMC", "Hồ Chí Minh")]
    #[case("  Ho   Chi  Minh  City ", "Hồ Chí Minh")]
    #[case("hồ chí minh", "Hồ Chí Minh")]
    #[case("Hanoi", "Hà Nội")]
    #[case("ha noi", "Hà Nội")]
    #[case("Da Nang", "Đà Nẵng")]
    fn known_spellings_resolve(aliases: StaticCityAliases, #[case] raw: &str, #[case] expected: &str) {
        assert_eq!(aliases.canonical_name(raw), expected);
    }

    #[rstest]
    fn unknown_city_is_trimmed_only(aliases: StaticCityAliases) {
        assert_eq!(aliases.canonical_name("  Quy Nhơn "), "Quy Nhơn");
    }

    #[rstest]
    fn display_name_maps_stored_spelling(aliases: StaticCityAliases) {
        assert_eq!(aliases.display_name("hà nội"), "Hanoi");
        assert_eq!(aliases.display_name("Unknown"), "Unknown");
    }

    #[rstest]
    fn every_display_name_round_trips(aliases: StaticCityAliases) {
        for entry in CITIES {
            assert_eq!(aliases.canonical_name(entry.display), entry.canonical);
            assert_eq!(aliases.display_name(entry.canonical), entry.display);
        }
    }
}
