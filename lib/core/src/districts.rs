//! Fixed allow-list of Rwandan administrative names.
//!
//! Kigali is included alongside the districts because it is one of the
//! default cities.

/// Every name a city may take, already in title case.
pub const DISTRICTS: [&str; 32] = [
    "Kigali", "Huye", "Muhanga", "Musanze", "Nyagatare", "Rubavu", "Rusizi",
    "Bugesera", "Burera", "Gakenke", "Gasabo", "Gatsibo", "Gicumbi", "Gisagara",
    "Gisozi", "Kamonyi", "Karongi", "Kayonza", "Kicukiro", "Kirehe", "Ngoma",
    "Ngororero", "Nyabihu", "Nyamagabe", "Nyamasheke", "Nyanza", "Nyarugenge",
    "Nyaruguru", "Ruhango", "Rulindo", "Rwamagana", "Rutsiro",
];

/// Cities registered at startup, in id order (ids 1..=7).
pub const DEFAULT_CITIES: [&str; 7] = [
    "Kigali", "Huye", "Muhanga", "Musanze", "Nyagatare", "Rubavu", "Rusizi",
];

/// Upper-cases the first character and lower-cases the rest.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Checks membership after applying [`title_case`]. No trimming is done.
pub fn is_valid_district(name: &str) -> bool {
    let normalized = title_case(name);
    DISTRICTS.contains(&normalized.as_str())
}
