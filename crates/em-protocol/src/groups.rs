//! Allow-list of group names the extraction model may report.

/// Canonical group spellings, in the order they are presented to the model.
pub const VALID_GROUPS: &[&str] = &[
    "Non Weather",
    "snow",
    "announcement_group",
    "Visibility",
    "Snow/Ice",
    "Rain",
    "lightning",
    "storm",
    "wind_gusts",
    "Dust",
    "tornado",
    "snow_pack",
    "hail",
    "flooding",
    "air_quality",
    "wind",
    "iceing",
    "shake_alert",
    "red_flag -957",
    "flood",
    "psa_group",
    "temperature",
    "tropical_storm",
    "snow_acc",
];

/// Fixed set of valid group names with case- and separator-insensitive lookup.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalGroupSet {
    names: &'static [&'static str],
}

impl CanonicalGroupSet {
    /// The built-in allow-list.
    pub const fn standard() -> Self {
        Self {
            names: VALID_GROUPS,
        }
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Map a loosely-spelled group name onto its allow-listed spelling.
    ///
    /// Case is ignored, and whitespace, `-`, `_` and `/` are all treated as
    /// interchangeable separators, so "snow ice" finds "Snow/Ice".
    pub fn canonicalize(&self, name: &str) -> Option<&'static str> {
        let wanted = fold(name);
        if wanted.is_empty() {
            return None;
        }
        self.names.iter().copied().find(|n| fold(n) == wanted)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.canonicalize(name).is_some()
    }
}

impl Default for CanonicalGroupSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lowercase and drop separator characters.
fn fold(s: &str) -> String {
    s.chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '_' | '/')))
        .flat_map(char::to_lowercase)
        .collect()
}
