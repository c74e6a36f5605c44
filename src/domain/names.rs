use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/// Alias table resolving the different spellings each data source uses for
/// the same player, inverted at load time for O(1) lookup.
pub struct PlayerAliases {
    // UPPER(alias) -> UPPER(display name)
    lookup: HashMap<String, String>,
}

impl PlayerAliases {
    /// Load `player_aliases.json` (`display name -> [aliases]`).
    /// A missing file is not an error: resolution then passes names through.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Alias file not found: {}", path.display());
            return Ok(Self::from_map(HashMap::new()));
        }

        let json = std::fs::read_to_string(path).context("Failed to read alias file")?;
        let map: HashMap<String, Vec<String>> =
            serde_json::from_str(&json).context("Failed to parse alias file")?;

        Ok(Self::from_map(map))
    }

    pub fn from_map(map: HashMap<String, Vec<String>>) -> Self {
        let mut lookup = HashMap::new();
        for (display_name, aliases) in map {
            let canonical = normalize_name(&display_name);
            lookup.insert(canonical.clone(), canonical.clone());
            for alias in aliases {
                lookup.insert(normalize_name(&alias), canonical.clone());
            }
        }
        Self { lookup }
    }

    /// Canonicalize a free-text player name from any source.
    ///
    /// Matching is case- and accent-insensitive. Unknown players are valid:
    /// a name with no alias entry comes back normalized but otherwise
    /// unchanged.
    pub fn resolve(&self, raw: &str) -> String {
        let key = normalize_name(raw);
        match self.lookup.get(&key) {
            Some(canonical) => canonical.clone(),
            None => key,
        }
    }
}

/// Matching key for a player name: mojibake repaired, accents folded,
/// trimmed, uppercased.
pub fn normalize_name(raw: &str) -> String {
    fold_accents(&repair_mojibake(raw)).trim().to_uppercase()
}

/// Repair Latin-1/UTF-8 double encoding ("MarÃ­a" -> "María").
///
/// Only attempted when the telltale 'Ã' is present; any byte outside the
/// Latin-1 range aborts the repair and the input is returned as-is.
pub fn repair_mojibake(text: &str) -> String {
    if !text.contains('Ã') {
        return text.to_string();
    }
    let bytes: Option<Vec<u8>> = text.chars().map(|c| u8::try_from(c as u32).ok()).collect();
    match bytes.and_then(|b| String::from_utf8(b).ok()) {
        Some(repaired) => repaired,
        None => text.to_string(),
    }
}

/// Strip common Latin diacritics ("María" -> "Maria") so that differently
/// accented spellings of the same player compare equal.
pub fn fold_accents(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' | 'Į' => 'I',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ø' | 'ō' | 'ő' => 'o',
        'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ç' | 'ć' | 'č' => 'c',
        'Ç' | 'Ć' | 'Č' => 'C',
        'š' | 'ś' | 'ş' => 's',
        'Š' | 'Ś' | 'Ş' => 'S',
        'ž' | 'ź' | 'ż' => 'z',
        'Ž' | 'Ź' | 'Ż' => 'Z',
        'ł' => 'l',
        'Ł' => 'L',
        'đ' => 'd',
        'Đ' => 'D',
        'ğ' => 'g',
        'Ğ' => 'G',
        'ř' => 'r',
        'Ř' => 'R',
        'ť' => 't',
        'Ť' => 'T',
        other => other,
    }
}

/// Display-casing formatter for canonical (uppercase) names. Rendering only;
/// never used for matching.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Marketing names the WTA feed uses for the majors, mapped to the names the
/// dashboard displays.
const TOURNAMENT_NAME_OVERRIDES: &[(&str, &str)] = &[
    ("Grand Slam Paris", "Roland Garros"),
    ("Grand Slam Wimbledon", "Wimbledon"),
    ("Grand Slam New York", "US Open"),
];

// Title-casing artifacts in city names.
const CITY_CASE_FIXES: &[(&str, &str)] = &[("Dc", "DC")];

/// Apply tournament name overrides and city casing fixes, preserving any
/// " Qualifying" suffix.
pub fn fix_display_name(name: &str) -> String {
    const QUAL_SUFFIX: &str = " Qualifying";

    let is_qual = name.ends_with(QUAL_SUFFIX);
    let base = name.strip_suffix(QUAL_SUFFIX).unwrap_or(name);

    let mut fixed = match TOURNAMENT_NAME_OVERRIDES.iter().find(|(from, _)| *from == base) {
        Some((_, to)) => format!("{}{}", to, if is_qual { QUAL_SUFFIX } else { "" }),
        None => name.to_string(),
    };

    for (wrong, right) in CITY_CASE_FIXES {
        fixed = fixed.replace(wrong, right);
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> PlayerAliases {
        let mut map = HashMap::new();
        map.insert(
            "Maria Lourdes Carle".to_string(),
            vec!["M.L. Carle".to_string(), "María L. Carle".to_string()],
        );
        PlayerAliases::from_map(map)
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let aliases = aliases();
        assert_eq!(aliases.resolve("maria lourdes carle"), "MARIA LOURDES CARLE");
        assert_eq!(aliases.resolve("MARIA LOURDES CARLE"), "MARIA LOURDES CARLE");
        assert_eq!(aliases.resolve("M.L. CARLE"), "MARIA LOURDES CARLE");
    }

    #[test]
    fn test_resolve_is_accent_insensitive() {
        let aliases = aliases();
        assert_eq!(aliases.resolve("María L. Carle"), "MARIA LOURDES CARLE");
    }

    #[test]
    fn test_resolve_passes_unknown_names_through() {
        let aliases = aliases();
        assert_eq!(aliases.resolve(" Jane Doe "), "JANE DOE");
    }

    #[test]
    fn test_title_case_capitalizes_after_non_letters() {
        assert_eq!(title_case("MARIA LOURDES CARLE"), "Maria Lourdes Carle");
        assert_eq!(title_case("M.L. CARLE"), "M.L. Carle");
    }

    #[test]
    fn test_fix_display_name_keeps_qualifying_suffix() {
        assert_eq!(fix_display_name("Grand Slam Paris"), "Roland Garros");
        assert_eq!(
            fix_display_name("Grand Slam New York Qualifying"),
            "US Open Qualifying"
        );
        assert_eq!(fix_display_name("WTA 500 Washington Dc"), "WTA 500 Washington DC");
    }

    #[test]
    fn test_repair_mojibake() {
        // "María" read as Latin-1: í (0xC3 0xAD) shows up as Ã + soft hyphen.
        let garbled = format!("Mar{}{}a", '\u{C3}', '\u{AD}');
        assert_eq!(repair_mojibake(&garbled), "María");
        assert_eq!(repair_mojibake("Maria"), "Maria");
    }
}
