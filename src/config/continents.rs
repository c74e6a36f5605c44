/// Continent bucket used for the calendar grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continent {
    SouthAmerica,
    NorthCentralAmerica,
    Europe,
    Africa,
    Asia,
    Oceania,
}

impl Continent {
    /// Display order in the weekly grid.
    pub const ALL: [Continent; 6] = [
        Continent::SouthAmerica,
        Continent::NorthCentralAmerica,
        Continent::Europe,
        Continent::Africa,
        Continent::Asia,
        Continent::Oceania,
    ];

    /// Stable key used in snapshot files.
    pub fn key(&self) -> &'static str {
        match self {
            Continent::SouthAmerica => "south_america",
            Continent::NorthCentralAmerica => "north_central_america",
            Continent::Europe => "europe",
            Continent::Africa => "africa",
            Continent::Asia => "asia",
            Continent::Oceania => "oceania",
        }
    }

    /// Short human label for column headers.
    pub fn label(&self) -> &'static str {
        match self {
            Continent::SouthAmerica => "S America",
            Continent::NorthCentralAmerica => "N/C America",
            Continent::Europe => "Europe",
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Oceania => "Oceania",
        }
    }

    /// Map an IOC country code to its continent.
    ///
    /// Unknown or empty codes default to [`Continent::Europe`]: the feeds are
    /// dominated by European events and an unknown host code is far more
    /// likely to be an unlisted European nation than anything else.
    pub fn from_country(code: &str) -> Continent {
        match code.trim().to_uppercase().as_str() {
            // South America
            "BRA" | "ARG" | "CHI" | "COL" | "PER" | "ECU" | "URU" | "VEN" | "BOL" | "PAR"
            | "GUY" | "SUR" => Continent::SouthAmerica,
            // North and Central America
            "USA" | "US" | "CAN" | "MEX" | "CRC" | "DOM" | "PUR" | "GUA" | "HON" | "ESA"
            | "NCA" | "PAN" | "JAM" | "TTO" | "HAI" | "BAH" | "BAR" | "CUB" | "BER" | "AHO"
            | "ARU" => Continent::NorthCentralAmerica,
            // Asia
            "CHN" | "JPN" | "KOR" | "IND" | "THA" | "MAS" | "INA" | "PHI" | "SGP" | "VIE"
            | "TPE" | "HKG" | "MAC" | "KAZ" | "UZB" | "QAT" | "UAE" | "KSA" | "BRN" | "KUW"
            | "OMA" | "JOR" | "LBN" | "IRQ" | "IRI" | "PAK" | "SRI" | "BAN" | "NEP" | "MGL"
            | "MYA" | "CAM" | "LAO" => Continent::Asia,
            // Oceania
            "AUS" | "NZL" | "FIJ" | "SAM" | "PNG" | "GUM" => Continent::Oceania,
            // Africa
            "RSA" | "EGY" | "MAR" | "TUN" | "ALG" | "NGR" | "KEN" | "GHA" | "CIV" | "SEN"
            | "CMR" | "UGA" | "ETH" | "TAN" | "ZIM" | "ZAM" | "MOZ" | "MAD" | "BEN" | "TOG"
            | "GAB" | "COD" | "RWA" | "BUR" | "MLI" | "NIG" | "BOT" | "NAM" | "MRI" | "LBA" => {
                Continent::Africa
            }
            // Europe is the explicit default for unknown codes.
            _ => Continent::Europe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Continent::from_country("ARG"), Continent::SouthAmerica);
        assert_eq!(Continent::from_country("usa"), Continent::NorthCentralAmerica);
        assert_eq!(Continent::from_country("JPN"), Continent::Asia);
        assert_eq!(Continent::from_country("AUS"), Continent::Oceania);
        assert_eq!(Continent::from_country("RSA"), Continent::Africa);
        assert_eq!(Continent::from_country("FRA"), Continent::Europe);
    }

    #[test]
    fn test_unknown_code_defaults_to_europe() {
        assert_eq!(Continent::from_country("XYZ"), Continent::Europe);
        assert_eq!(Continent::from_country(""), Continent::Europe);
    }
}
