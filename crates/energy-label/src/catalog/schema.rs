use super::normalizer::normalize_header;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical logical columns of a vehicle specification export. Physical
/// headers vary between spreadsheet revisions; `field_for_header` resolves
/// whichever convention a file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Manufacturer,
    ModelRange,
    Description,
    Co2,
    CombinedMpg,
    ElectricRange,
    KwhPer100Km,
    PowerBhp,
    LuggageCapacity,
    NcapRating,
    ZeroToSixtyTwo,
    NetBasicPrice,
    TotalCostOfOwnership,
    P11dValue,
    BikPercent,
}

impl Field {
    /// Display header used when writing a record back out.
    pub const fn header(self) -> &'static str {
        match self {
            Field::Manufacturer => "Manufacturer",
            Field::ModelRange => "Model Range",
            Field::Description => "Description",
            Field::Co2 => "CO2 g/KM",
            Field::CombinedMpg => "WLTP MPG (Comb)",
            Field::ElectricRange => "WLTP Electric Range (miles)",
            Field::KwhPer100Km => "kWh/100km",
            Field::PowerBhp => "Power (bhp)",
            Field::LuggageCapacity => "Luggage Capacity (L)",
            Field::NcapRating => "NCAP Rating",
            Field::ZeroToSixtyTwo => "0-62 mph (secs)",
            Field::NetBasicPrice => "Net Basic Price",
            Field::TotalCostOfOwnership => "TCO",
            Field::P11dValue => "P11D Basic",
            Field::BikPercent => "BIK% Year 1",
        }
    }

    pub const ALL: [Field; 15] = [
        Field::Manufacturer,
        Field::ModelRange,
        Field::Description,
        Field::Co2,
        Field::CombinedMpg,
        Field::ElectricRange,
        Field::KwhPer100Km,
        Field::PowerBhp,
        Field::LuggageCapacity,
        Field::NcapRating,
        Field::ZeroToSixtyTwo,
        Field::NetBasicPrice,
        Field::TotalCostOfOwnership,
        Field::P11dValue,
        Field::BikPercent,
    ];
}

static HEADER_MAP: OnceLock<HashMap<String, Field>> = OnceLock::new();

/// Resolve a physical header to its canonical field, if recognized.
pub(crate) fn field_for_header(header: &str) -> Option<Field> {
    header_map().get(&normalize_header(header)).copied()
}

fn header_map() -> &'static HashMap<String, Field> {
    HEADER_MAP.get_or_init(|| {
        // Both observed conventions: spaced display names and snake-style
        // normalized names. Most collapse to the same key under
        // normalize_header; the rest are listed explicitly.
        const ALIASES: &[(&str, Field)] = &[
            ("Manufacturer", Field::Manufacturer),
            ("Make", Field::Manufacturer),
            ("Model Range", Field::ModelRange),
            ("Model", Field::ModelRange),
            ("Description", Field::Description),
            ("Derivative", Field::Description),
            ("CO2 g/KM", Field::Co2),
            ("CO2 (g/km)", Field::Co2),
            ("co2_gkm", Field::Co2),
            ("WLTP MPG (Comb)", Field::CombinedMpg),
            ("combined_mpg", Field::CombinedMpg),
            ("WLTP Electric Range (miles)", Field::ElectricRange),
            ("electric_range_miles", Field::ElectricRange),
            ("kWh/100km", Field::KwhPer100Km),
            ("kwh_per_100km", Field::KwhPer100Km),
            ("Power (bhp)", Field::PowerBhp),
            ("Luggage Capacity (L)", Field::LuggageCapacity),
            ("NCAP Rating", Field::NcapRating),
            ("ncap", Field::NcapRating),
            ("0-62 mph (secs)", Field::ZeroToSixtyTwo),
            ("zero_to_sixty_two_secs", Field::ZeroToSixtyTwo),
            ("Net Basic Price", Field::NetBasicPrice),
            ("TCO", Field::TotalCostOfOwnership),
            ("Total Cost of Ownership", Field::TotalCostOfOwnership),
            ("P11D Basic", Field::P11dValue),
            ("P11d Basic", Field::P11dValue),
            ("P11D", Field::P11dValue),
            ("Taxable Value", Field::P11dValue),
            ("BIK% Year 1", Field::BikPercent),
            ("bik_percent_year_1", Field::BikPercent),
            ("bik_percent", Field::BikPercent),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len());
        for (alias, field) in ALIASES {
            map.insert(normalize_header(alias), *field);
        }
        map
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_spaced_display_headers() {
        assert_eq!(field_for_header("Manufacturer"), Some(Field::Manufacturer));
        assert_eq!(field_for_header("Model Range"), Some(Field::ModelRange));
        assert_eq!(field_for_header("CO2 g/KM"), Some(Field::Co2));
        assert_eq!(
            field_for_header("WLTP Electric Range (miles)"),
            Some(Field::ElectricRange)
        );
        assert_eq!(field_for_header("BIK% Year 1"), Some(Field::BikPercent));
        assert_eq!(field_for_header("P11d Basic"), Some(Field::P11dValue));
    }

    #[test]
    fn resolves_snake_style_headers() {
        assert_eq!(field_for_header("manufacturer"), Some(Field::Manufacturer));
        assert_eq!(field_for_header("model_range"), Some(Field::ModelRange));
        assert_eq!(field_for_header("co2_g_km"), Some(Field::Co2));
        assert_eq!(field_for_header("wltp_mpg_comb"), Some(Field::CombinedMpg));
        assert_eq!(field_for_header("net_basic_price"), Some(Field::NetBasicPrice));
        assert_eq!(field_for_header("tco"), Some(Field::TotalCostOfOwnership));
    }

    #[test]
    fn unknown_headers_are_ignored() {
        assert_eq!(field_for_header("Dealer Notes"), None);
        assert_eq!(field_for_header(""), None);
    }
}
