//! Supported places and their upstream region codes.

use std::{collections::HashMap, sync::LazyLock};

use crate::error::WeatherError;

/// Place name paired with the code the forecast service expects as `city`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub place: &'static str,
    pub code: &'static str,
}

const fn region(place: &'static str, code: &'static str) -> Region {
    Region { place, code }
}

/// Every supported place, north to south.
pub static REGIONS: &[Region] = &[
    region("Hokkaido", "016010"),
    region("Aomori", "020010"),
    region("Miyagi", "040010"),
    region("Akita", "050010"),
    region("Yamagata", "060010"),
    region("Fukushima", "070010"),
    region("Ibaraki", "080010"),
    region("Tochigi", "090010"),
    region("Gunma", "100010"),
    region("Saitama", "110010"),
    region("Chiba", "120010"),
    region("Tokyo", "130010"),
    region("Kanagawa", "140010"),
    region("Niigata", "150010"),
    region("Toyama", "160010"),
    region("Ishikawa", "170010"),
    region("Fukui", "180010"),
    region("Yamanashi", "190010"),
    region("Nagano", "200010"),
    region("Gifu", "210010"),
    region("Shizuoka", "220010"),
    region("Aichi", "230010"),
    region("Mie", "240010"),
    region("Shiga", "250010"),
    region("Kyoto", "260010"),
    region("Osaka", "270000"),
    region("Hyogo", "280010"),
    region("Nara", "290010"),
    region("Wakayama", "300010"),
    region("Tottori", "310010"),
    region("Shimane", "320010"),
    region("Okayama", "330010"),
    region("Hiroshima", "340010"),
    region("Yamaguchi", "350010"),
    region("Tokushima", "360010"),
    region("Kagawa", "370000"),
    region("Ehime", "380010"),
    region("Kochi", "390010"),
    region("Fukuoka", "400010"),
    region("Saga", "410010"),
    region("Nagasaki", "420010"),
    region("Kumamoto", "430010"),
    region("Oita", "440010"),
    region("Miyazaki", "450010"),
    region("Kagoshima", "460010"),
    region("Okinawa", "471010"),
];

static BY_PLACE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| REGIONS.iter().map(|r| (r.place, r.code)).collect());

/// Resolve a place name to its region code. Matching is exact and case-sensitive.
pub fn lookup(place: &str) -> Result<&'static str, WeatherError> {
    BY_PLACE
        .get(place)
        .copied()
        .ok_or_else(|| WeatherError::UnknownPlace(place.to_string()))
}

pub fn is_known(place: &str) -> bool {
    BY_PLACE.contains_key(place)
}

/// Place names in table order.
pub fn places() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|r| r.place)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves_to_its_code() {
        for r in REGIONS {
            assert_eq!(lookup(r.place).unwrap(), r.code, "place {}", r.place);
        }
    }

    #[test]
    fn documented_codes() {
        assert_eq!(lookup("Hokkaido").unwrap(), "016010");
        assert_eq!(lookup("Tokyo").unwrap(), "130010");
        assert_eq!(lookup("Osaka").unwrap(), "270000");
        assert_eq!(lookup("Kagawa").unwrap(), "370000");
        assert_eq!(lookup("Okinawa").unwrap(), "471010");
    }

    #[test]
    fn table_has_unique_places_and_six_digit_codes() {
        assert_eq!(REGIONS.len(), 46);
        assert_eq!(BY_PLACE.len(), REGIONS.len());
        for r in REGIONS {
            assert_eq!(r.code.len(), 6);
            assert!(r.code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn unknown_places_are_rejected() {
        for place in ["California", "", "tokyo", "TOKYO", " Tokyo", "Tokyo "] {
            let err = lookup(place).unwrap_err();
            assert!(matches!(err, WeatherError::UnknownPlace(ref p) if p == place));
            assert!(!is_known(place));
        }
    }

    #[test]
    fn places_follow_table_order() {
        let names: Vec<_> = places().collect();
        assert_eq!(names.first(), Some(&"Hokkaido"));
        assert_eq!(names.last(), Some(&"Okinawa"));
        assert_eq!(names.len(), REGIONS.len());
    }
}
