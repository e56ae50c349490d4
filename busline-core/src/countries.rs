//! Static reference table used for phone validation. Each entry carries the
//! mobile operator prefixes a local subscriber number may start with.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 code.
    pub code: &'static str,
    pub dial_code: &'static str,
    pub operator_codes: &'static [&'static str],
}

pub static COUNTRIES: &[Country] = &[
    Country {
        name: "Belarus",
        code: "BY",
        dial_code: "+375",
        operator_codes: &["29", "33", "44", "25"],
    },
    Country {
        name: "Russia",
        code: "RU",
        dial_code: "+7",
        operator_codes: &["900", "901", "902", "903", "904", "905", "906", "9"],
    },
    Country {
        name: "Ukraine",
        code: "UA",
        dial_code: "+380",
        operator_codes: &["50", "63", "66", "67", "68", "93", "95", "96", "97", "98", "99"],
    },
    Country {
        name: "Lithuania",
        code: "LT",
        dial_code: "+370",
        operator_codes: &["6"],
    },
    Country {
        name: "Poland",
        code: "PL",
        dial_code: "+48",
        operator_codes: &["5", "6", "7", "8"],
    },
];

#[must_use]
pub fn by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_iso_code() {
        let by = by_code("BY").unwrap();
        assert_eq!(by.dial_code, "+375");
        assert!(by.operator_codes.contains(&"29"));
        assert!(by_code("DE").is_none());
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in COUNTRIES.iter().enumerate() {
            for b in &COUNTRIES[i + 1..] {
                assert_ne!(a.code, b.code);
            }
        }
    }
}
