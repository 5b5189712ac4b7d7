//! Territory lists used by the eligibility pages.

/// INSEE codes of the Bordeaux Métropole member cities.
pub static BORDEAUX_METROPOLE_CITY_CODES: &[&str] = &[
    "33003", "33004", "33013", "33032", "33039", "33056", "33063", "33065", "33069", "33075",
    "33096", "33119", "33162", "33167", "33192", "33200", "33249", "33273", "33281", "33312",
    "33318", "33376", "33434", "33449", "33487", "33519", "33522", "33550",
];

pub fn is_bordeaux_metropole(city_code: &str) -> bool {
    let city_code = city_code.trim();
    BORDEAUX_METROPOLE_CITY_CODES.iter().any(|code| *code == city_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bordeaux_metropole() {
        assert_eq!(BORDEAUX_METROPOLE_CITY_CODES.len(), 28);
        assert!(is_bordeaux_metropole("33063")); // Bordeaux
        assert!(is_bordeaux_metropole(" 33550 "));
        assert!(!is_bordeaux_metropole("33000")); // postcode, not INSEE code
        assert!(!is_bordeaux_metropole("75056"));
    }
}
