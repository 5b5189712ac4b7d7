//! Display helpers for eligibility results: readable distances, the one-line
//! map card verdict and links to the network map.

use super::classify::DistanceBand;
use super::types::AddressData;
use crate::config::AppConfig;

/// Format a distance in meters the way the site shows it.
///
/// - below 1 m: `"< 1m"`
/// - 1000 m and above: kilometers, e.g. `"1.5km"`
/// - otherwise: `"150m"`
pub fn readable_distance(distance_m: f64) -> String {
    if distance_m < 1.0 {
        "< 1m".to_string()
    } else if distance_m >= 1000.0 {
        format!("{}km", distance_m / 1000.0)
    } else {
        format!("{}m", distance_m)
    }
}

pub const CARD_GOOD_NEWS: &str =
    "Bonne nouvelle ! Un réseau de chaleur passe à proximité de cette adresse.";
pub const CARD_NOT_FAR: &str = "Votre immeuble n’est pas à proximité immédiate d’un réseau de chaleur, toutefois le réseau n’est pas très loin.";
pub const CARD_NO_NETWORK: &str = "D'après nos données, il n'y a pour le moment pas de réseau de chaleur à proximité de cette adresse.";

/// One-line verdict for the map search card.
///
/// Measured bands also require the lookup to have flagged the address as
/// eligible; an area-level eligible answer counts as good news.
pub fn card_summary(band: DistanceBand, is_eligible: bool) -> &'static str {
    match (band, is_eligible) {
        (DistanceBand::Near, true) | (DistanceBand::ProvinceEligible, _) => CARD_GOOD_NEWS,
        (DistanceBand::Mid, true) => CARD_NOT_FAR,
        _ => CARD_NO_NETWORK,
    }
}

/// "Le réseau passe à …" line, only for eligible addresses with a known distance.
pub fn card_distance_line(distance: Option<f64>, is_eligible: bool) -> Option<String> {
    match distance {
        Some(d) if is_eligible && d.is_finite() => {
            Some(format!("Le réseau passe à {}", readable_distance(d)))
        }
        _ => None,
    }
}

/// Link to a map centred on the address.
///
/// IRIS-based addresses have no traced network on the site map, so they go
/// to the external regional map, which expects `lat,lon` instead of `lon,lat`.
pub fn map_link(address: &AddressData, config: &AppConfig) -> Option<String> {
    let [lon, lat] = address.coordinates()?;
    let is_based_on_iris = address
        .eligibility
        .as_ref()
        .map(|e| e.is_based_on_iris)
        .unwrap_or(false);

    let link = if is_based_on_iris {
        format!("{}?coord={},{}&zoom={}", config.iris_map_url, lat, lon, config.map_zoom)
    } else {
        format!("{}?coord={},{}&zoom={}", config.map_url, lon, lat, config.map_zoom)
    };
    Some(link)
}
