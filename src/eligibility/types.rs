//! Shared data types for eligibility resolution.
//!
//! Data sources:
//! - `HeatNetworksResponse`: JSON returned by the eligibility lookup service
//! - `AddressData`: the address form state (heating type + geocoded address)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::EligibilityError;

/// Heating system of the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatingType {
    /// Building-wide boiler: connection only needs a substation
    Collectif,
    /// One system per dwelling: connection needs an internal distribution network
    Individuel,
}

impl HeatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeatingType::Collectif => "collectif",
            HeatingType::Individuel => "individuel",
        }
    }

    pub fn all() -> &'static [HeatingType] {
        &[HeatingType::Collectif, HeatingType::Individuel]
    }
}

impl fmt::Display for HeatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeatingType {
    type Err = EligibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collectif" => Ok(HeatingType::Collectif),
            "individuel" => Ok(HeatingType::Individuel),
            _ => Err(EligibilityError::UnknownHeatingType(s.to_string())),
        }
    }
}

/// Deserialize a heating type, mapping unknown strings to `None`.
///
/// The form may post any string; an unrecognised one behaves exactly like
/// a missing heating type.
fn lenient_heating_type<'de, D>(deserializer: D) -> Result<Option<HeatingType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Eligibility lookup response for one address.
///
/// Field aliases cover both the internal client shape (`inZDP`, `tauxENRR`)
/// and the public v1 API shape (`inPDP`, `rateENRR`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatNetworksResponse {
    pub is_eligible: bool,
    /// Distance to the closest network in meters (null for IRIS-based answers)
    pub distance: Option<f64>,
    /// Distance under which the address counts as "very eligible"
    pub very_eligible_distance: Option<f64>,
    #[serde(rename = "inZDP", alias = "inPDP")]
    pub in_zdp: bool,
    pub is_based_on_iris: bool,
    /// Closest network is planned or under construction
    pub futur_network: bool,
    /// Network operator name
    pub gestionnaire: Option<String>,
    /// Renewable and recovered energy rate (%)
    #[serde(rename = "tauxENRR", alias = "rateENRR")]
    pub taux_enrr: Option<f64>,
    #[serde(rename = "rateCO2", alias = "co2")]
    pub rate_co2: Option<f64>,
}

/// The three facts the contact message depends on, plus the IRIS marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AddressEligibilityFacts {
    /// Required for lookup; `None` resolves to no message
    pub heating_type: Option<HeatingType>,
    /// Meters to the network; `None` for coarse area-based addresses
    pub distance_to_network: Option<f64>,
    /// Only consulted when the distance is unknown
    pub is_eligible: bool,
    pub is_based_on_iris: bool,
}

impl AddressEligibilityFacts {
    pub fn from_response(heating_type: Option<HeatingType>, response: &HeatNetworksResponse) -> Self {
        Self {
            heating_type,
            distance_to_network: response.distance,
            is_eligible: response.is_eligible,
            is_based_on_iris: response.is_based_on_iris,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeoProperties {
    pub label: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    /// INSEE city code
    pub citycode: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoGeometry {
    /// `[lon, lat]` (GeoJSON order)
    pub coordinates: Option<[f64; 2]>,
}

/// Geocoded address feature as returned by the address autocomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoAddress {
    pub properties: GeoProperties,
    pub geometry: GeoGeometry,
}

/// State of the eligibility form for one address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressData {
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_heating_type")]
    pub heating_type: Option<HeatingType>,
    pub eligibility: Option<HeatNetworksResponse>,
    pub geo_address: Option<GeoAddress>,
}

impl AddressData {
    /// Resolver input; a missing response counts as "unknown distance, not eligible".
    pub fn facts(&self) -> AddressEligibilityFacts {
        match &self.eligibility {
            Some(response) => AddressEligibilityFacts::from_response(self.heating_type, response),
            None => AddressEligibilityFacts {
                heating_type: self.heating_type,
                ..Default::default()
            },
        }
    }

    pub fn coordinates(&self) -> Option<[f64; 2]> {
        self.geo_address.as_ref().and_then(|geo| geo.geometry.coordinates)
    }

    pub fn city(&self) -> Option<&str> {
        self.geo_address.as_ref().and_then(|geo| geo.properties.city.as_deref())
    }

    pub fn postcode(&self) -> Option<&str> {
        self.geo_address.as_ref().and_then(|geo| geo.properties.postcode.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heating_type_from_str() {
        assert_eq!("collectif".parse::<HeatingType>().unwrap(), HeatingType::Collectif);
        assert_eq!(" Individuel ".parse::<HeatingType>().unwrap(), HeatingType::Individuel);
        assert!(matches!(
            "electrique".parse::<HeatingType>(),
            Err(EligibilityError::UnknownHeatingType(_))
        ));
    }

    #[test]
    fn test_response_accepts_both_field_names() {
        let internal: HeatNetworksResponse = serde_json::from_str(
            r#"{"isEligible": true, "distance": 42, "inZDP": true, "tauxENRR": 61}"#,
        )
        .unwrap();
        let public: HeatNetworksResponse = serde_json::from_str(
            r#"{"isEligible": true, "distance": 42, "inPDP": true, "rateENRR": 61}"#,
        )
        .unwrap();

        assert_eq!(internal, public);
        assert!(internal.in_zdp);
        assert_eq!(internal.taux_enrr, Some(61.0));
        assert!(!internal.futur_network);
    }

    #[test]
    fn test_unknown_heating_type_deserializes_to_none() {
        let data: AddressData =
            serde_json::from_str(r#"{"address": "1 rue X", "heatingType": "poele"}"#).unwrap();
        assert_eq!(data.heating_type, None);

        let data: AddressData = serde_json::from_str(r#"{"heatingType": "collectif"}"#).unwrap();
        assert_eq!(data.heating_type, Some(HeatingType::Collectif));
    }

    #[test]
    fn test_facts_without_response() {
        let data = AddressData {
            heating_type: Some(HeatingType::Collectif),
            ..Default::default()
        };
        let facts = data.facts();
        assert_eq!(facts.distance_to_network, None);
        assert!(!facts.is_eligible);
    }

    #[test]
    fn test_geo_accessors() {
        let data: AddressData = serde_json::from_str(
            r#"{
                "geoAddress": {
                    "properties": {"city": "Plaisir", "postcode": "78370"},
                    "geometry": {"coordinates": [1.95, 48.82]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(data.city(), Some("Plaisir"));
        assert_eq!(data.postcode(), Some("78370"));
        assert_eq!(data.coordinates(), Some([1.95, 48.82]));
    }
}
