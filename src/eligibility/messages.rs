//! Contact Message Table
//!
//! Canned message bundles shown above the contact form, keyed by
//! (DistanceBand × HeatingType). The table is an exhaustive `match`, so a
//! missing combination is a compile error rather than an empty card.
//!
//! Text is Markdown; see `crate::render` for HTML output.

use serde::Serialize;

use super::classify::{classify_distance_band, DistanceBand};
use super::types::{AddressEligibilityFacts, HeatingType};

/// Typographic size of the bundle header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    Large,
    Small,
}

/// Static message content for one (band, heating type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBundle {
    pub header: &'static str,
    pub body: &'static str,
    /// Short variant used by the compact map card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_light: Option<&'static str>,
    /// Forwarded to the lead payload as `computedEligibility`
    pub eligibility: bool,
    pub header_style: HeaderStyle,
}

// ============================================================================
// MESSAGE TEXT
// ============================================================================

const NEAR_COLLECTIF_HEADER: &str =
    "**Bonne nouvelle ! Un réseau de chaleur passe à proximité de votre adresse.**";

const NOT_FAR_COLLECTIF_HEADER: &str = "**Votre immeuble n’est pas à proximité immédiate d’un réseau de chaleur, toutefois le réseau n’est pas très loin.**";

const NO_NETWORK_HEADER: &str = "Il n’existe pour le moment pas de réseau de chaleur à proximité de votre adresse, **toutefois les réseaux de chaleur se développent !**";

const NEAR_INDIVIDUEL_HEADER: &str = "Votre immeuble est situé à proximité immédiate d’un réseau de chaleur, toutefois **au vu de votre chauffage actuel, le raccordement de votre immeuble nécessiterait des travaux conséquents et coûteux**, avec notamment la création d’un réseau interne de distribution au sein de l’immeuble";

const NOT_NEAR_INDIVIDUEL_HEADER: &str = "Votre immeuble n’est pas à proximité immédiate d’un réseau de chaleur et **au vu de votre mode de chauffage actuel, le raccordement de votre immeuble nécessiterait des travaux conséquents et coûteux,** avec notamment la création d’un réseau interne de distribution au sein de l’immeuble.";

const COLLECTIF_FAVORABLE_BODY: &str = "Au vu de votre chauffage actuel, votre immeuble dispose déjà des équipements nécessaires : **il s’agit du cas le plus favorable pour un raccordement !**

**Laissez-nous vos coordonnées** pour être recontacté par le gestionnaire du réseau le plus proche afin de bénéficier d’une **première estimation tarifaire gratuite et sans engagement.**";

const DEVELOPING_NETWORKS_BODY: &str = "**Contribuez au développement des réseaux de chaleur** en faisant connaître votre souhait de vous raccorder ! **Laissez-nous vos coordonnées pour être tenu informé** par le gestionnaire du réseau le plus proche ou par votre collectivité des projets d’extension de réseau ou de création de réseau dans votre quartier.

Sans attendre, pour réduire votre facture énergétique et limiter votre impact écologique, pensez à améliorer l’isolation thermique de votre immeuble. Pour être accompagné dans vos projets de rénovation énergétique, rendez-vous sur [France Rénov’](https://france-renov.gouv.fr/)";

const INDIVIDUEL_BODY: &str = "Si vous souhaitez tout de même en savoir plus, **laissez-nous vos coordonnées** pour être recontacté par le gestionnaire du réseau le plus proche.

L’amélioration de l’isolation thermique de votre immeuble constitue un autre levier pour réduire votre facture énergétique et limiter votre impact écologique. Pour être accompagné dans vos projets de rénovation énergétique, rendez-vous sur [France Rénov’](https://france-renov.gouv.fr/)

Découvrez également d’autres solutions de chauffage [ici](https://france-renov.gouv.fr/renovation/chauffage)";

const INDIVIDUEL_BODY_LIGHT: &str = "Au vu de votre mode de chauffage actuel, le raccordement de votre immeuble nécessiterait des travaux conséquents et coûteux, avec notamment la création d’un réseau interne de distribution au sein de l’immeuble";

// ============================================================================
// BUNDLES
// ============================================================================

static NEAR_COLLECTIF: MessageBundle = MessageBundle {
    header: NEAR_COLLECTIF_HEADER,
    body: COLLECTIF_FAVORABLE_BODY,
    body_light: None,
    eligibility: true,
    header_style: HeaderStyle::Large,
};

static NEAR_INDIVIDUEL: MessageBundle = MessageBundle {
    header: NEAR_INDIVIDUEL_HEADER,
    body: INDIVIDUEL_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Small,
};

static MID_COLLECTIF: MessageBundle = MessageBundle {
    header: NOT_FAR_COLLECTIF_HEADER,
    body: COLLECTIF_FAVORABLE_BODY,
    body_light: None,
    eligibility: true,
    header_style: HeaderStyle::Large,
};

static MID_INDIVIDUEL: MessageBundle = MessageBundle {
    header: NOT_NEAR_INDIVIDUEL_HEADER,
    body: INDIVIDUEL_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Small,
};

static FAR_COLLECTIF: MessageBundle = MessageBundle {
    header: NO_NETWORK_HEADER,
    body: DEVELOPING_NETWORKS_BODY,
    body_light: None,
    eligibility: false,
    header_style: HeaderStyle::Large,
};

static FAR_INDIVIDUEL: MessageBundle = MessageBundle {
    header: NOT_NEAR_INDIVIDUEL_HEADER,
    body: INDIVIDUEL_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Small,
};

static PROVINCE_ELIGIBLE_COLLECTIF: MessageBundle = MessageBundle {
    header: NOT_FAR_COLLECTIF_HEADER,
    body: COLLECTIF_FAVORABLE_BODY,
    body_light: None,
    eligibility: true,
    header_style: HeaderStyle::Large,
};

static PROVINCE_ELIGIBLE_INDIVIDUEL: MessageBundle = MessageBundle {
    header: NOT_NEAR_INDIVIDUEL_HEADER,
    body: INDIVIDUEL_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Small,
};

// Carries the individual light body even for collective heating
static PROVINCE_INELIGIBLE_COLLECTIF: MessageBundle = MessageBundle {
    header: NO_NETWORK_HEADER,
    body: DEVELOPING_NETWORKS_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Large,
};

static PROVINCE_INELIGIBLE_INDIVIDUEL: MessageBundle = MessageBundle {
    header: NOT_NEAR_INDIVIDUEL_HEADER,
    body: INDIVIDUEL_BODY,
    body_light: Some(INDIVIDUEL_BODY_LIGHT),
    eligibility: false,
    header_style: HeaderStyle::Small,
};

// ============================================================================
// LOOKUP FUNCTIONS
// ============================================================================

/// Message bundle for a (band, heating type) pair. Total over both enums.
pub fn contact_message(band: DistanceBand, heating_type: HeatingType) -> &'static MessageBundle {
    use DistanceBand::*;
    use HeatingType::*;

    match (band, heating_type) {
        (Near, Collectif) => &NEAR_COLLECTIF,
        (Near, Individuel) => &NEAR_INDIVIDUEL,
        (Mid, Collectif) => &MID_COLLECTIF,
        (Mid, Individuel) => &MID_INDIVIDUEL,
        (Far, Collectif) => &FAR_COLLECTIF,
        (Far, Individuel) => &FAR_INDIVIDUEL,
        (ProvinceEligible, Collectif) => &PROVINCE_ELIGIBLE_COLLECTIF,
        (ProvinceEligible, Individuel) => &PROVINCE_ELIGIBLE_INDIVIDUEL,
        (ProvinceIneligible, Collectif) => &PROVINCE_INELIGIBLE_COLLECTIF,
        (ProvinceIneligible, Individuel) => &PROVINCE_INELIGIBLE_INDIVIDUEL,
    }
}

/// Resolve the contact message for an address.
///
/// Returns `None` when the heating type is absent: the caller renders
/// nothing. This is the only way resolution can come back empty.
pub fn resolve_contact_message(facts: &AddressEligibilityFacts) -> Option<&'static MessageBundle> {
    let Some(heating_type) = facts.heating_type else {
        tracing::debug!("No heating type, no contact message");
        return None;
    };

    let band = classify_distance_band(facts.distance_to_network, facts.is_eligible);
    Some(contact_message(band, heating_type))
}

/// Resolve from a raw heating type string (e.g. a query parameter).
///
/// Unrecognised strings soft-fail to `None` like a missing heating type.
pub fn resolve_contact_message_str(
    heating_type: &str,
    distance_to_network: Option<f64>,
    is_eligible: bool,
) -> Option<&'static MessageBundle> {
    let heating_type = match heating_type.parse::<HeatingType>() {
        Ok(h) => h,
        Err(e) => {
            tracing::debug!("{}; no contact message", e);
            return None;
        }
    };

    resolve_contact_message(&AddressEligibilityFacts {
        heating_type: Some(heating_type),
        distance_to_network,
        is_eligible,
        is_based_on_iris: distance_to_network.is_none(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(heating_type: HeatingType, distance: Option<f64>, is_eligible: bool) -> AddressEligibilityFacts {
        AddressEligibilityFacts {
            heating_type: Some(heating_type),
            distance_to_network: distance,
            is_eligible,
            is_based_on_iris: distance.is_none(),
        }
    }

    #[test]
    fn test_every_pair_has_content() {
        for band in DistanceBand::all() {
            for heating in HeatingType::all() {
                let bundle = contact_message(*band, *heating);
                assert!(!bundle.header.is_empty(), "{:?}/{:?} has no header", band, heating);
                assert!(!bundle.body.is_empty(), "{:?}/{:?} has no body", band, heating);
            }
        }
    }

    #[test]
    fn test_only_collectif_can_be_eligible() {
        for band in DistanceBand::all() {
            assert!(!contact_message(*band, HeatingType::Individuel).eligibility);
        }
        let eligible: Vec<_> = DistanceBand::all()
            .iter()
            .filter(|b| contact_message(**b, HeatingType::Collectif).eligibility)
            .copied()
            .collect();
        assert_eq!(
            eligible,
            vec![DistanceBand::Near, DistanceBand::Mid, DistanceBand::ProvinceEligible]
        );
    }

    #[test]
    fn test_individuel_bundles_are_small_with_light_body() {
        for band in DistanceBand::all() {
            let bundle = contact_message(*band, HeatingType::Individuel);
            assert_eq!(bundle.header_style, HeaderStyle::Small);
            assert!(bundle.body_light.is_some());
        }
    }

    #[test]
    fn test_resolve_near_collectif() {
        let bundle = resolve_contact_message(&facts(HeatingType::Collectif, Some(50.0), false)).unwrap();
        assert!(bundle.eligibility);
        assert!(bundle.header.contains("Bonne nouvelle"));
        assert_eq!(bundle.header_style, HeaderStyle::Large);
    }

    #[test]
    fn test_resolve_returns_same_reference() {
        let input = facts(HeatingType::Individuel, Some(150.0), true);
        let first = resolve_contact_message(&input).unwrap();
        let second = resolve_contact_message(&input).unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_missing_heating_type_is_empty() {
        let input = AddressEligibilityFacts {
            heating_type: None,
            distance_to_network: Some(10.0),
            is_eligible: true,
            is_based_on_iris: false,
        };
        assert!(resolve_contact_message(&input).is_none());
    }

    #[test]
    fn test_resolve_from_string() {
        assert!(resolve_contact_message_str("chauffage-au-bois", Some(10.0), true).is_none());
        assert!(resolve_contact_message_str("", None, true).is_none());

        let bundle = resolve_contact_message_str("collectif", None, true).unwrap();
        assert!(std::ptr::eq(
            bundle,
            contact_message(DistanceBand::ProvinceEligible, HeatingType::Collectif)
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(contact_message(DistanceBand::Far, HeatingType::Collectif)).unwrap();
        assert_eq!(json["eligibility"], false);
        assert_eq!(json["headerStyle"], "large");
        assert!(json.get("bodyLight").is_none());

        let json = serde_json::to_value(contact_message(DistanceBand::Far, HeatingType::Individuel)).unwrap();
        assert_eq!(json["headerStyle"], "small");
        assert!(json["bodyLight"].is_string());
    }
}
