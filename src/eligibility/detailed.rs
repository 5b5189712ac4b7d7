//! Detailed Eligibility Result
//!
//! Long-form result shown on the eligibility test page. Unlike the contact
//! message table this variant knows about planned networks, the priority
//! development zone (ZDP), the network operator and its renewable rate, so
//! bodies are assembled from fragments at render time.

use serde::Serialize;

use super::classify::NEAR_MAX_DISTANCE_M;
use super::display::readable_distance;
use super::types::{AddressData, HeatNetworksResponse, HeatingType};

/// Which of the result variants applies to an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailedCase {
    CloseCollectif,
    CloseIndividual,
    CloseFuturCollectif,
    CloseFuturIndividual,
    IntermediateCollectif,
    IntermediateFuturCollectif,
    FarIndividual,
    FarCollectifInZdp,
    FarCollectifOutZdp,
    IrisCollectif,
    IrisIndividual,
}

/// Values interpolated into the body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyContext<'a> {
    /// Already formatted, e.g. "150m"
    pub distance: Option<String>,
    pub in_zdp: bool,
    pub gestionnaire: Option<&'a str>,
    pub taux_enrr: Option<f64>,
    pub city: Option<&'a str>,
}

impl<'a> BodyContext<'a> {
    pub fn new(response: &'a HeatNetworksResponse, city: Option<&'a str>) -> Self {
        Self {
            distance: response.distance.filter(|d| d.is_finite()).map(readable_distance),
            in_zdp: response.in_zdp,
            gestionnaire: response.gestionnaire.as_deref().filter(|g| !g.is_empty()),
            taux_enrr: response.taux_enrr.filter(|t| *t > 0.0),
            city,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedResult {
    pub case: DetailedCase,
    pub eligibility: bool,
    /// Markdown with `::arrow-item[...]` / `::small[...]` directives
    pub body: String,
    /// Closing call to action above the contact form
    pub text: &'static str,
}

// ============================================================================
// Case Selection
// ============================================================================

/// Pick the result variant. `None` without a response or a heating type.
pub fn select_detailed_case(
    heating_type: Option<HeatingType>,
    response: Option<&HeatNetworksResponse>,
) -> Option<DetailedCase> {
    let (heating_type, response) = (heating_type?, response?);
    let collectif = heating_type == HeatingType::Collectif;
    let futur = response.futur_network;

    if response.is_eligible {
        if response.is_based_on_iris {
            return Some(if collectif {
                DetailedCase::IrisCollectif
            } else {
                DetailedCase::IrisIndividual
            });
        }

        // The public lookup payload has no `veryEligibleDistance`; use the near band then
        if let Some(distance) = response.distance.filter(|d| d.is_finite()) {
            let threshold = response.very_eligible_distance.unwrap_or(NEAR_MAX_DISTANCE_M);
            let case = if distance <= threshold {
                match (collectif, futur) {
                    (true, true) => DetailedCase::CloseFuturCollectif,
                    (true, false) => DetailedCase::CloseCollectif,
                    (false, true) => DetailedCase::CloseFuturIndividual,
                    (false, false) => DetailedCase::CloseIndividual,
                }
            } else if collectif {
                if futur {
                    DetailedCase::IntermediateFuturCollectif
                } else {
                    DetailedCase::IntermediateCollectif
                }
            } else {
                DetailedCase::FarIndividual
            };
            return Some(case);
        }

        if response.distance.is_none() && futur {
            return Some(if collectif {
                DetailedCase::CloseFuturCollectif
            } else {
                DetailedCase::CloseFuturIndividual
            });
        }
    }

    let case = match (collectif, response.in_zdp) {
        (true, true) => DetailedCase::FarCollectifInZdp,
        (true, false) => DetailedCase::FarCollectifOutZdp,
        (false, _) => DetailedCase::FarIndividual,
    };
    Some(case)
}

impl DetailedResult {
    /// Select and render the detailed result for an address.
    pub fn for_address(address: &AddressData) -> Option<Self> {
        let response = address.eligibility.as_ref();
        let case = select_detailed_case(address.heating_type, response)?;
        let context = BodyContext::new(response?, address.city());
        Some(case.render(&context))
    }
}

// ============================================================================
// Text Fragments
// ============================================================================

const GOOD_NEWS_TITLE: &str = "### Bonne nouvelle !";

const ZDP_NOTICE: &str = "::arrow-item[**Vous êtes dans le périmètre de développement prioritaire** du réseau. Une obligation de raccordement peut s’appliquer (<a href=\"/ressources/prioritaire#contenu\" target=\"_blank\">en savoir plus</a>).]";

const ZDP_NOTICE_CLOSEST: &str = "::arrow-item[De plus, **vous êtes dans le périmètre de développement prioritaire** du réseau le plus proche. Une obligation de raccordement peut s’appliquer (<a href=\"/ressources/prioritaire#contenu\" target=\"_blank\">en savoir plus</a>).]";

const COLLECTIF_READY: &str = "::arrow-item[Avec un chauffage collectif, **votre immeuble dispose déjà des équipements nécessaires :** il s’agit du cas le plus favorable pour un raccordement !]";

const HEAVY_WORKS: &str = "::arrow-item[Toutefois au vu de votre chauffage actuel, **le raccordement de votre immeuble nécessiterait des travaux conséquents** et coûteux, avec notamment la création d’un réseau interne de distribution au sein de l’immeuble.]";

const INSULATION: &str = "::arrow-item[**L’amélioration de l’isolation thermique de votre immeuble** constitue un autre levier pour réduire votre facture énergétique et limiter votre impact écologique. Pour être accompagné dans vos projets de rénovation énergétique, rendez-vous sur [**France Rénov’**](https://france-renov.gouv.fr/).]";

const OTHER_HEATING: &str = "::arrow-item[Découvrez également d’autres solutions de chauffage **[ici](https://france-renov.gouv.fr/renovation/chauffage)**.]";

const PARIS_NOTE: &str = "::small[A noter: sur Paris, la puissance souscrite doit être d’au moins 100 kW.]";

const TEXT_ESTIMATE: &str = "**France Chaleur Urbaine** est un service gratuit du Ministère de la transition énergétique qui vous permet d’être **mis en relation avec le gestionnaire** du réseau le plus proche de chez vous **afin de bénéficier d’une première estimation tarifaire gratuite et sans engagement.**
**Il vous suffit pour cela de déposer vos coordonnées ci-dessous.**";

const TEXT_FEASIBILITY: &str = "**France Chaleur Urbaine** est un service gratuit du Ministère de la transition énergétique qui vous permet d’être **mis en relation avec le gestionnaire** du réseau le plus proche **afin de vérifier la faisabilité du raccordement et de bénéficier d’une première estimation tarifaire gratuite et sans engagement.**
**Il vous suffit pour cela de déposer vos coordonnées ci-dessous.**";

const TEXT_ZDP: &str = "**France Chaleur Urbaine** est un service gratuit du Ministère de la transition énergétique qui vous permet d’être **mis en relation avec le gestionnaire** du réseau le plus proche de chez vous **afin d’en savoir plus et de bénéficier d’une première estimation tarifaire gratuite et sans engagement.**
**Il vous suffit pour cela de déposer vos coordonnées ci-dessous.**";

const TEXT_UNFAVORABLE: &str = "**France Chaleur Urbaine** est un service gratuit du Ministère de la transition énergétique qui vous permet de découvrir **instantanément** si un réseau passe près de chez vous
Votre situation n’est pas favorable **pour un raccordement, mais si vous souhaitez tout de même en savoir plus ou faire connaître votre demande**, laissez-nous vos coordonnées pour que nous les transmettions à votre collectivité ou au **gestionnaire du réseau le plus proche.**";

const TEXT_CONTRIBUTE: &str = "**France Chaleur Urbaine** est un service gratuit du Ministère de la transition énergétique qui vous permet de découvrir **instantanément** si un réseau passe près de chez vous
**Contribuez au développement des réseaux de chaleur en faisant connaître votre souhait de vous raccorder !** Laissez-nous vos coordonnées pour être tenu informé par le gestionnaire du réseau le plus proche ou par votre collectivité des projets d’extension de réseau ou de création de réseau dans votre quartier.";

fn distance_suffix(context: &BodyContext) -> String {
    context
        .distance
        .as_ref()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default()
}

/// Operator line; future networks use "futur réseau" and "sera de".
fn operator_line(context: &BodyContext, futur: bool) -> Option<String> {
    let gestionnaire = context.gestionnaire?;
    let (network, verb) = if futur { ("futur réseau", "sera") } else { ("réseau", "est") };

    let rate = context
        .taux_enrr
        .map(|t| {
            format!(
                " Le taux d’énergies renouvelables et de récupération du réseau {} de **{}%**.",
                verb, t
            )
        })
        .unwrap_or_default();

    Some(format!(
        "::arrow-item[Le gestionnaire du {} le plus proche est **{}**.{}]",
        network, gestionnaire, rate
    ))
}

fn paris_note(context: &BodyContext) -> Option<&'static str> {
    (context.city == Some("Paris")).then_some(PARIS_NOTE)
}

// ============================================================================
// Rendering
// ============================================================================

impl DetailedCase {
    pub fn eligibility(&self) -> bool {
        matches!(
            self,
            DetailedCase::CloseCollectif | DetailedCase::CloseFuturCollectif | DetailedCase::IrisCollectif
        )
    }

    pub fn text(&self) -> &'static str {
        match self {
            DetailedCase::CloseCollectif
            | DetailedCase::CloseFuturCollectif
            | DetailedCase::IrisCollectif => TEXT_ESTIMATE,
            DetailedCase::IntermediateCollectif | DetailedCase::IntermediateFuturCollectif => TEXT_FEASIBILITY,
            DetailedCase::FarCollectifInZdp => TEXT_ZDP,
            DetailedCase::FarCollectifOutZdp => TEXT_CONTRIBUTE,
            DetailedCase::CloseIndividual
            | DetailedCase::CloseFuturIndividual
            | DetailedCase::FarIndividual
            | DetailedCase::IrisIndividual => TEXT_UNFAVORABLE,
        }
    }

    /// Assemble the Markdown body. Absent fragments are skipped entirely.
    pub fn body(&self, context: &BodyContext) -> String {
        let suffix = distance_suffix(context);
        let zdp = |notice: &'static str| context.in_zdp.then_some(notice);

        let lines: Vec<Option<String>> = match self {
            DetailedCase::CloseCollectif => vec![
                Some(GOOD_NEWS_TITLE.into()),
                Some(format!(
                    "::arrow-item[**Un réseau de chaleur passe à proximité** immédiate de votre adresse{}.]",
                    suffix
                )),
                zdp(ZDP_NOTICE).map(Into::into),
                Some(COLLECTIF_READY.into()),
                operator_line(context, false),
                paris_note(context).map(Into::into),
            ],
            DetailedCase::CloseFuturCollectif => vec![
                Some(GOOD_NEWS_TITLE.into()),
                Some(format!(
                    "::arrow-item[**Un réseau de chaleur passera bientôt à proximité** immédiate de votre adresse{} (réseau prévu ou en construction).]",
                    suffix
                )),
                zdp(ZDP_NOTICE).map(Into::into),
                Some(COLLECTIF_READY.into()),
                operator_line(context, true),
                paris_note(context).map(Into::into),
            ],
            DetailedCase::IntermediateCollectif => vec![
                Some(format!(
                    "::arrow-item[**Il n’existe pour le moment pas de réseau de chaleur** à proximité immédiate de votre adresse, toutefois, le réseau n’est pas très loin{}.]",
                    suffix
                )),
                zdp(ZDP_NOTICE_CLOSEST).map(Into::into),
                Some(COLLECTIF_READY.into()),
                operator_line(context, false),
                paris_note(context).map(Into::into),
            ],
            DetailedCase::IntermediateFuturCollectif => vec![
                Some(format!(
                    "::arrow-item[**Votre immeuble n’est pas à proximité immédiate d’un réseau de chaleur, toutefois un réseau passera prochainement dans les environs**{} (réseau prévu ou en construction).]",
                    suffix
                )),
                zdp(ZDP_NOTICE_CLOSEST).map(Into::into),
                Some(COLLECTIF_READY.into()),
                operator_line(context, true),
                paris_note(context).map(Into::into),
            ],
            DetailedCase::IrisCollectif => vec![
                Some(GOOD_NEWS_TITLE.into()),
                Some("::arrow-item[**Un réseau de chaleur passe à proximité** de votre adresse (tracé non encore disponible sur France Chaleur Urbaine).]".into()),
                zdp(ZDP_NOTICE).map(Into::into),
                Some(COLLECTIF_READY.into()),
                paris_note(context).map(Into::into),
            ],
            DetailedCase::FarCollectifInZdp => vec![
                Some("::arrow-item[**Il n’existe pour le moment pas de réseau de chaleur** à proximité de votre adresse.]".into()),
                Some("::arrow-item[Toutefois, les réseaux de chaleur se développent et **vous êtes dans le périmètre de développement prioritaire du réseau** le plus proche. Une obligation de raccordement peut s’appliquer (<a href=\"/ressources/prioritaire#contenu\" target=\"_blank\">en savoir plus</a>).]".into()),
                operator_line(context, false),
            ],
            DetailedCase::FarCollectifOutZdp => vec![
                Some("::arrow-item[**Il n’existe pour le moment pas de réseau de chaleur** à proximité de votre adresse. Toutefois les réseaux de chaleur se développent !]".into()),
                Some("::arrow-item[Sans attendre, pour réduire votre facture énergétique et limiter votre impact écologique, **pensez à améliorer l’isolation thermique de votre immeuble**. Pour être accompagné dans vos projets de rénovation énergétique, rendez-vous sur [**France Rénov’**](https://france-renov.gouv.fr/).]".into()),
                Some(OTHER_HEATING.into()),
            ],
            DetailedCase::CloseIndividual => vec![
                Some(format!(
                    "::arrow-item[**Votre immeuble est situé à proximité** immédiate d’un réseau de chaleur{}.]",
                    suffix
                )),
                Some(HEAVY_WORKS.into()),
                Some(INSULATION.into()),
                Some(OTHER_HEATING.into()),
            ],
            DetailedCase::CloseFuturIndividual => vec![
                Some(format!(
                    "::arrow-item[**Votre immeuble est situé à proximité** immédiate d’un réseau de chaleur en projet ou en construction{}.]",
                    suffix
                )),
                Some(HEAVY_WORKS.into()),
                Some(INSULATION.into()),
                Some(OTHER_HEATING.into()),
            ],
            DetailedCase::FarIndividual => vec![
                Some(format!(
                    "::arrow-item[**Votre immeuble n'est pas situé à proximité** immédiate d’un réseau de chaleur{}.]",
                    suffix
                )),
                Some("::arrow-item[Au vu de votre chauffage actuel, **le raccordement de votre immeuble nécessiterait des travaux conséquents** et coûteux, avec notamment la création d’un réseau interne de distribution au sein de l’immeuble.]".into()),
                Some(INSULATION.into()),
                Some(OTHER_HEATING.into()),
            ],
            DetailedCase::IrisIndividual => vec![
                Some("::arrow-item[**Votre immeuble est situé à proximité** d’un réseau de chaleur (tracé non encore disponible sur France Chaleur Urbaine).]".into()),
                Some(HEAVY_WORKS.into()),
                Some(INSULATION.into()),
                Some(OTHER_HEATING.into()),
            ],
        };

        lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
    }

    pub fn render(&self, context: &BodyContext) -> DetailedResult {
        DetailedResult {
            case: *self,
            eligibility: self.eligibility(),
            body: self.body(context),
            text: self.text(),
        }
    }
}
