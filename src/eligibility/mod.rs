//! Eligibility resolution.
//!
//! - `types`: upstream lookup payload, form state, resolver input
//! - `classify`: distance bands (≤100 m, ≤200 m, beyond, area-level)
//! - `messages`: contact message table keyed by band × heating type
//! - `detailed`: long-form result with planned networks, ZDP and operator
//! - `display`: readable distances, map card verdict, map links
//! - `territory`: city code lists

pub mod classify;
pub mod detailed;
pub mod display;
pub mod messages;
pub mod territory;
pub mod types;

pub use classify::{classify_distance_band, DistanceBand, MID_MAX_DISTANCE_M, NEAR_MAX_DISTANCE_M};
pub use detailed::{select_detailed_case, BodyContext, DetailedCase, DetailedResult};
pub use display::{card_distance_line, card_summary, map_link, readable_distance};
pub use messages::{
    contact_message, resolve_contact_message, resolve_contact_message_str, HeaderStyle, MessageBundle,
};
pub use territory::{is_bordeaux_metropole, BORDEAUX_METROPOLE_CITY_CODES};
pub use types::{
    AddressData, AddressEligibilityFacts, GeoAddress, GeoGeometry, GeoProperties, HeatNetworksResponse,
    HeatingType,
};
