//! Sought addresses on the network map.
//!
//! The list of addresses a visitor searched on the map, persisted client-side
//! between visits. It is an owned value handed to whoever needs it by
//! reference; callers decide where it is stored (`STORAGE_KEY` is the key the
//! site uses).
//!
//! Cards are displayed newest first, so "display index" below counts from the
//! most recently added entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::classify::classify_distance_band;
use crate::eligibility::display::{card_distance_line, card_summary};
use crate::eligibility::types::HeatNetworksResponse;
use crate::error::Result;

pub const STORAGE_KEY: &str = "mapSoughtAddresses";

/// Stable id of an address on the map, derived from its coordinates.
pub fn address_id(coordinates: [f64; 2]) -> String {
    format!("{}--{}", coordinates[0], coordinates[1])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAddress {
    pub id: String,
    /// `[lon, lat]`
    pub coordinates: [f64; 2],
    pub address: String,
    #[serde(default)]
    pub eligibility: Option<HeatNetworksResponse>,
    pub searched_at: DateTime<Utc>,
    #[serde(default)]
    pub contacted: bool,
}

/// What the map search card shows for one stored address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub header: String,
    pub is_eligible: bool,
    pub summary: &'static str,
    pub distance_line: Option<String>,
    pub contacted: bool,
}

impl StoredAddress {
    pub fn card(&self) -> CardSummary {
        let (distance, is_eligible) = self
            .eligibility
            .as_ref()
            .map(|e| (e.distance, e.is_eligible))
            .unwrap_or((None, false));
        let band = classify_distance_band(distance, is_eligible);

        CardSummary {
            header: self.address.clone(),
            is_eligible,
            summary: card_summary(band, is_eligible),
            distance_line: card_distance_line(distance, is_eligible),
            contacted: self.contacted,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoughtAddresses {
    /// Oldest first
    entries: Vec<StoredAddress>,
}

impl SoughtAddresses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StoredAddress> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in display order (most recent first).
    pub fn newest_first(&self) -> impl Iterator<Item = &StoredAddress> {
        self.entries.iter().rev()
    }

    /// Record a searched address and return the display index of its card.
    ///
    /// A new address goes on top (index 0). An address already in the list
    /// is not added again; its existing card index is returned.
    pub fn select(
        &mut self,
        address: impl Into<String>,
        coordinates: [f64; 2],
        eligibility: Option<HeatNetworksResponse>,
        now: DateTime<Utc>,
    ) -> usize {
        let id = address_id(coordinates);

        if let Some(position) = self.entries.iter().position(|e| e.id == id) {
            return self.entries.len() - 1 - position;
        }

        tracing::debug!("Adding sought address {}", id);
        self.entries.push(StoredAddress {
            id,
            coordinates,
            address: address.into(),
            eligibility,
            searched_at: now,
            contacted: false,
        });
        0
    }

    /// Remove the address at these coordinates. No-op if it is not listed.
    ///
    /// Returns the display index the card had along with the entry, so an
    /// expanded card can be collapsed when it is the one removed.
    pub fn remove(&mut self, coordinates: [f64; 2]) -> Option<(usize, StoredAddress)> {
        let id = address_id(coordinates);
        let position = self.entries.iter().position(|e| e.id == id)?;
        let display_index = self.entries.len() - 1 - position;
        Some((display_index, self.entries.remove(position)))
    }

    /// Flag an address once its contact form was sent.
    pub fn mark_contacted(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.contacted = true;
                true
            }
            None => {
                tracing::debug!("Cannot mark unknown address {} as contacted", id);
                false
            }
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn eligible(distance: f64) -> Option<HeatNetworksResponse> {
        Some(HeatNetworksResponse {
            is_eligible: true,
            distance: Some(distance),
            ..Default::default()
        })
    }

    #[test]
    fn test_select_new_and_existing() {
        let mut sought = SoughtAddresses::new();
        assert_eq!(sought.select("A", [1.0, 48.0], None, at(1)), 0);
        assert_eq!(sought.select("B", [2.0, 48.0], None, at(2)), 0);
        assert_eq!(sought.select("C", [3.0, 48.0], None, at(3)), 0);

        // "A" is the oldest, so it is displayed last
        assert_eq!(sought.select("A again", [1.0, 48.0], None, at(4)), 2);
        assert_eq!(sought.len(), 3);

        let order: Vec<&str> = sought.newest_first().map(|e| e.address.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_remove() {
        let mut sought = SoughtAddresses::new();
        sought.select("A", [1.0, 48.0], None, at(1));
        sought.select("B", [2.0, 48.0], None, at(2));

        assert!(sought.remove([9.0, 9.0]).is_none());
        assert_eq!(sought.len(), 2);

        sought.select("C", [3.0, 48.0], None, at(3));

        // Displayed as C, B, A
        let (index, removed) = sought.remove([1.0, 48.0]).unwrap();
        assert_eq!(index, 2);
        assert_eq!(removed.address, "A");
        assert_eq!(sought.len(), 2);

        let (index, removed) = sought.remove([3.0, 48.0]).unwrap();
        assert_eq!(index, 0);
        assert_eq!(removed.address, "C");
        assert_eq!(sought.newest_first().next().unwrap().address, "B");
    }

    #[test]
    fn test_mark_contacted() {
        let mut sought = SoughtAddresses::new();
        sought.select("A", [1.0, 48.0], eligible(40.0), at(1));
        let id = address_id([1.0, 48.0]);

        assert!(sought.mark_contacted(&id));
        assert!(sought.get(&id).unwrap().contacted);
        assert!(!sought.mark_contacted("missing"));
    }

    #[test]
    fn test_card_summary() {
        let mut sought = SoughtAddresses::new();
        sought.select("Proche", [1.0, 48.0], eligible(40.0), at(1));
        sought.select("Loin", [2.0, 48.0], None, at(2));

        let cards: Vec<CardSummary> = sought.newest_first().map(StoredAddress::card).collect();
        assert_eq!(cards[0].summary, crate::eligibility::display::CARD_NO_NETWORK);
        assert_eq!(cards[0].distance_line, None);
        assert_eq!(cards[1].summary, crate::eligibility::display::CARD_GOOD_NEWS);
        assert_eq!(cards[1].distance_line.as_deref(), Some("Le réseau passe à 40m"));
    }

    #[test]
    fn test_persistence() {
        let mut sought = SoughtAddresses::new();
        sought.select("A", [1.5, 48.25], eligible(120.0), at(1_700_000_000));
        sought.mark_contacted(&address_id([1.5, 48.25]));

        let json = sought.to_json().unwrap();
        assert!(json.starts_with('['));

        let restored = SoughtAddresses::from_json(&json).unwrap();
        assert_eq!(restored, sought);
        assert!(SoughtAddresses::from_json("{not json").is_err());
    }
}
