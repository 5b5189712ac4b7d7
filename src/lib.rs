//! Heat Network Eligibility
//!
//! Turns what the eligibility lookup knows about a building address into
//! the messages shown to its owner, and builds the lead payload sent when
//! they ask to be contacted by the network operator.
//!
//! - `eligibility/`: distance bands, contact message table, detailed results
//! - `render`: Markdown (+ site directives) to HTML
//! - `contact`: contact form validation and lead payload
//! - `sought`: addresses searched on the network map
//! - `config`: environment configuration
//!
//! Everything here is synchronous and free of shared mutable state.

pub mod config;
pub mod contact;
pub mod eligibility;
pub mod error;
pub mod render;
pub mod sought;

// Re-export commonly used types
pub use config::AppConfig;
pub use contact::{ContactFormValues, ContactSubmission};
pub use eligibility::{
    classify_distance_band, contact_message, resolve_contact_message, AddressData, AddressEligibilityFacts,
    DetailedResult, DistanceBand, HeatNetworksResponse, HeatingType, MessageBundle,
};
pub use error::{EligibilityError, Result};
pub use render::{render_markdown, RenderedBundle};
pub use sought::SoughtAddresses;
