// Resolve eligibility messages for one address from the command line.
//
// Usage: cargo run --features cli --bin resolve_eligibility -- <heating-type> [response.json]
//
// The eligibility lookup response is read from the file, or from stdin when
// no file is given. Output is a JSON document on stdout; logs go to stderr.

use std::io::Read;

use anyhow::{Context, Result};
use heat_eligibility::eligibility::{card_summary, map_link, readable_distance};
use heat_eligibility::{
    classify_distance_band, resolve_contact_message, AddressData, AppConfig, DetailedResult,
    HeatNetworksResponse, HeatingType, RenderedBundle,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heat_eligibility=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let heating_arg = args
        .next()
        .context("usage: resolve_eligibility <collectif|individuel> [response.json]")?;
    let path = args.next();

    let config = AppConfig::from_env();
    tracing::debug!("Configuration: {:?}", config);

    // Unknown heating types are not an error: they resolve to no message
    let heating_type = match heating_arg.parse::<HeatingType>() {
        Ok(h) => Some(h),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    let raw = match &path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading eligibility response from stdin")?;
            buf
        }
    };
    let address: AddressData = parse_input(&raw, heating_type)?;

    let facts = address.facts();
    let band = classify_distance_band(facts.distance_to_network, facts.is_eligible);
    let bundle = resolve_contact_message(&facts);
    tracing::info!(
        "Address classified as {} (heating: {:?}, message: {})",
        band.as_str(),
        facts.heating_type,
        if bundle.is_some() { "yes" } else { "none" }
    );

    let output = serde_json::json!({
        "band": band,
        "readableDistance": facts.distance_to_network.filter(|d| d.is_finite()).map(readable_distance),
        "cardSummary": card_summary(band, facts.is_eligible),
        "contactMessage": bundle.map(serde_json::to_value).transpose()?.unwrap_or_else(|| serde_json::json!({})),
        "contactMessageHtml": bundle.map(RenderedBundle::from_bundle),
        "detailed": DetailedResult::for_address(&address),
        "mapLink": map_link(&address, &config),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Accept either a full address form state or a bare lookup response.
fn parse_input(raw: &str, heating_type: Option<HeatingType>) -> Result<AddressData> {
    let value: serde_json::Value = serde_json::from_str(raw).context("input is not valid JSON")?;

    let mut address = if value.get("eligibility").is_some() || value.get("geoAddress").is_some() {
        serde_json::from_value::<AddressData>(value).context("invalid address data")?
    } else {
        let response: HeatNetworksResponse =
            serde_json::from_value(value).context("invalid eligibility response")?;
        AddressData {
            eligibility: Some(response),
            ..Default::default()
        }
    };

    address.heating_type = heating_type;
    Ok(address)
}
