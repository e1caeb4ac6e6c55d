//! Wire schemas for feed payloads.
//!
//! Two shapes circulate in the wild: an index feed keyed by `index_name`
//! with `DD-MM-YYYY` dates, and a quote feed keyed by `company` with ISO
//! dates. An untagged enum picks the schema per element, so one payload may
//! even mix both. Numeric fields accept JSON numbers or numeric strings.

use chrono::{DateTime, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use crate::core::Observation;
use crate::core::primitives::decimal_to_f64;
use crate::error::{DashboardError, DashboardResult};

// Envelope factors applied when a feed carries only a closing value.
const DERIVED_OPEN_FACTOR: f64 = 0.99;
const DERIVED_HIGH_FACTOR: f64 = 1.02;
const DERIVED_LOW_FACTOR: f64 = 0.98;

/// Exclusive upper bound for a synthesized volume when a feed has none.
const DERIVED_VOLUME_CEILING: u64 = 1_000_000;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    Index(IndexRecord),
    Quote(QuoteRecord),
}

/// Index feed element, e.g. `{"index_name": "NIFTY 50", "index_date":
/// "24-04-2021", "closing_index_value": 14341.35}`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexRecord {
    pub index_name: String,
    pub index_date: String,
    pub closing_index_value: Decimal,
    #[serde(default)]
    pub opening_index_value: Option<Decimal>,
    #[serde(default)]
    pub high_index_value: Option<Decimal>,
    #[serde(default)]
    pub low_index_value: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<Decimal>,
}

/// Quote feed element, e.g. `{"company": "ACME", "date": "2021-04-24",
/// "price": 132.5}`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteRecord {
    pub company: String,
    pub date: String,
    pub price: Decimal,
    #[serde(default)]
    pub open: Option<Decimal>,
    #[serde(default)]
    pub high: Option<Decimal>,
    #[serde(default)]
    pub low: Option<Decimal>,
    #[serde(default)]
    pub volume: Option<Decimal>,
}

impl RawRecord {
    /// Converts one feed element into an observation, deriving any missing
    /// open/high/low from the close and synthesizing a missing volume from
    /// `rng`.
    pub fn into_observation<R: Rng>(self, rng: &mut R) -> DashboardResult<Observation> {
        match self {
            Self::Index(record) => record.into_observation(rng),
            Self::Quote(record) => record.into_observation(rng),
        }
    }
}

impl IndexRecord {
    pub fn into_observation<R: Rng>(self, rng: &mut R) -> DashboardResult<Observation> {
        let date = parse_index_date(&self.index_date)?;
        let fields = ParsedFields {
            close: decimal_to_f64(self.closing_index_value, "closing_index_value")?,
            open: optional_price(self.opening_index_value, "opening_index_value")?,
            high: optional_price(self.high_index_value, "high_index_value")?,
            low: optional_price(self.low_index_value, "low_index_value")?,
            volume: optional_volume(self.volume)?,
        };
        Ok(assemble(self.index_name, date, fields, rng))
    }
}

impl QuoteRecord {
    pub fn into_observation<R: Rng>(self, rng: &mut R) -> DashboardResult<Observation> {
        let date = parse_quote_date(&self.date)?;
        let fields = ParsedFields {
            close: decimal_to_f64(self.price, "price")?,
            open: optional_price(self.open, "open")?,
            high: optional_price(self.high, "high")?,
            low: optional_price(self.low, "low")?,
            volume: optional_volume(self.volume)?,
        };
        Ok(assemble(self.company, date, fields, rng))
    }
}

/// Index feeds write dates day-first.
fn parse_index_date(raw: &str) -> DashboardResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d-%m-%Y")
        .map_err(|_| DashboardError::InvalidData(format!("unrecognized index date: {raw:?}")))
}

/// Quote feeds write plain ISO dates, occasionally full RFC 3339 instants.
fn parse_quote_date(raw: &str) -> DashboardResult<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|instant| instant.date_naive())
        .map_err(|_| DashboardError::InvalidData(format!("unrecognized quote date: {trimmed:?}")))
}

fn optional_price(value: Option<Decimal>, field_name: &str) -> DashboardResult<Option<f64>> {
    value.map(|raw| decimal_to_f64(raw, field_name)).transpose()
}

fn optional_volume(value: Option<Decimal>) -> DashboardResult<Option<u64>> {
    match value {
        Some(raw) => raw
            .trunc()
            .to_u64()
            .map(Some)
            .ok_or_else(|| DashboardError::InvalidData(format!("volume is not usable: {raw}"))),
        None => Ok(None),
    }
}

/// Numeric fields of one element after parsing, before the missing ones are
/// filled in.
struct ParsedFields {
    close: f64,
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    volume: Option<u64>,
}

fn assemble<R: Rng>(
    entity_id: String,
    date: NaiveDate,
    fields: ParsedFields,
    rng: &mut R,
) -> Observation {
    let close = fields.close;
    Observation {
        entity_id,
        date,
        open: fields.open.unwrap_or(close * DERIVED_OPEN_FACTOR),
        high: fields.high.unwrap_or(close * DERIVED_HIGH_FACTOR),
        low: fields.low.unwrap_or(close * DERIVED_LOW_FACTOR),
        close,
        volume: fields
            .volume
            .unwrap_or_else(|| rng.gen_range(0..DERIVED_VOLUME_CEILING)),
    }
}
