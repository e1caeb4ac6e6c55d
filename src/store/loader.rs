//! Feed ingestion with a demo fallback, so a dashboard always has a dataset
//! to draw even when its payload is missing or mangled.

use chrono::NaiveDate;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Observation;
use crate::error::{DashboardError, DashboardResult};
use crate::store::ObservationSet;
use crate::store::schema::RawRecord;
use crate::store::synthetic::demo_observations;

/// Where a dataset came from. Surfaced so hosts can badge demo data and
/// tests can assert the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataProvenance {
    Feed,
    Demo,
}

/// Parses a JSON array in either feed schema into observations.
///
/// Elements that match neither schema, or that carry an unparseable date or
/// number, are dropped; one aggregate warning reports how many. A payload
/// that is not a JSON array at all is an error.
pub fn parse_observations<R: Rng>(payload: &str, rng: &mut R) -> DashboardResult<Vec<Observation>> {
    let elements: Vec<serde_json::Value> = serde_json::from_str(payload).map_err(|e| {
        DashboardError::InvalidData(format!("feed payload is not a JSON array: {e}"))
    })?;

    let total = elements.len();
    let mut observations = Vec::with_capacity(total);
    let mut dropped = 0_usize;
    for element in elements {
        let Ok(record) = serde_json::from_value::<RawRecord>(element) else {
            dropped += 1;
            continue;
        };
        match record.into_observation(rng) {
            Ok(obs) => observations.push(obs),
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, total, "dropped feed elements during parse");
    }
    debug!(count = observations.len(), "parsed feed payload");
    Ok(observations)
}

/// Builds the dataset from a payload when one parses to at least one
/// observation, otherwise from generated demo data.
///
/// `seed` drives both the synthesized volumes of partial feed elements and
/// the demo generator, so a given `(payload, today, seed)` triple is fully
/// reproducible.
#[must_use]
pub fn load_or_demo(
    payload: Option<&str>,
    today: NaiveDate,
    seed: u64,
) -> (ObservationSet, DataProvenance) {
    let mut rng = StdRng::seed_from_u64(seed);
    if let Some(payload) = payload {
        match parse_observations(payload, &mut rng) {
            Ok(observations) if !observations.is_empty() => {
                return (
                    ObservationSet::from_observations(observations),
                    DataProvenance::Feed,
                );
            }
            Ok(_) => warn!("feed payload held no usable observations, generating demo data"),
            Err(err) => warn!(error = %err, "feed payload rejected, generating demo data"),
        }
    }
    (
        ObservationSet::from_observations(demo_observations(today, seed)),
        DataProvenance::Demo,
    )
}
