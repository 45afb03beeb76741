//! Picks the track of the day

use chrono::NaiveDate;
use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::Deserialize;

use crate::{catalog::Catalog, domain::puzzle::PuzzleId, domain::track::TrackRecord};

/// How to pick among undated records when no record is scheduled for the day
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackStrategy {
    /// seeded from the date: every request of the same day gets the same record
    Deterministic,
    /// fresh randomness on every call
    Unseeded,
}

/// Returns the record scheduled for `today`, or a fallback record, or `None`.
///
/// The first record in authored order with a matching date wins;
/// later records with the same date are never returned.
pub fn select_for_date(
    today: NaiveDate,
    catalog: &Catalog,
    fallback: FallbackStrategy,
) -> Option<&TrackRecord> {
    let records = catalog.all_records();

    if let Some(record) = records.iter().find(|r| r.date == Some(today)) {
        debug!("{today}: scheduled track {}", record.reference);
        return Some(record);
    }

    let candidates = records
        .iter()
        .filter(|r| r.is_fallback())
        .collect::<Vec<_>>();

    let chosen = match fallback {
        FallbackStrategy::Deterministic => {
            let mut rng = StdRng::seed_from_u64(seed_for(today));
            candidates.choose(&mut rng)
        }
        FallbackStrategy::Unseeded => candidates.choose(&mut rand::thread_rng()),
    }
    .copied();

    match chosen {
        Some(record) => debug!(
            "{today}: nothing scheduled, fallback track {} ({fallback:?})",
            record.reference
        ),
        None => debug!("{today}: nothing scheduled and no fallback tracks"),
    }
    chosen
}

/// Stable seed derived from the `YYYY-MM-DD` form of the date
fn seed_for(date: NaiveDate) -> u64 {
    let hash = blake3::hash(PuzzleId(date).to_string().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
