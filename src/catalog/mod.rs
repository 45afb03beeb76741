//! The fixed list of tracks the game draws from

use std::{collections::HashMap, path::Path};

use chrono::NaiveDate;
use log::warn;
use serde::Deserialize;

use crate::{
    catalog::error::CatalogError,
    domain::{puzzle::PuzzleId, track::TrackRecord},
};

pub mod error;

/// Immutable, ordered collection of tracks, loaded once at startup.
///
/// Order is the authored order; the selector relies on it.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<TrackRecord>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    date: Option<String>,
    reference: String,
    answer: String,
}

impl RawRecord {
    fn into_record(self, index: usize) -> Result<TrackRecord, CatalogError> {
        match self.date {
            Some(value) => {
                let id = value
                    .parse::<PuzzleId>()
                    .map_err(|_| CatalogError::InvalidDate { index, value })?;
                Ok(TrackRecord::dated(id.date(), self.reference, self.answer))
            }
            None => Ok(TrackRecord::undated(self.reference, self.answer)),
        }
    }
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents)?;
        let records = file
            .tracks
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_record(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// builds a catalog from records already in memory, with the same checks as loading
    pub fn from_records(records: Vec<TrackRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            if record.reference.trim().is_empty() {
                return Err(CatalogError::MissingReference { index });
            }
            if record.answer.trim().is_empty() {
                return Err(CatalogError::MissingAnswer { index });
            }
        }

        let catalog = Self { records };
        for (date, index) in catalog.duplicate_dates() {
            warn!("catalog track #{index} is shadowed by an earlier track dated {date}");
        }
        Ok(catalog)
    }

    pub fn all_records(&self) -> &[TrackRecord] {
        &self.records
    }

    /// Records that can never be selected because an earlier record has the same date.
    ///
    /// Returns the date together with the index of the shadowed record.
    pub fn duplicate_dates(&self) -> Vec<(NaiveDate, usize)> {
        let mut first_seen: HashMap<NaiveDate, usize> = HashMap::new();
        let mut shadowed = Vec::new();

        for (index, record) in self.records.iter().enumerate() {
            if let Some(date) = record.date {
                if first_seen.contains_key(&date) {
                    shadowed.push((date, index));
                } else {
                    first_seen.insert(date, index);
                }
            }
        }
        shadowed
    }

    pub fn dated_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_fallback()).count()
    }

    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_fallback()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn date(s: &str) -> NaiveDate {
        s.parse::<PuzzleId>().unwrap().date()
    }

    const CATALOG: &str = r#"
[[tracks]]
date = "2025-02-08"
reference = "https://soundcloud.com/boniver/holocene"
answer = "Holocene - Bon Iver"

[[tracks]]
date = "2025-02-09"
reference = "https://soundcloud.com/arethafranklin/natural-woman"
answer = "(You Make Me Feel Like) A Natural Woman - Aretha Franklin"

[[tracks]]
reference = "ymca.mp3"
answer = "YMCA"
"#;

    #[test]
    fn test_parse_catalog_keeps_authored_order() -> anyhow::Result<()> {
        let catalog = Catalog::parse(CATALOG)?;
        let records = catalog.all_records();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            TrackRecord::dated(
                date("2025-02-08"),
                "https://soundcloud.com/boniver/holocene",
                "Holocene - Bon Iver"
            )
        );
        assert_eq!(records[1].date, Some(date("2025-02-09")));
        assert_eq!(records[2], TrackRecord::undated("ymca.mp3", "YMCA"));
        assert_eq!(catalog.dated_count(), 2);
        assert_eq!(catalog.undated_count(), 1);

        Ok(())
    }

    #[test]
    fn test_load_catalog_from_file() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("catalog.toml");
        fs::write(&path, CATALOG)?;

        let catalog = Catalog::load(&path)?;
        assert_eq!(catalog.all_records().len(), 3);

        Ok(())
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(CatalogError::Read { .. })));
    }

    #[test]
    fn test_missing_reference_is_parse_error() {
        let toml_str = r#"
[[tracks]]
answer = "Holocene - Bon Iver"
"#;
        assert!(matches!(
            Catalog::parse(toml_str),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_blank_reference_rejected() {
        let toml_str = r#"
[[tracks]]
reference = "a.mp3"
answer = "A - B"

[[tracks]]
reference = "  "
answer = "Holocene - Bon Iver"
"#;
        assert!(matches!(
            Catalog::parse(toml_str),
            Err(CatalogError::MissingReference { index: 1 })
        ));
    }

    #[test]
    fn test_blank_answer_rejected() {
        let records = vec![TrackRecord::undated("a.mp3", "")];
        assert!(matches!(
            Catalog::from_records(records),
            Err(CatalogError::MissingAnswer { index: 0 })
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::parse(""), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_records(vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let toml_str = r#"
[[tracks]]
date = "8 Feb 2025"
reference = "a.mp3"
answer = "A - B"
"#;
        match Catalog::parse(toml_str) {
            Err(CatalogError::InvalidDate { index, value }) => {
                assert_eq!(index, 0);
                assert_eq!(value, "8 Feb 2025");
            }
            other => panic!("expected invalid date error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_dates_are_reported_not_rejected() -> anyhow::Result<()> {
        let d = date("2025-02-08");
        let catalog = Catalog::from_records(vec![
            TrackRecord::dated(d, "first.mp3", "First - Artist"),
            TrackRecord::undated("spare.mp3", "Spare - Artist"),
            TrackRecord::dated(d, "second.mp3", "Second - Artist"),
        ])?;

        assert_eq!(catalog.duplicate_dates(), vec![(d, 2)]);
        assert_eq!(catalog.all_records().len(), 3);

        Ok(())
    }
}
