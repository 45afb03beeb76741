use chrono::NaiveDate;

/// One entry of the catalog.
///
/// A record without a date is a fallback candidate,
/// picked only when no record is scheduled for the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub date: Option<NaiveDate>,
    /// URL or file name of the playable media
    pub reference: String,
    /// conventionally "<Song Title> - <Artist>"
    pub answer: String,
}

impl TrackRecord {
    pub fn new(
        date: Option<NaiveDate>,
        reference: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            date,
            reference: reference.into(),
            answer: answer.into(),
        }
    }

    pub fn dated(
        date: NaiveDate,
        reference: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self::new(Some(date), reference, answer)
    }

    pub fn undated(reference: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::new(None, reference, answer)
    }

    pub fn is_fallback(&self) -> bool {
        self.date.is_none()
    }
}
