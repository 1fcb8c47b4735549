use crate::domain::model::CervicalMucusRecord;
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    pub index: usize,
    pub field: Option<String>,
    pub message: String,
}

/// Indices of entries that produced equal records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub indices: Vec<usize>,
    pub hash: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub total: usize,
    pub accepted: usize,
    pub rejected: Vec<RejectedEntry>,
    pub duplicates: Vec<DuplicateGroup>,
}

impl ValidationReport {
    /// Summarises per-entry build results, listed in entry order.
    pub fn from_results(results: &[Result<CervicalMucusRecord>]) -> Self {
        let mut report = ValidationReport {
            total: results.len(),
            ..Default::default()
        };
        let mut seen: HashMap<&CervicalMucusRecord, Vec<usize>> = HashMap::new();

        for (index, result) in results.iter().enumerate() {
            match result {
                Ok(record) => {
                    report.accepted += 1;
                    seen.entry(record).or_default().push(index);
                }
                Err(e) => report.rejected.push(RejectedEntry {
                    index,
                    field: e.field().map(str::to_string),
                    message: e.user_friendly_message(),
                }),
            }
        }

        report.duplicates = seen
            .into_iter()
            .filter(|(_, indices)| indices.len() > 1)
            .map(|(record, indices)| DuplicateGroup {
                indices,
                hash: record.hash_code(),
            })
            .collect();
        report.duplicates.sort_by_key(|group| group.indices[0]);

        tracing::info!(
            total = report.total,
            accepted = report.accepted,
            rejected = report.rejected.len(),
            duplicate_groups = report.duplicates.len(),
            "validation finished"
        );

        report
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vocabulary::{Amount, Texture};
    use crate::utils::error::RecordError;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_groups_equal_records() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let a = CervicalMucusRecord::new(time, None).with_texture(Texture::Sticky);
        let b = CervicalMucusRecord::new(time, None).with_amount(Amount::Light);

        let results = vec![
            Ok(a.clone()),
            Ok(b),
            Err(RecordError::invalid_argument("texture", "foo", "unknown")),
            Ok(a.clone()),
        ];
        let report = ValidationReport::from_results(&results);

        assert_eq!(report.total, 4);
        assert_eq!(report.accepted, 3);
        assert!(!report.is_clean());
        assert_eq!(report.rejected[0].index, 2);
        assert_eq!(report.rejected[0].field.as_deref(), Some("texture"));
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.duplicates[0].indices, vec![0, 3]);
        assert_eq!(report.duplicates[0].hash, a.hash_code());
    }

    #[test]
    fn test_empty_input_is_clean() {
        let report = ValidationReport::from_results(&[]);
        assert!(report.is_clean());
        assert!(report.duplicates.is_empty());
    }
}
