use crate::core::error::{HistoryUnavailable, PersistenceWarning};
use crate::core::history::{HistoryEntry, HistoryLog};
use crate::core::record::ConversionRecord;
use tracing::debug;

/// History kept for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    records: Vec<ConversionRecord>,
}

impl MemoryHistory {
    /// Creates an empty MemoryHistory
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryLog for MemoryHistory {
    fn append(&mut self, record: &ConversionRecord) -> Result<(), PersistenceWarning> {
        self.records.push(record.clone());
        debug!(count = self.records.len(), "History APPEND (memory)");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<HistoryEntry>, HistoryUnavailable> {
        Ok(self
            .records
            .iter()
            .cloned()
            .map(HistoryEntry::Record)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyCode;

    #[test]
    fn test_memory_history_append_and_list() {
        let mut history = MemoryHistory::new();

        // Initially, history is empty
        assert!(history.list_all().unwrap().is_empty());

        let first = ConversionRecord::new(100.0, CurrencyCode::Usd, CurrencyCode::Eur, 85.0);
        let second = ConversionRecord::new(10.0, CurrencyCode::Gbp, CurrencyCode::Chf, 14.79);
        history.append(&first).unwrap();
        history.append(&second).unwrap();

        let entries = history.list_all().unwrap();
        assert_eq!(
            entries,
            vec![HistoryEntry::Record(first), HistoryEntry::Record(second)]
        );

        // Listing is restartable
        assert_eq!(history.list_all().unwrap(), entries);
    }
}
