//! Joining per-chunk results back into one text body

use crate::error::EngineError;
use limpid_domain::ResultTable;

/// Separator between rewritten chunks in the assembled output
pub const CHUNK_SEPARATOR: &str = "\n\n";

/// Concatenate the table's entries in index order
///
/// # Errors
///
/// Returns [`EngineError::Incomplete`] if any slot is unresolved. The
/// dispatch engine already guarantees completeness on success; this is
/// a defensive re-check for callers assembling a table from elsewhere.
pub fn assemble(table: &ResultTable) -> Result<String, EngineError> {
    let missing = table.missing();
    if missing > 0 {
        return Err(EngineError::Incomplete {
            missing,
            total: table.len(),
        });
    }

    Ok(table
        .iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(CHUNK_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assembles_in_index_order() {
        let mut table = ResultTable::new(3);
        table.store(2, "third".to_string());
        table.store(0, "first".to_string());
        table.store(1, "second".to_string());

        assert_eq!(assemble(&table).unwrap(), "first\n\nsecond\n\nthird");
    }

    #[test]
    fn test_single_entry_has_no_separator() {
        let mut table = ResultTable::new(1);
        table.store(0, "only".to_string());

        assert_eq!(assemble(&table).unwrap(), "only");
    }

    #[test]
    fn test_empty_table_assembles_to_empty_string() {
        let table = ResultTable::new(0);
        assert_eq!(assemble(&table).unwrap(), "");
    }

    #[test]
    fn test_incomplete_table_is_rejected() {
        let mut table = ResultTable::new(2);
        table.store(0, "first".to_string());

        assert_eq!(
            assemble(&table),
            Err(EngineError::Incomplete {
                missing: 1,
                total: 2
            })
        );
    }
}
