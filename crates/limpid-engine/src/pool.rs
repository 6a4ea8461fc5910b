//! The fixed pool of API credentials

/// Placeholder value shipped in sample configuration; never a usable
/// credential
pub const PLACEHOLDER_CREDENTIAL: &str = "your_api_key_here";

/// Ordered, read-only set of usable API credentials
///
/// Built once at startup from raw configuration entries. Entries that are
/// empty, whitespace-only, or still the sample placeholder are dropped.
/// An empty pool is representable; the dispatch engine rejects it with
/// [`EngineError::NoCredentials`](crate::EngineError::NoCredentials) when
/// it is actually asked to process work.
#[derive(Debug, Clone, Default)]
pub struct CredentialPool {
    credentials: Vec<String>,
}

impl CredentialPool {
    /// Build a pool from raw entries, dropping unusable ones
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let credentials = entries
            .into_iter()
            .map(|entry| entry.into().trim().to_string())
            .filter(|entry| !entry.is_empty() && entry != PLACEHOLDER_CREDENTIAL)
            .collect();

        Self { credentials }
    }

    /// Number of usable credentials
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// True when no usable credential survived filtering
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }

    /// Iterate credentials in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.credentials.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_and_blanks_filtered() {
        let entries = vec![
            "key-1",
            "",
            PLACEHOLDER_CREDENTIAL,
            "key-2",
            "   ",
            PLACEHOLDER_CREDENTIAL,
        ];
        let pool = CredentialPool::from_entries(entries);

        assert_eq!(pool.len(), 2);
        let keys: Vec<_> = pool.iter().collect();
        assert_eq!(keys, vec!["key-1", "key-2"]);
    }

    #[test]
    fn test_ten_entries_four_placeholders_leaves_six() {
        let entries: Vec<String> = (1..=10)
            .map(|i| {
                if i % 3 == 0 || i == 10 {
                    PLACEHOLDER_CREDENTIAL.to_string()
                } else {
                    format!("key-{}", i)
                }
            })
            .collect();

        let pool = CredentialPool::from_entries(entries);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_entries_are_trimmed() {
        let pool = CredentialPool::from_entries(vec!["  key-1\n"]);
        assert_eq!(pool.iter().collect::<Vec<_>>(), vec!["key-1"]);
    }

    #[test]
    fn test_empty_pool() {
        let pool = CredentialPool::from_entries(Vec::<String>::new());
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn test_order_preserved() {
        let pool = CredentialPool::from_entries(vec!["c", "a", "b"]);
        let keys: Vec<_> = pool.iter().collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }
}
