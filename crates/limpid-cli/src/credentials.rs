//! Credential collection from the environment.

/// Prefix for the numbered credential environment variables.
pub const CREDENTIAL_ENV_PREFIX: &str = "LIMPID_API_KEY_";

/// Number of credential slots read from the environment.
pub const CREDENTIAL_SLOTS: usize = 10;

/// Collect raw credential entries from `LIMPID_API_KEY_1` through
/// `LIMPID_API_KEY_10`, in slot order.
///
/// Unset slots yield empty entries; pool construction filters those out
/// together with placeholder values, so the returned list is handed to
/// [`CredentialPool::from_entries`](limpid_engine::CredentialPool::from_entries)
/// as-is.
pub fn collect_env_credentials() -> Vec<String> {
    (1..=CREDENTIAL_SLOTS)
        .map(|slot| std::env::var(format!("{}{}", CREDENTIAL_ENV_PREFIX, slot)).unwrap_or_default())
        .collect()
}
