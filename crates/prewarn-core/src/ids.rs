//! ID prefixes and random ID generation.
//!
//! IDs look like `log-3fa9c01e`: a short entity prefix followed by 8 lowercase
//! hex characters drawn from the OS random source.

use crate::errors::CoreError;

/// Prefix for log entry IDs.
pub const PREFIX_LOG: &str = "log";

/// Number of random bytes behind each ID (two hex chars per byte).
const ID_BYTES: usize = 4;

/// Generate a new random ID with the given prefix.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS random source is unavailable.
pub fn generate_id(prefix: &str) -> Result<String, CoreError> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("failed to generate id: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{hex}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_has_prefix_and_hex_suffix() {
        let id = generate_id(PREFIX_LOG).unwrap();
        let (prefix, suffix) = id.split_once('-').unwrap();
        assert_eq!(prefix, "log");
        assert_eq!(suffix.len(), ID_BYTES * 2);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn ids_are_not_repeated() {
        let a = generate_id(PREFIX_LOG).unwrap();
        let b = generate_id(PREFIX_LOG).unwrap();
        assert_ne!(a, b);
    }
}
