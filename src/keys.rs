//! Keypair loading
//!
//! Keypair files are the standard Solana CLI format: a JSON array of the
//! 64 secret key bytes.

use solana_sdk::signature::Keypair;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read keypair file {0}: {1}")]
    Read(String, String),
    #[error("Invalid keypair data in {0}: {1}")]
    Invalid(String, String),
}

/// Load a keypair from a JSON keypair file.
pub fn load_keypair(path: &Path) -> Result<Keypair, LoadError> {
    let keypair_data = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Read(path.display().to_string(), e.to_string()))?;
    let keypair_bytes: Vec<u8> = serde_json::from_str(&keypair_data)
        .map_err(|e| LoadError::Invalid(path.display().to_string(), e.to_string()))?;
    Keypair::from_bytes(&keypair_bytes)
        .map_err(|e| LoadError::Invalid(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn loads_json_keypair_file() {
        let keypair = Keypair::new();
        let path = std::env::temp_dir().join("sol_ping_test_key.json");
        let bytes: Vec<u8> = keypair.to_bytes().to_vec();
        std::fs::write(&path, serde_json::to_string(&bytes).unwrap()).unwrap();

        let loaded = load_keypair(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_malformed_keypair_file() {
        let path = std::env::temp_dir().join("sol_ping_bad_key.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load_keypair(&path), Err(LoadError::Invalid(_, _))));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = Path::new("/definitely/not/here.json");
        assert!(matches!(load_keypair(path), Err(LoadError::Read(_, _))));
    }
}
