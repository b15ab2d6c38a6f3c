use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Deterministic i64 digest of any serializable value.
///
/// The value is first serialized to CBOR for a canonical byte form, then
/// hashed with XxHash64 under a fixed seed so the digest is stable across
/// runs and machines. Session snapshots embed this digest to detect
/// corrupted or hand-edited blobs on resume.
pub fn stable_hash<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize value for hashing: {e}"))?;
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_for_equal_values() {
        let a = stable_hash(&("company", 42u32)).unwrap();
        let b = stable_hash(&("company", 42u32)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn digest_differs_for_different_values() {
        let a = stable_hash(&("company", 42u32)).unwrap();
        let b = stable_hash(&("company", 43u32)).unwrap();
        assert_ne!(a, b);
    }
}
