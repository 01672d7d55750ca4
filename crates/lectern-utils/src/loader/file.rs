use xxhash_rust::xxh3::xxh3_64;

/// A loaded configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// Path of the file, used in log messages and errors
    pub key: String,
    pub content: Vec<u8>,
    /// Hex encoded xxh3 hash of the content
    pub hash: String,
}

impl File {
    #[must_use]
    pub fn new(key: String, content: Vec<u8>) -> Self {
        let hash = hex::encode(xxh3_64(&content).to_le_bytes());
        Self { key, content, hash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_follows_content() {
        let a = File::new("a.yaml".to_owned(), b"version: '0.1'".to_vec());
        let b = File::new("b.yaml".to_owned(), b"version: '0.1'".to_vec());
        let c = File::new("a.yaml".to_owned(), b"version: '0.2'".to_vec());
        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, c.hash);
        assert_eq!(a.hash.len(), 16);
    }
}
