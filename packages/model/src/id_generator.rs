use crc32fast::Hasher;

/// Derive a stable id seed from a document title using CRC32
pub fn get_document_seed(title: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(format!("doc://{}", title).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for components within a document.
///
/// The counter only moves forward, so a deleted component's id is never
/// handed out again.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(title: &str) -> Self {
        Self {
            seed: get_document_seed(title),
            count: 0,
        }
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Generate next sequential id
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("component-{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
