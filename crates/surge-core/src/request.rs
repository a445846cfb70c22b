/// Immutable request template plus the 1-based sequence index.
///
/// The index exists for report ordering only; it carries no correctness
/// weight. Descriptors are built once by the dispatcher and never mutated.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub url: String,
    pub api_key: String,
    pub index: usize,
}

impl RequestDescriptor {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, index: usize) -> Self {
        Self { url: url.into(), api_key: api_key.into(), index }
    }
}
