use super::Reference;

/// The remote object key for a reference: `prefix + reference`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredObjectKey(String);

impl StoredObjectKey {
    pub fn new(prefix: &str, reference: &Reference) -> Self {
        let mut key = String::with_capacity(prefix.len() + reference.as_str().len());
        key.push_str(prefix);
        key.push_str(reference.as_str());
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoredObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
