/// An opaque key identifying one blob within a store
///
/// References are used verbatim. The only normalization is that an empty string is
/// treated the same as no reference at all, which asks the store to generate one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `None` for an absent or empty reference
    pub fn explicit(value: Option<&str>) -> Option<Self> {
        value.filter(|value| !value.is_empty()).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
