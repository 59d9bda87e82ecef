use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;

/// Input widget kind for a settings field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Text,
}

/// One self-describing settings field, ready for a generic form renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionField {
    pub kind: OptionKind,
    pub label: String,
    pub value: String,
    pub help: String,
}

/// Ordered mapping of field name to field description
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageOptions {
    fields: Vec<(String, OptionField)>,
}

impl StorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, field: OptionField) {
        self.fields.push((name.into(), field));
    }

    pub fn get(&self, name: &str) -> Option<&OptionField> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionField)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for StorageOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

/// Validation errors keyed by field name; empty means the save succeeded
pub type OptionErrors = BTreeMap<String, String>;

#[cfg(test)]
mod tests {
    use super::*;

    fn text(label: &str) -> OptionField {
        OptionField {
            kind: OptionKind::Text,
            label: label.to_string(),
            value: String::new(),
            help: String::new(),
        }
    }

    #[test]
    fn test_serialization_keeps_order() {
        let mut options = StorageOptions::new();
        options.push("zeta", text("Z"));
        options.push("alpha", text("A"));

        let json = serde_json::to_string(&options).unwrap();
        assert!(json.find("\"zeta\"").unwrap() < json.find("\"alpha\"").unwrap());
        assert!(json.contains("\"kind\":\"text\""));
    }

    #[test]
    fn test_lookup_by_name() {
        let mut options = StorageOptions::new();
        options.push("bucket", text("The S3 bucket"));

        assert_eq!(options.get("bucket").unwrap().label, "The S3 bucket");
        assert!(options.get("region").is_none());
        assert_eq!(options.names().collect::<Vec<_>>(), ["bucket"]);
    }
}
