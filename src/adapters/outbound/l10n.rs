use std::collections::HashMap;

use crate::ports::Translator;

/// Returns every template unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, template: &str) -> String {
        template.to_string()
    }
}

/// Looks templates up in a fixed catalog, falling back to the template itself
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
    entries: HashMap<String, String>,
}

impl CatalogTranslator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Load a catalog from a JSON object of `template -> translation`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn with_entry(mut self, template: impl Into<String>, translation: impl Into<String>) -> Self {
        self.entries.insert(template.into(), translation.into());
        self
    }
}

impl Translator for CatalogTranslator {
    fn translate(&self, template: &str) -> String {
        self.entries
            .get(template)
            .cloned()
            .unwrap_or_else(|| template.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_falls_back_to_template() {
        let l10n = CatalogTranslator::default().with_entry("Enter a bucket name", "Bucket angeben");
        assert_eq!(l10n.translate("Enter a bucket name"), "Bucket angeben");
        assert_eq!(l10n.translate("The S3 bucket"), "The S3 bucket");
    }

    #[test]
    fn test_catalog_from_json() {
        let l10n = CatalogTranslator::from_json(r#"{"The AWS region": "La région AWS"}"#).unwrap();
        assert_eq!(l10n.translate("The AWS region"), "La région AWS");
    }
}
