/// One of the four object-storage settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreField {
    Region,
    Endpoint,
    Bucket,
    Prefix,
}

impl StoreField {
    /// All fields, in the order they are presented and persisted
    pub const ALL: [StoreField; 4] = [
        StoreField::Region,
        StoreField::Endpoint,
        StoreField::Bucket,
        StoreField::Prefix,
    ];

    /// Field name as used in option schemas and form submissions
    pub fn name(&self) -> &'static str {
        match self {
            StoreField::Region => "region",
            StoreField::Endpoint => "endpoint",
            StoreField::Bucket => "bucket",
            StoreField::Prefix => "prefix",
        }
    }

    /// Key under which the field is persisted in the `storage` config namespace
    pub fn config_key(&self) -> &'static str {
        match self {
            StoreField::Region => "objectstorage_region",
            StoreField::Endpoint => "objectstorage_endpoint",
            StoreField::Bucket => "objectstorage_bucket",
            StoreField::Prefix => "objectstorage_prefix",
        }
    }
}

/// Settings for one object-storage backend instance
///
/// Every field defaults to the empty string. An empty region or endpoint means
/// "use the client default"; an empty prefix means objects live at the bucket root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSettings {
    pub region: String,
    pub endpoint: String,
    pub bucket: String,
    pub prefix: String,
}

impl StoreSettings {
    pub fn get(&self, field: StoreField) -> &str {
        match field {
            StoreField::Region => &self.region,
            StoreField::Endpoint => &self.endpoint,
            StoreField::Bucket => &self.bucket,
            StoreField::Prefix => &self.prefix,
        }
    }

    pub fn set(&mut self, field: StoreField, value: String) {
        match field {
            StoreField::Region => self.region = value,
            StoreField::Endpoint => self.endpoint = value,
            StoreField::Bucket => self.bucket = value,
            StoreField::Prefix => self.prefix = value,
        }
    }

    /// Region, if one is configured
    pub fn region(&self) -> Option<&str> {
        Some(self.region.as_str()).filter(|region| !region.is_empty())
    }

    /// Endpoint, if one is configured
    pub fn endpoint(&self) -> Option<&str> {
        Some(self.endpoint.as_str()).filter(|endpoint| !endpoint.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_and_keys() {
        let names: Vec<_> = StoreField::ALL.iter().map(StoreField::name).collect();
        assert_eq!(names, ["region", "endpoint", "bucket", "prefix"]);
        assert_eq!(StoreField::Bucket.config_key(), "objectstorage_bucket");
    }

    #[test]
    fn test_empty_values_are_unset() {
        let mut settings = StoreSettings::default();
        assert_eq!(settings.region(), None);
        assert_eq!(settings.endpoint(), None);

        settings.set(StoreField::Region, "eu-west-1".to_string());
        assert_eq!(settings.region(), Some("eu-west-1"));
        assert_eq!(settings.get(StoreField::Region), "eu-west-1");
    }
}
