/// Canned access-control policy attached to stored objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectAcl {
    /// The bucket owner gets full control over the object, whoever uploaded it
    #[default]
    BucketOwnerFullControl,
}

impl ObjectAcl {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectAcl::BucketOwnerFullControl => "bucket-owner-full-control",
        }
    }
}

impl std::fmt::Display for ObjectAcl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
