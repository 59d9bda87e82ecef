mod object_acl;
mod reference;
mod stored_object_key;

pub use object_acl::ObjectAcl;
pub use reference::Reference;
pub use stored_object_key::StoredObjectKey;
