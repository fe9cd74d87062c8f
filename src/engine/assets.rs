// Image resolution for sprite entities
//
// The actual loader is an external collaborator; the engine only sees a
// name -> handle resolver, queried once when a sprite is constructed.

/// Unique identifier for a resolved image, hashed from its source name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(u64);

impl AssetId {
    /// Create an asset ID from an image source name
    pub fn from_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Get the raw u64 value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Pre-resolved drawable image: an identity plus its pixel dimensions
///
/// Stored on sprite entities at construction time, so drawing never has to
/// look an image up again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageHandle {
    pub id: AssetId,
    pub width: f32,
    pub height: f32,
}

/// Opaque name -> drawable-handle resolver
pub trait ImageResolver {
    /// Resolve an image by source name, without file extension
    fn resolve(&self, name: &str) -> Option<ImageHandle>;
}
