//! Sibling order used when walking a resource folder

/// How entries of a single directory are ordered during discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingOrder {
    /// Lexicographic by file name (stable across platforms)
    #[default]
    ByName,
    /// Whatever order the OS returns; not guaranteed stable
    Native,
}

impl ListingOrder {
    pub fn from_native_flag(native: bool) -> Self {
        if native {
            ListingOrder::Native
        } else {
            ListingOrder::ByName
        }
    }
}
