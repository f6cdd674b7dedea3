//! ManifestPath value object - a `src` attribute value
//!
//! Paths in `meta.xml` are relative to the resource folder and always use
//! forward slashes, whatever the host platform uses.

use std::path::{Component, Path};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ManifestPath(String);

impl ManifestPath {
    /// Build from a path relative to the resource folder.
    ///
    /// Components are joined with `/`; backslashes inside names are rewritten too.
    pub fn from_relative(path: &Path) -> Self {
        let joined = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        Self::new(joined)
    }

    /// Build from a raw string, normalizing separators
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ManifestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn backslashes_become_forward_slashes() {
        let p = ManifestPath::new(r"sub\deeper\helper_server.lua");
        assert_eq!(p.as_str(), "sub/deeper/helper_server.lua");
    }

    #[test]
    fn from_relative_joins_components_with_slash() {
        let rel: PathBuf = ["sub", "deeper", "file.lua"].iter().collect();
        assert_eq!(
            ManifestPath::from_relative(&rel).as_str(),
            "sub/deeper/file.lua"
        );
    }

    #[test]
    fn from_relative_drops_cur_dir_components() {
        let rel = PathBuf::from("./client.lua");
        assert_eq!(ManifestPath::from_relative(&rel).as_str(), "client.lua");
    }
}
