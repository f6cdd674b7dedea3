//! ScaffoldFile entity - a rendered file ready to be written
//!
//! Produced by the template emitter and the manifest synthesizer; the
//! application layer hands them to the `FileSystem` port.

use std::path::{Path, PathBuf};

/// A file to write, relative to the resource folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    path: PathBuf,
    content: String,
}

impl ScaffoldFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Path relative to the resource folder
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Absolute destination inside `root`
    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_joins_root() {
        let f = ScaffoldFile::new("server.lua", "-- server.lua");
        assert_eq!(
            f.destination(Path::new("/res/myres")),
            PathBuf::from("/res/myres/server.lua")
        );
        assert_eq!(f.content(), "-- server.lua");
    }
}
