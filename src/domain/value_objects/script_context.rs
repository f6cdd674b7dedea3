//! Execution context value object - where a script runs
//!
//! - `Client`: loaded by players' game clients
//! - `Server`: loaded by the server only
//! - `Shared`: loaded on both sides

use serde::{Deserialize, Serialize};

/// Execution context of a script entry in `meta.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScriptContext {
    Client,
    Server,
    #[default]
    Shared,
}

impl ScriptContext {
    /// Classify a script by its file name.
    ///
    /// Case-sensitive substring match: `client` wins over `server`,
    /// anything else is shared. Only the file name is inspected.
    pub fn classify(file_name: &str) -> Self {
        if file_name.contains("client") {
            ScriptContext::Client
        } else if file_name.contains("server") {
            ScriptContext::Server
        } else {
            ScriptContext::Shared
        }
    }

    /// Value of the `type` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptContext::Client => "client",
            ScriptContext::Server => "server",
            ScriptContext::Shared => "shared",
        }
    }

    /// Whether the script carries `cache="false"`.
    ///
    /// Server scripts are never cache-tagged; the attribute is omitted for them.
    pub fn emits_cache_attribute(&self) -> bool {
        !matches!(self, ScriptContext::Server)
    }
}

impl std::fmt::Display for ScriptContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
