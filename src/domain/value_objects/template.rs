//! Template value object - the fixed set of scripts the tool can scaffold

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ScriptContext;

/// A scaffoldable script template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Shared helper functions (utils.lua)
    #[value(alias = "utils.lua", alias = "util")]
    Utils,
    /// Client-side script (client.lua)
    #[value(alias = "client.lua")]
    Client,
    /// Server-side script (server.lua)
    #[value(alias = "server.lua")]
    Server,
    /// Shared script (shared.lua)
    #[value(alias = "shared.lua")]
    Shared,
}

impl Template {
    /// Order in which templates are offered to the operator
    pub const PICKER_ORDER: [Template; 4] = [
        Template::Utils,
        Template::Client,
        Template::Server,
        Template::Shared,
    ];

    /// Order in which selected templates appear in `meta.xml`
    pub const MANIFEST_ORDER: [Template; 4] = [
        Template::Client,
        Template::Server,
        Template::Shared,
        Template::Utils,
    ];

    /// Short identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Template::Utils => "utils",
            Template::Client => "client",
            Template::Server => "server",
            Template::Shared => "shared",
        }
    }

    /// File name written into the target folder
    pub fn file_name(&self) -> &'static str {
        match self {
            Template::Utils => "utils.lua",
            Template::Client => "client.lua",
            Template::Server => "server.lua",
            Template::Shared => "shared.lua",
        }
    }

    /// Execution context implied by the template (not by name inspection)
    pub fn context(&self) -> ScriptContext {
        match self {
            Template::Client => ScriptContext::Client,
            Template::Server => ScriptContext::Server,
            Template::Shared | Template::Utils => ScriptContext::Shared,
        }
    }

    /// Look up a template by its short id or file name
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::PICKER_ORDER
            .into_iter()
            .find(|t| t.id() == s || t.file_name() == s)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}
