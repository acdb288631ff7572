//! The static catalog of callable actions.
//!
//! The catalog is the outbound half of the protocol: each entry's name,
//! description and parameter schema are serialized into the request so the
//! remote model is constrained to pick exactly one action. Inbound arguments
//! are deliberately not validated against these schemas.

use gwion_llm::ToolSpec;
use serde_json::json;

/// Action names, shared between the catalog and the dispatcher.
pub mod actions {
    /// Emit a bash one-liner.
    pub const PRINTZ: &str = "printz";
    /// Answer directly with information, via tool call.
    pub const ECHO: &str = "echo";
    /// Generate one or more images.
    pub const GEN_IMAGE: &str = "gen_image";
    /// Crawl a user-supplied URL.
    pub const CRAWL_WEB: &str = "crawl_web";
    /// Extraction action of the crawl sub-flow.
    pub const REPORT_INFORMATION: &str = "report_information";
    /// Pseudo-action signaled by free-text content rather than a tool call.
    pub const MESSAGE: &str = "message";
}

/// An immutable set of callable-action definitions.
///
/// Constructed once at process start and passed explicitly into the request
/// builder; there is no hidden global catalog.
#[derive(Debug, Clone)]
pub struct ActionCatalog {
    tools: Vec<ToolSpec>,
}

impl ActionCatalog {
    /// The full catalog offered to the primary classification request.
    pub fn primary() -> Self {
        let tools = vec![
            ToolSpec::function(
                actions::PRINTZ,
                "DEFAULT - use this when the user is describing what could be supplied as a bash \
                 one liner. ex: printz(netstat -u), printz(lsof -n). Ensure command works for the \
                 supplied system. No explanations need be provided.",
                json!({
                    "type": "object",
                    "properties": {
                        "command": {
                            "type": "string",
                            "description": "The bash one liner"
                        }
                    },
                    "required": ["command"]
                }),
            ),
            ToolSpec::function(
                actions::ECHO,
                "use this if the user asked for information which can not be represented as a \
                 bash one liner. ex echo(There are 4 quarts in a gallon), echo(There have been 46 \
                 US presidents). Do not call this with a bash one liner, do not provide a bash \
                 one liner with an explanation. If you have a response that's not perfect but is \
                 ok, use this.",
                json!({
                    "type": "object",
                    "properties": {
                        "str": {
                            "type": "string",
                            "description": "The information. NO BASH ONE LINERS. Never call like: echo(To do such and such, use this command: <some command>)"
                        }
                    },
                    "required": ["str"]
                }),
            ),
            ToolSpec::function(
                actions::GEN_IMAGE,
                "use this IF AND ONLY IF the user is EXPLICITLY requesting an image, with \
                 verbiage like Make me an image or Generate an image.",
                json!({
                    "type": "object",
                    "properties": {
                        "n": {
                            "type": "integer",
                            "description": "1, unless otherwise specified by user"
                        },
                        "model": {
                            "type": "string",
                            "description": "Default to dall-e-2. If the user has requested a high quality image, then dall-e-3"
                        },
                        "size": {
                            "type": "string",
                            "description": "default to 1024x1024 unless the user specifies they want a specific size. If they specify a size, follow this guide: dall-e-2 supports sizes: 256x256 (small), 512x512 (medium), or 1024x1024 (default/large). dall-e-3 supports sizes: 1024x1024 (default), 1024x1792 (portrait) or 1792x1024 (landscape). If multiple images, all use the same size."
                        },
                        "prompt": {
                            "type": "string",
                            "description": "What the user input, minus the parts about image quality, size, and portrait/landscape"
                        }
                    },
                    "required": ["n", "model", "size", "prompt"]
                }),
            ),
            ToolSpec::function(
                actions::CRAWL_WEB,
                "call this ONLY IF THE USER HAS EXPLICITLY REQUESTED TO CRAWL THE WEB, and \
                 supplied a URL to crawl. DO NOT CALL THIS IF THE USER HAS NOT SUPPLIED A URL, \
                 even if it will help respond accurately. Prefer echo and printz.",
                json!({
                    "type": "object",
                    "properties": {
                        "url": {
                            "type": "string",
                            "description": "The url the user has explicitly supplied to be crawled"
                        },
                        "purpose": {
                            "type": "string",
                            "description": "Repeat the user input. Do not alter this."
                        }
                    },
                    "required": ["url", "purpose"]
                }),
            ),
        ];

        Self { tools }
    }

    /// The single-entry catalog of the crawl sub-flow's extraction phase.
    pub fn report_only() -> Self {
        let tools = vec![ToolSpec::function(
            actions::REPORT_INFORMATION,
            "DEFAULT - Report with the requested information.",
            json!({
                "type": "object",
                "properties": {
                    "str": {
                        "type": "string",
                        "description": "The information the user is looking for from the supplied web page."
                    }
                },
                "required": ["str"]
            }),
        )];

        Self { tools }
    }

    /// The serialized tool definitions, in catalog order.
    pub fn tool_specs(&self) -> &[ToolSpec] {
        &self.tools
    }

    /// Whether `name` is a catalog entry.
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|t| t.function.name == name)
    }

    /// The catalog's action names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.iter().map(|t| t.function.name.as_str())
    }
}
