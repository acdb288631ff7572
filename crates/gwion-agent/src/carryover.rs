//! Parsing of carry-over JSON between the two phases of `crawl_web` and
//! `gen_image`.
//!
//! The classification phase emits the model's raw arguments JSON; the
//! execution phase parses it here. All fields the outbound schemas declare
//! required are required on the way back in too; anything else is a
//! [`AgentError::MalformedInput`], fatal for that invocation.

use serde::{Deserialize, Serialize};

use gwion_llm::ImageGenerationPayload;

use crate::error::{AgentError, Result};

/// Carry-over arguments of a `crawl_web` action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlArgs {
    /// The URL the user explicitly supplied.
    pub url: String,
    /// The user's original request, verbatim; drives the extraction phase.
    pub purpose: String,
}

/// Parse `crawl_web` carry-over JSON.
pub fn parse_crawl_args(raw: &str) -> Result<CrawlArgs> {
    serde_json::from_str(raw).map_err(|e| AgentError::MalformedInput(e.to_string()))
}

/// Parse `gen_image` carry-over JSON. The parsed value doubles as the
/// image-generation request body.
pub fn parse_image_args(raw: &str) -> Result<ImageGenerationPayload> {
    serde_json::from_str(raw).map_err(|e| AgentError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_args_parse() {
        let args = parse_crawl_args(r#"{"url":"https://bbc.com","purpose":"first headline"}"#).unwrap();
        assert_eq!(args.url, "https://bbc.com");
        assert_eq!(args.purpose, "first headline");
    }

    #[test]
    fn test_crawl_args_missing_field_is_malformed() {
        let err = parse_crawl_args(r#"{"url":"https://bbc.com"}"#).unwrap_err();
        assert!(matches!(err, AgentError::MalformedInput(_)));
        assert!(err.to_string().contains("purpose"));
    }

    #[test]
    fn test_crawl_args_non_json_is_malformed() {
        assert!(matches!(
            parse_crawl_args("not json at all"),
            Err(AgentError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_image_args_parse() {
        let args = parse_image_args(
            r#"{"n":2,"model":"dall-e-3","size":"1024x1792","prompt":"a tall lighthouse"}"#,
        )
        .unwrap();
        assert_eq!(args.n, 2);
        assert_eq!(args.model, "dall-e-3");
        assert_eq!(args.size, "1024x1792");
        assert_eq!(args.prompt, "a tall lighthouse");
    }

    #[test]
    fn test_image_args_missing_size_is_malformed() {
        let err = parse_image_args(r#"{"n":1,"model":"dall-e-2","prompt":"bad banana"}"#).unwrap_err();
        assert!(matches!(err, AgentError::MalformedInput(_)));
    }
}
