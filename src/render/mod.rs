//! Renderer module: trait-based format dispatch.

pub mod components;
pub mod html;
pub mod json;
pub mod markdown;

use crate::content::Portfolio;
use anyhow::{anyhow, Result};

/// Inputs that vary between renders. Nothing else does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Calendar year shown in the copyright line.
    pub year: i32,
}

/// Trait for rendering the portfolio into a specific output format.
pub trait Renderer {
    fn render(&self, site: &Portfolio, ctx: &RenderContext) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `stylesheets` are linked from the HTML head and ignored by other formats.
pub fn create_renderer(format: &str, stylesheets: &[String]) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer {
            stylesheets: stylesheets.to_vec(),
        })),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use html, markdown, or json",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        assert_eq!(create_renderer("html", &[]).unwrap().file_extension(), "html");
        assert_eq!(create_renderer("md", &[]).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("markdown", &[]).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json", &[]).unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml", &[]).err().unwrap();
        assert!(err.to_string().starts_with("unknown format: xml"));
    }
}
