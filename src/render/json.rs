//! JSON renderer: structured output for tooling integration.
//!
//! Serializes the content model directly. The render year is left out so the
//! output only changes when the content does.

use crate::content::Portfolio;
use crate::render::{RenderContext, Renderer};
use anyhow::{Context, Result};

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, site: &Portfolio, _ctx: &RenderContext) -> Result<String> {
        let mut out = serde_json::to_string_pretty(site).context("failed to serialize content")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
