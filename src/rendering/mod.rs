//! Stats card rendering
//!
//! `layout` places the header and the three counters on the fixed card,
//! `paint` serializes that layout to SVG markup and `text` holds the escaping
//! and number formatting helpers both rely on.

pub mod layout;
pub mod paint;
pub mod text;

use crate::{Error, Result, UserStats};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::info;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::str::FromStr;

/// Language of the card's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Ok(Locale::Ja),
            "en" | "english" => Ok(Locale::En),
            other => Err(Error::ConfigError(format!(
                "unsupported language {:?} (expected ja or en)",
                other
            ))),
        }
    }
}

/// A rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    username: String,
    svg: String,
}

impl StatsCard {
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The SVG document
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn into_svg(self) -> String {
        self.svg
    }

    /// Download name, `{username}-github-stats.svg`
    pub fn file_name(&self) -> String {
        format!("{}-github-stats.svg", self.username)
    }

    /// `data:` URI suitable for embedding in HTML or Markdown
    pub fn to_data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", STANDARD.encode(self.svg.as_bytes()))
    }

    /// Hex SHA-256 of the markup
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.svg.as_bytes()))
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.svg.as_bytes())?;
        info!("Wrote stats card for {} to {}", self.username, path.display());
        Ok(())
    }
}

/// Lay out and paint the card for `stats`
pub fn render_card(stats: &UserStats, locale: Locale) -> StatsCard {
    let layout = layout::layout_card(stats, locale);
    StatsCard {
        username: stats.username.clone(),
        svg: paint::paint_svg(&layout),
    }
}
