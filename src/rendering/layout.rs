//! Fixed card geometry: header plus three counter cells

use super::Locale;
use crate::UserStats;

pub const CARD_WIDTH: u32 = 495;
pub const CARD_HEIGHT: u32 = 195;

/// Origin of the header group
pub const HEADER_ORIGIN: (u32, u32) = (25, 35);
/// Origin of the group holding the counter cells
pub const STATS_ORIGIN: (u32, u32) = (25, 70);
/// Baseline of label and value text inside a cell
pub const TEXT_BASELINE: f32 = 12.5;
/// Label x offset inside a cell
pub const LABEL_X: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Filled dot
    Star,
    /// Rounded square
    Repo,
    /// Ring with two dots
    Followers,
}

/// Labels for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title_suffix: &'static str,
    pub stars: &'static str,
    pub repos: &'static str,
    pub followers: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ja => Labels {
                title_suffix: "のGitHub統計",
                stars: "総スター数:",
                repos: "総リポジトリ数:",
                followers: "フォロワー数:",
            },
            Locale::En => Labels {
                title_suffix: "'s GitHub Stats",
                stars: "Total Stars:",
                repos: "Total Repos:",
                followers: "Followers:",
            },
        }
    }
}

/// One counter placed relative to `STATS_ORIGIN`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub x: u32,
    pub y: u32,
    pub icon: Icon,
    pub label: &'static str,
    pub value: u64,
    /// Value x offset inside the cell; the repo label is wider
    pub value_x: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub width: u32,
    pub height: u32,
    /// Unescaped display name shown in the header
    pub name: String,
    pub title_suffix: &'static str,
    pub cells: [StatCell; 3],
}

/// Place `stats` on the card. Stars and repos share the first row, followers
/// sit alone on the second.
pub fn layout_card(stats: &UserStats, locale: Locale) -> CardLayout {
    let labels = Labels::for_locale(locale);
    CardLayout {
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
        name: stats.name.clone(),
        title_suffix: labels.title_suffix,
        cells: [
            StatCell {
                x: 0,
                y: 25,
                icon: Icon::Star,
                label: labels.stars,
                value: stats.stars,
                value_x: 120,
            },
            StatCell {
                x: 220,
                y: 25,
                icon: Icon::Repo,
                label: labels.repos,
                value: stats.repos,
                value_x: 140,
            },
            StatCell {
                x: 0,
                y: 50,
                icon: Icon::Followers,
                label: labels.followers,
                value: stats.followers,
                value_x: 120,
            },
        ],
    }
}
