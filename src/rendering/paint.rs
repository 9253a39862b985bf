//! SVG serialization of a `CardLayout`

use super::layout::{CardLayout, Icon, StatCell, HEADER_ORIGIN, LABEL_X, STATS_ORIGIN, TEXT_BASELINE};
use super::text::{escape_xml, format_count};

const FONT_STACK: &str = "'Segoe UI', Ubuntu, Sans-Serif";
const ICON_COLOR: &str = "#4c71f2";

fn style_block() -> String {
    format!(
        r#"  <style>
    .header {{ font: 600 18px {font}; fill: #2f80ed; }}
    .stat {{ font: 600 14px {font}; fill: #333; }}
    .stname {{ font: 400 12px {font}; fill: #666; }}
    .icon {{ fill: {icon}; }}
    .bold {{ font-weight: 700; }}
  </style>
"#,
        font = FONT_STACK,
        icon = ICON_COLOR
    )
}

fn icon_markup(icon: Icon) -> String {
    match icon {
        Icon::Star => r#"<circle cx="8" cy="6" r="4" class="icon"/>"#.to_string(),
        Icon::Repo => r#"<rect x="4" y="2" width="8" height="8" rx="2" class="icon"/>"#.to_string(),
        Icon::Followers => format!(
            r#"<circle cx="8" cy="6" r="3" fill="none" stroke="{}" stroke-width="2"/><circle cx="6" cy="4" r="1" class="icon"/><circle cx="10" cy="4" r="1" class="icon"/>"#,
            ICON_COLOR
        ),
    }
}

fn cell_markup(cell: &StatCell) -> String {
    format!(
        r#"    <g transform="translate({x}, {y})">
      <g class="stat">
        {icon}
        <text class="stat bold" x="{lx}" y="{base}">{label}</text>
        <text class="stat" x="{vx}" y="{base}">{value}</text>
      </g>
    </g>
"#,
        x = cell.x,
        y = cell.y,
        icon = icon_markup(cell.icon),
        lx = LABEL_X,
        base = TEXT_BASELINE,
        label = escape_xml(cell.label),
        vx = cell.value_x,
        value = format_count(cell.value),
    )
}

/// Serialize `layout` to a standalone SVG document
pub fn paint_svg(layout: &CardLayout) -> String {
    let mut out = String::with_capacity(2048);
    out.push_str(&format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" fill="none" xmlns="http://www.w3.org/2000/svg" class="svg-card">
"#,
        w = layout.width,
        h = layout.height
    ));
    out.push_str(&style_block());
    out.push_str(
        r##"  <rect x="0.5" y="0.5" rx="4.5" height="99%" width="99%" fill="#fffefe" stroke="#e4e2e2"/>
"##,
    );

    out.push_str(&format!(
        r#"  <g transform="translate({}, {})">
    <g transform="translate(0, 0)">
      <text x="0" y="0" class="header">{}{}</text>
    </g>
  </g>
"#,
        HEADER_ORIGIN.0,
        HEADER_ORIGIN.1,
        escape_xml(&layout.name),
        escape_xml(layout.title_suffix)
    ));

    out.push_str(&format!(
        "  <g transform=\"translate({}, {})\">\n",
        STATS_ORIGIN.0, STATS_ORIGIN.1
    ));
    for cell in &layout.cells {
        out.push_str(&cell_markup(cell));
    }
    out.push_str("  </g>\n</svg>\n");
    out
}
