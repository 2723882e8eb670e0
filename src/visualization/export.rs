//! Export functionality for grouped bar chart images.

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregation::ReportSection;
use crate::models::{DateInterval, Measure};


// Dark chart theme
const CHART_BG: &str = "#262624";
const CHART_TEXT: &str = "#FAF9F5";
const CHART_TEXT_SECONDARY: &str = "#C2C0B7";
const CHART_GRID: &str = "#3C3C3A";

// Series fills, one per measure
const FILL_TOTAL: &str = "#CB7B5D";
const FILL_REGISTERED: &str = "#6E9BC5";
const FILL_CASUAL: &str = "#7FA96B";

// Layout
const WIDTH: i32 = 760;
const HEADER_HEIGHT: i32 = 64;
const PANEL_HEIGHT: i32 = 280;
const PLOT_LEFT: i32 = 110;
const PLOT_RIGHT_MARGIN: i32 = 24;
const PLOT_TOP_OFFSET: i32 = 40;
const PLOT_BOTTOM_OFFSET: i32 = 40;
const Y_TICKS: i32 = 4;


/// Export the report as a stacked grouped-bar SVG.
pub fn export_report_svg(
    sections: &[ReportSection],
    interval: DateInterval,
    output_path: &Path,
) -> Result<()> {
    let svg_content = generate_svg(sections, interval);

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export the report as a PNG rasterized from the SVG.
pub fn export_report_png(
    sections: &[ReportSection],
    interval: DateInterval,
    output_path: &Path,
) -> Result<()> {
    let svg_content = generate_svg(sections, interval);

    // Parse SVG
    let tree = resvg::usvg::Tree::from_str(
        &svg_content,
        &resvg::usvg::Options::default(),
    ).context("Failed to parse SVG")?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .context("Failed to create pixmap")?;

    // Fill with background color
    let bg = hex_to_rgb(CHART_BG);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    // Render SVG
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    // Save as PNG
    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Generate the SVG document: header with legend, one panel per section.
fn generate_svg(sections: &[ReportSection], interval: DateInterval) -> String {
    let height = HEADER_HEIGHT + sections.len() as i32 * PANEL_HEIGHT + 20;

    let mut svg_parts = vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, WIDTH, height),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 16px -apple-system, sans-serif; }}", CHART_TEXT),
        format!("  .subtitle {{ fill: {}; font: 11px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        format!("  .panel-title {{ fill: {}; font: bold 13px -apple-system, sans-serif; }}", CHART_TEXT),
        format!("  .axis-label {{ fill: {}; font: 11px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        format!("  .legend-text {{ fill: {}; font: 11px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        format!("  .empty-note {{ fill: {}; font: 12px -apple-system, sans-serif; }}", CHART_TEXT_SECONDARY),
        format!("  .grid-line {{ stroke: {}; stroke-width: 1; }}", CHART_GRID),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, WIDTH, height, CHART_BG),
    ];

    // Header: title, date range, legend
    svg_parts.push(format!(
        r#"<text x="20" y="26" class="title">Bike Sharing Rental Report</text>"#
    ));
    svg_parts.push(format!(
        r#"<text x="20" y="44" class="subtitle">{} to {}</text>"#,
        interval.start(),
        interval.end()
    ));
    svg_parts.push(generate_legend(WIDTH - 340, 20));

    // Panels
    for (idx, section) in sections.iter().enumerate() {
        let top = HEADER_HEIGHT + idx as i32 * PANEL_HEIGHT;
        generate_panel(&mut svg_parts, section, top);
    }

    svg_parts.push("</svg>".to_string());

    svg_parts.join("\n")
}


/// Generate the shared series legend.
fn generate_legend(x: i32, y: i32) -> String {
    let mut parts = Vec::new();
    let mut cursor = x;

    for measure in Measure::ORDER {
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="10" height="10" fill="{}"/>"#,
            cursor, y, measure_fill(measure)
        ));
        parts.push(format!(
            r#"<text x="{}" y="{}" class="legend-text">{}</text>"#,
            cursor + 14, y + 9, measure.label()
        ));
        cursor += 24 + 11 * measure.label().len() as i32;
    }

    parts.join("\n")
}


/// Generate one grouped-bar panel into the parts buffer.
fn generate_panel(svg_parts: &mut Vec<String>, section: &ReportSection, top: i32) {
    let plot_top = top + PLOT_TOP_OFFSET;
    let plot_bottom = top + PANEL_HEIGHT - PLOT_BOTTOM_OFFSET;
    let plot_height = plot_bottom - plot_top;
    let plot_width = WIDTH - PLOT_LEFT - PLOT_RIGHT_MARGIN;

    svg_parts.push(format!(
        r#"<text x="20" y="{}" class="panel-title">{}</text>"#,
        top + 24,
        section.title
    ));

    let long_rows = section.long_rows();

    if long_rows.is_empty() {
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="empty-note" text-anchor="middle">No rides in selected range</text>"#,
            PLOT_LEFT + plot_width / 2,
            plot_top + plot_height / 2
        ));
        return;
    }

    let max_value = long_rows.iter().map(|r| r.value).max().unwrap_or(0);
    let axis_max = nice_ceil(max_value);

    // Gridlines and y-axis labels
    for tick in 0..=Y_TICKS {
        let value = axis_max * tick as i64 / Y_TICKS as i64;
        let y = plot_bottom - (plot_height * tick / Y_TICKS);

        svg_parts.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" class="grid-line"/>"#,
            PLOT_LEFT, y, PLOT_LEFT + plot_width, y
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="axis-label" text-anchor="end">{}</text>"#,
            PLOT_LEFT - 8,
            y + 4,
            format_number(value)
        ));
    }

    // Bar clusters, one per category in long-row order
    let measures = Measure::ORDER.len();
    let clusters: Vec<_> = long_rows.chunks(measures).collect();
    let cluster_width = plot_width as f64 / clusters.len() as f64;
    let group_width = cluster_width * 0.72;
    let bar_width = group_width / measures as f64;

    for (ci, cluster) in clusters.iter().enumerate() {
        let cluster_left = PLOT_LEFT as f64 + ci as f64 * cluster_width;
        let group_left = cluster_left + (cluster_width - group_width) / 2.0;

        for (mi, row) in cluster.iter().enumerate() {
            let bar_height = if axis_max > 0 {
                (row.value as f64 / axis_max as f64) * plot_height as f64
            } else {
                0.0
            };
            let x = group_left + mi as f64 * bar_width;
            let y = plot_bottom as f64 - bar_height;

            svg_parts.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"><title>{} {}: {}</title></rect>"#,
                x,
                y,
                bar_width - 2.0,
                bar_height,
                measure_fill(row.measure),
                row.category,
                row.measure.label(),
                format_number(row.value)
            ));
        }

        // Category label centered under the cluster
        svg_parts.push(format!(
            r#"<text x="{:.1}" y="{}" class="axis-label" text-anchor="middle">{}</text>"#,
            cluster_left + cluster_width / 2.0,
            plot_bottom + 18,
            cluster[0].category
        ));
    }
}


/// Series fill color for one measure.
fn measure_fill(measure: Measure) -> &'static str {
    match measure {
        Measure::Total => FILL_TOTAL,
        Measure::Registered => FILL_REGISTERED,
        Measure::Casual => FILL_CASUAL,
    }
}


/// Round up to a 1/2/5 x 10^k axis maximum.
fn nice_ceil(value: i64) -> i64 {
    if value <= 0 {
        return 1;
    }

    let magnitude = 10f64.powf((value as f64).log10().floor());
    let normalized = value as f64 / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    (nice * magnitude).round() as i64
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
    (r, g, b)
}


/// Format a number with comma thousands separators.
fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}
