//! Terminal rendering for the grouped rental report.

use crate::aggregation::ReportSection;
use crate::models::{DateInterval, Measure};


// Constants
const ORANGE: &str = "\x1b[38;5;208m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 38;


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


/// ANSI color for one measure's bars.
fn measure_color(measure: Measure) -> &'static str {
    match measure {
        Measure::Total => ORANGE,
        Measure::Registered => CYAN,
        Measure::Casual => GREEN,
    }
}


/// Create a simple text bar for visualization.
fn create_bar(value: i64, max_value: i64, width: usize, color: &str) -> String {
    if max_value == 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max_value as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        RESET,
        DIM,
        "░".repeat(width - filled),
    ) + RESET
}


/// Render the complete report: header, four grouped-bar panels, footer.
pub fn render_report(
    sections: &[ReportSection],
    interval: DateInterval,
    bounds: DateInterval,
    clear_screen: bool,
) {
    if clear_screen {
        print!("\x1b[2J\x1b[H"); // Clear screen and move cursor to top
    }

    let border = "─".repeat(76);

    println!("┌{}┐", border);
    println!("│{:^76}│", "Bike Sharing Rental Report");
    println!("└{}┘", border);
    println!();
    println!(
        "  {}■{} total   {}■{} registered   {}■{} casual",
        ORANGE, RESET, CYAN, RESET, GREEN, RESET
    );
    println!();

    for section in sections {
        render_section(section);
        println!();
    }

    render_footer(interval, bounds);
}


/// Render one grouped-bar panel.
fn render_section(section: &ReportSection) {
    let border = "─".repeat(76);

    println!("┌{}┐", border);
    println!("│ {}{:<75}{}│", BOLD, section.title, RESET);
    println!("├{}┤", border);

    let long_rows = section.long_rows();

    if long_rows.is_empty() {
        println!("│ {}{:<75}{}│", DIM, "no rides in selected range", RESET);
        println!("└{}┘", border);
        return;
    }

    let max_value = long_rows.iter().map(|r| r.value).max().unwrap_or(0);

    // Long rows are category-major, one chunk per bar cluster.
    for cluster in long_rows.chunks(Measure::ORDER.len()) {
        println!("│ {:<75}│", cluster[0].category);

        for row in cluster {
            let color = measure_color(row.measure);
            let bar = create_bar(row.value, max_value, BAR_WIDTH, color);

            println!(
                "│   {:<10} {} {}{:>12}{}           │",
                row.measure.label(),
                bar,
                color,
                format_number(row.value),
                RESET,
            );
        }
    }

    println!("└{}┘", border);
}


/// Render the footer with the active interval and dataset bounds.
fn render_footer(interval: DateInterval, bounds: DateInterval) {
    println!(
        "{}Showing:{} {}{} to {}{}",
        DIM,
        RESET,
        CYAN,
        interval.start(),
        interval.end(),
        RESET
    );
    println!(
        "{}Dataset range: {} to {}{}",
        DIM,
        bounds.start(),
        bounds.end(),
        RESET
    );
    println!();
    println!(
        "{}Tip: Export these charts with {}{}bsr export --open{}",
        DIM, RESET, CYAN, RESET
    );
}
