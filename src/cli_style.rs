/*!
 * Air-Easy CLI Style System
 *
 * Styling utilities for the booking session: themed text, boxes and tables.
 * Everything writes to a caller-supplied writer so the session can be driven
 * against a buffer as well as the terminal.
 */

use crate::core::FlightRecord;
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use console::{style, StyledObject};
use std::io::{self, Write};

// ============================================================================
// THEME COLORS
// ============================================================================

/// Brand colors for consistent styling
pub struct Theme;

impl Theme {
    /// Primary accent color (cyan/blue)
    pub fn primary<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).cyan()
    }

    /// Success color (green)
    pub fn success<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).green()
    }

    /// Warning color (yellow)
    pub fn warning<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).yellow()
    }

    /// Error color (red)
    pub fn error<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).red()
    }

    /// Muted/secondary text (dim)
    pub fn muted<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).dim()
    }

    /// Header style (bold cyan)
    pub fn header<D: std::fmt::Display>(text: D) -> StyledObject<D> {
        style(text).cyan().bold()
    }
}

// ============================================================================
// ICONS
// ============================================================================

/// Unicode icons for visual feedback
pub struct Icons;

impl Icons {
    pub const SUCCESS: &'static str = "✓";
    pub const ERROR: &'static str = "✗";
    pub const WARNING: &'static str = "⚠";
    pub const INFO: &'static str = "ℹ";

    pub const PLANE: &'static str = "✈";
    pub const TICKET: &'static str = "🎫";
    pub const ARROW_RIGHT: &'static str = "→";
}

// ============================================================================
// BOX DRAWING
// ============================================================================

const BOX_WIDTH: usize = 56;

/// Draw a styled header box
pub fn header_box<W: Write>(out: &mut W, title: &str, subtitle: Option<&str>) -> io::Result<()> {
    let width = BOX_WIDTH;
    let top = format!("╔{}╗", "═".repeat(width));
    let bottom = format!("╚{}╝", "═".repeat(width));

    writeln!(out, "{}", Theme::primary(&top))?;

    // Center the title
    let title_display = format!("{} {}", Icons::PLANE, title);
    write_centered(out, &title_display, width, |s| Theme::header(s).to_string())?;

    if let Some(sub) = subtitle {
        write_centered(out, sub, width, |s| Theme::muted(s).to_string())?;
    }

    writeln!(out, "{}", Theme::primary(&bottom))
}

fn write_centered<W: Write>(
    out: &mut W,
    text: &str,
    width: usize,
    paint: impl Fn(&str) -> String,
) -> io::Result<()> {
    let len = text.chars().count().min(width);
    let padding = (width - len) / 2;
    writeln!(
        out,
        "{}{}{}{}{}",
        Theme::primary("║"),
        " ".repeat(padding),
        paint(text),
        " ".repeat(width - padding - len),
        Theme::primary("║")
    )
}

/// Draw a section header with a line
pub fn section_header<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let line_len = 50 - title.len().min(40);
    writeln!(
        out,
        "\n{} {}",
        Theme::header(title),
        Theme::muted("─".repeat(line_len))
    )
}

// ============================================================================
// TABLES
// ============================================================================

/// Create a styled data table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

/// Listing of flights, numbered from 1 in ledger order
pub fn flights_table(flights: &[FlightRecord]) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Flight Number"),
        header_cell("Departure"),
        header_cell("Arrival"),
        header_cell("Status"),
        header_cell("Available Seats"),
    ]);

    for (i, flight) in flights.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).add_attribute(Attribute::Bold),
            Cell::new(&flight.flight_number).fg(Color::White),
            Cell::new(&flight.departure),
            Cell::new(&flight.arrival),
            Cell::new(&flight.status).fg(Color::DarkGrey),
            seats_cell(flight.available_seats()),
        ]);
    }

    table
}

/// Key-value table used for the printed ticket
pub fn ticket_table(items: &[(&str, &str)]) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        header_cell(&format!("{} Ticket", Icons::TICKET)),
        Cell::new(""),
    ]);

    for (key, value) in items {
        table.add_row(vec![
            Cell::new(key).fg(Color::Cyan),
            Cell::new(value).fg(Color::White).add_attribute(Attribute::Bold),
        ]);
    }

    table
}

fn seats_cell(seats: u32) -> Cell {
    let cell = Cell::new(seats);
    match seats {
        0 => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        1..=9 => cell.fg(Color::Yellow),
        _ => cell.fg(Color::Green),
    }
}

// ============================================================================
// NOTICES
// ============================================================================

/// Write a styled error message with optional suggestion
pub fn write_error<W: Write>(
    out: &mut W,
    message: &str,
    suggestion: Option<&str>,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        Theme::error(format!("{} Error:", Icons::ERROR)),
        message
    )?;

    if let Some(hint) = suggestion {
        writeln!(
            out,
            "  {} {}",
            Theme::muted(Icons::ARROW_RIGHT),
            Theme::muted(hint)
        )?;
    }
    Ok(())
}

/// Write a styled warning message
pub fn write_warning<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        Theme::warning(Icons::WARNING),
        Theme::warning(message)
    )
}

/// Write a styled success message
pub fn write_success<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        Theme::success(Icons::SUCCESS),
        Theme::success(message)
    )
}

/// Write a styled info message
pub fn write_info<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Theme::primary(Icons::INFO), message)
}

/// Print a styled error message to stderr
pub fn print_error(message: &str, suggestion: Option<&str>) {
    let mut err = io::stderr();
    let _ = writeln!(err).and_then(|_| write_error(&mut err, message, suggestion));
}

// ============================================================================
// TESTS
// ============================================================================
