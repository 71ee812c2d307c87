use crate::application::calendar::{CalendarDay, CalendarMonth};

const CELL_WIDTH: usize = 10;

/// Plain-text month grid: day number on the first line of each cell,
/// the day's P/L under it when trades were booked.
pub fn render_month(month: &CalendarMonth) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", month.label));
    for label in month.weekdays {
        out.push_str(&format!("{label:<CELL_WIDTH$}"));
    }
    out.push('\n');

    for week in &month.weeks {
        let days: Vec<String> = week.iter().map(day_line).collect();
        let pls: Vec<String> = week.iter().map(pl_line).collect();
        out.push_str(days.concat().trim_end());
        out.push('\n');
        out.push_str(pls.concat().trim_end());
        out.push('\n');
    }
    out.push_str(&format!("Month P/L: {}\n", signed(month.total_pl)));
    out
}

fn day_line(cell: &CalendarDay) -> String {
    match cell.day {
        Some(day) => format!("{day:<CELL_WIDTH$}"),
        None => " ".repeat(CELL_WIDTH),
    }
}

fn pl_line(cell: &CalendarDay) -> String {
    if cell.trade_count == 0 {
        return " ".repeat(CELL_WIDTH);
    }
    format!("{:<CELL_WIDTH$}", signed(cell.pl))
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}
