//! Plain-text tables for the CLI

use std::io::{self, Write};

use crate::filters::{OVERALL, ParticipantFilter};
use crate::models::{
    ActivityCount, ActivityHeatmap, BusyUsers, DailyPoint, EmojiCount, MessageRecord,
    MonthlyPoint, Overview, WordCount, WordWeight,
};
use crate::utils::sanitize_cell;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn heading(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

/// Width of the widest cell, in characters
fn column_width<'a>(cells: impl IntoIterator<Item = &'a str>) -> usize {
    cells.into_iter().map(|cell| cell.chars().count()).max().unwrap_or(0)
}

fn write_row(out: &mut impl Write, label: &str, width: usize, value: &str) -> io::Result<()> {
    let padding = width.saturating_sub(label.chars().count());
    writeln!(out, "  {}{}  {}", label, " ".repeat(padding), value)
}

fn write_counts<'a>(
    out: &mut impl Write,
    rows: impl IntoIterator<Item = (&'a str, usize)>,
) -> io::Result<()> {
    let rows: Vec<(String, usize)> =
        rows.into_iter().map(|(label, count)| (sanitize_cell(label), count)).collect();
    if rows.is_empty() {
        return writeln!(out, "  (none)");
    }

    let width = column_width(rows.iter().map(|(label, _)| label.as_str()));
    for (label, count) in &rows {
        write_row(out, label, width, &count.to_string())?;
    }
    Ok(())
}

pub fn overview(
    out: &mut impl Write,
    filter: &ParticipantFilter,
    summary: &Overview,
    selected: &[&MessageRecord],
) -> io::Result<()> {
    heading(out, "Chat Statistics")?;
    writeln!(out, "Participant: {}", sanitize_cell(filter.name().unwrap_or(OVERALL)))?;
    writeln!(out, "Total messages: {}", summary.messages)?;
    writeln!(out, "Total words: {}", summary.words)?;
    writeln!(out, "Media shared: {}", summary.media)?;
    writeln!(out, "Links shared: {}", summary.links)?;

    if let Some(first) = selected.first() {
        writeln!(out, "First message: {}", first.timestamp().format(TIMESTAMP_FORMAT))?;
    }
    if let Some(last) = selected.last() {
        writeln!(out, "Last message: {}", last.timestamp().format(TIMESTAMP_FORMAT))?;
    }
    Ok(())
}

pub fn busy_users(out: &mut impl Write, busy: &BusyUsers) -> io::Result<()> {
    heading(out, "Most Busy Users")?;
    write_counts(out, busy.top.iter().map(|u| (u.user.as_str(), u.count)))?;
    writeln!(out)?;

    heading(out, "Share of Messages")?;
    let names: Vec<String> = busy.shares.iter().map(|s| sanitize_cell(&s.user)).collect();
    let width = column_width(names.iter().map(String::as_str));
    for (name, share) in names.iter().zip(&busy.shares) {
        write_row(out, name, width, &format!("{:>6.2}%", share.percent))?;
    }
    Ok(())
}

/// Picker order: the wildcard first, then senders alphabetically
pub fn participants(out: &mut impl Write, names: &[String]) -> io::Result<()> {
    writeln!(out, "{}", OVERALL)?;
    for name in names {
        writeln!(out, "{}", sanitize_cell(name))?;
    }
    Ok(())
}

pub fn top_words(out: &mut impl Write, words: &[WordCount]) -> io::Result<()> {
    heading(out, "Most Common Words")?;
    write_counts(out, words.iter().map(|w| (w.word.as_str(), w.count)))
}

pub fn word_weights(out: &mut impl Write, weights: &[WordWeight]) -> io::Result<()> {
    heading(out, "Word Cloud")?;
    if weights.is_empty() {
        return writeln!(out, "  (none)");
    }

    let words: Vec<String> = weights.iter().map(|w| sanitize_cell(&w.word)).collect();
    let width = column_width(words.iter().map(String::as_str));
    for (word, weight) in words.iter().zip(weights) {
        write_row(out, word, width, &format!("{:.3}", weight.weight))?;
    }
    Ok(())
}

pub fn emojis(out: &mut impl Write, emojis: &[EmojiCount]) -> io::Result<()> {
    heading(out, "Emoji Analysis")?;
    write_counts(out, emojis.iter().map(|e| (e.emoji.as_str(), e.count)))
}

pub fn monthly_timeline(out: &mut impl Write, points: &[MonthlyPoint]) -> io::Result<()> {
    heading(out, "Monthly Timeline")?;
    write_counts(out, points.iter().map(|p| (p.label.as_str(), p.count)))
}

pub fn daily_timeline(out: &mut impl Write, points: &[DailyPoint]) -> io::Result<()> {
    heading(out, "Daily Timeline")?;
    if points.is_empty() {
        return writeln!(out, "  (none)");
    }
    for point in points {
        writeln!(out, "  {}  {}", point.date.format("%Y-%m-%d"), point.count)?;
    }
    Ok(())
}

pub fn activity(out: &mut impl Write, title: &str, counts: &[ActivityCount]) -> io::Result<()> {
    heading(out, title)?;
    write_counts(out, counts.iter().map(|a| (a.label, a.count)))
}

pub fn heatmap(out: &mut impl Write, heatmap: &ActivityHeatmap) -> io::Result<()> {
    heading(out, "Weekly Activity Map")?;

    let row_width = column_width(heatmap.rows.iter().copied());
    let cell_width = column_width(heatmap.columns.iter().map(String::as_str));

    write!(out, "{}", " ".repeat(row_width))?;
    for column in &heatmap.columns {
        write!(out, " {:>width$}", column, width = cell_width)?;
    }
    writeln!(out)?;

    for (row, cells) in heatmap.rows.iter().zip(&heatmap.cells) {
        write!(out, "{:<width$}", row, width = row_width)?;
        for count in cells {
            write!(out, " {:>width$}", count, width = cell_width)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
