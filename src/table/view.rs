//! Render-ready table model
//!
//! A `TableView` is what the table-rendering collaborator paints: header
//! cells with their sort indicator, formatted rows, and the empty-state
//! message when nothing matched.

use super::schema::{Align, SortConfig, SortDirection, TableSchema};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
    pub sortable: bool,
    /// Present only on the active sort column
    pub indicator: Option<SortDirection>,
}

impl HeaderCell {
    /// Label followed by the arrow when this column is active
    pub fn title(&self) -> String {
        match self.indicator {
            Some(direction) => format!("{} {}", self.label, direction.arrow()),
            None => self.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TableView {
    pub table: &'static str,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
    pub sort: SortConfig,
    /// Set when `rows` is empty
    pub empty_message: Option<&'static str>,
}

impl TableView {
    pub fn build<R>(schema: &TableSchema<R>, rows: &[&R], sort: SortConfig) -> Self {
        let headers = schema
            .columns()
            .iter()
            .map(|c| HeaderCell {
                key: c.key,
                label: c.label,
                align: c.align,
                sortable: c.sortable,
                indicator: (c.key == sort.key).then_some(sort.direction),
            })
            .collect();

        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| schema.columns().iter().map(|c| c.cell(row)).collect())
            .collect();

        let empty_message = rows.is_empty().then(|| schema.empty_state());

        Self {
            table: schema.name(),
            headers,
            rows,
            sort,
            empty_message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text table with padded columns
    pub fn render_text(&self) -> String {
        let titles: Vec<String> = self.headers.iter().map(HeaderCell::title).collect();
        let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        out.push_str(&self.render_line(&titles, &widths));
        out.push('\n');
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        match self.empty_message {
            Some(message) => {
                out.push_str(message);
                out.push('\n');
            }
            None => {
                for row in &self.rows {
                    out.push_str(&self.render_line(row, &widths));
                    out.push('\n');
                }
            }
        }
        out
    }

    fn render_line(&self, cells: &[String], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .zip(&self.headers)
            .map(|((cell, width), header)| match header.align {
                Align::Left => format!("{:<width$}", cell, width = *width),
                Align::Right => format!("{:>width$}", cell, width = *width),
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    /// CSV with a header row of column labels
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.headers.iter().map(|h| h.label))?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
