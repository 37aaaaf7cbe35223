//! # Tabular display for predicted passes
//!
//! [`PassTable`] borrows a slice of [`Pass`] and renders it with [`comfy-table`] when used with
//! Rust formatting (`{}`), without cloning the passes.
//!
//! Columns: `# | Start (UTC) | Peak | Max el. | Duration | Rise → Set | Visibility | Score | Brightness`.
//!
//! ## Quick examples
//!
//! ```rust,ignore
//! use passwatch::passes::display::PassTableExt;
//!
//! // chronological
//! println!("{}", passes.table());
//!
//! // best first, naked-eye passes only
//! println!("{}", passes.table().ranked().visible_only());
//! ```
//!
//! The `#` column always shows the index of the pass in the borrowed slice, so a ranked table
//! still points back at chronological order.
//!
//! [`comfy-table`]: https://crates.io/crates/comfy-table
use std::cmp::Reverse;
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::conversion::{compass_point, format_duration};
use crate::passes::{describe_visibility, Pass};
use crate::time::{fmt_utc, fmt_utc_time};

/// Display adaptor rendering a pass list as a table.
pub struct PassTable<'a> {
    passes: &'a [Pass],
    ranked: bool,
    visible_only: bool,
}

impl<'a> PassTable<'a> {
    pub fn new(passes: &'a [Pass]) -> Self {
        PassTable {
            passes,
            ranked: false,
            visible_only: false,
        }
    }

    /// Order rows by descending score instead of start time.
    pub fn ranked(mut self) -> Self {
        self.ranked = true;
        self
    }

    /// Keep only passes with at least one visible segment.
    pub fn visible_only(mut self) -> Self {
        self.visible_only = true;
        self
    }

    /// Rows as `(slice index, pass)`, filtered and ordered according to the builder flags.
    fn rows(&self) -> Vec<(usize, &'a Pass)> {
        let mut rows: Vec<(usize, &'a Pass)> = self
            .passes
            .iter()
            .enumerate()
            .filter(|(_, pass)| !self.visible_only || pass.visible)
            .collect();

        if self.ranked {
            // same ordering as rank_passes; the sort is stable
            rows.sort_by_key(|(_, pass)| (Reverse(pass.score), pass.start));
        }
        rows
    }

    fn build_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec![
                "#",
                "Start (UTC)",
                "Peak",
                "Max el.",
                "Duration",
                "Rise → Set",
                "Visibility",
                "Score",
                "Brightness",
            ]);

        for (i, pass) in self.rows() {
            let mut row = Row::new();
            row.add_cell(Cell::new(i).set_alignment(CellAlignment::Right))
                .add_cell(Cell::new(fmt_utc(&pass.start)))
                .add_cell(Cell::new(fmt_utc_time(&pass.peak_time)))
                .add_cell(
                    Cell::new(format!("{:.1}°", pass.max_elevation))
                        .set_alignment(CellAlignment::Right),
                )
                .add_cell(
                    Cell::new(format_duration(pass.duration)).set_alignment(CellAlignment::Right),
                )
                .add_cell(Cell::new(format!(
                    "{} → {}",
                    compass_point(pass.start_azimuth),
                    compass_point(pass.end_azimuth)
                )))
                .add_cell(Cell::new(describe_visibility(pass)))
                .add_cell(Cell::new(pass.score).set_alignment(CellAlignment::Right))
                .add_cell(Cell::new(pass.brightness));
            table.add_row(row);
        }
        table
    }
}

impl fmt::Display for PassTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build_table())
    }
}

/// Ergonomic entry point: `passes.table()`.
pub trait PassTableExt {
    fn table(&self) -> PassTable<'_>;
}

impl PassTableExt for [Pass] {
    fn table(&self) -> PassTable<'_> {
        PassTable::new(self)
    }
}

impl PassTableExt for Vec<Pass> {
    fn table(&self) -> PassTable<'_> {
        PassTable::new(self.as_slice())
    }
}
