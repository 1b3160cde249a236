// src/presentation.rs
use std::io::Write;

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use manga_volumes_domain::{OwnedVolumeSet, RangeToken, Shelf};
use manga_volumes_shared_kernel::Result;
use manga_volumes_usecase::{LibrarySummary, SaveOutcome, VolumeOverview};
use serde::Serialize;

use crate::options::OutputFormat;

/// Slots per row of the shelf grid.
const SHELF_ROW: usize = 10;

/// A view that can be printed as text as well as serialized.
pub trait TextView: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

pub fn render<V: TextView>(out: &mut dyn Write, format: OutputFormat, view: &V) -> Result<()> {
    match format {
        OutputFormat::Table => view.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => write_yaml(out, view)?,
    }
    Ok(())
}

#[cfg(feature = "yaml")]
fn write_yaml<V: Serialize>(out: &mut dyn Write, view: &V) -> Result<()> {
    let yaml = serde_yaml::to_string(view)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}

#[cfg(not(feature = "yaml"))]
fn write_yaml<V: Serialize>(_out: &mut dyn Write, _view: &V) -> Result<()> {
    Err(manga_volumes_shared_kernel::PresentationError::UnsupportedFormat { format: "yaml".to_string() }.into())
}

/// Result of normalizing range text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseView {
    pub input: String,
    pub tokens: Vec<String>,
    pub volumes: Vec<u32>,
    pub canonical: String,
    pub count: usize,
}

impl ParseView {
    pub fn new(input: &str, tokens: &[RangeToken], owned: &OwnedVolumeSet) -> Self {
        Self {
            input: input.to_string(),
            tokens: tokens.iter().map(ToString::to_string).collect(),
            volumes: owned.numbers(),
            canonical: owned.to_string(),
            count: owned.len(),
        }
    }
}

impl TextView for ParseView {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.canonical)?;
        writeln!(out, "{} volume(s)", self.count)
    }
}

/// A bare canonical range string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalView {
    pub canonical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl CanonicalView {
    pub fn new(owned: &OwnedVolumeSet) -> Self {
        Self { canonical: owned.to_string(), count: Some(owned.len()) }
    }

    /// Range text that is already canonical, such as an edit seed.
    pub fn from_text(canonical: String) -> Self {
        Self { canonical, count: None }
    }
}

impl TextView for CanonicalView {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.canonical)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub id: u64,
    pub title: String,
    pub total_volumes: Option<u32>,
    pub owned_count: usize,
    pub volumes: String,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct LibraryView(pub Vec<SummaryRow>);

impl LibraryView {
    pub fn new(summaries: Vec<LibrarySummary>) -> Self {
        Self(
            summaries
                .into_iter()
                .map(|s| SummaryRow {
                    id: s.id.value(),
                    owned_count: s.owned.len(),
                    volumes: s.owned.to_string(),
                    title: s.title,
                    total_volumes: s.total_volumes,
                })
                .collect(),
        )
    }
}

impl TextView for LibraryView {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.0.is_empty() {
            return writeln!(out, "Library is empty.");
        }
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "TITLE", "OWNED", "TOTAL", "VOLUMES"]);
        for row in &self.0 {
            table.add_row(vec![
                row.id.to_string(),
                row.title.clone(),
                row.owned_count.to_string(),
                row.total_volumes.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string()),
                row.volumes.clone(),
            ]);
        }
        writeln!(out, "{table}")
    }
}

/// One manga's volumes, including the shelf grid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub id: u64,
    pub title: String,
    pub total_volumes: Option<u32>,
    pub owned_count: usize,
    pub volumes: String,
    pub owned: Vec<u32>,
    /// `None` when the shelf is too long to lay out.
    pub missing: Option<String>,
    #[serde(skip)]
    shelf: Shelf,
}

impl OverviewView {
    pub fn new(overview: &VolumeOverview) -> Self {
        Self {
            id: overview.id.value(),
            title: overview.title.clone(),
            total_volumes: overview.total_volumes,
            owned_count: overview.owned.len(),
            volumes: overview.canonical(),
            owned: overview.owned.numbers(),
            missing: overview.shelf.missing().map(|missing| missing.to_string()),
            shelf: overview.shelf.clone(),
        }
    }
}

impl TextView for OverviewView {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{} (#{}): {} owned", self.title, self.id, self.owned_count)?;
        write_shelf(out, &self.shelf)?;
        if let Some(missing) = self.missing.as_deref().filter(|m| !m.is_empty()) {
            writeln!(out, "Missing: {missing}")?;
        }
        Ok(())
    }
}

/// Owned volumes render as `[n]`, the rest as plain numbers.
fn write_shelf(out: &mut dyn Write, shelf: &Shelf) -> std::io::Result<()> {
    if shelf.is_empty() {
        return writeln!(out, "No volumes tracked yet.");
    }
    if shelf.is_oversized() {
        return writeln!(
            out,
            "Shelf of {} volumes is too long to draw (limit {}).",
            shelf.len(),
            Shelf::MAX_GRID_LEN
        );
    }
    let width = shelf.len().to_string().len();
    let cells: Vec<String> = shelf
        .slots()
        .map(|slot| {
            if slot.owned {
                format!("[{:>width$}]", slot.number.get())
            } else {
                format!(" {:>width$} ", slot.number.get())
            }
        })
        .collect();
    for row in cells.chunks(SHELF_ROW) {
        writeln!(out, "{}", row.join(" ").trim_end())?;
    }
    Ok(())
}

/// Result of an edit: the new state plus what changed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveView {
    #[serde(flatten)]
    pub overview: OverviewView,
    pub added: String,
    pub removed: String,
}

impl SaveView {
    pub fn new(outcome: &SaveOutcome) -> Self {
        Self {
            overview: OverviewView::new(&outcome.overview),
            added: outcome.diff.added.to_string(),
            removed: outcome.diff.removed.to_string(),
        }
    }
}

impl TextView for SaveView {
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()> {
        if self.added.is_empty() && self.removed.is_empty() {
            writeln!(out, "No changes.")?;
        } else {
            if !self.added.is_empty() {
                writeln!(out, "Added: {}", self.added)?;
            }
            if !self.removed.is_empty() {
                writeln!(out, "Removed: {}", self.removed)?;
            }
        }
        self.overview.write_text(out)
    }
}
