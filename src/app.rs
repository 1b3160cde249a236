// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use manga_volumes_domain::{OwnedVolumeSet, parse_tokens};
use manga_volumes_infra::JsonLibrary;
use manga_volumes_shared_kernel::MangaId;
use manga_volumes_usecase::ManageVolumes;
use tracing::debug;

use crate::{
    args::Command,
    config::Config,
    presentation::{self, CanonicalView, LibraryView, OverviewView, ParseView, SaveView},
};

/// Executes one command, writing its report to `out`.
pub fn run(command: &Command, config: &Config, out: &mut dyn Write) -> Result<()> {
    let library = JsonLibrary::new(&config.library);
    let volumes = ManageVolumes::new(&library).with_options(config.parse);
    debug!(library = %config.library.display(), ?command, "running command");

    match command {
        Command::Parse { text } => {
            let owned = volumes.preview(text);
            let view = ParseView::new(text, &parse_tokens(text), &owned);
            presentation::render(out, config.format, &view)?;
        }
        Command::Format { numbers } => {
            let owned: OwnedVolumeSet = numbers.iter().copied().collect();
            presentation::render(out, config.format, &CanonicalView::new(&owned))?;
        }
        Command::List => {
            let summaries = volumes.list().context("failed to list library")?;
            presentation::render(out, config.format, &LibraryView::new(summaries))?;
        }
        Command::Show { id } => {
            let overview = volumes
                .overview(MangaId::new(*id))
                .with_context(|| format!("failed to load manga {id}"))?;
            presentation::render(out, config.format, &OverviewView::new(&overview))?;
        }
        Command::Seed { id } => {
            let seed = volumes
                .seed_input(MangaId::new(*id))
                .with_context(|| format!("failed to load manga {id}"))?;
            presentation::render(out, config.format, &CanonicalView::from_text(seed))?;
        }
        Command::Edit { id, text } => {
            let outcome = volumes
                .save(MangaId::new(*id), text)
                .with_context(|| format!("failed to update volumes of manga {id}"))?;
            presentation::render(out, config.format, &SaveView::new(&outcome))?;
        }
        Command::Add { title, total, volumes: text } => {
            let overview = volumes.add(title, *total, text).context("failed to add manga")?;
            presentation::render(out, config.format, &OverviewView::new(&overview))?;
        }
    }
    Ok(())
}
