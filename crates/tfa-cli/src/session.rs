//! # Session Plumbing
//!
//! Opens the JSON-file-backed registry, loads the season catalog, and
//! fixes the reference date for one CLI invocation. The core takes the
//! reference date as a parameter everywhere; the CLI is where "today"
//! comes from — or `--on` when an operator is backdating a report.

use std::path::{Path, PathBuf};

use anyhow::Context;

use tfa_core::{CalendarDate, DomainEvent, SeasonCatalog};
use tfa_registry::{IntakeOffice, JsonFileStore, Registry};

/// One CLI invocation's view of the world.
pub struct Session {
    /// The hydrated, file-backed registry.
    pub registry: Registry,
    /// The intake office over the loaded catalog.
    pub office: IntakeOffice,
    /// Reference date for every derivation in this invocation.
    pub on: CalendarDate,
}

/// Where the session's state comes from.
#[derive(Debug, Clone)]
pub struct SessionOpts {
    /// Path to the registry file. Created on first mutation if absent.
    pub registry_path: PathBuf,
    /// Optional season catalog YAML; the built-in catalog otherwise.
    pub catalog_path: Option<PathBuf>,
    /// Optional reference date override, ISO `YYYY-MM-DD`.
    pub on: Option<String>,
}

impl Session {
    /// Open a session from CLI options.
    pub fn open(opts: &SessionOpts) -> anyhow::Result<Self> {
        let store = JsonFileStore::open(&opts.registry_path).with_context(|| {
            format!("opening registry file {}", opts.registry_path.display())
        })?;
        let entries: Vec<(String, serde_json::Value)> = store
            .entries()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let registry = Registry::hydrate(entries, Some(Box::new(store)))
            .context("rehydrating registry from file")?;

        let catalog = match &opts.catalog_path {
            Some(path) => load_catalog(path)?,
            None => SeasonCatalog::builtin(),
        };

        let on = match &opts.on {
            Some(raw) => CalendarDate::parse(raw).context("parsing --on date")?,
            None => CalendarDate::from_naive(chrono::Utc::now().date_naive()),
        };

        tracing::debug!(registry = %opts.registry_path.display(), reference_date = %on, "session opened");
        Ok(Self {
            registry,
            office: IntakeOffice::new(catalog),
            on,
        })
    }

    /// Drain queued notification events and render them as console lines.
    pub fn report_events(&mut self) {
        for event in self.registry.drain_events() {
            match event {
                DomainEvent::ApplicationSubmitted {
                    kind,
                    id,
                    submitted_on,
                } => {
                    println!("notice: {kind} application {id} submitted on {submitted_on}");
                }
                DomainEvent::QuotaWarningRaised {
                    id,
                    usage_percentage,
                } => {
                    println!("warning: {id} has used {usage_percentage}% of its quota");
                }
                DomainEvent::EntityExpired {
                    kind,
                    id,
                    expired_on,
                } => {
                    println!("notice: {kind} {id} expired on {expired_on}");
                }
            }
        }
    }
}

fn load_catalog(path: &Path) -> anyhow::Result<SeasonCatalog> {
    let catalog = SeasonCatalog::from_yaml_file(path)
        .with_context(|| format!("loading season catalog {}", path.display()))?;
    Ok(catalog)
}

/// Parse a bare UUID argument.
pub fn parse_uuid(raw: &str) -> anyhow::Result<uuid::Uuid> {
    uuid::Uuid::parse_str(raw.trim()).with_context(|| format!("{raw:?} is not a valid id"))
}
