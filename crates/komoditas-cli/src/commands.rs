//! Command implementations. Each returns data; printing lives in `summary`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span, warn};

use komoditas_ingest::TextEncoding;
use komoditas_model::{Choice, CommodityMatch, DatasetKind, DatasetProfile, FilterSelection};
use komoditas_transform::{PipelineOutcome, PreparedDataset, SearchReport, prepare};

use crate::config::AppConfig;

/// One line of the `kinds` listing.
#[derive(Debug, Clone)]
pub struct KindInfo {
    pub kind: DatasetKind,
    pub path: PathBuf,
    pub exists: bool,
    pub required: Vec<String>,
    pub commodity_match: CommodityMatch,
}

pub fn describe_kinds(config: &AppConfig) -> Vec<KindInfo> {
    DatasetKind::ALL
        .into_iter()
        .map(|kind| {
            let profile = DatasetProfile::for_kind(kind);
            let path = config.dataset_path(kind);
            let required = profile
                .required
                .iter()
                .map(|requirement| match requirement.fallback {
                    Some(fallback) => format!("{} (or {fallback})", requirement.name),
                    None => requirement.name.to_string(),
                })
                .collect();
            KindInfo {
                kind,
                exists: path.is_file(),
                path,
                required,
                commodity_match: profile.commodity_match,
            }
        })
        .collect()
}

fn load(config: &AppConfig, kind: DatasetKind) -> Result<PreparedDataset> {
    let path = config.dataset_path(kind);
    prepare(kind, &path).with_context(|| format!("load {kind} data from {}", path.display()))
}

pub fn list_offices(config: &AppConfig, kind: DatasetKind) -> Result<Vec<String>> {
    let dataset = load(config, kind)?;
    dataset.offices().context("list offices")
}

pub fn list_commodities(
    config: &AppConfig,
    kind: DatasetKind,
    satpel: Option<&str>,
) -> Result<Vec<String>> {
    let dataset = load(config, kind)?;
    dataset
        .commodities(&Choice::from_option(satpel))
        .context("list commodities")
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub kind: DatasetKind,
    pub satpel: Option<String>,
    pub komoditas: Option<String>,
    pub export_dir: Option<PathBuf>,
}

impl SearchRequest {
    pub fn selection(&self) -> FilterSelection {
        FilterSelection::new(
            Choice::from_option(self.satpel.as_deref()),
            Choice::from_option(self.komoditas.as_deref()),
        )
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: PipelineOutcome,
    /// Commodity the user asked for that the office does not carry.
    pub reset_commodity: Option<String>,
    pub export_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct SearchJson<'a> {
    #[serde(flatten)]
    report: SearchReport,
    reset_commodity: Option<&'a str>,
    export_path: Option<&'a Path>,
}

impl SearchResult {
    pub fn to_json(&self) -> Result<String> {
        let json = SearchJson {
            report: self.outcome.report(),
            reset_commodity: self.reset_commodity.as_deref(),
            export_path: self.export_path.as_deref(),
        };
        serde_json::to_string_pretty(&json).context("serialize search result")
    }
}

pub fn run_search(config: &AppConfig, request: &SearchRequest) -> Result<SearchResult> {
    let dataset = load(config, request.kind)?;
    let requested = request.selection();
    let selection = dataset
        .reconcile(requested.clone())
        .context("check commodity against office")?;
    let reset_commodity = if selection == requested {
        None
    } else {
        requested.commodity.value().map(str::to_string)
    };
    let outcome = dataset.search(selection).context("filter dataset")?;
    let export_path = match &request.export_dir {
        Some(dir) => Some(
            outcome
                .write_export(dir)
                .with_context(|| format!("write export into {}", dir.display()))?,
        ),
        None => None,
    };
    Ok(SearchResult {
        outcome,
        reset_commodity,
        export_path,
    })
}

#[derive(Debug, Clone)]
pub enum OverviewStatus {
    Ready {
        encoding: TextEncoding,
        rows: usize,
        offices: usize,
        commodities: usize,
    },
    Failed {
        stage: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub struct OverviewRow {
    pub kind: DatasetKind,
    pub path: PathBuf,
    pub status: OverviewStatus,
}

impl OverviewRow {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, OverviewStatus::Failed { .. })
    }
}

/// Loads every dataset. A failing kind is reported in its row and does not
/// stop the others.
pub fn run_overview(config: &AppConfig) -> Vec<OverviewRow> {
    let span = info_span!("overview");
    let _guard = span.enter();
    let rows: Vec<OverviewRow> = DatasetKind::ALL
        .into_iter()
        .map(|kind| overview_row(config, kind))
        .collect();
    let failed = rows.iter().filter(|row| row.is_failure()).count();
    info!(kinds = rows.len(), failed, "overview complete");
    rows
}

fn overview_row(config: &AppConfig, kind: DatasetKind) -> OverviewRow {
    let path = config.dataset_path(kind);
    let status = match prepare(kind, &path) {
        Ok(dataset) => match (dataset.offices(), dataset.commodities(&Choice::All)) {
            (Ok(offices), Ok(commodities)) => OverviewStatus::Ready {
                encoding: dataset.encoding,
                rows: dataset.frame.height(),
                offices: offices.len(),
                commodities: commodities.len(),
            },
            (Err(error), _) | (_, Err(error)) => OverviewStatus::Failed {
                stage: "transform",
                message: error.to_string(),
            },
        },
        Err(error) => {
            warn!(%kind, stage = error.stage(), %error, "dataset unavailable");
            OverviewStatus::Failed {
                stage: error.stage(),
                message: error.to_string(),
            }
        }
    };
    OverviewRow { kind, path, status }
}
