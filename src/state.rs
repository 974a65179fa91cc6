use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::chart::export::{export_file_name, write_svg};
use crate::chart::{ChartData, ChartStyle, default_title, svg};
use crate::data::TagDataset;
use crate::data::loader::{self, RawTable};
use crate::data::model::Metric;
use crate::data::rank;

const NOTHING_TO_DISPLAY: &str = "No industries or buzzwords to display.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Aggregated dataset (None until a usable file is loaded).
    pub dataset: Option<TagDataset>,

    /// Name of the loaded file, shown in the top bar.
    pub source_name: Option<String>,

    /// Ranking basis.
    pub metric: Metric,

    /// Tags removed from the ranking.
    pub excluded: BTreeSet<String>,

    /// How many tags to draw.
    pub top_n: usize,

    /// Chart title as shown in the title field.
    pub title: String,

    /// Whether the user has typed their own title.
    pub title_edited: bool,

    /// Search text narrowing the exclusion list.
    pub exclusion_query: String,

    /// Presentation settings handed to both renderers.
    pub style: ChartStyle,

    /// The chart currently on screen (rebuilt on every change).
    pub chart: Option<ChartData>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            source_name: None,
            metric: Metric::Count,
            excluded: BTreeSet::new(),
            top_n: 0,
            title: String::new(),
            title_edited: false,
            exclusion_query: String::new(),
            style: ChartStyle::default(),
            chart: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a CSV from disk, reporting problems in `status_message`.
    pub fn open_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(table) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_table(&table, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a freshly read table. Everything derived from the previous file
    /// is discarded.
    pub fn set_table(&mut self, table: &RawTable, name: String) {
        self.chart = None;
        self.excluded.clear();
        self.exclusion_query.clear();
        self.title_edited = false;

        match TagDataset::from_table(table) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {name}: {} rows, {} tags",
                    dataset.rows.len(),
                    dataset.tags.len()
                );
                if !dataset.has_amounts() {
                    self.metric = Metric::Count;
                }
                self.top_n = rank::default_top_n(dataset.tags.len());
                self.dataset = Some(dataset);
                self.source_name = Some(name);
                self.status_message = None;
                self.refresh();
            }
            Err(e) => {
                log::warn!("{name}: {e} (found {:?})", e.found);
                self.dataset = None;
                self.source_name = Some(name);
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Tags still eligible for ranking.
    pub fn available(&self) -> usize {
        self.dataset
            .as_ref()
            .map(|ds| rank::available(&ds.tags, &self.excluded))
            .unwrap_or(0)
    }

    /// All tags in current metric order, for the exclusion picker.
    pub fn exclusion_options(&self) -> Vec<String> {
        self.dataset
            .as_ref()
            .map(|ds| {
                rank::ordered_tags(&ds.tags, self.metric)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Recompute ranking and chart from the current parameters.
    pub fn refresh(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.chart = None;
            return;
        };

        let available = rank::available(&dataset.tags, &self.excluded);
        self.top_n = rank::clamp_top_n(self.top_n, available);
        if !self.title_edited {
            self.title = default_title(self.top_n, self.metric);
        }

        let ranked = rank::rank(&dataset.tags, self.metric, &self.excluded, self.top_n);
        self.chart = ChartData::build(&ranked, self.metric, &self.title, &self.style);

        if self.chart.is_none() {
            self.status_message = Some(NOTHING_TO_DISPLAY.to_string());
        } else if self.status_message.as_deref() == Some(NOTHING_TO_DISPLAY) {
            self.status_message = None;
        }
    }

    pub fn set_metric(&mut self, metric: Metric) {
        if metric == Metric::TotalAmount
            && !self.dataset.as_ref().is_some_and(TagDataset::has_amounts)
        {
            return;
        }
        self.metric = metric;
        self.refresh();
    }

    pub fn set_top_n(&mut self, n: usize) {
        self.top_n = n;
        self.refresh();
    }

    /// Include or exclude a single tag.
    pub fn toggle_excluded(&mut self, tag: &str) {
        if !self.excluded.remove(tag) {
            self.excluded.insert(tag.to_string());
        }
        self.refresh();
    }

    pub fn clear_excluded(&mut self) {
        self.excluded.clear();
        self.refresh();
    }

    /// The user typed a title.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.title_edited = true;
        self.refresh();
    }

    /// Go back to the generated title.
    pub fn reset_title(&mut self) {
        self.title_edited = false;
        self.refresh();
    }

    /// Suggested file name for the current chart, stamped with local time.
    pub fn export_name(&self) -> String {
        export_file_name(&self.title, chrono::Local::now().naive_local())
    }

    /// Write the current chart as SVG to `path`.
    pub fn export_svg(&self, path: &Path) -> Result<Option<PathBuf>> {
        let Some(chart) = &self.chart else {
            return Ok(None);
        };
        write_svg(path, &svg::render(chart, &self.style))?;
        Ok(Some(path.to_path_buf()))
    }
}
