// File: crates/glimpse-core/src/view.rs
// First-class view state: the loaded dataset, field selection, paging, and
// read generations guarding against stale file reads.

use std::cell::RefCell;

use crate::chart::build_chart_data;
use crate::classify::classify_columns;
use crate::ingest::{ingest, load_sample};
use crate::stats::compute_statistics;
use crate::types::{ChartKind, ChartPoint, Classification, Dataset, Record, Statistics, PAGE_SIZE};

/// Handed out when a file read starts; only the newest ticket may complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { rows: usize },
    /// Ingestion failed; the previous dataset is kept. Carries the user-facing message.
    Failed(String),
    /// A newer read was started after this one; the result was discarded.
    Stale,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ChartKey {
    generation: u64,
    kind: ChartKind,
    x: Option<String>,
    y: Option<String>,
}

pub struct ViewState {
    dataset: Dataset,
    generation: u64,
    read_generation: u64,
    chart_kind: ChartKind,
    x_field: Option<String>,
    y_field: Option<String>,
    page: usize,
    page_size: usize,
    error: Option<String>,
    classification: RefCell<Option<(u64, Classification)>>,
    chart: RefCell<Option<(ChartKey, Vec<ChartPoint>)>>,
}

impl Default for ViewState {
    fn default() -> Self { Self::new() }
}

impl ViewState {
    pub fn new() -> Self { Self::with_page_size(PAGE_SIZE) }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            dataset: Dataset::empty(),
            generation: 0,
            read_generation: 0,
            chart_kind: ChartKind::Bar,
            x_field: None,
            y_field: None,
            page: 1,
            page_size: page_size.max(1),
            error: None,
            classification: RefCell::new(None),
            chart: RefCell::new(None),
        }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }

    /// Bumped on every dataset replacement (loads and clears).
    pub fn generation(&self) -> u64 { self.generation }

    pub fn error(&self) -> Option<&str> { self.error.as_deref() }

    pub fn chart_kind(&self) -> ChartKind { self.chart_kind }

    pub fn x_field(&self) -> Option<&str> { self.x_field.as_deref() }

    pub fn y_field(&self) -> Option<&str> { self.y_field.as_deref() }

    // ----- loading -----

    /// Start a read; any earlier outstanding ticket becomes stale.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.read_generation += 1;
        ReadTicket(self.read_generation)
    }

    /// Finish a read started with `begin_read`. Stale results and failures
    /// leave the current dataset untouched.
    pub fn complete_read(&mut self, ticket: ReadTicket, content: &str, filename: &str) -> LoadOutcome {
        if ticket.0 != self.read_generation {
            tracing::warn!(ticket = ticket.0, current = self.read_generation, file = filename, "discarding stale read");
            return LoadOutcome::Stale;
        }
        match ingest(content, filename) {
            Ok(dataset) => {
                let rows = dataset.len();
                self.install(dataset);
                LoadOutcome::Loaded { rows }
            }
            Err(e) => {
                tracing::warn!(file = filename, error = %e, "failed to load file");
                let msg = e.to_string();
                self.error = Some(msg.clone());
                LoadOutcome::Failed(msg)
            }
        }
    }

    /// Synchronous load: begin and complete in one step.
    pub fn load(&mut self, content: &str, filename: &str) -> LoadOutcome {
        let ticket = self.begin_read();
        self.complete_read(ticket, content, filename)
    }

    pub fn load_sample(&mut self) -> LoadOutcome {
        self.begin_read();
        let dataset = load_sample();
        let rows = dataset.len();
        self.install(dataset);
        LoadOutcome::Loaded { rows }
    }

    /// Replace the dataset with an empty one; in-flight reads are superseded.
    pub fn clear(&mut self) {
        self.begin_read();
        self.install(Dataset::empty());
    }

    fn install(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.generation += 1;
        self.page = 1;
        self.error = None;
        self.classification.borrow_mut().take();
        self.chart.borrow_mut().take();

        // x: first numeric column, else first column; y: second numeric, else first numeric.
        let cls = self.classification();
        self.x_field = cls.numeric.first().or_else(|| self.dataset.columns().first()).cloned();
        self.y_field = cls.numeric.get(1).or_else(|| cls.numeric.first()).cloned();
        tracing::debug!(
            generation = self.generation,
            rows = self.dataset.len(),
            x = ?self.x_field,
            y = ?self.y_field,
            "installed dataset"
        );
    }

    // ----- selection -----

    pub fn set_chart_kind(&mut self, kind: ChartKind) { self.chart_kind = kind; }

    pub fn set_x_field(&mut self, x: Option<String>) { self.x_field = x; }

    pub fn set_y_field(&mut self, y: Option<String>) { self.y_field = y; }

    // ----- derived data -----

    pub fn classification(&self) -> Classification {
        if let Some((generation, cls)) = &*self.classification.borrow() {
            if *generation == self.generation {
                return cls.clone();
            }
        }
        let cls = classify_columns(&self.dataset, None);
        *self.classification.borrow_mut() = Some((self.generation, cls.clone()));
        cls
    }

    /// Chart points for the current selection, memoized per (dataset, kind, x, y).
    pub fn chart_data(&self) -> Vec<ChartPoint> {
        let key = ChartKey {
            generation: self.generation,
            kind: self.chart_kind,
            x: self.x_field.clone(),
            y: self.y_field.clone(),
        };
        if let Some((cached, points)) = &*self.chart.borrow() {
            if *cached == key {
                return points.clone();
            }
        }
        let cls = self.classification();
        let points = build_chart_data(
            &self.dataset,
            self.chart_kind,
            self.x_field.as_deref(),
            self.y_field.as_deref(),
            &cls.numeric,
            &cls.categorical,
        );
        *self.chart.borrow_mut() = Some((key, points.clone()));
        points
    }

    pub fn statistics(&self) -> Option<Statistics> {
        let cls = self.classification();
        compute_statistics(&self.dataset, &cls.numeric, self.y_field.as_deref())
    }

    // ----- paging -----

    pub fn page(&self) -> usize { self.page }

    pub fn page_size(&self) -> usize { self.page_size }

    pub fn total_pages(&self) -> usize {
        self.dataset.len().div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    pub fn next_page(&mut self) { self.set_page(self.page + 1); }

    pub fn prev_page(&mut self) { self.set_page(self.page.saturating_sub(1)); }

    /// Records on the current page.
    pub fn page_rows(&self) -> &[Record] {
        let records = self.dataset.records();
        let start = ((self.page - 1) * self.page_size).min(records.len());
        let end = (start + self.page_size).min(records.len());
        &records[start..end]
    }
}
