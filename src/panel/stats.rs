/// One profiler sample: a value tagged with the frame it was taken on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSample {
    pub value: f32,
    pub frame: u64,
}

/// A named sample ring. `max_samples` bounds the history independently
/// per series (0 = unbounded); `category` and `unit` are display
/// metadata ("Frame" / "ms" etc).
#[derive(Debug, Clone)]
pub struct StatSeries {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub samples: Vec<StatSample>,
    pub max_samples: usize,
    pub visible: bool,
}

impl StatSeries {
    fn new(name: String, category: String, unit: String) -> Self {
        Self {
            name,
            category,
            unit,
            samples: Vec::new(),
            max_samples: 256,
            visible: true,
        }
    }

    fn trim(&mut self) {
        if self.max_samples == 0 {
            return;
        }
        let len = self.samples.len();
        if len > self.max_samples {
            self.samples.drain(..len - self.max_samples);
        }
    }
}

/// State for the statistics panel: named bounded sample series plus a
/// category filter for display.
#[derive(Debug, Clone, Default)]
pub struct StatisticsState {
    series: Vec<StatSeries>,
    category_filter: String,
}

impl StatisticsState {
    /// Make sure a series with this name exists and return its index.
    /// Category/unit only apply on creation.
    pub fn ensure_series(
        &mut self,
        name: &str,
        category: impl Into<String>,
        unit: impl Into<String>,
    ) -> usize {
        if let Some(index) = self.series.iter().position(|s| s.name == name) {
            return index;
        }
        self.series
            .push(StatSeries::new(name.to_string(), category.into(), unit.into()));
        self.series.len() - 1
    }

    pub fn find_series(&self, name: &str) -> Option<&StatSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn find_series_mut(&mut self, name: &str) -> Option<&mut StatSeries> {
        self.series.iter_mut().find(|s| s.name == name)
    }

    /// Append a sample, creating the series on first use, and trim the
    /// oldest samples past the series cap.
    pub fn add_sample(&mut self, series_name: &str, value: f32, frame: u64) {
        self.add_sample_tagged(series_name, value, frame, "", "");
    }

    pub fn add_sample_tagged(
        &mut self,
        series_name: &str,
        value: f32,
        frame: u64,
        category: impl Into<String>,
        unit: impl Into<String>,
    ) {
        let index = self.ensure_series(series_name, category, unit);
        let series = &mut self.series[index];
        series.samples.push(StatSample { value, frame });
        series.trim();
    }

    pub fn set_series_max_samples(&mut self, name: &str, max_samples: usize) {
        if let Some(series) = self.find_series_mut(name) {
            series.max_samples = max_samples;
            series.trim();
        }
    }

    pub fn set_all_series_max_samples(&mut self, max_samples: usize) {
        for series in &mut self.series {
            series.max_samples = max_samples;
            series.trim();
        }
    }

    pub fn series(&self) -> &[StatSeries] {
        &self.series
    }

    pub fn set_series_visible(&mut self, name: &str, visible: bool) {
        if let Some(series) = self.find_series_mut(name) {
            series.visible = visible;
        }
    }

    /// Unknown series report as not visible.
    pub fn is_series_visible(&self, name: &str) -> bool {
        self.find_series(name).map(|s| s.visible).unwrap_or(false)
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.category_filter = category.into();
    }

    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    pub fn passes_filter(&self, series: &StatSeries) -> bool {
        self.category_filter.is_empty() || series.category == self.category_filter
    }
}
