// Chart type vocabulary
use serde::{Serialize, Serializer};

/// Canonical chart types understood by renderers.
///
/// Strings that do not match any canonical form are kept as `Other` so the
/// renderer can decide whether it knows how to draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartType {
    BarChart,
    LineChart,
    PieChart,
    ScatterPlot,
    Histogram,
    Other(String),
}

/// Substring rules, checked in order. First match wins.
const SUBSTRING_RULES: [(&str, ChartType); 5] = [
    ("line", ChartType::LineChart),
    ("bar", ChartType::BarChart),
    ("pie", ChartType::PieChart),
    ("scatter", ChartType::ScatterPlot),
    ("hist", ChartType::Histogram),
];

impl ChartType {
    pub fn as_str(&self) -> &str {
        match self {
            ChartType::BarChart => "bar_chart",
            ChartType::LineChart => "line_chart",
            ChartType::PieChart => "pie_chart",
            ChartType::ScatterPlot => "scatter_plot",
            ChartType::Histogram => "histogram",
            ChartType::Other(raw) => raw,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, ChartType::Other(_))
    }
}

impl Serialize for ChartType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Canonicalize a free-form chart type string.
///
/// Returns `None` for a missing or empty input.
pub fn normalize_chart_type(raw: Option<&str>) -> Option<ChartType> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let lowered = raw.to_lowercase();

    if let Some((_, canonical)) = SUBSTRING_RULES
        .iter()
        .find(|(needle, _)| lowered.contains(needle))
    {
        return Some(canonical.clone());
    }

    // Exact short forms. Already covered by the substring pass, kept so the
    // precedence of the short names stays explicit.
    match lowered.as_str() {
        "line" => Some(ChartType::LineChart),
        "bar" => Some(ChartType::BarChart),
        "pie" => Some(ChartType::PieChart),
        _ => Some(ChartType::Other(raw.to_string())),
    }
}
