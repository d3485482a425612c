use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const REPORT_LOAD_ERROR: &str = "❌ Failed to load report";

/// Characters left alone by `encodeURIComponent`
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Path of the JSON view of report `id`
pub fn report_view_path(id: &str) -> String {
    format!("/reports/view/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Path of the raw report document, for framing
pub fn report_raw_path(id: &str) -> String {
    format!("/reports/raw/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Which generator produced a report. Anything that is not a drift report
/// renders as an expectation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportKind {
    Drift,
    Expectation,
}

impl From<String> for ReportKind {
    fn from(value: String) -> Self {
        if value == "drift" {
            ReportKind::Drift
        } else {
            ReportKind::Expectation
        }
    }
}

impl From<ReportKind> for String {
    fn from(kind: ReportKind) -> Self {
        kind.as_str().to_string()
    }
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Drift => "drift",
            ReportKind::Expectation => "expectation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Drift => "🧪 Drift",
            ReportKind::Expectation => "🧾 Expectation",
        }
    }
}

/// Entry of `/reports/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub station_id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[serde(default)]
    pub filename: String,
}

/// Body of `/reports/view/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    pub station_id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    #[serde(default)]
    pub html: Option<String>,
}

/// How the viewer puts a report on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRender {
    /// Load the raw document into an isolated frame
    Frame { src: String },
    /// Inject the returned markup into the page
    Inline { html: String },
}

impl ReportDetail {
    /// Drift reports are framed from the raw endpoint; everything else is
    /// injected from the `html` field.
    pub fn render(&self, raw_url: impl FnOnce() -> String) -> ReportRender {
        match self.kind {
            ReportKind::Drift => ReportRender::Frame { src: raw_url() },
            ReportKind::Expectation => ReportRender::Inline {
                html: self.html.clone().unwrap_or_default(),
            },
        }
    }
}
