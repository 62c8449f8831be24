//! Typed model of an HTTP Archive (HAR) document.
//!
//! Decoding is lenient: unknown fields are ignored, and missing or `null`
//! fields fall back to their zero value. Timing components keep an explicit
//! "absent" state because the total-time sum treats them specially.

use serde::{Deserialize, Deserializer};

/// Root of a HAR file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub log: HarLog,
}

impl HarDocument {
    /// Entries in capture order
    pub fn entries(&self) -> &[HarEntry] {
        &self.log.entries
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: Creator,

    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<HarEntry>,
}

/// Tool that produced the capture
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Creator {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub version: String,
}

/// One request/response exchange
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarEntry {
    /// Start of the request, expected RFC3339
    #[serde(default, deserialize_with = "null_as_default")]
    pub started_date_time: String,

    /// Elapsed time as reported by the capturing tool (not used for totals)
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub request: Request,

    #[serde(default, deserialize_with = "null_as_default")]
    pub response: Response,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timings: Timings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub http_version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<NameValue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub query_string: Vec<NameValue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub post_data: PostData,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mime_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub http_version: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: Vec<NameValue>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Content,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Body size in bytes, -1 when unknown
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mime_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Header or query-string pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameValue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Timing breakdown in milliseconds.
///
/// `None` means the field was absent. HAR uses `-1` for "does not apply",
/// so a present value is still only meaningful when positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Timings {
    #[serde(default)]
    pub blocked: Option<f64>,
    #[serde(default)]
    pub dns: Option<f64>,
    #[serde(default)]
    pub connect: Option<f64>,
    #[serde(default)]
    pub send: Option<f64>,
    #[serde(default)]
    pub wait: Option<f64>,
    #[serde(default)]
    pub receive: Option<f64>,
    /// Included in `connect` by HAR convention, never summed separately
    #[serde(default)]
    pub ssl: Option<f64>,
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
