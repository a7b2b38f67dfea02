//! Wire DTOs for the Fixity backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Fields the backend may omit
//! or send as `null` are `Option` or defaulted so one sparse row never fails a
//! whole list decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// IDENTITY
// =============================================================================

/// A reporting-user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Citizen {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub trust_score: Option<f64>,
}

/// A municipal-staff account scoped to a jurisdiction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Authority {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub district: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub block: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The logged-in identity, discriminated by the backend's `role` field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum CurrentUser {
    Citizen(Citizen),
    Authority(Authority),
}

/// Account role, used by the dashboard chrome and route guards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    Citizen,
    Authority,
}

impl CurrentUser {
    pub fn username(&self) -> &str {
        match self {
            Self::Citizen(c) => &c.username,
            Self::Authority(a) => &a.username,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Citizen(_) => Role::Citizen,
            Self::Authority(_) => Role::Authority,
        }
    }

    pub fn is_citizen(&self) -> bool {
        matches!(self, Self::Citizen(_))
    }

    pub fn is_authority(&self) -> bool {
        matches!(self, Self::Authority(_))
    }
}

// =============================================================================
// ISSUES
// =============================================================================

/// Lifecycle state of a reported issue. Transitions are driven server-side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    /// Wire and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report category. Categories the client does not know are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueCategory {
    Pothole,
    Garbage,
    StreetLight,
    WaterLeakage,
    TrafficViolation,
    Other,
    Unlisted(String),
}

impl IssueCategory {
    /// Categories offered on the report form.
    pub const SELECTABLE: [Self; 6] = [
        Self::Pothole,
        Self::Garbage,
        Self::StreetLight,
        Self::WaterLeakage,
        Self::TrafficViolation,
        Self::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pothole => "Pothole",
            Self::Garbage => "Garbage",
            Self::StreetLight => "Street Light",
            Self::WaterLeakage => "Water Leakage",
            Self::TrafficViolation => "Traffic Violation",
            Self::Other => "Other",
            Self::Unlisted(raw) => raw,
        }
    }

    /// Official-language label shown on the report form.
    pub fn official_label(&self) -> &str {
        match self {
            Self::Pothole => "Road Hazard",
            Self::Garbage => "Sanitation",
            Self::StreetLight => "Lighting",
            Self::WaterLeakage => "Water Supply",
            Self::TrafficViolation => "Traffic",
            Self::Other => "Other",
            Self::Unlisted(raw) => raw,
        }
    }
}

impl From<String> for IssueCategory {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Pothole" => Self::Pothole,
            "Garbage" => Self::Garbage,
            "Street Light" => Self::StreetLight,
            "Water Leakage" => Self::WaterLeakage,
            "Traffic Violation" => Self::TrafficViolation,
            "Other" => Self::Other,
            _ => Self::Unlisted(raw),
        }
    }
}

impl From<IssueCategory> for String {
    fn from(category: IssueCategory) -> Self {
        match category {
            IssueCategory::Unlisted(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A citizen-submitted report as returned by the issue list endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
    pub category: IssueCategory,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub status: IssueStatus,
    /// Server-computed severity; missing or `null` reads as zero.
    #[serde(default, deserialize_with = "deserialize_f64_or_null")]
    pub severity_score: f64,
    #[serde(default)]
    pub severity_level: Option<String>,
    #[serde(default)]
    pub location_context: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Issue {
    /// Most specific place name available for the issue.
    pub fn place(&self) -> &str {
        self.block
            .as_deref()
            .filter(|b| !b.is_empty())
            .or(self.district.as_deref())
            .unwrap_or("Unknown area")
    }
}

// =============================================================================
// CRI MAP
// =============================================================================

/// Color band of a CRI score, as assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriBand {
    Red,
    Orange,
    #[default]
    Green,
}

impl CriBand {
    /// Band for a score using the backend thresholds (80 and 50).
    pub fn from_score(cri: f64) -> Self {
        if cri >= 80.0 {
            Self::Red
        } else if cri >= 50.0 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#DC2626",
            Self::Orange => "#F59E0B",
            Self::Green => "#10B981",
        }
    }
}

/// One block-level CRI reading for the risk map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CriPoint {
    pub block: String,
    pub cri: f64,
    pub color: CriBand,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub issue_count: Option<u32>,
}

/// District listing for one state: either a flat list or a district -> blocks map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictListing {
    Flat(Vec<String>),
    WithBlocks(BTreeMap<String, Vec<String>>),
}

impl DistrictListing {
    /// District names, sorted when they come from a map.
    pub fn districts(&self) -> Vec<String> {
        match self {
            Self::Flat(list) => list.clone(),
            Self::WithBlocks(map) => map.keys().cloned().collect(),
        }
    }
}

/// `GET /api/locations` payload: state -> districts.
pub type LocationTree = BTreeMap<String, DistrictListing>;

// =============================================================================
// RESPONSES
// =============================================================================

/// Generic envelope returned by mutating endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
}

impl ApiResponse {
    pub fn succeeded(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

/// Headline numbers of the analytics console.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub cri_score: f64,
    #[serde(default)]
    pub high_risk_count: u32,
    #[serde(default)]
    pub avg_res_time: String,
    #[serde(default)]
    pub repeat_rate: String,
}

/// Risk share of one CRI pillar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub name: String,
    pub risk: f64,
    pub percent: f64,
}

/// Seven-day CRI trend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Highest-risk block in the analytics table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Blank when the grouped issues carry no block.
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub area: String,
    #[serde(default, deserialize_with = "deserialize_f64_or_null")]
    pub cri: f64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub dominant_risk: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub duration: String,
}

/// `GET /api/analytics` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsPackage {
    #[serde(default)]
    pub summary: AnalyticsSummary,
    #[serde(default)]
    pub pillars: Vec<Pillar>,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub hotspots: Vec<Hotspot>,
    #[serde(default)]
    pub distribution: BTreeMap<String, u32>,
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// `POST /api/login` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/register_citizen` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CitizenRegistration {
    pub username: String,
    pub password: String,
    pub otp: String,
}

/// `POST /api/register/authority` body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthorityRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub state: String,
    pub district: String,
    pub block: String,
}

/// `POST /api/update_status` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub issue_id: i64,
    pub status: IssueStatus,
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_f64_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}
