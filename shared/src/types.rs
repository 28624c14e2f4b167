//! Admissions records
//!
//! Field names on the wire follow the data store's schema; the Rust names are
//! the English equivalents. Text and score fields read `null` as empty.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::errors::{SharedError, SharedResult};
use crate::evidence::EvidenceFiles;
use crate::identifier::{EntityId, reference_format};

/// Read a missing or `null` field as the type's default
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Lifecycle of an application: unset → pending → approved | rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "cho_duyet")]
    Pending,
    #[serde(rename = "da_duyet")]
    Approved,
    #[serde(rename = "tu_choi")]
    Rejected,
}

impl ApplicationStatus {
    /// Canonical statuses in display order
    pub const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "cho_duyet",
            ApplicationStatus::Approved => "da_duyet",
            ApplicationStatus::Rejected => "tu_choi",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw.trim() {
            "cho_duyet" => Some(ApplicationStatus::Pending),
            "da_duyet" => Some(ApplicationStatus::Approved),
            "tu_choi" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> SharedResult<Self> {
        Self::from_wire(s).ok_or_else(|| SharedError::InvalidStatus {
            input: s.to_string(),
        })
    }
}

/// Label shown for an application's status; unset reads as newly registered
pub fn status_label(status: Option<ApplicationStatus>) -> &'static str {
    status.map(|s| s.label()).unwrap_or("Newly registered")
}

/// Status exactly as stored.
///
/// Empty and unrecognised values (including the display-only `moi_dang_ky`)
/// read as unset through [`StatusValue::get`], but are written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusValue(String);

impl StatusValue {
    pub fn get(&self) -> Option<ApplicationStatus> {
        ApplicationStatus::from_wire(&self.0)
    }

    pub fn set(&mut self, status: ApplicationStatus) {
        self.0 = status.as_str().to_string();
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<ApplicationStatus> for StatusValue {
    fn from(status: ApplicationStatus) -> Self {
        StatusValue(status.as_str().to_string())
    }
}

impl From<Option<ApplicationStatus>> for StatusValue {
    fn from(status: Option<ApplicationStatus>) -> Self {
        status.map(StatusValue::from).unwrap_or_default()
    }
}

impl Serialize for StatusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StatusValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(StatusValue(nullable(deserializer)?))
    }
}

/// A student's admission submission (`ho_so`)
///
/// Fields the portal does not model are kept in `extra` so a fetched record
/// can be written back whole.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Application {
    pub id: EntityId,
    #[serde(rename = "ho_ten", default, deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(rename = "ngay_sinh", default, deserialize_with = "nullable")]
    pub birth_date: String,
    #[serde(rename = "gioi_tinh", default, deserialize_with = "nullable")]
    pub gender: String,
    #[serde(rename = "so_cccd", default, deserialize_with = "nullable")]
    pub national_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(rename = "sdt", default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(rename = "diem_thi", default, deserialize_with = "nullable")]
    pub exam_score: f64,
    #[serde(rename = "doi_tuong_uu_tien", default, deserialize_with = "nullable")]
    pub priority_group: String,
    #[serde(
        rename = "truong_id",
        default,
        with = "reference_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub school_id: Option<EntityId>,
    #[serde(
        rename = "nganh_id",
        default,
        with = "reference_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub major_id: Option<EntityId>,
    #[serde(
        rename = "to_hop_id",
        default,
        with = "reference_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub combination_id: Option<EntityId>,
    #[serde(rename = "file_minh_chung", default)]
    pub evidence: EvidenceFiles,
    #[serde(rename = "trang_thai", default)]
    pub status: StatusValue,
    #[serde(rename = "ngay_gui", default, deserialize_with = "nullable")]
    pub submitted_at: String,
    #[serde(rename = "ghi_chu", default, deserialize_with = "nullable")]
    pub note: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// School fields supplied on create and update
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SchoolDetails {
    #[serde(rename = "ma_truong", default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename = "ten_truong", default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "dia_chi", default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(rename = "loai_truong", default, deserialize_with = "nullable")]
    pub kind: String,
}

/// A university (`truong`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct School {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: SchoolDetails,
}

/// Major fields supplied on create and update
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MajorDetails {
    #[serde(
        rename = "truong_id",
        default,
        with = "reference_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub school_id: Option<EntityId>,
    #[serde(rename = "ma_nganh", default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename = "ten_nganh", default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "mo_ta", default, deserialize_with = "nullable")]
    pub description: String,
}

/// A course of study offered by a school (`nganh`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Major {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: MajorDetails,
}

/// Admission combination fields supplied on create
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CombinationDetails {
    #[serde(
        rename = "nganh_id",
        default,
        with = "reference_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub major_id: Option<EntityId>,
    #[serde(rename = "ma_to_hop", default, deserialize_with = "nullable")]
    pub code: String,
    #[serde(rename = "cac_mon", default, deserialize_with = "nullable")]
    pub subjects: String,
    #[serde(rename = "diem_toi_thieu", default, skip_serializing_if = "Option::is_none")]
    pub minimum_score: Option<f64>,
    #[serde(rename = "chi_tieu", default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<u32>,
}

/// Subject group a major admits on (`to_hop_xet_tuyen`)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Combination {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: CombinationDetails,
}

/// Key of an aggregate entry: a status or a reference id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum StatKey {
    Status(ApplicationStatus),
    Reference(EntityId),
}

/// One bar or slice of a statistics chart
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub key: StatKey,
    pub name: String,
    pub value: u64,
}
