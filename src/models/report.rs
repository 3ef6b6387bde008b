use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single submitted school-visit report. Everything except `status` is
/// immutable once the row exists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub teacher_name: String,
    pub department: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub governorate: Option<String>,
    pub educational_admin: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub principal_phone: Option<String>,
    pub visit_date: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub accomplishments: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub negatives: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub violations: Option<String>,
    /// Attachment embedded as a data URL, not a link.
    #[sea_orm(column_type = "Text", nullable)]
    pub file_url: Option<String>,
    /// Photo embedded as a data URL, not a link.
    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Lifecycle stage of a report. The column stays text so rows written before
/// status validation existed still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "in_progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// The thirteen administrative follow-up categories a report can target.
/// The submission wizard presents these as a fixed dropdown; the API stores
/// whatever non-empty value it is given.
pub const DEPARTMENTS: [&str; 13] = [
    "متابعة شئون العاملين",
    "متابعة شئون الطلاب",
    "متابعة سجل التكليفات",
    "متابعة الوحدة المنتجة",
    "متابعة الجمعية التعاونية المدرسية",
    "متابعة المشاركة المجتمعية",
    "متابعة لائحة الانضباط المدرسي",
    "متابعة الصيانة الدورية",
    "متابعة الامن والسلامة المهنية",
    "متابعة المكتبة",
    "متابعة التقيمات",
    "متابعة الرواكد الخشبية والمعدنية",
    "متابعة تسلم الكتب والتابلت",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
            ReportStatus::Rejected,
        ] {
            assert_eq!(ReportStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert_eq!(ReportStatus::parse("closed"), None);
        assert_eq!(ReportStatus::parse(""), None);
        assert_eq!(ReportStatus::parse("Pending"), None);
    }

    #[test]
    fn departments_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for dept in DEPARTMENTS {
            assert!(!dept.is_empty());
            assert!(seen.insert(dept));
        }
        assert_eq!(seen.len(), 13);
    }
}
