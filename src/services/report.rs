use crate::{
    error::{AppError, AppResult},
    models::{report, Report, ReportModel, ReportStatus},
    websocket::hub::ReportHub,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Fields accepted from the submission wizard. Only `teacher_name` and
/// `department` are required; the handler has already checked they are
/// non-empty.
#[derive(Debug, Default, Clone)]
pub struct NewReport {
    pub teacher_name: String,
    pub department: String,
    pub details: Option<String>,
    pub governorate: Option<String>,
    pub educational_admin: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub principal_phone: Option<String>,
    pub visit_date: Option<String>,
    pub accomplishments: Option<String>,
    pub negatives: Option<String>,
    pub violations: Option<String>,
    pub file_url: Option<String>,
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
}

pub struct ReportService {
    db: DatabaseConnection,
    hub: ReportHub,
}

impl ReportService {
    pub fn new(db: DatabaseConnection, hub: ReportHub) -> Self {
        Self { db, hub }
    }

    /// Persist a new report and announce it to connected viewers. The event
    /// carries the full persisted record; delivery is advisory and never
    /// affects the caller's result.
    pub async fn create(&self, input: NewReport) -> AppResult<ReportModel> {
        let now = chrono::Utc::now().naive_utc();
        let model = report::ActiveModel {
            teacher_name: Set(input.teacher_name),
            department: Set(input.department),
            details: Set(input.details.unwrap_or_default()),
            governorate: Set(input.governorate),
            educational_admin: Set(input.educational_admin),
            school_id: Set(input.school_id),
            school_name: Set(input.school_name),
            principal_phone: Set(input.principal_phone),
            visit_date: Set(input.visit_date),
            accomplishments: Set(input.accomplishments),
            negatives: Set(input.negatives),
            violations: Set(input.violations),
            file_url: Set(input.file_url),
            image_url: Set(input.image_url),
            location_lat: Set(input.location_lat),
            location_lng: Set(input.location_lng),
            status: Set(ReportStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await?;

        let event = serde_json::json!({
            "type": "NEW_REPORT",
            "report": {
                "id": saved.id,
                "teacher_name": &saved.teacher_name,
                "department": &saved.department,
                "details": &saved.details,
                "governorate": &saved.governorate,
                "educational_admin": &saved.educational_admin,
                "school_id": &saved.school_id,
                "school_name": &saved.school_name,
                "principal_phone": &saved.principal_phone,
                "visit_date": &saved.visit_date,
                "accomplishments": &saved.accomplishments,
                "negatives": &saved.negatives,
                "violations": &saved.violations,
                "file_url": &saved.file_url,
                "image_url": &saved.image_url,
                "location_lat": saved.location_lat,
                "location_lng": saved.location_lng,
                "status": &saved.status,
                "created_at": saved.created_at.to_string(),
            }
        });
        self.hub.broadcast(&event.to_string());

        Ok(saved)
    }

    /// All reports, newest first. Id breaks ties for rows created within the
    /// same timestamp tick.
    pub async fn list(&self) -> AppResult<Vec<ReportModel>> {
        let reports = Report::find()
            .order_by_desc(report::Column::CreatedAt)
            .order_by_desc(report::Column::Id)
            .all(&self.db)
            .await?;
        Ok(reports)
    }

    /// Set the status of a report. An unmatched id is a silent no-op, and the
    /// update event is published either way.
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<()> {
        let Some(status) = ReportStatus::parse(status) else {
            return Err(AppError::Validation(
                "status must be one of: pending, in_progress, resolved, rejected".to_string(),
            ));
        };

        use sea_orm::sea_query::Expr;
        Report::update_many()
            .col_expr(report::Column::Status, Expr::value(status.as_str()))
            .filter(report::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        let event = serde_json::json!({
            "type": "UPDATE_REPORT",
            "id": id,
            "status": status.as_str(),
        });
        self.hub.broadcast(&event.to_string());

        Ok(())
    }
}
