use crate::error::{AppError, AppResult};
use crate::models::ReportModel;
use crate::response::ApiResponse;
use crate::services::report::{NewReport, ReportService};
use crate::websocket::hub::ReportHub;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequest {
    /// Principal's name
    #[validate(length(min = 1))]
    pub teacher_name: String,
    /// Administrative follow-up category
    #[validate(length(min = 1))]
    pub department: String,
    /// Free-text visit details
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
    /// Attachment embedded as a data URL
    pub file_url: Option<String>,
    /// Photo embedded as a data URL
    pub image_url: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
}

impl From<CreateReportRequest> for NewReport {
    fn from(req: CreateReportRequest) -> Self {
        Self {
            teacher_name: req.teacher_name,
            department: req.department,
            details: req.details,
            governorate: req.governorate,
            educational_admin: req.educational_admin,
            school_id: req.school_id,
            school_name: req.school_name,
            principal_phone: req.principal_phone,
            visit_date: req.visit_date,
            accomplishments: req.accomplishments,
            negatives: req.negatives,
            violations: req.violations,
            file_url: req.file_url,
            image_url: req.image_url,
            location_lat: req.location_lat,
            location_lng: req.location_lng,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    /// New lifecycle status (pending, in_progress, resolved, rejected)
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    /// Report ID
    pub id: i32,
    /// Principal's name
    pub teacher_name: String,
    /// Administrative follow-up category
    pub department: String,
    /// Free-text visit details
    pub details: String,
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
    /// Lifecycle status
    pub status: String,
    /// Creation timestamp
    pub created_at: String,
}

impl From<ReportModel> for ReportResponse {
    fn from(r: ReportModel) -> Self {
        Self {
            id: r.id,
            teacher_name: r.teacher_name,
            department: r.department,
            details: r.details,
            governorate: r.governorate,
            educational_admin: r.educational_admin,
            school_id: r.school_id,
            school_name: r.school_name,
            principal_phone: r.principal_phone,
            visit_date: r.visit_date,
            accomplishments: r.accomplishments,
            negatives: r.negatives,
            violations: r.violations,
            file_url: r.file_url,
            image_url: r.image_url,
            location_lat: r.location_lat,
            location_lng: r.location_lng,
            status: r.status,
            created_at: r.created_at.to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reports",
    responses(
        (status = 200, description = "All reports, newest first", body = [ReportResponse]),
    ),
    tag = "reports"
)]
pub async fn list_reports(
    Extension(db): Extension<DatabaseConnection>,
    Extension(hub): Extension<ReportHub>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(db, hub);
    let reports = service.list().await?;
    let items: Vec<ReportResponse> = reports.into_iter().map(ReportResponse::from).collect();

    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReportRequest,
    responses(
        (status = 200, description = "Report created", body = ReportResponse),
        (status = 400, description = "Missing required fields", body = AppError),
    ),
    tag = "reports"
)]
pub async fn create_report(
    Extension(db): Extension<DatabaseConnection>,
    Extension(hub): Extension<ReportHub>,
    Json(payload): Json<CreateReportRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = ReportService::new(db, hub);
    let report = service.create(payload.into()).await?;

    Ok(ApiResponse::ok(ReportResponse::from(report)))
}

#[utoipa::path(
    patch,
    path = "/api/reports/{id}",
    params(("id" = i32, Path, description = "Report ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated (no-op for unknown ids)"),
        (status = 400, description = "Unknown status value", body = AppError),
    ),
    tag = "reports"
)]
pub async fn update_report_status(
    Extension(db): Extension<DatabaseConnection>,
    Extension(hub): Extension<ReportHub>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let service = ReportService::new(db, hub);
    service.update_status(id, &payload.status).await?;

    Ok(ApiResponse::with_message((), "Status updated".to_string()))
}
