//! Company endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Company, CompanyDetail, CompanyRepo, CompanySummary};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::CompanyName;

use super::DeletedResponse;

/// Create or update company request
#[derive(Deserialize)]
pub struct CompanyRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Company list entry
#[derive(Serialize)]
pub struct CompanySummaryResponse {
    pub code: String,
    pub name: String,
}

impl From<CompanySummary> for CompanySummaryResponse {
    fn from(c: CompanySummary) -> Self {
        Self {
            code: c.code,
            name: c.name,
        }
    }
}

/// Company as stored
#[derive(Serialize)]
pub struct CompanyResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            code: c.code,
            name: c.name,
            description: c.description,
        }
    }
}

/// Company with invoice ids and industry names
#[derive(Serialize)]
pub struct CompanyDetailResponse {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
    pub industries: Vec<String>,
}

impl From<CompanyDetail> for CompanyDetailResponse {
    fn from(d: CompanyDetail) -> Self {
        Self {
            code: d.company.code,
            name: d.company.name,
            description: d.company.description,
            invoices: d.invoices,
            industries: d.industries,
        }
    }
}

#[derive(Serialize)]
pub struct CompanyListEnvelope {
    pub companies: Vec<CompanySummaryResponse>,
}

#[derive(Serialize)]
pub struct CompanyEnvelope<T> {
    pub company: T,
}

/// GET /companies - list all companies
async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompanyListEnvelope>, ApiError> {
    let companies = CompanyRepo::new(&state.pool).list().await?;

    Ok(Json(CompanyListEnvelope {
        companies: companies
            .into_iter()
            .map(CompanySummaryResponse::from)
            .collect(),
    }))
}

/// GET /companies/{code} - get a company with its invoices and industries
async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyEnvelope<CompanyDetailResponse>>, ApiError> {
    let detail = CompanyRepo::new(&state.pool).get(&code).await?;

    Ok(Json(CompanyEnvelope {
        company: CompanyDetailResponse::from(detail),
    }))
}

/// POST /companies - create a company, code derived from the name
async fn create_company(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CompanyRequest>,
) -> Result<(StatusCode, Json<CompanyEnvelope<CompanyResponse>>), ApiError> {
    let name = CompanyName::new(&req.name)?;
    let code = name.to_code()?;
    let company = CompanyRepo::new(&state.pool)
        .create(&code, &name, req.description.as_deref())
        .await?;

    tracing::info!(code = %company.code, "company created");
    Ok((
        StatusCode::CREATED,
        Json(CompanyEnvelope {
            company: CompanyResponse::from(company),
        }),
    ))
}

/// PUT /companies/{code} - update name and description; the code stays put
async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    ApiJson(req): ApiJson<CompanyRequest>,
) -> Result<Json<CompanyEnvelope<CompanyResponse>>, ApiError> {
    let name = CompanyName::new(&req.name)?;
    let company = CompanyRepo::new(&state.pool)
        .update(&code, &name, req.description.as_deref())
        .await?;

    Ok(Json(CompanyEnvelope {
        company: CompanyResponse::from(company),
    }))
}

/// DELETE /companies/{code} - delete a company and everything hanging off it
async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    CompanyRepo::new(&state.pool).delete(&code).await?;

    tracing::info!(%code, "company deleted");
    Ok(Json(DeletedResponse::new()))
}

/// Company routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", get(list_companies).post(create_company))
        .route(
            "/companies/{code}",
            get(get_company).put(update_company).delete(delete_company),
        )
}
