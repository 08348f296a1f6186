//! Industry endpoints, including company associations

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Association, Industry, IndustryCompanies, IndustryRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;
use crate::models::{IndustryCode, IndustryName, ValidationError};

use super::companies::CompanySummaryResponse;

/// Create industry request
#[derive(Deserialize)]
pub struct CreateIndustryRequest {
    pub code: String,
    pub industry: String,
}

/// Associate company request
#[derive(Deserialize)]
pub struct AssociateRequest {
    pub company_code: String,
}

/// Industry as stored
#[derive(Serialize)]
pub struct IndustryResponse {
    pub code: String,
    pub industry: String,
}

impl From<Industry> for IndustryResponse {
    fn from(i: Industry) -> Self {
        Self {
            code: i.code,
            industry: i.industry,
        }
    }
}

/// Join table row
#[derive(Serialize)]
pub struct AssociationResponse {
    pub company_code: String,
    pub industry_code: String,
}

impl From<Association> for AssociationResponse {
    fn from(a: Association) -> Self {
        Self {
            company_code: a.company_code,
            industry_code: a.industry_code,
        }
    }
}

/// Industry name with its companies
#[derive(Serialize)]
pub struct IndustryCompaniesResponse {
    pub industry: String,
    pub companies: Vec<CompanySummaryResponse>,
}

impl From<IndustryCompanies> for IndustryCompaniesResponse {
    fn from(ic: IndustryCompanies) -> Self {
        Self {
            industry: ic.industry,
            companies: ic
                .companies
                .into_iter()
                .map(CompanySummaryResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct IndustryListEnvelope {
    pub industries: Vec<IndustryResponse>,
}

#[derive(Serialize)]
pub struct IndustryEnvelope {
    pub industry: IndustryResponse,
}

#[derive(Serialize)]
pub struct AssociationEnvelope {
    pub association: AssociationResponse,
}

/// GET /industries - list all industries
async fn list_industries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<IndustryListEnvelope>, ApiError> {
    let industries = IndustryRepo::new(&state.pool).list().await?;

    Ok(Json(IndustryListEnvelope {
        industries: industries.into_iter().map(IndustryResponse::from).collect(),
    }))
}

/// POST /industries - create an industry
async fn create_industry(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateIndustryRequest>,
) -> Result<(StatusCode, Json<IndustryEnvelope>), ApiError> {
    let code = IndustryCode::new(&req.code)?;
    let name = IndustryName::new(&req.industry)?;
    let industry = IndustryRepo::new(&state.pool).create(&code, &name).await?;

    tracing::info!(code = %industry.code, "industry created");
    Ok((
        StatusCode::CREATED,
        Json(IndustryEnvelope {
            industry: IndustryResponse::from(industry),
        }),
    ))
}

/// POST /industries/{code}/companies - associate a company with an industry
async fn associate_company(
    State(state): State<Arc<AppState>>,
    Path(industry_code): Path<String>,
    ApiJson(req): ApiJson<AssociateRequest>,
) -> Result<(StatusCode, Json<AssociationEnvelope>), ApiError> {
    if req.company_code.is_empty() {
        return Err(ValidationError::Empty {
            field: "company_code",
        }
        .into());
    }

    let association = IndustryRepo::new(&state.pool)
        .associate(&industry_code, &req.company_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssociationEnvelope {
            association: AssociationResponse::from(association),
        }),
    ))
}

/// GET /industries/{code}/companies - list companies in an industry
async fn list_industry_companies(
    State(state): State<Arc<AppState>>,
    Path(industry_code): Path<String>,
) -> Result<Json<IndustryCompaniesResponse>, ApiError> {
    let result = IndustryRepo::new(&state.pool)
        .companies_for(&industry_code)
        .await?;

    Ok(Json(IndustryCompaniesResponse::from(result)))
}

/// Industry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/industries", get(list_industries).post(create_industry))
        .route(
            "/industries/{code}/companies",
            get(list_industry_companies).post(associate_company),
        )
}
