//! Invoice endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::db::repos::{Invoice, InvoiceRepo, InvoiceSummary, InvoiceWithCompany};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, InvoiceId};
use crate::http::server::AppState;
use crate::models::{Amount, PaymentUpdate};

use super::companies::CompanyResponse;
use super::DeletedResponse;

/// Create invoice request
#[derive(Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: Decimal,
}

/// Update invoice request; `paid` left out keeps the payment state
#[derive(Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: Decimal,
    pub paid: Option<bool>,
}

/// Invoice list entry
#[derive(Serialize)]
pub struct InvoiceSummaryResponse {
    pub id: i32,
    pub comp_code: String,
}

impl From<InvoiceSummary> for InvoiceSummaryResponse {
    fn from(i: InvoiceSummary) -> Self {
        Self {
            id: i.id,
            comp_code: i.comp_code,
        }
    }
}

/// Invoice as stored
#[derive(Serialize)]
pub struct InvoiceResponse {
    pub id: i32,
    pub comp_code: String,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl From<Invoice> for InvoiceResponse {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            comp_code: i.comp_code,
            amt: i.amt,
            paid: i.paid,
            add_date: i.add_date,
            paid_date: i.paid_date,
        }
    }
}

/// Invoice with its company nested in place of `comp_code`
#[derive(Serialize)]
pub struct InvoiceDetailResponse {
    pub id: i32,
    pub amt: Decimal,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: CompanyResponse,
}

impl From<InvoiceWithCompany> for InvoiceDetailResponse {
    fn from(i: InvoiceWithCompany) -> Self {
        Self {
            id: i.id,
            amt: i.amt,
            paid: i.paid,
            add_date: i.add_date,
            paid_date: i.paid_date,
            company: CompanyResponse::from(i.company),
        }
    }
}

#[derive(Serialize)]
pub struct InvoiceListEnvelope {
    pub invoices: Vec<InvoiceSummaryResponse>,
}

#[derive(Serialize)]
pub struct InvoiceEnvelope<T> {
    pub invoice: T,
}

/// GET /invoices - list all invoices
async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoiceListEnvelope>, ApiError> {
    let invoices = InvoiceRepo::new(&state.pool).list().await?;

    Ok(Json(InvoiceListEnvelope {
        invoices: invoices
            .into_iter()
            .map(InvoiceSummaryResponse::from)
            .collect(),
    }))
}

/// GET /invoices/{id} - get an invoice with its company
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
) -> Result<Json<InvoiceEnvelope<InvoiceDetailResponse>>, ApiError> {
    let invoice = InvoiceRepo::new(&state.pool).get(id).await?;

    Ok(Json(InvoiceEnvelope {
        invoice: InvoiceDetailResponse::from(invoice),
    }))
}

/// POST /invoices - create an unpaid invoice
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateInvoiceRequest>,
) -> Result<(StatusCode, Json<InvoiceEnvelope<InvoiceResponse>>), ApiError> {
    let amt = Amount::new(req.amt)?;
    let invoice = InvoiceRepo::new(&state.pool)
        .create(&req.comp_code, amt)
        .await?;

    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");
    Ok((
        StatusCode::CREATED,
        Json(InvoiceEnvelope {
            invoice: InvoiceResponse::from(invoice),
        }),
    ))
}

/// PUT /invoices/{id} - update amount and payment state
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
    ApiJson(req): ApiJson<UpdateInvoiceRequest>,
) -> Result<Json<InvoiceEnvelope<InvoiceResponse>>, ApiError> {
    let amt = Amount::new(req.amt)?;
    let invoice = InvoiceRepo::new(&state.pool)
        .update(id, amt, PaymentUpdate::new(req.paid))
        .await?;

    Ok(Json(InvoiceEnvelope {
        invoice: InvoiceResponse::from(invoice),
    }))
}

/// DELETE /invoices/{id} - delete an invoice
async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
) -> Result<Json<DeletedResponse>, ApiError> {
    InvoiceRepo::new(&state.pool).delete(id).await?;

    tracing::info!(id, "invoice deleted");
    Ok(Json(DeletedResponse::new()))
}

/// Invoice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}
