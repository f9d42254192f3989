//! HTTP request handlers for the Payslip Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_advice, compute};
use crate::delivery::{DeliveryChannel, DeliveryOutcome};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRecord, ComputedPayslip, Document};
use crate::render::{SlipFormat, format_plain, render_advice};

use super::request::{BankAdviceRequest, EmailRequest, SlipQuery};
use super::response::{ApiError, ApiErrorResponse, EmailResponse};
use super::state::AppState;

/// Header carrying the total of a bank advice batch.
pub const ADVICE_TOTAL_HEADER: &str = "x-advice-total";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payslips/compute", post(compute_handler))
        .route("/payslips/slip", post(slip_handler))
        .route("/payslips/email", post(email_handler))
        .route("/bank-advice", post(bank_advice_handler))
        .with_state(state)
}

/// Handler for POST /payslips/compute.
///
/// Returns the computed payslip as JSON.
async fn compute_handler(payload: Result<Json<CompensationRecord>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let record = match parse_json(payload, correlation_id) {
        Ok(record) => record,
        Err(response) => return response.into_response(),
    };

    let start_time = Instant::now();
    match compute(&record) {
        Ok(payslip) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %payslip.employee_id(),
                gross_pay = %payslip.gross_pay(),
                net_pay = %payslip.net_pay(),
                duration_us = start_time.elapsed().as_micros(),
                "Payslip computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payslip),
            )
                .into_response()
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for POST /payslips/slip.
///
/// Computes and renders the salary slip and returns it as a download.
async fn slip_handler(
    State(state): State<AppState>,
    query: Result<Query<SlipQuery>, QueryRejection>,
    payload: Result<Json<CompensationRecord>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary slip request");

    let format = match query {
        Ok(Query(query)) => query.format,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid query string");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };
    let record = match parse_json(payload, correlation_id) {
        Ok(record) => record,
        Err(response) => return response.into_response(),
    };

    let document = match compute_and_render(&state, &record, format) {
        Ok(document) => document,
        Err(err) => return engine_error(err, correlation_id),
    };

    match state
        .dispatcher()
        .deliver(document, &DeliveryChannel::LocalDownload)
        .await
    {
        Ok(DeliveryOutcome::Delivered(document)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.employee_id,
                filename = %document.filename,
                bytes = document.len(),
                "Salary slip rendered"
            );
            download_response(document)
        }
        Ok(other) => {
            warn!(correlation_id = %correlation_id, outcome = ?other, "Unexpected delivery outcome");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(err) => engine_error(err, correlation_id),
    }
}

/// Handler for POST /payslips/email.
///
/// Computes and renders the salary slip, then hands it to the mail transport.
async fn email_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing email request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let document = match compute_and_render(&state, &request.record, request.format) {
        Ok(document) => document,
        Err(err) => return engine_error(err, correlation_id),
    };

    let channel = DeliveryChannel::Email {
        address: request.address,
    };
    let outcome = match state.dispatcher().deliver(document, &channel).await {
        Ok(outcome) => outcome,
        Err(err) => return engine_error(err, correlation_id),
    };

    match EmailResponse::from_outcome(outcome) {
        Some((status, body)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.record.employee_id,
                status = %body.status,
                "Email request completed"
            );
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(body),
            )
                .into_response()
        }
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// Handler for POST /bank-advice.
///
/// Computes every record and returns the period's bank advice CSV.
async fn bank_advice_handler(payload: Result<Json<BankAdviceRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bank advice request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    let payslips = match request
        .records
        .iter()
        .map(compute)
        .collect::<EngineResult<Vec<ComputedPayslip>>>()
    {
        Ok(payslips) => payslips,
        Err(err) => return engine_error(err, correlation_id),
    };

    let batch = match build_advice(&payslips, request.period) {
        Ok(batch) => batch,
        Err(err) => return engine_error(err, correlation_id),
    };

    let total = format_plain(batch.total());
    info!(
        correlation_id = %correlation_id,
        period = %batch.period(),
        entries = batch.entries().len(),
        total = %total,
        "Bank advice built"
    );

    let mut response = download_response(render_advice(&batch));
    if let Ok(value) = HeaderValue::from_str(&total) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(ADVICE_TOTAL_HEADER), value);
    }
    response
}

fn compute_and_render(
    state: &AppState,
    record: &CompensationRecord,
    format: SlipFormat,
) -> EngineResult<Document> {
    let payslip = compute(record)?;
    state.renderer().render(&payslip, format)
}

/// Unwraps a JSON body, mapping extractor rejections to API errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(value)) => return Ok(value),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn engine_error(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Builds an attachment response carrying the document bytes.
fn download_response(document: Document) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_filename(&document.filename)
    );
    let content_type = HeaderValue::from_str(&document.mime_type)
        .unwrap_or(HeaderValue::from_static("application/octet-stream"));

    let mut response = (StatusCode::OK, document.bytes).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }
    response
}

/// Replaces characters that cannot appear in a quoted header parameter.
fn header_safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
