use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
};

use countsheet_inventory::{EvaluatedRow, build_rows};
use countsheet_report::{CONTENT_TYPE, derive_filename, render_workbook};

use crate::app::{dto, errors};

pub async fn export_excel(
    payload: Result<Json<dto::ExportRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let (report_header, items) = match body.into_domain() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let rows = build_rows(&items);
    log_fallbacks(&rows);

    let filename = match derive_filename(&report_header) {
        Ok(name) => name,
        Err(e) => return errors::report_error_to_response(e),
    };

    let bytes = match render_workbook(&report_header, &rows) {
        Ok(bytes) => bytes,
        Err(e) => return errors::report_error_to_response(e),
    };

    tracing::info!(items = rows.len(), %filename, bytes = bytes.len(), "count sheet exported");

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

// Zero-valued fragments are accepted; they only show up in the logs.
fn log_fallbacks(rows: &[EvaluatedRow]) {
    for row in rows {
        for warning in row.warnings() {
            tracing::warn!(
                item_code = row.code(),
                fragment_index = warning.fragment_index,
                fragment = %warning.fragment,
                reason = ?warning.reason,
                "count fragment counted as zero"
            );
        }
    }
}
