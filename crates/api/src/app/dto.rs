use serde::Deserialize;

use countsheet_core::{DomainError, DomainResult};
use countsheet_inventory::InventoryItem;
use countsheet_report::{ReportHeader, ShiftType};

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /export-excel`.
///
/// Every field is optional at the serde level so a missing one is reported as
/// a validation error naming the field.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub inventory_data: Option<Vec<InventoryItemRequest>>,
    pub date_shift: Option<String>,
    pub time_counted: Option<String>,
    pub shift_type: Option<ShiftType>,
}

#[derive(Debug, Deserialize)]
pub struct InventoryItemRequest {
    pub code: String,
    #[serde(default)]
    pub count: Vec<CountFragmentRequest>,
    #[serde(default)]
    pub remarks: Vec<String>,
}

/// Count fragments normally arrive as text; bare JSON numbers are accepted too.
///
/// Any other JSON value (`null`, booleans, ...) is kept as its JSON text, which
/// the evaluator counts as zero with a warning instead of rejecting the request.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CountFragmentRequest {
    Text(String),
    Number(serde_json::Number),
    Other(serde_json::Value),
}

impl CountFragmentRequest {
    fn into_text(self) -> String {
        match self {
            CountFragmentRequest::Text(s) => s,
            CountFragmentRequest::Number(n) => number_text(&n),
            CountFragmentRequest::Other(v) => v.to_string(),
        }
    }
}

// serde_json prints 1e21 as "1e+21"; the count grammar has no exponents.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(f) = n.as_f64() {
        format!("{f}")
    } else {
        n.to_string()
    }
}

impl InventoryItemRequest {
    pub fn into_domain(self) -> InventoryItem {
        InventoryItem::new(
            self.code,
            self.count.into_iter().map(CountFragmentRequest::into_text).collect(),
            self.remarks,
        )
    }
}

impl ExportRequest {
    pub fn into_domain(self) -> DomainResult<(ReportHeader, Vec<InventoryItem>)> {
        let items = self
            .inventory_data
            .ok_or_else(|| DomainError::validation("inventoryData is required"))?;
        let date_shift = self
            .date_shift
            .ok_or_else(|| DomainError::validation("dateShift is required"))?;
        let time_counted = self
            .time_counted
            .ok_or_else(|| DomainError::validation("timeCounted is required"))?;
        let shift = self
            .shift_type
            .ok_or_else(|| DomainError::validation("shiftType is required"))?;

        let header = ReportHeader {
            date_shift,
            time_counted,
            shift,
        };
        let items = items.into_iter().map(InventoryItemRequest::into_domain).collect();
        Ok((header, items))
    }
}
