/// One counted inventory line as submitted by the counter.
///
/// `count` holds the raw fragments of the count breakdown in entry order;
/// `remarks` holds free-text status labels ("On Hold", "First Out", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    code: String,
    count: Vec<String>,
    remarks: Vec<String>,
}

impl InventoryItem {
    pub fn new(code: impl Into<String>, count: Vec<String>, remarks: Vec<String>) -> Self {
        Self {
            code: code.into(),
            count,
            remarks,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn count(&self) -> &[String] {
        &self.count
    }

    pub fn remarks(&self) -> &[String] {
        &self.remarks
    }
}
