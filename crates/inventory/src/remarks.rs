/// Row highlight derived from an item's remarks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FillColor {
    #[default]
    None,
    Hold,
    Approved,
    Aged,
}

impl FillColor {
    /// `0xRRGGBB` fill, or `None` for an unhighlighted row.
    pub fn rgb(self) -> Option<u32> {
        match self {
            FillColor::None => None,
            FillColor::Hold => Some(0xFDE68A),
            FillColor::Approved => Some(0xFBCFE8),
            FillColor::Aged => Some(0xA7F3D0),
        }
    }
}

/// Keyword table, highest precedence first.
const REMARK_FILLS: &[(&[&str], FillColor)] = &[
    (&["hold"], FillColor::Hold),
    (&["approved"], FillColor::Approved),
    (&["first out", "old"], FillColor::Aged),
];

/// Classify an item by its remarks.
///
/// The first table entry whose keyword occurs (case-insensitively) in *any*
/// remark wins, regardless of the order the remarks were entered in.
pub fn classify_remarks<S: AsRef<str>>(remarks: &[S]) -> FillColor {
    let lowered: Vec<String> = remarks.iter().map(|r| r.as_ref().to_lowercase()).collect();

    REMARK_FILLS
        .iter()
        .find(|(keywords, _)| {
            lowered
                .iter()
                .any(|remark| keywords.iter().any(|k| remark.contains(k)))
        })
        .map_or(FillColor::None, |(_, fill)| *fill)
}
