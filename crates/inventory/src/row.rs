use countsheet_core::ValueObject;

use crate::expression::{EvalWarning, evaluate_count};
use crate::item::InventoryItem;
use crate::remarks::{FillColor, classify_remarks};

/// Separator used for the count breakdown and remarks display cells.
pub const DISPLAY_SEPARATOR: &str = " | ";

/// Report row computed from one [`InventoryItem`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluatedRow {
    code: String,
    count_display: String,
    total: f64,
    formula: String,
    remarks_display: String,
    fill: FillColor,
    warnings: Vec<EvalWarning>,
}

impl ValueObject for EvaluatedRow {}

impl EvaluatedRow {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn count_display(&self) -> &str {
        &self.count_display
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Sum formula for the total cell, without the leading `=`.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn remarks_display(&self) -> &str {
        &self.remarks_display
    }

    pub fn fill(&self) -> FillColor {
        self.fill
    }

    /// Fragments that were counted as zero.
    pub fn warnings(&self) -> &[EvalWarning] {
        &self.warnings
    }
}

pub fn build_row(item: &InventoryItem) -> EvaluatedRow {
    let eval = evaluate_count(item.count());

    EvaluatedRow {
        code: item.code().to_string(),
        count_display: item.count().join(DISPLAY_SEPARATOR),
        total: eval.total,
        formula: eval.formula,
        remarks_display: item.remarks().join(DISPLAY_SEPARATOR),
        fill: classify_remarks(item.remarks()),
        warnings: eval.warnings,
    }
}

/// Build rows in submission order.
pub fn build_rows(items: &[InventoryItem]) -> Vec<EvaluatedRow> {
    items.iter().map(build_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(count: &[&str], remarks: &[&str]) -> InventoryItem {
        InventoryItem::new(
            "PM-001",
            count.iter().map(|s| s.to_string()).collect(),
            remarks.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Evaluates the formulas we emit with spreadsheet precedence
    /// (`*` binds tighter than `+`/`-`, parentheses group).
    fn eval_formula(formula: &str) -> f64 {
        struct P<'a> {
            s: &'a [u8],
            i: usize,
        }

        impl P<'_> {
            fn expr(&mut self) -> f64 {
                let mut acc = self.term();
                while self.i < self.s.len() {
                    match self.s[self.i] {
                        b'+' => {
                            self.i += 1;
                            acc += self.term();
                        }
                        b'-' => {
                            self.i += 1;
                            acc -= self.term();
                        }
                        _ => break,
                    }
                }
                acc
            }

            fn term(&mut self) -> f64 {
                let mut acc = self.factor();
                while self.i < self.s.len() && self.s[self.i] == b'*' {
                    self.i += 1;
                    acc *= self.factor();
                }
                acc
            }

            fn factor(&mut self) -> f64 {
                if self.s[self.i] == b'(' {
                    self.i += 1;
                    let v = self.expr();
                    assert_eq!(self.s[self.i], b')');
                    self.i += 1;
                    return v;
                }
                let start = self.i;
                while self.i < self.s.len() && (self.s[self.i].is_ascii_digit() || self.s[self.i] == b'.') {
                    self.i += 1;
                }
                std::str::from_utf8(&self.s[start..self.i]).unwrap().parse().unwrap()
            }
        }

        let mut p = P { s: formula.as_bytes(), i: 0 };
        let v = p.expr();
        assert_eq!(p.i, formula.len(), "trailing input in {formula}");
        v
    }

    #[test]
    fn two_plain_fragments_sum() {
        let row = build_row(&item(&["5", "3"], &[]));
        assert_eq!(row.total(), 8.0);
        assert_eq!(row.formula(), "5+3");
        assert_eq!(row.count_display(), "5 | 3");
    }

    #[test]
    fn product_fragment() {
        let row = build_row(&item(&["4×3"], &[]));
        assert_eq!(row.total(), 12.0);
        assert_eq!(row.formula(), "4*3");
    }

    #[test]
    fn subtraction_fragment_is_parenthesised() {
        let row = build_row(&item(&["10-2-3"], &[]));
        assert_eq!(row.total(), 5.0);
        assert_eq!(row.formula(), "(10-2-3)");
    }

    #[test]
    fn hold_remark_sets_hold_fill() {
        let row = build_row(&item(&["1"], &["On Hold"]));
        assert_eq!(row.fill(), FillColor::Hold);
        assert_eq!(row.remarks_display(), "On Hold");
    }

    #[test]
    fn remarks_are_joined_for_display() {
        let row = build_row(&item(&["1"], &["First Out", "Approved"]));
        assert_eq!(row.remarks_display(), "First Out | Approved");
        assert_eq!(row.fill(), FillColor::Approved);
    }

    #[test]
    fn empty_breakdown_is_zero() {
        let row = build_row(&item(&[], &[]));
        assert_eq!(row.total(), 0.0);
        assert_eq!(row.formula(), "0");
        assert_eq!(row.count_display(), "");
    }

    // Best-effort policy: a bad fragment never fails the row.
    #[test]
    fn unparseable_fragment_is_flagged_not_fatal() {
        let row = build_row(&item(&["12", "twelve"], &[]));
        assert_eq!(row.total(), 12.0);
        assert_eq!(row.formula(), "12+0");
        assert_eq!(row.warnings().len(), 1);
        assert_eq!(row.warnings()[0].fragment, "twelve");
    }

    #[test]
    fn build_row_is_idempotent() {
        let it = item(&["4×3", "10-2-3", "x", "7"], &["old"]);
        assert_eq!(build_row(&it), build_row(&it));
    }

    #[test]
    fn build_rows_preserves_order() {
        let items = vec![
            InventoryItem::new("A", vec!["1".into()], vec![]),
            InventoryItem::new("B", vec!["2".into()], vec![]),
        ];
        let rows = build_rows(&items);
        assert_eq!(rows.iter().map(|r| r.code()).collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn total_equals_formula_for_mixed_breakdown() {
        let row = build_row(&item(&["4×3", "10-2-3", "5+3-1", " 2.5 ", "bad", "", "-4"], &[]));
        assert_eq!(row.total(), eval_formula(row.formula()));
        assert_eq!(row.total(), 12.0 + 5.0 + 7.0 + 2.5 - 4.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn fragment() -> impl Strategy<Value = String> {
            prop_oneof![
                (0u32..10_000).prop_map(|n| n.to_string()),
                (0u32..1_000, 0u32..1_000).prop_map(|(a, b)| format!("{a}×{b}")),
                prop::collection::vec((0u32..1_000, prop::bool::ANY), 2..5).prop_map(|terms| {
                    let mut s = String::new();
                    for (i, (n, plus)) in terms.into_iter().enumerate() {
                        if i > 0 {
                            s.push(if plus { '+' } else { '-' });
                        }
                        s.push_str(&n.to_string());
                    }
                    s
                }),
                "[a-z]{1,6}",
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the total always equals what the formula computes.
            #[test]
            fn total_matches_formula(count in prop::collection::vec(fragment(), 0..8)) {
                let it = InventoryItem::new("P", count, vec![]);
                let row = build_row(&it);
                prop_assert_eq!(row.total(), eval_formula(row.formula()));
            }

            /// Property: building the same item twice yields the same row.
            #[test]
            fn build_is_deterministic(
                count in prop::collection::vec(fragment(), 0..8),
                remarks in prop::collection::vec("[A-Za-z ]{0,12}", 0..4),
            ) {
                let it = InventoryItem::new("P", count, remarks);
                prop_assert_eq!(build_row(&it), build_row(&it));
            }
        }
    }
}
