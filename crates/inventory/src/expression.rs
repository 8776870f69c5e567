//! Count fragment grammar and evaluation.
//!
//! A fragment is one raw entry of an item's count breakdown, e.g. `"12"`,
//! `"4×3"` or `"10+2-1"`. Each fragment is parsed exactly once into a
//! [`Fragment`]; both its numeric value and its spreadsheet formula token are
//! derived from that parse, so the total written to a report always equals what
//! the spreadsheet computes from the formula.
//!
//! ```text
//! fragment := ""                        -> Empty
//!           | operand "×" operand       -> Product
//!           | term (("+" | "-") term)+  -> Additive (left to right)
//!           | number                    -> Number
//!           | anything else             -> Invalid
//! number   := digits ["." digits] | "." digits
//! ```
//!
//! Evaluation is best-effort and never fails: text that does not parse is
//! counted as zero and written as `0` into the formula. Every such fallback is
//! reported as an [`EvalWarning`] so callers can surface it.

/// The multiplication sign accepted in count fragments.
pub const MULTIPLY: char = '×';

/// Additive operator between two terms.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
}

impl Op {
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
        }
    }
}

/// One operand of an additive fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Number(f64),
    /// Nothing between two operators (or before a leading sign).
    Empty,
    /// Text that is not a number; counts as zero.
    Invalid(String),
}

impl Term {
    fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Term::Empty;
        }
        match parse_number(raw) {
            Some(n) => Term::Number(n),
            None => Term::Invalid(raw.to_string()),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Term::Number(n) => *n,
            Term::Empty | Term::Invalid(_) => 0.0,
        }
    }

    fn write_token(&self, out: &mut String) {
        match self {
            Term::Number(n) => out.push_str(&format_number(*n)),
            Term::Empty | Term::Invalid(_) => out.push('0'),
        }
    }
}

/// Why a fragment (or part of it) fell back to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Not a number and not an expression.
    NotANumber,
    /// A `×` fragment without exactly two numeric operands.
    MalformedProduct,
    /// One term of a `+`/`-` expression is not a number.
    InvalidTerm { term: String },
}

/// Parsed form of a single count fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Empty,
    Number(f64),
    Product(f64, f64),
    Additive { first: Term, rest: Vec<(Op, Term)> },
    Invalid(FallbackReason),
}

impl Fragment {
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Fragment::Empty;
        }
        if s.contains(MULTIPLY) {
            return parse_product(s);
        }
        if s.contains(['+', '-']) {
            return parse_additive(s);
        }
        match parse_number(s) {
            Some(n) => Fragment::Number(n),
            None => Fragment::Invalid(FallbackReason::NotANumber),
        }
    }

    /// Numeric contribution of this fragment to the item total.
    pub fn value(&self) -> f64 {
        match self {
            Fragment::Empty | Fragment::Invalid(_) => 0.0,
            Fragment::Number(n) => *n,
            Fragment::Product(a, b) => a * b,
            Fragment::Additive { first, rest } => rest
                .iter()
                .fold(first.value(), |acc, (op, term)| op.apply(acc, term.value())),
        }
    }

    /// Formula text equivalent to [`Fragment::value`].
    ///
    /// Additive fragments are parenthesised so they can be joined with `+`.
    pub fn formula_token(&self) -> String {
        match self {
            Fragment::Empty | Fragment::Invalid(_) => "0".to_string(),
            Fragment::Number(n) => format_number(*n),
            Fragment::Product(a, b) => format!("{}*{}", format_number(*a), format_number(*b)),
            Fragment::Additive { first, rest } => {
                let mut out = String::from("(");
                first.write_token(&mut out);
                for (op, term) in rest {
                    out.push(op.symbol());
                    term.write_token(&mut out);
                }
                out.push(')');
                out
            }
        }
    }

    /// Fallbacks taken while parsing, in source order.
    pub fn fallbacks(&self) -> Vec<FallbackReason> {
        match self {
            Fragment::Invalid(reason) => vec![reason.clone()],
            Fragment::Additive { first, rest } => std::iter::once(first)
                .chain(rest.iter().map(|(_, term)| term))
                .filter_map(|term| match term {
                    Term::Invalid(text) => Some(FallbackReason::InvalidTerm { term: text.clone() }),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A fragment that was (partly) counted as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalWarning {
    pub fragment_index: usize,
    pub fragment: String,
    pub reason: FallbackReason,
}

/// Result of evaluating a whole count breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct CountEvaluation {
    pub total: f64,
    /// Formula without the leading `=`.
    pub formula: String,
    pub warnings: Vec<EvalWarning>,
}

/// Evaluate every fragment of a count breakdown.
///
/// The formula joins the fragment tokens with `+`; an empty breakdown yields
/// total `0` and formula `"0"`.
pub fn evaluate_count<S: AsRef<str>>(fragments: &[S]) -> CountEvaluation {
    if fragments.is_empty() {
        return CountEvaluation {
            total: 0.0,
            formula: "0".to_string(),
            warnings: Vec::new(),
        };
    }

    let mut total = 0.0;
    let mut tokens = Vec::with_capacity(fragments.len());
    let mut warnings = Vec::new();

    for (index, raw) in fragments.iter().enumerate() {
        let raw = raw.as_ref();
        let fragment = Fragment::parse(raw);
        total += fragment.value();
        tokens.push(fragment.formula_token());
        warnings.extend(fragment.fallbacks().into_iter().map(|reason| EvalWarning {
            fragment_index: index,
            fragment: raw.to_string(),
            reason,
        }));
    }

    CountEvaluation {
        total,
        formula: tokens.join("+"),
        warnings,
    }
}

fn parse_product(s: &str) -> Fragment {
    let mut operands = s.split(MULTIPLY);
    match (operands.next(), operands.next(), operands.next()) {
        (Some(a), Some(b), None) => match (parse_number(a), parse_number(b)) {
            (Some(a), Some(b)) => Fragment::Product(a, b),
            _ => Fragment::Invalid(FallbackReason::MalformedProduct),
        },
        _ => Fragment::Invalid(FallbackReason::MalformedProduct),
    }
}

fn parse_additive(s: &str) -> Fragment {
    let ops = s.chars().filter_map(|c| match c {
        '+' => Some(Op::Add),
        '-' => Some(Op::Sub),
        _ => None,
    });
    let mut terms = s.split(['+', '-']).map(Term::parse);
    let first = terms.next().unwrap_or(Term::Empty);
    Fragment::Additive {
        first,
        rest: ops.zip(terms).collect(),
    }
}

/// Strict decimal literal: no sign, exponent, separators or units.
fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match s.split_once('.') {
        Some((int, frac)) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !s.is_empty() && all_digits(s),
    };
    if !well_formed {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn format_number(n: f64) -> String {
    format!("{n}")
}
