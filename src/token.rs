//! Sentinel parsing for query keys.
//!
//! Query objects mark combinators and comparators with reserved prefixes
//! inside their keys:
//!
//! - `$` introduces a keyword (`$and`, `$or`, `$not`, `$is`, `$in`, `$gt`,
//!   `$gte`, `$lt`, `$lte`)
//! - `!` negates whatever follows it and may be repeated
//!
//! All string slicing on keys lives here. The matcher only ever sees a
//! [`FieldKey`] or a [`Token`].

/// Negation marker.
pub const NEGATION: char = '!';

/// Keyword marker.
pub const SENTINEL: char = '$';

/// Reserved keywords recognised in query keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `$and`
    And,
    /// `$or`
    Or,
    /// `$not`
    Not,
    /// `$is`
    Is,
    /// `$in`
    In,
    /// `$gt`
    Gt,
    /// `$gte`
    Gte,
    /// `$lt`
    Lt,
    /// `$lte`
    Lte,
}

impl Keyword {
    /// Looks up an exact keyword, sentinel included.
    pub fn lookup(s: &str) -> Option<Keyword> {
        match s {
            "$and" => Some(Keyword::And),
            "$or" => Some(Keyword::Or),
            "$not" => Some(Keyword::Not),
            "$is" => Some(Keyword::Is),
            "$in" => Some(Keyword::In),
            "$gt" => Some(Keyword::Gt),
            "$gte" => Some(Keyword::Gte),
            "$lt" => Some(Keyword::Lt),
            "$lte" => Some(Keyword::Lte),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "$and",
            Keyword::Or => "$or",
            Keyword::Not => "$not",
            Keyword::Is => "$is",
            Keyword::In => "$in",
            Keyword::Gt => "$gt",
            Keyword::Gte => "$gte",
            Keyword::Lt => "$lt",
            Keyword::Lte => "$lte",
        }
    }
}

/// A key with every leading `!` consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The key as written in the query.
    pub raw: &'a str,
    /// What remains after the negation markers.
    pub base: &'a str,
    /// Matched keyword, if `base` is one.
    pub keyword: Option<Keyword>,
    /// Odd number of `!` consumed.
    pub negated: bool,
}

/// Parses a comparator token, stripping all leading `!` markers.
///
/// ```
/// use jsonmatch::token::{parse_token, Keyword};
///
/// let token = parse_token("!!!$in");
/// assert_eq!(token.keyword, Some(Keyword::In));
/// assert!(token.negated);
///
/// let token = parse_token("$nope");
/// assert_eq!(token.keyword, None);
/// ```
pub fn parse_token(raw: &str) -> Token<'_> {
    let base = raw.trim_start_matches(NEGATION);
    let stripped = raw.len() - base.len();

    Token {
        raw,
        base,
        keyword: Keyword::lookup(base),
        negated: stripped % 2 == 1,
    }
}

/// What a query key dispatches to once its negation markers are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
    /// `$and`
    And,
    /// `$or`
    Or,
    /// `$not`
    Not,
    /// Any other `$`-prefixed key, applied to the whole document.
    Comparator(Token<'a>),
    /// A document field path.
    Field(&'a str),
}

/// A classified query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldKey<'a> {
    pub kind: KeyKind<'a>,
    /// Odd number of leading `!` markers.
    pub negated: bool,
}

/// Classifies a query key.
///
/// Leading `!` markers are removed one at a time, each step inverting the
/// outcome, until the remainder no longer starts with one. What is left is
/// matched against the combinators, then against the `$` sentinel.
///
/// ```
/// use jsonmatch::token::{classify, KeyKind};
///
/// let key = classify("!!!$or");
/// assert_eq!(key.kind, KeyKind::Or);
/// assert!(key.negated);
/// ```
pub fn classify(key: &str) -> FieldKey<'_> {
    let mut rest = key;
    let mut negated = false;
    while let Some(inner) = rest.strip_prefix(NEGATION) {
        negated = !negated;
        rest = inner;
    }

    let kind = match Keyword::lookup(rest) {
        Some(Keyword::And) => KeyKind::And,
        Some(Keyword::Or) => KeyKind::Or,
        Some(Keyword::Not) => KeyKind::Not,
        _ if rest.starts_with(SENTINEL) => KeyKind::Comparator(parse_token(rest)),
        _ => KeyKind::Field(rest),
    };

    FieldKey { kind, negated }
}
