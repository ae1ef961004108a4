//! Derived views: text search, enum filters and single-column sort.
//!
//! A view is recomputed from the full store on every input change. Filtering
//! is conjunctive: the free-text query must match at least one searchable
//! field, and every non-"all" enum selection must match exactly. Sorting is
//! stable; without a sort spec the store's insertion order is preserved.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use parc_model::{ParcError, Result};

/// Sort direction for a view column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Column plus direction, as picked in a table header.
#[derive(Debug, Clone)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// Comparable value a record exposes for one sort column.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Text(String),
    Number(f64),
    Integer(i64),
    Date(NaiveDate),
}

impl SortKey {
    /// Compare two keys of the same column.
    ///
    /// Text compares case-insensitively. Keys of different shapes never meet
    /// in practice (one column, one shape) and compare as equal.
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// One enum filter control: either "all" or a specific value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    pub fn value(label: impl Into<String>) -> Self {
        Self::Value(label.into())
    }
}

/// Current state of the search box, filter dropdowns and sort header.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub search: String,
    pub filters: BTreeMap<String, Selection>,
    pub sort: Option<SortSpec>,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, selection: Selection) -> Self {
        self.filters.insert(field.into(), selection);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// Record-side contract of the view engine.
pub trait TableRecord {
    /// Text fields eligible for substring search, unset optionals excluded.
    fn searchable_text(&self) -> Vec<&str>;

    /// Value of an enum filter field, `None` when the field is unknown or
    /// unset on this record (only "all" matches then).
    fn categorical(&self, field: &str) -> Option<&str>;

    /// Sort key for a column, `None` when this record has no value there.
    fn sort_key(&self, column: &str) -> Option<SortKey>;

    /// Legal sort columns, used to reject caller typos up front.
    fn sort_columns() -> &'static [&'static str];
}

/// Compute the derived view: filter, then stable sort.
pub fn apply<'a, R: TableRecord>(records: &'a [R], query: &ViewQuery) -> Result<Vec<&'a R>> {
    if let Some(sort) = &query.sort
        && !R::sort_columns().contains(&sort.column.as_str())
    {
        return Err(ParcError::UnknownColumn(sort.column.clone()));
    }

    let needle = query.search.trim().to_lowercase();
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| matches_search(*record, &needle) && matches_filters(*record, query))
        .collect();

    if let Some(sort) = &query.sort {
        rows.sort_by(|a, b| compare_rows(*a, *b, sort));
    }
    Ok(rows)
}

fn matches_search<R: TableRecord>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .searchable_text()
        .iter()
        .any(|text| text.to_lowercase().contains(needle))
}

fn matches_filters<R: TableRecord>(record: &R, query: &ViewQuery) -> bool {
    query.filters.iter().all(|(field, selection)| {
        match selection {
            Selection::All => true,
            Selection::Value(expected) => record
                .categorical(field)
                .is_some_and(|value| value == expected),
        }
    })
}

/// Records without a value for the sort column go last, in either direction,
/// keeping insertion order among themselves.
fn compare_rows<R: TableRecord>(a: &R, b: &R, sort: &SortSpec) -> Ordering {
    match (a.sort_key(&sort.column), b.sort_key(&sort.column)) {
        (Some(key_a), Some(key_b)) => {
            let ordering = key_a.compare(&key_b);
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
