use chrono::NaiveDate;

/// Record fields a filter term can test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Sender name (case-insensitive exact match)
    User,
    /// Messages on or after a date (YYYY-MM-DD)
    Since,
    /// Messages on or before a date (YYYY-MM-DD)
    Until,
}

impl FilterField {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "user" | "sender" => Some(Self::User),
            "since" | "from" => Some(Self::Since),
            "until" | "to" => Some(Self::Until),
            _ => None,
        }
    }
}

/// Logical operators for combining terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    And,
    Or,
}

/// Validated value of a single term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Date(NaiveDate),
}

/// Single `field:value` term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: FilterValue,
}

impl FieldFilter {
    pub fn user(name: impl Into<String>) -> Self {
        Self { field: FilterField::User, value: FilterValue::Text(name.into()) }
    }

    pub fn since(date: NaiveDate) -> Self {
        Self { field: FilterField::Since, value: FilterValue::Date(date) }
    }

    pub fn until(date: NaiveDate) -> Self {
        Self { field: FilterField::Until, value: FilterValue::Date(date) }
    }
}

/// Terms joined by operators, evaluated left to right
///
/// `operators[i]` joins the running result with `filters[i + 1]`, so a well-formed
/// expression has exactly one fewer operator than filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterExpr {
    pub filters: Vec<FieldFilter>,
    pub operators: Vec<FilterOperator>,
}

impl FilterExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, filter: FieldFilter) {
        self.filters.push(filter);
    }

    pub fn add_operator(&mut self, operator: FilterOperator) {
        self.operators.push(operator);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
