/// Fields a filter expression can test
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    /// Type tag (case-insensitive equality)
    Type,
    /// Contributor name (case-insensitive substring)
    Contributor,
    /// Developer-focused flag (true/false)
    Dev,
}

/// Logical operators for combining filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    /// Both conditions must match (default between different fields)
    And,
    /// Either condition matches (default within same field)
    Or,
}

/// Single field:value filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: FilterField,
    pub value: String,
}

impl FieldFilter {
    pub fn new(field: FilterField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

/// Flat filter expression: `filters[0] op[0] filters[1] op[1] ...`, evaluated left to right.
///
/// No parentheses. Without an explicit keyword, filters on the same field are OR'd
/// (`contributor:a contributor:b`) and filters on different fields are AND'd
/// (`type:image dev:true`).
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
