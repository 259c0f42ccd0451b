//! Small SQL fragment builders: WHERE clauses for the paginated list
//! endpoints and SET clauses for partial updates. Conditions bind as
//! positional `$n` parameters; values travel separately from the SQL text.

/// Builds `WHERE` clauses from optional filters. Absent and empty-string
/// values add no predicate at all.
#[derive(Debug, Default)]
pub struct WhereBuilder {
    conditions: Vec<String>,
    params: Vec<String>,
}

impl WhereBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match (`ILIKE '%value%'`), with LIKE
    /// metacharacters escaped in the value.
    pub fn contains(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.params.push(format!("%{}%", escape_like(v)));
            self.conditions
                .push(format!("{} ILIKE ${} ESCAPE '\\'", column, self.params.len()));
        }
        self
    }

    /// Exact match on a text column.
    pub fn equals(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.params.push(v.to_string());
            self.conditions
                .push(format!("{} = ${}", column, self.params.len()));
        }
        self
    }

    /// Exact match on a uuid column. The column is compared as text so the
    /// parameter can bind as a plain string.
    pub fn equals_id(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(v) = non_empty(value) {
            self.params.push(v.to_string());
            self.conditions
                .push(format!("{}::text = ${}", column, self.params.len()));
        }
        self
    }

    /// `WHERE ...` fragment, or an empty string when no filter is active.
    pub fn clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Builds `SET` clauses for partial updates: only fields the caller
/// supplied are written.
#[derive(Debug, Default)]
pub struct UpdateBuilder {
    assignments: Vec<String>,
    params: Vec<String>,
}

impl UpdateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a text column when a value is present.
    pub fn set(mut self, column: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.params.push(v.to_string());
            self.assignments
                .push(format!("{} = ${}", column, self.params.len()));
        }
        self
    }

    /// Assign a non-text column, casting the bound text parameter
    /// (e.g. `"numeric"`, `"timestamptz"`, `"uuid"`).
    pub fn set_cast(mut self, column: &str, value: Option<&str>, cast: &str) -> Self {
        if let Some(v) = value {
            self.params.push(v.to_string());
            self.assignments
                .push(format!("{} = ${}::{}", column, self.params.len(), cast));
        }
        self
    }

    /// `SET ...` fragment. Empty when nothing was assigned.
    pub fn clause(&self) -> String {
        if self.assignments.is_empty() {
            String::new()
        } else {
            format!("SET {}", self.assignments.join(", "))
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
