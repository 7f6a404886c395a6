//! Structured document filters: a conjunction of equality and set-membership predicates
//! over top-level document fields.

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    /// `field == value`
    Eq { field: String, value: String },
    /// `field ∈ values`. An empty set matches nothing.
    In { field: String, values: Vec<String> },
}

impl Predicate {
    pub fn field(&self) -> &str {
        match self {
            Predicate::Eq { field, .. } | Predicate::In { field, .. } => field,
        }
    }

    fn matches(&self, doc: &Value) -> bool {
        let Some(text) = field_text(doc, self.field()) else {
            return false;
        };
        match self {
            Predicate::Eq { value, .. } => text == *value,
            Predicate::In { values, .. } => values.iter().any(|v| *v == text),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Empty filter: matches every document in the collection.
    pub fn all() -> Self {
        Filter::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn is_in<I, S>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predicates.push(Predicate::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluate against a stored JSON document. All predicates must hold.
    pub fn matches(&self, doc: &Value) -> bool {
        self.predicates.iter().all(|p| p.matches(doc))
    }
}

/// Text form of a top-level field, the same way PostgreSQL's `->>` renders it.
/// Missing and null fields have no text form and never match.
fn field_text(doc: &Value, field: &str) -> Option<String> {
    match doc.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_filter_matches_everything() {
        assert!(Filter::all().matches(&json!({ "id": "1" })));
        assert!(Filter::all().matches(&json!({})));
    }

    #[test]
    fn eq_compares_string_fields() {
        let f = Filter::all().eq("department_id", "2");
        assert!(f.matches(&json!({ "id": "r1", "department_id": "2" })));
        assert!(!f.matches(&json!({ "id": "r1", "department_id": "20" })));
        assert!(!f.matches(&json!({ "id": "r1" })));
    }

    #[test]
    fn eq_renders_numbers_as_text() {
        let f = Filter::all().eq("count", "3");
        assert!(f.matches(&json!({ "count": 3 })));
    }

    #[test]
    fn null_field_never_matches() {
        let f = Filter::all().eq("room", "null");
        assert!(!f.matches(&json!({ "room": null })));
    }

    #[test]
    fn in_with_empty_set_matches_nothing() {
        let f = Filter::all().is_in("room", Vec::<String>::new());
        assert!(!f.matches(&json!({ "room": "r1" })));
    }

    #[test]
    fn predicates_are_conjunctive() {
        let f = Filter::all().is_in("room", ["r1", "r2"]).eq("type", "bed");
        assert!(f.matches(&json!({ "room": "r2", "type": "bed" })));
        assert!(!f.matches(&json!({ "room": "r2", "type": "monitor" })));
        assert!(!f.matches(&json!({ "room": "r3", "type": "bed" })));
    }
}
