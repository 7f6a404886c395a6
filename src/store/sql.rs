//! Parameterized SQL for JSONB-backed collections. Identifiers come from code constants
//! and config; values always go through bind parameters.

use super::{Filter, Predicate};

/// Quote identifier for PostgreSQL.
pub(super) fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub(super) fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

/// Quote a JSON key as a string literal for `payload->>'key'`.
fn json_key(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// A value bound to a `$n` placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum BindValue {
    Text(String),
    TextArray(Vec<String>),
}

pub(super) struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

pub(super) fn create_table(table: &str) -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id TEXT PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            payload JSONB NOT NULL
        )
        "#,
        table
    )
}

pub(super) fn insert(table: &str) -> String {
    format!(
        "INSERT INTO {} (id, payload) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING",
        table
    )
}

pub(super) fn replace(table: &str) -> String {
    format!("UPDATE {} SET payload = $2 WHERE id = $1", table)
}

pub(super) fn delete(table: &str) -> String {
    format!("DELETE FROM {} WHERE id = $1", table)
}

pub(super) fn select_by_id(table: &str) -> String {
    format!("SELECT payload FROM {} WHERE id = $1", table)
}

/// SELECT with one WHERE clause per predicate, in insertion order.
pub(super) fn select_filtered(table: &str, filter: &Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut where_parts = Vec::new();
    for p in filter.predicates() {
        let key = json_key(p.field());
        match p {
            Predicate::Eq { value, .. } => {
                let n = q.push_param(BindValue::Text(value.clone()));
                where_parts.push(format!("payload->>{} = ${}", key, n));
            }
            Predicate::In { values, .. } => {
                let n = q.push_param(BindValue::TextArray(values.clone()));
                where_parts.push(format!("payload->>{} = ANY(${})", key, n));
            }
        }
    }
    q.sql = format!("SELECT payload FROM {}", table);
    if !where_parts.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&where_parts.join(" AND "));
    }
    q.sql.push_str(" ORDER BY seq");
    q
}
