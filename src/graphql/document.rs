//! GraphQL request documents.

use serde::Serialize;
use serde_json::{Map, Value};

/// A query or mutation ready to be sent: the query text plus the values
/// bound to its named parameters.
///
/// `variables` is `None` when the query declares no parameters, and the
/// key is then left out of the request body entirely.
///
/// ```rust
/// use shopify_metafields::GraphqlQuery;
/// use serde_json::json;
///
/// let query = GraphqlQuery::new("{ shop { name } }");
/// assert_eq!(query.to_body(), json!({ "query": "{ shop { name } }" }));
///
/// let query = GraphqlQuery::new("query Shop($id: ID!) { node(id: $id) { id } }")
///     .with_variable("id", json!("gid://shopify/Shop/1"));
/// assert_eq!(query.to_body()["variables"]["id"], "gid://shopify/Shop/1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlQuery {
    /// The query text.
    pub query: String,
    /// Values for the query's named parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Map<String, Value>>,
}

impl GraphqlQuery {
    /// Creates a document with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    /// Binds `value` to the parameter `$name`.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: Value) -> Self {
        self.variables
            .get_or_insert_with(Map::new)
            .insert(name.into(), value);
        self
    }

    /// Returns the variable bound to `name`, if any.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.as_ref().and_then(|vars| vars.get(name))
    }

    /// Returns the operation name, if the document declares one.
    ///
    /// `mutation CreateThing($x: X!) { ... }` yields `CreateThing`; an
    /// anonymous `{ ... }` query yields `None`.
    #[must_use]
    pub fn operation_name(&self) -> Option<&str> {
        let text = self.query.trim_start();
        let rest = text
            .strip_prefix("query")
            .or_else(|| text.strip_prefix("mutation"))?
            .trim_start();
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        (end > 0).then(|| &rest[..end])
    }

    /// Builds the JSON request body `{ "query": ..., "variables": ... }`.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::String(self.query.clone()));
        if let Some(variables) = &self.variables {
            body.insert("variables".to_string(), Value::Object(variables.clone()));
        }
        Value::Object(body)
    }
}
