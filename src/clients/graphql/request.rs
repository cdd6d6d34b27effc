//! GraphQL request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GraphQL request payload: `{"query": ..., "variables": {...}}`.
///
/// Serialization is deterministic: `query` always precedes `variables`, and
/// variables keep a stable key order.
///
/// # Example
///
/// ```rust
/// use shopify_planet_api::clients::graphql::GraphqlRequest;
///
/// let request = GraphqlRequest::new("query { shop { id } }").variable("first", 10);
/// assert_eq!(
///     request.to_body().unwrap(),
///     r#"{"query":"query { shop { id } }","variables":{"first":10}}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlRequest {
    /// The GraphQL document.
    pub query: String,
    /// Variables referenced by the document.
    pub variables: Map<String, Value>,
}

impl GraphqlRequest {
    /// Creates a request with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Creates a request whose variables are the serialized form of `variables`.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `variables` fails to serialize or does
    /// not serialize to a JSON object (or `null`, treated as no variables).
    pub fn with_variables<V: Serialize>(
        query: impl Into<String>,
        variables: &V,
    ) -> Result<Self, serde_json::Error> {
        let variables = match serde_json::to_value(variables)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                    "GraphQL variables must be a JSON object, got {other}"
                )))
            }
        };
        Ok(Self {
            query: query.into(),
            variables,
        })
    }

    /// Adds a single variable.
    #[must_use]
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Serializes the request to the exact string that is signed and sent.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A single entry of a GraphQL `errors` array.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Path to the failing field, if reported.
    #[serde(default)]
    pub path: Option<Vec<Value>>,
    /// Server-specific error details.
    #[serde(default)]
    pub extensions: Option<Value>,
}

/// The GraphQL response envelope carried in the HTTP body.
///
/// Every field is optional. A body that is not a JSON object decodes to the
/// empty envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// The query result; `None` if absent or `null`.
    #[serde(default)]
    pub data: Option<Value>,
    /// GraphQL-level errors reported alongside a 2xx status.
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
    /// Server extensions (cost, tracing).
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphqlResponse {
    /// Decodes the envelope from an HTTP body, falling back to empty.
    #[must_use]
    pub fn from_body(body: Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Vars {
        shopify_domain: String,
    }

    #[test]
    fn test_body_field_order_is_query_then_variables() {
        let request = GraphqlRequest::new("{ a }");
        assert_eq!(request.to_body().unwrap(), r#"{"query":"{ a }","variables":{}}"#);
    }

    #[test]
    fn test_with_variables_uses_serialized_names() {
        let request = GraphqlRequest::with_variables(
            "{ a }",
            &Vars {
                shopify_domain: "example.myshopify.com".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            request.variables.get("shopifyDomain"),
            Some(&json!("example.myshopify.com"))
        );
    }

    #[test]
    fn test_with_variables_rejects_non_objects() {
        assert!(GraphqlRequest::with_variables("{ a }", &vec![1, 2]).is_err());
        assert!(GraphqlRequest::with_variables("{ a }", &"text").is_err());
        let request = GraphqlRequest::with_variables("{ a }", &()).unwrap();
        assert!(request.variables.is_empty());
    }

    #[test]
    fn test_to_body_is_stable_across_calls() {
        let request = GraphqlRequest::new("{ a }")
            .variable("b", 2)
            .variable("a", "x");
        assert_eq!(request.to_body().unwrap(), request.to_body().unwrap());
    }

    #[test]
    fn test_response_envelope_decodes_data_and_errors() {
        let response = GraphqlResponse::from_body(json!({
            "data": {"shop": null},
            "errors": [{"message": "Shop not found", "path": ["shop"]}]
        }));
        assert_eq!(response.data, Some(json!({"shop": null})));
        let errors = response.errors.unwrap();
        assert_eq!(errors[0].message, "Shop not found");
        assert_eq!(errors[0].path, Some(vec![json!("shop")]));
    }

    #[test]
    fn test_response_envelope_tolerates_missing_fields() {
        assert_eq!(GraphqlResponse::from_body(json!({})), GraphqlResponse::default());
        assert_eq!(
            GraphqlResponse::from_body(json!({"data": null})).data,
            None
        );
        assert_eq!(
            GraphqlResponse::from_body(json!("not an object")),
            GraphqlResponse::default()
        );
    }
}
