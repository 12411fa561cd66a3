//! Query and mutation documents for metafield definitions.
//!
//! Filter values and mutation input are always bound as variables, never
//! spliced into the query text.

use serde_json::Value;

use crate::graphql::GraphqlQuery;
use crate::metafield_definitions::types::{MetafieldDefinition, OwnerType};

/// Number of definitions requested by [`list_query`]. No cursor is sent,
/// so anything past the first page is not returned.
pub const PAGE_SIZE: usize = 100;

/// Fields selected for every listed definition.
const LIST_SELECTION: &str =
    "edges { node { id name namespace key validations { name type value } } }";

/// Fixed text of the create mutation; the definition travels in
/// `$definition`.
pub const CREATE_MUTATION: &str = "mutation CreateMetafieldDefinition($definition: MetafieldDefinitionInput!) { metafieldDefinitionCreate(definition: $definition) { createdDefinition { id name } userErrors { field message code } } }";

/// Builds the list query.
///
/// The `ownerType` and `namespace` arguments appear in the text (and in
/// `variables`) only when the corresponding filter is set; with neither
/// set the document has no variables at all.
///
/// ```rust
/// use shopify_metafields::metafield_definitions::list_query;
/// use shopify_metafields::OwnerType;
///
/// let query = list_query(Some(OwnerType::Product), "");
/// assert!(query.query.contains("ownerType: $ownerType"));
/// assert!(!query.query.contains("namespace:"));
/// assert_eq!(query.variable("ownerType").unwrap(), "PRODUCT");
/// ```
#[must_use]
pub fn list_query(owner_type: Option<OwnerType>, namespace: &str) -> GraphqlQuery {
    let mut declarations = Vec::new();
    let mut arguments = vec![format!("first: {PAGE_SIZE}")];
    let mut variables = Vec::new();

    if let Some(owner_type) = owner_type {
        declarations.push("$ownerType: MetafieldOwnerType!");
        arguments.push("ownerType: $ownerType".to_string());
        variables.push(("ownerType", Value::from(owner_type.as_str())));
    }
    if !namespace.is_empty() {
        declarations.push("$namespace: String!");
        arguments.push("namespace: $namespace".to_string());
        variables.push(("namespace", Value::from(namespace)));
    }

    let signature = if declarations.is_empty() {
        String::new()
    } else {
        format!("({})", declarations.join(", "))
    };
    let text = format!(
        "query MetafieldDefinitions{signature} {{ metafieldDefinitions({}) {{ {LIST_SELECTION} }} }}",
        arguments.join(", ")
    );

    variables
        .into_iter()
        .fold(GraphqlQuery::new(text), |query, (name, value)| {
            query.with_variable(name, value)
        })
}

/// Builds the create mutation with `definition` as its only argument.
///
/// # Errors
///
/// Returns the `serde_json` error if the definition cannot be serialized.
pub fn create_mutation(definition: &MetafieldDefinition) -> Result<GraphqlQuery, serde_json::Error> {
    let input = serde_json::to_value(definition)?;
    Ok(GraphqlQuery::new(CREATE_MUTATION).with_variable("definition", input))
}
