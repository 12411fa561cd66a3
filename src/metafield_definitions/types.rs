//! Metafield definition entities and their wire mapping.
//!
//! Domain fields are snake_case; the wire uses camelCase. Empty strings,
//! `None`, empty lists and `false` flags are left out when a definition
//! is serialized as mutation input.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The kind of resource a metafield definition applies to.
///
/// Serializes as the bare GraphQL enum constant (`PRODUCT`,
/// `PRODUCTVARIANT`, ...). "Any owner" is expressed as
/// `Option::<OwnerType>::None` rather than a variant.
///
/// ```rust
/// use shopify_metafields::OwnerType;
///
/// assert_eq!(OwnerType::Product.as_str(), "PRODUCT");
/// assert_eq!(serde_json::to_string(&OwnerType::ProductVariant).unwrap(), "\"PRODUCTVARIANT\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerType {
    /// Products.
    Product,
    /// Product variants.
    #[serde(rename = "PRODUCTVARIANT")]
    ProductVariant,
    /// Collections.
    Collection,
    /// Customers.
    Customer,
    /// Orders.
    Order,
    /// Draft orders.
    #[serde(rename = "DRAFTORDER")]
    DraftOrder,
    /// B2B companies.
    Company,
    /// B2B company locations.
    CompanyLocation,
    /// Inventory locations.
    Location,
    /// Markets.
    Market,
    /// Online store pages.
    Page,
    /// Blog articles.
    Article,
    /// Blogs.
    Blog,
    /// The shop itself.
    Shop,
    /// Discounts.
    Discount,
}

impl OwnerType {
    /// Returns the GraphQL enum constant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "PRODUCT",
            Self::ProductVariant => "PRODUCTVARIANT",
            Self::Collection => "COLLECTION",
            Self::Customer => "CUSTOMER",
            Self::Order => "ORDER",
            Self::DraftOrder => "DRAFTORDER",
            Self::Company => "COMPANY",
            Self::CompanyLocation => "COMPANY_LOCATION",
            Self::Location => "LOCATION",
            Self::Market => "MARKET",
            Self::Page => "PAGE",
            Self::Article => "ARTICLE",
            Self::Blog => "BLOG",
            Self::Shop => "SHOP",
            Self::Discount => "DISCOUNT",
        }
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named constraint on the values a metafield may hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldValidation {
    /// Validation name, e.g. `choices` or `max`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Validation value, kept exactly as sent by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    /// Value type, e.g. `list.single_line_text_field`. Read-only.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl MetafieldValidation {
    /// Creates a validation with an untyped value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            type_name: None,
        }
    }

    /// Creates a `choices` validation whose value is the JSON-encoded list
    /// of allowed values.
    ///
    /// ```rust
    /// use shopify_metafields::MetafieldValidation;
    ///
    /// let validation = MetafieldValidation::choices(["Choice 1", "Choice 2"]);
    /// assert_eq!(validation.value, r#"["Choice 1","Choice 2"]"#);
    /// ```
    #[must_use]
    pub fn choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = serde_json::Value::Array(
            choices
                .into_iter()
                .map(|choice| serde_json::Value::String(choice.into()))
                .collect(),
        );
        Self::new("choices", list.to_string())
    }
}

/// The read-side type descriptor of a definition: `{ name, category }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldType {
    /// Scalar type name, e.g. `single_line_text_field`.
    pub name: String,
    /// Type category, e.g. `TEXT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A metafield definition.
///
/// The same struct is used as mutation input and as decoded output:
///
/// - `id` is empty until the shop assigns one on creation
/// - `type_name` is written as a plain type name, but the API reads it
///   back as a [`MetafieldType`] descriptor; both forms decode into the
///   type name
/// - `pin` and `visible_to_storefront_api` are only ever written
///
/// ```rust
/// use shopify_metafields::{MetafieldDefinition, MetafieldValidation, OwnerType};
///
/// let definition = MetafieldDefinition {
///     name: "Test Definition".into(),
///     namespace: "oyster".into(),
///     key: "test_definition".into(),
///     owner_type: Some(OwnerType::Product),
///     type_name: Some("single_line_text_field".into()),
///     validations: vec![MetafieldValidation::choices(["A", "B"])],
///     pin: true,
///     ..Default::default()
/// };
///
/// let json = serde_json::to_value(&definition).unwrap();
/// assert_eq!(json["ownerType"], "PRODUCT");
/// assert_eq!(json["type"], "single_line_text_field");
/// assert!(json.get("id").is_none());
/// assert!(json.get("visibleToStorefrontApi").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldDefinition {
    /// Global ID, e.g. `gid://shopify/MetafieldDefinition/343506967`.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    /// Description shown in the admin.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub description: String,
    /// Namespace grouping related definitions.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub namespace: String,
    /// Key, unique within the namespace and owner type.
    #[serde(default, skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub key: String,
    /// Resource kind the definition applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_type: Option<OwnerType>,
    /// Metafield type name.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_type_name"
    )]
    pub type_name: Option<String>,
    /// Validation rules, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub validations: Vec<MetafieldValidation>,
    /// Pin the definition in the admin.
    #[serde(default, skip_serializing_if = "is_false")]
    pub pin: bool,
    /// Expose the metafields through the Storefront API.
    #[serde(default, skip_serializing_if = "is_false")]
    pub visible_to_storefront_api: bool,
}

impl MetafieldDefinition {
    /// Returns `true` once the shop has assigned an ID.
    #[must_use]
    pub fn is_created(&self) -> bool {
        !self.id.is_empty()
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_type_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TypeRepr {
        Name(String),
        Descriptor(MetafieldType),
    }

    Ok(
        Option::<TypeRepr>::deserialize(deserializer)?.map(|repr| match repr {
            TypeRepr::Name(name) => name,
            TypeRepr::Descriptor(descriptor) => descriptor.name,
        }),
    )
}
