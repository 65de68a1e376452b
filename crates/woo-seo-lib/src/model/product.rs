// Prices stay as the store's decimal strings; nothing here does arithmetic on them.
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::seo::{SEO_DESCRIPTION_KEY, SEO_TITLE_KEY};

/// Publication status of a product. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Publish,
    Draft,
    Pending,
    Private,
    Other(String),
}

impl ProductStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Publish => "publish",
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Private => "private",
            Self::Other(raw) => raw,
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ProductStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "publish" => Self::Publish,
            "draft" => Self::Draft,
            "pending" => Self::Pending,
            "private" => Self::Private,
            _ => Self::Other(raw),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `meta_data` entry. Values are arbitrary JSON in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

/// Category reference embedded in a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Product image as returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub src: String,
    /// Filename or title of the attachment.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alt: String,
}

/// Normalized view of a product's content-relevant fields.
///
/// Missing text fields deserialize to empty strings, so "absent" and "empty"
/// are the same thing everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub product_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub regular_price: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sale_price: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stock_status: String,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_description: String,
    #[serde(default)]
    pub meta_data: Vec<MetaEntry>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
    #[serde(default)]
    pub images: Vec<ImageRecord>,
}

impl ProductRecord {
    /// First meta entry with `key`, if any. Later duplicates are ignored.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.meta_data
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Displayable value of the first `key` entry, or `None` when it is falsy.
    pub fn meta_text(&self, key: &str) -> Option<String> {
        let value = self.meta(key)?;
        if !is_truthy(value) {
            return None;
        }
        match value {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn seo_title(&self) -> Option<String> {
        self.meta_text(SEO_TITLE_KEY)
    }

    pub fn seo_description(&self) -> Option<String> {
        self.meta_text(SEO_DESCRIPTION_KEY)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Store-side truthiness: null, "", 0, false, [] and {} are all "not set".
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_store_payload_with_gaps() {
        let product: ProductRecord = serde_json::from_value(json!({
            "id": 17,
            "name": "Red Mug",
            "status": "publish",
            "type": "simple",
            "price": "12.50",
            "regular_price": "15.00",
            "sale_price": "12.50",
            "stock_status": "instock",
            "stock_quantity": null,
            "description": null,
            "meta_data": [
                {"id": 1, "key": "_yoast_wpseo_title", "value": "Red Mug | Shop"}
            ],
            "categories": [{"id": 3, "name": "Kitchen", "slug": "kitchen"}],
            "images": [{"id": 9, "src": "https://shop.test/mug.jpg", "name": "mug", "alt": ""}]
        }))
        .expect("deserialize");

        assert_eq!(product.status, ProductStatus::Publish);
        assert_eq!(product.price, "12.50");
        assert_eq!(product.description, "");
        assert_eq!(product.short_description, "");
        assert_eq!(product.stock_quantity, None);
        assert_eq!(product.seo_title().as_deref(), Some("Red Mug | Shop"));
        assert_eq!(product.seo_description(), None);
        assert_eq!(product.category_names(), vec!["Kitchen"]);
        assert_eq!(product.images[0].alt, "");
    }

    #[test]
    fn unknown_status_is_preserved() {
        let status: ProductStatus = serde_json::from_value(json!("future")).expect("status");
        assert_eq!(status, ProductStatus::Other("future".to_string()));
        assert_eq!(status.to_string(), "future");
        assert_eq!(serde_json::to_value(&status).expect("ser"), json!("future"));
    }

    #[test]
    fn first_meta_entry_wins() {
        let product = ProductRecord {
            meta_data: vec![
                MetaEntry {
                    id: None,
                    key: SEO_TITLE_KEY.to_string(),
                    value: json!(""),
                },
                MetaEntry {
                    id: None,
                    key: SEO_TITLE_KEY.to_string(),
                    value: json!("Later title"),
                },
            ],
            ..Default::default()
        };
        assert_eq!(product.seo_title(), None);
    }

    #[test]
    fn truthiness_follows_store_semantics() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!({"a": 1})));
    }
}
