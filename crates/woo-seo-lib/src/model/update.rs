use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::seo::{SEO_DESCRIPTION_KEY, SEO_TITLE_KEY};

/// Meta entry written back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaUpdate {
    pub key: &'static str,
    pub value: String,
}

/// Partial product payload for `PUT products/{id}`.
///
/// Only fields that are `Some` (or a non-empty `meta_data`) are serialized,
/// so the store leaves everything else untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta_data: Vec<MetaUpdate>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.short_description.is_none() && self.meta_data.is_empty()
    }

    pub fn updates_seo_title(&self) -> bool {
        self.meta_data.iter().any(|m| m.key == SEO_TITLE_KEY)
    }

    pub fn updates_seo_description(&self) -> bool {
        self.meta_data.iter().any(|m| m.key == SEO_DESCRIPTION_KEY)
    }
}

/// One caller-supplied update, validated but not yet sent.
///
/// `product_id` keeps the raw JSON the caller sent so the id can be quoted in
/// error messages even when it does not parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRequest {
    pub product_id: Option<Value>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

impl UpdateRequest {
    /// Build a request from one element of a bulk update list.
    ///
    /// Accepts snake_case and camelCase field names. `null` counts as absent.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::NotAnObject(value.to_string()));
        };

        Ok(Self {
            product_id: lookup(map, "product_id", "productId").cloned(),
            description: text_field(map, "description", "description")?,
            short_description: text_field(map, "short_description", "shortDescription")?,
            meta_title: text_field(map, "meta_title", "metaTitle")?,
            meta_description: text_field(map, "meta_description", "metaDescription")?,
        })
    }

    /// Raw id as the caller wrote it, for messages.
    pub fn raw_product_id(&self) -> Option<String> {
        self.product_id.as_ref().map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Parse the product id. Integers and integer strings are accepted.
    pub fn product_id(&self) -> Result<i64, ValidationError> {
        let raw = self
            .product_id
            .as_ref()
            .ok_or(ValidationError::MissingProductId)?;
        match raw {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| ValidationError::InvalidProductId(n.to_string())),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidProductId(raw.to_string())),
            other => Err(ValidationError::InvalidProductId(other.to_string())),
        }
    }

    /// Patch containing exactly the fields present on this request.
    pub fn to_patch(&self) -> ProductPatch {
        let mut meta_data = Vec::new();
        if let Some(title) = &self.meta_title {
            meta_data.push(MetaUpdate {
                key: SEO_TITLE_KEY,
                value: title.clone(),
            });
        }
        if let Some(desc) = &self.meta_description {
            meta_data.push(MetaUpdate {
                key: SEO_DESCRIPTION_KEY,
                value: desc.clone(),
            });
        }

        ProductPatch {
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            meta_data,
        }
    }

    /// Drop fields holding empty strings. Used by the single-product update,
    /// where an empty argument means "leave unchanged".
    pub fn without_empty_fields(mut self) -> Self {
        for field in [
            &mut self.description,
            &mut self.short_description,
            &mut self.meta_title,
            &mut self.meta_description,
        ] {
            if field.as_deref().is_some_and(str::is_empty) {
                *field = None;
            }
        }
        self
    }
}

fn lookup<'a>(map: &'a Map<String, Value>, snake: &str, camel: &str) -> Option<&'a Value> {
    let present = |key: &str| map.get(key).filter(|v| !v.is_null());
    present(snake).or_else(|| present(camel))
}

fn text_field(
    map: &Map<String, Value>,
    snake: &'static str,
    camel: &str,
) -> Result<Option<String>, ValidationError> {
    match lookup(map, snake, camel) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::NotAString { field: snake }),
    }
}
