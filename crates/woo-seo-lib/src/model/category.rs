use serde::{Deserialize, Serialize};

/// Product category with the fields used for store-wide reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireCategory")]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub product_count: u64,
    pub has_description: bool,
}

/// Shape of `products/categories` entries on the wire.
#[derive(Deserialize)]
struct WireCategory {
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    description: Option<String>,
}

impl From<WireCategory> for CategoryRecord {
    fn from(w: WireCategory) -> Self {
        CategoryRecord {
            id: w.id,
            name: w.name,
            product_count: w.count,
            has_description: w
                .description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_count_and_description() {
        let cats: Vec<CategoryRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Mugs", "count": 12, "description": "Ceramic mugs"},
            {"id": 2, "name": "Misc", "count": 0, "description": "   "},
            {"id": 3, "name": "Bare"}
        ]))
        .expect("deserialize");

        assert_eq!(cats[0].product_count, 12);
        assert!(cats[0].has_description);
        assert!(!cats[1].has_description);
        assert!(!cats[2].has_description);
        assert_eq!(cats[2].product_count, 0);
    }
}
