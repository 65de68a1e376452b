//! Prompt templates built from audit data.

use crate::audit::{ContentAuditReport, ProductSummary};
use crate::model::{CategoryRecord, ProductRecord};
use crate::report::LISTING_LIMIT;

pub const DEFAULT_ANALYZE_PRODUCTS: u32 = 50;
pub const MAX_ANALYZE_PRODUCTS: u32 = 100;
pub const DEFAULT_SEO_BATCH: u32 = 20;
pub const MAX_SEO_BATCH: u32 = 50;

/// Description characters quoted per product in the SEO prompt.
const DESCRIPTION_EXCERPT_CHARS: usize = 200;

pub const ALL_SEO_PRESENT: &str =
    "Great news! All products in the specified range already have SEO metadata configured.";

/// Store-consultant prompt for `analyze_store`.
pub fn analyze_store(
    report: &ContentAuditReport,
    categories: &[CategoryRecord],
    include_products: bool,
) -> String {
    let mut out = String::from(
        "You are a WooCommerce store optimization consultant specialized in SEO and product optimization. \n",
    );

    out.push_str("STORE OVERVIEW:\n");
    out.push_str(&format!("- Total Products Analyzed: {}\n", report.total));
    out.push_str(&format!("- Published Products: {}\n", report.published));
    out.push_str(&format!("- Draft Products: {}\n", report.drafts));
    out.push_str(&format!("- Total Categories: {}\n\n", categories.len()));

    out.push_str("CONTENT ISSUES FOUND:\n");
    out.push_str(&format!(
        "- Products Missing Descriptions: {}\n",
        report.missing_description.len()
    ));
    out.push_str(&format!(
        "- Products Missing Short Descriptions: {}\n",
        report.missing_short_description.len()
    ));
    out.push_str(&format!(
        "- Products Missing SEO Data: {}\n",
        report.missing_seo.len()
    ));
    out.push_str(&format!(
        "- Products with Low-Quality Content: {}\n\n",
        report.low_quality_description.len()
    ));

    if include_products {
        push_priced_listing(
            &mut out,
            "PRODUCTS MISSING DESCRIPTIONS",
            &report.missing_description,
        );
        push_priced_listing(&mut out, "PRODUCTS MISSING SEO DATA", &report.missing_seo);
    }

    if !categories.is_empty() {
        out.push_str("\nCATEGORY ANALYSIS:\n");
        for cat in categories.iter().take(LISTING_LIMIT) {
            let marker = if cat.has_description { '✓' } else { '✗' };
            out.push_str(&format!(
                "- {}: {} products, {marker} description\n",
                cat.name, cat.product_count
            ));
        }
    }

    out.push_str(
        "

Please provide:

1. PRIORITY ASSESSMENT (High/Medium/Low for each issue)
2. ACTIONABLE RECOMMENDATIONS with specific steps
3. CONTENT STRATEGY suggestions for improving product descriptions
4. SEO OPTIMIZATION roadmap
5. ESTIMATED TIMELINE for implementing improvements
6. POTENTIAL IMPACT on store performance

Focus on:
- Quick wins that can be implemented immediately
- Long-term strategies for content improvement
- SEO best practices for e-commerce
- User experience improvements
- Conversion optimization opportunities

Provide specific, actionable advice that a store owner can implement right away.
",
    );
    out
}

/// SEO-copywriter prompt for `bulk_generate_seo`.
///
/// Only products missing an SEO title or description are included. Returns
/// [`ALL_SEO_PRESENT`] when there are none.
pub fn bulk_generate_seo(products: &[ProductRecord]) -> String {
    let needing: Vec<(&ProductRecord, bool, bool)> = products
        .iter()
        .map(|p| (p, p.seo_title().is_none(), p.seo_description().is_none()))
        .filter(|(_, no_title, no_desc)| *no_title || *no_desc)
        .collect();

    if needing.is_empty() {
        return ALL_SEO_PRESENT.to_string();
    }

    let mut out = format!(
        "You are an SEO expert helping to optimize WooCommerce products. Please generate SEO metadata for the following {} products that are missing SEO data.

For each product, provide:
1. SEO Title (max 60 characters) - should be compelling and include key product terms
2. Meta Description (max 160 characters) - should be engaging and encourage clicks
3. Use natural language keywords

Products needing SEO optimization:

",
        needing.len()
    );

    for (i, (p, no_title, no_desc)) in needing.iter().enumerate() {
        let categories = p.category_names();
        let categories = if categories.is_empty() {
            "Uncategorized".to_string()
        } else {
            categories.join(", ")
        };
        let missing = match (*no_title, *no_desc) {
            (true, true) => "SEO Title, Meta Description",
            (true, false) => "SEO Title",
            _ => "Meta Description",
        };

        out.push_str(&format!("\nProduct {}:\n", i + 1));
        out.push_str(&format!("- ID: {}\n", p.id));
        out.push_str(&format!("- Name: {}\n", p.name));
        out.push_str(&format!("- Price: ${}\n", p.price));
        out.push_str(&format!("- Categories: {categories}\n"));
        out.push_str(&format!("- Description: {}\n", excerpt(&p.description)));
        out.push_str(&format!("- Missing: {missing}\n\n"));
    }

    out.push_str(
        "
Please provide the SEO metadata in this format for each product:

Product ID [ID]:
SEO Title: [Your optimized title here]
Meta Description: [Your optimized description here]

Focus on:
- Including relevant keywords naturally
- Making titles and descriptions compelling for users
- Staying within character limits
- Highlighting unique selling points
- Using action-oriented language where appropriate
",
    );
    out
}

fn push_priced_listing(out: &mut String, heading: &str, items: &[ProductSummary]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("\n{heading} ({}):\n", items.len()));
    for p in items.iter().take(LISTING_LIMIT) {
        out.push_str(&format!("- ID {}: {} (${})\n", p.id, p.name, p.price));
    }
    if items.len() > LISTING_LIMIT {
        out.push_str(&format!("... and {} more\n", items.len() - LISTING_LIMIT));
    }
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::classify;
    use crate::model::{CategoryRef, MetaEntry, ProductStatus};
    use crate::seo::{SEO_DESCRIPTION_KEY, SEO_TITLE_KEY};
    use serde_json::json;

    fn product(id: i64, title: bool, desc: bool) -> ProductRecord {
        let mut meta_data = Vec::new();
        if title {
            meta_data.push(MetaEntry {
                id: None,
                key: SEO_TITLE_KEY.to_string(),
                value: json!("Title"),
            });
        }
        if desc {
            meta_data.push(MetaEntry {
                id: None,
                key: SEO_DESCRIPTION_KEY.to_string(),
                value: json!("Desc"),
            });
        }
        ProductRecord {
            id,
            name: format!("Product {id}"),
            status: ProductStatus::Publish,
            price: "12.00".to_string(),
            meta_data,
            ..Default::default()
        }
    }

    #[test]
    fn seo_prompt_skips_complete_products() {
        assert_eq!(
            bulk_generate_seo(&[product(1, true, true)]),
            ALL_SEO_PRESENT
        );
        assert_eq!(bulk_generate_seo(&[]), ALL_SEO_PRESENT);
    }

    #[test]
    fn seo_prompt_lists_missing_fields() {
        let mut with_cat = product(2, true, false);
        with_cat.categories = vec![CategoryRef {
            id: 3,
            name: "Mugs".to_string(),
        }];
        with_cat.description = "é".repeat(250);
        let text = bulk_generate_seo(&[product(1, true, true), with_cat, product(4, false, false)]);

        assert!(text.contains("for the following 2 products"));
        assert!(text.contains("Product 1:\n- ID: 2\n"));
        assert!(text.contains("- Categories: Mugs\n"));
        assert!(text.contains(&format!("- Description: {}...\n", "é".repeat(200))));
        assert!(text.contains("- Missing: Meta Description\n"));
        assert!(text.contains("Product 2:\n- ID: 4\n"));
        assert!(text.contains("- Categories: Uncategorized\n"));
        assert!(text.contains("- Missing: SEO Title, Meta Description\n"));
    }

    #[test]
    fn store_prompt_counts_and_categories() {
        let mut thin = product(5, true, true);
        thin.description = "Too short".to_string();
        thin.short_description = "ok".to_string();
        let report = classify(&[thin, product(6, false, false)]);
        let categories: Vec<CategoryRecord> = serde_json::from_value(json!([
            {"id": 1, "name": "Mugs", "count": 4, "description": "All mugs"},
            {"id": 2, "name": "Plates", "count": 0, "description": " "}
        ]))
        .expect("categories");

        let text = analyze_store(&report, &categories, true);
        assert!(text.contains("- Total Products Analyzed: 2\n"));
        assert!(text.contains("- Total Categories: 2\n"));
        assert!(text.contains("- Products with Low-Quality Content: 1\n"));
        assert!(text.contains("PRODUCTS MISSING SEO DATA (1):\n- ID 6: Product 6 ($12.00)\n"));
        assert!(text.contains("- Mugs: 4 products, ✓ description\n"));
        assert!(text.contains("- Plates: 0 products, ✗ description\n"));

        let without = analyze_store(&report, &categories, false);
        assert!(!without.contains("PRODUCTS MISSING"));
    }
}
