//! Text rendering for audit and update results.
//!
//! Every function here is pure: structured input in, display text out. Listing
//! truncation happens here and nowhere else.

use crate::audit::{ContentAuditReport, ContentFlags, ImageAuditReport, ProductSummary};
use crate::bulk::BulkPlanResult;
use crate::model::{ProductPatch, ProductRecord};

/// Entries shown per listing before "... and N more".
pub const LISTING_LIMIT: usize = 10;

const IMAGE_SEO_TIPS: [&str; 5] = [
    "Alt text should describe what's in the image",
    "Include product name + descriptive details",
    "Keep alt text under 125 characters",
    "Use keywords naturally, don't stuff",
    "Consider image file size for page speed",
];

/// `get_products` listing with a "Missing content" hint per product.
pub fn product_list(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return "No products matched the query.".to_string();
    }

    let mut out = format!("found {} products:\n\n", products.len());
    for p in products {
        out.push_str(&format!("ID: {}\n", p.id));
        out.push_str(&format!("Name: {}\n", p.name));
        out.push_str(&format!("Status: {}\n", p.status));
        out.push_str(&format!("Price: {}\n", p.price));
        out.push_str(&format!("Stock Status: {}\n", p.stock_status));

        let missing = ContentFlags::evaluate(p).missing_content_labels();
        if !missing.is_empty() {
            out.push_str(&format!("Missing content: {}\n", missing.join(", ")));
        }
        out.push('\n');
    }
    out
}

pub fn product_detail(p: &ProductRecord) -> String {
    let mut out = format!("Product Details (ID: {})\n", p.id);
    out.push_str(&format!("{}\n\n", "=".repeat(40)));
    out.push_str(&format!("Name: {}\n", p.name));
    out.push_str(&format!("Status: {}\n", p.status));
    out.push_str(&format!("Type: {}\n", p.product_type));
    out.push_str(&format!("Price: {}\n", p.price));
    out.push_str(&format!("Regular Price: {}\n", p.regular_price));
    out.push_str(&format!("Sale Price: {}\n", p.sale_price));
    out.push_str(&format!("Stock Status: {}\n", p.stock_status));
    let quantity = p
        .stock_quantity
        .map_or_else(|| "N/A".to_string(), |q| q.to_string());
    out.push_str(&format!("Stock Quantity: {quantity}\n\n"));

    out.push_str(&format!(
        "Description:\n{}\n\n",
        or_placeholder(&p.description, "No description")
    ));
    out.push_str(&format!(
        "Short Description:\n{}\n\n",
        or_placeholder(&p.short_description, "No short description")
    ));

    out.push_str(&format!(
        "SEO Title: {}\n",
        p.seo_title().as_deref().unwrap_or("Not set")
    ));
    out.push_str(&format!(
        "SEO Description: {}\n\n",
        p.seo_description().as_deref().unwrap_or("Not set")
    ));

    if !p.categories.is_empty() {
        out.push_str("Categories:\n");
        for cat in &p.categories {
            out.push_str(&format!("  - {} (ID: {})\n", cat.name, cat.id));
        }
    }
    out
}

/// Confirmation for a single-product update, one line per field sent.
pub fn update_result(product_id: i64, patch: &ProductPatch, updated: &ProductRecord) -> String {
    let mut out = format!("Successfully updated product ID {product_id}:\n\n");
    if patch.description.is_some() {
        out.push_str("✅ Description updated\n");
    }
    if patch.short_description.is_some() {
        out.push_str("✅ Short description updated\n");
    }
    if patch.updates_seo_title() {
        out.push_str("✅ SEO title updated\n");
    }
    if patch.updates_seo_description() {
        out.push_str("✅ SEO description updated\n");
    }
    out.push_str(&format!("\nProduct: {}", updated.name));
    out
}

pub fn content_analysis(report: &ContentAuditReport) -> String {
    if report.total == 0 {
        return "No products found to analyze.".to_string();
    }

    let mut out = String::from("Products Analysis:\n\n");
    out.push_str(&format!("{}\n\n", "=".repeat(30)));
    out.push_str(&format!("Analyzed {} products\n\n", report.total));

    out.push_str(&format!(
        "📝 Missing Descriptions: {}\n",
        report.missing_description.len()
    ));
    push_listing(&mut out, &report.missing_description, "  ");

    out.push_str(&format!(
        "\n📄 Missing Short Descriptions: {}\n",
        report.missing_short_description.len()
    ));
    push_listing(&mut out, &report.missing_short_description, "  ");

    out.push_str(&format!(
        "\n🔍 Missing SEO Data: {}\n",
        report.missing_seo.len()
    ));
    push_listing(&mut out, &report.missing_seo, "  ");

    out.push_str(&format!(
        "\n✏️ Low-Quality Descriptions (<100 chars): {}\n",
        report.low_quality_description.len()
    ));
    push_listing(&mut out, &report.low_quality_description, "  ");

    out
}

pub fn bulk_result(result: &BulkPlanResult) -> String {
    let mut out = String::from("Bulk Update Results\n");
    out.push_str(&format!("{}\n\n", "=".repeat(25)));
    out.push_str(&format!(
        "Successfully updated: {}\n",
        result.success_count()
    ));
    out.push_str(&format!("Errors: {}\n\n", result.error_count()));

    if !result.successes.is_empty() {
        out.push_str("Successful Updates:\n");
        for s in &result.successes {
            out.push_str(&format!(
                "✅ Updated product ID {}: {}\n",
                s.product_id, s.product_name
            ));
        }
        out.push('\n');
    }

    if !result.errors.is_empty() {
        out.push_str("Errors:\n");
        for e in &result.errors {
            out.push_str(&format!("❌ {}\n", e.message()));
        }
    }
    out
}

pub fn image_audit(report: &ImageAuditReport) -> String {
    let mut out = format!("\n🖼️ Image SEO Audit for: {}\n", report.product_name);
    out.push_str(&format!("{}\n\n", "=".repeat(50)));

    if report.has_no_images() {
        out.push_str("❌ Critical Issue: No images found!\n\nSuggestions:\n");
        for s in &report.suggestions {
            out.push_str(&format!("• {s}\n"));
        }
        out.push_str("• Images improve conversion rates by 30-40%\n");
        out.push_str("• Add main product image, detail shots, and lifestyle images");
        return out;
    }

    out.push_str("📊 Summary:\n");
    out.push_str(&format!("  • Total Images: {}\n", report.total_images));
    out.push_str(&format!("  • Issues Found: {}\n", report.total_issues()));
    out.push_str(&format!(
        "  • Good Practices: {}\n\n",
        report.good_practices.len()
    ));

    if !report.issues.is_empty() {
        out.push_str("❌ Issues Found:\n");
        for issue in &report.issues {
            out.push_str(&format!("  • {issue}\n"));
        }
        out.push('\n');
    }

    if !report.suggestions.is_empty() {
        out.push_str("💡 Suggestions:\n");
        for s in &report.suggestions {
            out.push_str(&format!("  • {s}\n"));
        }
        out.push('\n');
    }

    if !report.good_practices.is_empty() {
        out.push_str("✅ Good Practices:\n");
        for image in &report.good_practices {
            out.push_str(&format!("  • ✅ Image {image} has good alt text\n"));
        }
        out.push('\n');
    }

    out.push_str("🎯 SEO Best Practices:\n");
    for tip in IMAGE_SEO_TIPS {
        out.push_str(&format!("  • {tip}\n"));
    }
    out
}

/// Body of the `woo://store/stats` resource.
pub fn store_stats(report: &ContentAuditReport, category_count: usize) -> String {
    let mut out = String::from("WooCommerce Store Statistics\n");
    out.push_str(&format!("{}\n\n", "=".repeat(31)));

    out.push_str("📊 Product Overview:\n");
    out.push_str(&format!("  Total Products: {}\n", report.total));
    out.push_str(&format!("  Published: {}\n", report.published));
    out.push_str(&format!("  Drafts: {}\n\n", report.drafts));

    out.push_str("🔧 Optimization Opportunities:\n");
    out.push_str(&format!(
        "  Products Needing Work: {}\n",
        report.needs_optimization
    ));
    out.push_str(&format!(
        "  Missing Descriptions: {}\n",
        report.missing_description.len()
    ));
    out.push_str(&format!(
        "  Missing Short Descriptions: {}\n",
        report.missing_short_description.len()
    ));
    out.push_str(&format!(
        "  Missing SEO Data: {}\n\n",
        report.missing_seo.len()
    ));

    out.push_str("📁 Categories:\n");
    out.push_str(&format!("  Total Categories: {category_count}\n\n"));

    out.push_str("🎯 Priority Actions:\n");
    if report.needs_optimization > 0 {
        out.push_str(&format!(
            "  • {} products need content optimization\n",
            report.needs_optimization
        ));
    }
    if !report.missing_seo.is_empty() {
        out.push_str(&format!(
            "  • {} products missing SEO metadata\n",
            report.missing_seo.len()
        ));
    }
    if !report.missing_description.is_empty() {
        out.push_str(&format!(
            "  • {} products need descriptions\n",
            report.missing_description.len()
        ));
    }
    if report.needs_optimization == 0 {
        out.push_str("  • All products are well-optimized! 🎉\n");
    }

    out.push_str(&format!(
        "\n📈 Store Optimization Score: {:.1}%",
        report.optimization_score()
    ));
    out
}

/// Append up to [`LISTING_LIMIT`] entries and a "... and N more" tail.
fn push_listing(out: &mut String, items: &[ProductSummary], indent: &str) {
    for p in items.iter().take(LISTING_LIMIT) {
        out.push_str(&format!("{indent}- ID {}: {}\n", p.id, p.name));
    }
    if items.len() > LISTING_LIMIT {
        out.push_str(&format!(
            "{indent}... and {} more\n",
            items.len() - LISTING_LIMIT
        ));
    }
}

fn or_placeholder<'a>(text: &'a str, placeholder: &'a str) -> &'a str {
    if text.trim().is_empty() {
        placeholder
    } else {
        text
    }
}
