//! Yoast SEO meta keys used for the product title/description overrides.

/// Meta key holding the SEO title.
pub const SEO_TITLE_KEY: &str = "_yoast_wpseo_title";
/// Meta key holding the SEO meta description.
pub const SEO_DESCRIPTION_KEY: &str = "_yoast_wpseo_metadesc";
