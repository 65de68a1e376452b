//! Alt-text and filename heuristics for a product's images.

use std::fmt;

use serde::Serialize;

use crate::model::ImageRecord;

/// Alt text shorter than this (in characters, after trimming) is too short.
pub const MIN_ALT_TEXT_CHARS: usize = 10;

/// Image names that say nothing about the picture.
const GENERIC_IMAGE_NAMES: [&str; 4] = ["image", "img", "photo", "picture"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
}

/// One finding. `image` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageIssue {
    NoImages,
    MissingAltText { image: usize },
    AltTextTooShort { image: usize, alt: String },
    AltTextIsProductName { image: usize },
    GenericOrMissingName { image: usize },
}

impl ImageIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoImages | Self::MissingAltText { .. } => Severity::Critical,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for ImageIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.severity() {
            Severity::Critical => "❌",
            Severity::Warning => "⚠️",
        };
        match self {
            Self::NoImages => write!(f, "{marker} No product images found"),
            Self::MissingAltText { image } => write!(f, "{marker} Image {image} missing alt text"),
            Self::AltTextTooShort { image, alt } => {
                write!(f, "{marker} Image {image} alt text too short: '{alt}'")
            }
            Self::AltTextIsProductName { image } => {
                write!(f, "{marker} Image {image} alt text is just product name")
            }
            Self::GenericOrMissingName { image } => {
                write!(f, "{marker} Image {image} has generic or missing name")
            }
        }
    }
}

/// Recommended fix, paired with an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    AddImages { product_name: String },
    AddAltText { alt: String },
    ExpandAltText,
    DescribeBeyondName { product_name: String },
    DescriptiveFilename { filename: String },
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddImages { product_name } => write!(
                f,
                "Add at least 1-3 high-quality images for '{product_name}'"
            ),
            Self::AddAltText { alt } => write!(f, "Add alt text: '{alt}'"),
            Self::ExpandAltText => write!(
                f,
                "Expand alt text to be more descriptive ({MIN_ALT_TEXT_CHARS}+ characters)"
            ),
            Self::DescribeBeyondName { product_name } => write!(
                f,
                "Make alt text more descriptive: '{product_name} - [describe what's shown]'"
            ),
            Self::DescriptiveFilename { filename } => {
                write!(f, "Use descriptive filename: '{filename}'")
            }
        }
    }
}

/// Structured audit result, independent of rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageAuditReport {
    pub product_name: String,
    pub total_images: usize,
    pub issues: Vec<ImageIssue>,
    pub suggestions: Vec<Suggestion>,
    /// 1-based indexes of images whose alt text passed every check.
    pub good_practices: Vec<usize>,
}

impl ImageAuditReport {
    pub fn total_issues(&self) -> usize {
        self.issues.len()
    }

    /// True when the product has no images at all.
    pub fn has_no_images(&self) -> bool {
        self.total_images == 0
    }
}

/// Audit every image of a product.
///
/// Alt text gets exactly one of: missing, too short, equals product name, or
/// good. The name check runs independently and can add a second issue.
pub fn audit(product_name: &str, images: &[ImageRecord]) -> ImageAuditReport {
    let mut report = ImageAuditReport {
        product_name: product_name.to_string(),
        total_images: images.len(),
        issues: Vec::new(),
        suggestions: Vec::new(),
        good_practices: Vec::new(),
    };

    if images.is_empty() {
        report.issues.push(ImageIssue::NoImages);
        report.suggestions.push(Suggestion::AddImages {
            product_name: product_name.to_string(),
        });
        return report;
    }

    let lowered_name = product_name.to_lowercase();
    for (i, img) in images.iter().enumerate() {
        let image = i + 1;
        let alt = img.alt.trim();

        if alt.is_empty() {
            report.issues.push(ImageIssue::MissingAltText { image });
            report.suggestions.push(Suggestion::AddAltText {
                alt: format!("{product_name} - product view {image}"),
            });
        } else if alt.chars().count() < MIN_ALT_TEXT_CHARS {
            report.issues.push(ImageIssue::AltTextTooShort {
                image,
                alt: alt.to_string(),
            });
            report.suggestions.push(Suggestion::ExpandAltText);
        } else if alt.to_lowercase() == lowered_name {
            report
                .issues
                .push(ImageIssue::AltTextIsProductName { image });
            report.suggestions.push(Suggestion::DescribeBeyondName {
                product_name: product_name.to_string(),
            });
        } else {
            report.good_practices.push(image);
        }

        if is_generic_name(&img.name) {
            report
                .issues
                .push(ImageIssue::GenericOrMissingName { image });
            report.suggestions.push(Suggestion::DescriptiveFilename {
                filename: format!("{}-{image}", slug(product_name)),
            });
        }
    }

    report
}

fn is_generic_name(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    name.is_empty() || GENERIC_IMAGE_NAMES.contains(&name.as_str())
}

/// Lowercase with spaces turned into hyphens.
fn slug(product_name: &str) -> String {
    product_name.to_lowercase().replace(' ', "-")
}
