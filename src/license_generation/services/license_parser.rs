use crate::license_generation::domain::catalog::{
    FEATURE_KEYWORD, NAMED_USER_TOKEN, PERMANENT_TOKEN, VENDOR_TAG,
};
use crate::license_generation::domain::license_date::parse_license_date;
use crate::license_generation::domain::{ProductId, ProductInstance, ProductType};
use std::fmt;

/// FEATURE lines with fewer fields than this are skipped
const MIN_FEATURE_FIELDS: usize = 6;

/// What to do with a FEATURE line naming a product outside the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownProductPolicy {
    /// Drop the line and record a diagnostic
    #[default]
    Skip,
    /// Attribute the line to the given product
    Fallback(ProductType),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub unknown_product: UnknownProductPolicy,
}

/// Why a FEATURE line was not turned into a product
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields { found: usize },
    UnknownProduct { name: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooFewFields { found } => write!(
                f,
                "expected at least {} fields, found {}",
                MIN_FEATURE_FIELDS, found
            ),
            SkipReason::UnknownProduct { name } => write!(f, "unknown product '{}'", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// 1-based line number in the source text
    pub line_number: usize,
    pub reason: SkipReason,
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub products: Vec<ProductInstance>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Raw field slices of one FEATURE line
struct FeatureFields<'a> {
    name: String,
    year_month: &'a str,
    end: &'a str,
    seats: &'a str,
    start: &'a str,
}

/// LicenseParser service for best-effort recovery of products from text
///
/// Only FEATURE lines are read. Malformed lines never fail the parse;
/// they are skipped and reported in [`ParseOutcome::diagnostics`].
/// Every recovered product is top-level: parent links, notes,
/// opportunity ids and issue dates are not part of the text format.
pub struct LicenseParser;

impl LicenseParser {
    pub fn parse(text: &str) -> ParseOutcome {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() || !line.starts_with(FEATURE_KEYWORD) {
                continue;
            }

            match Self::parse_feature_line(line, options) {
                Ok(product) => outcome.products.push(product),
                Err(reason) => outcome.diagnostics.push(ParseDiagnostic {
                    line_number: index + 1,
                    reason,
                }),
            }
        }

        outcome
    }

    fn parse_feature_line(
        line: &str,
        options: &ParseOptions,
    ) -> Result<ProductInstance, SkipReason> {
        // Single-space split keeps empty tokens for unset dates and versions
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() < MIN_FEATURE_FIELDS {
            return Err(SkipReason::TooFewFields {
                found: tokens.len(),
            });
        }

        let fields = Self::locate_fields(&tokens);
        let product = match ProductType::from_license_name(&fields.name) {
            Some(product) => product,
            None => match options.unknown_product {
                UnknownProductPolicy::Fallback(product) => product,
                UnknownProductPolicy::Skip => {
                    return Err(SkipReason::UnknownProduct { name: fields.name })
                }
            },
        };

        let is_permanent = fields.end == PERMANENT_TOKEN;
        let end_date = if is_permanent {
            None
        } else {
            parse_license_date(fields.end)
        };

        Ok(ProductInstance {
            id: ProductId::new(),
            product,
            seats: fields
                .seats
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|seats| *seats >= 1)
                .unwrap_or(1),
            start_date: parse_license_date(fields.start),
            end_date,
            is_permanent,
            issue_date: None,
            year_month: fields.year_month.to_string(),
            opportunity_id: String::new(),
            named_user: line.contains(NAMED_USER_TOKEN),
            notes: String::new(),
            parent_id: None,
        })
    }

    /// Splits a tokenized FEATURE line into its fields
    ///
    /// Product labels may contain spaces ("Cinema 4D"), so the vendor tag
    /// marks where the name ends. Lines without a vendor tag after the
    /// name fall back to fixed positions.
    fn locate_fields<'a>(tokens: &[&'a str]) -> FeatureFields<'a> {
        let field = |index: usize| tokens.get(index).copied().unwrap_or("");

        match tokens.iter().skip(2).position(|t| *t == VENDOR_TAG) {
            Some(offset) => {
                let vendor = offset + 2;
                FeatureFields {
                    name: tokens[1..vendor].join(" "),
                    year_month: field(vendor + 1),
                    end: field(vendor + 2),
                    seats: field(vendor + 3),
                    start: field(vendor + 4),
                }
            }
            None => FeatureFields {
                name: field(1).to_string(),
                year_month: field(3),
                end: field(4),
                seats: field(5),
                start: field(6),
            },
        }
    }
}
