use super::catalog::{Catalog, FIXED_VERSION};
use super::license_date::is_valid_year_month;
use super::ProductType;
use crate::shared::error::LicenseError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identifier of a product line-item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| format!("Invalid product id '{}': {}", s, e))
    }
}

/// One licensed product entry (a row of the product table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInstance {
    #[serde(default)]
    pub id: ProductId,
    pub product: ProductType,
    #[serde(default = "default_seats")]
    pub seats: u32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Ignored while `is_permanent` is set
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_permanent: bool,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
    #[serde(default)]
    pub year_month: String,
    #[serde(default)]
    pub opportunity_id: String,
    #[serde(default)]
    pub named_user: bool,
    #[serde(default)]
    pub notes: String,
    /// Set on auto-added dependents; points at the owning top-level item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ProductId>,
}

fn default_seats() -> u32 {
    1
}

impl ProductInstance {
    /// Creates a top-level line-item with one seat and no validity window
    pub fn new(product: ProductType) -> Self {
        Self {
            id: ProductId::new(),
            product,
            seats: 1,
            start_date: None,
            end_date: None,
            is_permanent: false,
            issue_date: None,
            year_month: Self::initial_year_month(product),
            opportunity_id: String::new(),
            named_user: false,
            notes: String::new(),
            parent_id: None,
        }
    }

    /// Version a freshly added top-level item starts with
    pub fn initial_year_month(product: ProductType) -> String {
        if Catalog::is_fixed_version(product) {
            FIXED_VERSION.to_string()
        } else {
            String::new()
        }
    }

    pub fn is_dependent(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn is_fixed_version(&self) -> bool {
        Catalog::is_fixed_version(self.product)
    }

    /// Returns a copy with `patch` merged in
    ///
    /// Only fields present in the patch change. A `year_month` patch is
    /// ignored on fixed-version products, and a permanent result always
    /// has its end date cleared.
    ///
    /// # Errors
    /// Returns a validation error when the patch sets seats below 1 or a
    /// malformed `YYYY.MM` value.
    pub fn apply_patch(&self, patch: &ProductPatch) -> Result<Self> {
        patch.validate()?;

        let mut updated = self.clone();
        if let Some(seats) = patch.seats {
            updated.seats = seats;
        }
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            updated.end_date = end_date;
        }
        if let Some(is_permanent) = patch.is_permanent {
            updated.is_permanent = is_permanent;
        }
        if let Some(issue_date) = patch.issue_date {
            updated.issue_date = issue_date;
        }
        if let Some(year_month) = &patch.year_month {
            if !updated.is_fixed_version() {
                updated.year_month = year_month.clone();
            }
        }
        if let Some(opportunity_id) = &patch.opportunity_id {
            updated.opportunity_id = opportunity_id.clone();
        }
        if let Some(named_user) = patch.named_user {
            updated.named_user = named_user;
        }
        if let Some(notes) = &patch.notes {
            updated.notes = notes.clone();
        }

        updated.normalize_permanence();
        Ok(updated)
    }

    /// Permanent licenses carry no end date
    pub(crate) fn normalize_permanence(&mut self) {
        if self.is_permanent {
            self.end_date = None;
        }
    }
}

/// Partial update of a [`ProductInstance`]
///
/// `None` means "leave unchanged". Date fields use a nested option so a
/// patch can also clear a date: `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub seats: Option<u32>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_permanent: Option<bool>,
    pub issue_date: Option<Option<NaiveDate>>,
    pub year_month: Option<String>,
    pub opportunity_id: Option<String>,
    pub named_user: Option<bool>,
    pub notes: Option<String>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats = Some(seats);
        self
    }

    pub fn with_start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn with_permanent(mut self, is_permanent: bool) -> Self {
        self.is_permanent = Some(is_permanent);
        self
    }

    pub fn with_issue_date(mut self, date: Option<NaiveDate>) -> Self {
        self.issue_date = Some(date);
        self
    }

    pub fn with_year_month(mut self, year_month: impl Into<String>) -> Self {
        self.year_month = Some(year_month.into());
        self
    }

    pub fn with_opportunity_id(mut self, opportunity_id: impl Into<String>) -> Self {
        self.opportunity_id = Some(opportunity_id.into());
        self
    }

    pub fn with_named_user(mut self, named_user: bool) -> Self {
        self.named_user = Some(named_user);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn validate(&self) -> Result<()> {
        if self.seats == Some(0) {
            return Err(LicenseError::Validation {
                message: "Seat count must be at least 1".to_string(),
            }
            .into());
        }
        if let Some(year_month) = &self.year_month {
            if !is_valid_year_month(year_month) {
                return Err(LicenseError::Validation {
                    message: format!(
                        "Invalid version '{}': expected YYYY.MM (e.g. 2025.03) or empty",
                        year_month
                    ),
                }
                .into());
            }
        }
        Ok(())
    }
}
