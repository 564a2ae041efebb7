use super::license_date::is_valid_year_month;
use super::{ProductId, ProductInstance};
use crate::shared::error::LicenseError;
use crate::shared::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMMUNICATION_PORT: &str = "5053";
pub const DEFAULT_ISV_PORT: &str = "50053";

/// Identity of the license server (the SERVER and ISV lines)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerInfo {
    pub hostname: String,
    pub mac_address: String,
    pub customer_id: String,
    pub communication_port: String,
    pub isv_port: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            mac_address: String::new(),
            customer_id: String::new(),
            communication_port: DEFAULT_COMMUNICATION_PORT.to_string(),
            isv_port: DEFAULT_ISV_PORT.to_string(),
        }
    }
}

impl ServerInfo {
    pub fn merge(&self, patch: &ServerInfoPatch) -> Self {
        let pick = |value: &Option<String>, current: &String| {
            value.clone().unwrap_or_else(|| current.clone())
        };
        Self {
            hostname: pick(&patch.hostname, &self.hostname),
            mac_address: pick(&patch.mac_address, &self.mac_address),
            customer_id: pick(&patch.customer_id, &self.customer_id),
            communication_port: pick(&patch.communication_port, &self.communication_port),
            isv_port: pick(&patch.isv_port, &self.isv_port),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfoPatch {
    pub hostname: Option<String>,
    pub mac_address: Option<String>,
    pub customer_id: Option<String>,
    pub communication_port: Option<String>,
    pub isv_port: Option<String>,
}

/// Template values bulk-applied to products; never written to the license
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalInfo {
    pub issue_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// `YYYY.MM` or empty
    pub year_month: String,
    pub opportunity_id: String,
}

impl GlobalInfo {
    /// # Errors
    /// Returns a validation error for a malformed `YYYY.MM` value.
    pub fn merge(&self, patch: &GlobalInfoPatch) -> Result<Self> {
        if let Some(year_month) = &patch.year_month {
            validate_year_month(year_month)?;
        }
        Ok(Self {
            issue_date: patch.issue_date.unwrap_or(self.issue_date),
            start_date: patch.start_date.unwrap_or(self.start_date),
            end_date: patch.end_date.unwrap_or(self.end_date),
            year_month: patch
                .year_month
                .clone()
                .unwrap_or_else(|| self.year_month.clone()),
            opportunity_id: patch
                .opportunity_id
                .clone()
                .unwrap_or_else(|| self.opportunity_id.clone()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalInfoPatch {
    pub issue_date: Option<Option<NaiveDate>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub year_month: Option<String>,
    pub opportunity_id: Option<String>,
}

/// Virtual-machine token settings
///
/// Kept with the license and persisted, but not part of the generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VmToken {
    pub enabled: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_permanent: bool,
    pub issue_date: Option<NaiveDate>,
    pub year_month: String,
}

impl VmToken {
    pub fn merge(&self, patch: &VmTokenPatch) -> Result<Self> {
        if let Some(year_month) = &patch.year_month {
            validate_year_month(year_month)?;
        }
        let mut token = Self {
            enabled: patch.enabled.unwrap_or(self.enabled),
            start_date: patch.start_date.unwrap_or(self.start_date),
            end_date: patch.end_date.unwrap_or(self.end_date),
            is_permanent: patch.is_permanent.unwrap_or(self.is_permanent),
            issue_date: patch.issue_date.unwrap_or(self.issue_date),
            year_month: patch
                .year_month
                .clone()
                .unwrap_or_else(|| self.year_month.clone()),
        };
        if token.is_permanent {
            token.end_date = None;
        }
        Ok(token)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmTokenPatch {
    pub enabled: Option<bool>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub is_permanent: Option<bool>,
    pub issue_date: Option<Option<NaiveDate>>,
    pub year_month: Option<String>,
}

fn validate_year_month(value: &str) -> Result<()> {
    if is_valid_year_month(value) {
        Ok(())
    } else {
        Err(LicenseError::Validation {
            message: format!(
                "Invalid version '{}': expected YYYY.MM (e.g. 2025.03) or empty",
                value
            ),
        }
        .into())
    }
}

/// The complete license: everything that is saved and loaded as one unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicenseData {
    pub server_info: ServerInfo,
    pub global_info: GlobalInfo,
    pub vm_token: VmToken,
    /// Ordered; each parent is directly followed by its dependents
    pub products: Vec<ProductInstance>,
    pub global_notes: String,
}

impl LicenseData {
    pub fn find_product(&self, id: ProductId) -> Option<&ProductInstance> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn dependents_of(&self, id: ProductId) -> impl Iterator<Item = &ProductInstance> {
        self.products
            .iter()
            .filter(move |p| p.parent_id == Some(id))
    }
}
