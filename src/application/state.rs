use crate::license_generation::domain::{
    GlobalInfoPatch, LicenseData, ProductId, ProductInstance, ProductPatch, ProductType,
    ServerInfoPatch, VmTokenPatch,
};
use crate::license_generation::services::{
    DependencyExpander, GlobalApplicator, LicenseSerializer, ProductArranger,
};
use crate::shared::error::LicenseError;
use crate::shared::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_FILE_NAME: &str = "license.lic";
const LICENSE_EXTENSION: &str = "lic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(format!(
                "Invalid theme: {}. Please specify 'light' or 'dark'",
                s
            )),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Presentation preferences saved alongside the license
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    #[serde(rename = "themeMode")]
    pub theme: ThemeMode,
    pub app_zoom_factor: f64,
    pub preview_font_size: f64,
    /// Last folder searched for license files
    pub search_folder_path: Option<PathBuf>,
    /// Last folder a license file was generated into
    pub destination_folder_path: Option<PathBuf>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            app_zoom_factor: 1.0,
            preview_font_size: 0.8,
            search_folder_path: None,
            destination_folder_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesPatch {
    pub theme: Option<ThemeMode>,
    pub app_zoom_factor: Option<f64>,
    pub preview_font_size: Option<f64>,
    pub search_folder_path: Option<PathBuf>,
    pub destination_folder_path: Option<PathBuf>,
}

impl PreferencesPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Everything the application persists between runs
///
/// Each operation consumes the current state and returns the next one.
/// Fallible operations return an error instead, and the caller keeps the
/// state it already had.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseState {
    #[serde(flatten)]
    pub license: LicenseData,
    #[serde(flatten)]
    pub preferences: Preferences,
}

impl LicenseState {
    pub fn with_server_info(mut self, patch: &ServerInfoPatch) -> Self {
        self.license.server_info = self.license.server_info.merge(patch);
        self
    }

    pub fn with_global_info(mut self, patch: &GlobalInfoPatch) -> Result<Self> {
        self.license.global_info = self.license.global_info.merge(patch)?;
        Ok(self)
    }

    pub fn with_vm_token(mut self, patch: &VmTokenPatch) -> Result<Self> {
        self.license.vm_token = self.license.vm_token.merge(patch)?;
        Ok(self)
    }

    /// Merges the global template into all products, or only into `target_ids`
    pub fn apply_global_values(mut self, target_ids: Option<&HashSet<ProductId>>) -> Self {
        let products = std::mem::take(&mut self.license.products);
        self.license.products =
            GlobalApplicator::apply(products, &self.license.global_info, target_ids);
        self
    }

    pub fn with_global_notes(mut self, notes: impl Into<String>) -> Self {
        self.license.global_notes = notes.into();
        self
    }

    /// Appends `product` followed by its dependents
    pub fn add_product(self, product: ProductType) -> Self {
        self.add_product_at(product, Local::now().date_naive())
    }

    /// Same as [`LicenseState::add_product`] with an explicit "today"
    pub fn add_product_at(mut self, product: ProductType, today: NaiveDate) -> Self {
        let global = &self.license.global_info;
        let mut parent = ProductInstance::new(product);
        parent.start_date = global.start_date;
        parent.issue_date = global.issue_date;
        parent.opportunity_id = global.opportunity_id.clone();

        let dependents = DependencyExpander::expand_at(&parent, today);
        self.license.products.push(parent);
        self.license.products.extend(dependents);
        self
    }

    /// Removes a product and every dependent pointing at it
    ///
    /// # Errors
    /// Returns `ProductNotFound` for an unknown id.
    pub fn remove_product(mut self, id: ProductId) -> Result<Self> {
        self.ensure_product(id)?;
        self.license
            .products
            .retain(|p| p.id != id && p.parent_id != Some(id));
        Ok(self)
    }

    /// Applies `patch` to one product and reconciles its dependents
    ///
    /// # Errors
    /// Returns `ProductNotFound` for an unknown id, or a validation error
    /// for an invalid patch. Seats of a dependent are derived from its
    /// parent and cannot be patched directly.
    pub fn update_product(mut self, id: ProductId, patch: &ProductPatch) -> Result<Self> {
        let current = self.ensure_product(id)?;
        if current.is_dependent() && patch.seats.is_some() {
            return Err(LicenseError::Validation {
                message: format!(
                    "seats of {} follow its parent product; update the parent instead",
                    current.product
                ),
            }
            .into());
        }
        let updated = current.apply_patch(patch)?;

        let dependents: Vec<ProductInstance> = self
            .license
            .dependents_of(id)
            .cloned()
            .collect();
        let mut replacements: HashMap<ProductId, ProductInstance> =
            DependencyExpander::reconcile(&updated, patch, dependents)
                .into_iter()
                .map(|p| (p.id, p))
                .collect();
        replacements.insert(id, updated);

        for product in self.license.products.iter_mut() {
            if let Some(replacement) = replacements.remove(&product.id) {
                *product = replacement;
            }
        }
        Ok(self)
    }

    /// Changes only the notes of one product (dependents included)
    pub fn update_product_notes(mut self, id: ProductId, notes: impl Into<String>) -> Result<Self> {
        self.ensure_product(id)?;
        let notes = notes.into();
        if let Some(product) = self.license.products.iter_mut().find(|p| p.id == id) {
            product.notes = notes;
        }
        Ok(self)
    }

    pub fn reorder_products(mut self, active: ProductId, over: Option<ProductId>) -> Self {
        let products = std::mem::take(&mut self.license.products);
        self.license.products = ProductArranger::reorder(products, active, over);
        self
    }

    pub fn arrange_products(mut self) -> Self {
        let products = std::mem::take(&mut self.license.products);
        self.license.products = ProductArranger::arrange(products);
        self
    }

    pub fn replace_products(mut self, products: Vec<ProductInstance>) -> Self {
        self.license.products = products;
        self
    }

    /// Resets the license; preferences survive
    pub fn clear_all(self) -> Self {
        Self {
            license: LicenseData::default(),
            preferences: self.preferences,
        }
    }

    /// # Errors
    /// Returns a validation error for a zoom factor or font size that is
    /// not a positive number.
    pub fn with_preferences(mut self, patch: &PreferencesPatch) -> Result<Self> {
        for (name, value) in [
            ("zoom factor", patch.app_zoom_factor),
            ("preview font size", patch.preview_font_size),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(LicenseError::Validation {
                        message: format!("{} must be a positive number, got {}", name, value),
                    }
                    .into());
                }
            }
        }

        let preferences = &mut self.preferences;
        if let Some(theme) = patch.theme {
            preferences.theme = theme;
        }
        if let Some(zoom) = patch.app_zoom_factor {
            preferences.app_zoom_factor = zoom;
        }
        if let Some(font_size) = patch.preview_font_size {
            preferences.preview_font_size = font_size;
        }
        if let Some(folder) = &patch.search_folder_path {
            preferences.search_folder_path = Some(folder.clone());
        }
        if let Some(folder) = &patch.destination_folder_path {
            preferences.destination_folder_path = Some(folder.clone());
        }
        Ok(self)
    }

    pub fn toggle_theme(mut self) -> Self {
        self.preferences.theme = self.preferences.theme.toggled();
        self
    }

    pub fn generate_license_file(&self) -> String {
        LicenseSerializer::serialize(&self.license)
    }

    /// `<customer id>.lic`, or `license.lic` without a customer id
    pub fn license_file_name(&self) -> String {
        let customer_id = self.license.server_info.customer_id.trim();
        if customer_id.is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            format!("{}.{}", customer_id, LICENSE_EXTENSION)
        }
    }

    fn ensure_product(&self, id: ProductId) -> Result<&ProductInstance> {
        self.license.find_product(id).ok_or_else(|| {
            LicenseError::ProductNotFound { id: id.to_string() }.into()
        })
    }
}
