use crate::application::state::{LicenseState, PreferencesPatch};
use crate::license_generation::domain::{
    GlobalInfoPatch, ProductId, ProductPatch, ProductType, ServerInfoPatch, VmTokenPatch,
};
use crate::shared::Result;
use std::collections::HashSet;

/// LicenseEdit - One state mutation requested by the user
///
/// Each variant maps onto exactly one [`LicenseState`] operation.
#[derive(Debug, Clone)]
pub enum LicenseEdit {
    ServerInfo(ServerInfoPatch),
    GlobalInfo(GlobalInfoPatch),
    /// `None` applies to every product
    ApplyGlobals(Option<HashSet<ProductId>>),
    VmToken(VmTokenPatch),
    GlobalNotes(String),
    AddProduct(ProductType),
    RemoveProduct(ProductId),
    UpdateProduct { id: ProductId, patch: ProductPatch },
    UpdateNotes { id: ProductId, notes: String },
    Reorder {
        active: ProductId,
        over: Option<ProductId>,
    },
    Arrange,
    Preferences(PreferencesPatch),
    ToggleTheme,
    ClearAll,
}

impl LicenseEdit {
    /// Applies the edit, returning the next state
    pub fn apply(self, state: LicenseState) -> Result<LicenseState> {
        match self {
            LicenseEdit::ServerInfo(patch) => Ok(state.with_server_info(&patch)),
            LicenseEdit::GlobalInfo(patch) => state.with_global_info(&patch),
            LicenseEdit::ApplyGlobals(ids) => Ok(state.apply_global_values(ids.as_ref())),
            LicenseEdit::VmToken(patch) => state.with_vm_token(&patch),
            LicenseEdit::GlobalNotes(notes) => Ok(state.with_global_notes(notes)),
            LicenseEdit::AddProduct(product) => Ok(state.add_product(product)),
            LicenseEdit::RemoveProduct(id) => state.remove_product(id),
            LicenseEdit::UpdateProduct { id, patch } => state.update_product(id, &patch),
            LicenseEdit::UpdateNotes { id, notes } => state.update_product_notes(id, notes),
            LicenseEdit::Reorder { active, over } => Ok(state.reorder_products(active, over)),
            LicenseEdit::Arrange => Ok(state.arrange_products()),
            LicenseEdit::Preferences(patch) => state.with_preferences(&patch),
            LicenseEdit::ToggleTheme => Ok(state.toggle_theme()),
            LicenseEdit::ClearAll => Ok(state.clear_all()),
        }
    }

    /// Short past-tense summary for the completion message
    pub fn describe(&self) -> String {
        match self {
            LicenseEdit::ServerInfo(_) => "Updated server info".to_string(),
            LicenseEdit::GlobalInfo(_) => "Updated global values".to_string(),
            LicenseEdit::ApplyGlobals(None) => "Applied global values to all products".to_string(),
            LicenseEdit::ApplyGlobals(Some(ids)) => {
                format!("Applied global values to {} product(s)", ids.len())
            }
            LicenseEdit::VmToken(_) => "Updated VM token".to_string(),
            LicenseEdit::GlobalNotes(_) => "Updated global notes".to_string(),
            LicenseEdit::AddProduct(product) => format!("Added {}", product),
            LicenseEdit::RemoveProduct(id) => format!("Removed product {}", id),
            LicenseEdit::UpdateProduct { id, .. } => format!("Updated product {}", id),
            LicenseEdit::UpdateNotes { id, .. } => format!("Updated notes of product {}", id),
            LicenseEdit::Reorder { active, .. } => format!("Moved product {}", active),
            LicenseEdit::Arrange => "Arranged products".to_string(),
            LicenseEdit::Preferences(_) => "Updated preferences".to_string(),
            LicenseEdit::ToggleTheme => "Toggled theme".to_string(),
            LicenseEdit::ClearAll => "Cleared license".to_string(),
        }
    }
}
