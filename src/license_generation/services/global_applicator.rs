use crate::license_generation::domain::{GlobalInfo, ProductId, ProductInstance};
use std::collections::HashSet;

/// GlobalApplicator service for bulk-applying the global template
///
/// This is a field-level merge: an unset or blank global value never
/// clears anything on a product.
pub struct GlobalApplicator;

impl GlobalApplicator {
    /// Merges `global` into the targeted products
    ///
    /// # Arguments
    /// * `products` - Current product list (order is preserved)
    /// * `global` - Template values
    /// * `target_ids` - Products to touch; `None` means every product
    ///
    /// # Returns
    /// The product list with the merge applied to every targeted item
    pub fn apply(
        products: Vec<ProductInstance>,
        global: &GlobalInfo,
        target_ids: Option<&HashSet<ProductId>>,
    ) -> Vec<ProductInstance> {
        products
            .into_iter()
            .map(|product| {
                let targeted = target_ids.map_or(true, |ids| ids.contains(&product.id));
                if targeted {
                    Self::apply_to(product, global)
                } else {
                    product
                }
            })
            .collect()
    }

    fn apply_to(mut product: ProductInstance, global: &GlobalInfo) -> ProductInstance {
        if global.issue_date.is_some() {
            product.issue_date = global.issue_date;
        }
        if global.start_date.is_some() {
            product.start_date = global.start_date;
        }
        // A global end date always means a termed license
        if global.end_date.is_some() {
            product.end_date = global.end_date;
            product.is_permanent = false;
        }
        if !global.year_month.trim().is_empty() && !product.is_fixed_version() {
            product.year_month = global.year_month.clone();
        }
        if !global.opportunity_id.trim().is_empty() {
            product.opportunity_id = global.opportunity_id.clone();
        }
        product
    }
}
