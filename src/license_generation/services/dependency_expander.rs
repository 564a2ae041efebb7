use crate::license_generation::domain::catalog::FIXED_VERSION;
use crate::license_generation::domain::license_date::year_month_of;
use crate::license_generation::domain::{
    Catalog, ProductId, ProductInstance, ProductPatch, ProductType,
};
use chrono::{Local, NaiveDate};

/// DependencyExpander service for maintaining auto-added line-items
///
/// Pure business logic: it only builds and returns instances. Callers
/// insert the result directly after the parent to keep the list ordered.
pub struct DependencyExpander;

impl DependencyExpander {
    /// Synthesizes the dependents of a freshly added parent
    ///
    /// Uses today's date for products that start at the current `YYYY.MM`.
    pub fn expand(parent: &ProductInstance) -> Vec<ProductInstance> {
        Self::expand_at(parent, Local::now().date_naive())
    }

    /// Same as [`DependencyExpander::expand`] with an explicit "today"
    ///
    /// # Arguments
    /// * `parent` - The top-level product being added
    /// * `today` - Date used for the current year-month default
    ///
    /// # Returns
    /// One new instance per entry of [`Catalog::expanded_dependencies`],
    /// in that order, each with `parent_id` set to the parent's id
    pub fn expand_at(parent: &ProductInstance, today: NaiveDate) -> Vec<ProductInstance> {
        Catalog::expanded_dependencies(parent.product)
            .into_iter()
            .map(|dependency| {
                let mut dependent = ProductInstance {
                    id: ProductId::new(),
                    product: dependency.product,
                    seats: parent.seats.saturating_mul(dependency.seat_multiplier),
                    start_date: parent.start_date,
                    end_date: parent.end_date,
                    is_permanent: parent.is_permanent,
                    issue_date: parent.issue_date,
                    year_month: Self::initial_year_month(dependency.product, today),
                    opportunity_id: parent.opportunity_id.clone(),
                    named_user: parent.named_user,
                    notes: String::new(),
                    parent_id: Some(parent.id),
                };
                dependent.normalize_permanence();
                dependent
            })
            .collect()
    }

    /// Brings existing dependents in line with an updated parent
    ///
    /// Seats are always recomputed from the parent. Dates, permanence,
    /// opportunity id and named-user are copied from the parent only when
    /// the patch touched them; everything else keeps the dependent's own
    /// value. Dependents are never added or removed here.
    ///
    /// # Arguments
    /// * `parent` - The parent after the patch was applied
    /// * `patch` - The patch that was applied to the parent
    /// * `dependents` - The parent's current dependents
    pub fn reconcile(
        parent: &ProductInstance,
        patch: &ProductPatch,
        dependents: Vec<ProductInstance>,
    ) -> Vec<ProductInstance> {
        dependents
            .into_iter()
            .map(|dependent| {
                let Some(multiplier) = Catalog::seat_multiplier(parent.product, dependent.product)
                else {
                    return dependent;
                };

                let mut updated = dependent;
                updated.seats = parent.seats.saturating_mul(multiplier);
                if patch.start_date.is_some() {
                    updated.start_date = parent.start_date;
                }
                if patch.end_date.is_some() {
                    updated.end_date = parent.end_date;
                }
                if patch.is_permanent.is_some() {
                    updated.is_permanent = parent.is_permanent;
                }
                if patch.issue_date.is_some() {
                    updated.issue_date = parent.issue_date;
                }
                if patch.opportunity_id.is_some() {
                    updated.opportunity_id = parent.opportunity_id.clone();
                }
                if patch.named_user.is_some() {
                    updated.named_user = parent.named_user;
                }
                updated.normalize_permanence();
                updated
            })
            .collect()
    }

    fn initial_year_month(product: ProductType, today: NaiveDate) -> String {
        if Catalog::is_fixed_version(product) {
            FIXED_VERSION.to_string()
        } else if Catalog::defaults_to_current_year_month(product) {
            year_month_of(today)
        } else {
            String::new()
        }
    }
}
