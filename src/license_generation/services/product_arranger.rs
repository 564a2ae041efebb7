use crate::license_generation::domain::{ProductId, ProductInstance};
use std::collections::HashSet;

/// ProductArranger service for keeping parents and dependents together
///
/// The product list is treated as a sequence of groups: a top-level
/// product followed by its dependents. Moves always carry a whole group.
pub struct ProductArranger;

impl ProductArranger {
    /// Moves the group headed by `active_id`
    ///
    /// With `over_id` the group takes the slot of the group containing
    /// `over_id`, shifting the groups in between. Without it the group
    /// moves to the end. Unknown ids, dependent ids and moves onto the
    /// same group return the list as given.
    pub fn reorder(
        products: Vec<ProductInstance>,
        active_id: ProductId,
        over_id: Option<ProductId>,
    ) -> Vec<ProductInstance> {
        let mut groups = Self::group(products);

        let Some(from) = groups.iter().position(|group| group[0].id == active_id) else {
            return Self::flatten(groups);
        };
        let to = match over_id {
            Some(over) => match groups
                .iter()
                .position(|group| group.iter().any(|p| p.id == over))
            {
                Some(index) => index,
                None => return Self::flatten(groups),
            },
            None => groups.len() - 1,
        };

        if from != to {
            let moved = groups.remove(from);
            groups.insert(to, moved);
        }
        Self::flatten(groups)
    }

    /// Regroups every parent's dependents directly after it
    ///
    /// Relative order of top-level products and of siblings is kept.
    /// Dependents whose parent is not in the list are dropped.
    pub fn arrange(products: Vec<ProductInstance>) -> Vec<ProductInstance> {
        let parents: HashSet<ProductId> = products
            .iter()
            .filter(|p| p.parent_id.is_none())
            .map(|p| p.id)
            .collect();

        let (top_level, dependents): (Vec<_>, Vec<_>) =
            products.into_iter().partition(|p| p.parent_id.is_none());
        let mut dependents: Vec<ProductInstance> = dependents
            .into_iter()
            .filter(|p| p.parent_id.is_some_and(|id| parents.contains(&id)))
            .collect();

        let mut arranged = Vec::with_capacity(top_level.len() + dependents.len());
        for parent in top_level {
            let parent_id = parent.id;
            arranged.push(parent);
            let (children, rest): (Vec<_>, Vec<_>) = dependents
                .into_iter()
                .partition(|p| p.parent_id == Some(parent_id));
            arranged.extend(children);
            dependents = rest;
        }
        arranged
    }

    /// Splits the list into groups; a leading run of dependents forms its own group
    fn group(products: Vec<ProductInstance>) -> Vec<Vec<ProductInstance>> {
        let mut groups: Vec<Vec<ProductInstance>> = Vec::new();
        for product in products {
            match groups.last_mut() {
                Some(group) if product.parent_id.is_some() => group.push(product),
                _ => groups.push(vec![product]),
            }
        }
        groups
    }

    fn flatten(groups: Vec<Vec<ProductInstance>>) -> Vec<ProductInstance> {
        groups.into_iter().flatten().collect()
    }
}
