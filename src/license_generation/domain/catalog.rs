use super::ProductType;

/// Vendor daemon name written after the product label on every FEATURE line
pub const VENDOR_TAG: &str = "maxon";

/// Version token used by fixed-version products instead of `YYYY.MM`
pub const FIXED_VERSION: &str = "9999.9";

/// End-date token for licenses that never expire
pub const PERMANENT_TOKEN: &str = "permanent";

/// Suffix marking a named-user FEATURE line
pub const NAMED_USER_TOKEN: &str = "named_user_license";

pub const SERVER_KEYWORD: &str = "SERVER";
pub const ISV_KEYWORD: &str = "ISV";
pub const FEATURE_KEYWORD: &str = "FEATURE";

/// Chains longer than this are cut off during expansion
const MAX_EXPANSION_DEPTH: usize = 8;

/// Declares that a parent product keeps a dependent line-item in sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDependency {
    pub product: ProductType,
    /// Dependent seats = parent seats × multiplier (always ≥ 1)
    pub seat_multiplier: u32,
}

impl ProductDependency {
    pub const fn new(product: ProductType, seat_multiplier: u32) -> Self {
        Self {
            product,
            seat_multiplier,
        }
    }
}

const CINEMA_4D_DEPENDENCIES: &[ProductDependency] =
    &[ProductDependency::new(ProductType::Commandline, 2)];

const RED_GIANT_DEPENDENCIES: &[ProductDependency] =
    &[ProductDependency::new(ProductType::RgRenderOnly, 2)];

const MAXON_ONE_DEPENDENCIES: &[ProductDependency] = &[
    ProductDependency::new(ProductType::Commandline, 2),
    ProductDependency::new(ProductType::RgRenderOnly, 2),
];

const COMMANDLINE_DEPENDENCIES: &[ProductDependency] =
    &[ProductDependency::new(ProductType::RedshiftCpu, 1)];

/// Static product catalog: dependency rules and version policy
pub struct Catalog;

impl Catalog {
    /// Dependencies declared directly by `product`, in declaration order
    pub fn dependencies(product: ProductType) -> &'static [ProductDependency] {
        match product {
            ProductType::Cinema4D => CINEMA_4D_DEPENDENCIES,
            ProductType::RedGiant => RED_GIANT_DEPENDENCIES,
            ProductType::MaxonOne => MAXON_ONE_DEPENDENCIES,
            ProductType::Commandline => COMMANDLINE_DEPENDENCIES,
            ProductType::MaxonOneEdu
            | ProductType::Redshift
            | ProductType::ZBrush
            | ProductType::RgRenderOnly
            | ProductType::RedshiftCpu => &[],
        }
    }

    /// Full set of dependents maintained under a top-level `product`
    ///
    /// Rules are followed transitively (Cinema 4D → Commandline → Redshift CPU)
    /// and flattened onto the top-level product, depth-first in declaration
    /// order. Multipliers compound along the chain. A product reached twice
    /// keeps its first occurrence; the root itself is never listed.
    pub fn expanded_dependencies(product: ProductType) -> Vec<ProductDependency> {
        let mut expanded = Vec::new();
        Self::collect_dependencies(product, product, 1, &mut expanded, 0);
        expanded
    }

    fn collect_dependencies(
        root: ProductType,
        product: ProductType,
        multiplier: u32,
        expanded: &mut Vec<ProductDependency>,
        depth: usize,
    ) {
        if depth >= MAX_EXPANSION_DEPTH {
            return;
        }

        for dependency in Self::dependencies(product) {
            if dependency.product == root
                || expanded.iter().any(|d| d.product == dependency.product)
            {
                continue;
            }
            let seat_multiplier = multiplier.saturating_mul(dependency.seat_multiplier.max(1));
            expanded.push(ProductDependency::new(dependency.product, seat_multiplier));
            Self::collect_dependencies(
                root,
                dependency.product,
                seat_multiplier,
                expanded,
                depth + 1,
            );
        }
    }

    /// Effective multiplier of `dependent` under a top-level `parent`
    pub fn seat_multiplier(parent: ProductType, dependent: ProductType) -> Option<u32> {
        Self::expanded_dependencies(parent)
            .into_iter()
            .find(|d| d.product == dependent)
            .map(|d| d.seat_multiplier)
    }

    /// Products whose version is always [`FIXED_VERSION`]
    pub fn is_fixed_version(product: ProductType) -> bool {
        matches!(
            product,
            ProductType::RedGiant | ProductType::RgRenderOnly | ProductType::Commandline
        )
    }

    /// Auto-added dependents of this product start at the current `YYYY.MM`
    /// instead of an empty version
    pub fn defaults_to_current_year_month(product: ProductType) -> bool {
        product == ProductType::RedshiftCpu
    }
}
