pub mod catalog;
pub mod license_data;
pub mod license_date;
pub mod product_instance;
pub mod product_type;

pub use catalog::{Catalog, ProductDependency};
pub use license_data::{
    GlobalInfo, GlobalInfoPatch, LicenseData, ServerInfo, ServerInfoPatch, VmToken, VmTokenPatch,
};
pub use product_instance::{ProductId, ProductInstance, ProductPatch};
pub use product_type::ProductType;
