use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of products that can appear on a license
///
/// The serialized form (both in the license text and in the saved state)
/// is the catalog label returned by [`ProductType::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Maxon One")]
    MaxonOne,
    #[serde(rename = "Cinema 4D")]
    Cinema4D,
    #[serde(rename = "Redshift")]
    Redshift,
    #[serde(rename = "Red Giant")]
    RedGiant,
    #[serde(rename = "ZBrush")]
    ZBrush,
    #[serde(rename = "Maxon One EDU")]
    MaxonOneEdu,
    #[serde(rename = "Commandline")]
    Commandline,
    #[serde(rename = "RG Render Only")]
    RgRenderOnly,
    #[serde(rename = "Redshift CPU")]
    RedshiftCpu,
}

impl ProductType {
    /// Every product, in catalog order
    pub const ALL: [ProductType; 9] = [
        ProductType::MaxonOne,
        ProductType::Cinema4D,
        ProductType::Redshift,
        ProductType::RedGiant,
        ProductType::ZBrush,
        ProductType::MaxonOneEdu,
        ProductType::Commandline,
        ProductType::RgRenderOnly,
        ProductType::RedshiftCpu,
    ];

    /// Canonical catalog label, written verbatim into FEATURE lines
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::MaxonOne => "Maxon One",
            ProductType::Cinema4D => "Cinema 4D",
            ProductType::Redshift => "Redshift",
            ProductType::RedGiant => "Red Giant",
            ProductType::ZBrush => "ZBrush",
            ProductType::MaxonOneEdu => "Maxon One EDU",
            ProductType::Commandline => "Commandline",
            ProductType::RgRenderOnly => "RG Render Only",
            ProductType::RedshiftCpu => "Redshift CPU",
        }
    }

    /// Resolves a product name as it appears in a license file
    ///
    /// Both sides are lowercased and runs of whitespace become a single
    /// hyphen, so `Cinema 4D`, `cinema-4d` and `CINEMA  4D` all resolve
    /// to [`ProductType::Cinema4D`].
    pub fn from_license_name(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|product| normalize_name(product.label()) == wanted)
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_license_name(s).ok_or_else(|| {
            let known = Self::ALL
                .iter()
                .map(|p| format!("'{}'", p.label()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Unknown product: {}. Known products: {}", s, known)
        })
    }
}
