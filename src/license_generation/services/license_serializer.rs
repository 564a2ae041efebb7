use crate::license_generation::domain::catalog::{
    FEATURE_KEYWORD, ISV_KEYWORD, NAMED_USER_TOKEN, PERMANENT_TOKEN, SERVER_KEYWORD, VENDOR_TAG,
};
use crate::license_generation::domain::license_date::format_license_date;
use crate::license_generation::domain::{LicenseData, ProductInstance, ServerInfo};

/// LicenseSerializer service for rendering the license text
///
/// Output is one SERVER line, one ISV line and one FEATURE line per
/// product, joined with `\n` and without a trailing newline. Notes,
/// opportunity ids, issue dates, the VM token and parent links are not
/// part of the format.
pub struct LicenseSerializer;

impl LicenseSerializer {
    pub fn serialize(license: &LicenseData) -> String {
        let mut lines = Vec::with_capacity(license.products.len() + 2);
        lines.push(Self::server_line(&license.server_info));
        lines.push(Self::isv_line(&license.server_info));
        lines.extend(license.products.iter().map(Self::feature_line));
        lines.join("\n")
    }

    /// `SERVER <hostname> <mac> <port>`
    pub fn server_line(server: &ServerInfo) -> String {
        format!(
            "{} {} {} {}",
            SERVER_KEYWORD, server.hostname, server.mac_address, server.communication_port
        )
    }

    /// `ISV maxon port=<isv port>`
    pub fn isv_line(server: &ServerInfo) -> String {
        format!("{} {} port={}", ISV_KEYWORD, VENDOR_TAG, server.isv_port)
    }

    /// `FEATURE <label> maxon <version> <end> <seats> <start>[ named_user_license]`
    pub fn feature_line(product: &ProductInstance) -> String {
        let end_token = if product.is_permanent {
            PERMANENT_TOKEN.to_string()
        } else {
            format_license_date(product.end_date)
        };
        let start_token = format_license_date(product.start_date);

        let mut line = format!(
            "{} {} {} {} {} {} {}",
            FEATURE_KEYWORD,
            product.product.label(),
            VENDOR_TAG,
            product.year_month,
            end_token,
            product.seats,
            start_token
        );
        if product.named_user {
            line.push(' ');
            line.push_str(NAMED_USER_TOKEN);
        }
        line
    }
}
