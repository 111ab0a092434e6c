use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "1.0";

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct DownloadLicenseRequest {
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Serial_Number")]
    pub serial_number: String,
}
