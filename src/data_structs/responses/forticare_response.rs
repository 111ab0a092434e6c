use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct ForticareResponse {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Status", default)]
    pub status: Option<serde_json::Value>,
    #[serde(rename = "Error", default)]
    pub error: Option<serde_json::Value>,
    // only REST_DownloadLicense puts the license at the top level
    #[serde(rename = "License_File", default)]
    pub license_file: Option<String>,
    #[serde(rename = "AssetDetails", default)]
    pub asset_details: Option<AssetDetails>,
}

#[derive(Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct AssetDetails {
    #[serde(rename = "Serial_Number", default)]
    pub serial_number: Option<String>,
    #[serde(rename = "License", default)]
    pub license: Option<AssetLicense>,
}

#[derive(Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct AssetLicense {
    #[serde(rename = "License_File", default)]
    pub license_file: Option<String>,
}

impl ForticareResponse {

    pub fn asset_serial_number(&self) -> Option<&str> {
        self.asset_details.as_ref()
            .and_then(|details| details.serial_number.as_deref())
    }

    pub fn asset_license_file(&self) -> Option<&str> {
        self.asset_details.as_ref()
            .and_then(|details| details.license.as_ref())
            .and_then(|license| license.license_file.as_deref())
    }

    /// License text of a download call, falling back to the asset details layout.
    pub fn downloaded_license_file(&self) -> Option<&str> {
        self.license_file.as_deref().or_else(|| self.asset_license_file())
    }
}
