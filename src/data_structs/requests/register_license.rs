use serde::{Deserialize, Serialize};

// registers a VM license (FortiGate-VM, FortiManager-VM, ...) from its registration code
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct RegisterLicenseRequest {
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Serial_Number")]
    pub serial_number: String,
    #[serde(rename = "License_Registration_Code")]
    pub license_registration_code: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Additional_Info")]
    pub additional_info: String,
    #[serde(rename = "Is_Government")]
    pub is_government: bool,
}
