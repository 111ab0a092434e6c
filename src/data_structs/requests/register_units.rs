use serde::{Deserialize, Serialize};

// adds a service entitlement (contract) to an already registered unit
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct RegisterUnitsRequest {
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "RegistrationUnits")]
    pub registration_units: Vec<RegistrationUnit>,
}

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct RegistrationUnit {
    #[serde(rename = "Serial_Number")]
    pub serial_number: String,
    #[serde(rename = "Contract_Number")]
    pub contract_number: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Additional_Info")]
    pub additional_info: String,
    #[serde(rename = "Is_Government")]
    pub is_government: bool,
}
