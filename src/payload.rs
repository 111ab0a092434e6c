use std::str::FromStr;

use log::debug;

use crate::data_structs::requests::download_license::{API_VERSION, DownloadLicenseRequest};
use crate::data_structs::requests::register_license::RegisterLicenseRequest;
use crate::data_structs::requests::register_units::{RegistrationUnit, RegisterUnitsRequest};

/// What a registration code registers.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum RegistrationKind {
    /// service entitlement keyed by a contract number
    Product,
    /// VM license keyed by a license registration code
    License,
}

impl RegistrationKind {

    /// Guesses the kind from the code layout: license codes are hyphenated, contract numbers are not.
    pub fn from_code(code: &str) -> RegistrationKind {
        return if code.contains('-') {
            RegistrationKind::License
        } else {
            RegistrationKind::Product
        };
    }

    /// An explicit kind wins over the guess.
    pub fn resolve(explicit: Option<RegistrationKind>, code: &str) -> RegistrationKind {
        match explicit {
            Some(kind) => kind,
            None => {
                let kind = Self::from_code(code);
                debug!("No kind given, code \"{}\" looks like a {}", code, kind.as_str());
                kind
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegistrationKind::Product => "product",
            RegistrationKind::License => "license",
        }
    }
}

impl FromStr for RegistrationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product" | "entitlement" => Ok(RegistrationKind::Product),
            "license" => Ok(RegistrationKind::License),
            _ => Err(format!("unknown registration kind '{}', expected 'product' or 'license'", s)),
        }
    }
}

#[derive(Debug, Default)]
#[derive(Clone)]
pub struct RegistrationOptions {
    pub code: String,
    pub serial_number: Option<String>,
    pub description: Option<String>,
    pub ip: Option<String>,
}

fn or_empty(value: &Option<String>, field: &str) -> String {
    match value {
        Some(value) => value.clone(),
        None => {
            debug!("No {} specified, set payload with an empty string.", field);
            String::new()
        }
    }
}

pub fn build_download_payload(token: &str, serial_number: &str) -> DownloadLicenseRequest {
    return DownloadLicenseRequest {
        token: token.to_string(),
        version: API_VERSION.to_string(),
        serial_number: serial_number.to_string(),
    };
}

pub fn build_payload_product(token: &str, options: &RegistrationOptions) -> RegisterUnitsRequest {
    return RegisterUnitsRequest {
        token: token.to_string(),
        version: API_VERSION.to_string(),
        registration_units: vec![RegistrationUnit {
            serial_number: or_empty(&options.serial_number, "serial number"),
            contract_number: options.code.clone(),
            description: options.description.clone(),
            additional_info: or_empty(&options.ip, "IP address"),
            is_government: false,
        }],
    };
}

pub fn build_payload_license(token: &str, options: &RegistrationOptions) -> RegisterLicenseRequest {
    return RegisterLicenseRequest {
        token: token.to_string(),
        version: API_VERSION.to_string(),
        serial_number: or_empty(&options.serial_number, "serial number"),
        license_registration_code: options.code.clone(),
        description: options.description.clone(),
        additional_info: or_empty(&options.ip, "IP address"),
        is_government: false,
    };
}
