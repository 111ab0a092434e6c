use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::data_structs::app_config::ForticareConfig;
use crate::data_structs::requests::download_license::DownloadLicenseRequest;
use crate::data_structs::requests::register_license::RegisterLicenseRequest;
use crate::data_structs::requests::register_units::RegisterUnitsRequest;
use crate::data_structs::responses::forticare_response::ForticareResponse;
use crate::error::{Result, ToolkitError};
use crate::utils::join_url;

pub const REST_DOWNLOAD_LICENSE: &str = "REST_DownloadLicense";
pub const REST_REGISTER_LICENSE: &str = "REST_RegisterLicense";
pub const REST_REGISTER_UNITS: &str = "REST_RegisterUnits";

#[derive(Debug)]
#[derive(Clone)]
pub struct ForticareClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl ForticareClient {

    pub fn new(config: &ForticareConfig) -> ForticareClient {
        return ForticareClient {
            base_url: config.url.clone(),
            token: config.token.clone(),
            client: reqwest::Client::new(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub async fn download_license(&self, payload: &DownloadLicenseRequest) -> Result<ForticareResponse> {
        let response = self.call(REST_DOWNLOAD_LICENSE, payload).await?;
        debug!("Retrieved license information, status code is \"{}\"", response.message);
        return Ok(response);
    }

    pub async fn register_license(&self, payload: &RegisterLicenseRequest) -> Result<ForticareResponse> {
        let response = self.call(REST_REGISTER_LICENSE, payload).await?;
        debug!("Registration operation terminated with \"{}\"", response.message);
        return Ok(response);
    }

    pub async fn register_units(&self, payload: &RegisterUnitsRequest) -> Result<ForticareResponse> {
        let response = self.call(REST_REGISTER_UNITS, payload).await?;
        debug!("Registration operation terminated with \"{}\"", response.message);
        return Ok(response);
    }

    /// One POST, no status code check and no retry: whatever JSON comes back is the answer.
    async fn call<T: Serialize>(&self, api_function: &str, payload: &T) -> Result<ForticareResponse> {
        let url = join_url(&self.base_url, api_function);
        if log::log_enabled!(log::Level::Debug) {
            debug!("Payload to post to {} is:", url);
            debug!("{}", redacted_json(payload));
        }

        let body = self.client.post(&url)
            .json(payload)
            .send().await?
            .text().await?;

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| ToolkitError::unexpected_response(format!("body is not JSON ({}): {}", e, body)))?;
        debug!("JSON output is:");
        debug!("{}", serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.clone()));

        return serde_json::from_value::<ForticareResponse>(json)
            .map_err(|e| ToolkitError::unexpected_response(e.to_string()));
    }
}

fn redacted_json<T: Serialize>(payload: &T) -> String {
    let mut value = match serde_json::to_value(payload) {
        Ok(value) => value,
        Err(e) => return format!("<unserializable payload: {}>", e),
    };
    if let Some(token) = value.get_mut("Token") {
        *token = Value::String("********".to_string());
    }
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
