use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::data_structs::responses::forticare_response::ForticareResponse;
use crate::error::{Result, ToolkitError};
use crate::forticare_client::ForticareClient;
use crate::license_file::{default_license_path, write_license_file};
use crate::payload::{build_download_payload, build_payload_license, build_payload_product, RegistrationKind, RegistrationOptions};

#[derive(Debug)]
pub struct RegistrationOutcome {
    pub kind: RegistrationKind,
    pub response: ForticareResponse,
    pub license_path: Option<PathBuf>,
}

/// Downloads the license of `serial_number` into `output`, or `<license_dir>/<serial>.lic`.
pub async fn retrieve_license(client: &ForticareClient, serial_number: &str, output: Option<&Path>, license_dir: &Path) -> Result<PathBuf> {
    let payload = build_download_payload(client.token(), serial_number);
    let response = client.download_license(&payload).await?;

    let license = response.downloaded_license_file()
        .ok_or_else(|| ToolkitError::unexpected_response(format!("no License_File in answer \"{}\"", response.message)))?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => license_dir.join(default_license_path(serial_number)),
    };
    write_license_file(&path, license)?;
    info!("License of {} saved to {}", serial_number, path.display());
    return Ok(path);
}

pub async fn register_product(client: &ForticareClient, options: &RegistrationOptions) -> Result<ForticareResponse> {
    let payload = build_payload_product(client.token(), options);
    let response = client.register_units(&payload).await?;
    info!("Entitlement {} registration: {}", options.code, response.message);
    return Ok(response);
}

/// Registers a license and, when `save_license` is set, stores the returned license as
/// `<license_dir>/<AssetDetails.Serial_Number>.lic`.
pub async fn register_license(client: &ForticareClient, options: &RegistrationOptions, save_license: bool, license_dir: &Path) -> Result<(ForticareResponse, Option<PathBuf>)> {
    let payload = build_payload_license(client.token(), options);
    let response = client.register_license(&payload).await?;
    info!("License {} registration: {}", options.code, response.message);

    if !save_license {
        return Ok((response, None));
    }

    debug!("Option --lic specified so license file will be saved.");
    let serial_number = response.asset_serial_number()
        .ok_or_else(|| ToolkitError::unexpected_response(format!("no AssetDetails.Serial_Number in answer \"{}\"", response.message)))?;
    let license = response.asset_license_file()
        .ok_or_else(|| ToolkitError::unexpected_response(format!("no AssetDetails.License.License_File in answer \"{}\"", response.message)))?;

    let path = license_dir.join(default_license_path(serial_number));
    write_license_file(&path, license)?;
    info!("License of {} saved to {}", serial_number, path.display());
    Ok((response, Some(path)))
}

pub async fn register(client: &ForticareClient, kind: Option<RegistrationKind>, options: &RegistrationOptions, save_license: bool, license_dir: &Path) -> Result<RegistrationOutcome> {
    let kind = RegistrationKind::resolve(kind, &options.code);
    match kind {
        RegistrationKind::Product => {
            if save_license {
                info!("Entitlements carry no license file, ignoring --lic");
            }
            let response = register_product(client, options).await?;
            Ok(RegistrationOutcome { kind, response, license_path: None })
        }
        RegistrationKind::License => {
            let (response, license_path) = register_license(client, options, save_license, license_dir).await?;
            Ok(RegistrationOutcome { kind, response, license_path })
        }
    }
}
