use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_LICENSE_TYPE: &str = "Unknown license type: please check the given ZIP file";
pub const MISSING_LICENSE_FOLDER: &str = "--licenses is required for FC- archives";

static ZIP_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z0-9]{2,3})-").unwrap());

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone, Copy)]
pub enum LicenseType {
    FortiGateVm,
    FortiManagerVm,
    FortiAuthenticatorVm,
    FortiAnalyzerVm,
    FortiPortalVm,
    ServiceEntitlement,
    FortiGateVmBundle,
}

impl LicenseType {

    /// Classifies an archive from the prefix of its file name, e.g. `FG-1234.zip`.
    pub fn from_zip_name(zip_file: impl AsRef<Path>) -> Option<LicenseType> {
        let zip_file = zip_file.as_ref();
        let file_name = zip_file.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| zip_file.to_string_lossy().into_owned());

        return ZIP_PREFIX_REGEX.captures(&file_name)
            .and_then(|captures| captures.get(1))
            .and_then(|prefix| prefix.as_str().parse().ok());
    }

    /// Like `from_zip_name`, with the diagnostic to print when the prefix is not known.
    pub fn describe_archive(zip_file: impl AsRef<Path>) -> Result<LicenseType, String> {
        return LicenseType::from_zip_name(zip_file).ok_or_else(|| UNKNOWN_LICENSE_TYPE.to_string());
    }

    pub fn as_str(&self) -> &str {
        match self {
            LicenseType::FortiGateVm => "FG",
            LicenseType::FortiManagerVm => "FMG",
            LicenseType::FortiAuthenticatorVm => "FAC",
            LicenseType::FortiAnalyzerVm => "FAZ",
            LicenseType::FortiPortalVm => "FPC",
            LicenseType::ServiceEntitlement => "FC",
            LicenseType::FortiGateVmBundle => "FC7",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            LicenseType::FortiGateVm => "FortiGate VM",
            LicenseType::FortiManagerVm => "FortiManager VM",
            LicenseType::FortiAuthenticatorVm => "FortiAuthenticator VM",
            LicenseType::FortiAnalyzerVm => "FortiAnalyzer VM",
            LicenseType::FortiPortalVm => "FortiPortal VM",
            LicenseType::ServiceEntitlement => "Service Entitlement",
            LicenseType::FortiGateVmBundle => "FortiGate-VM (unlimited CPU) Subscription License with 360 Protection Bundle",
        }
    }

    /// Header line printed before the CSV rows.
    pub fn banner(&self) -> String {
        format!("# ZIP file is for [{}] license(s).", self.description())
    }

    /// Zero based page holding the code in the vendor PDF.
    pub fn page_index(&self) -> u32 {
        match self {
            LicenseType::ServiceEntitlement | LicenseType::FortiGateVmBundle => 1,
            _ => 0,
        }
    }

    pub fn uses_contract_code(&self) -> bool {
        self.page_index() == 1
    }

    /// Contract PDFs don't name the FortiGate they belong to.
    pub fn requires_serial_numbers(&self) -> bool {
        *self == LicenseType::ServiceEntitlement
    }

    /// The `.lic` folder to pair serials from, `None` when this type needs none.
    pub fn license_folder<'a>(&self, licenses: Option<&'a Path>) -> Result<Option<&'a Path>, String> {
        if !self.requires_serial_numbers() {
            return Ok(None);
        }
        return licenses.map(Some).ok_or_else(|| MISSING_LICENSE_FOLDER.to_string());
    }
}

impl FromStr for LicenseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FG" => Ok(LicenseType::FortiGateVm),
            "FMG" => Ok(LicenseType::FortiManagerVm),
            "FAC" => Ok(LicenseType::FortiAuthenticatorVm),
            "FAZ" => Ok(LicenseType::FortiAnalyzerVm),
            "FPC" => Ok(LicenseType::FortiPortalVm),
            "FC" => Ok(LicenseType::ServiceEntitlement),
            "FC7" => Ok(LicenseType::FortiGateVmBundle),
            _ => Err(format!("Unknown license type prefix: {}", s)),
        }
    }
}
