use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::data_structs::license_type::LicenseType;

static REGISTRATION_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Registration Code\s+:\s+(.{30})").unwrap());
static CONTRACT_REGISTRATION_CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"ContractRegistrationCode:(.{12})").unwrap());
static SERIAL_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Evaluation license term\s+:\s+[0-9]{1,3}\s+days\s+[0-9A-Z-]{7}(.{14})").unwrap()
});
static LICENSE_FILE_NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(FG.+)\.lic").unwrap());

fn first_capture(regex: &Regex, text: &str) -> Option<String> {
    regex.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|code| code.as_str().to_string())
}

pub fn code_pattern(license_type: LicenseType) -> &'static Regex {
    if license_type.uses_contract_code() {
        &*CONTRACT_REGISTRATION_CODE_REGEX
    } else {
        &*REGISTRATION_CODE_REGEX
    }
}

pub fn get_registration_code(text: &str, license_type: LicenseType) -> Option<String> {
    first_capture(code_pattern(license_type), text)
}

pub fn get_contract_registration_code(text: &str) -> Option<String> {
    first_capture(&CONTRACT_REGISTRATION_CODE_REGEX, text)
}

/// Serial number printed on evaluation license PDFs.
pub fn get_serial_number(text: &str) -> Option<String> {
    first_capture(&SERIAL_NUMBER_REGEX, text)
}

/// `FGVM02TM00000001.lic` gives `FGVM02TM00000001`.
pub fn serial_from_license_file_name(file_name: &str) -> Option<String> {
    first_capture(&LICENSE_FILE_NAME_REGEX, file_name)
}

/// Serial numbers of the `<sn>.lic` files found in `folder`, sorted so pairing does not
/// depend on the directory listing order.
pub fn serials_from_license_folder(folder: &Path) -> std::io::Result<Vec<String>> {
    let mut serials = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(sn) = serial_from_license_file_name(&entry.file_name().to_string_lossy()) {
            serials.push(sn);
        }
    }
    serials.sort();
    return Ok(serials);
}
