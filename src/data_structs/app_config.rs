use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};
use log::debug;

use crate::error::{Result, ToolkitError};
use crate::utils::read_file_as_str;

pub const DEFAULT_CONFIG_FILE: &str = ".forticare";
pub const CONFIG_SECTION: &str = "forticare";

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone)]
pub struct ForticareConfig {
    pub url: String,
    pub token: String,
}

impl ForticareConfig {

    pub fn new(url: String, token: String) -> ForticareConfig {
        return ForticareConfig {
            url,
            token
        }
    }

    pub fn from_file(config_path: impl AsRef<Path>) -> Result<ForticareConfig> {
        let config_path = config_path.as_ref();
        let buf = read_file_as_str(config_path).map_err(|source| ToolkitError::ConfigRead {
            path: config_path.to_path_buf(),
            source,
        })?;
        let config = Self::from_str_with_origin(&buf, config_path)?;
        debug!("FortiCare URL: {}", config.url);
        return Ok(config);
    }

    pub(crate) fn from_str_with_origin(contents: &str, origin: &Path) -> Result<ForticareConfig> {
        // values are kept exactly as written, quotes and backslashes included
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_str_opt(contents, options).map_err(|e| ToolkitError::ConfigParse {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

        let missing = |key: &str| ToolkitError::MissingConfigKey {
            key: key.to_string(),
            path: PathBuf::from(origin),
        };

        let section = ini.section(Some(CONFIG_SECTION)).ok_or_else(|| missing(CONFIG_SECTION))?;
        let url = get_key(section, "url").ok_or_else(|| missing("url"))?;
        let token = get_key(section, "token").ok_or_else(|| missing("token"))?;

        Ok(ForticareConfig::new(url.to_string(), token.to_string()))
    }
}

/// Option names are matched without regard to case, so `URL` and `Token` work too.
fn get_key<'a>(section: &'a Properties, key: &str) -> Option<&'a str> {
    return section.iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value);
}
