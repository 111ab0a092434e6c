use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_file_as_str(file_path: &Path) -> std::io::Result<String> {
    let mut buf: String = String::new();
    let mut file = File::open(file_path)?;
    file.read_to_string(&mut buf)?;
    return Ok(buf);
}

/// Joins the service base URL and an API function, tolerating a trailing slash.
pub fn join_url(base_url: &str, api_function: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), api_function)
}
