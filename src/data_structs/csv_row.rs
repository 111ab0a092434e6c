use std::fmt;

#[derive(Debug, PartialEq, Eq)]
#[derive(Clone)]
pub struct CsvRow {
    pub entry_name: String,
    pub code: Option<String>,
    pub ip: String,
    pub description: String,
    pub serial_number: Option<String>,
}

impl CsvRow {
    pub fn new(entry_name: String, code: Option<String>, ip: &str, description: &str) -> Self {
        Self { entry_name, code, ip: ip.to_string(), description: description.to_string(), serial_number: None }
    }

    pub fn with_serial_number(mut self, serial_number: String) -> Self {
        self.serial_number = Option::from(serial_number);
        self
    }

    pub fn to_csv_line(&self) -> String {
        let code = self.code.as_deref().unwrap_or("");
        match &self.serial_number {
            Some(sn) => format!("{},{},{},{}", code, self.ip, self.description, sn),
            None => format!("{},{},{}", code, self.ip, self.description),
        }
    }
}

impl fmt::Display for CsvRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv_line())
    }
}
