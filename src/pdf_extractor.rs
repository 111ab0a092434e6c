use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::{debug, warn};
use lopdf::Document;

use crate::data_structs::csv_row::CsvRow;
use crate::data_structs::license_type::LicenseType;
use crate::error::{Result, ToolkitError};
use crate::registration_code::{get_registration_code, get_serial_number};

pub fn load_pdf(pdf_bytes: &[u8], entry: &str) -> Result<Document> {
    Document::load_mem(pdf_bytes).map_err(|e| ToolkitError::pdf(entry, e))
}

/// Text of the zero based `page_index`.
pub fn page_text(document: &Document, page_index: u32, entry: &str) -> Result<String> {
    let page_number = page_index + 1;
    let pages = document.get_pages();
    if !pages.contains_key(&page_number) {
        return Err(ToolkitError::pdf(entry, format!("page {} missing, document has {} page(s)", page_number, pages.len())));
    }
    return document.extract_text(&[page_number]).map_err(|e| ToolkitError::pdf(entry, e));
}

fn document_text(document: &Document) -> String {
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    document.extract_text(&page_numbers).unwrap_or_default()
}

/// Hands out license folder serial numbers to contract PDFs.
#[derive(Debug)]
struct SerialPairing {
    serials: Vec<String>,
    used: Vec<bool>,
}

impl SerialPairing {
    fn new(serials: Vec<String>) -> Self {
        let used = vec![false; serials.len()];
        Self { serials, used }
    }

    fn take(&mut self, index: usize) -> String {
        self.used[index] = true;
        self.serials[index].clone()
    }

    fn find_unused(&self, predicate: impl Fn(&str) -> bool) -> Option<usize> {
        self.serials.iter()
            .enumerate()
            .position(|(i, sn)| !self.used[i] && predicate(sn.as_str()))
    }

    /// A serial printed in the document is used first, then the next unused one in order.
    fn pair(&mut self, document_text: &str, entry: &str) -> Result<String> {
        if let Some(i) = self.find_unused(|sn| document_text.contains(sn)) {
            debug!("{} names serial number {}", entry, self.serials[i]);
            return Ok(self.take(i));
        }
        if let Some(fragment) = get_serial_number(document_text) {
            if let Some(i) = self.find_unused(|sn| sn.contains(fragment.as_str())) {
                debug!("{} evaluation serial {} matches {}", entry, fragment, self.serials[i]);
                return Ok(self.take(i));
            }
        }
        match self.find_unused(|_| true) {
            Some(i) => Ok(self.take(i)),
            None => Err(ToolkitError::NotEnoughSerials {
                entry: entry.to_string(),
                available: self.serials.len(),
            }),
        }
    }

    fn unused(&self) -> Vec<&str> {
        self.serials.iter()
            .zip(&self.used)
            .filter(|(_, used)| !**used)
            .map(|(sn, _)| sn.as_str())
            .collect()
    }
}

#[derive(Debug)]
pub struct PdfExtractor {
    license_type: LicenseType,
    ip: String,
    description: String,
    serial_numbers: Option<Vec<String>>,
}

impl PdfExtractor {

    pub fn new(license_type: LicenseType, ip: &str, description: &str) -> PdfExtractor {
        return PdfExtractor {
            license_type,
            ip: ip.to_string(),
            description: description.to_string(),
            serial_numbers: None,
        }
    }

    pub fn with_serial_numbers(mut self, serial_numbers: Vec<String>) -> PdfExtractor {
        self.serial_numbers = Option::from(serial_numbers);
        self
    }

    pub fn extract_file(&self, zip_file: &Path) -> Result<Vec<CsvRow>> {
        let file = File::open(zip_file)?;
        self.extract_archive(BufReader::new(file))
    }

    /// One row per PDF, in archive enumeration order.
    pub fn extract_archive<R: Read + Seek>(&self, reader: R) -> Result<Vec<CsvRow>> {
        let mut archive = zip::ZipArchive::new(reader)?;
        let mut pairing = self.serial_numbers.clone().map(SerialPairing::new);
        let mut rows = Vec::new();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let entry_name = entry.name().to_string();
            if entry.is_dir() {
                continue;
            }
            if !entry_name.to_ascii_lowercase().ends_with(".pdf") {
                warn!("Skipping {}: not a PDF file", entry_name);
                continue;
            }

            let mut pdf_bytes = Vec::new();
            entry.read_to_end(&mut pdf_bytes)?;
            let document = load_pdf(&pdf_bytes, &entry_name)?;
            let text = page_text(&document, self.license_type.page_index(), &entry_name)?;

            let code = get_registration_code(&text, self.license_type);
            if code.is_none() {
                warn!("No registration code found in {}", entry_name);
            }
            let mut row = CsvRow::new(entry_name.clone(), code, &self.ip, &self.description);

            if let Some(pairing) = pairing.as_mut() {
                let serial_number = pairing.pair(&document_text(&document), &entry_name)?;
                row = row.with_serial_number(serial_number);
            }
            rows.push(row);
        }

        if let Some(pairing) = pairing {
            let unused = pairing.unused();
            if !unused.is_empty() {
                warn!("{} serial number(s) left without a contract: {}", unused.len(), unused.join(", "));
            }
        }
        return Ok(rows);
    }
}
