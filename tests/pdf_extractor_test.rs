use std::io::{Cursor, Write};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::FileOptions;

use forticare_toolkit::data_structs::license_type::LicenseType;
use forticare_toolkit::pdf_extractor::PdfExtractor;
use forticare_toolkit::registration_code::serials_from_license_folder;
use forticare_toolkit::ToolkitError;

const IP: &str = "192.0.2.10";
const DESC: &str = "lab cluster";

fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 10.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages.len() as i64,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn zip_of(entries: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        for (name, bytes) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, FileOptions::default()).unwrap();
            } else {
                writer.start_file(*name, FileOptions::default()).unwrap();
                writer.write_all(bytes).unwrap();
            }
        }
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

fn contract_pdf(code: &str) -> Vec<u8> {
    pdf_with_pages(&["FortiCare Contract Certificate", &format!("ContractRegistrationCode:{}", code)])
}

fn lines(rows: &[forticare_toolkit::data_structs::csv_row::CsvRow]) -> Vec<String> {
    rows.iter().map(|row| row.to_csv_line()).collect()
}

#[test]
fn fortigate_archive_yields_code_ip_description() {
    let pdf = pdf_with_pages(&["Registration Code   : ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"]);
    let archive = zip_of(&[("FGVM04-0001.pdf", pdf)]);

    let rows = PdfExtractor::new(LicenseType::FortiGateVm, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry_name, "FGVM04-0001.pdf");
    assert_eq!(rows[0].code.as_deref(), Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"));
    assert_eq!(lines(&rows), vec![format!("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123,{},{}", IP, DESC)]);
}

#[test]
fn archive_on_disk_is_classified_by_its_name() {
    let dir = tempfile::tempdir().unwrap();
    let zip_path = dir.path().join("FMG-VM-20240101.zip");
    let pdf = pdf_with_pages(&["Registration Code   : ZYXWVUTSRQPONMLKJIHGFEDCBA9876"]);
    std::fs::write(&zip_path, zip_of(&[("fmg.pdf", pdf)])).unwrap();

    let license_type = LicenseType::from_zip_name(&zip_path).unwrap();
    assert_eq!(license_type, LicenseType::FortiManagerVm);

    let rows = PdfExtractor::new(license_type, IP, DESC).extract_file(&zip_path).unwrap();
    assert_eq!(rows[0].code.as_deref(), Some("ZYXWVUTSRQPONMLKJIHGFEDCBA9876"));
}

#[test]
fn bundle_code_is_read_from_the_second_page() {
    // the first page carries a decoy to prove the right page is read
    let pdf = pdf_with_pages(&["ContractRegistrationCode:WRONGPAGE000", "ContractRegistrationCode:A1B2C3D4E5F6"]);
    let archive = zip_of(&[("bundle.pdf", pdf)]);

    let rows = PdfExtractor::new(LicenseType::FortiGateVmBundle, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(lines(&rows), vec![format!("A1B2C3D4E5F6,{},{}", IP, DESC)]);
}

#[test]
fn missing_code_leaves_an_empty_field() {
    let pdf = pdf_with_pages(&["This page has no code"]);
    let archive = zip_of(&[("empty.pdf", pdf)]);

    let rows = PdfExtractor::new(LicenseType::FortiAnalyzerVm, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(rows[0].code, None);
    assert_eq!(lines(&rows), vec![format!(",{},{}", IP, DESC)]);
}

#[test]
fn contract_codes_pair_with_serials_in_archive_order() {
    let dir = tempfile::tempdir().unwrap();
    for sn in ["FGVM02TM00000002", "FGVM02TM00000001"] {
        std::fs::write(dir.path().join(format!("{}.lic", sn)), "license").unwrap();
    }
    let serials = serials_from_license_folder(dir.path()).unwrap();

    let archive = zip_of(&[
        ("contract-b.pdf", contract_pdf("BBBBBBBBBBBB")),
        ("contract-a.pdf", contract_pdf("AAAAAAAAAAAA")),
    ]);

    let rows = PdfExtractor::new(LicenseType::ServiceEntitlement, IP, DESC)
        .with_serial_numbers(serials)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(lines(&rows), vec![
        format!("BBBBBBBBBBBB,{},{},FGVM02TM00000001", IP, DESC),
        format!("AAAAAAAAAAAA,{},{},FGVM02TM00000002", IP, DESC),
    ]);
}

#[test]
fn serial_printed_in_the_contract_is_preferred() {
    let serials = vec!["FGVM02TM00000001".to_string(), "FGVM02TM00000002".to_string()];
    let named = pdf_with_pages(&["Unit: FGVM02TM00000002", "ContractRegistrationCode:NAMEDNAMED12"]);
    let archive = zip_of(&[
        ("named.pdf", named),
        ("anonymous.pdf", contract_pdf("ANONYMOUS123")),
    ]);

    let rows = PdfExtractor::new(LicenseType::ServiceEntitlement, IP, DESC)
        .with_serial_numbers(serials)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(rows[0].serial_number.as_deref(), Some("FGVM02TM00000002"));
    assert_eq!(rows[1].serial_number.as_deref(), Some("FGVM02TM00000001"));
}

#[test]
fn more_contracts_than_serials_is_an_error() {
    let archive = zip_of(&[
        ("one.pdf", contract_pdf("111111111111")),
        ("two.pdf", contract_pdf("222222222222")),
    ]);

    let err = PdfExtractor::new(LicenseType::ServiceEntitlement, IP, DESC)
        .with_serial_numbers(vec!["FGVM02TM00000001".to_string()])
        .extract_archive(Cursor::new(archive))
        .unwrap_err();

    match err {
        ToolkitError::NotEnoughSerials { entry, available } => {
            assert_eq!(entry, "two.pdf");
            assert_eq!(available, 1);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn directories_and_other_files_are_skipped() {
    let pdf = pdf_with_pages(&["Registration Code   : ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"]);
    let archive = zip_of(&[
        ("licenses/", Vec::new()),
        ("licenses/README.txt", b"read me".to_vec()),
        ("licenses/fg.PDF", pdf),
    ]);

    let rows = PdfExtractor::new(LicenseType::FortiGateVm, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entry_name, "licenses/fg.PDF");
}

#[test]
fn single_page_pdf_has_no_contract_page() {
    let archive = zip_of(&[("short.pdf", pdf_with_pages(&["only one page"]))]);

    let err = PdfExtractor::new(LicenseType::FortiGateVmBundle, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap_err();

    assert!(matches!(err, ToolkitError::Pdf { ref entry, .. } if entry == "short.pdf"));
}

#[test]
fn declared_entry_size_is_not_trusted() {
    let pdf = pdf_with_pages(&["Registration Code   : ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"]);
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
        writer.start_file("fg.pdf", options).unwrap();
        writer.write_all(&pdf).unwrap();
        writer.finish().unwrap();
    }
    let mut archive = cursor.into_inner();

    // claim an uncompressed size of almost 2 GiB in the central directory
    let central = archive.windows(4).rposition(|w| w == b"PK\x01\x02").unwrap();
    archive[central + 24..central + 28].copy_from_slice(&0x7FFF_FFF0u32.to_le_bytes());

    let rows = PdfExtractor::new(LicenseType::FortiGateVm, IP, DESC)
        .extract_archive(Cursor::new(archive))
        .unwrap();

    assert_eq!(rows[0].code.as_deref(), Some("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"));
}

#[test]
fn corrupt_archive_is_reported() {
    let err = PdfExtractor::new(LicenseType::FortiGateVm, IP, DESC)
        .extract_archive(Cursor::new(b"PK not really".to_vec()))
        .unwrap_err();

    assert!(matches!(err, ToolkitError::Zip(_)));
}
