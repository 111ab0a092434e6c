use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, error};

use forticare_toolkit::data_structs::license_type::LicenseType;
use forticare_toolkit::logging::init_logging;
use forticare_toolkit::pdf_extractor::PdfExtractor;
use forticare_toolkit::registration_code::serials_from_license_folder;

/// Extract registration codes from a ZIP archive of FortiCare PDF files and print them as CSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ZIP file holding the PDF files; its name prefix (FG-, FMG-, FC-, ...) gives the license type
    #[arg(short = 'f', long = "file", value_name = "ZIP")]
    zip_file: PathBuf,

    /// Description for the licenses
    #[arg(short, long = "desc", value_name = "DESCRIPTION")]
    description: String,

    /// IP address for the licenses
    #[arg(short, long, value_name = "IP")]
    ip: String,

    /// Folder with the FortiGate-VM <sn>.lic files (required for FC- archives)
    #[arg(short, long, value_name = "FOLDER")]
    licenses: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging("ftnt-generate-csv", args.verbose);

    let license_type = match LicenseType::describe_archive(&args.zip_file) {
        Ok(license_type) => license_type,
        Err(diagnostic) => {
            println!("{}", diagnostic);
            return;
        }
    };
    debug!("{} is a {} archive", args.zip_file.display(), license_type.as_str());

    let mut extractor = PdfExtractor::new(license_type, &args.ip, &args.description);
    let folder = license_type.license_folder(args.licenses.as_deref()).unwrap_or_else(|usage| {
        Args::command().error(ErrorKind::MissingRequiredArgument, usage).exit()
    });
    if let Some(folder) = folder {
        let serials = serials_from_license_folder(folder).unwrap_or_else(|err| {
            error!("Could not list {}: {}", folder.display(), err);
            std::process::exit(1);
        });
        debug!("Found {} serial number(s) in {}", serials.len(), folder.display());
        extractor = extractor.with_serial_numbers(serials);
    }

    println!("{}", license_type.banner());
    match extractor.extract_file(&args.zip_file) {
        Ok(rows) => {
            for row in rows {
                println!("{}", row);
            }
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
