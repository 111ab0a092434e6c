use std::path::{Path, PathBuf};

use clap::Parser;
use log::error;

use forticare_toolkit::data_structs::app_config::{DEFAULT_CONFIG_FILE, ForticareConfig};
use forticare_toolkit::forticare_client::ForticareClient;
use forticare_toolkit::logging::init_logging;
use forticare_toolkit::registration::retrieve_license;

/// Retrieve a license file from a serial number.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Serial number of the unit you want the license for
    #[arg(short, long = "serial", value_name = "SERIAL")]
    serial: String,

    /// License output filename (defaults to <SERIAL>.lic)
    #[arg(short, long, value_name = "FILENAME")]
    file: Option<PathBuf>,

    /// INI file holding the FortiCare url and token
    #[arg(short, long, value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging("ftnt-license-get", args.verbose);

    let config = ForticareConfig::from_file(&args.config).unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    });

    let client = ForticareClient::new(&config);
    if let Err(err) = retrieve_license(&client, &args.serial, args.file.as_deref(), Path::new(".")).await {
        error!("{}", err);
        std::process::exit(1);
    }
}
