use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, error};

use forticare_toolkit::data_structs::app_config::{DEFAULT_CONFIG_FILE, ForticareConfig};
use forticare_toolkit::forticare_client::ForticareClient;
use forticare_toolkit::logging::init_logging;
use forticare_toolkit::payload::{RegistrationKind, RegistrationOptions};
use forticare_toolkit::registration::register;

/// Register a product entitlement or a license, optionally saving the license file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Registration code
    #[arg(short, long, value_name = "REGCODE")]
    code: String,

    /// Description field
    #[arg(short, long, value_name = "DESCRIPTION")]
    description: Option<String>,

    /// Management IP address if required
    #[arg(short = 'a', long = "address", value_name = "IPADDRESS")]
    ip: Option<String>,

    /// Serial number associated with the registration code
    #[arg(short, long, value_name = "SERIAL")]
    serial: Option<String>,

    /// Retrieve the license file during the registration (filename is <SERIALNUMBER>.lic)
    #[arg(short, long)]
    lic: bool,

    /// What the code registers; guessed from the code when omitted (hyphen means license)
    #[arg(short, long, value_name = "KIND")]
    kind: Option<RegistrationKind>,

    /// INI file holding the FortiCare url and token
    #[arg(long, value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    init_logging("ftnt-register-asset", args.verbose);

    let config = ForticareConfig::from_file(&args.config).unwrap_or_else(|err| {
        error!("{}", err);
        std::process::exit(1);
    });

    let options = RegistrationOptions {
        code: args.code,
        serial_number: args.serial,
        description: args.description,
        ip: args.ip,
    };

    let client = ForticareClient::new(&config);
    match register(&client, args.kind, &options, args.lic, Path::new(".")).await {
        Ok(outcome) => {
            debug!("Registered {} {} ({:?})", outcome.kind.as_str(), options.code, outcome.license_path);
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
