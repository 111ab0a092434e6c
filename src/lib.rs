pub mod error;
pub mod forticare_client;
pub mod license_file;
pub mod logging;
pub mod payload;
pub mod pdf_extractor;
pub mod registration;
pub mod registration_code;
mod utils;

pub mod data_structs {
    pub mod app_config;
    pub mod csv_row;
    pub mod license_type;

    pub mod requests {
        pub mod download_license;
        pub mod register_license;
        pub mod register_units;
    }

    pub mod responses {
        pub mod forticare_response;
    }
}

pub use error::{Result, ToolkitError};
