use std::io::Write;

use log::LevelFilter;

pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Builds the stderr logger once; the level comes from the verbosity flag and never changes afterwards.
pub fn init_logging(program: &str, verbose: bool) {
    let program = program.to_string();
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .target(env_logger::Target::Stderr)
        .format(move |buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                program,
                record.level(),
                record.args()
            )
        })
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_means_debug() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}
