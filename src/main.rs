//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::process::ExitCode;

use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use hufrle::compression::compress::compress;
use hufrle::compression::decompress::{decompress, test};
use hufrle::tools::cli::{opts_init, Mode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    let options = opts_init();

    if let Err(e) = TermLogger::init(
        options.verbose.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Couldn't start logging: {}", e);
    }

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress(&options),
        Mode::Unzip => decompress(&options),
        Mode::Test => test(&options),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
