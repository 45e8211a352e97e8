use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{info, warn};

use super::codec::{encode, Method};
use super::file_io::{check_output, ratio, read_input, remove_input, write_output};
use crate::error::JobError;
use crate::tools::cli::Opts;

/// Compress every file named in opts, stopping at the first failure.
pub fn compress(opts: &Opts) -> Result<(), JobError> {
    for path in &opts.files {
        if let Err(e) = compress_file(path, opts) {
            warn!("Stopping at {}.", path.display());
            return Err(e);
        }
    }
    Ok(())
}

/// Compress one file to <path>.huf or <path>.rle.
fn compress_file(path: &Path, opts: &Opts) -> Result<(), JobError> {
    let out_path = compressed_name(path, opts.method);
    check_output(&out_path, opts.force_overwrite)?;

    let data = read_input(path)?;
    let encoded = encode(opts.method, &data)?;
    write_output(&out_path, &encoded)?;

    info!(
        "{}: {} -> {} bytes ({:.1}%) with {}.",
        path.display(),
        data.len(),
        encoded.len(),
        ratio(data.len(), encoded.len()),
        opts.method
    );

    remove_input(path, opts.keep_input_files)
}

/// The input name with the method's suffix added.
pub fn compressed_name(path: &Path, method: Method) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(method.suffix());
    PathBuf::from(name)
}
