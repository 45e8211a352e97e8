use std::path::{Path, PathBuf};

use log::{info, warn};

use super::codec::{decode, Method};
use super::file_io::{check_output, ratio, read_input, remove_input, write_output};
use crate::error::JobError;
use crate::tools::cli::Opts;

/// Decompress every file named in opts, stopping at the first failure.
pub fn decompress(opts: &Opts) -> Result<(), JobError> {
    for path in &opts.files {
        if let Err(e) = decompress_file(path, opts) {
            warn!("Stopping at {}.", path.display());
            return Err(e);
        }
    }
    Ok(())
}

/// Decompress one file, writing the original name back.
fn decompress_file(path: &Path, opts: &Opts) -> Result<(), JobError> {
    let out_path = decompressed_name(path, opts.method)?;
    check_output(&out_path, opts.force_overwrite)?;

    let data = read_input(path)?;
    let decoded = decode(opts.method, &data)?;
    write_output(&out_path, &decoded)?;

    info!(
        "{}: {} -> {} bytes with {}.",
        path.display(),
        data.len(),
        decoded.len(),
        opts.method
    );

    remove_input(path, opts.keep_input_files)
}

/// Decode every file in memory and report whether it is intact. Nothing is written or removed.
pub fn test(opts: &Opts) -> Result<(), JobError> {
    for path in &opts.files {
        if let Err(e) = test_file(path, opts.method) {
            warn!("Stopping at {}.", path.display());
            return Err(e);
        }
    }
    Ok(())
}

fn test_file(path: &Path, method: Method) -> Result<(), JobError> {
    let data = read_input(path)?;
    let decoded = decode(method, &data)?;
    info!(
        "{}: ok, {} bytes decode to {} ({:.1}%).",
        path.display(),
        data.len(),
        decoded.len(),
        ratio(decoded.len(), data.len())
    );
    Ok(())
}

/// The input name with the method's suffix removed.
pub fn decompressed_name(path: &Path, method: Method) -> Result<PathBuf, JobError> {
    let bad_suffix = || JobError::BadSuffix {
        path: path.to_path_buf(),
        expected: method.suffix(),
    };
    if path.extension().map_or(true, |ext| ext != method.suffix()) {
        return Err(bad_suffix());
    }
    let stem = path.file_stem().ok_or_else(bad_suffix)?;
    Ok(path.with_file_name(stem))
}
