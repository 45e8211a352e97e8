//! Whole-file reads and writes shared by compress and decompress.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{debug, warn};

use crate::error::JobError;

/// Read the entire file into memory.
pub fn read_input(path: &Path) -> Result<Vec<u8>, JobError> {
    let data = fs::read(path).map_err(|e| JobError::io(path, e))?;
    debug!("Read {} bytes from {}.", data.len(), path.display());
    Ok(data)
}

/// Refuse to clobber an existing file unless forced.
pub fn check_output(path: &Path, force_overwrite: bool) -> Result<(), JobError> {
    if path.exists() {
        if !force_overwrite {
            return Err(JobError::OutputExists(path.to_path_buf()));
        }
        warn!("Overwriting {}.", path.display());
    }
    Ok(())
}

/// Write the whole buffer, replacing any previous contents.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), JobError> {
    let mut f_out = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| JobError::io(path, e))?;
    f_out.write_all(data).map_err(|e| JobError::io(path, e))?;
    debug!("Wrote {} bytes to {}.", data.len(), path.display());
    Ok(())
}

/// Delete the source file once its replacement is safely written.
pub fn remove_input(path: &Path, keep_input_files: bool) -> Result<(), JobError> {
    if keep_input_files {
        debug!("Keeping {}.", path.display());
        return Ok(());
    }
    fs::remove_file(path).map_err(|e| JobError::io(path, e))
}

/// Output size as a percentage of input size, for reporting.
pub fn ratio(input: usize, output: usize) -> f64 {
    if input == 0 {
        return 0.0;
    }
    output as f64 * 100.0 / input as f64
}

#[cfg(test)]
mod test {
    use super::{check_output, ratio, read_input, remove_input, write_output};
    use crate::error::JobError;

    #[test]
    fn write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        write_output(&path, b"first, longer contents").unwrap();
        write_output(&path, b"second").unwrap();
        assert_eq!(read_input(&path).unwrap(), b"second");

        remove_input(&path, true).unwrap();
        assert!(path.exists());
        remove_input(&path, false).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn existing_output_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taken");
        check_output(&path, false).unwrap();
        write_output(&path, b"x").unwrap();
        assert!(matches!(
            check_output(&path, false),
            Err(JobError::OutputExists(_))
        ));
        check_output(&path, true).unwrap();
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, JobError::Io { .. }));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn ratio_test() {
        assert_eq!(ratio(0, 16), 0.0);
        assert_eq!(ratio(200, 50), 25.0);
    }
}
