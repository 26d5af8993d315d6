//! File I/O helpers: whole-file reads and writes in one call.
//!
//! Thin wrappers over `std::fs` that connect files to the workspace's
//! container and view types. These are collaborators of the memory
//! core, not part of it — they allocate only through [`StrBuf`] and
//! report failures through `std::io::Error`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs;
use std::io;
use std::path::Path;

use loam_buf::StrBuf;
use loam_core::StrView;

/// Read a file's entire contents into an owned byte vector.
pub fn read_entire_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Read a file's entire contents into a terminated [`StrBuf`].
pub fn read_to_str_buf<P: AsRef<Path>>(path: P) -> io::Result<StrBuf> {
    let bytes = read_entire_file(path)?;
    StrBuf::from_bytes(bytes).map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))
}

/// Write `data` as a file's entire contents, replacing any previous
/// contents.
pub fn write_entire_file<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    fs::write(path, data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

/// Write a view's bytes as a file's entire contents.
pub fn write_view<P: AsRef<Path>>(path: P, view: StrView<'_>) -> io::Result<()> {
    write_entire_file(path, view.as_bytes())
}

/// Write a string builder's content (terminator excluded) as a file's
/// entire contents.
pub fn write_str_buf<P: AsRef<Path>>(path: P, buf: &StrBuf) -> io::Result<()> {
    write_entire_file(path, buf.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Unique scratch path per test; cleaned up by the caller.
    fn scratch_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("loam_io_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn write_then_read_round_trip() {
        let path = scratch_path("basic");
        write_entire_file(&path, b"Hello, file!").unwrap();
        let bytes = read_entire_file(&path).unwrap();
        assert_eq!(bytes, b"Hello, file!");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn view_round_trip() {
        let path = scratch_path("view");
        let view = StrView::from_str("Hello from a view!");
        write_view(&path, view).unwrap();
        let bytes = read_entire_file(&path).unwrap();
        assert!(StrView::from_bytes(&bytes).equals(view));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn str_buf_round_trip_stays_terminated() {
        let path = scratch_path("str_buf");
        let mut sb = StrBuf::new();
        sb.push_str("Hello from a builder!").unwrap();
        write_str_buf(&path, &sb).unwrap();

        let read_back = read_to_str_buf(&path).unwrap();
        assert_eq!(read_back.len(), sb.len());
        assert_eq!(read_back.as_bytes(), sb.as_bytes());
        // The terminator is an in-memory invariant, not file content.
        assert_eq!(*read_back.as_bytes_with_nul().last().unwrap(), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = scratch_path("missing_never_created");
        assert!(read_entire_file(&path).is_err());
        assert!(read_to_str_buf(&path).is_err());
    }

    #[test]
    fn binary_content_survives_the_str_buf_path() {
        let path = scratch_path("binary");
        let payload = [0u8, 255, 128, 0, 7];
        write_entire_file(&path, &payload).unwrap();
        let sb = read_to_str_buf(&path).unwrap();
        assert_eq!(sb.as_bytes(), &payload);
        assert_eq!(sb.to_str(), None);
        fs::remove_file(&path).unwrap();
    }
}
