// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic: path keys used for
//! deduplication, directory identity for loop detection, and file-owner
//! resolution.

use std::{
    fs::Metadata,
    path::{Path, PathBuf},
};

use project_radar_ports::filesystem::OwnerLookup;
use project_radar_shared_kernel::{InfraResult, InfrastructureError};

// ============================================================================
// Path keys
// ============================================================================

/// Comparable key for a discovered path.
#[cfg(unix)]
pub fn path_key(path: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    path.as_os_str().as_bytes().to_vec()
}

/// Comparable key for a discovered path (NTFS compares case-insensitively).
#[cfg(windows)]
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().to_lowercase()
}

#[cfg(all(not(windows), not(unix)))]
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Directory identity
// ============================================================================

/// Identity of a directory for the follow-links visited set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirIdentity {
    Inode { dev: u64, ino: u64 },
    Canonical(PathBuf),
}

/// (device, inode) on Unix, canonical path elsewhere.
pub fn dir_identity(path: &Path, metadata: Option<&Metadata>) -> Option<DirIdentity> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let _ = path;
        metadata.map(|md| DirIdentity::Inode { dev: md.dev(), ino: md.ino() })
    }
    #[cfg(not(unix))]
    {
        let _ = metadata;
        std::fs::canonicalize(path).ok().map(DirIdentity::Canonical)
    }
}

// ============================================================================
// Owner lookup
// ============================================================================

/// Resolves owners through the system user database.
#[cfg(unix)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswdOwnerLookup;

#[cfg(unix)]
impl OwnerLookup for PasswdOwnerLookup {
    fn owner_of(&self, path: &Path) -> InfraResult<String> {
        use std::os::unix::fs::MetadataExt;

        let metadata = std::fs::metadata(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        user_name(metadata.uid())
            .map_err(|reason| InfrastructureError::OwnerLookupFailed { path: path.to_path_buf(), reason })
    }
}

#[cfg(unix)]
fn user_name(uid: u32) -> Result<String, String> {
    use std::ffi::CStr;

    const MAX_BUFFER: usize = 1 << 20;

    let mut buf: Vec<libc::c_char> = vec![0; 1024];
    loop {
        // SAFETY: an all-zero passwd is a valid value for getpwuid_r to overwrite.
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        // SAFETY: every pointer refers to live, correctly sized storage owned by this frame.
        let rc = unsafe { libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result) };

        if rc == libc::ERANGE && buf.len() < MAX_BUFFER {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(std::io::Error::from_raw_os_error(rc).to_string());
        }
        if result.is_null() || pwd.pw_name.is_null() {
            return Err(format!("no account for uid {uid}"));
        }
        // SAFETY: pw_name points into `buf`, NUL-terminated by getpwuid_r.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}

/// Lookup for platforms without an owner API; every call fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableOwnerLookup;

impl OwnerLookup for UnavailableOwnerLookup {
    fn owner_of(&self, _path: &Path) -> InfraResult<String> {
        Err(InfrastructureError::OwnerLookupUnavailable)
    }
}

/// Owner lookup for the current platform.
pub fn default_owner_lookup() -> Box<dyn OwnerLookup> {
    #[cfg(unix)]
    {
        Box::new(PasswdOwnerLookup)
    }
    #[cfg(not(unix))]
    {
        Box::new(UnavailableOwnerLookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_lookup_always_fails() {
        let err = UnavailableOwnerLookup.owner_of(Path::new("anything")).unwrap_err();
        assert!(matches!(err, InfrastructureError::OwnerLookupUnavailable));
    }

    #[cfg(unix)]
    #[test]
    fn passwd_lookup_resolves_owner_of_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mine.pdf");
        std::fs::write(&file, b"x").unwrap();

        // Containers may run as a uid without a passwd entry; either way the
        // call must not panic and must name the path on failure.
        match PasswdOwnerLookup.owner_of(&file) {
            Ok(name) => assert!(!name.is_empty()),
            Err(InfrastructureError::OwnerLookupFailed { path, .. }) => assert_eq!(path, file),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn passwd_lookup_reports_missing_file() {
        let err = PasswdOwnerLookup.owner_of(Path::new("/definitely/not/here.pdf")).unwrap_err();
        assert!(matches!(err, InfrastructureError::FileRead { .. }));
    }

    #[test]
    fn path_keys_distinguish_different_paths() {
        assert_ne!(path_key(Path::new("/a/b.txt")), path_key(Path::new("/a/c.txt")));
        assert_eq!(path_key(Path::new("/a/b.txt")), path_key(Path::new("/a/b.txt")));
    }
}
