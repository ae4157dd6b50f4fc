//! Filesystem permission diagnostics.
//!
//! [`PermissionReport`] is a point-in-time snapshot of what the current user
//! can do with a path. Inspection never fails: attributes that cannot be read
//! degrade to `"unknown"` placeholders. The report only feeds error messages
//! and the `check` command; the export routine performs its own writability
//! gate and embeds the rendered report when that gate trips.

use std::fmt;
use std::path::{Path, PathBuf};

const UNKNOWN: &str = "unknown";

/// Read/write/execute capability plus ownership attributes for one path.
/// Recomputed on every check, never cached.
#[derive(Debug, Clone)]
pub struct PermissionReport {
    pub path: PathBuf,
    pub readable: bool,
    pub writable: bool,
    pub executable: bool,
    pub owner: String,
    pub group: String,
    /// Octal POSIX mode string (e.g. "755"), or "unknown".
    pub mode: String,
}

impl PermissionReport {
    /// Take a snapshot of `path`. No side effects.
    pub fn inspect(path: &Path) -> Self {
        #[cfg(unix)]
        {
            inspect_unix(path)
        }

        #[cfg(not(unix))]
        {
            inspect_portable(path)
        }
    }

    /// Human-readable suggestions for whatever the snapshot found.
    /// Empty when nothing looks wrong.
    pub fn remediation(&self) -> Vec<String> {
        let mut hints = Vec::new();

        if self.mode == UNKNOWN {
            hints.push(format!(
                "{} does not exist or its attributes cannot be read; \
                 create it first or pick another directory",
                self.path.display()
            ));
            return hints;
        }

        if !self.writable {
            hints.push(format!(
                "the current user cannot write to {}; try `chmod u+w '{}'` \
                 if you own it, or pick another directory",
                self.path.display(),
                self.path.display()
            ));
        }
        if !self.executable {
            hints.push(format!(
                "the directory cannot be entered; try `chmod u+x '{}'`",
                self.path.display()
            ));
        }
        if !self.readable {
            hints.push(format!(
                "the directory cannot be listed; try `chmod u+r '{}'`",
                self.path.display()
            ));
        }

        hints
    }
}

impl fmt::Display for PermissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Permission report for {}", self.path.display())?;
        writeln!(
            f,
            "  mode: {}  owner: {}  group: {}",
            self.mode, self.owner, self.group
        )?;
        writeln!(
            f,
            "  readable: {}  writable: {}  executable: {}",
            yes_no(self.readable),
            yes_no(self.writable),
            yes_no(self.executable)
        )?;
        for hint in self.remediation() {
            writeln!(f, "  hint: {}", hint)?;
        }
        Ok(())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(unix)]
fn inspect_unix(path: &Path) -> PermissionReport {
    use std::os::unix::fs::MetadataExt;

    let (owner, group, mode) = match std::fs::metadata(path) {
        Ok(meta) => (
            user_name(meta.uid()).unwrap_or_else(|| meta.uid().to_string()),
            group_name(meta.gid()).unwrap_or_else(|| meta.gid().to_string()),
            format!("{:o}", meta.mode() & 0o7777),
        ),
        Err(_) => (UNKNOWN.to_string(), UNKNOWN.to_string(), UNKNOWN.to_string()),
    };

    PermissionReport {
        path: path.to_path_buf(),
        readable: access(path, libc::R_OK),
        writable: access(path, libc::W_OK),
        executable: access(path, libc::X_OK),
        owner,
        group,
        mode,
    }
}

/// access(2) answers for the *effective* user, which is what matters for the
/// writes we are about to attempt.
#[cfg(unix)]
fn access(path: &Path, mode: libc::c_int) -> bool {
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = std::ffi::CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(cpath.as_ptr(), mode) == 0 }
}

#[cfg(unix)]
fn user_name(uid: libc::uid_t) -> Option<String> {
    unsafe {
        let pw = libc::getpwuid(uid);
        if pw.is_null() {
            return None;
        }
        Some(
            std::ffi::CStr::from_ptr((*pw).pw_name)
                .to_string_lossy()
                .into_owned(),
        )
    }
}

#[cfg(unix)]
fn group_name(gid: libc::gid_t) -> Option<String> {
    unsafe {
        let gr = libc::getgrgid(gid);
        if gr.is_null() {
            return None;
        }
        Some(
            std::ffi::CStr::from_ptr((*gr).gr_name)
                .to_string_lossy()
                .into_owned(),
        )
    }
}

#[cfg(not(unix))]
fn inspect_portable(path: &Path) -> PermissionReport {
    let meta = std::fs::metadata(path);
    let readable = meta.is_ok();
    let writable = meta
        .as_ref()
        .map(|m| !m.permissions().readonly())
        .unwrap_or(false);

    PermissionReport {
        path: path.to_path_buf(),
        readable,
        writable,
        executable: readable,
        owner: UNKNOWN.to_string(),
        group: UNKNOWN.to_string(),
        mode: UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_writable_directory() {
        let temp = tempfile::tempdir().unwrap();
        let report = PermissionReport::inspect(temp.path());

        assert!(report.readable);
        assert!(report.writable);
        assert!(report.executable);
        assert_ne!(report.mode, UNKNOWN);
        assert_ne!(report.owner, UNKNOWN);
        assert!(report.remediation().is_empty());
    }

    #[test]
    fn test_inspect_missing_path_degrades_to_unknown() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("nope");
        let report = PermissionReport::inspect(&missing);

        assert!(!report.readable);
        assert!(!report.writable);
        assert_eq!(report.mode, UNKNOWN);
        assert_eq!(report.owner, UNKNOWN);

        let hints = report.remediation();
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("does not exist"));
    }

    #[test]
    fn test_display_embeds_path_and_flags() {
        let temp = tempfile::tempdir().unwrap();
        let rendered = PermissionReport::inspect(temp.path()).to_string();

        assert!(rendered.contains("Permission report for"));
        assert!(rendered.contains(&temp.path().display().to_string()));
        assert!(rendered.contains("writable: yes"));
    }

    #[cfg(unix)]
    #[test]
    fn test_inspect_unwritable_directory_has_hint() {
        use std::os::unix::fs::PermissionsExt;

        // access(2) reports everything writable for root
        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("locked");
        std::fs::create_dir(&dir).unwrap();
        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).unwrap();

        let report = PermissionReport::inspect(&dir);
        assert!(!report.writable);
        assert!(report.readable);
        assert!(report
            .remediation()
            .iter()
            .any(|h| h.contains("cannot write")));

        std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}
