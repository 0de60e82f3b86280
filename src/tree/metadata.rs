//! Stat results captured when an entry is listed

use std::fs;
use std::time::SystemTime;

/// Owner-read permission bit.
pub const OWNER_READ: u32 = 0o400;

/// File type of a listed entry. Symlinks are not followed, so a link to a
/// directory is a `Symlink`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
}

impl EntryKind {
    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            return EntryKind::Directory;
        }
        if file_type.is_symlink() {
            return EntryKind::Symlink;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if file_type.is_fifo() {
                return EntryKind::Fifo;
            }
            if file_type.is_socket() {
                return EntryKind::Socket;
            }
            if file_type.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if file_type.is_char_device() {
                return EntryKind::CharDevice;
            }
        }
        EntryKind::File
    }

    /// Leading character of the symbolic mode string.
    fn type_char(self) -> char {
        match self {
            EntryKind::Directory => 'd',
            EntryKind::File => '-',
            EntryKind::Symlink => 'l',
            EntryKind::Fifo => 'p',
            EntryKind::Socket => 's',
            EntryKind::BlockDevice => 'b',
            EntryKind::CharDevice => 'c',
        }
    }
}

/// Immutable snapshot of an entry's stat data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryMetadata {
    pub kind: EntryKind,
    /// Permission bits (`0o777` mask).
    pub mode: u32,
    pub modified: Option<SystemTime>,
}

impl EntryMetadata {
    pub fn new(kind: EntryKind, mode: u32, modified: Option<SystemTime>) -> Self {
        Self {
            kind,
            mode: mode & 0o777,
            modified,
        }
    }

    /// Capture metadata from a stat result.
    pub fn from_fs(meta: &fs::Metadata) -> Self {
        Self::new(
            EntryKind::from_file_type(meta.file_type()),
            permission_bits(meta),
            meta.modified().ok(),
        )
    }

    /// Metadata for an entry that could be listed but not stat'ed: the kind
    /// is known, the permission bits and mtime are not.
    pub fn without_stat(file_type: fs::FileType) -> Self {
        Self::new(EntryKind::from_file_type(file_type), 0, None)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Owner-read check on the captured mode, not an access(2) probe.
    pub fn is_readable(&self) -> bool {
        self.mode & OWNER_READ != 0
    }

    /// Permission bits as four octal digits, e.g. `0755`.
    pub fn octal_mode(&self) -> String {
        format!("{:04o}", self.mode)
    }

    /// `ls`-style mode string, e.g. `drwxr-xr-x`.
    pub fn symbolic_mode(&self) -> String {
        let mut out = String::with_capacity(10);
        out.push(self.kind.type_char());
        for shift in [6, 3, 0] {
            let bits = (self.mode >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        out
    }
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(meta: &fs::Metadata) -> u32 {
    match (meta.is_dir(), meta.permissions().readonly()) {
        (true, true) => 0o555,
        (true, false) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_mode() {
        let dir = EntryMetadata::new(EntryKind::Directory, 0o755, None);
        assert_eq!(dir.symbolic_mode(), "drwxr-xr-x");

        let file = EntryMetadata::new(EntryKind::File, 0o640, None);
        assert_eq!(file.symbolic_mode(), "-rw-r-----");

        let link = EntryMetadata::new(EntryKind::Symlink, 0o777, None);
        assert_eq!(link.symbolic_mode(), "lrwxrwxrwx");
    }

    #[test]
    fn test_octal_mode_masks_special_bits() {
        let meta = EntryMetadata::new(EntryKind::Directory, 0o41755, None);
        assert_eq!(meta.mode, 0o755);
        assert_eq!(meta.octal_mode(), "0755");

        let meta = EntryMetadata::new(EntryKind::File, 0o7, None);
        assert_eq!(meta.octal_mode(), "0007");
    }

    #[test]
    fn test_owner_read() {
        assert!(EntryMetadata::new(EntryKind::Directory, 0o400, None).is_readable());
        assert!(!EntryMetadata::new(EntryKind::Directory, 0o333, None).is_readable());
    }

    #[cfg(unix)]
    #[test]
    fn test_from_fs_captures_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let meta = EntryMetadata::from_fs(&fs::metadata(dir.path()).unwrap());
        assert!(meta.is_dir());
        assert!(meta.modified.is_some());
    }
}
