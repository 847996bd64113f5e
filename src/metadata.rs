//! Link-aware metadata lookup and the raw formatting primitives used by the
//! long listing: type character, permission string, owner/group names and
//! timestamps.

use crate::error::ListError;
use chrono::{DateTime, Local};
use std::fs;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;
use uzers::{get_group_by_gid, get_user_by_uid};

/// Placeholder used when a uid/gid has no name mapping.
pub const UNKNOWN_NAME: &str = "unknown";

/// Timestamp layout for the long listing: month, day, hour, minute.
const MOD_TIME_FORMAT: &str = "%b %d %H:%M";

/// File type as reported by `lstat` (symlinks are not followed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
}

impl FileKind {
    pub fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else if ft.is_socket() {
            FileKind::Socket
        } else {
            FileKind::Regular
        }
    }

    /// Leading character of a long-format line.
    pub fn type_char(self) -> char {
        match self {
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::CharDevice => 'c',
            FileKind::BlockDevice => 'b',
            FileKind::Fifo => 'p',
            FileKind::Socket => 's',
            FileKind::Regular => '-',
        }
    }

    /// Devices, FIFOs and sockets.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            FileKind::CharDevice | FileKind::BlockDevice | FileKind::Fifo | FileKind::Socket
        )
    }
}

/// Permission bits: the rwx triads plus setuid, setgid and sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    bits: u32,
}

impl Permissions {
    const SETUID: u32 = 0o4000;
    const SETGID: u32 = 0o2000;
    const STICKY: u32 = 0o1000;
    const EXEC_ANY: u32 = 0o111;

    /// Keep only the permission and special bits of a raw `st_mode`.
    pub fn from_mode(mode: u32) -> Self {
        Self { bits: mode & 0o7777 }
    }

    pub fn bits(self) -> u32 {
        self.bits
    }

    /// Whether owner, group or other may execute.
    pub fn is_executable(self) -> bool {
        self.bits & Self::EXEC_ANY != 0
    }

    /// Render as the nine-character `rwxrwxrwx` string with special-bit
    /// substitutions in the execute slots.
    pub fn to_rwx_string(self) -> String {
        let mut chars = ['-'; 9];
        for (triad, shift) in [6u32, 3, 0].into_iter().enumerate() {
            let base = triad * 3;
            if (self.bits >> (shift + 2)) & 1 != 0 {
                chars[base] = 'r';
            }
            if (self.bits >> (shift + 1)) & 1 != 0 {
                chars[base + 1] = 'w';
            }
            if (self.bits >> shift) & 1 != 0 {
                chars[base + 2] = 'x';
            }
        }

        let specials = [(Self::SETUID, 2, 's'), (Self::SETGID, 5, 's'), (Self::STICKY, 8, 't')];
        for (flag, slot, mark) in specials {
            if self.bits & flag != 0 {
                chars[slot] = if chars[slot] == 'x' {
                    mark
                } else {
                    mark.to_ascii_uppercase()
                };
            }
        }

        chars.iter().collect()
    }
}

/// Everything the long listing and the color classifier need about one entry.
/// Built fresh on every call; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    pub kind: FileKind,
    pub permissions: Permissions,
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    pub size: u64,
    pub modified: SystemTime,
    /// Link destination; `None` for non-links or when it cannot be read.
    pub symlink_target: Option<String>,
}

impl EntryMetadata {
    /// Query `lstat` for `path` and resolve owner, group and link target.
    pub fn query(path: &Path) -> Result<Self, ListError> {
        let meta =
            fs::symlink_metadata(path).map_err(|e| ListError::entry_stat_unavailable(path, e))?;
        let kind = FileKind::from_file_type(meta.file_type());

        let symlink_target = if kind == FileKind::Symlink {
            match fs::read_link(path) {
                Ok(target) => Some(target.to_string_lossy().into_owned()),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "unreadable symlink target");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            kind,
            permissions: Permissions::from_mode(meta.mode()),
            link_count: meta.nlink(),
            owner: owner_name(meta.uid()),
            group: group_name(meta.gid()),
            size: meta.size(),
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            symlink_target,
        })
    }
}

/// Link-aware file type of `path`, without the name lookups of a full query.
pub fn file_kind(path: &Path) -> Result<FileKind, ListError> {
    fs::symlink_metadata(path)
        .map(|m| FileKind::from_file_type(m.file_type()))
        .map_err(|e| ListError::entry_stat_unavailable(path, e))
}

/// `lstat` type and permission bits only; enough to pick a color without
/// resolving owner and group names.
pub fn kind_and_permissions(path: &Path) -> Result<(FileKind, Permissions), ListError> {
    let meta =
        fs::symlink_metadata(path).map_err(|e| ListError::entry_stat_unavailable(path, e))?;
    Ok((
        FileKind::from_file_type(meta.file_type()),
        Permissions::from_mode(meta.mode()),
    ))
}

/// Resolve a uid to a user name, or `unknown`.
pub fn owner_name(uid: u32) -> String {
    get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Resolve a gid to a group name, or `unknown`.
pub fn group_name(gid: u32) -> String {
    get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| UNKNOWN_NAME.to_string())
}

/// Format a modification time in local time, e.g. `Mar 07 14:05`.
pub fn format_mod_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(MOD_TIME_FORMAT)
        .to_string()
}
