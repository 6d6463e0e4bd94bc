//! Request path resolution against the document root.
//!
//! # Responsibilities
//! - Decode the raw URL path exactly once
//! - Reject embedded NUL bytes before any filesystem call
//! - Collapse `.` / `..` syntactically, refusing to climb above the root
//! - Canonicalize the candidate (following symlinks) and verify containment
//!
//! # Design Decisions
//! - Pure blocking function: no locks, no logging, no caching
//! - Containment is component-wise (`/docs-evil` is not inside `/docs`)
//! - Escape detection wins over existence: a missing leaf under an escaping
//!   ancestor is `Traversal`, not `NotFound`
//! - I/O failures unrelated to existence pass through as [`ResolveError::Io`]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

/// Classified reasons a request path is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    Traversal,
    NullByte,
    NotFound,
}

impl RejectionKind {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionKind::Traversal => "traversal",
            RejectionKind::NullByte => "null_byte",
            RejectionKind::NotFound => "not_found",
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by [`resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("path traversal detected")]
    Traversal,
    #[error("null byte detected in path")]
    NullByte,
    #[error("no such file or directory")]
    NotFound,
    /// Filesystem failure unrelated to existence (permissions, I/O).
    #[error("filesystem error: {0}")]
    Io(#[source] io::Error),
}

impl ResolveError {
    /// The classified kind, or `None` for pass-through I/O failures.
    pub fn kind(&self) -> Option<RejectionKind> {
        match self {
            ResolveError::Traversal => Some(RejectionKind::Traversal),
            ResolveError::NullByte => Some(RejectionKind::NullByte),
            ResolveError::NotFound => Some(RejectionKind::NotFound),
            ResolveError::Io(_) => None,
        }
    }

    /// True for the kinds worth an intrusion-detection log line.
    pub fn is_security_relevant(&self) -> bool {
        matches!(self, ResolveError::Traversal | ResolveError::NullByte)
    }
}

/// Resolve an untrusted request path below `root`.
///
/// On success the returned path is canonical and lies at or below the
/// canonical form of `root`.
pub fn resolve(request_path: &str, root: &Path) -> Result<PathBuf, ResolveError> {
    // Invalid UTF-8 after decoding becomes U+FFFD: a harmless literal.
    let decoded = percent_decode_str(request_path).decode_utf8_lossy();

    if decoded.contains('\0') {
        return Err(ResolveError::NullByte);
    }

    let relative = normalize(&decoded)?;

    let base = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let real_root = fs::canonicalize(root).unwrap_or_else(|_| base.clone());
    let candidate = base.join(relative);

    match fs::canonicalize(&candidate) {
        Ok(real_path) => {
            if is_contained(&real_path, &real_root) {
                Ok(real_path)
            } else {
                Err(ResolveError::Traversal)
            }
        }
        Err(e) if is_missing(&e) => {
            let ancestor = resolve_existing_ancestor(&candidate, &base);
            if is_contained(&ancestor, &real_root) {
                Err(ResolveError::NotFound)
            } else {
                Err(ResolveError::Traversal)
            }
        }
        Err(e) => Err(ResolveError::Io(e)),
    }
}

/// Outcome of [`check_path`].
#[derive(Debug)]
pub enum PathCheck {
    Safe(PathBuf),
    Unsafe(ResolveError),
}

impl PathCheck {
    pub fn is_safe(&self) -> bool {
        matches!(self, PathCheck::Safe(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathCheck::Safe(p) => Some(p),
            PathCheck::Unsafe(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ResolveError> {
        match self {
            PathCheck::Safe(_) => None,
            PathCheck::Unsafe(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<PathBuf, ResolveError> {
        match self {
            PathCheck::Safe(p) => Ok(p),
            PathCheck::Unsafe(e) => Err(e),
        }
    }
}

/// Tagged form of [`resolve`] for callers that prefer branching on a value.
pub fn check_path(request_path: &str, root: &Path) -> PathCheck {
    match resolve(request_path, root) {
        Ok(path) => PathCheck::Safe(path),
        Err(e) => PathCheck::Unsafe(e),
    }
}

/// Collapse the decoded path into a root-relative path.
fn normalize(decoded: &str) -> Result<PathBuf, ResolveError> {
    let mut segments: Vec<&str> = Vec::new();

    for segment in decoded.split(std::path::is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(ResolveError::Traversal);
                }
            }
            other => {
                // A segment must stay a plain name once pushed onto the root
                // (drive prefixes such as `C:` would replace it on Windows).
                let mut components = Path::new(other).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) => segments.push(other),
                    _ => return Err(ResolveError::Traversal),
                }
            }
        }
    }

    Ok(segments.iter().collect())
}

/// Canonicalize the nearest existing ancestor of a missing candidate.
///
/// Walks no higher than `base`. Falls back to the syntactic parent when
/// nothing under `base` resolves.
fn resolve_existing_ancestor(candidate: &Path, base: &Path) -> PathBuf {
    let start = if candidate == base {
        base
    } else {
        candidate.parent().unwrap_or(base)
    };

    for ancestor in start.ancestors() {
        if !ancestor.starts_with(base) {
            break;
        }
        if let Ok(real) = fs::canonicalize(ancestor) {
            return real;
        }
    }

    start.to_path_buf()
}

fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn is_contained(path: &Path, real_root: &Path) -> bool {
    // Path::starts_with compares whole components.
    path.starts_with(real_root)
}
