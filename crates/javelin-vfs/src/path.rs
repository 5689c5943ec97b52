use std::borrow::Cow;
use std::path::Path;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped inside a URI path segment.
///
/// Everything non-alphanumeric except the characters that commonly appear
/// unescaped in file names; `/` is never part of a segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'_')
    .remove(b'~');

/// Converts a file system path into a `file:///` URI, percent-encoding each
/// `/`-separated segment.
pub fn path_to_uri(path: &str) -> String {
    let path = separators_to_unix(path);
    let encoded: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect();
    format!("file:///{}", encoded.join("/"))
}

/// Recovers the path from a `file://` URI, percent-decoding each segment.
///
/// Malformed percent escapes are passed through unchanged. URIs with other
/// schemes are returned as-is.
pub fn uri_to_path(uri: &str) -> String {
    let Some(host_and_path) = uri.strip_prefix("file://") else {
        return uri.to_string();
    };
    let decoded: Vec<String> = host_and_path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(decode_segment)
        .collect();
    format!("/{}", decoded.join("/"))
}

fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        // Not valid UTF-8 after decoding: keep the raw segment.
        Err(_) => segment.to_string(),
    }
}

/// The URI of the containing directory, or `None` at the root.
pub fn parent_uri(uri: &str) -> Option<String> {
    let path = uri_to_path(uri);
    let trimmed = path.trim_end_matches('/');
    let (parent, _) = trimmed.rsplit_once('/')?;
    if parent.is_empty() {
        return Some("file:///".to_string());
    }
    Some(path_to_uri(parent))
}

/// Joins path-like strings with POSIX semantics: an absolute later element
/// discards everything accumulated so far. Empty elements are skipped.
pub fn join_path(root: &str, elements: &[&str]) -> String {
    let mut ret = trailing_slash(&separators_to_unix(root));
    for element in elements {
        if element.is_empty() {
            continue;
        }
        let element = trailing_slash(&separators_to_unix(element));
        if element.starts_with('/') {
            ret = element;
        } else {
            ret.push_str(&element);
        }
    }
    ret.pop();
    ret
}

/// Joins two path-like strings by literal concatenation, avoiding duplicate
/// separators but otherwise ignoring path semantics.
pub fn concat_path(left: &str, right: &str) -> String {
    if !left.ends_with('/') && !right.starts_with('/') {
        format!("{left}/{right}")
    } else if left == "file:///" && right.starts_with('/') {
        left.to_string()
    } else {
        format!("{left}{right}")
    }
}

/// Normalizes a path for comparison: separators to `/`, duplicate slashes
/// collapsed.
pub fn vfs_path(path: &Path) -> String {
    let unix = separators_to_unix(&path.to_string_lossy());
    let mut out = String::with_capacity(unix.len());
    let mut prev_slash = false;
    for ch in unix.chars() {
        if ch == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(ch);
    }
    out
}

/// Whether `path` is `prefix` or lies under it, comparing normalized forms.
pub fn path_starts_with(path: &Path, prefix: &Path) -> bool {
    vfs_path(path).starts_with(&vfs_path(prefix))
}

/// Whether `child` equals `parent` or lies under it as a URI.
pub fn uri_contains_or_equals(parent: &str, child: &str) -> bool {
    if parent == child {
        return true;
    }
    let parent: Cow<'_, str> = if parent.ends_with('/') {
        Cow::Borrowed(parent)
    } else {
        Cow::Owned(format!("{parent}/"))
    };
    child.starts_with(parent.as_ref())
}

fn separators_to_unix(path: &str) -> String {
    path.replace('\\', "/")
}

fn trailing_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}
