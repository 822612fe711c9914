/// The primary separator of path components
pub const SEPARATOR: char = '/';

/// The primary separator of path components
pub const SEPARATOR_STR: &str = "/";

/// The alternate separator of path components, as seen in windows-style input
pub const ALT_SEPARATOR: char = '\\';

/// Marker that roots a path at the home directory when it stands alone or is
/// followed by a separator
pub const HOME: char = '~';

/// Reserved in every path position; rejected alongside the disallowed bytes
/// even though it is not part of the table below
pub const RESERVED_CHAR: char = ':';

/// Bytes that are not allowed anywhere in a path
pub const DISALLOWED_PATH_BYTES: &[u8] = &[b'<', b'>', b'|', b'?', b'*', b'"', b'\0'];

/// Path component value that represents the current directory
pub const CURRENT_DIR: &[u8] = b".";

/// Path component value that represents the parent directory
pub const PARENT_DIR: &[u8] = b"..";
