//! Per-byte text predicates

/// Bell, the lowest control byte accepted as text
pub const BEL: u8 = 0x07;
/// Carriage return, the highest of the accepted C0 run
pub const CR: u8 = 0x0D;
/// Escape
pub const ESC: u8 = 0x1B;
/// First byte of the ISO-8859-1 upper printable range (NBSP)
pub const LATIN1_UPPER_START: u8 = 0xA0;

/// Check whether a byte belongs to the ASCII text subset.
///
/// Accepts the printable range `0x20..=0x7E`, the common controls
/// `0x07..=0x0D` (bell, backspace, tab, newlines, form feed) and escape.
/// `NUL`, the other C0 controls and `DEL` are not text.
pub fn is_ascii_like(byte: u8) -> bool {
    matches!(byte, BEL..=CR | ESC | 0x20..=0x7E)
}

/// Check whether a byte belongs to the ISO-8859-1 text subset.
///
/// Everything accepted by [`is_ascii_like`] plus `0xA0..=0xFF`.
/// The C1 range `0x80..=0x9F` never counts as text.
pub fn is_iso8859_like(byte: u8) -> bool {
    is_ascii_like(byte) || byte >= LATIN1_UPPER_START
}

/// Control bytes that rule out every text encoding at once.
///
/// `NUL..=ACK` and `SO..=US`, except escape which stays text.
pub fn is_binary_control(byte: u8) -> bool {
    matches!(byte, 0x00..=0x06 | 0x0E..=0x1A | 0x1C..=0x1F)
}
