pub mod bookings;
pub mod guests;
pub mod rooms;

/// Trims free text and treats blank input as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
