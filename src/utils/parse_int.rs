/// Parse an optional numeric bound from raw form input.
///
/// Empty and whitespace-only input means "no bound", as does anything
/// that does not parse as an unsigned integer. Empty input must never
/// collapse to zero: a blank Min CPU box is an unbounded filter, not a
/// filter for zero cores.
pub fn parse_optional_u32(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<u32>().ok()
        }
    })
}
