use crate::error::ContractError;

pub fn decode_node_string_to_bytes(node: String) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(node)
}

pub fn encode_node_bytes_to_string(node: Vec<u8>) -> String {
    hex::encode(node)
}

/// Invisible code points a label may not contain: soft hyphen, Mongolian
/// vowel separator, zero-width and directional marks, word joiner and
/// invisible operators, byte order mark, musical formatting controls.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FEFF}'
            | '\u{1D173}'..='\u{1D17A}'
    )
}

pub fn validate_label(label: &str) -> Result<(), ContractError> {
    if label.is_empty() || label.contains('.') || label.chars().any(is_invisible) {
        return Err(ContractError::InvalidLabel {
            label: label.to_string(),
        });
    }
    Ok(())
}
