use tiny_keccak::Keccak;

pub const ADDR_REVERSE_NAME: &str = "addr.reverse";

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    o
}

pub fn get_label_from_name(name: &str) -> Vec<u8> {
    keccak256(name.as_bytes())
}

pub fn get_token_id_from_label(label: &[u8]) -> String {
    hex::encode(label)
}

pub fn get_label_from_token_id(token_id: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(token_id)
}

pub fn root_node() -> Vec<u8> {
    vec![0u8; 32]
}

/// Node of `label` directly beneath `node`: keccak256(node ++ labelhash).
pub fn subnode(node: &[u8], label: &[u8]) -> Vec<u8> {
    keccak256(&[node, label].concat())
}

pub fn namehash(name: &str) -> Vec<u8> {
    let mut node = root_node();
    if name.is_empty() {
        return node;
    }
    for label in name.rsplit('.') {
        node = subnode(&node, &get_label_from_name(label));
    }
    node
}

pub fn convert_namehash_to_hex_string(namehash: &[u8]) -> String {
    hex::encode(namehash)
}

/// Attribute values may not be empty; unset or empty values read `none`.
pub fn or_none(value: String) -> String {
    if value.is_empty() {
        String::from("none")
    } else {
        value
    }
}

/// Reverse label of an account: lowercase hex of its canonical bytes, no prefix.
pub fn reverse_label(canonical: &[u8]) -> String {
    hex::encode(canonical)
}

pub fn reverse_node(canonical: &[u8]) -> Vec<u8> {
    subnode(
        &namehash(ADDR_REVERSE_NAME),
        &get_label_from_name(&reverse_label(canonical)),
    )
}
