use rand::Rng;

/// Generates a short public identifier: eight lowercase hex characters.
///
/// Used for customer accounts so that URLs and support tooling never expose
/// sequential database ids. Uniqueness is enforced by the unique column
/// constraint; collisions surface as a database error at insert time.
pub fn short_uid() -> String {
    let bytes: [u8; 4] = rand::rng().random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::short_uid;

    #[test]
    fn uid_is_eight_hex_characters() {
        let uid = short_uid();
        assert_eq!(uid.len(), 8);
        assert!(uid.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
