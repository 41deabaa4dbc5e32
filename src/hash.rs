/// Hex MD5 digest of the slide text. Used as the duplicate-detection key
/// per (content_hash, course_code) and as the mock scorer seed. Not a
/// security boundary.
pub fn content_hash(text: &str) -> String {
    let mut context = md5::Context::new();
    context.consume(text.as_bytes());
    format!("{:x}", context.finalize())
}

/// Folds the first sixteen hex digits of the digest into a PRNG seed so
/// that repeated analysis of identical content produces identical mock
/// scores.
pub fn content_seed(text: &str) -> u64 {
    let digest = content_hash(text);
    u64::from_str_radix(&digest[..16], 16).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        let a = content_hash("การจัดการทรัพยากรน้ำ");
        let b = content_hash("การจัดการทรัพยากรน้ำ");
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn hash_matches_known_digest() {
        assert_eq!(content_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn different_content_hashes_differ() {
        assert_ne!(content_hash("น้ำ"), content_hash("อากาศ"));
    }

    #[test]
    fn seed_is_deterministic_and_content_sensitive() {
        assert_eq!(content_seed("slide one"), content_seed("slide one"));
        assert_ne!(content_seed("slide one"), content_seed("slide two"));
    }
}
