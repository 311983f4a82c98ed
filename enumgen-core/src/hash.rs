//! Stable string hashing for `FileHash` mode.

/// Hashes a string with 32-bit FNV-1a.
///
/// The Unity tool this replaces fed member names through `Animator.StringToHash`, whose algorithm
/// is an engine implementation detail. Values generated in `FileHash` mode end up persisted in
/// scenes and save data and get compared across sessions, so whatever hash we use has to produce
/// the same result on every run, platform, and release. FNV-1a is a small, well-documented hash
/// with exactly that property. Do not change the constants; doing so silently renumbers every
/// enum ever generated in `FileHash` mode.
pub fn fnv1a_32(s: &str) -> u32 {
    const OFFSET_BASIS: u32 = 2166136261;
    const PRIME: u32 = 16777619;

    let mut hash = OFFSET_BASIS;
    for byte in s.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::fnv1a_32;

    #[test]
    fn known_values() {
        // Reference values computed with an independent FNV-1a implementation.
        assert_eq!(fnv1a_32(""), 0x811c9dc5);
        assert_eq!(fnv1a_32("Value1"), 0xcf4d8a41);
        assert_eq!(fnv1a_32("Value2"), 0xcc4d8588);
        assert_eq!(fnv1a_32("HogeType"), 0x50e28340);
    }

    #[test]
    fn known_collision() {
        // The classic colliding pair; the collision report relies on pairs like this existing.
        assert_eq!(fnv1a_32("costarring"), fnv1a_32("liquid"));
        assert_eq!(fnv1a_32("costarring"), 0x5e4daa9d);
    }
}
