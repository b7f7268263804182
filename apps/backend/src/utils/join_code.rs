//! Join code generation for rooms.
//!
//! Codes are short 6-character strings over Crockford's Base32 alphabet,
//! stored uppercase and matched case-insensitively.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
pub const CODE_LEN: usize = 6;

/// Generate a join code for a room.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    let mut s = String::with_capacity(CODE_LEN);
    for _ in 0..CODE_LEN {
        let idx = rng.random_range(0..CROCKFORD.len());
        s.push(CROCKFORD[idx] as char);
    }
    s
}

/// Canonical form used for storage and lookup.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
