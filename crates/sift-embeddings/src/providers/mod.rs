//! Deterministic local encoders.

mod bm25_sparse;
mod hashing_dense;

pub use bm25_sparse::Bm25SparseEncoder;
pub use hashing_dense::HashingDenseEncoder;

/// Tokenize text into lowercase alphanumeric terms of at least two chars.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= 2)
        .map(|s| s.to_lowercase())
        .collect()
}

/// FNV-1a hash of a term.
pub(crate) fn hash_term(term: &str) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in term.as_bytes() {
        h ^= *b as u64;
        h = h.wrapping_mul(0x100000001b3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_drops_short_terms() {
        assert_eq!(
            tokenize("Paris is the capital of France."),
            vec!["paris", "is", "the", "capital", "of", "france"]
        );
        assert_eq!(tokenize("a I x"), Vec::<String>::new());
    }

    #[test]
    fn hash_is_stable() {
        assert_eq!(hash_term("capital"), hash_term("capital"));
        assert_ne!(hash_term("capital"), hash_term("france"));
    }
}
