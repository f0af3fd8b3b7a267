//! Short code generation.
//!
//! Codes are 6 characters drawn uniformly from the 64-symbol URL-safe
//! alphabet (`A-Z`, `a-z`, `0-9`, `-`, `_`) using the operating system's
//! CSPRNG. That gives 36 bits of entropy per code.
//!
//! Generated codes are not checked against existing links. By the birthday
//! bound, the chance of at least one collision reaches 50% after roughly
//! 2^18 (about 300 thousand) links. A collision is rejected by the storage
//! layer's unique index on the short URL and surfaces as a failed request.

use crate::error::AppError;
use serde_json::json;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// URL-safe alphabet. Its length is a power of two so masking a random
/// byte with `0x3f` picks a symbol without modulo bias.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const SYMBOL_MASK: u8 = 0x3f;

/// Generates a random short code.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator is
/// unavailable. There is no fallback to a weaker source.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code()?;
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate short code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(buffer
        .iter()
        .map(|byte| char::from(ALPHABET[usize::from(byte & SYMBOL_MASK)]))
        .collect())
}

/// Source of short codes used by the link service.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no code can be produced.
    fn generate(&self) -> Result<String, AppError>;
}

/// [`CodeGenerator`] backed by [`generate_code`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<String, AppError> {
        generate_code()
    }
}
