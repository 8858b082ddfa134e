//
//  nounproject
//  validate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Parameter Validation
//!
//! Pure, side-effect-free checks applied to endpoint arguments before any
//! request is built. Each check either passes or fails with a typed
//! [`Error`](crate::Error) naming the offending parameter, so invalid input
//! never produces network traffic.
//!
//! ## Checks
//!
//! - [`assert_id`]: numeric identifiers must be strictly positive
//! - [`assert_slug`]: slugs must be nonempty, ASCII-only, single-word
//! - [`assert_term`]: search terms must be nonempty
//!
//! Paging values (`limit`, `offset`, `page`) need no runtime check here;
//! they are typed as optional integers at the API surface.

use crate::error::{Error, Result};

/// Checks that a numeric identifier is strictly positive.
///
/// # Parameters
///
/// * `id` - The identifier value to check.
/// * `parameter` - Name of the argument, used in the error message.
///
/// # Errors
///
/// Returns [`Error::NonPositive`] if `id` is zero or negative.
///
/// # Example
///
/// ```rust
/// use nounproject::validate::assert_id;
///
/// assert!(assert_id(12, "id").is_ok());
/// assert!(assert_id(0, "id").is_err());
/// assert!(assert_id(-12, "id").is_err());
/// ```
pub fn assert_id(id: i64, parameter: &'static str) -> Result<()> {
    if id <= 0 {
        return Err(Error::NonPositive { parameter });
    }
    Ok(())
}

/// Checks that a string is a legal slug.
///
/// A slug identifies a resource as an alternative to a numeric id. It must
/// be nonempty, consist only of ASCII characters, and contain no whitespace.
///
/// # Parameters
///
/// * `slug` - The candidate slug.
/// * `parameter` - Name of the argument, used in the error message.
///
/// # Errors
///
/// Returns [`Error::IllegalSlug`] if the string is empty, contains
/// non-ASCII characters, or contains whitespace.
///
/// # Example
///
/// ```rust
/// use nounproject::validate::assert_slug;
///
/// assert!(assert_slug("goat", "slug").is_ok());
/// assert!(assert_slug("", "slug").is_err());
/// assert!(assert_slug("¤", "slug").is_err());
/// assert!(assert_slug("goat horn", "slug").is_err());
/// ```
pub fn assert_slug(slug: &str, parameter: &'static str) -> Result<()> {
    let legal = !slug.is_empty() && slug.is_ascii() && !slug.chars().any(char::is_whitespace);
    if !legal {
        return Err(Error::IllegalSlug { parameter });
    }
    Ok(())
}

/// Checks that a search term is nonempty.
///
/// Terms are free text: whitespace and non-ASCII characters are allowed,
/// only the empty string is rejected.
///
/// # Parameters
///
/// * `term` - The candidate search term.
/// * `parameter` - Name of the argument, used in the error message.
///
/// # Errors
///
/// Returns [`Error::IllegalTerm`] if the string is empty.
///
/// # Example
///
/// ```rust
/// use nounproject::validate::assert_term;
///
/// assert!(assert_term("goat horn", "term").is_ok());
/// assert!(assert_term("chèvre", "term").is_ok());
/// assert!(assert_term("", "term").is_err());
/// ```
pub fn assert_term(term: &str, parameter: &'static str) -> Result<()> {
    if term.is_empty() {
        return Err(Error::IllegalTerm { parameter });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_id() {
        assert!(assert_id(12, "id").is_ok());
        assert!(assert_id(1, "id").is_ok());
        assert!(matches!(
            assert_id(0, "id"),
            Err(Error::NonPositive { parameter: "id" })
        ));
        assert!(matches!(
            assert_id(-12, "id"),
            Err(Error::NonPositive { parameter: "id" })
        ));
    }

    #[test]
    fn test_assert_slug() {
        assert!(assert_slug("goat", "slug").is_ok());
        assert!(assert_slug("goat-horn_2", "slug").is_ok());

        for bad in ["", "¤", "goat horn", "goat\thorn", "chèvre"] {
            assert!(
                matches!(assert_slug(bad, "slug"), Err(Error::IllegalSlug { parameter: "slug" })),
                "slug {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_assert_term() {
        assert!(assert_term("goat", "term").is_ok());
        assert!(assert_term("goat horn", "term").is_ok());
        assert!(assert_term("chèvre", "term").is_ok());
        assert!(matches!(
            assert_term("", "term"),
            Err(Error::IllegalTerm { parameter: "term" })
        ));
    }
}
