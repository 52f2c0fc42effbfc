// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session entry: reading the `user` query parameter.

use url::{form_urlencoded, Url};

/// Query parameter carrying a pre-supplied visitor name.
pub const USER_PARAM: &str = "user";

/// Extracts a trimmed, non-blank `user` parameter.
///
/// Accepts a full URL (`https://host/?user=Mina`) or a bare query string
/// (`?user=Mina` or `user=Mina`).
pub fn user_from_url(input: &str) -> Option<String> {
    let input = input.trim();
    let value = match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == USER_PARAM)
            .map(|(_, value)| value.into_owned()),
        Err(_) => {
            let query = input.split_once('?').map_or(input, |(_, q)| q);
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == USER_PARAM)
                .map(|(_, value)| value.into_owned())
        }
    }?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_url() {
        assert_eq!(
            user_from_url("https://lumiere.example/?user=Ranjana").as_deref(),
            Some("Ranjana")
        );
    }

    #[test]
    fn bare_query_with_and_without_marker() {
        assert_eq!(user_from_url("?user=Mina").as_deref(), Some("Mina"));
        assert_eq!(user_from_url("lang=en&user=Mina").as_deref(), Some("Mina"));
    }

    #[test]
    fn percent_and_plus_decoding() {
        assert_eq!(
            user_from_url("https://x.test/?user=Carl%20Sagan").as_deref(),
            Some("Carl Sagan")
        );
        assert_eq!(user_from_url("?user=Carl+Sagan").as_deref(), Some("Carl Sagan"));
    }

    #[test]
    fn blank_or_missing_is_none() {
        assert_eq!(user_from_url("https://x.test/?user=%20%20"), None);
        assert_eq!(user_from_url("https://x.test/"), None);
        assert_eq!(user_from_url("?name=Mina"), None);
        assert_eq!(user_from_url(""), None);
    }

    #[test]
    fn value_is_trimmed() {
        assert_eq!(user_from_url("?user=+Mina+").as_deref(), Some("Mina"));
    }
}
