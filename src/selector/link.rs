//! Share-link ids and routes
//!
//! A catalog index is XORed with a fixed key and written in base 36 so links
//! don't expose the catalog position at a glance. This is obfuscation only.

use crate::catalog::Catalog;

const XOR_KEY: usize = 0x5A3C;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: usize) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[value % 36]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Encode a catalog index as a link id
///
/// # Examples
/// ```
/// use urdle::selector::encode_word_id;
///
/// assert_eq!(encode_word_id(0), "hto");
/// ```
#[must_use]
pub fn encode_word_id(index: usize) -> String {
    to_base36(index ^ XOR_KEY)
}

/// Decode a link id into an index below `len`
#[must_use]
pub fn decode_index(id: &str, len: usize) -> Option<usize> {
    let id = id.trim();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let value = usize::from_str_radix(id, 36).ok()?;
    let index = value ^ XOR_KEY;
    (index < len).then_some(index)
}

/// Decode a link id into a catalog index
///
/// Returns `None` for ids that are not base 36 or fall outside the catalog.
#[must_use]
pub fn decode_word_id(id: &str, catalog: &Catalog) -> Option<usize> {
    decode_index(id, catalog.len())
}

/// Where a link points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `#/`: today's word
    Daily,
    /// `#/random`: any word but the current one
    Random,
    /// `#/w/<id>`: a specific word by link id
    Word(String),
}

impl Route {
    /// Parse a link, a hash fragment, or a bare path
    ///
    /// Anything unrecognized routes to the daily word.
    ///
    /// # Examples
    /// ```
    /// use urdle::selector::Route;
    ///
    /// assert_eq!(Route::parse("https://example.com/urdle/#/w/hto"), Route::Word("hto".into()));
    /// assert_eq!(Route::parse("#/random"), Route::Random);
    /// assert_eq!(Route::parse("#/nonsense"), Route::Daily);
    /// ```
    #[must_use]
    pub fn parse(link: &str) -> Self {
        let fragment = link.split_once('#').map_or(link, |(_, f)| f);
        let path = fragment.trim().trim_start_matches('/');
        match path.split_once('/') {
            Some(("w", id)) if !id.is_empty() => Self::Word(id.trim_end_matches('/').to_string()),
            _ if path.trim_end_matches('/') == "random" => Self::Random,
            _ => Self::Daily,
        }
    }

    /// Hash fragment for this route
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Daily => "#/".to_string(),
            Self::Random => "#/random".to_string(),
            Self::Word(id) => format!("#/w/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample;

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        // 0 ^ 0x5A3C = 23100 = 17*1296 + 29*36 + 24
        assert_eq!(encode_word_id(0), "hto");
    }

    #[test]
    fn round_trip_every_index() {
        let catalog = sample();
        for i in 0..catalog.len() {
            assert_eq!(decode_word_id(&encode_word_id(i), &catalog), Some(i));
        }
    }

    #[test]
    fn decode_accepts_uppercase() {
        let catalog = sample();
        let id = encode_word_id(2).to_uppercase();
        assert_eq!(decode_word_id(&id, &catalog), Some(2));
    }

    #[test]
    fn decode_rejects_garbage() {
        let catalog = sample();
        assert_eq!(decode_word_id("", &catalog), None);
        assert_eq!(decode_word_id("!!", &catalog), None);
        assert_eq!(decode_word_id("+hto", &catalog), None);
        assert_eq!(decode_word_id(&encode_word_id(catalog.len()), &catalog), None);
        assert_eq!(decode_word_id("zzzzzzzzzzzzzzzzzzzzzzzz", &catalog), None);
    }

    #[test]
    fn route_parsing() {
        assert_eq!(Route::parse(""), Route::Daily);
        assert_eq!(Route::parse("#/"), Route::Daily);
        assert_eq!(Route::parse("#/random"), Route::Random);
        assert_eq!(Route::parse("/random/"), Route::Random);
        assert_eq!(Route::parse("#/w/abc"), Route::Word("abc".into()));
        assert_eq!(
            Route::parse("https://gisenberg.github.io/urdle/#/w/hto"),
            Route::Word("hto".into())
        );
        assert_eq!(Route::parse("#/w/"), Route::Daily);
    }

    #[test]
    fn route_fragment_round_trip() {
        for route in [Route::Daily, Route::Random, Route::Word("hto".into())] {
            assert_eq!(Route::parse(&route.fragment()), route);
        }
    }
}
