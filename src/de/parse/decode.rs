use std::borrow::Cow;

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Decodes the input bytes, applying the following:
/// - Replaces `+` with a space
/// - Decodes percent-encoded characters
///
/// Malformed escapes (`%` not followed by two hex digits) are kept as-is.
///
/// Borrows the input when there is nothing to decode.
pub fn decode(input: &[u8]) -> Cow<'_, [u8]> {
    if !input.iter().any(|&b| b == b'+' || b == b'%') {
        return Cow::Borrowed(input);
    }

    let mut decoded = Vec::with_capacity(input.len());
    let mut idx = 0;

    while idx < input.len() {
        match input[idx] {
            b'+' => {
                decoded.push(b' ');
                idx += 1;
            }
            b'%' => {
                let hex = input
                    .get(idx + 1)
                    .and_then(|&h| char_to_digit(h))
                    .zip(input.get(idx + 2).and_then(|&l| char_to_digit(l)));
                match hex {
                    Some((h, l)) => {
                        decoded.push(h * 0x10 + l);
                        idx += 3;
                    }
                    None => {
                        decoded.push(b'%');
                        idx += 1;
                    }
                }
            }
            b => {
                decoded.push(b);
                idx += 1;
            }
        }
    }

    Cow::Owned(decoded)
}

/// Decodes the input and converts it to a string, replacing invalid UTF-8
/// sequences with `U+FFFD`.
pub fn decode_to_string(input: &[u8]) -> String {
    match decode(input) {
        Cow::Borrowed(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        },
    }
}

/// Decodes one key segment.
///
/// In form-encoding mode key segments are escaped twice, so that a `[` inside
/// a key (`%255B`) stays distinct from a structural `%5B`.
pub fn decode_key(input: &[u8], use_form_encoding: bool) -> String {
    if use_form_encoding {
        decode_to_string(&decode(input))
    } else {
        decode_to_string(input)
    }
}
