use percent_encoding::AsciiSet;

/// Based on https://url.spec.whatwg.org/#query-percent-encode-set
///
/// The set of characters that need to be encoded in a _query_ string
/// are:
/// - CONTROL characters
/// - U+0022 ("), U+0023 (#), U+003C (<), and U+003E (>).
///
/// Space is left alone here and written as `+` afterwards.
///
/// NOTE: we add our querystring-specific characters here
/// because the encode method is only every called on
/// keys and values. This means that we _do_ want them to
/// be percent-encoded here.
const MINIMAL_QS_SET: &AsciiSet = &percent_encoding::CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    // `%` would otherwise be read back as the start of an escape
    .add(b'%')
    // `+` is used to represent a space in query strings
    .add(b'+')
    // denote nested keys
    .add(b'[')
    .add(b']')
    // key, value separator
    .add(b'=')
    // denote key-value pairs
    .add(b'&');

/// As defined in https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
///
/// The application/x-www-form-urlencoded percent-encode set contains all code
/// points, except the ASCII alphanumeric, U+002A (*), U+002D (-), U+002E (.),
/// and U+005F (_).
///
/// Space is removed so that it can be written as `+`.
const FORM_URLENCODED_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Percent-encodes `input` for use as a querystring key segment or value,
/// appending the result to `output`.
///
/// ## Query-String Encoding (default)
/// Uses the minimal WHATWG query percent-encode set plus the characters that
/// carry structure in a querystring (`[`, `]`, `=`, `&`, `+`, `%`).
///
/// ## Form Encoding
/// Uses the stricter `application/x-www-form-urlencoded` set.
///
/// In both modes spaces are written as `+`.
pub fn encode_into(output: &mut String, input: &str, use_form_encoding: bool) {
    let set = if use_form_encoding {
        FORM_URLENCODED_SET
    } else {
        MINIMAL_QS_SET
    };
    for chunk in percent_encoding::utf8_percent_encode(input, set) {
        if chunk.contains(' ') {
            output.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
        } else {
            output.push_str(chunk);
        }
    }
}
