/// Decode the small entity subset that markup assigned through `innerHTML` realistically uses.
///
/// - Named: `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`.
/// - Numeric, only when semicolon-terminated and a valid Unicode scalar: `&#215;`, `&#xD7;`.
/// - Anything else (unknown names, missing `;`, malformed or out-of-range numbers) is kept verbatim.
pub(crate) fn decode_entities(s: &str) -> String {
    const NAMED: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&nbsp;", '\u{00A0}'),
    ];
    const MAX_HEX_DIGITS: usize = 6;
    const MAX_DEC_DIGITS: usize = 7;

    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        if let Some((pat, ch)) = NAMED.iter().find(|(pat, _)| rest.starts_with(pat)) {
            out.push(*ch);
            rest = &rest[pat.len()..];
            continue;
        }

        let numeric = if rest.starts_with("&#x") || rest.starts_with("&#X") {
            Some((3, 16, MAX_HEX_DIGITS))
        } else if rest.starts_with("&#") {
            Some((2, 10, MAX_DEC_DIGITS))
        } else {
            None
        };

        if let Some((prefix, radix, max_digits)) = numeric {
            if let Some(end) = numeric_end(rest.as_bytes(), prefix, max_digits, radix == 16) {
                if let Some(ch) = u32::from_str_radix(&rest[prefix..end], radix)
                    .ok()
                    .and_then(char::from_u32)
                {
                    out.push(ch);
                } else {
                    out.push_str(&rest[..=end]);
                }
                rest = &rest[end + 1..];
                continue;
            }
        }

        out.push('&');
        rest = &rest[1..];
    }

    out.push_str(rest);
    out
}

/// Position of the terminating `;` of a numeric entity whose digits start at `start`.
fn numeric_end(bytes: &[u8], start: usize, max_digits: usize, hex: bool) -> Option<usize> {
    let mut digits = 0usize;
    for (offset, &b) in bytes[start..].iter().enumerate() {
        if b == b';' {
            return (digits > 0).then_some(start + offset);
        }
        let ok = if hex {
            b.is_ascii_hexdigit()
        } else {
            b.is_ascii_digit()
        };
        if !ok || digits == max_digits {
            return None;
        }
        digits += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("&quot;hi&apos;"), "\"hi'");
        assert_eq!(decode_entities("a&nbsp;b"), "a\u{00A0}b");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(decode_entities("&#215;"), "×");
        assert_eq!(decode_entities("&#xD7;&#XD7;"), "××");
        assert_eq!(decode_entities("&#1114111;"), "\u{10FFFF}");
    }

    #[test]
    fn keeps_unknown_and_malformed_sequences() {
        assert_eq!(decode_entities("&bogus; &amp"), "&bogus; &amp");
        assert_eq!(decode_entities("&#xZZ;&amp;"), "&#xZZ;&");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#11141111;"), "&#11141111;");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("π &"), "π &");
    }
}
