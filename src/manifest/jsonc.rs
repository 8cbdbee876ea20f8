//! Comment stripping for JSON-with-comments manifests.

/// Strip `//` line comments and `/* */` block comments from JSONC text.
///
/// String literals are respected: comment markers inside a quoted string
/// are left alone, and escapes inside strings are honored so an escaped
/// quote does not end the string early. Comment bytes are replaced rather
/// than removed only where needed to keep the result valid JSON.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                '\\' => {
                    // Keep the escaped character verbatim.
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    // Line comment: drop everything up to the newline.
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                Some('*') => {
                    chars.next();
                    // Block comment: drop up to `*/`, keeping newlines so
                    // parse error positions stay meaningful.
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                        }
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => out.push(ch),
            },
            _ => out.push(ch),
        }
    }

    out
}
