//! String case helpers

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert camel case to dash case
///
/// Uppercase letters and digits start a new word when they follow a
/// lowercase run, and are lowercased. Leading capitals and runs of capitals
/// do not produce dashes. Other characters are copied and end the word.
///
/// ```rust
/// use valuekit::dasherize;
///
/// assert_eq!(dasherize("fooBarBaz"), "foo-bar-baz");
/// assert_eq!(dasherize("FooBar"), "foo-bar");
/// assert_eq!(dasherize("HTML"), "html");
/// ```
pub fn dasherize(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut within_word = false;
    for c in s.chars() {
        if c.is_lowercase() {
            out.push(c);
            within_word = true;
        } else if c.is_uppercase() || c.is_numeric() {
            if within_word {
                out.push('-');
                within_word = false;
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
            within_word = false;
        }
    }
    out
}

/// Remove every `separator` and uppercase the character after it
///
/// ```rust
/// use valuekit::camelize;
///
/// assert_eq!(camelize("foo-bar-baz", '-'), "fooBarBaz");
/// assert_eq!(camelize("user_id", '_'), "userId");
/// ```
pub fn camelize(input: &str, separator: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == separator {
            if let Some(next) = chars.next() {
                out.extend(next.to_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `camelize` with `-` as separator
pub fn camelize_dashed(input: &str) -> String {
    camelize(input, '-')
}
