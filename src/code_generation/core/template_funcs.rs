/// A named pure string transform callable from templates
pub type TemplateFunc = fn(&str) -> String;

/// Functions available to every template, looked up by name
pub const TEMPLATE_FUNCS: &[(&str, TemplateFunc)] = &[
    ("title", title),
];

/// Upper-case the first letter of every word.
///
/// A word starts after any character that is not a letter, digit or underscore,
/// so `foo_bar` stays one word while `foo-bar` becomes `Foo-Bar`.
pub fn title(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev_is_separator = true;

    for c in input.chars() {
        if prev_is_separator {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev_is_separator = is_separator(c);
    }

    result
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else if c.is_alphanumeric() {
        false
    } else {
        c.is_whitespace()
    }
}
