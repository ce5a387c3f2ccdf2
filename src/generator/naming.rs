/// Upper-case the first character: `user` → `User`.
///
/// Model names are already PascalCase in practice, so this only fixes up
/// lower-case input.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(to_class_name("blogPost"), "BlogPost");
/// ```
pub fn to_class_name(model_name: &str) -> String {
    let mut chars = model_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower-case the first character: `BlogPost` → `blogPost`.
///
/// Used for service property names and the Prisma client accessor.
pub fn to_file_name(model_name: &str) -> String {
    let mut chars = model_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert to kebab-case: `BlogPost` → `blog-post`, `HTTPServer` → `http-server`.
///
/// A dash goes before an upper-case letter that follows a lower-case letter
/// or digit, and before the last capital of an acronym that starts a word.
pub fn to_kebab_case(model_name: &str) -> String {
    let chars: Vec<char> = model_name.chars().collect();
    let mut out = String::with_capacity(model_name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}
