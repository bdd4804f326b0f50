pub const GREETING_PREFIX: &str = "Hello, ";

/// Prepends the greeting to `name`. The input is copied in full; there is no length cap.
pub fn message(name: &str) -> String {
    let mut result = String::with_capacity(GREETING_PREFIX.len() + name.len());
    result.push_str(GREETING_PREFIX);
    result.push_str(name);
    result
}
