/// Compares two labels ignoring case, using full Unicode lowercasing
/// rather than the ASCII-only variant from the standard library.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

pub trait CaseInsensitiveExt {
    fn eq_ignore_case(&self, other: &str) -> bool;
}

impl CaseInsensitiveExt for str {
    fn eq_ignore_case(&self, other: &str) -> bool {
        eq_ignore_case(self, other)
    }
}

impl CaseInsensitiveExt for String {
    fn eq_ignore_case(&self, other: &str) -> bool {
        eq_ignore_case(self, other)
    }
}
