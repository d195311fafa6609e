//! Small text helpers for display.

/// Extract initials from a company name, for the logo fallback badge.
///
/// A single word yields its first two letters; multiple words yield the first
/// letter of the first two words. Always uppercased; an empty or whitespace
/// name yields an empty string.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();

    let Some(first) = words.next() else {
        return String::new();
    };

    match words.next() {
        Some(second) => {
            let mut out = String::new();
            out.extend(first.chars().take(1));
            out.extend(second.chars().take(1));
            out.to_uppercase()
        }
        None => first.chars().take(2).collect::<String>().to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_uses_first_two_letters() {
        assert_eq!(initials("acme"), "AC");
    }

    #[test]
    fn multiple_words_use_first_letters_of_first_two() {
        assert_eq!(initials("Acme Corp"), "AC");
        assert_eq!(initials("northern light trading co"), "NL");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(initials("  acme   corp  "), "AC");
    }

    #[test]
    fn empty_or_blank_yields_empty() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("   "), "");
    }

    #[test]
    fn single_letter_word() {
        assert_eq!(initials("x"), "X");
    }

    #[test]
    fn non_ascii_names() {
        assert_eq!(initials("énergie verte"), "ÉV");
    }
}
