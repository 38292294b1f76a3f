use unicode_general_category::{GeneralCategory, get_general_category};

/// Normalizes raw text into a flat sequence of word tokens.
///
/// - Lowercases all characters.
/// - Drops every character that is neither a word character
///   (letter, number, underscore) nor a separator.
/// - Splits on separator runs, keeping the original order.
///
/// Empty input (or input made only of punctuation) yields an empty sequence.
pub fn preprocess(text: &str) -> Vec<String> {
	let cleaned: String = text
		.chars()
		.flat_map(char::to_lowercase)
		.filter(|c| is_word_char(*c) || is_separator(*c))
		.collect();

	split_tokens(&cleaned).map(str::to_owned).collect()
}

/// Counts separator-delimited words before any normalization.
///
/// Used for the raw word count of the training report.
pub fn count_words(text: &str) -> usize {
	split_tokens(text).count()
}

/// Non-empty and free of separators, so it survives a join-then-split.
pub(crate) fn is_single_token(word: &str) -> bool {
	!word.is_empty() && !word.chars().any(is_separator)
}

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
	text.split(is_separator).filter(|token| !token.is_empty())
}

/// Unicode whitespace plus the ASCII information separators (`\x1c`..`\x1f`).
fn is_separator(c: char) -> bool {
	c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Letters (`L*`), numbers (`N*`) and underscore. Combining marks are not
/// word characters.
fn is_word_char(c: char) -> bool {
	use GeneralCategory::*;

	c == '_'
		|| matches!(
			get_general_category(c),
			UppercaseLetter
				| LowercaseLetter
				| TitlecaseLetter
				| ModifierLetter
				| OtherLetter
				| DecimalNumber
				| LetterNumber
				| OtherNumber
		)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::*;

	#[test]
	fn test_preprocess_quote() {
		let tokens = preprocess("To be, or not to be: that is the question!");
		assert_eq!(
			tokens,
			vec!["to", "be", "or", "not", "to", "be", "that", "is", "the", "question"]
		);
	}

	#[rstest(
		text,
		expected,
		case::empty("", vec![]),
		case::only_punctuation(" ,;! ?\n", vec![]),
		case::digits_and_underscore("Act_1 scene 2.", vec!["act_1", "scene", "2"]),
		case::apostrophe_is_stripped("O'er the hill", vec!["oer", "the", "hill"]),
		case::hyphen_joins("well-a-day", vec!["welladay"]),
		case::whitespace_runs("  thee \t\n thou  ", vec!["thee", "thou"]),
		case::unicode_letters("Ça VA, Élise", vec!["ça", "va", "élise"]),
		case::unit_separator("a\u{1f}b", vec!["a", "b"]),
		case::file_separator("act\u{1c}scene\u{1d}\u{1e}line", vec!["act", "scene", "line"]),
		case::combining_marks_stripped(
			"\u{928}\u{92e}\u{938}\u{94d}\u{924}\u{947}",
			vec!["\u{928}\u{92e}\u{938}\u{924}"]
		),
		case::roman_numeral_kept("Henry \u{2167}", vec!["henry", "\u{2177}"])
	)]
	fn test_preprocess_cases(text: &str, expected: Vec<&str>) {
		assert_eq!(preprocess(text), expected);
	}

	#[test]
	fn test_count_words_ignores_normalization() {
		assert_eq!(count_words("To be , or not"), 5);
		assert_eq!(count_words("to\u{1f}be"), 2);
		assert_eq!(count_words(""), 0);
	}

	#[rstest(
		word,
		expected,
		case::plain("thee", true),
		case::empty("", false),
		case::space("of the", false),
		case::separator("of\u{1e}the", false)
	)]
	fn test_is_single_token(word: &str, expected: bool) {
		assert_eq!(is_single_token(word), expected);
	}
}
