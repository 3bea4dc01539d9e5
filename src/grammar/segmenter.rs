//! Sentence segmentation
//!
//! Splits text after `.`, `?` and `!`. Terminal marks inside a quotation do
//! not end the sentence, except when the quotation itself closes right
//! after the mark and a new sentence starts next:
//!
//! - `He said "Stop! Now." and left.` is one sentence
//! - `"Stop!" He ran.` is two sentences
//!
//! A `"` right after a digit is an inch mark (`5" wide`), and a quotation
//! left open at the end of the text does not hold any marks.

const TERMINAL_MARKS: &[char] = &['.', '?', '!'];
const CLOSING_BRACKETS: &[char] = &[')', ']', '}'];
const TRAILING_CLOSERS: &[char] = &['"', '”', '’', '\'', ')', ']', '}'];

/// Sentence segmenter
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily yields the trimmed sentences of `text`, in order. Segments
    /// without any letter or digit (stray punctuation) are skipped. The
    /// iterator is `Clone`, so a sequence can be restarted from any point.
    pub fn segment<'a>(&self, text: &'a str) -> Sentences<'a> {
        Sentences { text, pos: 0 }
    }
}

/// Iterator over the sentences of a text
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let rest = &self.text[self.pos..];
            let end = boundary(rest);
            self.pos += end;

            let sentence = rest[..end].trim();
            if sentence.chars().any(char::is_alphanumeric) {
                return Some(sentence);
            }
        }
        None
    }
}

/// Quotation state while scanning a sentence
#[derive(Debug, Default)]
struct Quotes {
    straight_open: bool,
    curly_depth: usize,
    /// Offset of the quote that opened the current quotation
    opened_at: Option<usize>,
}

impl Quotes {
    fn inside(&self) -> bool {
        self.straight_open || self.curly_depth > 0
    }

    fn update(&mut self, offset: usize, ch: char) {
        let was_inside = self.inside();
        match ch {
            '"' => self.straight_open = !self.straight_open,
            '“' => self.curly_depth += 1,
            '”' => self.curly_depth = self.curly_depth.saturating_sub(1),
            _ => return,
        }
        if !was_inside && self.inside() {
            self.opened_at = Some(offset);
        } else if !self.inside() {
            self.opened_at = None;
        }
    }

    fn closes(&self, ch: char) -> bool {
        (ch == '"' && self.straight_open) || (ch == '”' && self.curly_depth > 0)
    }
}

/// Outcome of one scan over the text
enum Scan {
    /// Byte offset where the sentence ends (exclusive)
    End(usize),
    /// The text ended inside a quotation that swallowed terminal marks;
    /// holds the offset of the opening quote
    Unclosed(usize),
}

/// Byte offset where the first sentence of `text` ends (exclusive).
///
/// A quotation that is never closed ("5\" wide", a stray `"`) would hold
/// every later mark, so its opening quote is rescanned as a plain character.
fn boundary(text: &str) -> usize {
    let mut literal = Vec::new();
    loop {
        match scan(text, &literal) {
            Scan::End(offset) => return offset,
            Scan::Unclosed(quote) => literal.push(quote),
        }
    }
}

fn scan(text: &str, literal: &[usize]) -> Scan {
    let mut quotes = Quotes::default();
    let mut held = false;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !TERMINAL_MARKS.contains(&ch) {
            if !literal.contains(&i) && !is_inch_mark(ch, prev, &quotes) {
                quotes.update(i, ch);
                if !quotes.inside() {
                    held = false;
                }
            }
            prev = Some(ch);
            continue;
        }

        let next = chars.peek().map(|&(_, c)| c);
        if ch == '.' && is_decimal_point(prev, next) {
            prev = Some(ch);
            continue;
        }

        let mut end = i + ch.len_utf8();
        prev = Some(ch);
        while let Some(&(j, c)) = chars.peek() {
            if !TERMINAL_MARKS.contains(&c) {
                break;
            }
            end = j + c.len_utf8();
            prev = Some(c);
            chars.next();
        }

        if quotes.inside() {
            if let Some(&(j, c)) = chars.peek() {
                if quotes.closes(c) && !literal.contains(&j) {
                    chars.next();
                    quotes.update(j, c);
                    prev = Some(c);
                    let after = j + c.len_utf8();
                    if !quotes.inside() {
                        held = false;
                        if starts_new_sentence(&text[after..]) {
                            return Scan::End(after);
                        }
                    }
                }
            }
            if quotes.inside() {
                held = true;
            }
            continue;
        }

        while let Some(&(j, c)) = chars.peek() {
            if !CLOSING_BRACKETS.contains(&c) {
                break;
            }
            end = j + c.len_utf8();
            chars.next();
        }
        return Scan::End(end);
    }

    match quotes.opened_at {
        Some(quote) if held => Scan::Unclosed(quote),
        _ => Scan::End(text.len()),
    }
}

/// A straight quote right after a digit outside any quotation: `5" wide`
fn is_inch_mark(ch: char, prev: Option<char>, quotes: &Quotes) -> bool {
    ch == '"' && !quotes.straight_open && prev.map_or(false, |c| c.is_ascii_digit())
}

fn is_decimal_point(before: Option<char>, after: Option<char>) -> bool {
    matches!((before, after), (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit())
}

/// Whether the next non-space character of `rest` opens a new sentence
fn starts_new_sentence(rest: &str) -> bool {
    match rest.chars().find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => c.is_uppercase() || c == '"' || c == '“',
    }
}

/// Terminal mark of a sentence, ignoring trailing quotes and brackets
pub fn terminal_punctuation(sentence: &str) -> Option<char> {
    sentence
        .trim_end()
        .trim_end_matches(|c: char| TRAILING_CLOSERS.contains(&c) || c.is_whitespace())
        .chars()
        .last()
        .filter(|c| TERMINAL_MARKS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<&str> {
        Segmenter::new().segment(text).collect()
    }

    #[test]
    fn test_three_sentences() {
        assert_eq!(
            segment("I am hungry. Where is the food? Eat now!"),
            vec!["I am hungry.", "Where is the food?", "Eat now!"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t").is_empty());
    }

    #[test]
    fn test_trailing_fragment_is_emitted() {
        assert_eq!(segment("Stop. Then go"), vec!["Stop.", "Then go"]);
    }

    #[test]
    fn test_repeated_punctuation_is_dropped() {
        assert_eq!(segment("Really?!  ... Yes."), vec!["Really?!", "Yes."]);
        assert_eq!(segment("Wait... what?"), vec!["Wait...", "what?"]);
    }

    #[test]
    fn test_quoted_terminal_marks_do_not_split() {
        assert_eq!(
            segment("He said \"Stop! Now.\" and left. Then he ran."),
            vec!["He said \"Stop! Now.\" and left.", "Then he ran."]
        );
    }

    #[test]
    fn test_quote_closing_after_terminal_mark_splits() {
        assert_eq!(
            segment("\"Stop!\" He ran."),
            vec!["\"Stop!\"", "He ran."]
        );
        assert_eq!(
            segment("She asked “Are you hungry?” Nobody answered."),
            vec!["She asked “Are you hungry?”", "Nobody answered."]
        );
    }

    #[test]
    fn test_inch_mark_is_not_a_quote() {
        assert_eq!(
            segment("The screen is 5\" wide. Buy it now. Eat food!"),
            vec!["The screen is 5\" wide.", "Buy it now.", "Eat food!"]
        );
    }

    #[test]
    fn test_unclosed_quote_does_not_swallow_the_text() {
        assert_eq!(
            segment("He said \"stop. Then go. Eat now!"),
            vec!["He said \"stop.", "Then go.", "Eat now!"]
        );
        assert_eq!(
            segment("She wrote “maybe. It rained."),
            vec!["She wrote “maybe.", "It rained."]
        );
    }

    #[test]
    fn test_quote_spanning_sentences_still_holds() {
        assert_eq!(
            segment("He said \"Go. Now.\" and left. Fine."),
            vec!["He said \"Go. Now.\" and left.", "Fine."]
        );
    }

    #[test]
    fn test_long_text_segments_every_sentence() {
        let text = "I am hungry. ".repeat(5000);
        let mut sentences = Segmenter::new().segment(&text);
        assert_eq!(sentences.clone().count(), 5000);
        assert!(sentences.all(|s| s == "I am hungry."));
    }

    #[test]
    fn test_decimal_point_does_not_split() {
        assert_eq!(segment("Pay 3.50 now. Thanks."), vec!["Pay 3.50 now.", "Thanks."]);
    }

    #[test]
    fn test_closing_bracket_stays_with_sentence() {
        assert_eq!(segment("(Eat now.) Go."), vec!["(Eat now.)", "Go."]);
    }

    #[test]
    fn test_restartable() {
        let sentences = Segmenter::new().segment("One. Two.");
        let first: Vec<&str> = sentences.clone().collect();
        let second: Vec<&str> = sentences.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_terminal_punctuation() {
        assert_eq!(terminal_punctuation("Are you hungry?"), Some('?'));
        assert_eq!(terminal_punctuation("She asked “why?”"), Some('?'));
        assert_eq!(terminal_punctuation("Eat now!  "), Some('!'));
        assert_eq!(terminal_punctuation("no mark"), None);
        assert_eq!(terminal_punctuation(""), None);
    }
}
