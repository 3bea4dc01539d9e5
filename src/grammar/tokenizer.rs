//! Text tokenizer

use unicode_segmentation::UnicodeSegmentation;

use crate::dictionary::DictionaryStore;

/// Token type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Word,
    Punctuation,
    Whitespace,
    Number,
    Unknown,
}

/// Single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub token_type: TokenType,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: String, token_type: TokenType, start: usize, end: usize) -> Self {
        Self {
            text,
            token_type,
            start,
            end,
        }
    }

    /// Words and numbers: the tokens that take a position in a sentence
    pub fn is_taggable(&self) -> bool {
        matches!(self.token_type, TokenType::Word | TokenType::Number)
    }

    pub fn lowercase(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Text tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Splits a text into tokens along Unicode word boundaries.
    /// Contractions ("don't") and decimals ("3.14") stay in one token.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bound_indices()
            .map(|(start, piece)| {
                Token::new(
                    piece.to_string(),
                    classify(piece),
                    start,
                    start + piece.len(),
                )
            })
            .collect()
    }

    /// Taggable tokens of one sentence. Runs of words separated only by
    /// whitespace that form a dictionary phrase ("even if", "whether or not")
    /// are merged into a single token, longest match first.
    pub fn words(&self, text: &str, dictionary: &DictionaryStore) -> Vec<Token> {
        let tokens = self.tokenize(text);
        let taggable: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_taggable())
            .map(|(i, _)| i)
            .collect();

        let max_phrase = dictionary.phrase_len();
        let mut words = Vec::with_capacity(taggable.len());
        let mut i = 0;

        while i < taggable.len() {
            let longest = max_phrase.min(taggable.len() - i);
            let phrase_len = (2..=longest).rev().find(|&n| {
                let run = &taggable[i..i + n];
                only_whitespace_between(&tokens, run)
                    && dictionary.contains_phrase(&joined(&tokens, run))
            });

            match phrase_len {
                Some(n) => {
                    let first = &tokens[taggable[i]];
                    let last = &tokens[taggable[i + n - 1]];
                    words.push(Token::new(
                        text[first.start..last.end].to_string(),
                        TokenType::Word,
                        first.start,
                        last.end,
                    ));
                    i += n;
                }
                None => {
                    words.push(tokens[taggable[i]].clone());
                    i += 1;
                }
            }
        }

        words
    }

    /// Rebuilds the text from its tokens
    pub fn reconstruct(&self, tokens: &[Token]) -> String {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

fn classify(piece: &str) -> TokenType {
    let mut chars = piece.chars();
    let Some(first) = chars.next() else {
        return TokenType::Unknown;
    };

    if piece.chars().all(char::is_whitespace) {
        TokenType::Whitespace
    } else if piece.chars().any(char::is_alphabetic) {
        TokenType::Word
    } else if first.is_numeric() {
        TokenType::Number
    } else if piece.chars().all(is_punctuation) {
        TokenType::Punctuation
    } else {
        TokenType::Unknown
    }
}

fn only_whitespace_between(tokens: &[Token], run: &[usize]) -> bool {
    run.windows(2).all(|pair| {
        tokens[pair[0] + 1..pair[1]]
            .iter()
            .all(|t| t.token_type == TokenType::Whitespace)
    })
}

fn joined(tokens: &[Token], run: &[usize]) -> String {
    run.iter()
        .map(|&k| tokens[k].text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_punctuation(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | ';' | ':' | '!' | '?' | '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}'
            | '-' | '—' | '–' | '…' | '“' | '”' | '‘' | '’'
    )
}
