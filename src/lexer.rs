use std::path::Path;
use crate::error::LexingError;
use crate::token::{lookup_ident, Kind, Token};

/// What the character under the cursor can start.
#[derive(Debug, PartialEq, Clone, Copy)]
enum CharClass {
    Single(Kind),
    Equals,
    Bang,
    Quote,
    IdentStart,
    Digit,
    End,
    Other,
}

fn classify(ch: char) -> CharClass {
    match ch {
        '+' => CharClass::Single(Kind::Plus),
        '-' => CharClass::Single(Kind::Minus),
        '*' => CharClass::Single(Kind::Asterisk),
        '/' => CharClass::Single(Kind::Slash),
        '<' => CharClass::Single(Kind::Lt),
        '>' => CharClass::Single(Kind::Gt),
        ',' => CharClass::Single(Kind::Comma),
        ';' => CharClass::Single(Kind::Semicolon),
        '(' => CharClass::Single(Kind::LParen),
        ')' => CharClass::Single(Kind::RParen),
        '{' => CharClass::Single(Kind::LBrace),
        '}' => CharClass::Single(Kind::RBrace),
        '=' => CharClass::Equals,
        '!' => CharClass::Bang,
        '"' => CharClass::Quote,
        c if is_letter(c) => CharClass::IdentStart,
        c if is_digit(c) => CharClass::Digit,
        _ => CharClass::Other,
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

/// Pull-based scanner over a complete source string.
///
/// Each call to [`Lexer::next_token`] yields exactly one token. Once the
/// input is exhausted every further call yields [`Kind::EOF`] with an empty
/// literal.
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    fn is_eof(&self) -> bool {
        self.position >= self.chars.len()
    }

    // Line and column follow the character that was just read, so arriving
    // on a newline already counts as the next line.
    fn read_char(&mut self) {
        self.ch = self.chars.get(self.read_position).copied().unwrap_or('\0');
        self.position = self.read_position;
        self.read_position += 1;

        if self.ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn peek_char(&self) -> char {
        self.chars.get(self.read_position).copied().unwrap_or('\0')
    }

    fn current_class(&self) -> CharClass {
        if self.is_eof() {
            CharClass::End
        } else {
            classify(self.ch)
        }
    }

    fn create_token(&self, kind: Kind, literal: impl Into<String>) -> Token {
        Token::new(kind, literal, self.line, self.column)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.current_class() {
            CharClass::Single(kind) => self.create_token(kind, self.ch),
            CharClass::Equals => self.one_or_two(Kind::Assign, Kind::Eq),
            CharClass::Bang => self.one_or_two(Kind::Bang, Kind::NotEq),
            CharClass::Quote => {
                let literal = self.read_string();
                self.create_token(Kind::String, literal)
            }
            CharClass::IdentStart => {
                let literal = self.read_identifier();
                let token = self.create_token(lookup_ident(&literal), literal);
                tracing::trace!(kind = %token.kind, literal = %token.literal, "scanned word");
                return token;
            }
            CharClass::Digit => {
                let literal = self.read_number();
                let token = self.create_token(Kind::Int, literal);
                tracing::trace!(literal = %token.literal, "scanned number");
                return token;
            }
            CharClass::End => self.create_token(Kind::EOF, ""),
            CharClass::Other => self.create_token(Kind::Illegal, self.ch),
        };

        tracing::trace!(
            kind = %token.kind,
            literal = %token.literal,
            line = token.line,
            column = token.column,
            "scanned token"
        );
        self.read_char();
        token
    }

    /// Scans the whole input, end-of-input token included.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    // `=` and `!` become `==` and `!=` when an `=` follows.
    fn one_or_two(&mut self, single: Kind, double: Kind) -> Token {
        if self.peek_char() == '=' {
            let first = self.ch;
            self.read_char();
            let literal: String = [first, self.ch].iter().collect();
            self.create_token(double, literal)
        } else {
            self.create_token(single, self.ch)
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while !self.is_eof() && (is_letter(self.ch) || is_digit(self.ch)) {
            self.read_char();
        }
        self.slice(start)
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while !self.is_eof() && is_digit(self.ch) {
            self.read_char();
        }
        self.slice(start)
    }

    // No escapes; an unterminated string runs to the end of input.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.ch == '"' || self.is_eof() {
                break;
            }
        }
        self.slice(start)
    }

    fn slice(&self, start: usize) -> String {
        let end = self.position.min(self.chars.len());
        self.chars[start..end].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_eof() && is_whitespace(self.ch) {
            self.read_char();
        }
    }
}

/// Yields tokens up to, but not including, end-of-input.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Rejects the first illegal token. Used by callers that want lexical errors
/// reported instead of carried through as tokens.
pub fn check_tokens(path: &Path, tokens: &[Token]) -> Result<(), LexingError> {
    match tokens.iter().find(|token| token.kind == Kind::Illegal) {
        Some(token) => Err(LexingError::from_token(
            path.to_path_buf(),
            token,
            format!("Unrecognized character {}", token.literal),
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(input: &str) -> Vec<(Kind, String, usize, usize)> {
        Lexer::new(input)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.literal, t.line, t.column))
            .collect()
    }

    fn tok(kind: Kind, literal: &str, line: usize, column: usize) -> (Kind, String, usize, usize) {
        (kind, literal.to_string(), line, column)
    }

    #[test]
    fn classify_covers_every_punctuation() {
        assert_eq!(classify('+'), CharClass::Single(Kind::Plus));
        assert_eq!(classify('}'), CharClass::Single(Kind::RBrace));
        assert_eq!(classify('='), CharClass::Equals);
        assert_eq!(classify('!'), CharClass::Bang);
        assert_eq!(classify('"'), CharClass::Quote);
        assert_eq!(classify('_'), CharClass::IdentStart);
        assert_eq!(classify('7'), CharClass::Digit);
        assert_eq!(classify('@'), CharClass::Other);
        assert_eq!(classify('é'), CharClass::Other);
    }

    #[test]
    fn new_primes_first_character() {
        let lexer = Lexer::new("abc");
        assert_eq!(lexer.ch, 'a');
        assert_eq!(lexer.line, 1);
        assert_eq!(lexer.column, 1);

        let empty = Lexer::new("");
        assert!(empty.is_eof());
        assert_eq!(empty.ch, '\0');
    }

    #[test]
    fn peek_does_not_consume() {
        let lexer = Lexer::new("!=");
        assert_eq!(lexer.peek_char(), '=');
        assert_eq!(lexer.ch, '!');
        assert_eq!(lexer.position, 0);
    }

    #[test]
    fn positions_follow_the_cursor() {
        assert_eq!(
            positions("let x = 5;"),
            vec![
                tok(Kind::Let, "let", 1, 4),
                tok(Kind::Ident, "x", 1, 6),
                tok(Kind::Assign, "=", 1, 7),
                tok(Kind::Int, "5", 1, 10),
                tok(Kind::Semicolon, ";", 1, 10),
                tok(Kind::EOF, "", 1, 11),
            ]
        );
    }

    #[test]
    fn two_char_operator_reports_its_second_character() {
        assert_eq!(
            positions("=="),
            vec![tok(Kind::Eq, "==", 1, 2), tok(Kind::EOF, "", 1, 3)]
        );
    }

    #[test]
    fn string_reports_closing_quote() {
        assert_eq!(
            positions("\"hello\""),
            vec![tok(Kind::String, "hello", 1, 7), tok(Kind::EOF, "", 1, 8)]
        );
        assert_eq!(
            positions("\"abc"),
            vec![tok(Kind::String, "abc", 1, 5), tok(Kind::EOF, "", 1, 6)]
        );
    }

    #[test]
    fn newline_right_after_a_word_is_already_counted() {
        assert_eq!(
            positions("a\nb"),
            vec![
                tok(Kind::Ident, "a", 2, 0),
                tok(Kind::Ident, "b", 2, 2),
                tok(Kind::EOF, "", 2, 2),
            ]
        );
    }

    #[test]
    fn eof_column_keeps_advancing() {
        let mut lexer = Lexer::new("");
        let first = lexer.next_token();
        let second = lexer.next_token();
        assert_eq!((first.kind, first.column), (Kind::EOF, 1));
        assert_eq!((second.kind, second.column), (Kind::EOF, 2));
    }

    #[test]
    fn nul_inside_input_is_illegal_not_eof() {
        assert_eq!(
            positions("a\0b")
                .into_iter()
                .map(|(kind, literal, ..)| (kind, literal))
                .collect::<Vec<_>>(),
            vec![
                (Kind::Ident, "a".to_string()),
                (Kind::Illegal, "\0".to_string()),
                (Kind::Ident, "b".to_string()),
                (Kind::EOF, String::new()),
            ]
        );
    }

    #[test]
    fn check_tokens_reports_first_illegal() {
        let tokens = Lexer::new("let a = 1 @ #").tokenize();
        let err = check_tokens(Path::new("x.my"), &tokens).unwrap_err();
        assert_eq!(err.message, "Unrecognized character @");
        assert_eq!((err.line(), err.column()), (1, 11));

        let clean = Lexer::new("let a = 1;").tokenize();
        assert!(check_tokens(Path::new("x.my"), &clean).is_ok());
    }
}
