use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A single classified piece of source text.
///
/// `line` and `column` are the lexer's cursor at the moment the token was
/// built. For single-character tokens that is the character itself, but for
/// identifiers and numbers it is the first character after the lexeme, and
/// for strings it is the closing quote. Diagnostics that need the start of a
/// lexeme cannot rely on these fields yet.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    pub kind: Kind,
    pub literal: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: Kind, literal: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == Kind::EOF
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Kind {
    Illegal,
    EOF,

    // Identifiers and literals
    Ident,       // add, foobar, x, y
    Int,         // 1343456
    String,      // "foo bar"

    // Operators
    Assign,      // =
    Plus,        // +
    Minus,       // -
    Bang,        // !
    Asterisk,    // *
    Slash,       // /
    Lt,          // <
    Gt,          // >
    Eq,          // ==
    NotEq,       // !=

    // Delimiters
    Comma,       // ,
    Semicolon,   // ;
    LParen,      // (
    RParen,      // )
    LBrace,      // {
    RBrace,      // }

    // Keywords
    Function,    // fn
    Let,         // let
    True,        // true
    False,       // false
    If,          // if
    Else,        // else
    Return,      // return
}

impl Kind {
    /// Display name used by the REPL and the `lex` command.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Illegal => "ILLEGAL",
            Kind::EOF => "EOF",
            Kind::Ident => "IDENT",
            Kind::Int => "INT",
            Kind::String => "STRING",
            Kind::Assign => "=",
            Kind::Plus => "+",
            Kind::Minus => "-",
            Kind::Bang => "!",
            Kind::Asterisk => "*",
            Kind::Slash => "/",
            Kind::Lt => "<",
            Kind::Gt => ">",
            Kind::Eq => "==",
            Kind::NotEq => "!=",
            Kind::Comma => ",",
            Kind::Semicolon => ";",
            Kind::LParen => "(",
            Kind::RParen => ")",
            Kind::LBrace => "{",
            Kind::RBrace => "}",
            Kind::Function => "FUNCTION",
            Kind::Let => "LET",
            Kind::True => "TRUE",
            Kind::False => "FALSE",
            Kind::If => "IF",
            Kind::Else => "ELSE",
            Kind::Return => "RETURN",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Kind::Function
                | Kind::Let
                | Kind::True
                | Kind::False
                | Kind::If
                | Kind::Else
                | Kind::Return
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

// JSON output names kinds the same way the text output does.
impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

const KEYWORDS: [(&str, Kind); 7] = [
    ("fn", Kind::Function),
    ("let", Kind::Let),
    ("true", Kind::True),
    ("false", Kind::False),
    ("if", Kind::If),
    ("else", Kind::Else),
    ("return", Kind::Return),
];

fn keywords() -> &'static HashMap<&'static str, Kind> {
    static TABLE: OnceLock<HashMap<&'static str, Kind>> = OnceLock::new();
    TABLE.get_or_init(|| KEYWORDS.into_iter().collect())
}

/// Classifies a scanned word as a keyword or a plain identifier.
pub fn lookup_ident(ident: &str) -> Kind {
    keywords().get(ident).copied().unwrap_or(Kind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_map_to_keyword_kinds() {
        for (word, kind) in KEYWORDS {
            assert_eq!(lookup_ident(word), kind);
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn other_words_are_identifiers() {
        assert_eq!(lookup_ident("x"), Kind::Ident);
        assert_eq!(lookup_ident("letter"), Kind::Ident);
        assert_eq!(lookup_ident("Let"), Kind::Ident);
        assert_eq!(lookup_ident("_"), Kind::Ident);
        assert_eq!(lookup_ident(""), Kind::Ident);
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(Kind::Ident.to_string(), "IDENT");
        assert_eq!(Kind::NotEq.to_string(), "!=");
        assert_eq!(Kind::Let.to_string(), "LET");
        assert!(!Kind::Ident.is_keyword());
    }

    #[test]
    fn token_serializes_as_json_object() {
        let token = Token::new(Kind::Int, "5", 1, 9);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"INT","literal":"5","line":1,"column":9}"#);
    }

    #[test]
    fn json_kind_matches_display_name() {
        for kind in [Kind::LParen, Kind::NotEq, Kind::Eq, Kind::EOF, Kind::Function] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind));
        }
        assert_eq!(serde_json::to_string(&Kind::LParen).unwrap(), r#""(""#);
    }
}
