use logos::{Lexer, Logos, Skip};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    /// Every number in the language is a double.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Value(f64),
    /// `up`
    #[token("up")]
    Up,
    /// `down`
    #[token("down")]
    Down,
    /// `home`
    #[token("home")]
    Home,
    /// `forward`
    #[token("forward")]
    Forward,
    /// `backward`
    #[token("backward")]
    Backward,
    /// `left`
    #[token("left")]
    Left,
    /// `right`
    #[token("right")]
    Right,
    /// `heading`
    #[token("heading")]
    Heading,
    /// `print`
    #[token("print")]
    Print,
    /// `position`
    #[token("position")]
    Position,
    /// `color`
    #[token("color")]
    Color,
    /// `set`
    #[token("set")]
    Set,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `call`
    #[token("call")]
    Call,
    /// `proc`
    #[token("proc")]
    Proc,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `random`
    #[token("random")]
    Random,
    /// Identifier tokens; variable or procedure names such as `x` or
    /// `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines are whitespace here, but each one bumps the line counter.
    #[token("\n", count_newline)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting; incremented as
/// newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid double.
fn parse_number(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Counts a newline and skips it.
fn count_newline(lex: &mut Lexer<Token>) -> Skip {
    lex.extras.line += 1;
    Skip
}
