use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    ///
    /// The raw text is kept verbatim; the reader parses it so that
    /// out-of-range literals surface as error values rather than lexer
    /// failures.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator and identifier tokens, such as `+`, `/` or `min`.
    ///
    /// Identifiers that name no builtin operator still lex as symbols; they
    /// survive evaluation as themselves unless an operator is applied to
    /// them.
    #[regex(r"[+\-*/^]", |lex| lex.slice().to_string())]
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `; Comments.`
    #[regex(r";[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines; skipped, but tracked for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}
