#![doc = include_str!("../README.md")]

use std::fmt::Debug;

/// A symbolic expression: the fundamental data structure for representing structured data.
///
/// S-expressions provide a uniform representation for both code and data, enabling
/// homoiconic transformations where programs can manipulate other programs as data.
///
/// # Examples
///
/// ```
/// use handled::SExpr;
///
/// // An atom representing a symbol
/// let symbol = SExpr::Atom("hello".to_string());
///
/// // A list representing a function call
/// let call = SExpr::List(vec![
///     SExpr::Atom("add".to_string()),
///     SExpr::Atom("1".to_string()),
///     SExpr::Atom("2".to_string()),
/// ]);
/// assert_eq!(call.to_string(), "(add 1 2)");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum SExpr {
    /// An atomic value: a symbol, number, string, or other indivisible token.
    Atom(String),
    /// A list of S-expressions, where the first element conventionally names the form.
    List(Vec<SExpr>),
}

impl std::fmt::Display for SExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SExpr::Atom(s) => write!(f, "{}", s),
            SExpr::List(l) => {
                write!(f, "(")?;
                for (i, expr) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", expr)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A recursive descent parser for S-expressions.
///
/// Transforms a string representation into an [`SExpr`] abstract syntax tree.
/// The parser handles atoms, quoted strings with escape sequences, nested lists,
/// and the quote shorthand (`'expr` â†’ `(quote expr)`).
///
/// # Examples
///
/// ```
/// use handled::parse;
///
/// let expr = parse("(doc (h1 \"Hello\"))").unwrap();
/// assert_eq!(expr.to_string(), "(doc (h1 \"Hello\"))");
/// ```
pub fn parse(input: &str) -> SResult<SExpr> {
    Parser::new(input).parse()
}

struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input string.
    pub fn new(input: &'a str) -> Self {
        Parser {
            input,
            chars: input.char_indices().peekable(),
            position: 0,
        }
    }

    /// Parses the input and returns the resulting S-expression.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains:
    /// - Unclosed lists (missing `)`)
    /// - Unclosed quoted strings (missing `"`)
    /// - Unexpected end of input
    pub fn parse(&mut self) -> SResult<SExpr> {
        self.consume_whitespace();
        match self.peek_char() {
            Some('\'') => self.parse_quoted(),
            Some('(') => self.parse_list(),
            Some('"') => self.parse_quoted_string(),
            Some(_) => self.parse_atom(),
            None => Err(SError::new("parse")
                .with_code("unexpected-eof")
                .with_message("Unexpected end of input")
                .with_atom_field("position", self.position)),
        }
    }

    fn parse_quoted(&mut self) -> SResult<SExpr> {
        self.next_char(); // consume the '
        let expr = self.parse()?;
        Ok(SExpr::List(vec![SExpr::Atom("quote".to_string()), expr]))
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((idx, ch)) = self.chars.next() {
            self.position = idx + ch.len_utf8();
            Some(ch)
        } else {
            None
        }
    }

    fn consume_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn parse_list(&mut self) -> SResult<SExpr> {
        let start_position = self.position;
        self.next_char(); // consume '('
        let mut list = Vec::new();
        loop {
            self.consume_whitespace();
            match self.peek_char() {
                Some(')') => {
                    self.next_char();
                    return Ok(SExpr::List(list));
                }
                Some(_) => {
                    list.push(self.parse()?);
                }
                None => {
                    return Err(SError::new("parse")
                        .with_code("unclosed-list")
                        .with_message("Unclosed list: expected ')' but reached end of input")
                        .with_atom_field("start_position", start_position)
                        .with_atom_field("current_position", self.position)
                        .with_atom_field("list_elements_parsed", list.len()));
                }
            }
        }
    }

    fn parse_quoted_string(&mut self) -> SResult<SExpr> {
        let start_position = self.position;
        self.next_char(); // consume opening '"'
        let mut result = String::from("\"");

        loop {
            match self.peek_char() {
                None => {
                    return Err(SError::new("parse")
                        .with_code("unclosed-string")
                        .with_message(
                            "Unclosed quoted string: expected '\"' but reached end of input",
                        )
                        .with_atom_field("start_position", start_position)
                        .with_atom_field("current_position", self.position));
                }
                Some('\\') => {
                    self.next_char(); // consume '\'
                    match self.peek_char() {
                        Some(ch) => {
                            result.push('\\');
                            result.push(ch);
                            self.next_char();
                        }
                        None => {
                            return Err(SError::new("parse")
                                .with_code("unclosed-string")
                                .with_message("Unclosed quoted string: escape at end of input")
                                .with_atom_field("start_position", start_position)
                                .with_atom_field("current_position", self.position));
                        }
                    }
                }
                Some('"') => {
                    result.push('"');
                    self.next_char(); // consume closing '"'
                    return Ok(SExpr::Atom(result));
                }
                Some(ch) => {
                    result.push(ch);
                    self.next_char();
                }
            }
        }
    }

    fn parse_atom(&mut self) -> SResult<SExpr> {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_whitespace() || ch == '(' || ch == ')' {
                break;
            }
            self.next_char();
        }
        let end = self.position;
        Ok(SExpr::Atom(self.input[start..end].to_string()))
    }
}

////////////////////////////////////////////// SError //////////////////////////////////////////////

pub type SResult<T> = Result<T, SError>;

#[derive(Debug, Clone, PartialEq)]
pub struct SError {
    detail: SExpr,
}

impl SError {
    /// Builds a new error anchored to a specific phase of processing.
    pub fn new(phase: &str) -> Self {
        SError {
            detail: SExpr::List(vec![
                SExpr::Atom("error".to_string()),
                field("phase", atom(phase)),
            ]),
        }
    }

    /// Annotates the error with a machine-readable code.
    pub fn with_code(self, code: &str) -> Self {
        self.with_field("code", atom(code))
    }

    /// Adds a human-readable message to the error.
    pub fn with_message(self, message: &str) -> Self {
        self.with_field("message", string_literal(message))
    }

    /// Adds an arbitrary field with an atomic value.
    pub fn with_atom_field<T: ToString>(self, name: &str, value: T) -> Self {
        self.with_field(name, atom(value))
    }

    /// Adds an arbitrary field with a string literal value.
    pub fn with_string_field(self, name: &str, value: &str) -> Self {
        self.with_field(name, string_literal(value))
    }

    /// Adds an arbitrary field expressed as an `SExpr`.
    pub fn with_field(mut self, name: &str, value: SExpr) -> Self {
        if let SExpr::List(entries) = &mut self.detail {
            entries.push(field(name, value));
        }
        self
    }

    /// Returns the underlying detail `SExpr`.
    pub fn detail(&self) -> &SExpr {
        &self.detail
    }

    /// Consumes the error and returns the inner `SExpr` detail.
    pub fn into_detail(self) -> SExpr {
        self.detail
    }
}

impl std::fmt::Display for SError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for SError {}

impl From<SExpr> for SError {
    fn from(detail: SExpr) -> Self {
        SError { detail }
    }
}

fn field(name: &str, value: SExpr) -> SExpr {
    SExpr::List(vec![SExpr::Atom(name.to_string()), value])
}

fn atom<T: ToString>(value: T) -> SExpr {
    SExpr::Atom(value.to_string())
}

fn string_literal(value: &str) -> SExpr {
    SExpr::Atom(format!("\"{}\"", escape_string(value)))
}

/// Escapes special characters in a string for S-expression representation.
///
/// Handles backslash, double-quote, newline, carriage return, and tab.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Creates a quoted string atom with proper escaping.
///
/// Wraps the escaped string in double quotes to create a valid S-expression string atom.
pub fn string_atom(s: &str) -> SExpr {
    SExpr::Atom(format!("\"{}\"", escape_string(s)))
}

/// Extracts string content from an atom, handling quoted strings.
///
/// If the atom is a quoted string (starts and ends with `"`), unescapes and returns
/// the inner content. Otherwise returns the atom value as-is.
/// Returns an empty string for non-atom expressions.
pub fn extract_string(expr: &SExpr) -> String {
    match expr {
        SExpr::Atom(s) => {
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                unescape_string(&s[1..s.len() - 1])
            } else {
                s.clone()
            }
        }
        _ => String::new(),
    }
}

/// Processes escape sequences in a string, converting them to their literal characters.
///
/// Recognizes standard escape sequences: `\n`, `\r`, `\t`, `\\`, `\"`.
/// Unknown escape sequences are preserved literally.
pub fn unescape_string(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                match next {
                    'n' => result.push('\n'),
                    'r' => result.push('\r'),
                    't' => result.push('\t'),
                    '\\' => result.push('\\'),
                    '"' => result.push('"'),
                    _ => {
                        result.push('\\');
                        result.push(next);
                    }
                }
            } else {
                result.push('\\');
            }
        } else {
            result.push(ch);
        }
    }
    result
}
