//! Token categories and values handed to the expression evaluator.

use bstr::BStr;

use crate::{
    error::{Member, TokenError},
    numeric::{NumericKind, NumericValue},
};

/// Category of an expression token.
///
/// The declaration order is the evaluator's precedence order, from operands
/// and grouping up to the tightest-binding operator; a precedence table
/// indexed by [`Symbol::code`] must be kept in step with it. Operand
/// categories come first and end at [`Symbol::OPERAND_END`], so telling an
/// operand from an operator is one comparison.
///
/// The first three codes equal those of [`NumericKind`]: a classified number
/// is already a category.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// A string operand. Shares its code with [`NumericKind::NotNumeric`].
    String = 0,
    /// An integer operand.
    Integer,
    /// A floating-point operand.
    Float,
    /// An operand whose type is not yet known, such as a variable's contents.
    Operand,
    /// Start-of-expression marker; also the first non-operand code.
    Begin,
    /// `(`
    OParen,
    /// `)`
    CParen,
    /// `or` / `||`
    Or,
    /// `and` / `&&`
    And,
    /// `not`, the low-precedence logical negation.
    LowNot,
    /// `=`, case-insensitive comparison.
    Equal,
    /// `==`, case-sensitive comparison.
    EqualCase,
    /// `<>` / `!=`
    NotEqual,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gtoe,
    /// `<=`
    Ltoe,
    /// `|`. Binds tighter than comparisons.
    BitOr,
    /// `^`
    BitXor,
    /// `&`
    BitAnd,
    /// `<<`
    BitShiftLeft,
    /// `>>`
    BitShiftRight,
    /// Binary `+`
    Plus,
    /// Binary `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// Unary `-`. Unary `+` needs no token.
    Negative,
    /// `!`, the high-precedence logical negation.
    HighNot,
    /// `~`
    BitNot,
    /// `**`. Binds tighter than unary minus, so `-2**2` is `-4`.
    Power,
}

impl Symbol {
    /// The first code that is not an operand.
    pub const OPERAND_END: Symbol = Symbol::Begin;

    /// Number of categories.
    pub const COUNT: usize = 30;

    /// Every category, in code order.
    pub const ALL: [Symbol; Self::COUNT] = [
        Symbol::String,
        Symbol::Integer,
        Symbol::Float,
        Symbol::Operand,
        Symbol::Begin,
        Symbol::OParen,
        Symbol::CParen,
        Symbol::Or,
        Symbol::And,
        Symbol::LowNot,
        Symbol::Equal,
        Symbol::EqualCase,
        Symbol::NotEqual,
        Symbol::Gt,
        Symbol::Lt,
        Symbol::Gtoe,
        Symbol::Ltoe,
        Symbol::BitOr,
        Symbol::BitXor,
        Symbol::BitAnd,
        Symbol::BitShiftLeft,
        Symbol::BitShiftRight,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Times,
        Symbol::Divide,
        Symbol::Negative,
        Symbol::HighNot,
        Symbol::BitNot,
        Symbol::Power,
    ];

    /// Numeric code of this category, usable as a table index.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The category with the given code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Symbol> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Returns `true` for value-bearing categories.
    ///
    /// ```rust
    /// use scriptlex::Symbol;
    ///
    /// assert!(Symbol::Operand.is_operand());
    /// assert!(!Symbol::Begin.is_operand());
    /// assert!(!Symbol::Power.is_operand());
    /// ```
    #[must_use]
    pub const fn is_operand(self) -> bool {
        (self as u8) < Self::OPERAND_END as u8
    }

    /// Which [`TokenValue`] member a token of this category holds.
    const fn member(self) -> Member {
        match self {
            Symbol::Integer => Member::Int64,
            Symbol::Float => Member::Double,
            _ => Member::Marker,
        }
    }
}

impl From<NumericKind> for Symbol {
    fn from(kind: NumericKind) -> Self {
        match kind {
            NumericKind::NotNumeric => Symbol::String,
            NumericKind::Integer => Symbol::Integer,
            NumericKind::Float => Symbol::Float,
        }
    }
}

/// The value carried by a [`Token`].
///
/// Integer tokens hold `Int64`, float tokens hold `Double`, and every other
/// category holds a `Marker` into the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    /// Value of an integer token.
    Int64(i64),
    /// Value of a float token.
    Double(f64),
    /// Source text of a string, untyped operand, or operator token.
    Marker(&'a BStr),
}

impl TokenValue<'_> {
    const fn member(&self) -> Member {
        match self {
            TokenValue::Int64(_) => Member::Int64,
            TokenValue::Double(_) => Member::Double,
            TokenValue::Marker(_) => Member::Marker,
        }
    }
}

/// A category plus the value that category calls for.
///
/// Construction checks that the two agree, and the typed accessors report a
/// mismatch as a [`TokenError`] instead of reinterpreting the value.
///
/// ```rust
/// use scriptlex::{Symbol, Token, TokenError};
///
/// let token = Token::integer(42);
/// assert_eq!(token.symbol(), Symbol::Integer);
/// assert_eq!(token.as_int64(), Ok(42));
/// assert!(matches!(token.as_double(), Err(TokenError::WrongMember { .. })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    symbol: Symbol,
    value: TokenValue<'a>,
}

impl<'a> Token<'a> {
    /// Pairs `symbol` with `value`.
    ///
    /// # Errors
    ///
    /// [`TokenError::MismatchedValue`] if `symbol` calls for a different
    /// member than `value` holds.
    pub fn new(symbol: Symbol, value: TokenValue<'a>) -> Result<Self, TokenError> {
        let expected = symbol.member();
        let found = value.member();
        if expected == found {
            Ok(Self { symbol, value })
        } else {
            Err(TokenError::MismatchedValue {
                symbol,
                expected,
                found,
            })
        }
    }

    /// An integer operand.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self {
            symbol: Symbol::Integer,
            value: TokenValue::Int64(value),
        }
    }

    /// A floating-point operand.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self {
            symbol: Symbol::Float,
            value: TokenValue::Double(value),
        }
    }

    /// A string operand.
    #[must_use]
    pub fn string(text: &'a [u8]) -> Self {
        Self {
            symbol: Symbol::String,
            value: TokenValue::Marker(BStr::new(text)),
        }
    }

    /// An operand whose type is decided later.
    #[must_use]
    pub fn operand(text: &'a [u8]) -> Self {
        Self {
            symbol: Symbol::Operand,
            value: TokenValue::Marker(BStr::new(text)),
        }
    }

    /// An operand for a classified literal: a number when `value` is one,
    /// otherwise the string `text`.
    ///
    /// ```rust
    /// use scriptlex::{NumericOptions, Symbol, Token, parse_numeric};
    ///
    /// let options = NumericOptions::default();
    /// let text = b"0x1F";
    /// let token = Token::from_numeric(parse_numeric(text, &options), text);
    /// assert_eq!(token.symbol(), Symbol::Integer);
    /// assert_eq!(token.as_int64(), Ok(31));
    /// ```
    #[must_use]
    pub fn from_numeric(value: NumericValue, text: &'a [u8]) -> Self {
        match value {
            NumericValue::NotNumeric => Self::string(text),
            NumericValue::Integer(v) => Self::integer(v),
            NumericValue::Float(v) => Self::float(v),
        }
    }

    /// The token's category.
    #[must_use]
    pub const fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// The token's value.
    #[must_use]
    pub const fn value(&self) -> TokenValue<'a> {
        self.value
    }

    /// Returns `true` for value-bearing tokens.
    #[must_use]
    pub const fn is_operand(&self) -> bool {
        self.symbol.is_operand()
    }

    fn wrong_member(&self, requested: Member) -> TokenError {
        TokenError::WrongMember {
            symbol: self.symbol,
            held: self.value.member(),
            requested,
        }
    }

    /// The integer value.
    ///
    /// # Errors
    ///
    /// [`TokenError::WrongMember`] unless this is an integer token.
    pub fn as_int64(&self) -> Result<i64, TokenError> {
        match self.value {
            TokenValue::Int64(v) => Ok(v),
            _ => Err(self.wrong_member(Member::Int64)),
        }
    }

    /// The floating-point value.
    ///
    /// # Errors
    ///
    /// [`TokenError::WrongMember`] unless this is a float token.
    pub fn as_double(&self) -> Result<f64, TokenError> {
        match self.value {
            TokenValue::Double(v) => Ok(v),
            _ => Err(self.wrong_member(Member::Double)),
        }
    }

    /// The source text.
    ///
    /// # Errors
    ///
    /// [`TokenError::WrongMember`] for integer and float tokens.
    pub fn as_marker(&self) -> Result<&'a BStr, TokenError> {
        match self.value {
            TokenValue::Marker(text) => Ok(text),
            _ => Err(self.wrong_member(Member::Marker)),
        }
    }
}

/// How a stretch of an expression's source is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DerefKind {
    /// Literal expression text, such as the `5 + ` in `5 + y`.
    Raw = 0,
    /// A bare variable name to dereference once, such as the `y` above.
    DerefSingle = 1,
    /// A `%name%` reference whose contents name the variable to read.
    DerefDouble = 2,
}

/// One piece of an expression's source, tagged with how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapItem<'a> {
    /// How the evaluator treats `marker`.
    pub kind: DerefKind,
    /// The source text of this piece.
    pub marker: &'a BStr,
}

impl<'a> MapItem<'a> {
    /// Tags `marker` with `kind`.
    #[must_use]
    pub fn new(kind: DerefKind, marker: &'a [u8]) -> Self {
        Self {
            kind,
            marker: BStr::new(marker),
        }
    }
}
