use alloc::string::String;

use thiserror::Error;

use crate::token::Symbol;

/// Which member of a [`TokenValue`](crate::TokenValue) is held or requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Member {
    /// `TokenValue::Int64`
    Int64,
    /// `TokenValue::Double`
    Double,
    /// `TokenValue::Marker`
    Marker,
}

impl core::fmt::Display for Member {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Member::Int64 => "int64",
            Member::Double => "double",
            Member::Marker => "marker",
        })
    }
}

/// Misuse of a [`Token`](crate::Token)'s value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The caller asked for a member the token does not hold.
    #[error("{symbol:?} token holds {held}, not {requested}")]
    WrongMember {
        /// Category of the token that was read.
        symbol: Symbol,
        /// Member the token actually holds.
        held: Member,
        /// Member the caller asked for.
        requested: Member,
    },
    /// A token was built with a value that does not belong to its category.
    #[error("{symbol:?} tokens carry {expected}, got {found}")]
    MismatchedValue {
        /// Category the token was built with.
        symbol: Symbol,
        /// Member that category requires.
        expected: Member,
        /// Member that was supplied.
        found: Member,
    },
}

/// A textual integer format setting was not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized integer format {0:?}, expected \"D\" or \"H\"")]
pub struct ParseFormatModeError(pub(crate) String);
