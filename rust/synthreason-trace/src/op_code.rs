//! Operation codes and the pronoun lookup table.
//!
//! Every word is dispatched to one of six algebraic operations. A closed set
//! of pronouns selects a specific operation; every other word falls back to
//! [`OpCode::Xor`], the same operation assigned to "it".
//!
//! | pronoun | code | operation        |
//! |---------|------|------------------|
//! | I       | 0x1  | addition         |
//! | you     | 0x2  | subtraction      |
//! | he      | 0x3  | multiplication   |
//! | she     | 0x4  | floored division |
//! | it      | 0x5  | XOR              |
//! | they    | 0x6  | modulo           |

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// An algebraic operation applied to a word's position and retrieved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    Add,
    Subtract,
    Multiply,
    /// Floored integer division. Division by zero yields 0.
    Divide,
    Xor,
    /// Remainder. Modulo by zero yields 0.
    Modulo,
}

/// Pronoun table, keyed by lowercase token.
///
/// Tokens are lowercased before lookup, so the pronoun "I" is stored as "i".
static PRONOUNS: LazyLock<HashMap<&'static str, OpCode>> = LazyLock::new(|| {
    HashMap::from([
        ("i", OpCode::Add),
        ("you", OpCode::Subtract),
        ("he", OpCode::Multiply),
        ("she", OpCode::Divide),
        ("it", OpCode::Xor),
        ("they", OpCode::Modulo),
    ])
});

impl OpCode {
    /// The code used for words outside the pronoun table.
    pub const DEFAULT: OpCode = OpCode::Xor;

    /// Select the operation for a word token.
    ///
    /// Matching is exact against lowercase tokens; unknown words get
    /// [`OpCode::DEFAULT`].
    pub fn for_word(word: &str) -> Self {
        PRONOUNS.get(word).copied().unwrap_or(Self::DEFAULT)
    }

    /// The numeric code.
    pub fn code(self) -> u8 {
        match self {
            OpCode::Add => 0x01,
            OpCode::Subtract => 0x02,
            OpCode::Multiply => 0x03,
            OpCode::Divide => 0x04,
            OpCode::Xor => 0x05,
            OpCode::Modulo => 0x06,
        }
    }

    /// Apply the operation. Total over all inputs: division and modulo by zero
    /// produce 0 and multiplication wraps at 64 bits.
    pub fn apply(self, position: u64, retrieved: u16) -> i64 {
        let p = position as i64;
        let r = i64::from(retrieved);
        match self {
            OpCode::Add => p.wrapping_add(r),
            OpCode::Subtract => p.wrapping_sub(r),
            OpCode::Multiply => p.wrapping_mul(r),
            OpCode::Divide if r == 0 => 0,
            OpCode::Divide => p.div_euclid(r),
            OpCode::Xor => p ^ r,
            OpCode::Modulo if r == 0 => 0,
            OpCode::Modulo => p.rem_euclid(r),
        }
    }
}

impl fmt::Display for OpCode {
    /// Renders the code as `0x` followed by lowercase hex, e.g. `0x5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.code())
    }
}
