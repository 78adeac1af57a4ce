use std::fmt;

/// The starting balance handed to a new player when none is given.
pub const DEFAULT_STARTING_BALANCE: Money = Money(1500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// A whole-unit amount of play money.
///
/// # Why Use Money? It is a Value Object.
/// Balances and transfer amounts are plain integers in the game, but wrapping
/// them keeps them from being mixed up with ids, counters or indices. Player
/// balances may be negative (a player in debt); transfer amounts are always
/// checked to be positive before they reach the ledger.
///
/// # Examples
/// ```
/// use monopoly_wallet::common::money::Money;
///
/// let amount: Money = " 200 ".parse().unwrap();
/// assert_eq!(amount.as_i64(), 200);
/// assert_eq!(amount.to_string(), "200");
/// ```
pub struct Money(i64);

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("empty amount")]
    Empty,
    #[error("not an integer amount: {0:?}")]
    NotANumber(String),
    #[error("amount overflow: {0:?}")]
    Overflow(String),
}

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

/// Lenient integer parsing: surrounding whitespace and an optional sign are
/// accepted, and the longest run of leading digits is taken, so `"12abc"`
/// and `"12.7"` both read as 12. Text without leading digits is an error.
impl std::str::FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, rest) = match t.as_bytes()[0] {
            b'-' => (true, &t[1..]),
            b'+' => (false, &t[1..]),
            _ => (false, t),
        };

        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Err(ParseMoneyError::NotANumber(t.to_string()));
        }

        let magnitude: i64 = rest[..digits_len]
            .parse()
            .map_err(|_| ParseMoneyError::Overflow(t.to_string()))?;

        Ok(Money(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
