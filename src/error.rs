#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid base: {0}")]
    InvalidBase(u32),
    #[error("invalid base {base} integer: {text:?}")]
    InvalidDigit { base: u32, text: String },
    #[error("numeral contains no digits")]
    EmptyNumeral,
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("attempt to subtract a larger magnitude from a smaller one")]
    Underflow,
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
    #[error("cannot convert a non-finite float to an integer")]
    NonFinite,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
