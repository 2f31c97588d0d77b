use std::error;
use std::fmt;

/// Error returned when parsing a genome from text and a character other
/// than '0' or '1' is encountered.
///
/// The inner `char` is the character that failed to parse. This type
/// implements `error::Error` and `Display` to provide helpful messages
/// when surfaced to callers or upstream libraries.
///
/// Example:
///
/// ```rust
/// # use wugsim::base::Genome;
/// let err = Genome::parse("01x0").unwrap_err();
/// println!("{err}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSymbol(pub char);

impl fmt::Display for InvalidSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid genome symbol: '{}' (expected '0' or '1')", self.0)
    }
}

impl error::Error for InvalidSymbol {}
