/*!
# Argtable: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
///
/// Parsing and lookups never fail; this only comes up when manually adding
/// entries to an [`OptionTable`](crate::OptionTable).
pub enum ArgError {
	/// # Invalid Key.
	///
	/// The name does not start with a dash, or contains an `=`. Neither could
	/// ever be produced by the parser, so nothing would ever find it.
	InvalidKey(String),
}

impl std::error::Error for ArgError {}

impl fmt::Display for ArgError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidKey(s) => write!(f, "Invalid key: {s}"),
		}
	}
}

impl ArgError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidKey(_) => "Invalid key.",
		}
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_display() {
		let err = ArgError::InvalidKey("time".to_owned());
		assert_eq!(err.to_string(), "Invalid key: time");
		assert_eq!(err.as_str(), "Invalid key.");
	}
}
