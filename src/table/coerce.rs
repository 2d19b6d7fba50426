/*!
# Argtable: Value Coercion.
*/



#[must_use]
/// # Interpret Boolean.
///
/// Option values are truthy unless they are exactly `"0"`. An empty value,
/// from a bare `-key` or a `-key=`, counts as `true`, since merely passing a
/// flag is how one turns it on.
///
/// ## Examples
///
/// ```
/// use argtable::interpret_bool;
///
/// assert!(interpret_bool(""));
/// assert!(interpret_bool("1"));
/// assert!(interpret_bool("false")); // Only "0" is false!
/// assert!(! interpret_bool("0"));
/// ```
pub const fn interpret_bool(value: &str) -> bool {
	! matches!(value.as_bytes(), [b'0'])
}

#[must_use]
/// # Parse Integer (Lossy).
///
/// Parse the leading integer from `value`, C-style: leading whitespace is
/// skipped, then an optional `+` or `-`, then as many ASCII digits as there
/// are. Anything following the digits is ignored.
///
/// If there are no digits at all (`""`, `"NaN"`, etc.), the result is `0`.
/// Numbers too big for an `i64` saturate at `i64::MAX` or `i64::MIN`.
///
/// This never fails.
///
/// ## Examples
///
/// ```
/// use argtable::parse_int_lossy;
///
/// assert_eq!(parse_int_lossy("11"), 11);
/// assert_eq!(parse_int_lossy(" -5px"), -5);
/// assert_eq!(parse_int_lossy("NaN"), 0);
/// assert_eq!(parse_int_lossy(""), 0);
/// ```
pub const fn parse_int_lossy(value: &str) -> i64 {
	let mut bytes = value.as_bytes();

	// Leading whitespace.
	while let [b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r', rest @ ..] = bytes {
		bytes = rest;
	}

	// Sign.
	let negative = matches!(bytes, [b'-', ..]);
	if let [b'-' | b'+', rest @ ..] = bytes { bytes = rest; }

	// Negatives accumulate downward so i64::MIN is reachable.
	let mut out: i64 = 0;
	while let [d @ b'0'..=b'9', rest @ ..] = bytes {
		let digit = (*d - b'0') as i64;
		out =
			if negative { out.saturating_mul(10).saturating_sub(digit) }
			else { out.saturating_mul(10).saturating_add(digit) };
		bytes = rest;
	}

	out
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_interpret_bool() {
		for v in ["", "1", "01", "00", "true", "false", "no", " 0", "0 "] {
			assert!(interpret_bool(v), "Bug: {v:?} should be true.");
		}
		assert!(! interpret_bool("0"), "Bug: \"0\" should be false.");
	}

	#[test]
	fn t_parse_int_lossy() {
		for (raw, expected) in [
			("", 0),
			("0", 0),
			("11", 11),
			("+11", 11),
			("-11", -11),
			("  \t42", 42),
			("12abc", 12),
			("3.9", 3),
			("NaN", 0),
			("NotANumber", 0),
			("-", 0),
			("+", 0),
			("--1", 0),
			("abc12", 0),
			("1 2", 1),
			("9223372036854775807", i64::MAX),
			("9223372036854775808", i64::MAX),
			("99999999999999999999999", i64::MAX),
			("-9223372036854775808", i64::MIN),
			("-99999999999999999999999", i64::MIN),
		] {
			assert_eq!(
				parse_int_lossy(raw),
				expected,
				"Bug: {raw:?} should parse to {expected}.",
			);
		}
	}
}
