/*!
# Argtable: Option Entries.
*/



#[derive(Debug, Clone, Eq, Hash, PartialEq)]
/// # Option Entry.
///
/// This is a single dash-prefixed argument, split into its canonical name and
/// (possibly empty) value.
///
/// Canonicalization is minimal:
/// * A leading `--` is collapsed to `-`, so `--key` and `-key` are the same thing;
/// * Everything before the first `=` is the name, everything after is the value;
/// * Case is left alone;
///
/// An entry only exists if the option was passed, so there's no such thing as
/// an "absent" entry.
pub struct OptionEntry {
	/// # Name (with one leading dash).
	name: String,

	/// # Value (without the `=`).
	value: String,
}

impl OptionEntry {
	/// # New.
	pub(super) fn new<S1, S2>(name: S1, value: S2) -> Self
	where S1: Into<String>, S2: Into<String> {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}

	/// # From Raw Token.
	///
	/// Return the entry for a raw argument, or `None` if it doesn't start with
	/// a dash.
	pub(super) fn from_token(raw: &str) -> Option<Self> {
		let rest = raw.strip_prefix('-')?;

		// "--key" is treated the same as "-key".
		let body = if rest.starts_with('-') { rest } else { raw };

		let (name, value) = body.split_once('=').unwrap_or((body, ""));
		Some(Self::new(name, value))
	}
}

impl OptionEntry {
	#[must_use]
	/// # Name.
	///
	/// Return the canonical name, e.g. `-key`.
	pub fn name(&self) -> &str { &self.name }

	#[must_use]
	/// # Value.
	///
	/// Return the value, or an empty string if none was given.
	pub fn value(&self) -> &str { &self.value }

	#[must_use]
	/// # Is Present?
	///
	/// Always `true`. Absence is represented by the lack of an entry.
	pub const fn is_present(&self) -> bool { true }
}



#[must_use]
/// # Negated Name.
///
/// Return the negation alias for an option name: `-key` becomes `-nokey`.
///
/// ## Examples
///
/// ```
/// assert_eq!(argtable::negated_name("-time"), "-notime");
/// ```
pub fn negated_name(name: &str) -> String {
	let mut out = String::with_capacity(name.len() + 2);
	if let Some(rest) = name.strip_prefix('-') {
		out.push_str("-no");
		out.push_str(rest);
	}
	else {
		out.push_str("no");
		out.push_str(name);
	}
	out
}

/// # Valid Name?
///
/// Names must start with a dash and cannot contain `=`; anything else is
/// unreachable through [`OptionEntry::from_token`].
pub(super) const fn valid_name(name: &str) -> bool {
	let mut bytes = name.as_bytes();
	if ! matches!(bytes, [b'-', ..]) { return false; }

	while let [b, rest @ ..] = bytes {
		if *b == b'=' { return false; }
		bytes = rest;
	}

	true
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_from_token() {
		for (raw, name, value) in [
			("-time", "-time", ""),
			("--time", "-time", ""),
			("-time=", "-time", ""),
			("-time=1", "-time", "1"),
			("--time=1", "-time", "1"),
			("-notime=0", "-notime", "0"),
			("-Time=Eleven", "-Time", "Eleven"),
			("-url=a=b&c=d", "-url", "a=b&c=d"),
			("---time", "--time", ""),
			("-", "-", ""),
			("--", "-", ""),
			("-=1", "-", "1"),
			("--=", "-", ""),
			("-größe=ö", "-größe", "ö"),
		] {
			let entry = OptionEntry::from_token(raw)
				.unwrap_or_else(|| panic!("Bug: {raw:?} should be an option."));
			assert_eq!(entry.name(), name, "Bug: wrong name for {raw:?}.");
			assert_eq!(entry.value(), value, "Bug: wrong value for {raw:?}.");
			assert!(entry.is_present());
		}

		for raw in ["", "time", "time=1", " -time", "/time", "+time"] {
			assert!(
				OptionEntry::from_token(raw).is_none(),
				"Bug: {raw:?} shouldn't be an option.",
			);
		}
	}

	#[test]
	fn t_negated_name() {
		assert_eq!(negated_name("-time"), "-notime");
		assert_eq!(negated_name("-"), "-no");
		assert_eq!(negated_name("--time"), "-no-time");
		assert_eq!(negated_name("time"), "notime");
	}

	#[test]
	fn t_valid_name() {
		for k in ["-", "-time", "--time", "-no-time", "-größe"] {
			assert!(valid_name(k), "Bug: {k:?} should be a valid name.");
		}
		for k in ["", "time", "=", "-time=1", "-=", " -time"] {
			assert!(! valid_name(k), "Bug: {k:?} shouldn't be a valid name.");
		}
	}
}
