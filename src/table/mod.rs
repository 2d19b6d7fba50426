/*!
# Argtable: Option Table.

This module contains [`OptionTable`], a parsed, read-only lookup table of the
dash-prefixed options passed to a program, along with the typed accessors
used to query it.
*/

mod coerce;
mod entry;
mod error;

pub use coerce::{
	interpret_bool,
	parse_int_lossy,
};
pub use entry::{
	negated_name,
	OptionEntry,
};
pub use error::ArgError;
use std::{
	collections::BTreeMap,
	ffi::OsString,
	slice::Iter,
};



/// # Flag: End of Options.
///
/// When set, a bare `--` ends option parsing. The separator itself is
/// dropped, and everything after it is kept as positional arguments, whether
/// or not it looks like an option.
///
/// Without this flag, `--` is just another (nameless) option, `-`.
pub const FLAG_END_OF_OPTIONS: u8 =     0b0000_0001;

/// # Flag: Stop at Positional.
///
/// When set, the first argument that isn't an option ends option parsing; it
/// and everything after it are kept as positional arguments.
///
/// Without this flag, options and positional arguments can be freely mixed.
pub const FLAG_STOP_AT_POSITIONAL: u8 = 0b0000_0010;



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Option Table.
///
/// `OptionTable` holds every dash-prefixed argument passed to a program, in
/// order, and answers questions about them.
///
/// It has no idea what options your program actually supports; unknown keys
/// are recorded like any other, and lookups for keys that weren't passed just
/// return whatever default you supply. Nothing here ever fails or panics.
///
/// ## Syntax
///
/// * Options begin with `-` or `--`; the two are interchangeable;
/// * Values are attached with an `=`, like `-key=value`; the first `=` splits, so values may contain more of them;
/// * A key without a value has an empty value;
/// * Anything not beginning with a dash is a positional argument;
///
/// ## Precedence
///
/// If a key is passed more than once, the _last_ value wins.
///
/// Boolean keys can also be turned off with a `no` prefix: `-nokey` is the
/// same as `-key=0`. If both forms are present, though, the direct form
/// _always_ wins, no matter which came first.
///
/// ## Examples
///
/// ```
/// use argtable::OptionTable;
///
/// let args = OptionTable::parse([
///     "-verbose",
///     "--threads=4",
///     "-nocolor",
///     "/foo/bar",
/// ]);
///
/// assert!(args.switch("-verbose"));
/// assert!(! args.get_bool_arg("-color", true));
/// assert_eq!(args.get_arg_int("-threads", 1), 4);
/// assert_eq!(args.get_arg("-output", "out.txt"), "out.txt");
/// assert_eq!(args.positionals(), ["/foo/bar"]);
/// ```
pub struct OptionTable {
	/// # Entries (in argv order).
	entries: Vec<OptionEntry>,

	/// # Name Index.
	///
	/// This maps each name to the positions of its entries in `entries`,
	/// oldest first.
	index: BTreeMap<String, Vec<usize>>,

	/// # Positional Arguments.
	positionals: Vec<String>,
}

impl<S: AsRef<str>> FromIterator<S> for OptionTable {
	fn from_iter<I: IntoIterator<Item=S>>(src: I) -> Self {
		Self::parse_with_flags(src, 0)
	}
}

impl<'a> IntoIterator for &'a OptionTable {
	type Item = &'a OptionEntry;
	type IntoIter = Iter<'a, OptionEntry>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// ## Instantiation.
impl OptionTable {
	#[must_use]
	/// # Parse.
	///
	/// Build a table from raw arguments. The program path, if any, should
	/// _not_ be included.
	///
	/// This is the same as calling [`OptionTable::parse_with_flags`] with
	/// flags of `0`.
	pub fn parse<I, S>(tokens: I) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		Self::parse_with_flags(tokens, 0)
	}

	#[must_use]
	/// # Parse With Flags.
	///
	/// Build a table from raw arguments, tweaking the behaviors with
	/// [`FLAG_END_OF_OPTIONS`] and/or [`FLAG_STOP_AT_POSITIONAL`].
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::{OptionTable, FLAG_END_OF_OPTIONS};
	///
	/// let args = OptionTable::parse_with_flags(
	///     ["-a", "--", "-b"],
	///     FLAG_END_OF_OPTIONS,
	/// );
	/// assert!(args.has("-a"));
	/// assert!(! args.has("-b"));
	/// assert_eq!(args.positionals(), ["-b"]);
	/// ```
	pub fn parse_with_flags<I, S>(tokens: I, flags: u8) -> Self
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		let mut out = Self::default();
		let mut iter = tokens.into_iter();

		while let Some(raw) = iter.next() {
			let raw = raw.as_ref();

			if 0 != flags & FLAG_END_OF_OPTIONS && raw == "--" {
				out.positionals.extend(iter.by_ref().map(|t| t.as_ref().to_owned()));
				break;
			}

			if let Some(entry) = OptionEntry::from_token(raw) { out.push(entry); }
			else {
				out.positionals.push(raw.to_owned());
				if 0 != flags & FLAG_STOP_AT_POSITIONAL {
					out.positionals.extend(iter.by_ref().map(|t| t.as_ref().to_owned()));
					break;
				}
			}
		}

		log::trace!(
			"Parsed {} option(s) and {} positional argument(s).",
			out.entries.len(),
			out.positionals.len(),
		);

		out
	}

	#[must_use]
	/// # Parse (`OsString`).
	///
	/// This is the same as [`OptionTable::parse_with_flags`], except the raw
	/// arguments are [`OsString`]s. Anything that isn't valid UTF-8 is
	/// converted lossily, so a mangled value won't hide the key it belongs to.
	pub fn parse_os<I>(tokens: I, flags: u8) -> Self
	where I: IntoIterator<Item=OsString> {
		Self::parse_with_flags(
			tokens.into_iter().map(|t| match t.into_string() {
				Ok(t) => t,
				Err(t) => t.to_string_lossy().into_owned(),
			}),
			flags,
		)
	}

	/// # Push Entry.
	fn push(&mut self, entry: OptionEntry) {
		let idx = self.entries.len();
		if let Some(v) = self.index.get_mut(entry.name()) { v.push(idx); }
		else { self.index.insert(entry.name().to_owned(), vec![idx]); }
		self.entries.push(entry);
	}
}

/// ## Soft Setters.
///
/// These methods add entries to a table that is still owned, typically to
/// apply program-specific implications (e.g. `-quiet` implies `-nocolor`)
/// before the table is handed off.
impl OptionTable {
	/// # Soft Set Value.
	///
	/// Add `name=value` to the table, but only if `name` doesn't already have
	/// an entry. Returns `true` if the value was added.
	///
	/// Only the name itself is checked; a negated form like `-nokey` won't
	/// prevent `-key` from being set.
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::OptionTable;
	///
	/// let mut args = OptionTable::parse(["-threads=4"]);
	/// assert_eq!(args.soft_set_arg("-threads", "8"), Ok(false));
	/// assert_eq!(args.soft_set_arg("-output", "out.txt"), Ok(true));
	///
	/// assert_eq!(args.get_arg_int("-threads", 1), 4);
	/// assert_eq!(args.get_arg("-output", ""), "out.txt");
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the name doesn't begin with a dash or
	/// contains an `=`.
	pub fn soft_set_arg<S>(&mut self, name: &str, value: S) -> Result<bool, ArgError>
	where S: Into<String> {
		if ! entry::valid_name(name) {
			return Err(ArgError::InvalidKey(name.to_owned()));
		}

		if self.has(name) { return Ok(false); }

		let entry = OptionEntry::new(name, value);
		log::debug!("Soft-set {}={:?}.", entry.name(), entry.value());
		self.push(entry);
		Ok(true)
	}

	/// # Soft Set Boolean.
	///
	/// Same as [`OptionTable::soft_set_arg`], using `"1"` or `"0"` for the
	/// value.
	///
	/// ## Errors
	///
	/// This will return an error if the name doesn't begin with a dash or
	/// contains an `=`.
	pub fn soft_set_bool_arg(&mut self, name: &str, value: bool)
	-> Result<bool, ArgError> {
		self.soft_set_arg(name, if value { "1" } else { "0" })
	}
}

/// ## Queries.
impl OptionTable {
	#[must_use]
	/// # Has Key?
	///
	/// Returns `true` if `name` was passed at least once. Negated forms are
	/// not considered.
	pub fn has(&self, name: &str) -> bool { self.index.contains_key(name) }

	#[must_use]
	/// # Last Value.
	///
	/// Return the value from the last occurrence of `name`, if any. Keys
	/// passed without a value return an empty string.
	pub fn last_value(&self, name: &str) -> Option<&str> {
		let idx = *self.index.get(name)?.last()?;
		self.entries.get(idx).map(OptionEntry::value)
	}

	/// # All Values.
	///
	/// Return every value passed for `name`, in order.
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::OptionTable;
	///
	/// let args = OptionTable::parse(["-connect=a", "-x", "--connect=b"]);
	/// let all: Vec<&str> = args.get_args("-connect").collect();
	/// assert_eq!(all, ["a", "b"]);
	/// ```
	pub fn get_args<'a>(&'a self, name: &str) -> impl Iterator<Item=&'a str> + 'a {
		self.index.get(name)
			.into_iter()
			.flatten()
			.filter_map(|&idx| self.entries.get(idx).map(OptionEntry::value))
	}

	#[must_use]
	/// # Get Value.
	///
	/// Return the last value passed for `name`, or `default` if the key is
	/// missing.
	///
	/// Note that a key passed without a value returns an empty string, not
	/// the default.
	pub fn get_arg<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
		self.last_value(name).unwrap_or(default)
	}

	#[must_use]
	/// # Get Integer.
	///
	/// Return the last value passed for `name` as an integer, or `default` if
	/// the key is missing.
	///
	/// Values are parsed with [`parse_int_lossy`], so junk (or nothing) is
	/// `0`, not the default.
	pub fn get_arg_int(&self, name: &str, default: i64) -> i64 {
		self.last_value(name).map_or(default, parse_int_lossy)
	}

	#[must_use]
	/// # Get Boolean.
	///
	/// Resolve `name` as a boolean:
	/// * If `name` was passed, its last value decides, per [`interpret_bool`];
	/// * Otherwise if its negation (`-noname`) was passed, the opposite of _its_ last value decides;
	/// * Otherwise `default`;
	///
	/// The direct form wins over the negated one regardless of order.
	///
	/// ## Examples
	///
	/// ```
	/// use argtable::OptionTable;
	///
	/// let args = OptionTable::parse(["-notime", "-time"]);
	/// assert!(args.get_bool_arg("-time", false));
	///
	/// let args = OptionTable::parse(["-notime"]);
	/// assert!(! args.get_bool_arg("-time", true));
	///
	/// let args = OptionTable::parse(["-notime=0"]);
	/// assert!(args.get_bool_arg("-time", false));
	/// ```
	pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
		if let Some(v) = self.last_value(name) { interpret_bool(v) }
		else if let Some(v) = self.last_value(&negated_name(name)) { ! interpret_bool(v) }
		else { default }
	}

	#[must_use]
	#[inline]
	/// # Switch.
	///
	/// Shorthand for [`OptionTable::get_bool_arg`] with a default of `false`.
	pub fn switch(&self, name: &str) -> bool { self.get_bool_arg(name, false) }

	#[must_use]
	/// # Positional Arguments.
	///
	/// Return the arguments that weren't options, in order.
	pub fn positionals(&self) -> &[String] { &self.positionals }

	#[must_use]
	#[inline]
	/// # Iterate Entries.
	///
	/// Iterate through all option entries in the order they were passed.
	pub fn iter(&self) -> Iter<'_, OptionEntry> { self.entries.iter() }

	#[must_use]
	#[inline]
	/// # Number of Entries.
	pub fn len(&self) -> usize { self.entries.len() }

	#[must_use]
	#[inline]
	/// # Is Empty?
	///
	/// Returns `true` if no options were passed. Positional arguments don't
	/// count.
	pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}



#[must_use]
/// # CLI Option Table.
///
/// Build an [`OptionTable`] from [`std::env::args_os`], skipping the first
/// (command path) entry.
///
/// ## Examples
///
/// ```no_run
/// let args = argtable::args(0);
/// if args.switch("-verbose") {
///     println!("Talkative!");
/// }
/// ```
pub fn args(flags: u8) -> OptionTable {
	OptionTable::parse_os(std::env::args_os().skip(1), flags)
}
