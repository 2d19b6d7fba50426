/*!
# Argtable

This crate provides a tolerant CLI option table called [`OptionTable`]. It
records every dash-prefixed argument passed to a program, then answers typed
questions about them (string, integer, boolean) with a caller-supplied
default for anything that wasn't passed.

It does not know or care which options your program supports, and it never
fails: unknown keys are simply recorded, junk integers become `0`, and
conflicting flags resolve deterministically. Deciding what any of it _means_
is left entirely up to you.



## Syntax

| Argument | Name | Value |
| -------- | ---- | ----- |
| `-key` | `-key` | `""` |
| `--key` | `-key` | `""` |
| `-key=val` | `-key` | `"val"` |
| `--key=a=b` | `-key` | `"a=b"` |
| `-nokey` | `-nokey` | `""` |
| `foo` | | |

Single and double dashes are interchangeable. The first `=` separates the
name from the value. Anything not beginning with a dash is a positional
argument; see [`OptionTable::positionals`].



## Resolution

* If a key is passed more than once, the last value wins.
* [`OptionTable::get_arg`] returns the value, even if it's empty. Bare flags do _not_ fall back to the default.
* [`OptionTable::get_arg_int`] parses the leading integer, if any, or returns `0`.
* [`OptionTable::get_bool_arg`] treats every value except `"0"` as `true`, and understands `-nokey` as the opposite of `-key`. When both are present, `-key` wins, regardless of order.



## Example

```
use argtable::OptionTable;

#[derive(Debug, Clone, Default)]
/// # Configuration.
struct Settings {
    threads: i64,
    color: bool,
    output: String,
}

// Normally you'd use argtable::args(0) to pull from the environment.
let args = OptionTable::parse([
    "--threads=8",
    "-nocolor",
    "-output=/tmp/out.txt",
]);

let settings = Settings {
    threads: args.get_arg_int("-threads", 1),
    color: args.get_bool_arg("-color", true),
    output: args.get_arg("-output", "out.txt").to_owned(),
};

assert_eq!(settings.threads, 8);
assert!(! settings.color);
assert_eq!(settings.output, "/tmp/out.txt");
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod table;
pub use table::{
	args,
	interpret_bool,
	negated_name,
	parse_int_lossy,
	ArgError,
	OptionEntry,
	OptionTable,
	FLAG_END_OF_OPTIONS,
	FLAG_STOP_AT_POSITIONAL,
};
