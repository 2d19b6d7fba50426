/*!
# Benchmark: `argtable::OptionTable`
*/

use brunch::{
	Bench,
	benches,
};
use argtable::OptionTable;

/// # Raw Arguments.
const RAW: [&str; 8] = [
	"-k",
	"--key=val",
	"-notime",
	"-time=0",
	"--threads=12",
	"-connect=a",
	"/foo/bar",
	"-connect=b",
];

fn table() -> OptionTable { OptionTable::parse(RAW) }

benches!(
	Bench::new("argtable::OptionTable::parse(8)")
		.run(table),

	Bench::spacer(),

	Bench::new("argtable::OptionTable::get_arg(--key)")
		.run_seeded_with(table, |a| a.get_arg("-key", "").len()),

	Bench::new("argtable::OptionTable::get_arg_int(-threads)")
		.run_seeded_with(table, |a| a.get_arg_int("-threads", 1)),

	Bench::new("argtable::OptionTable::get_bool_arg(-time)")
		.run_seeded_with(table, |a| a.get_bool_arg("-time", true)),

	Bench::new("argtable::OptionTable::get_bool_arg(-nope)")
		.run_seeded_with(table, |a| a.get_bool_arg("-nope", true)),
);
