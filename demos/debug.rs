/*!
# Argtable: Debug

This example parses any arbitrary arguments fed to it and displays the
results, e.g.:

cargo run --example debug -- -time --bar=12 -nocolor foo
*/

fn main() {
	let args = argtable::args(0);

	println!("\x1b[2mRAW:\x1b[0m");
	println!("{args:?}");

	println!();
	println!("\x1b[2mOPTIONS:\x1b[0m");
	for entry in &args {
		println!(
			"{:<20} {:<20} bool={:<5} int={}",
			entry.name(),
			format!("{:?}", entry.value()),
			args.get_bool_arg(entry.name(), false),
			args.get_arg_int(entry.name(), 0),
		);
	}

	println!();
	println!("\x1b[2mPOSITIONAL:\x1b[0m");
	for arg in args.positionals() { println!("{arg}"); }
	println!();
}
