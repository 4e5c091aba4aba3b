/*!
# Tartan: Showcase

This example parses whatever it is given against a handful of declarations
and prints the results.

```bash
cargo run --example showcase -- -vv -i=-3 --unsigned 4 a b c
```
*/

use tartan::{
	Config,
	Parser,
};



fn main() {
	let mut parser = Parser::new()
		.with_config(Config::default().with_terminator(Some("--")));

	let Ok(help) = parser.flag(&["-h", "--help"]) else { return; };
	let help = help.with_help("Print help information and exit.");
	let Ok(verbose) = parser.multi_flag(&["-v", "--verbose"]) else { return; };
	let verbose = verbose.with_help("Print more. Repeat for even more.");
	let Ok(int) = parser.option::<i32>(&["-i", "--integer"]) else { return; };
	let int = int.with_metavar("INT").with_help("Any integer.");
	let Ok(uint) = parser.option::<u32>(&["-u", "--unsigned"]) else { return; };
	let uint = uint.with_metavar("UINT").with_help("Any unsigned integer.");
	let Ok(tags) = parser.multi_option::<String>(&["-t", "--tag"]) else { return; };
	let tags = tags.with_help("A tag. May be repeated.");
	let rest = parser.multi_positional::<String>()
		.with_metavar("ARG")
		.with_help("Anything else.");

	if let Err(e) = parser.parse_env() {
		for err in &e {
			eprintln!("\x1b[1;91mError:\x1b[0m {err}");
		}
		eprintln!();
		let _res = parser.help(&mut std::io::stderr());
		std::process::exit(e.exit_code());
	}

	if help.get() {
		let _res = parser.help(&mut std::io::stdout());
		return;
	}

	println!("\x1b[2mVerbosity:\x1b[0m {}", verbose.count());
	println!("\x1b[2mInteger:\x1b[0m   {:?}", int.get());
	println!("\x1b[2mUnsigned:\x1b[0m  {:?}", uint.get());
	println!("\x1b[2mTags:\x1b[0m      {:?}", tags.values());
	println!("\x1b[2mArgs:\x1b[0m      {:?}", rest.values());
}
