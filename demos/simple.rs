/*!
# Tartan: Simple

This example prints a string some number of times, using the ambient parser.

```bash
cargo run --example simple --features ambient -- -s hello -n 2
```
*/

fn main() {
	let Ok(string) = tartan::ambient::option::<String>(&["-s", "--string"]) else { return; };
	let string = string.mark_required().with_help("A string to print.");

	let Ok(number) = tartan::ambient::option::<usize>(&["-n", "--number"]) else { return; };
	let number = number.with_default(3).with_help("Number of times to print the string.");

	if let Err(e) = tartan::ambient::parse_env() {
		eprintln!("\x1b[1;91mError:\x1b[0m {e}\n");
		let _res = tartan::ambient::help(&mut std::io::stderr());
		std::process::exit(e.exit_code());
	}

	let string = string.get().unwrap_or_default();
	for _ in 0..number.get().unwrap_or_default() {
		println!("{string}");
	}
}
