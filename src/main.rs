use std::io::Read;

use css_minify::{Error, Minifier};

fn main() -> Result<(), Error> {
	let mut args = std::env::args();

	let mut o = Minifier::new();
	let mut inline = false;

	let mut writer = std::io::BufWriter::new(std::io::stdout());

	while let Some(arg) = args.next() {
		match arg.as_str() {
			"--inline" => inline = true,
			"--css2" => o = o.keep_css2(),
			"--decimals" => {
				let Some(decimals) = args.next().and_then(|x| x.parse().ok()) else {
					return Err(Error::NoInput);
				};
				o = o.decimals(decimals);
			}
			"--input" => {
				let Some(input) = args.next() else {
					return Err(Error::NoInput);
				};

				return run(&o, inline, input, &mut writer);
			}
			_ => {}
		}
	}

	let mut input = String::new();
	std::io::stdin().read_to_string(&mut input)?;

	run(&o, inline, input, &mut writer)
}

fn run(
	o: &Minifier,
	inline: bool,
	input: String,
	writer: &mut impl std::io::Write,
) -> Result<(), Error> {
	if inline {
		o.minify_inline(input, writer)
	} else {
		o.minify(input, writer)
	}
}
