use hel_colored::Colored;

pub fn minify(css: &str) -> String {
	let mut out = Vec::with_capacity(css.len());

	css_minify::minify(css, &mut out).unwrap_or_else(|err| panic!("{err:?}"));

	String::from_utf8(out).unwrap()
}

pub fn minify_inline(css: &str) -> String {
	let mut out = Vec::with_capacity(css.len());

	css_minify::minify_inline(css, &mut out).unwrap_or_else(|err| panic!("{err:?}"));

	String::from_utf8(out).unwrap()
}

pub fn run_cases(run: fn(&str) -> String, cases: &[(&str, &str)]) {
	let mut failed = 0;

	for (num, (before, after)) in cases.iter().enumerate() {
		let result = run(before);

		if result == *after {
			continue;
		}

		println!("\n{}", format!("Case {}: {before:?}", num + 1).yellow());
		println!("{} {result:?}", "Got:".red());
		println!("{} {after:?}", "Should be:".green());

		failed += 1;
	}

	if failed > 0 {
		panic!("{}", format!("Failed {failed} cases!").red());
	}
}
