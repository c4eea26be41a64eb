use tokenizer::{Event, Kind, Lexer, Parser};

fn kinds(input: &str) -> Vec<(Kind, &str)> {
	let mut lexer = Lexer::new(input.as_bytes());
	let mut out = Vec::new();

	while let Some(token) = lexer.next() {
		out.push((token.kind, std::str::from_utf8(token.data).unwrap()));
	}

	out
}

#[test]
fn lexer_basic() {
	assert_eq!(
		kinds("a{color:red;}"),
		[
			(Kind::Ident, "a"),
			(Kind::BracketCurlyOpen, "{"),
			(Kind::Ident, "color"),
			(Kind::Colon, ":"),
			(Kind::Ident, "red"),
			(Kind::Semicolon, ";"),
			(Kind::BracketCurlyClose, "}"),
		]
	);
}

#[test]
fn lexer_numeric() {
	assert_eq!(kinds("5"), [(Kind::Number, "5")]);
	assert_eq!(kinds("-.5"), [(Kind::Number, "-.5")]);
	assert_eq!(kinds("+1.5"), [(Kind::Number, "+1.5")]);
	assert_eq!(kinds("5e5"), [(Kind::Number, "5e5")]);
	assert_eq!(kinds("5E-5"), [(Kind::Number, "5E-5")]);
	assert_eq!(kinds("5em"), [(Kind::Dimension, "5em")]);
	assert_eq!(kinds("5e5em"), [(Kind::Dimension, "5e5em")]);
	assert_eq!(kinds("50%"), [(Kind::Percentage, "50%")]);
	assert_eq!(kinds("10px"), [(Kind::Dimension, "10px")]);
	// Dot without a following digit is a plain delim
	assert_eq!(kinds("5."), [(Kind::Number, "5"), (Kind::Delim, ".")]);
}

#[test]
fn lexer_names() {
	assert_eq!(kinds("-moz-box"), [(Kind::Ident, "-moz-box")]);
	assert_eq!(kinds("--custom"), [(Kind::Ident, "--custom")]);
	assert_eq!(kinds("calc("), [(Kind::Function, "calc(")]);
	assert_eq!(kinds("@media"), [(Kind::AtKeyword, "@media")]);
	assert_eq!(kinds("#1abc"), [(Kind::Hash, "#1abc")]);
	assert_eq!(kinds("#"), [(Kind::Delim, "#")]);
	assert_eq!(kinds("url(foo.css)"), [(Kind::Url, "url(foo.css)")]);
	assert_eq!(kinds("URL( a )"), [(Kind::Url, "URL( a )")]);
	assert_eq!(kinds("url(foo"), [(Kind::BadUrl, "url(foo")]);
}

#[test]
fn lexer_strings() {
	assert_eq!(kinds("\"a b\""), [(Kind::String, "\"a b\"")]);
	assert_eq!(kinds("'a\\'b'"), [(Kind::String, "'a\\'b'")]);
	assert_eq!(
		kinds("'a\nb'"),
		[
			(Kind::BadString, "'a"),
			(Kind::Whitespace, "\n"),
			(Kind::Ident, "b"),
			(Kind::BadString, "'"),
		]
	);
}

#[test]
fn lexer_misc() {
	assert_eq!(kinds("<!-- -->"), [(Kind::Cdo, "<!--"), (Kind::Whitespace, " "), (Kind::Cdc, "-->")]);
	assert_eq!(kinds("/* x */"), [(Kind::Comment, "/* x */")]);
	assert_eq!(kinds("/* x"), [(Kind::Comment, "/* x")]);
	assert_eq!(kinds("a/**/b"), [(Kind::Ident, "a"), (Kind::Comment, "/**/"), (Kind::Ident, "b")]);
}

/// Runs the grammar parser to completion, rendering each event as
/// `Event data|values` for compact comparison
fn events(input: &str, inline: bool) -> Vec<String> {
	let mut parser = if inline {
		Parser::new_inline(input.as_bytes())
	} else {
		Parser::new(input.as_bytes())
	};

	let mut out = Vec::new();
	loop {
		let event = parser.next().unwrap();

		let mut line = format!("{event:?}");
		if !parser.data().is_empty() {
			line.push(' ');
			line.push_str(std::str::from_utf8(parser.data()).unwrap());
		}
		if !parser.values().is_empty() {
			line.push('|');
			for value in parser.values() {
				line.push_str(std::str::from_utf8(value.data).unwrap());
			}
		}

		out.push(line);

		if event == Event::End {
			return out;
		}
	}
}

#[test]
fn grammar_ruleset() {
	assert_eq!(
		events("a { color : red ; }", false),
		["BeginRuleset|a", "Declaration color|red", "EndRuleset", "End"]
	);
}

#[test]
fn grammar_selectors() {
	assert_eq!(
		events("a , b > c {}", false),
		["QualifiedRule|a", "BeginRuleset|b>c", "EndRuleset", "End"]
	);
	assert_eq!(
		events("a :hover {}", false),
		["BeginRuleset|a :hover", "EndRuleset", "End"]
	);
	assert_eq!(
		events("ul li , ol li {}", false),
		["QualifiedRule|ul li", "BeginRuleset|ol li", "EndRuleset", "End"]
	);
}

#[test]
fn grammar_at_rules() {
	assert_eq!(events("@import url(a.css) ;", false), ["AtRule @import| url(a.css)", "End"]);
	assert_eq!(
		events("@media screen and ( max-width : 5px ) { a { b : c } }", false),
		[
			"BeginAtRule @media| screen and (max-width:5px)",
			"BeginRuleset|a",
			"Declaration b|c",
			"EndRuleset",
			"EndAtRule",
			"End",
		]
	);
	assert_eq!(
		events("@font-face { font-family : x }", false),
		["BeginAtRule @font-face", "Declaration font-family|x", "EndAtRule", "End"]
	);
}

#[test]
fn grammar_inline() {
	assert_eq!(
		events("color : red ; margin : 0 1px", true),
		["Declaration color|red", "Declaration margin|0 1px", "End"]
	);
}

#[test]
fn grammar_custom_property() {
	assert_eq!(
		events("--x : 1px  2px ;", true),
		["CustomProperty --x|1px  2px", "End"]
	);
	assert_eq!(events("--empty:;", true), ["CustomProperty --empty|", "End"]);
}

#[test]
fn grammar_recoverable() {
	assert_eq!(
		events("a { color } b {}", false),
		["BeginRuleset|a", "Recoverable color", "EndRuleset", "BeginRuleset|b", "EndRuleset", "End"]
	);
	assert_eq!(
		events("color red ; margin : 0", true),
		["Recoverable color red|;", "Declaration margin|0", "End"]
	);
}

#[test]
fn grammar_unclosed_blocks() {
	assert_eq!(
		events("@media screen { a { b : c", false),
		[
			"BeginAtRule @media| screen",
			"BeginRuleset|a",
			"Declaration b|c",
			"EndRuleset",
			"EndAtRule",
			"End",
		]
	);
}

#[test]
fn grammar_fatal() {
	let mut parser = Parser::new(b"a, ");
	assert_eq!(parser.next().unwrap(), Event::QualifiedRule);
	// EOF mid prelude has no recovery point
	assert!(parser.next().is_err());
}
