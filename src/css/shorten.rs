use std::borrow::Cow;

use consts::ASCII;
use tokenizer::Kind;

use super::color;
use super::properties::Property;
use crate::{datauri, number, utils, Minifier};

/// Units a zero can shed without changing meaning
fn is_optional_zero_unit(unit: &[u8]) -> bool {
	matches!(
		unit,
		b"px" | b"mm" | b"q" | b"cm" | b"in" | b"pt" | b"pc" | b"ch" | b"em" | b"ex" | b"rem"
			| b"vh" | b"vw" | b"vmin" | b"vmax"
	)
}

/// Canonicalizes a single token. Returns the possibly changed kind, a
/// named color ident becomes a hash and vice versa.
pub fn token<'a>(o: &Minifier, prop: Property, kind: Kind, data: &'a [u8]) -> (Kind, Cow<'a, [u8]>) {
	match kind {
		Kind::Number | Kind::Percentage | Kind::Dimension => {
			if kind == Kind::Number && prop.is_integer() {
				return (kind, Cow::Borrowed(data));
			}

			let n = match kind {
				Kind::Percentage => data.len() - 1,
				Kind::Dimension => number::split(data),
				_ => data.len(),
			};

			let (num, unit) = data.split_at(n);
			let unit = utils::to_lower(unit);
			let num = number::minify(num, o.decimals, !o.keep_css2);

			match kind {
				Kind::Number => (kind, num),
				Kind::Percentage => match num {
					Cow::Borrowed(_) => (kind, Cow::Borrowed(data)),
					Cow::Owned(mut out) => {
						out.push(ASCII::PERCENTAGE);
						(kind, Cow::Owned(out))
					}
				},
				_ => {
					// flex-basis grammar makes a bare zero ambiguous
					if &*num == b"0" && prop != Property::Flex && is_optional_zero_unit(&unit) {
						return (Kind::Number, num);
					}

					if let (Cow::Borrowed(_), Cow::Borrowed(_)) = (&num, &unit) {
						return (kind, Cow::Borrowed(data));
					}

					let mut out = num.into_owned();
					out.extend(&*unit);
					(kind, Cow::Owned(out))
				}
			}
		}

		// Lowercase a copy, some contexts hold case-sensitive custom
		// idents and must not hand their tokens here
		Kind::Ident => {
			let lower = utils::to_lower(data);
			match color::name_to_hex(&lower) {
				Some(hex) => (Kind::Hash, Cow::Borrowed(hex)),
				None => (kind, lower),
			}
		}

		Kind::Hash => {
			let mut data = utils::to_lower(data);

			// Redundant alpha pair collapses first, `ff` drops and
			// `00` becomes the canonical transparent literal
			if data.len() == 9 && data[7] == data[8] {
				if data[7] == b'f' {
					data.to_mut().truncate(7);
				} else if data[7] == ASCII::ZERO {
					data = Cow::Borrowed(b"#0000");
				}
			}

			if let Some(name) = color::hex_to_name(&data) {
				return (Kind::Ident, Cow::Borrowed(name));
			}

			let d = data.as_ref();
			if d.len() == 7 && d[1] == d[2] && d[3] == d[4] && d[5] == d[6] {
				data = Cow::Owned(vec![ASCII::HASH, d[1], d[3], d[5]]);
			} else if d.len() == 9 && d[1] == d[2] && d[3] == d[4] && d[5] == d[6] && d[7] == d[8] {
				data = Cow::Owned(vec![ASCII::HASH, d[1], d[3], d[5], d[7]]);
			}

			(kind, data)
		}

		Kind::String => (kind, remove_newlines(data)),

		Kind::Url => (kind, url(data)),

		_ => (kind, Cow::Borrowed(data)),
	}
}

fn url(data: &[u8]) -> Cow<[u8]> {
	if data.len() <= 10 {
		// Too short to hold anything worth re-encoding, only the
		// prefix gets lowercased
		return if data[..3].iter().any(u8::is_ascii_uppercase) {
			let mut out = data.to_vec();
			out[..3].make_ascii_lowercase();
			Cow::Owned(out)
		} else {
			Cow::Borrowed(data)
		};
	}

	let mut delim = ASCII::DOUBLE_QUOTE;
	let inner = utils::trim(&data[4..data.len() - 1]);

	let uri: Cow<[u8]> = if inner.len() >= 2
		&& matches!(inner[0], ASCII::SINGLE_QUOTE | ASCII::DOUBLE_QUOTE)
	{
		delim = inner[0];
		match remove_newlines(inner) {
			Cow::Borrowed(x) => Cow::Borrowed(&x[1..x.len() - 1]),
			Cow::Owned(mut x) => {
				x.pop();
				x.remove(0);
				Cow::Owned(x)
			}
		}
	} else {
		Cow::Borrowed(inner)
	};

	let uri = match datauri::minify(&uri) {
		Some(encoded) => Cow::Owned(encoded),
		None => uri,
	};

	let mut out = Vec::with_capacity(uri.len() + 7);
	out.extend(b"url(");
	if utils::is_url_unquoted(&uri) {
		out.extend(&*uri);
	} else if !uri.is_empty() {
		out.push(delim);
		out.extend(&*uri);
		out.push(delim);
	}
	out.push(ASCII::PAREN_CLOSE);

	if out == data {
		Cow::Borrowed(data)
	} else {
		Cow::Owned(out)
	}
}

/// Deletes backslash-newline line continuations, they stand for "no
/// character here". Handles LF, CR and CRLF.
pub fn remove_newlines(data: &[u8]) -> Cow<[u8]> {
	let mut first = None;
	for i in 1..data.len().saturating_sub(2) {
		if data[i] == ASCII::BACK_SLASH && matches!(data[i + 1], ASCII::LF | ASCII::CR) {
			first = Some(i);
			break;
		}
	}

	let Some(first) = first else {
		return Cow::Borrowed(data);
	};

	let mut out = Vec::with_capacity(data.len());
	out.extend(&data[..first]);

	let mut i = first;
	while i < data.len() {
		if data[i] == ASCII::BACK_SLASH && matches!(data.get(i + 1), Some(&(ASCII::LF | ASCII::CR))) {
			i += 2;
			if data.get(i - 1) == Some(&ASCII::CR) && data.get(i) == Some(&ASCII::LF) {
				i += 1;
			}
		} else {
			out.push(data[i]);
			i += 1;
		}
	}

	Cow::Owned(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn check(prop: &str, kind: Kind, input: &str, expected_kind: Kind, expected: &str) {
		let o = Minifier::default();
		let prop = Property::from_bytes(prop.as_bytes());
		let (kind, data) = token(&o, prop, kind, input.as_bytes());
		assert_eq!(
			(kind, std::str::from_utf8(&data).unwrap()),
			(expected_kind, expected),
			"token({input:?})"
		);
	}

	#[test]
	fn numbers() {
		check("width", Kind::Number, "0.5", Kind::Number, ".5");
		check("width", Kind::Percentage, "050.0%", Kind::Percentage, "50%");
		check("width", Kind::Dimension, "10.0PX", Kind::Dimension, "10px");
		check("width", Kind::Dimension, "0px", Kind::Number, "0");
		check("width", Kind::Dimension, "0deg", Kind::Dimension, "0deg");
		check("flex", Kind::Dimension, "0px", Kind::Dimension, "0px");
		check("z-index", Kind::Number, "001", Kind::Number, "001");
	}

	#[test]
	fn colors() {
		check("color", Kind::Ident, "Black", Kind::Hash, "#000");
		check("color", Kind::Ident, "blue", Kind::Ident, "blue");
		check("color", Kind::Hash, "#FFFFFF", Kind::Hash, "#fff");
		check("color", Kind::Hash, "#ff0000", Kind::Ident, "red");
		check("color", Kind::Hash, "#ff0000ff", Kind::Ident, "red");
		check("color", Kind::Hash, "#12345600", Kind::Hash, "#0000");
		check("color", Kind::Hash, "#11223344", Kind::Hash, "#1234");
		check("color", Kind::Hash, "#123456", Kind::Hash, "#123456");
	}

	#[test]
	fn urls() {
		check("background", Kind::Url, "URL(foo.png)", Kind::Url, "url(foo.png)");
		check("background", Kind::Url, "url( \"images/x.png\" )", Kind::Url, "url(images/x.png)");
		check("background", Kind::Url, "url('a b.png')", Kind::Url, "url('a b.png')");
	}

	#[test]
	fn string_continuations() {
		let out = remove_newlines(b"'a\\\nb'");
		assert_eq!(&*out, b"'ab'");
		let out = remove_newlines(b"'a\\\r\nb'");
		assert_eq!(&*out, b"'ab'");
		let out = remove_newlines(b"'plain'");
		assert!(matches!(out, Cow::Borrowed(_)));
	}
}
