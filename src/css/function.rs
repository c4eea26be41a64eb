use std::io::Write;

use consts::ASCII;
use tokenizer::{Kind, Token};

use super::color;
use super::properties::Property;
use super::shorten;
use crate::{utils, Minifier};

/// Alpha at or below this collapses to the transparent literal
const EPSILON: f64 = 1e-5;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Serializes one function unit, evaluating the color functions down
/// to hex or a name where the argument shape allows it. Anything that
/// does not fit is re-emitted with shortened numeric arguments.
pub fn write<W: Write>(o: &Minifier, w: &mut W, components: &[Token]) -> std::io::Result<()> {
	let n = components.len();

	if n > 2 {
		let name = &components[0].data[..components[0].data.len() - 1];

		if name.eq_ignore_ascii_case(b"rgb")
			|| name.eq_ignore_ascii_case(b"rgba")
			|| name.eq_ignore_ascii_case(b"hsl")
			|| name.eq_ignore_ascii_case(b"hsla")
		{
			if write_color_function(o, w, name, components)?.is_some() {
				return Ok(());
			}
		} else if name.eq_ignore_ascii_case(b"local") && n == 3 {
			return write_local(w, components);
		}
	}

	fallback(o, w, components)
}

/// `Ok(None)` means the arguments did not fit the color grammar and
/// the caller should serialize the function as-is
fn write_color_function<W: Write>(
	o: &Minifier,
	w: &mut W,
	name: &[u8],
	components: &[Token],
) -> std::io::Result<Option<()>> {
	let inner = &components[1..components.len() - 1];

	let mut args: Vec<&Token> = Vec::with_capacity(4);
	for (i, token) in inner.iter().enumerate() {
		let numeric = matches!(token.kind, Kind::Number | Kind::Percentage);
		let separator = token.kind == Kind::Comma
			|| i != 5 && token.kind == Kind::Whitespace
			|| i == 5 && token.is_delim(ASCII::FORWARD_SLASH);

		if i % 2 == 0 {
			if !numeric {
				return Ok(None);
			}
			args.push(token);
		} else if !separator {
			return Ok(None);
		}
	}

	if args.len() != 3 && args.len() != 4 {
		return Ok(None);
	}

	let mut alpha = 255u8;
	if args.len() == 4 {
		let arg = args[3];
		let mut d = parse_float(arg.data, arg.kind == Kind::Percentage);
		if arg.kind == Kind::Percentage {
			d /= 100.0;
		}

		if d < EPSILON {
			w.write_all(b"#0000")?;
			return Ok(Some(()));
		}

		// At full opacity the alpha channel carries nothing
		if d < 1.0 {
			alpha = (d * 255.0 + 0.5) as u8;
		}
	}

	let hsl = name[0] == b'h' || name[0] == b'H';

	let rgba = if hsl {
		if args[0].kind != Kind::Number
			|| args[1].kind != Kind::Percentage
			|| args[2].kind != Kind::Percentage
		{
			return Ok(None);
		}

		let h = parse_float(args[0].data, false).rem_euclid(360.0);
		let s = parse_float(args[1].data, true).clamp(0.0, 100.0);
		let l = parse_float(args[2].data, true).clamp(0.0, 100.0);

		let (r, g, b) = color::hsl_to_rgb(h / 360.0, s / 100.0, l / 100.0);
		[
			(r * 255.0 + 0.5) as u8,
			(g * 255.0 + 0.5) as u8,
			(b * 255.0 + 0.5) as u8,
			alpha,
		]
	} else {
		let mut rgba = [0u8, 0, 0, alpha];
		for (channel, arg) in rgba.iter_mut().zip(&args[..3]) {
			*channel = if arg.kind == Kind::Percentage {
				let d = parse_float(arg.data, true).clamp(0.0, 100.0);
				(d / 100.0 * 255.0 + 0.5) as u8
			} else {
				let d = parse_float(arg.data, false).clamp(0.0, 255.0);
				(d + 0.5) as u8
			};
		}
		rgba
	};

	// CSS2 has no hex alpha notation
	if o.keep_css2 && alpha != 255 {
		return Ok(None);
	}

	write_hex(w, rgba)?;
	Ok(Some(()))
}

fn write_hex<W: Write>(w: &mut W, rgba: [u8; 4]) -> std::io::Result<()> {
	let mut hex = [ASCII::HASH; 9];
	for (i, byte) in rgba.iter().enumerate() {
		hex[1 + i * 2] = HEX[(byte >> 4) as usize];
		hex[2 + i * 2] = HEX[(byte & 0xf) as usize];
	}

	if rgba[3] == 255 {
		if let Some(name) = color::hex_to_name(&hex[..7]) {
			return w.write_all(name);
		}

		if hex[1] == hex[2] && hex[3] == hex[4] && hex[5] == hex[6] {
			return w.write_all(&[ASCII::HASH, hex[1], hex[3], hex[5]]);
		}

		return w.write_all(&hex[..7]);
	}

	if hex[1] == hex[2] && hex[3] == hex[4] && hex[5] == hex[6] && hex[7] == hex[8] {
		return w.write_all(&[ASCII::HASH, hex[1], hex[3], hex[5], hex[7]]);
	}

	w.write_all(&hex)
}

fn write_local<W: Write>(w: &mut W, components: &[Token]) -> std::io::Result<()> {
	let data = components[1].data;

	if components[1].kind == Kind::String && data.len() >= 2 {
		let cleaned = shorten::remove_newlines(data);
		let inner = &cleaned[1..cleaned.len() - 1];

		w.write_all(components[0].data)?;
		if utils::is_url_unquoted(inner) {
			w.write_all(inner)?;
		} else {
			w.write_all(&cleaned)?;
		}
		return w.write_all(components[2].data);
	}

	for token in components {
		w.write_all(token.data)?;
	}
	Ok(())
}

fn fallback<W: Write>(o: &Minifier, w: &mut W, components: &[Token]) -> std::io::Result<()> {
	for token in components {
		match token.kind {
			Kind::Number | Kind::Percentage | Kind::Dimension => {
				let (_, data) = shorten::token(o, Property::Unknown, token.kind, token.data);
				w.write_all(&data)?;
			}
			_ => w.write_all(token.data)?,
		}
	}
	Ok(())
}

fn parse_float(data: &[u8], percentage: bool) -> f64 {
	let data = if percentage { &data[..data.len() - 1] } else { data };

	std::str::from_utf8(data)
		.ok()
		.and_then(|s| s.parse().ok())
		.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tokenizer::Lexer;

	fn eval(input: &str) -> String {
		let mut lexer = Lexer::new(input.as_bytes());
		let mut components = Vec::new();
		while let Some(token) = lexer.next() {
			if token.kind != Kind::Whitespace {
				components.push(token);
			}
		}

		let mut out = Vec::new();
		write(&Minifier::default(), &mut out, &components).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn rgb() {
		assert_eq!(eval("rgb(255,255,255)"), "#fff");
		assert_eq!(eval("rgb(255,0,0)"), "red");
		assert_eq!(eval("rgba(0,0,0,0)"), "#0000");
		assert_eq!(eval("rgba(0,0,0,1)"), "#000");
		assert_eq!(eval("rgba(0,0,0,0.5)"), "#00000080");
		assert_eq!(eval("rgb(100%,100%,100%)"), "#fff");
		assert_eq!(eval("rgba(255,0,0,50%)"), "#ff000080");
	}

	#[test]
	fn hsl() {
		assert_eq!(eval("hsl(0,100%,50%)"), "red");
		assert_eq!(eval("hsl(120,100%,25%)"), "green");
		assert_eq!(eval("hsla(0,0%,100%,.2)"), "#fff3");
		// Out of range hue wraps
		assert_eq!(eval("hsl(360,100%,50%)"), "red");
	}

	#[test]
	fn invalid_shapes_pass_through() {
		assert_eq!(eval("rgb(255,255)"), "rgb(255,255)");
		assert_eq!(eval("hsl(120deg,100%,50%)"), "hsl(120deg,100%,50%)");
		assert_eq!(eval("rgb(var(--x),0,0)"), "rgb(var(--x),0,0)");
	}

	#[test]
	fn local_unquotes() {
		assert_eq!(eval("local(\"MyFont\")"), "local(MyFont)");
		assert_eq!(eval("local(\"My Font\")"), "local(\"My Font\")");
	}

	#[test]
	fn other_functions_shorten_numbers() {
		assert_eq!(eval("translate(10.0px,0.50em)"), "translate(10px,.5em)");
	}
}
