use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use consts::ASCII;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Re-encodes a `data:` URI with whichever of base64 or percent
/// encoding comes out shorter, dropping the default mediatype along the
/// way. `None` when the input is not a decodable data URI.
pub fn minify(uri: &[u8]) -> Option<Vec<u8>> {
	if uri.len() < 5 || !uri[..5].eq_ignore_ascii_case(b"data:") {
		return None;
	}

	let rest = &uri[5..];
	let comma = rest.iter().position(|&byte| byte == ASCII::COMMA)?;
	let (header, payload) = (&rest[..comma], &rest[comma + 1..]);

	let mut parts: Vec<&[u8]> = header.split(|&byte| byte == ASCII::SEMICOLON).collect();

	let was_base64 = matches!(parts.last(), Some(x) if x.eq_ignore_ascii_case(b"base64"));
	if was_base64 {
		parts.pop();
	}

	let data = if was_base64 {
		STANDARD.decode(payload).ok()?
	} else {
		percent_decode(payload)
	};

	// `text/plain;charset=us-ascii` is the default and carries no info
	let mut mediatype = Vec::new();
	for (i, part) in parts.iter().enumerate() {
		if part.is_empty()
			|| i == 0 && part.eq_ignore_ascii_case(b"text/plain")
			|| part.eq_ignore_ascii_case(b"charset=us-ascii")
		{
			continue;
		}

		if !mediatype.is_empty() || i > 0 {
			mediatype.push(ASCII::SEMICOLON);
		}
		mediatype.extend(part.to_ascii_lowercase());
	}

	let escapes = data.iter().filter(|&&byte| must_escape(byte)).count();
	let percent_len = data.len() + 2 * escapes;
	let base64_len = ";base64".len() + STANDARD.encode(&data).len();

	let mut out = Vec::with_capacity(5 + mediatype.len() + 8 + percent_len.min(base64_len));
	out.extend(b"data:");
	out.extend(&mediatype);

	if percent_len <= base64_len {
		out.push(ASCII::COMMA);
		for &byte in &data {
			if must_escape(byte) {
				out.push(ASCII::PERCENTAGE);
				out.push(HEX[(byte >> 4) as usize]);
				out.push(HEX[(byte & 0xf) as usize]);
			} else {
				out.push(byte);
			}
		}
	} else {
		out.extend(b";base64,");
		out.extend(STANDARD.encode(&data).into_bytes());
	}

	Some(out)
}

#[inline]
fn must_escape(byte: u8) -> bool {
	byte <= ASCII::SPACE
		|| byte >= 0x7f
		|| matches!(
			byte,
			ASCII::DOUBLE_QUOTE
				| ASCII::SINGLE_QUOTE
				| ASCII::HASH | ASCII::PERCENTAGE
				| ASCII::PAREN_OPEN
				| ASCII::PAREN_CLOSE
				| ASCII::LT | ASCII::GT
				| ASCII::SQUARED_OPEN
				| ASCII::SQUARED_CLOSE
				| ASCII::BACK_SLASH
				| b'^' | b'`' | b'{' | b'|' | b'}'
		)
}

fn percent_decode(data: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(data.len());
	let mut i = 0;

	while i < data.len() {
		if data[i] == ASCII::PERCENTAGE {
			let hi = data.get(i + 1).and_then(|&x| (x as char).to_digit(16));
			let lo = data.get(i + 2).and_then(|&x| (x as char).to_digit(16));

			if let (Some(hi), Some(lo)) = (hi, lo) {
				out.push((hi * 16 + lo) as u8);
				i += 3;
				continue;
			}
		}

		out.push(data[i]);
		i += 1;
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn check(input: &str, expected: &str) {
		let out = minify(input.as_bytes()).unwrap();
		assert_eq!(std::str::from_utf8(&out).unwrap(), expected, "minify({input:?})");
	}

	#[test]
	fn default_mediatype_dropped() {
		check("data:text/plain;charset=us-ascii,foo", "data:,foo");
		check("data:TEXT/PLAIN,foo-bar", "data:,foo-bar");
	}

	#[test]
	fn shorter_encoding_wins() {
		// Plain ascii stays percent encoded, base64 would pad it out
		check("data:text/plain;base64,Zm9v", "data:,foo");
		// Binary-ish payload flips to base64
		check("data:text/plain,%00%01%02%03%04%05", "data:;base64,AAECAwQF");
	}

	#[test]
	fn mediatype_lowercased() {
		check("data:IMAGE/SVG+XML,a", "data:image/svg+xml,a");
	}

	#[test]
	fn not_a_data_uri() {
		assert!(minify(b"https://example.com/a.css").is_none());
		assert!(minify(b"data:no-comma").is_none());
	}
}
