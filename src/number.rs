use std::borrow::Cow;

use consts::ASCII;

/// Length of the numeric part of a dimension token, mirrors how the
/// tokenizer consumed it so `5e5x` splits after `5e5`
pub fn split(data: &[u8]) -> usize {
	let mut i = 0;

	if matches!(data.first(), Some(&(ASCII::PLUS | ASCII::DASH))) {
		i += 1;
	}

	while matches!(data.get(i), Some(x) if x.is_ascii_digit()) {
		i += 1;
	}

	if data.get(i) == Some(&ASCII::DOT) && matches!(data.get(i + 1), Some(x) if x.is_ascii_digit()) {
		i += 1;
		while matches!(data.get(i), Some(x) if x.is_ascii_digit()) {
			i += 1;
		}
	}

	if matches!(data.get(i), Some(b'e' | b'E')) {
		let sign = matches!(data.get(i + 1), Some(&(ASCII::PLUS | ASCII::DASH)));
		if matches!(data.get(i + 1 + sign as usize), Some(x) if x.is_ascii_digit()) {
			i += 2 + sign as usize;
			while matches!(data.get(i), Some(x) if x.is_ascii_digit()) {
				i += 1;
			}
		}
	}

	i
}

/// Shortest equivalent rendering of a numeric token. `decimals` caps
/// the fraction length, rounding half away from zero. Exponent form is
/// considered only with `allow_exp` and unlimited precision, and a
/// longer or equal exponent form always loses to plain notation.
pub fn minify(num: &[u8], decimals: Option<u8>, allow_exp: bool) -> Cow<[u8]> {
	let Some((neg, mut digits, mut e10)) = parse(num) else {
		return Cow::Borrowed(num);
	};

	normalize(&mut digits, &mut e10);

	if let Some(prec) = decimals {
		let frac = (-e10).max(0) as usize;
		if frac > prec as usize {
			round(&mut digits, &mut e10, frac - prec as usize);
			normalize(&mut digits, &mut e10);
		}
	}

	if digits.is_empty() {
		return if num == b"0" {
			Cow::Borrowed(num)
		} else {
			Cow::Borrowed(&b"0"[..])
		};
	}

	let mut out = render_plain(neg, &digits, e10);

	if allow_exp && decimals.is_none() && e10 != 0 {
		let exp = render_exp(neg, &digits, e10);
		if exp.len() < out.len() {
			out = exp;
		}
	}

	if out == num {
		Cow::Borrowed(num)
	} else {
		Cow::Owned(out)
	}
}

/// Sign, significant digits and a base 10 exponent. `None` for
/// anything that is not a plain CSS number
fn parse(num: &[u8]) -> Option<(bool, Vec<u8>, i32)> {
	let mut digits = Vec::with_capacity(num.len());
	let mut e10 = 0i32;
	let mut i = 0;

	let neg = match num.first() {
		Some(&ASCII::DASH) => {
			i += 1;
			true
		}
		Some(&ASCII::PLUS) => {
			i += 1;
			false
		}
		_ => false,
	};

	while matches!(num.get(i), Some(x) if x.is_ascii_digit()) {
		digits.push(num[i] - ASCII::ZERO);
		i += 1;
	}

	if num.get(i) == Some(&ASCII::DOT) {
		i += 1;
		while matches!(num.get(i), Some(x) if x.is_ascii_digit()) {
			digits.push(num[i] - ASCII::ZERO);
			e10 -= 1;
			i += 1;
		}
	}

	if matches!(num.get(i), Some(b'e' | b'E')) {
		i += 1;
		let eneg = match num.get(i) {
			Some(&ASCII::DASH) => {
				i += 1;
				true
			}
			Some(&ASCII::PLUS) => {
				i += 1;
				false
			}
			_ => false,
		};

		let mut exp = 0i32;
		let from = i;
		while matches!(num.get(i), Some(x) if x.is_ascii_digit()) {
			exp = (exp * 10 + (num[i] - ASCII::ZERO) as i32).min(9999);
			i += 1;
		}
		if i == from {
			return None;
		}

		e10 += if eneg { -exp } else { exp };
	}

	if i != num.len() || digits.is_empty() {
		return None;
	}

	Some((neg, digits, e10))
}

fn normalize(digits: &mut Vec<u8>, e10: &mut i32) {
	let nonzero = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
	digits.drain(..nonzero);

	while digits.last() == Some(&0) {
		digits.pop();
		*e10 += 1;
	}
}

/// Drops `cut` trailing fraction positions with rounding
fn round(digits: &mut Vec<u8>, e10: &mut i32, cut: usize) {
	if cut > digits.len() {
		// Even rounding up cannot reach the kept positions
		digits.clear();
		return;
	}

	let keep = digits.len() - cut;
	let up = digits[keep] >= 5;
	digits.truncate(keep);
	*e10 += cut as i32;

	if !up {
		return;
	}

	let mut i = digits.len();
	loop {
		if i == 0 {
			digits.insert(0, 1);
			return;
		}
		i -= 1;
		if digits[i] == 9 {
			digits[i] = 0;
		} else {
			digits[i] += 1;
			return;
		}
	}
}

fn render_plain(neg: bool, digits: &[u8], e10: i32) -> Vec<u8> {
	let len = digits.len() as i32;
	let mut out = Vec::with_capacity(digits.len() + e10.unsigned_abs() as usize + 2);

	if neg {
		out.push(ASCII::DASH);
	}

	if e10 >= 0 {
		out.extend(digits.iter().map(|d| d + ASCII::ZERO));
		out.resize(out.len() + e10 as usize, ASCII::ZERO);
	} else if -e10 >= len {
		out.push(ASCII::DOT);
		out.resize(out.len() + (-e10 - len) as usize, ASCII::ZERO);
		out.extend(digits.iter().map(|d| d + ASCII::ZERO));
	} else {
		let split = (len + e10) as usize;
		out.extend(digits[..split].iter().map(|d| d + ASCII::ZERO));
		out.push(ASCII::DOT);
		out.extend(digits[split..].iter().map(|d| d + ASCII::ZERO));
	}

	out
}

fn render_exp(neg: bool, digits: &[u8], e10: i32) -> Vec<u8> {
	let mut out = Vec::with_capacity(digits.len() + 6);

	if neg {
		out.push(ASCII::DASH);
	}

	out.extend(digits.iter().map(|d| d + ASCII::ZERO));
	out.push(b'e');
	out.extend(e10.to_string().into_bytes());

	out
}
