/// Named color to its shorter hex form. Only strictly shorter
/// replacements are listed, so the mapping can never undo itself.
pub fn name_to_hex(name: &[u8]) -> Option<&'static [u8]> {
	Some(match name {
		b"aliceblue" => b"#f0f8ff",
		b"antiquewhite" => b"#faebd7",
		b"aquamarine" => b"#7fffd4",
		b"black" => b"#000",
		b"blanchedalmond" => b"#ffebcd",
		b"blueviolet" => b"#8a2be2",
		b"burlywood" => b"#deb887",
		b"cadetblue" => b"#5f9ea0",
		b"chartreuse" => b"#7fff00",
		b"chocolate" => b"#d2691e",
		b"cornflowerblue" => b"#6495ed",
		b"cornsilk" => b"#fff8dc",
		b"darkblue" => b"#00008b",
		b"darkcyan" => b"#008b8b",
		b"darkgoldenrod" => b"#b8860b",
		b"darkgray" => b"#a9a9a9",
		b"darkgreen" => b"#006400",
		b"darkgrey" => b"#a9a9a9",
		b"darkkhaki" => b"#bdb76b",
		b"darkmagenta" => b"#8b008b",
		b"darkolivegreen" => b"#556b2f",
		b"darkorange" => b"#ff8c00",
		b"darkorchid" => b"#9932cc",
		b"darksalmon" => b"#e9967a",
		b"darkseagreen" => b"#8fbc8f",
		b"darkslateblue" => b"#483d8b",
		b"darkslategray" => b"#2f4f4f",
		b"darkslategrey" => b"#2f4f4f",
		b"darkturquoise" => b"#00ced1",
		b"darkviolet" => b"#9400d3",
		b"deeppink" => b"#ff1493",
		b"deepskyblue" => b"#00bfff",
		b"dodgerblue" => b"#1e90ff",
		b"firebrick" => b"#b22222",
		b"floralwhite" => b"#fffaf0",
		b"forestgreen" => b"#228b22",
		b"fuchsia" => b"#f0f",
		b"gainsboro" => b"#dcdcdc",
		b"ghostwhite" => b"#f8f8ff",
		b"goldenrod" => b"#daa520",
		b"greenyellow" => b"#adff2f",
		b"honeydew" => b"#f0fff0",
		b"indianred" => b"#cd5c5c",
		b"lavender" => b"#e6e6fa",
		b"lavenderblush" => b"#fff0f5",
		b"lawngreen" => b"#7cfc00",
		b"lemonchiffon" => b"#fffacd",
		b"lightblue" => b"#add8e6",
		b"lightcoral" => b"#f08080",
		b"lightcyan" => b"#e0ffff",
		b"lightgoldenrodyellow" => b"#fafad2",
		b"lightgray" => b"#d3d3d3",
		b"lightgreen" => b"#90ee90",
		b"lightgrey" => b"#d3d3d3",
		b"lightpink" => b"#ffb6c1",
		b"lightsalmon" => b"#ffa07a",
		b"lightseagreen" => b"#20b2aa",
		b"lightskyblue" => b"#87cefa",
		b"lightslategray" => b"#789",
		b"lightslategrey" => b"#789",
		b"lightsteelblue" => b"#b0c4de",
		b"lightyellow" => b"#ffffe0",
		b"limegreen" => b"#32cd32",
		b"magenta" => b"#f0f",
		b"mediumaquamarine" => b"#66cdaa",
		b"mediumblue" => b"#0000cd",
		b"mediumorchid" => b"#ba55d3",
		b"mediumpurple" => b"#9370db",
		b"mediumseagreen" => b"#3cb371",
		b"mediumslateblue" => b"#7b68ee",
		b"mediumspringgreen" => b"#00fa9a",
		b"mediumturquoise" => b"#48d1cc",
		b"mediumvioletred" => b"#c71585",
		b"midnightblue" => b"#191970",
		b"mintcream" => b"#f5fffa",
		b"mistyrose" => b"#ffe4e1",
		b"moccasin" => b"#ffe4b5",
		b"navajowhite" => b"#ffdead",
		b"olivedrab" => b"#6b8e23",
		b"orangered" => b"#ff4500",
		b"palegoldenrod" => b"#eee8aa",
		b"palegreen" => b"#98fb98",
		b"paleturquoise" => b"#afeeee",
		b"palevioletred" => b"#db7093",
		b"papayawhip" => b"#ffefd5",
		b"peachpuff" => b"#ffdab9",
		b"powderblue" => b"#b0e0e6",
		b"rebeccapurple" => b"#639",
		b"rosybrown" => b"#bc8f8f",
		b"royalblue" => b"#4169e1",
		b"saddlebrown" => b"#8b4513",
		b"sandybrown" => b"#f4a460",
		b"seagreen" => b"#2e8b57",
		b"seashell" => b"#fff5ee",
		b"slateblue" => b"#6a5acd",
		b"slategray" => b"#708090",
		b"slategrey" => b"#708090",
		b"springgreen" => b"#00ff7f",
		b"steelblue" => b"#4682b4",
		b"turquoise" => b"#40e0d0",
		b"white" => b"#fff",
		b"whitesmoke" => b"#f5f5f5",
		b"yellow" => b"#ff0",
		b"yellowgreen" => b"#9acd32",
		_ => return None,
	})
}

/// Six digit hex to a strictly shorter color name
pub fn hex_to_name(hex: &[u8]) -> Option<&'static [u8]> {
	Some(match hex {
		b"#000080" => b"navy",
		b"#008000" => b"green",
		b"#008080" => b"teal",
		b"#4b0082" => b"indigo",
		b"#800000" => b"maroon",
		b"#800080" => b"purple",
		b"#808000" => b"olive",
		b"#808080" => b"gray",
		b"#a0522d" => b"sienna",
		b"#a52a2a" => b"brown",
		b"#c0c0c0" => b"silver",
		b"#cd853f" => b"peru",
		b"#d2b48c" => b"tan",
		b"#da70d6" => b"orchid",
		b"#dda0dd" => b"plum",
		b"#ee82ee" => b"violet",
		b"#f0e68c" => b"khaki",
		b"#f0ffff" => b"azure",
		b"#f5deb3" => b"wheat",
		b"#f5f5dc" => b"beige",
		b"#fa8072" => b"salmon",
		b"#faf0e6" => b"linen",
		b"#ff0000" => b"red",
		b"#ff6347" => b"tomato",
		b"#ff7f50" => b"coral",
		b"#ffa500" => b"orange",
		b"#ffc0cb" => b"pink",
		b"#ffd700" => b"gold",
		b"#ffe4c4" => b"bisque",
		b"#fffafa" => b"snow",
		b"#fffff0" => b"ivory",
		_ => return None,
	})
}

/// HSL to RGB, all channels in `0..=1`
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
	let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
	let m1 = l * 2.0 - m2;

	(
		hue_to_rgb(m1, m2, h + 1.0 / 3.0),
		hue_to_rgb(m1, m2, h),
		hue_to_rgb(m1, m2, h - 1.0 / 3.0),
	)
}

fn hue_to_rgb(m1: f64, m2: f64, h: f64) -> f64 {
	let h = if h < 0.0 {
		h + 1.0
	} else if h > 1.0 {
		h - 1.0
	} else {
		h
	};

	if h * 6.0 < 1.0 {
		m1 + (m2 - m1) * h * 6.0
	} else if h * 2.0 < 1.0 {
		m2
	} else if h * 3.0 < 2.0 {
		m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
	} else {
		m1
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tables_only_shorten() {
		assert_eq!(name_to_hex(b"black"), Some(&b"#000"[..]));
		assert_eq!(name_to_hex(b"white"), Some(&b"#fff"[..]));
		assert_eq!(name_to_hex(b"rebeccapurple"), Some(&b"#639"[..]));
		// Equal length stays a name
		assert_eq!(name_to_hex(b"red"), None);
		assert_eq!(name_to_hex(b"blue"), None);

		assert_eq!(hex_to_name(b"#ff0000"), Some(&b"red"[..]));
		assert_eq!(hex_to_name(b"#000080"), Some(&b"navy"[..]));
		assert_eq!(hex_to_name(b"#ffffff"), None);
	}

	#[test]
	fn hsl_conversion() {
		let (r, g, b) = hsl_to_rgb(0.0, 1.0, 0.5);
		assert_eq!((r, g, b), (1.0, 0.0, 0.0));

		let (r, g, b) = hsl_to_rgb(1.0 / 3.0, 1.0, 0.25);
		assert!((r - 0.0).abs() < 1e-9 && (g - 0.5).abs() < 1e-9 && (b - 0.0).abs() < 1e-9);
	}
}
