use utils::*;

#[test]
fn rulesets() {
	run_cases(
		minify,
		&[
			("a { color : red }", "a{color:red}"),
			("A.Foo > B I , .Bar { color : #FF0000FF }", "a.Foo>b i,.Bar{color:red}"),
			("div[class=\"Box\"] { margin : 1px 2px 1px 2px }", "div[class=Box]{margin:1px 2px}"),
			("a{top:0px;left: 0 ;}", "a{top:0;left:0}"),
			("a{}b{}", "a{}b{}"),
			(
				":root { --Main-Color : #FF0000 ; color : var(--Main-Color) }",
				":root{--Main-Color:#FF0000;color:var(--Main-Color)}",
			),
			(
				"/*  drop me  */ a { color : red } /*! Keep  Me */",
				"a{color:red}/*!Keep Me*/",
			),
			("a { /*! x */ color : red }", "a{/*!x*/color:red}"),
		],
	);
}

#[test]
fn at_rules() {
	run_cases(
		minify,
		&[
			("@import url( foo.css ) ;", "@import \"foo.css\""),
			("@import url( 'foo.css' ) ; a { }", "@import 'foo.css';a{}"),
			(
				"@media screen and ( max-width : 100px ) { a { top : 0px } }",
				"@media screen and (max-width:100px){a{top:0}}",
			),
			(
				"@font-face { font-family : \"My Font\" ; src : url( font.woff2 ) format( 'woff2' ) }",
				"@font-face{font-family:my font;src:url(font.woff2) format('woff2')}",
			),
			(
				"@charset \"UTF-8\";@namespace svg url(http://www.w3.org/2000/svg);",
				"@charset \"UTF-8\";@namespace svg url(http://www.w3.org/2000/svg)",
			),
			(
				"@keyframes Fade { from { opacity : 1 } to { opacity : 0 } }",
				"@keyframes Fade{from{opacity:1}to{opacity:0}}",
			),
		],
	);
}

#[test]
fn declarations() {
	run_cases(
		minify_inline,
		&[
			("margin : 10px 20px 10px 20px", "margin:10px 20px"),
			("margin : 0px 0 0.0em 0", "margin:0"),
			("padding : 1px 2px 3px 2px", "padding:1px 2px 3px"),
			("border-width : 0.50px 0.50px 0.50px 0.50px", "border-width:.5px"),
			("border : none", "border:0"),
			("border : 0 none", "border:0"),
			("outline : none thick", "outline:0 thick"),
			("background : none", "background:0 0"),
			("background : #00000000", "background:0 0"),
			("box-shadow : 0px 0 0 0em", "box-shadow:0 0"),
			("z-index : 007", "z-index:007"),
			("width : 100.0px", "width:100px"),
			("top : -0.5px", "top:-.5px"),
			("transition : all .30s ease-in-out", "transition:all .3s ease-in-out"),
			("color : red !important", "color:red!important"),
			("margin : 0px 0px !important", "margin:0!important"),
			("flex : 0px", "flex:0px"),
		],
	);
}

#[test]
fn colors() {
	run_cases(
		minify_inline,
		&[
			("color : #FFFFFF", "color:#fff"),
			("color : #ff0000", "color:red"),
			("color : #ff0000ff", "color:red"),
			("color : #ABCDEF", "color:#abcdef"),
			("color : #11223344", "color:#1234"),
			("color : #12345600", "color:#0000"),
			("color : rgba(0, 0, 0, 0)", "color:#0000"),
			("color : rgba(0, 0, 0, 1.0)", "color:#000"),
			("color : rgba(255, 0, 0, 0.5)", "color:#ff000080"),
			("color : rgb(255, 0, 0)", "color:red"),
			("color : rgb(100%, 100%, 100%)", "color:#fff"),
			("color : rgb(255 0 0/50%)", "color:#ff000080"),
			("color : hsl(0, 100%, 50%)", "color:red"),
			("color : hsla(120, 100%, 25%, 1)", "color:green"),
			("color : hsl(360, 100%, 50%)", "color:red"),
			("color : rgb(var(--r), 0, 0)", "color:rgb(var(--r),0,0)"),
			("color : BLACK", "color:#000"),
			("color : blue", "color:blue"),
		],
	);
}

#[test]
fn fonts() {
	run_cases(
		minify_inline,
		&[
			("font-weight : normal", "font-weight:400"),
			("font-weight : BOLD", "font-weight:700"),
			("font-family : \"Arial\"", "font-family:arial"),
			("font-family : \"Comic Sans MS\", cursive", "font-family:comic sans ms,cursive"),
			(
				"font : normal normal bold 12pt / normal Arial , sans-serif",
				"font:700 12pt arial,sans-serif",
			),
			("font : bold 12pt / 1.5 Arial", "font:700 12pt/1.5 arial"),
			("font : italic small-caps 400 14px serif", "font:italic small-caps 14px serif"),
		],
	);
}

#[test]
fn urls_and_filters() {
	run_cases(
		minify_inline,
		&[
			("background : URL( 'images/logo.png' )", "background:url(images/logo.png)"),
			("background : url(data:text/plain;base64,Zm9v)", "background:url(data:,foo)"),
			(
				"-ms-filter : \"progid:DXImageTransform.Microsoft.Alpha(Opacity=50)\"",
				"-ms-filter:\"alpha(opacity=50)\"",
			),
			(
				"filter : progid:DXImageTransform.Microsoft.Alpha(Opacity=80)",
				"filter:alpha(opacity=80)",
			),
		],
	);
}

#[test]
fn malformed() {
	run_cases(
		minify,
		&[
			("a { color red ; top : 0px }", "a{color red;top:0}"),
			("a { * zoom : 1 }", "a{* zoom : 1}"),
			("a{top:0;color red;left:0}", "a{top:0;color red;left:0}"),
			("a { color : red", "a{color:red}"),
		],
	);
}

#[test]
fn options() {
	let css2 = css_minify::Minifier::new().keep_css2();

	let mut out = Vec::new();
	css2.minify_inline("width : 100000px", &mut out).unwrap();
	assert_eq!(out, b"width:100000px");

	out.clear();
	css2.minify_inline("color : rgba(0, 0, 0, 0.5)", &mut out).unwrap();
	assert_eq!(out, b"color:rgba(0,0,0,.5)");

	assert_eq!(minify_inline("width : 100000px"), "width:1e5px");

	let capped = css_minify::Minifier::new().decimals(2);

	out.clear();
	capped.minify_inline("width : 1.005px", &mut out).unwrap();
	assert_eq!(out, b"width:1.01px");

	out.clear();
	capped.minify_inline("width : 0.004px", &mut out).unwrap();
	assert_eq!(out, b"width:0");
}

#[test]
fn idempotence() {
	let sheets = [
		"a { color : red }",
		"A.Foo > B I , .Bar { color : #FF0000FF }",
		"@import url( foo.css ) ; a { margin : 0px 0 0em 0 }",
		"@media screen and ( max-width : 100px ) { a { top : 0px } }",
		"@font-face { font-family : \"My Font\" ; src : url( font.woff2 ) format( 'woff2' ) }",
		"a { font : normal normal bold 12pt / normal Arial , sans-serif }",
		"a { color : rgba(255, 0, 0, 0.5) ; background : url(data:text/plain;base64,Zm9v) }",
		"a { filter : progid:DXImageTransform.Microsoft.Alpha(Opacity=80) !important }",
		"/*! Keep  Me */ a { color red ; top : 0 }",
	];

	for sheet in sheets {
		let once = minify(sheet);
		let twice = minify(&once);

		assert_eq!(once, twice, "not idempotent for {sheet:?}");
	}
}

mod utils;
