pub use minifier::run;

mod color;
mod function;
mod minifier;
mod properties;
mod shorten;
mod shorthand;
