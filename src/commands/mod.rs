mod input;
mod shorten;
mod tokenize;

pub use shorten::*;
pub use tokenize::*;
