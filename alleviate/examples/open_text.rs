//! Opens a file that does not exist and prints the detailed report.
//!
//! Run from a directory containing `test.py`:
//!
//! ```sh
//! cargo run -p alleviate --example open_text
//! ```

use alleviate::{alleviate, attempt, DetailedRenderer, Renderer, Settings};
use std::fs::File;

fn main() -> alleviate::Result<()> {
    match attempt("open", "text.py", |p| File::open(p)) {
        Ok(_) => println!("text.py opened"),
        Err(failure) => {
            let report = alleviate(&failure, &Settings::default())?;
            print!("{}", DetailedRenderer::new().render(&report));
        }
    }
    Ok(())
}
