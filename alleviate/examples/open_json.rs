//! Opens a file that does not exist and prints the JSON report.
//!
//! ```sh
//! cargo run -p alleviate --example open_json
//! ```

use alleviate::{alleviate, attempt, JsonRenderer, Settings};
use std::fs::File;

fn main() -> alleviate::Result<()> {
    if let Err(failure) = attempt("open", "text.py", |p| File::open(p)) {
        let report = alleviate(&failure, &Settings::default())?;
        println!("{}", JsonRenderer::new().try_render(&report)?);
    }
    Ok(())
}
