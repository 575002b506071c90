mod coordinates;
mod tour;

pub use coordinates::read_cities;
pub use tour::read_tour;

use std::io::BufRead;

use crate::error::{Error, Result};
use crate::types::TSPFileKind;

// Header content is deliberately not interpreted, only counted. Running out
// of input before the header block ends is the one thing that is reported.
fn skip_header_lines<R: BufRead>(reader: &mut R, kind: &TSPFileKind) -> Result<()> {
    let expected_header_lines = kind.layout().header_lines;
    let mut line = String::new();

    for line_number in 1..=expected_header_lines {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::invalid_format(format!(
                "{} ended at line {} before the expected {} header lines",
                kind.to_string(),
                line_number,
                expected_header_lines
            )));
        }
    }

    return Ok(());
}
