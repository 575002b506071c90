use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::types::TSPFileKind;

/// Reads the visiting order from a tour file laid out as described by
/// `TSPFileKind::Tour`: exactly `num_cities` 1-based city ids forming a
/// permutation. Ids may be separated by any whitespace, including newlines,
/// and anything after the first `num_cities` ids (such as a TSPLIB `-1`
/// terminator) is ignored.
pub fn read_tour(tour_path: &Path, num_cities: u64) -> Result<Vec<u64>> {
    let file = File::open(tour_path)?;
    let mut reader = BufReader::new(file);
    let kind = TSPFileKind::Tour;

    super::skip_header_lines(&mut reader, &kind)?;

    let mut body = String::new();
    reader.read_to_string(&mut body)?;

    let mut tour: Vec<u64> = Vec::with_capacity(num_cities as usize);
    let mut seen = vec![false; num_cities as usize];
    for token in body.split_whitespace().take(num_cities as usize) {
        let id = token.parse::<u64>().map_err(|_| {
            Error::invalid_format(format!(
                "{} visit {}: city id {:?} is not an integer",
                kind.to_string(),
                tour.len() + 1,
                token
            ))
        })?;

        if id < 1 || id > num_cities {
            return Err(Error::invalid_tour(format!(
                "visit {} names city {}, outside 1..={}",
                tour.len() + 1,
                id,
                num_cities
            )));
        }
        if seen[(id - 1) as usize] {
            return Err(Error::invalid_tour(format!(
                "city {} is visited more than once",
                id
            )));
        }

        seen[(id - 1) as usize] = true;
        tour.push(id);
    }

    if (tour.len() as u64) < num_cities {
        return Err(Error::invalid_tour(format!(
            "tour lists {} cities, expected {}",
            tour.len(),
            num_cities
        )));
    }

    debug!("read a {} city tour from {}", tour.len(), tour_path.display());

    return Ok(tour);
}
