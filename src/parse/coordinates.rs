use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{City, TSPFileKind};

/// Reads `num_cities` city records from a coordinate file laid out as
/// described by `TSPFileKind::NodeCoord`. The cities are returned in read
/// order, which is also the row/column order of the distance matrix.
pub fn read_cities(locations_path: &Path, num_cities: u64) -> Result<Vec<City>> {
    let file = File::open(locations_path)?;
    let mut reader = BufReader::new(file);
    let kind = TSPFileKind::NodeCoord;

    super::skip_header_lines(&mut reader, &kind)?;

    let mut cities: Vec<City> = Vec::with_capacity(num_cities as usize);
    let mut line = String::new();
    for record_index in 0..num_cities as usize {
        let line_number = kind.layout().header_lines + record_index + 1;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::invalid_format(format!(
                "{} holds only {} coordinate records, expected {}",
                kind.to_string(),
                record_index,
                num_cities
            )));
        }

        cities.push(parse_city_record(&line, line_number, &kind)?);
    }

    // Tour identifiers are mapped to matrix rows as `id - 1`, which is only
    // meaningful when the declared ids are 1..=N in read order.
    if let Some((record_index, city)) = cities
        .iter()
        .enumerate()
        .find(|(i, city)| city.id != (*i as u64) + 1)
    {
        warn!(
            "city ids are not the dense range 1..={} in read order (record {} declares id {}); tour distances will be computed against read order",
            num_cities,
            record_index + 1,
            city.id
        );
    }

    debug!(
        "read {} cities from {}",
        cities.len(),
        locations_path.display()
    );

    return Ok(cities);
}

fn parse_city_record(line: &str, line_number: usize, kind: &TSPFileKind) -> Result<City> {
    let mut tokens = line.split_whitespace();

    let (id_token, x_token, y_token) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(id), Some(x), Some(y)) => (id, x, y),
        _ => {
            return Err(Error::invalid_format(format!(
                "{} line {}: expected `<id> <x> <y>`, got {:?}",
                kind.to_string(),
                line_number,
                line.trim_end()
            )));
        }
    };

    if tokens.next().is_some() {
        return Err(Error::invalid_format(format!(
            "{} line {}: more than {} fields in {:?}",
            kind.to_string(),
            line_number,
            kind.layout().tokens_per_record,
            line.trim_end()
        )));
    }

    let id = id_token.parse::<u64>().map_err(|_| {
        Error::invalid_format(format!(
            "{} line {}: city id {:?} is not an integer",
            kind.to_string(),
            line_number,
            id_token
        ))
    })?;
    let x = x_token.parse::<f64>().map_err(|_| {
        Error::invalid_format(format!(
            "{} line {}: x coordinate {:?} is not a number",
            kind.to_string(),
            line_number,
            x_token
        ))
    })?;
    let y = y_token.parse::<f64>().map_err(|_| {
        Error::invalid_format(format!(
            "{} line {}: y coordinate {:?} is not a number",
            kind.to_string(),
            line_number,
            y_token
        ))
    })?;

    return Ok(City { id, x, y });
}
