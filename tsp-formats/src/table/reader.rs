#[cfg(test)]
#[path = "../../tests/unit/table/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use tsp_core::models::City;
use tsp_core::utils::GenericError;

/// A trait to read a list of cities in the table format.
pub trait TableProblem {
    /// Reads cities in the order of their definition.
    fn read_table(self) -> Result<Vec<City>, GenericError>;
}

impl<R: Read> TableProblem for BufReader<R> {
    fn read_table(self) -> Result<Vec<City>, GenericError> {
        TableReader::new(self).read_cities()
    }
}

impl TableProblem for String {
    fn read_table(self) -> Result<Vec<City>, GenericError> {
        TableReader::new(BufReader::new(self.as_bytes())).read_cities()
    }
}

struct TableReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
}

impl<R: Read> TableReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader }
    }

    fn read_cities(&mut self) -> Result<Vec<City>, GenericError> {
        // header
        skip_lines(1, &mut self.reader, &mut self.buffer)?;

        let mut cities = vec![];
        while read_line(&mut self.reader, &mut self.buffer)? > 0 {
            let line = self.buffer.trim();
            if line.is_empty() {
                continue;
            }

            cities.push(parse_city(line)?);
        }

        Ok(cities)
    }
}

fn parse_city(line: &str) -> Result<City, GenericError> {
    let data = line.split_whitespace().collect::<Vec<_>>();

    if let [name, x, y] = data.as_slice() {
        let x = parse_float(x, format!("cannot parse x coordinate of '{name}' in '{line}'").as_str())?;
        let y = parse_float(y, format!("cannot parse y coordinate of '{name}' in '{line}'").as_str())?;

        Ok(City::new(name, x, y))
    } else {
        Err(format!("unexpected city data: '{line}'").into())
    }
}
