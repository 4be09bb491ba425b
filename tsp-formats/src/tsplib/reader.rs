#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use rustc_hash::FxHashSet;
use std::io::{BufReader, Read};
use tsp_core::models::City;
use tsp_core::utils::GenericError;

/// A trait to read tsplib95 problem. Please note that it is very basic implementation of the format specification.
pub trait TsplibProblem {
    /// Reads cities in the order of node definition.
    fn read_tsplib(self) -> Result<Vec<City>, GenericError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> Result<Vec<City>, GenericError> {
        TsplibReader::new(self).read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> Result<Vec<City>, GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes())).read_problem()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    dimension: Option<usize>,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>) -> Self {
        Self { buffer: String::new(), reader, dimension: None }
    }

    fn read_problem(&mut self) -> Result<Vec<City>, GenericError> {
        self.read_meta()?;

        let cities = self.read_node_coords()?;
        self.read_optional_eof()?;

        Ok(cities)
    }

    fn read_meta(&mut self) -> Result<(), GenericError> {
        loop {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Err("unexpected end of file: NODE_COORD_SECTION is missing".into());
            }

            let line = self.buffer.trim().to_string();
            if line == "NODE_COORD_SECTION" {
                break;
            }

            if line.is_empty() {
                continue;
            }

            let (key, value) = line
                .split_once(':')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| format!("expected colon separated string, got: '{line}'"))?;

            match key {
                "NAME" | "COMMENT" => {}
                "TYPE" if value != "TSP" => return Err(format!("expecting 'TSP' as TYPE, got '{value}'").into()),
                "TYPE" => {}
                "DIMENSION" => self.dimension = Some(parse_int(value, "cannot parse DIMENSION")?),
                "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                    return Err(format!("expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got '{value}'").into());
                }
                "EDGE_WEIGHT_TYPE" => {}
                _ => return Err(format!("unsupported key: '{key}'").into()),
            }
        }

        Ok(())
    }

    fn read_node_coords(&mut self) -> Result<Vec<City>, GenericError> {
        let dimension = self.dimension.ok_or("DIMENSION is not specified before NODE_COORD_SECTION")?;

        let mut ids = FxHashSet::default();
        let mut cities = Vec::with_capacity(dimension);

        while cities.len() < dimension {
            let line = self.read_line()?.trim();
            let data = line.split_whitespace().collect::<Vec<_>>();

            let [id, x, y] = data.as_slice() else {
                return Err(format!("unexpected coord data: '{line}'").into());
            };

            if !ids.insert(id.to_string()) {
                return Err(format!("duplicate node id: '{id}'").into());
            }

            let x = parse_float(x, "cannot parse coord.0")?;
            let y = parse_float(y, "cannot parse coord.1")?;

            cities.push(City::new(id, x, y));
        }

        Ok(cities)
    }

    fn read_optional_eof(&mut self) -> Result<(), GenericError> {
        let line = self.read_line()?.trim();

        if line.is_empty() || line == "EOF" {
            Ok(())
        } else {
            Err(format!("expecting EOF, got: '{line}'").into())
        }
    }

    fn read_line(&mut self) -> Result<&String, GenericError> {
        read_line(&mut self.reader, &mut self.buffer)?;
        Ok(&self.buffer)
    }
}
