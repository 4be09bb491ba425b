#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use std::io::prelude::*;
use std::io::{BufReader, Read};
use tsp_core::utils::{Float, GenericError};

/// Reads a next line into the buffer. Returns amount of bytes read, zero means end of input.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

pub(crate) fn skip_lines<R: Read>(
    count: usize,
    reader: &mut BufReader<R>,
    buffer: &mut String,
) -> Result<(), GenericError> {
    for _ in 0..count {
        read_line(reader, buffer).map_err(|_| "cannot skip lines")?;
    }

    Ok(())
}

/// Parses a finite floating point number, integers are accepted as well.
pub(crate) fn parse_float(data: &str, err_msg: &str) -> Result<Float, GenericError> {
    data.parse::<Float>()
        .map_err(|err| format!("{err_msg}: '{err}'"))
        .and_then(|value| if value.is_finite() { Ok(value) } else { Err(format!("{err_msg}: '{data}' is not finite")) })
        .map_err(GenericError::from)
}

pub(crate) fn parse_int(data: &str, err_msg: &str) -> Result<usize, GenericError> {
    data.parse::<usize>().map_err(|err| format!("{err_msg}: '{err}'").into())
}
