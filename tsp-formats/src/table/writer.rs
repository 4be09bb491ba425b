#[cfg(test)]
#[path = "../../tests/unit/table/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use tsp_core::models::City;
use tsp_core::utils::GenericError;

/// Writes cities in the table format.
pub fn write_table<W: Write>(cities: &[City], writer: &mut BufWriter<W>) -> Result<(), GenericError> {
    writeln!(writer, "CITY X Y")?;

    cities.iter().try_for_each(|city| writeln!(writer, "{} {} {}", city.name, city.x, city.y))?;

    writer.flush()?;

    Ok(())
}
