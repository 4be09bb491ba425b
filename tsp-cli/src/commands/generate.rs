#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use clap::{Arg, Command};
use tsp_cli::core::utils::DefaultRandom;
use tsp_cli::extensions::generate::generate_cities;
use tsp_cli::formats::table::write_table;

const SIZE_ARG_NAME: &str = "size";
const AREA_SIZE_ARG_NAME: &str = "area-size";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Provides the way to generate random problems in table format for testing")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of cities in generated problem")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(AREA_SIZE_ARG_NAME)
                .help("Side size of the square area where cities are placed. Default is 100")
                .short('a')
                .long(AREA_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get repeatable problems")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), GenericError> {
    let size = parse_int_value::<usize>(matches, SIZE_ARG_NAME, "size")?.ok_or("size is not specified")?;
    let area_size = parse_float_value::<f64>(matches, AREA_SIZE_ARG_NAME, "area size")?;
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let random = seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable);
    let cities =
        generate_cities(size, area_size, &random).map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let mut out_buffer = create_write_buffer(out_result.transpose()?);

    write_table(&cities, &mut out_buffer)
}
