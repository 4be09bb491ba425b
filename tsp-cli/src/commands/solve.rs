#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;
use std::sync::Arc;
use tsp_cli::core::models::Problem;
use tsp_cli::core::utils::{Environment, InfoLogger};
use tsp_cli::extensions::solve::config::*;
use tsp_cli::extensions::solve::formats::*;
use tsp_cli::extensions::solve::interruption::create_interruption_quota;

const FORMAT_ARG_NAME: &str = "FORMAT";
const PROBLEM_ARG_NAME: &str = "PROBLEM";
const EXPANSIONS_ARG_NAME: &str = "max-expansions";
const TIME_ARG_NAME: &str = "max-time";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const CONFIG_ARG_NAME: &str = "config";
const ORIGIN_ARG_NAME: &str = "origin";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves Traveling Salesman Problem exactly using A* search")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the problem type")
                .required(true)
                .value_parser(PROBLEM_FORMATS)
                .index(1),
        )
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(2))
        .arg(
            Arg::new(EXPANSIONS_ARG_NAME)
                .help("Specifies maximum number of expanded search states")
                .short('n')
                .long(EXPANSIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time algorithm run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies result output format")
                .short('f')
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("text")
                .value_parser(SOLUTION_FORMATS),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to search configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ORIGIN_ARG_NAME)
                .help("Specifies name of the city where tour starts and ends. Default is the first city")
                .long(ORIGIN_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    // required
    let problem_format = get_required_value(matches, FORMAT_ARG_NAME)?;
    let problem_path = get_required_value(matches, PROBLEM_ARG_NAME)?;

    // optional
    let max_expansions = parse_int_value::<usize>(matches, EXPANSIONS_ARG_NAME, "max expansions")?;
    let max_time = parse_float_value::<f64>(matches, TIME_ARG_NAME, "max time")?;
    let out_format = matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map_or("text", String::as_str);
    let origin = matches.get_one::<String>(ORIGIN_ARG_NAME);
    let is_log_set = matches.get_flag(LOG_ARG_NAME);

    let problem_reader = get_problem_readers()
        .remove(problem_format)
        .ok_or_else(|| format!("unknown problem format: '{problem_format}'"))?;
    let solution_writer = get_solution_writers()
        .remove(out_format)
        .ok_or_else(|| format!("unknown solution format: '{out_format}'"))?;

    let cities = problem_reader.0(Box::new(open_file(problem_path, "problem")?))
        .map_err(|err| format!("cannot read {problem_format} problem from '{problem_path}': '{err}'"))?;
    let problem = match origin {
        Some(origin) => Problem::with_origin(cities, origin),
        None => Problem::new(cities),
    }
    .map_err(|err| format!("cannot create problem: '{err}'"))?;
    let problem = Arc::new(problem);

    let args_config = Config {
        termination: Some(TerminationConfig { max_expansions, max_time }),
        telemetry: Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: is_log_set, log_every: None }) }),
    };
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))
            .map_err(|err| format!("cannot read config: '{err}'"))?
            .or(args_config),
        None => args_config,
    };

    let is_logging_enabled = config
        .telemetry
        .as_ref()
        .and_then(|telemetry| telemetry.logging.as_ref())
        .is_some_and(|logging| logging.enabled);
    let logger: InfoLogger = if is_logging_enabled { Arc::new(|msg| println!("{msg}")) } else { Arc::new(|_| {}) };
    let environment = Environment::new(Some(create_interruption_quota(None)), logger);

    let solution = create_builder_from_config(problem.clone(), &config, environment)
        .build()
        .solve()
        .map_err(|err| format!("cannot find any solution: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out solution"));
    let mut out_buffer = out_writer_func(out_result.transpose()?);

    solution_writer.0(problem.as_ref(), &solution, &mut out_buffer)
}

fn get_required_value<'a>(matches: &'a ArgMatches, arg_name: &str) -> Result<&'a str, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(String::as_str)
        .ok_or_else(|| format!("argument '{arg_name}' is required").into())
}
