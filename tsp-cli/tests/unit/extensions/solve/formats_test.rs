use super::*;
use std::fs::File;
use std::sync::Arc;
use tsp_core::search::solve_problem;

#[test]
fn can_get_all_supported_formats() {
    let readers = get_problem_readers();
    let writers = get_solution_writers();

    assert!(PROBLEM_FORMATS.iter().all(|format| readers.contains_key(format)));
    assert!(SOLUTION_FORMATS.iter().all(|format| writers.contains_key(format)));
}

parameterized_test! {can_read_problem_with_reader, (format, path, expected_size), {
    let readers = get_problem_readers();
    let reader = readers.get(format).expect("no reader");

    let cities = reader.0(Box::new(File::open(path).expect("cannot open file"))).expect("cannot read problem");

    assert_eq!(cities.len(), expected_size);
}}

can_read_problem_with_reader! {
    case_01_table: ("table", "../data/table/cities8.txt", 8),
    case_02_tsplib: ("tsplib", "../data/tsplib/square.tsp", 4),
}

#[test]
fn can_write_solution_with_writer() {
    let cities = vec![City::new("A", 0., 0.), City::new("B", 3., 0.), City::new("C", 0., 4.)];
    let problem = Arc::new(Problem::new(cities).expect("cannot create problem"));
    let solution = solve_problem(problem.clone()).expect("cannot solve problem");
    let writers = get_solution_writers();
    let writer = writers.get("text").expect("no writer");
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut out_buffer: BufWriter<Box<dyn Write>> = BufWriter::new(Box::new(file.reopen().unwrap()));

    writer.0(problem.as_ref(), &solution, &mut out_buffer).expect("cannot write solution");

    let content = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(content, "Path of Nodes to visit are [A, B, C, A]\nCost of Path is 12.00\n");
}
