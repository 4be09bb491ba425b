use super::*;
use crate::helpers::solve_triangle_problem;

fn write_to_string<F>(write_fn: F) -> String
where
    F: FnOnce(&mut BufWriter<&mut Vec<u8>>) -> Result<(), GenericError>,
{
    let mut buffer = Vec::new();
    write_fn(&mut BufWriter::new(&mut buffer)).expect("cannot write solution");

    String::from_utf8(buffer).expect("not utf8 output")
}

#[test]
fn can_write_text_solution() {
    let (problem, solution) = solve_triangle_problem();

    let content = write_to_string(|writer| write_text_solution(&problem, &solution, writer));

    assert_eq!(content, "Path of Nodes to visit are [A, B, C, A]\nCost of Path is 12.00\n");
}

#[test]
fn can_write_and_read_json_solution() {
    let (problem, solution) = solve_triangle_problem();

    let content = write_to_string(|writer| write_json_solution(&problem, &solution, writer));
    let output = read_json_solution(BufReader::new(content.as_bytes())).expect("cannot read solution");

    assert!(content.contains("\"maxFrontierSize\""));
    assert_eq!(output, SolutionOutput::new(&problem, &solution));
    assert_eq!(output.tour, vec!["A", "B", "C", "A"]);
    assert_eq!(output.cost, 12.);
    assert_eq!(output.statistics.expansions, solution.statistics.expansions);
}

#[test]
fn can_detect_invalid_json_solution() {
    let result = read_json_solution(BufReader::new("{\"tour\": 42}".as_bytes()));

    assert!(result.is_err());
}
