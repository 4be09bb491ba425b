use super::*;
use crate::helpers::get_test_resource;

fn get_example_problem_string() -> String {
    let mut buffer = "".to_string();

    get_test_resource("../../data/tsplib/square.tsp")
        .expect("cannot open file")
        .read_to_string(&mut buffer)
        .expect("cannot read file");

    buffer
}

#[test]
fn can_read_problem_from_file() {
    let reader = BufReader::new(get_test_resource("../../data/tsplib/square.tsp").expect("cannot open file"));

    let cities = reader.read_tsplib().expect("cannot read problem");

    assert_eq!(
        cities,
        vec![City::new("1", 0., 0.), City::new("2", 10., 0.), City::new("3", 10., 10.), City::new("4", 0., 10.)]
    );
}

#[test]
fn can_read_problem_without_eof_marker() {
    let content = get_example_problem_string().replace("EOF", "");

    let cities = content.read_tsplib().expect("cannot read problem");

    assert_eq!(cities.len(), 4);
}

#[test]
fn can_read_meta_dimension() {
    let content = get_example_problem_string();
    let mut reader = TsplibReader::new(BufReader::new(content.as_bytes()));

    reader.read_meta().expect("cannot read meta");

    assert_eq!(reader.dimension, Some(4));
}

parameterized_test! {can_read_meta_errors, (from, to, expected), {
    let content = get_example_problem_string().replace(from, to);

    let result = content.read_tsplib();

    assert_eq!(result, Err(expected.into()));
}}

can_read_meta_errors! {
    case_01_type: ("TYPE : TSP", "TYPE : ATSP", "expecting 'TSP' as TYPE, got 'ATSP'"),
    case_02_dimension: ("DIMENSION : 4", "DIMENSION : four", "cannot parse DIMENSION: 'invalid digit found in string'"),
    case_03_no_dimension: ("DIMENSION : 4", "", "DIMENSION is not specified before NODE_COORD_SECTION"),
    case_04_edge_type: ("EUC_2D", "GEO", "expecting 'EUC_2D' as EDGE_WEIGHT_TYPE, got 'GEO'"),
    case_05_unknown_key: ("NAME : square", "CAPACITY : 30", "unsupported key: 'CAPACITY'"),
    case_06_no_colon: ("NAME : square", "NAME square", "expected colon separated string, got: 'NAME square'"),
    case_07_no_section: (
        "NODE_COORD_SECTION\n1 0 0\n2 10 0\n3 10 10\n4 0 10\nEOF",
        "",
        "unexpected end of file: NODE_COORD_SECTION is missing"
    ),
}

parameterized_test! {can_read_node_errors, (from, to, expected), {
    let content = get_example_problem_string().replace(from, to);

    let result = content.read_tsplib();

    assert_eq!(result, Err(expected.into()));
}}

can_read_node_errors! {
    case_01_bad_coord: ("2 10 0", "2 ten 0", "cannot parse coord.0: 'invalid float literal'"),
    case_02_missing_coord: ("3 10 10", "3 10", "unexpected coord data: '3 10'"),
    case_03_duplicate_id: ("4 0 10", "1 0 10", "duplicate node id: '1'"),
    case_04_too_few_nodes: ("DIMENSION : 4", "DIMENSION : 5", "unexpected coord data: 'EOF'"),
    case_05_too_many_nodes: ("DIMENSION : 4", "DIMENSION : 3", "expecting EOF, got: '4 0 10'"),
}
