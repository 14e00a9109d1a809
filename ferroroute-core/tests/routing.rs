mod common;

use ferroroute_core::prelude::*;

const EPS: f64 = 1e-9;

fn assert_valid_path(network: &TransitNetwork, path: &[String], start: &str, end: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(end));
    for pair in path.windows(2) {
        assert!(
            !network
                .connections_between(&pair[0], &pair[1])
                .unwrap()
                .is_empty(),
            "{} and {} are not connected",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_single_line_by_time_and_transfers() {
    let network = common::single_line();

    let path = network.find_route("A", "C", "time").unwrap();
    assert_eq!(path, vec!["A", "B", "C"]);
    let time = network.path_weight(&path, Criterion::Time).unwrap();
    assert!((time - 3.0).abs() < EPS);

    let path = network.find_route("A", "C", "transfers").unwrap();
    assert_eq!(path, vec!["A", "B", "C"]);
    assert_eq!(network.path_weight(&path, Criterion::Transfers).unwrap(), 2.0);
}

#[test]
fn test_parallel_lines_cross_interconnection_once() {
    let network = common::parallel_lines();

    let summary = network.plan_route("A", "F", Criterion::Distance).unwrap();
    assert_eq!(summary.stations, vec!["A", "B", "C", "D", "E", "F"]);

    let crossings = summary
        .legs
        .iter()
        .filter(|leg| leg.line == INTERCONNECTION_LINE)
        .count();
    assert_eq!(crossings, 1);
    assert!((summary.total_distance - 5.0).abs() < EPS);
    assert!((summary.total_time - 8.0).abs() < EPS);
}

#[test]
fn test_route_to_self() {
    let network = common::mixed_network();

    for criterion in Criterion::ALL {
        let path = shortest_route(&network, "C", "C", criterion).unwrap();
        assert_eq!(path, vec!["C"]);
        assert_eq!(network.path_weight(&path, criterion).unwrap(), 0.0);
    }
    assert_eq!(network.find_route("I", "I", "time").unwrap(), vec!["I"]);
}

#[test]
fn test_criteria_pick_different_routes() {
    let network = common::mixed_network();

    assert_eq!(
        network.find_route("A", "F", "time").unwrap(),
        vec!["A", "B", "G", "F"]
    );
    assert_eq!(
        network.find_route("A", "F", "distance").unwrap(),
        vec!["A", "F"]
    );
    assert_eq!(
        network.find_route("A", "F", "transfers").unwrap(),
        vec!["A", "F"]
    );
}

#[test]
fn test_routes_are_optimal_against_brute_force() {
    let network = common::mixed_network();
    let names: Vec<String> = network.stations().map(|s| s.name().to_string()).collect();

    for criterion in Criterion::ALL {
        for start in &names {
            for end in &names {
                let expected = common::brute_force_best(&network, start, end, criterion);
                match shortest_route(&network, start, end, criterion) {
                    Ok(path) => {
                        assert_valid_path(&network, &path, start, end);
                        let weight = network.path_weight(&path, criterion).unwrap();
                        let best = expected.unwrap();
                        assert!(
                            weight <= best + EPS,
                            "{start} -> {end} by {criterion}: {weight} > {best}"
                        );
                    }
                    Err(Error::NoPath { .. }) => assert!(expected.is_none()),
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }
    }
}

#[test]
fn test_invalid_criterion_never_falls_back() {
    let network = common::single_line();

    for criterion in ["", "fastest", "TIME", "trasbordos", "hops"] {
        assert!(matches!(
            network.find_route("A", "C", criterion),
            Err(Error::InvalidCriterion(value)) if value == criterion
        ));
    }
}

#[test]
fn test_unknown_station_in_either_position() {
    let network = common::single_line();

    for criterion in ["time", "distance", "transfers"] {
        assert!(matches!(
            network.find_route("Nowhere", "C", criterion),
            Err(Error::UnknownStation(name)) if name == "Nowhere"
        ));
        assert!(matches!(
            network.find_route("A", "Nowhere", criterion),
            Err(Error::UnknownStation(name)) if name == "Nowhere"
        ));
    }
}

#[test]
fn test_isolated_station_has_no_path() {
    let network = common::mixed_network();

    for criterion in ["time", "distance", "transfers"] {
        assert!(matches!(
            network.find_route("A", "I", criterion),
            Err(Error::NoPath { .. })
        ));
        assert!(matches!(
            network.find_route("I", "A", criterion),
            Err(Error::NoPath { .. })
        ));
    }
}

#[test]
fn test_routes_are_deterministic() {
    let first = common::mixed_network();
    let second = common::mixed_network();

    for criterion in Criterion::ALL {
        for _ in 0..5 {
            assert_eq!(
                shortest_route(&first, "H", "D", criterion).unwrap(),
                shortest_route(&second, "H", "D", criterion).unwrap()
            );
        }
    }
}

#[test]
fn test_concurrent_queries_share_network() {
    let network = common::mixed_network();
    let expected = network.find_route("H", "D", "time").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| network.find_route("H", "D", "time").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_matrix_matches_single_queries() {
    let network = common::mixed_network();
    let names: Vec<String> = network.stations().map(|s| s.name().to_string()).collect();

    let matrix = route_matrix(&network, &names, &names, Criterion::Time).unwrap();
    for (i, start) in names.iter().enumerate() {
        let costs = shortest_costs(&network, start, Criterion::Time).unwrap();
        for (j, end) in names.iter().enumerate() {
            assert_eq!(matrix[i][j], costs.get(end).copied());
        }
    }
}
