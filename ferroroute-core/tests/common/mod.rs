#![allow(dead_code)]

use ferroroute_core::prelude::*;

/// Builds a network from `(name, latitude, longitude)` stations,
/// unlabelled lines and `(from, to, line, factor)` interconnections
pub fn build(
    stations: &[(&str, f64, f64)],
    lines: &[&[&str]],
    interconnections: &[(&str, &str, &str, f64)],
) -> TransitNetwork {
    let mut builder = TransitNetworkBuilder::new();
    for &(name, latitude, longitude) in stations {
        builder.add_station(name, latitude, longitude).unwrap();
    }
    for &line in lines {
        builder.add_line(None, line).unwrap();
    }
    for &(from, to, line, factor) in interconnections {
        builder.add_interconnection(from, to, line, factor).unwrap();
    }
    builder.build()
}

/// A - B - C with unit spacing
pub fn single_line() -> TransitNetwork {
    build(
        &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 0.0, 2.0)],
        &[&["A", "B", "C"]],
        &[],
    )
}

/// A - B - C and D - E - F joined by C - D
pub fn parallel_lines() -> TransitNetwork {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 0.0, 2.0),
            ("D", 1.0, 2.0),
            ("E", 1.0, 1.0),
            ("F", 1.0, 0.0),
        ],
        &[&["A", "B", "C"], &["D", "E", "F"]],
        &[("C", "D", INTERCONNECTION_LINE, INTERCONNECTION_TIME_FACTOR)],
    )
}

/// Small network where time, distance and hop count disagree on the
/// best A -> F route, plus an isolated station I
pub fn mixed_network() -> TransitNetwork {
    build(
        &[
            ("A", 0.0, 0.0),
            ("B", 0.0, 1.0),
            ("C", 0.0, 2.0),
            ("D", 0.0, 3.0),
            ("E", 1.0, 3.0),
            ("F", 2.0, 3.0),
            ("G", 1.0, 1.0),
            ("H", 2.0, 0.0),
            ("I", 5.0, 5.0),
        ],
        &[&["A", "B", "C", "D"], &["D", "E", "F"], &["H", "G", "F"]],
        &[("B", "G", "Link", 2.0), ("A", "F", "Express", 5.0)],
    )
}

/// Minimal weight over every simple path from `start` to `end`,
/// or `None` if no path exists
pub fn brute_force_best(
    network: &TransitNetwork,
    start: &str,
    end: &str,
    criterion: Criterion,
) -> Option<f64> {
    let mut best = None;
    let mut path = vec![start.to_string()];
    enumerate(network, end, criterion, &mut path, &mut best);
    best
}

fn enumerate(
    network: &TransitNetwork,
    end: &str,
    criterion: Criterion,
    path: &mut Vec<String>,
    best: &mut Option<f64>,
) {
    let last = path[path.len() - 1].clone();
    if last == end {
        let weight = network.path_weight(path.as_slice(), criterion).unwrap();
        if best.is_none_or(|current| weight < current) {
            *best = Some(weight);
        }
        return;
    }

    for next in network.neighbors(&last).unwrap() {
        if path.iter().any(|visited| visited == next) {
            continue;
        }
        path.push(next.to_string());
        enumerate(network, end, criterion, path, best);
        path.pop();
    }
}
