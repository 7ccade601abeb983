use super::*;
use crate::geom::{Coord, Line, Point, PointSet, SlopedLine};
use num_bigint::BigInt;
use std::collections::BTreeSet;

fn set(pts: &[(i64, i64)]) -> PointSet {
    pts.iter().map(|&(x, y)| Point::from_ints(x, y)).collect()
}

fn dec(pts: &[(&str, &str)]) -> PointSet {
    pts.iter().map(|(x, y)| Point::parse(x, y).unwrap()).collect()
}

fn as_sets(groups: &[CollinearGroup]) -> BTreeSet<BTreeSet<Point>> {
    groups
        .iter()
        .map(|g| g.points.iter().cloned().collect())
        .collect()
}

fn int(v: i64) -> Coord {
    Coord::from_integer(BigInt::from(v))
}

#[test]
fn empty_and_tiny_inputs_yield_nothing() {
    assert!(find_collinear_groups(&PointSet::new()).is_empty());
    assert!(find_collinear_groups(&set(&[(1, 1)])).is_empty());
    assert!(find_collinear_groups(&set(&[(1, 1), (2, 2)])).is_empty());
    assert!(find_collinear_groups(&set(&[(1, 1), (1, 2)])).is_empty());
}

#[test]
fn three_collinear_points_make_one_group() {
    let groups = find_collinear_groups(&set(&[(0, 0), (1, 2), (2, 4)]));
    assert_eq!(groups.len(), 1);
    let g = &groups[0];
    assert_eq!(g.label, 1);
    assert_eq!(g.len(), 3);
    assert_eq!(
        g.line,
        Line::Sloped(SlopedLine {
            m: int(2),
            b: int(0)
        })
    );
}

#[test]
fn triangle_has_no_groups() {
    assert!(find_collinear_groups(&set(&[(0, 0), (4, 0), (0, 3)])).is_empty());
}

#[test]
fn vertical_scenario() {
    let groups = find_collinear_groups(&set(&[(2, 1), (2, 5), (2, 9), (3, 0)]));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].line, Line::Vertical { x: int(2) });
    assert_eq!(
        groups[0].points,
        vec![
            Point::from_ints(2, 1),
            Point::from_ints(2, 5),
            Point::from_ints(2, 9)
        ]
    );
}

#[test]
fn mixed_scenario_excludes_two_point_line() {
    let groups = find_collinear_groups(&set(&[(0, 0), (1, 1), (2, 2), (0, 5), (5, 0)]));
    assert_eq!(groups.len(), 1);
    assert_eq!(
        groups[0].points,
        vec![
            Point::from_ints(0, 0),
            Point::from_ints(1, 1),
            Point::from_ints(2, 2)
        ]
    );
}

#[test]
fn decimal_inputs_stay_collinear() {
    // Collinear on y = 3x; as f64 the slopes between pairs differ.
    let groups = find_collinear_groups(&dec(&[
        ("0.1", "0.3"),
        ("0.2", "0.6"),
        ("0.3", "0.9"),
        ("0.7", "0.1"),
    ]));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 3);
    assert!(!groups[0].points.contains(&Point::parse("0.7", "0.1").unwrap()));
}

#[test]
fn long_line_stored_once_per_point() {
    let pts: Vec<(i64, i64)> = (0..7).map(|i| (i, 3 * i - 1)).collect();
    let groups = find_collinear_groups(&set(&pts));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 7);
}

#[test]
fn shared_point_belongs_to_every_line_through_it() {
    // Horizontal, diagonal, vertical and anti-diagonal through (1, 1) in a 3x3 grid.
    let pts: Vec<(i64, i64)> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
    let groups = find_collinear_groups(&set(&pts));
    // 3 rows + 3 columns + 2 diagonals
    assert_eq!(groups.len(), 8);
    let centre = Point::from_ints(1, 1);
    let through_centre = groups.iter().filter(|g| g.points.contains(&centre)).count();
    assert_eq!(through_centre, 4);
    assert_eq!(groups.iter().filter(|g| g.line.is_vertical()).count(), 3);
}

#[test]
fn sloped_groups_precede_vertical_and_labels_are_sequential() {
    let pts = [(5, 0), (5, 1), (5, 2), (0, 0), (1, 1), (2, 2), (7, 10), (7, 20), (7, 30)];
    let groups = find_collinear_groups(&set(&pts));
    assert_eq!(groups.len(), 3);
    let labels: Vec<usize> = groups.iter().map(|g| g.label).collect();
    assert_eq!(labels, vec![1, 2, 3]);
    assert!(!groups[0].line.is_vertical());
    assert_eq!(groups[1].line, Line::Vertical { x: int(5) });
    assert_eq!(groups[2].line, Line::Vertical { x: int(7) });
}

#[test]
fn every_group_is_on_its_line_and_complete() {
    let pts: Vec<(i64, i64)> = vec![
        (0, 0),
        (2, 1),
        (4, 2),
        (6, 3),
        (1, 5),
        (3, 5),
        (-2, 5),
        (3, 0),
        (3, -7),
        (9, 9),
    ];
    let input = set(&pts);
    for g in find_collinear_groups(&input) {
        assert!(g.len() >= 3);
        for p in &g.points {
            assert!(g.line.contains(p), "{p} not on {}", g.line);
        }
        let on_line = input.iter().filter(|p| g.line.contains(p)).count();
        assert_eq!(on_line, g.len(), "group on {} is not maximal", g.line);
    }
}

#[test]
fn reversed_input_gives_same_groups() {
    let pts = [(0, 0), (1, 1), (2, 2), (3, 3), (0, 2), (1, 2), (4, 2), (1, 7), (1, -3)];
    let forward = find_collinear_groups(&set(&pts));
    let mut rev = pts.to_vec();
    rev.reverse();
    let backward = find_collinear_groups(&set(&rev));
    assert_eq!(as_sets(&forward), as_sets(&backward));
    assert_eq!(forward.len(), 3);
}

#[test]
fn rerun_is_identical() {
    let input = set(&[(0, 0), (1, 1), (2, 2), (2, 0), (2, 5), (9, 1)]);
    assert_eq!(find_collinear_groups(&input), find_collinear_groups(&input));
}

#[test]
fn min_points_raises_threshold_but_never_lowers_it() {
    let input = set(&[(0, 0), (1, 1), (2, 2), (0, 1), (1, 3), (2, 5), (3, 7)]);
    assert_eq!(find_collinear_groups(&input).len(), 2);

    let four = find_collinear_groups_with(&input, ScanCfg { min_points: 4 });
    assert_eq!(four.len(), 1);
    assert_eq!(four[0].label, 1);
    assert_eq!(four[0].len(), 4);

    let two = find_collinear_groups_with(&input, ScanCfg { min_points: 2 });
    assert_eq!(two, find_collinear_groups(&input));
    assert_eq!(ScanCfg { min_points: 0 }.threshold(), 3);
}

#[test]
fn accumulator_qualifies_each_line_once() {
    let pts: Vec<Point> = (0..5).map(|i| Point::from_ints(i, i)).collect();
    let mut acc = LineAccumulator::new(3);
    for (i, p) in pts.iter().enumerate() {
        for q in &pts[i + 1..] {
            acc.add_pair(p, q);
        }
    }
    assert_eq!(acc.sloped_lines(), 1);
    assert_eq!(acc.vertical_lines(), 0);
    let groups = acc.into_groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 5);
}
