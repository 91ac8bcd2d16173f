//! Reader for `.bpt` Bézier patch text files.
//!
//! The first line holds the number of patches. Each patch then starts with a
//! line of its two degrees, followed by `(du + 1) * (dv + 1)` lines of
//! `x y z`. Only bicubic patches (`3 3`) are accepted.

use crate::error::{Error, Result};
use crate::geometry::patch::ControlPoint;
use crate::vec3::Vec3;

/// Splits `text` into one list of control points per patch.
pub fn parse(text: &str) -> Result<Vec<Vec<ControlPoint>>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, count) = lines.next().ok_or_else(|| Error::parse(1, "empty file"))?;
    let count: usize = count
        .parse()
        .map_err(|_| Error::parse(line, format!("invalid patch count {:?}", count)))?;

    let mut patches = Vec::new();
    for patch in 0..count {
        let (line, degrees) = lines
            .next()
            .ok_or_else(|| Error::parse(line, format!("missing degrees of patch {}", patch)))?;

        let degrees = numbers::<u32>(line, degrees)?;
        if degrees != [3, 3] {
            return Err(Error::parse(
                line,
                format!("patch {} has degrees {:?}, only bicubic patches are supported", patch, degrees),
            ));
        }

        let mut points = Vec::with_capacity(16);
        for _ in 0..16 {
            let (line, point) = lines
                .next()
                .ok_or_else(|| Error::parse(line, format!("patch {} ends early", patch)))?;

            match numbers::<f32>(line, point)?.as_slice() {
                &[x, y, z] => points.push(Vec3::new(x, y, z)),
                other => {
                    return Err(Error::parse(
                        line,
                        format!("expected 3 coordinates, got {}", other.len()),
                    ))
                }
            }
        }

        patches.push(points);
    }

    if let Some((line, _)) = lines.next() {
        return Err(Error::parse(line, format!("trailing data after {} patches", count)));
    }

    Ok(patches)
}

fn numbers<T: std::str::FromStr>(line: usize, text: &str) -> Result<Vec<T>> {
    text.split_whitespace()
        .map(|word| {
            word.parse()
                .map_err(|_| Error::parse(line, format!("invalid number {:?}", word)))
        })
        .collect()
}

#[cfg(test)]
fn unit_square_bpt(patches: usize) -> String {
    let mut text = format!("{}\n", patches);
    for _ in 0..patches {
        text.push_str("3 3\n");
        for k in 0..16 {
            text.push_str(&format!("{} {} 0.0\n", k % 4, k / 4));
        }
    }
    text
}

#[test]
fn parse_two_patches() {
    let patches = parse(&unit_square_bpt(2)).unwrap();

    assert_eq!(2, patches.len());
    assert_eq!(16, patches[1].len());
    assert_eq!(Vec3::new(3.0, 3.0, 0.0), patches[1][15]);
}

#[test]
fn parse_ignores_blank_lines() {
    let text = format!("\n\n{}\n", unit_square_bpt(1).replace("3 3\n", "3 3\n\n"));

    assert_eq!(1, parse(&text).unwrap().len());
}

#[test]
fn parse_rejects_other_degrees() {
    let text = unit_square_bpt(1).replace("3 3", "2 3");

    match parse(&text) {
        Err(Error::Parse { line, .. }) => assert_eq!(2, line),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn parse_rejects_short_patch() {
    let text: String = unit_square_bpt(1).lines().take(10).map(|l| format!("{}\n", l)).collect();

    assert!(parse(&text).is_err());
}

#[test]
fn parse_rejects_bad_number() {
    let text = unit_square_bpt(1).replacen("0 0 0.0", "0 zero 0.0", 1);

    match parse(&text) {
        Err(Error::Parse { line, .. }) => assert_eq!(3, line),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn parse_rejects_huge_count_without_allocating() {
    match parse("1000000000000000000\n3 3\n") {
        Err(Error::Parse { .. }) => {}
        other => panic!("unexpected {:?}", other),
    }
}
