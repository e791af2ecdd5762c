//! Parser for parenthesized coordinate tuples such as `(1.5, -2.0, 3.25)`
use nalgebra::Point3;
use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, preceded, terminated},
    IResult,
};

/// Parse a `(x, y, z)` tuple. Whitespace is allowed anywhere between tokens.
///
/// Rejects tuples with a component count other than three, non-numeric
/// components and non-finite values. The error is a human readable reason.
pub fn parse_point(input: &str) -> Result<Point3<f64>, String> {
    let components = match all_consuming(parse_tuple)(input) {
        Ok((_, components)) => components,
        Err(_) => return Err("expected a tuple of the form `(x, y, z)`".to_string()),
    };

    if components.len() != 3 {
        return Err(format!(
            "expected 3 components, found {}",
            components.len()
        ));
    }
    if components.iter().any(|c| !c.is_finite()) {
        return Err("components must be finite numbers".to_string());
    }

    Ok(Point3::new(components[0], components[1], components[2]))
}

fn parse_tuple(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        preceded(multispace0, char('(')),
        separated_list1(char(','), parse_component),
        terminated(char(')'), multispace0),
    )(input)
}

fn parse_component(input: &str) -> IResult<&str, f64> {
    delimited(multispace0, double, multispace0)(input)
}
