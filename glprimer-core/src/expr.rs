/// Textual transform expressions, e.g. `rotx(pi/10) * translate(0, 0, 3) * scale(0.5)`
///
/// Calls are multiplied left to right, so the rightmost transform is the
/// first one applied to a vertex. Scalars accept `pi` and simple `*` / `/`
/// chains. Angles are in radians.
use log::trace;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric0, char, digit0, digit1, multispace0, one_of},
    combinator::{map_res, opt, recognize, value},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, tuple},
    IResult,
};

use crate::error::{ExprError, ExprResult};
use crate::matrix::Mat4;
use crate::projection::perspective;
use crate::transform::{compose, identity, rotate_x, rotate_y, rotate_z, scale, translate};

/// One parsed transform call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<f32>,
}

impl Call {
    /// Build the matrix this call names
    pub fn to_matrix(&self) -> ExprResult<Mat4> {
        let a = &self.args;
        let expected = match self.name.as_str() {
            "identity" => 0,
            "rotx" | "roty" | "rotz" | "scale" => 1,
            "translate" => 3,
            "perspective" => 4,
            _ => return Err(ExprError::UnknownFunction(self.name.clone())),
        };
        if a.len() != expected {
            return Err(ExprError::Arity {
                name: self.name.clone(),
                expected,
                actual: a.len(),
            });
        }

        let matrix = match self.name.as_str() {
            "identity" => identity(),
            "rotx" => rotate_x(a[0]),
            "roty" => rotate_y(a[0]),
            "rotz" => rotate_z(a[0]),
            "scale" => scale(a[0]),
            "translate" => translate(a[0], a[1], a[2]),
            "perspective" => perspective(a[0], a[1], a[2], a[3]),
            _ => unreachable!("arity table covers every name"),
        };
        Ok(matrix)
    }
}

/// Parse an expression into its calls without evaluating them
pub fn parse(input: &str) -> ExprResult<Vec<Call>> {
    if input.trim().is_empty() {
        return Err(ExprError::Empty);
    }

    let (rest, calls) = match expression(input) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(ExprError::Syntax(e.input.to_string()))
        }
        Err(nom::Err::Incomplete(_)) => return Err(ExprError::Syntax(input.to_string())),
    };

    if !rest.is_empty() {
        return Err(ExprError::TrailingInput(rest.to_string()));
    }

    Ok(calls)
}

/// Parse and evaluate an expression to a single matrix
pub fn evaluate(input: &str) -> ExprResult<Mat4> {
    let matrices = parse(input)?
        .iter()
        .map(|call| {
            trace!("{}({:?})", call.name, call.args);
            call.to_matrix()
        })
        .collect::<ExprResult<Vec<_>>>()?;

    Ok(compose(&matrices))
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn expression(input: &str) -> IResult<&str, Vec<Call>> {
    separated_list1(char('*'), call)(input)
}

fn call(input: &str) -> IResult<&str, Call> {
    let (input, name) = ws(recognize(pair(alpha1, alphanumeric0)))(input)?;
    let (input, args) = delimited(
        char('('),
        separated_list0(char(','), scalar),
        ws(char(')')),
    )(input)?;

    Ok((
        input,
        Call {
            name: name.to_ascii_lowercase(),
            args,
        },
    ))
}

fn scalar(input: &str) -> IResult<&str, f32> {
    let (input, first) = ws(factor)(input)?;
    let (input, rest) = many0(pair(ws(alt((char('*'), char('/')))), ws(factor)))(input)?;

    let result = rest.into_iter().fold(first, |acc, (op, rhs)| match op {
        '*' => acc * rhs,
        _ => acc / rhs,
    });
    Ok((input, result))
}

fn factor(input: &str) -> IResult<&str, f32> {
    let (input, negative) = opt(char('-'))(input)?;
    let (input, magnitude) = alt((value(std::f32::consts::PI, tag("pi")), unsigned))(input)?;

    Ok((input, if negative.is_some() { -magnitude } else { magnitude }))
}

/// Unsigned decimal literal: `12`, `0.5`, `3.`, `1e-3`. No sign, no `nan`/`inf`.
fn unsigned(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(tuple((
            digit1,
            opt(pair(char('.'), digit0)),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |text: &str| text.parse::<f32>(),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_parse_calls() {
        let calls = parse("rotx(pi/10) * translate(0, 0, 3.0)").unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].name, "rotx");
        assert!((calls[0].args[0] - PI / 10.0).abs() < 1e-6);
        assert_eq!(calls[1].args, vec![0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_scalar_arithmetic() {
        let calls = parse("rotz(-2*pi/4)").unwrap();
        assert!((calls[0].args[0] + PI / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_evaluate_course_model_view() {
        let text = "rotx(pi/10) * roty(0.5) * translate(0,0,3) * rotx(1.5) * scale(0.5)";
        let expected = compose(&[
            rotate_x(PI / 10.0),
            rotate_y(0.5),
            translate(0.0, 0.0, 3.0),
            rotate_x(1.5),
            scale(0.5),
        ]);
        assert!(evaluate(text).unwrap().abs_diff_eq(&expected, 1e-6));
    }

    #[test]
    fn test_evaluate_perspective() {
        let m = evaluate("perspective(pi/2, 1, 0.1, 100)").unwrap();
        assert_eq!(m, perspective(PI / 2.0, 1.0, 0.1, 100.0));
    }

    #[test]
    fn test_identity_without_args() {
        assert_eq!(evaluate("identity()").unwrap(), identity());
        assert_eq!(evaluate("  IDENTITY ( )  ").unwrap(), identity());
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            evaluate("shear(1)"),
            Err(ExprError::UnknownFunction("shear".to_string()))
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert!(matches!(
            evaluate("translate(1, 2)"),
            Err(ExprError::Arity {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(evaluate("   "), Err(ExprError::Empty));
        assert!(matches!(evaluate("rotx(1"), Err(ExprError::Syntax(_))));
        assert!(matches!(
            evaluate("rotx(1) scale(2)"),
            Err(ExprError::TrailingInput(_))
        ));
        for text in ["scale(--2)", "scale(+2)", "scale(nan)", "scale(inf)", "scale(infinity)"] {
            assert!(
                matches!(evaluate(text), Err(ExprError::Syntax(_))),
                "`{}` should not parse",
                text
            );
        }
    }

    #[test]
    fn test_number_literals() {
        let calls = parse("translate(12, 3., 1e-3) * scale(2.5E1)").unwrap();
        assert_eq!(calls[0].args, vec![12.0, 3.0, 0.001]);
        assert_eq!(calls[1].args, vec![25.0]);
    }
}
