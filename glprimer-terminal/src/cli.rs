/// Command-line interface for inspecting transforms
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glprimer_core::{expr, Animation, FrameTransforms, Mesh, Projection};
use log::{debug, info};
use std::io::Write;

use crate::printer::MatrixPrinter;

#[derive(Debug, Parser)]
#[command(name = "glprimer")]
#[command(about = "Inspect the 4x4 transforms used by the GLprimer lab scene")]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the R, MV and P uniforms of the spinning cube at a given time
    Frame {
        /// Seconds since start
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        time: f32,

        /// Viewport width in pixels
        #[arg(long, default_value_t = 1)]
        width: u32,

        /// Viewport height in pixels
        #[arg(long, default_value_t = 1)]
        height: u32,
    },

    /// Evaluate a transform expression such as "rotx(pi/10) * translate(0,0,3)"
    Eval {
        expression: String,

        /// Point to transform, as x,y,z
        #[arg(short, long, value_parser = parse_triple, allow_hyphen_values = true)]
        point: Option<[f32; 3]>,
    },

    /// Summarize the cube mesh, or a box with the given x,y,z extents
    Mesh {
        #[arg(long = "box", value_parser = parse_triple, allow_hyphen_values = true)]
        extents: Option<[f32; 3]>,
    },
}

/// Parse `x,y,z` into three floats
pub fn parse_triple(text: &str) -> Result<[f32; 3], String> {
    let parts = text
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in `{}`: {}", text, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(format!("expected x,y,z but got {} value(s)", parts.len())),
    }
}

/// Execute a parsed command, writing results to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let printer = MatrixPrinter::new(!cli.no_color);

    match &cli.command {
        Command::Frame {
            time,
            width,
            height,
        } => {
            let projection = Projection::for_viewport(*width, *height)
                .context("Failed to build projection")?;
            let animation = Animation::default();
            info!("Computing frame transforms at t = {:.3}s", time);
            let frame = FrameTransforms::at(&animation, &projection, *time);
            for (name, matrix) in frame.uniforms() {
                printer.matrix(out, name, matrix)?;
            }
        }
        Command::Eval { expression, point } => {
            let matrix = expr::evaluate(expression)
                .with_context(|| format!("Failed to evaluate `{}`", expression))?;
            debug!("Evaluated `{}`", expression);
            printer.matrix(out, expression, &matrix)?;

            if let Some([x, y, z]) = point {
                let clip = matrix.transform([*x, *y, *z, 1.0]);
                printer.point(out, "transformed", &clip)?;
                match matrix.project_point([*x, *y, *z]) {
                    Some(ndc) => printer.point(out, "divided", &ndc)?,
                    None => printer.warning(out, "w is zero; point lies at infinity")?,
                }
            }
        }
        Command::Mesh { extents } => {
            let (label, mesh) = match extents {
                Some([x, y, z]) => (
                    format!("box {} x {} x {}", x, y, z),
                    Mesh::cuboid(*x, *y, *z).context("Failed to build box")?,
                ),
                None => ("cube".to_string(), Mesh::cube()),
            };
            printer.mesh(out, &label, &mesh)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        let mut out = Vec::new();
        run(&cli, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1, -2.5,3"), Ok([1.0, -2.5, 3.0]));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("a,b,c").is_err());
    }

    #[test]
    fn test_frame_prints_three_uniforms() {
        let text = run_args(&["glprimer", "--no-color", "frame", "--time", "1.5"]).unwrap();
        assert_eq!(text.matches("Matrix:").count(), 3);
        assert!(text.starts_with("R\n"));
        assert!(text.contains("\nMV\n"));
        assert!(text.contains("\nP\n"));
    }

    #[test]
    fn test_frame_rejects_empty_viewport() {
        let err = run_args(&["glprimer", "frame", "--width", "0"]).unwrap_err();
        assert!(err.to_string().contains("projection"));
    }

    #[test]
    fn test_frame_accepts_negative_time() {
        let rewound = run_args(&["glprimer", "--no-color", "frame", "--time", "-1.5"]).unwrap();
        assert_eq!(rewound.matches("Matrix:").count(), 3);
        let forward = run_args(&["glprimer", "--no-color", "frame", "--time", "1.5"]).unwrap();
        assert_ne!(rewound, forward);
    }

    #[test]
    fn test_eval_with_point() {
        let text = run_args(&[
            "glprimer",
            "--no-color",
            "eval",
            "translate(1, 2, 3)",
            "--point",
            "-1,0,0",
        ])
        .unwrap();
        assert!(text.contains("transformed (0.0000, 2.0000, 3.0000, 1.0000)"));
        assert!(text.contains("divided (0.0000, 2.0000, 3.0000)"));
    }

    #[test]
    fn test_eval_reports_bad_expression() {
        let err = run_args(&["glprimer", "eval", "shear(2)"]).unwrap_err();
        assert!(format!("{:#}", err).contains("Unknown transform: shear"));
    }

    #[test]
    fn test_mesh_box() {
        let text = run_args(&["glprimer", "--no-color", "mesh", "--box", "0.2,0.2,1"]).unwrap();
        assert!(text.starts_with("box 0.2 x 0.2 x 1"));
        assert!(text.contains("triangles: 12"));
    }

    #[test]
    fn test_mesh_box_rejects_negative_extent() {
        let err = run_args(&["glprimer", "mesh", "--box", "-1,1,1"]).unwrap_err();
        assert!(format!("{:#}", err).contains("Box extents must be positive"));
    }
}
