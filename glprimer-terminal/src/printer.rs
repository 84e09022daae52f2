/// Styled terminal output for matrices, points and meshes
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};
use glprimer_core::{Mat4, Mesh};
use std::io::{self, Write};

/// Writes values in the lab framework's plain-text layout, optionally
/// colored with ANSI escapes.
pub struct MatrixPrinter {
    color: bool,
}

impl MatrixPrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn styled<W: Write>(&self, writer: &mut W, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            writer.queue(SetForegroundColor(color))?;
            writer.queue(Print(text))?;
            writer.queue(ResetColor)?;
        } else {
            writer.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    fn heading<W: Write>(&self, writer: &mut W, text: &str) -> io::Result<()> {
        if self.color {
            writer.queue(SetAttribute(Attribute::Bold))?;
            self.styled(writer, Color::Yellow, text)?;
            writer.queue(SetAttribute(Attribute::Reset))?;
        } else {
            writer.write_all(text.as_bytes())?;
        }
        writeln!(writer)
    }

    /// Print `matrix` under `label`, one row per line; the translation
    /// column is highlighted.
    pub fn matrix<W: Write>(&self, writer: &mut W, label: &str, matrix: &Mat4) -> io::Result<()> {
        self.heading(writer, label)?;
        writeln!(writer, "Matrix:")?;
        for row in 0..4 {
            let [a, b, c, d] = matrix.row(row);
            write!(writer, "{:6.2} {:6.2} {:6.2} ", a, b, c)?;
            self.styled(writer, Color::Cyan, &format!("{:6.2}", d))?;
            writeln!(writer)?;
        }
        writeln!(writer)?;
        writer.flush()
    }

    pub fn point<W: Write>(&self, writer: &mut W, label: &str, values: &[f32]) -> io::Result<()> {
        let formatted: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
        self.styled(writer, Color::Green, label)?;
        writeln!(writer, " ({})", formatted.join(", "))?;
        writer.flush()
    }

    pub fn mesh<W: Write>(&self, writer: &mut W, label: &str, mesh: &Mesh) -> io::Result<()> {
        self.heading(writer, label)?;
        writeln!(writer, "vertices:  {}", mesh.vertex_count())?;
        writeln!(writer, "triangles: {}", mesh.triangle_count())?;
        if let Some((lo, hi)) = mesh.bounds() {
            writeln!(
                writer,
                "bounds:    ({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2})",
                lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]
            )?;
        }
        writeln!(
            writer,
            "buffers:   positions {} B, colors {} B, indices {} B",
            mesh.position_bytes().len(),
            mesh.color_bytes().len(),
            mesh.index_bytes().len()
        )?;
        writer.flush()
    }

    pub fn warning<W: Write>(&self, writer: &mut W, text: &str) -> io::Result<()> {
        self.styled(writer, Color::Red, text)?;
        writeln!(writer)?;
        writer.flush()
    }
}
