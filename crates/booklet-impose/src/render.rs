//! Rendering of imposed booklets
//!
//! Two renderers share the same projection: a plain-text one for terminals
//! and an HTML one meant to be styled by the caller.

use std::fmt::Write;

use crate::layout::{Booklet, ProjectedFace, project_booklet};
use crate::scheme::SchemeTable;
use crate::types::*;

/// Render a booklet as indented text grids.
///
/// Rows printed upside down are marked `v`, upright rows `^`. Empty slots
/// show as `-`.
pub fn render_text(booklet: &Booklet, table: &SchemeTable) -> Result<String> {
    let projected = project_booklet(booklet, table)?;
    let width = booklet
        .sheets()
        .flat_map(|sheet| sheet.pages())
        .max()
        .map_or(1, |max| max.to_string().len());

    let mut out = String::new();
    for (i, sheets) in projected.iter().enumerate() {
        writeln!(out, "Signature {} ({} sheets)", i + 1, sheets.len())?;
        for (j, sheet) in sheets.iter().enumerate() {
            writeln!(out, "  Sheet {}", j + 1)?;
            for (name, face) in [("Front", &sheet.front), ("Back", &sheet.back)] {
                writeln!(out, "    {} ({:?})", name, face.orientation)?;
                write_text_face(&mut out, face, width)?;
            }
        }
    }

    Ok(out)
}

fn write_text_face(out: &mut impl Write, face: &ProjectedFace, width: usize) -> std::fmt::Result {
    for row in &face.rows {
        let marker = if row.direction.is_down() { 'v' } else { '^' };
        write!(out, "      {}", marker)?;
        for cell in &row.cells {
            match cell {
                Some(page) => write!(out, " {:>width$}", page, width = width)?,
                None => write!(out, " {:>width$}", "-", width = width)?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render a booklet as HTML tables.
///
/// Each signature is a `div.signature`, each sheet a `span.sheet` holding two
/// `table.leaf` faces classed by paper size and orientation (`h`/`v`). Rows
/// carry `leaf-up` or `leaf-down`.
pub fn render_html(booklet: &Booklet, table: &SchemeTable, paper: PaperSize) -> Result<String> {
    let projected = project_booklet(booklet, table)?;

    let mut html = String::new();
    for (i, sheets) in projected.iter().enumerate() {
        write!(
            html,
            r#"<div class="signature"><div class="signature-number">Signature {}</div>"#,
            i + 1
        )?;

        for sheet in sheets {
            html.push_str(r#"<span class="sheet">"#);
            for face in sheet.faces() {
                write!(
                    html,
                    r#"<table class="leaf size-{} orientation-{}">"#,
                    paper.name(),
                    face.orientation.tag()
                )?;
                for row in &face.rows {
                    write!(html, r#"<tr class="{}">"#, row.direction.class_name())?;
                    for cell in &row.cells {
                        let number = cell.map(format_figures).unwrap_or_default();
                        write!(html, "<td>{}</td>", number)?;
                    }
                    html.push_str("</tr>");
                }
                html.push_str("</table>");
            }
            html.push_str("</span>");
        }

        html.push_str("</div>");
    }

    Ok(html)
}

/// Underline runs of 6 and 9 so they read correctly when printed upside down
pub fn format_figures(page: usize) -> String {
    let digits = page.to_string();
    let mut out = String::with_capacity(digits.len() + 7);
    let mut in_run = false;

    for ch in digits.chars() {
        let ambiguous = matches!(ch, '6' | '9');
        if ambiguous && !in_run {
            out.push_str("<u>");
        } else if !ambiguous && in_run {
            out.push_str("</u>");
        }
        in_run = ambiguous;
        out.push(ch);
    }
    if in_run {
        out.push_str("</u>");
    }

    out
}
