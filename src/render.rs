use crate::error::{KeyGaError, KgResult};
use crate::geometry::{Geometry, LETTERS};
use crate::layouts::Layout;

/// Row y-values, top to bottom.
pub const ROW_ORDER: [f64; 3] = [2.0, 1.0, 0.0];

/// Groups letters into keyboard rows by the y of their assigned position,
/// orders each row by x and joins uppercase letters with single spaces.
///
/// Fails on any y outside {2, 1, 0}: such a catalog cannot be drawn as three rows.
pub fn render_rows(layout: &Layout, geom: &Geometry) -> KgResult<[String; 3]> {
    let mut rows: [Vec<(f64, char)>; 3] = [Vec::new(), Vec::new(), Vec::new()];

    for (letter, &byte) in LETTERS.iter().enumerate() {
        let p = layout.position_of(letter, geom);
        let row = ROW_ORDER.iter().position(|&y| y == p.y).ok_or_else(|| {
            KeyGaError::Geometry(format!(
                "Letter '{}' sits at y = {}, expected one of {:?}",
                byte as char, p.y, ROW_ORDER
            ))
        })?;
        rows[row].push((p.x, byte.to_ascii_uppercase() as char));
    }

    Ok(rows.map(|mut row| {
        row.sort_by(|a, b| a.0.total_cmp(&b.0));
        row.iter()
            .map(|(_, c)| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }))
}
