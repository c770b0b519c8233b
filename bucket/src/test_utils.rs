use crate::codec::{decode_lines, Bitmap, BITMAP_MAGIC};

/// Decodes a bitmap from rows of `0`/`1` digits, one string per image row.
pub fn bitmap_from_rows(rows: &[&str]) -> Bitmap {
    let width = rows.first().map_or(0, |row| row.len());
    let mut lines = vec![BITMAP_MAGIC.to_string(), format!("{} {}", width, rows.len())];
    lines.extend(rows.iter().map(|row| row.to_string()));

    decode_lines(lines).unwrap_or_else(|e| panic!("Failed to decode test rows {rows:?}: {e}"))
}
