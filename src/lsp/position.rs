//! Conversion between LSP positions (UTF-16 columns) and byte offsets

use tower_lsp::lsp_types::Position;

/// Byte offset of `position` in `text`.
///
/// Columns past the end of a line clamp to the line end, lines past the end
/// of the document clamp to the document end.
pub fn offset_at(text: &str, position: Position) -> usize {
    let mut line_start = 0;
    for _ in 0..position.line {
        match text[line_start..].find('\n') {
            Some(i) => line_start += i + 1,
            None => return text.len(),
        }
    }

    let mut line_end = text[line_start..]
        .find('\n')
        .map_or(text.len(), |i| line_start + i);
    if text[line_start..line_end].ends_with('\r') {
        line_end -= 1;
    }

    let mut column = 0u32;
    for (index, ch) in text[line_start..line_end].char_indices() {
        if column >= position.character {
            return line_start + index;
        }
        column += ch.len_utf16() as u32;
    }
    line_end
}

/// LSP position of the byte `offset` in `text`, clamped to the document
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &text[..offset];
    let line = before.matches('\n').count() as u32;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let character = before[line_start..].encode_utf16().count() as u32;

    Position { line, character }
}
