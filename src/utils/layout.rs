use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split an area into the standard header / content / footer rows.
///
/// Returns `(header, content, footer)`.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_heights() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, content, footer) = create_standard_layout(area, 4, 2);
        assert_eq!(header.height, 4);
        assert_eq!(footer.height, 2);
        assert_eq!(content.height, 24 - 4 - 2);
        assert_eq!(footer.y, 22);
    }
}
