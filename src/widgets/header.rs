use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render a header with title, subtitle and the current theme name
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the header in
    /// * `title` - The title text (e.g., "Create an account")
    /// * `subtitle` - The subtitle text below the title
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) -> Result<()> {
        let t = theme();
        let header_block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(" Plateful ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(1, 1, 0, 0));

        let inner_area = header_block.inner(area);
        frame.render_widget(header_block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner_area);

        // Title row with the theme name on the right
        let title_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(chunks[0]);

        let title_para = Paragraph::new(title).style(t.title_style());
        frame.render_widget(title_para, title_row[0]);

        let theme_label = Paragraph::new(format!("theme: {}", t.theme_type.name()))
            .style(t.muted_style())
            .alignment(Alignment::Right);
        frame.render_widget(theme_label, title_row[1]);

        let subtitle_para = Paragraph::new(subtitle)
            .style(t.muted_style())
            .wrap(Wrap { trim: true });
        frame.render_widget(subtitle_para, chunks[1]);

        Ok(())
    }
}
