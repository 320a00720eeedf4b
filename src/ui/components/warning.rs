#![allow(dead_code)]
// Warning screen component - 警告画面
//
// 端末が最小サイズ未満のときに表示する

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 警告画面コンポーネント
pub struct WarningScreen {
    /// 現在の端末サイズ
    current_size: (u16, u16),
    /// 警告色
    warning_color: Color,
    /// 背景色
    bg_color: Color,
    /// 前景色
    fg_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(22, 24, 33),
            fg_color: Color::Rgb(198, 200, 209),
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の端末サイズを設定
    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let lines = vec![
            Line::from(Span::styled(
                "⚠ Terminal Too Small",
                Style::default()
                    .fg(self.warning_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Current: {}x{}   Required: {}x{}",
                    self.current_size.0, self.current_size.1, MIN_WIDTH, MIN_HEIGHT
                ),
                Style::default().fg(self.fg_color),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Please resize your terminal",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
