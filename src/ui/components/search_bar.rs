#![allow(dead_code)]
// Search bar component - プロセス検索の入力行
//
// パターンが空のときはカタログの processTable.search をプレースホルダ表示

use crate::ui::{I18n, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 検索バーコンポーネント
pub struct SearchBar<'a> {
    /// 入力中のパターン
    value: &'a str,
    /// 入力モード中かどうか (カーソル表示)
    active: bool,
    /// 文字列リゾルバ
    i18n: I18n,
    /// 背景色
    bg_color: Color,
    /// 前景色
    fg_color: Color,
    /// プレースホルダ色
    placeholder_color: Color,
    /// ラベル色
    label_color: Color,
}

impl<'a> SearchBar<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            active: false,
            i18n: I18n::default(),
            bg_color: Color::Rgb(30, 33, 50),
            fg_color: Color::Rgb(198, 200, 209),
            placeholder_color: Color::Rgb(107, 112, 137),
            label_color: Color::Rgb(132, 160, 198),
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.tab_bar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.placeholder_color = theme.tab_inactive.to_color();
        self.label_color = theme.accent.to_color();
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = vec![Span::styled(
            format!(" {}: ", self.i18n.tr("footer.f3")),
            Style::default()
                .fg(self.label_color)
                .add_modifier(Modifier::BOLD),
        )];

        if self.value.is_empty() {
            if self.active {
                // 簡易カーソル
                spans.push(Span::styled("█", Style::default().fg(self.fg_color)));
                spans.push(Span::raw(" "));
            }
            // パターンが空の間はプレースホルダを出す
            spans.push(Span::styled(
                self.i18n.tr("processTable.search"),
                Style::default()
                    .fg(self.placeholder_color)
                    .add_modifier(Modifier::DIM),
            ));
        } else {
            spans.push(Span::styled(
                self.value,
                Style::default().fg(self.fg_color),
            ));
            if self.active {
                // 簡易カーソル
                spans.push(Span::styled("█", Style::default().fg(self.fg_color)));
            }
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}
