#![allow(dead_code)]
// Tab bar component - 上段タブバー
//
// 左からタイトル、タブ (プロセス / リソース)、右端に最終更新時刻と言語名

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// タブバーコンポーネント
pub struct TabBar<'a> {
    /// アプリタイトル
    title: &'a str,
    /// タブのラベル
    tabs: Vec<&'a str>,
    /// アクティブなタブのインデックス
    active: usize,
    /// 最終更新時刻 (フォーマット済み)
    clock: &'a str,
    /// 言語表示名
    language: &'a str,
    /// 背景色
    bg_color: Color,
    /// 前景色
    fg_color: Color,
    /// アクティブタブ色
    active_color: Color,
    /// 非アクティブタブ色
    inactive_color: Color,
}

impl<'a> Default for TabBar<'a> {
    fn default() -> Self {
        Self {
            title: "TaskLite",
            tabs: Vec::new(),
            active: 0,
            clock: "",
            language: "",
            bg_color: Color::Rgb(30, 33, 50),
            fg_color: Color::Rgb(198, 200, 209),
            active_color: Color::Rgb(132, 160, 198),
            inactive_color: Color::Rgb(107, 112, 137),
        }
    }
}

impl<'a> TabBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn tabs(mut self, tabs: Vec<&'a str>) -> Self {
        self.tabs = tabs;
        self
    }

    pub fn active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    pub fn clock(mut self, clock: &'a str) -> Self {
        self.clock = clock;
        self
    }

    pub fn language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.tab_bar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.active_color = theme.tab_active.to_color();
        self.inactive_color = theme.tab_inactive.to_color();
        self
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = Vec::new();
        spans.push(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("│", Style::default().fg(self.inactive_color)));

        for (i, tab) in self.tabs.iter().enumerate() {
            let style = if i == self.active {
                Style::default()
                    .fg(self.active_color)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.inactive_color)
            };
            spans.push(Span::styled(format!(" {} ", tab), style));
        }

        // 右端の情報 (時刻と言語)
        let right_info = if self.clock.is_empty() {
            format!("{} ", self.language)
        } else {
            format!("{}  {} ", self.clock, self.language)
        };

        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let right_width = right_info.width();
        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(
            right_info,
            Style::default().fg(self.inactive_color),
        ));

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_bar_creation() {
        let bar = TabBar::new()
            .title("TaskLite")
            .tabs(vec!["Processes", "Resources"])
            .active(1);

        assert_eq!(bar.title, "TaskLite");
        assert_eq!(bar.tabs.len(), 2);
        assert_eq!(bar.active, 1);
    }
}
