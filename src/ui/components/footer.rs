#![allow(dead_code)]
// Footer component - 下段フッター
//
// F キーと対応するアクションのラベルを表示。右端にトースト通知。

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// フッターの 1 項目
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// キー表示 (F1, F2, ...)
    pub key: String,
    /// ラベル (カタログで解決済み)
    pub label: String,
    /// 有効かどうか
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// フッターコンポーネント
pub struct Footer<'a> {
    /// コマンド項目
    commands: Vec<CommandItem>,
    /// トースト通知 (あれば右端に表示)
    toast: Option<&'a str>,
    /// 背景色
    bg_color: Color,
    /// キーの前景色
    key_fg_color: Color,
    /// ラベルの前景色
    label_fg_color: Color,
    /// 無効項目の色
    disabled_color: Color,
    /// トースト色
    toast_color: Color,
}

impl<'a> Default for Footer<'a> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            toast: None,
            bg_color: Color::Rgb(30, 33, 50),
            key_fg_color: Color::Rgb(132, 160, 198),
            label_fg_color: Color::Rgb(198, 200, 209),
            disabled_color: Color::Rgb(107, 112, 137),
            toast_color: Color::Rgb(180, 190, 130),
        }
    }
}

impl<'a> Footer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// コマンド項目の設定
    pub fn commands(mut self, commands: Vec<CommandItem>) -> Self {
        self.commands = commands;
        self
    }

    /// トースト通知の設定
    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.footer_bg.to_color();
        self.key_fg_color = theme.accent.to_color();
        self.label_fg_color = theme.footer_fg.to_color();
        self.toast_color = theme.success.to_color();
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = Vec::new();
        spans.push(Span::raw(" "));

        for (i, cmd) in self.commands.iter().enumerate() {
            let (key_style, label_style) = if cmd.enabled {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                (
                    Style::default().fg(self.disabled_color),
                    Style::default().fg(self.disabled_color),
                )
            };

            spans.push(Span::styled(cmd.key.clone(), key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(cmd.label.clone(), label_style));

            if i < self.commands.len() - 1 {
                spans.push(Span::raw(" "));
            }
        }

        // トーストは右寄せ
        if let Some(toast) = self.toast {
            let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
            let toast_text = format!("{} ", toast);
            let padding = (area.width as usize).saturating_sub(left_width + toast_text.width());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(
                toast_text,
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("F1", "Help");
        assert_eq!(item.key, "F1");
        assert_eq!(item.label, "Help");
        assert!(item.enabled);
    }

    #[test]
    fn test_command_item_disabled() {
        let item = CommandItem::new("F9", "Kill").enabled(false);
        assert!(!item.enabled);
    }

    #[test]
    fn test_footer_builder() {
        let footer = Footer::new()
            .commands(vec![CommandItem::new("F1", "Help")])
            .toast(Some("done"));
        assert_eq!(footer.commands.len(), 1);
        assert_eq!(footer.toast, Some("done"));
    }
}
