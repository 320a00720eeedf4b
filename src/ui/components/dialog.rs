#![allow(dead_code)]
// Dialog component - モーダルダイアログ
//
// 種類ごとの状態 (選択中ボタンや入力値) は DialogKind が持ち、
// 描画は Dialog ウィジェットが行う。

use crate::core::actions::{help_entries, ActionCategory};
use crate::ui::{I18n, Language, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 設定ダイアログの編集中ドラフト
///
/// 適用 (Enter) までアプリ本体の設定には反映しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    /// 更新間隔の入力値 (ミリ秒、数字のみ)
    pub interval_input: String,
    /// 表示数の入力値 (数字のみ)
    pub top_n_input: String,
    /// 選択中の言語
    pub language: Language,
    /// フォーカス中のフィールド (0: 更新間隔, 1: 表示数, 2: 言語)
    pub focused_field: usize,
}

impl SettingsDraft {
    pub const FIELD_COUNT: usize = 3;

    pub fn focus_next(&mut self) {
        self.focused_field = (self.focused_field + 1) % Self::FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focused_field = (self.focused_field + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }

    /// フォーカス中の数値フィールドに 1 文字追加
    pub fn input_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        match self.focused_field {
            0 => self.interval_input.push(c),
            1 => self.top_n_input.push(c),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field {
            0 => {
                self.interval_input.pop();
            }
            1 => {
                self.top_n_input.pop();
            }
            _ => {}
        }
    }

    /// 言語フィールドで Left/Right を押したときの切り替え
    pub fn toggle_language(&mut self) {
        if self.focused_field == 2 {
            self.language.toggle();
        }
    }
}

/// ダイアログの種類
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// プロセス終了の確認
    KillConfirm {
        pid: u32,
        name: String,
        selected_button: usize, // 0: Kill, 1: Cancel
    },
    /// エラー表示
    Error { message: String },
    /// 設定
    Settings(SettingsDraft),
    /// キー操作ヘルプ
    Help { scroll_offset: usize },
}

/// ダイアログウィジェット
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    i18n: I18n,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
    error_color: Color,
    selected_fg: Color,
    selected_bg: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            i18n: I18n::default(),
            bg_color: Color::Rgb(30, 33, 50),
            fg_color: Color::Rgb(198, 200, 209),
            accent_color: Color::Rgb(132, 160, 198),
            error_color: Color::Rgb(226, 120, 120),
            selected_fg: Color::Rgb(22, 24, 33),
            selected_bg: Color::Rgb(132, 160, 198),
        }
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.tab_bar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.accent_color = theme.accent.to_color();
        self.error_color = theme.error.to_color();
        self.selected_fg = theme.row_selected_fg.to_color();
        self.selected_bg = theme.row_selected_bg.to_color();
        self
    }

    /// 画面中央の矩形を計算
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect::new(
            area.x + (area.width.saturating_sub(width)) / 2,
            area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        )
    }

    /// ボタン行を生成 (選択中は反転)
    fn button_line(&self, labels: &[&str], selected: usize) -> Line<'static> {
        let mut spans = Vec::new();
        for (i, label) in labels.iter().enumerate() {
            let style = if i == selected {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };
            spans.push(Span::styled(format!("[ {} ]", label), style));
            if i + 1 < labels.len() {
                spans.push(Span::raw("  "));
            }
        }
        Line::from(spans)
    }

    fn render_kill_confirm(
        &self,
        pid: u32,
        name: &str,
        selected_button: usize,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let message = self.i18n.fmt(
            "dialogs.killConfirm",
            &[("name", name.to_string()), ("pid", pid.to_string())],
        );

        let width = ((message.width() + 6).max(40) as u16).min(area.width);
        let rect = Self::centered_rect(width, 7, area);
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent_color))
            .title(format!(" {} ", self.i18n.tr("processTable.kill")))
            .style(Style::default().bg(self.bg_color));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(self.fg_color))),
            Line::from(""),
            self.button_line(
                &[self.i18n.tr("processTable.kill"), "Cancel"],
                selected_button,
            ),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(rect, buf);
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let width = ((message.width() + 6).max(36) as u16).min(area.width);
        let rect = Self::centered_rect(width, 7, area);
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.error_color))
            .title(" Error ")
            .style(Style::default().bg(self.bg_color));

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(self.error_color),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter / Esc: Close",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(rect, buf);
    }

    fn render_settings(&self, draft: &SettingsDraft, area: Rect, buf: &mut Buffer) {
        let rect = Self::centered_rect(46, 9, area);
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent_color))
            .title(format!(" {} ", self.i18n.tr("footer.f2")))
            .style(Style::default().bg(self.bg_color));

        let field_style = |index: usize| {
            if index == draft.focused_field {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            }
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", self.i18n.tr("settings.interval")),
                    Style::default().fg(self.accent_color),
                ),
                Span::styled(format!("{:<8}", draft.interval_input), field_style(0)),
                Span::styled(
                    format!(" {}", self.i18n.tr("settings.ms")),
                    Style::default().fg(self.fg_color),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", self.i18n.tr("settings.topN")),
                    Style::default().fg(self.accent_color),
                ),
                Span::styled(format!("{:<8}", draft.top_n_input), field_style(1)),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(" {}: ", self.i18n.tr("settings.language")),
                    Style::default().fg(self.accent_color),
                ),
                Span::styled(
                    format!("◄ {} ►", draft.language.display_name()),
                    field_style(2),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: OK   Esc: Cancel",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).block(block).render(rect, buf);
    }

    fn render_help(&self, scroll_offset: usize, area: Rect, buf: &mut Buffer) {
        let rect = Self::centered_rect(52, area.height.saturating_sub(4).clamp(10, 20), area);
        Clear.render(rect, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent_color))
            .title(format!(" {} ", self.i18n.tr("footer.f1")))
            .style(Style::default().bg(self.bg_color));

        let language = self.i18n.language();
        let mut lines: Vec<Line> = Vec::new();
        for category in [
            ActionCategory::Navigation,
            ActionCategory::Process,
            ActionCategory::System,
        ] {
            lines.push(Line::from(Span::styled(
                format!(" {}", category.label(language)),
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            )));
            for entry in help_entries(language)
                .iter()
                .filter(|e| e.category == category)
            {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("   {:<14}", entry.keys),
                        Style::default().fg(self.accent_color),
                    ),
                    Span::styled(entry.label, Style::default().fg(self.fg_color)),
                ]));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            " Esc: Close   j/k: Scroll",
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines)
            .scroll((scroll_offset as u16, 0))
            .block(block)
            .render(rect, buf);
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.kind {
            DialogKind::KillConfirm {
                pid,
                name,
                selected_button,
            } => self.render_kill_confirm(*pid, name, *selected_button, area, buf),
            DialogKind::Error { message } => self.render_error(message, area, buf),
            DialogKind::Settings(draft) => self.render_settings(draft, area, buf),
            DialogKind::Help { scroll_offset } => self.render_help(*scroll_offset, area, buf),
        }
    }
}
