#![allow(dead_code)]
// Process table component - プロセス一覧テーブル
//
// PID / プロセス名 / CPU% / メモリ の 4 列。ヘッダーはカタログの
// processTable.* キーで解決する。選択行は反転表示。

use crate::models::ProcessInfo;
use crate::ui::{I18n, Theme};
use crate::utils::formatter::{format_memory, format_percent, truncate_to_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// CPU 使用率がこの値以上の行は強調色で表示
const CPU_HIGHLIGHT_THRESHOLD: f32 = 50.0;

const PID_WIDTH: usize = 8;
const CPU_WIDTH: usize = 8;
const MEMORY_WIDTH: usize = 12;

/// プロセステーブルコンポーネント
pub struct ProcessTable<'a> {
    /// 表示対象 (フィルタ済み)
    entries: &'a [&'a ProcessInfo],
    /// 選択中の行
    selected_index: usize,
    /// スクロールオフセット
    scroll_offset: usize,
    /// 文字列リゾルバ
    i18n: I18n,
    /// 背景色
    bg_color: Color,
    /// 前景色
    fg_color: Color,
    /// ヘッダー色
    header_color: Color,
    /// 選択行の前景色
    selected_fg: Color,
    /// 選択行の背景色
    selected_bg: Color,
    /// 高負荷行の色
    cpu_high_color: Color,
}

impl<'a> ProcessTable<'a> {
    pub fn new(entries: &'a [&'a ProcessInfo]) -> Self {
        Self {
            entries,
            selected_index: 0,
            scroll_offset: 0,
            i18n: I18n::default(),
            bg_color: Color::Rgb(22, 24, 33),
            fg_color: Color::Rgb(198, 200, 209),
            header_color: Color::Rgb(132, 160, 198),
            selected_fg: Color::Rgb(22, 24, 33),
            selected_bg: Color::Rgb(132, 160, 198),
            cpu_high_color: Color::Rgb(226, 120, 120),
        }
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn i18n(mut self, i18n: I18n) -> Self {
        self.i18n = i18n;
        self
    }

    /// テーマ適用
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.header_color = theme.table_header_fg.to_color();
        self.selected_fg = theme.row_selected_fg.to_color();
        self.selected_bg = theme.row_selected_bg.to_color();
        self.cpu_high_color = theme.cpu_high.to_color();
        self
    }

    /// 1 画面に収まる行数 (ヘッダー行を除く)
    pub fn visible_rows(area_height: u16) -> usize {
        (area_height as usize).saturating_sub(1)
    }

    fn name_width(area_width: u16) -> usize {
        (area_width as usize).saturating_sub(PID_WIDTH + CPU_WIDTH + MEMORY_WIDTH + 2)
    }

    /// 表示幅に合わせて左詰めパディング (CJK は 2 セル幅)
    fn pad_name(name: &str, width: usize) -> String {
        let truncated = truncate_to_width(name, width);
        let used = truncated.width();
        format!("{}{}", truncated, " ".repeat(width.saturating_sub(used)))
    }
}

impl Widget for ProcessTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        if area.height < 1 {
            return;
        }

        let name_width = Self::name_width(area.width);

        // ヘッダー行
        let header = Line::from(vec![Span::styled(
            format!(
                " {:>pid$} {} {:>cpu$} {:>mem$}",
                self.i18n.tr("processTable.pid"),
                Self::pad_name(self.i18n.tr("processTable.name"), name_width),
                self.i18n.tr("processTable.cpu"),
                self.i18n.tr("processTable.memory"),
                pid = PID_WIDTH - 1,
                cpu = CPU_WIDTH,
                mem = MEMORY_WIDTH,
            ),
            Style::default()
                .fg(self.header_color)
                .add_modifier(Modifier::BOLD),
        )]);
        buf.set_line(area.x, area.y, &header, area.width);

        // データ行
        let visible = Self::visible_rows(area.height);
        for (row, index) in (self.scroll_offset..self.entries.len())
            .take(visible)
            .enumerate()
        {
            let entry = self.entries[index];
            let y = area.y + 1 + row as u16;

            let is_selected = index == self.selected_index;
            let style = if is_selected {
                Style::default().fg(self.selected_fg).bg(self.selected_bg)
            } else if entry.cpu_usage >= CPU_HIGHLIGHT_THRESHOLD {
                Style::default().fg(self.cpu_high_color)
            } else {
                Style::default().fg(self.fg_color)
            };

            let text = format!(
                " {:>pid$} {} {:>cpu$} {:>mem$}",
                entry.pid,
                Self::pad_name(&entry.name, name_width),
                format_percent(entry.cpu_usage),
                format_memory(entry.memory_mb),
                pid = PID_WIDTH - 1,
                cpu = CPU_WIDTH,
                mem = MEMORY_WIDTH,
            );
            let line = Line::from(vec![Span::styled(text, style)]);
            buf.set_line(area.x, y, &line, area.width);

            if is_selected {
                // 選択行は行全体を反転させる
                let row_area = Rect::new(area.x, y, area.width, 1);
                buf.set_style(row_area, Style::default().fg(self.selected_fg).bg(self.selected_bg));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pid: u32, name: &str, cpu: f32) -> ProcessInfo {
        ProcessInfo {
            pid,
            name: name.to_string(),
            cpu_usage: cpu,
            memory_mb: 128.0,
        }
    }

    #[test]
    fn test_process_table_creation() {
        let a = sample(1, "init", 0.1);
        let b = sample(42, "firefox", 12.5);
        let entries: Vec<&ProcessInfo> = vec![&a, &b];
        let table = ProcessTable::new(&entries).selected_index(1).scroll_offset(0);

        assert_eq!(table.entries.len(), 2);
        assert_eq!(table.selected_index, 1);
    }

    #[test]
    fn test_visible_rows_excludes_header() {
        assert_eq!(ProcessTable::visible_rows(10), 9);
        assert_eq!(ProcessTable::visible_rows(1), 0);
        assert_eq!(ProcessTable::visible_rows(0), 0);
    }

    #[test]
    fn test_pad_name_ascii() {
        assert_eq!(ProcessTable::pad_name("sh", 5), "sh   ");
    }

    #[test]
    fn test_pad_name_cjk() {
        // "プロ" は表示幅 4 なのでパディングは 1
        assert_eq!(ProcessTable::pad_name("プロ", 5), "プロ ");
    }
}
