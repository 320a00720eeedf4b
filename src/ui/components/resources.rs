#![allow(dead_code)]
// Resource panel component - リソースタブ本体
//
// CPU とメモリのゲージ 2 本 + 直近履歴のスパークライン 2 本。
// ラベルはカタログの resources.* キーで解決する。

use crate::models::SystemStats;
use crate::ui::{I18n, Theme};
use crate::utils::formatter::{format_memory, format_percent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Sparkline, Widget},
};

/// リソースパネルコンポーネント
pub struct ResourcePanel<'a> {
    /// 最新の統計
    stats: SystemStats,
    /// CPU 使用率の履歴 (%)
    cpu_history: &'a [u64],
    /// メモリ使用率の履歴 (%)
    memory_history: &'a [u64],
    /// 文字列リゾルバ
    i18n: I18n,
    /// 背景色
    bg_color: Color,
    /// 前景色
    fg_color: Color,
    /// CPU ゲージ色
    cpu_color: Color,
    /// メモリゲージ色
    memory_color: Color,
    /// スパークライン色
    sparkline_color: Color,
}

impl<'a> ResourcePanel<'a> {
    pub fn new(stats: SystemStats) -> Self {
        Self {
            stats,
            cpu_history: &[],
            memory_history: &[],
            i18n: I18n::default(),
            bg_color: Color::Rgb(22, 24, 33),
            fg_color: Color::Rgb(198, 200, 209),
            cpu_color: Color::Rgb(132, 160, 198),
            memory_color: Color::Rgb(137, 184, 194),
            sparkline_color: Color::Rgb(180, 190, 130),
        }
    }

    pub fn cpu_history(mut self, history: &'a [u64]) -> Self {
        self.cpu_history = history;
        self
    }

    pub fn memory_history(mut self, history: &'a [u64]) -> Self {
        self.memory_history = history;
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
        self.cpu_color = theme.gauge_cpu.to_color();
        self.memory_color = theme.gauge_memory.to_color();
        self.sparkline_color = theme.sparkline.to_color();
        self
    }

    /// ゲージ比率は 0.0..=1.0 に収める
    fn ratio(percent: f32) -> f64 {
        (percent as f64 / 100.0).clamp(0.0, 1.0)
    }
}

impl Widget for ResourcePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(area);

        let border_style = Style::default().fg(self.fg_color);

        // CPU ゲージ
        let cpu_gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", self.i18n.tr("resources.cpu"))),
            )
            .gauge_style(Style::default().fg(self.cpu_color).bg(self.bg_color))
            .ratio(Self::ratio(self.stats.cpu_usage))
            .label(format_percent(self.stats.cpu_usage));
        cpu_gauge.render(chunks[0], buf);

        // メモリゲージ (使用中 / 合計 をラベルに併記)
        let memory_label = format!(
            "{} ({} {} / {} {})",
            format_percent(self.stats.memory_usage_percent),
            self.i18n.tr("resources.used"),
            format_memory(self.stats.memory_used_mb),
            self.i18n.tr("resources.total"),
            format_memory(self.stats.memory_total_mb),
        );
        let memory_gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {} ", self.i18n.tr("resources.memory"))),
            )
            .gauge_style(Style::default().fg(self.memory_color).bg(self.bg_color))
            .ratio(Self::ratio(self.stats.memory_usage_percent))
            .label(memory_label);
        memory_gauge.render(chunks[1], buf);

        // 履歴スパークライン (左: CPU, 右: メモリ)
        let history_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        let history_label = self.i18n.tr("resources.history");
        let cpu_sparkline = Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(
                        " {} ({}) ",
                        history_label,
                        self.i18n.tr("resources.cpu")
                    )),
            )
            .style(Style::default().fg(self.sparkline_color))
            .max(100)
            .data(self.cpu_history);
        cpu_sparkline.render(history_chunks[0], buf);

        let memory_sparkline = Sparkline::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(
                        " {} ({}) ",
                        history_label,
                        self.i18n.tr("resources.memory")
                    )),
            )
            .style(Style::default().fg(self.sparkline_color))
            .max(100)
            .data(self.memory_history);
        memory_sparkline.render(history_chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_panel_creation() {
        let stats = SystemStats {
            cpu_usage: 42.0,
            memory_used_mb: 4096.0,
            memory_total_mb: 8192.0,
            memory_usage_percent: 50.0,
        };
        let cpu = [10, 20, 30];
        let panel = ResourcePanel::new(stats).cpu_history(&cpu);

        assert_eq!(panel.stats.cpu_usage, 42.0);
        assert_eq!(panel.cpu_history.len(), 3);
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(ResourcePanel::ratio(50.0), 0.5);
        assert_eq!(ResourcePanel::ratio(-1.0), 0.0);
        assert_eq!(ResourcePanel::ratio(150.0), 1.0);
    }
}
