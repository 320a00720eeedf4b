#![allow(dead_code)]

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// カラーテーマシステム
///
/// アプリケーション全体の配色を管理します。
/// TOML ファイルからテーマを読み込むか、組み込みテーマを使用できます。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 背景/前景
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // タブバー
    pub tab_bar_bg: ColorDef,
    pub tab_active: ColorDef,
    pub tab_inactive: ColorDef,

    // プロセステーブル
    pub table_header_fg: ColorDef,
    pub row_selected_fg: ColorDef,
    pub row_selected_bg: ColorDef,
    pub cpu_high: ColorDef,

    // リソースゲージ
    pub gauge_cpu: ColorDef,
    pub gauge_memory: ColorDef,
    pub sparkline: ColorDef,

    // フッター
    pub footer_bg: ColorDef,
    pub footer_fg: ColorDef,

    // 強調
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 色の定義 (TOML シリアライズ対応)
///
/// Hex 文字列("#1e1e1e")または色名("Red")を指定できます。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef を ratatui の Color へ変換
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 色文字列を Color にパース
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 色名を Color にパース
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark テーマ (既定)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#161821".into(),
            fg_primary: "#c6c8d1".into(),

            tab_bar_bg: "#1e2132".into(),
            tab_active: "#84a0c6".into(),
            tab_inactive: "#6b7089".into(),

            table_header_fg: "#84a0c6".into(),
            row_selected_fg: "#161821".into(),
            row_selected_bg: "#84a0c6".into(),
            cpu_high: "#e27878".into(),

            gauge_cpu: "#84a0c6".into(),
            gauge_memory: "#89b8c2".into(),
            sparkline: "#b4be82".into(),

            footer_bg: "#1e2132".into(),
            footer_fg: "#c6c8d1".into(),

            accent: "#84a0c6".into(),
            warning: "#e2a478".into(),
            error: "#e27878".into(),
            success: "#b4be82".into(),
        }
    }

    /// Light テーマ
    pub fn light() -> Self {
        Theme {
            bg_primary: "#fafafa".into(),
            fg_primary: "#33374c".into(),

            tab_bar_bg: "#e8e9ec".into(),
            tab_active: "#2d539e".into(),
            tab_inactive: "#8389a3".into(),

            table_header_fg: "#2d539e".into(),
            row_selected_fg: "#fafafa".into(),
            row_selected_bg: "#2d539e".into(),
            cpu_high: "#cc517a".into(),

            gauge_cpu: "#2d539e".into(),
            gauge_memory: "#3f83a6".into(),
            sparkline: "#668e3d".into(),

            footer_bg: "#e8e9ec".into(),
            footer_fg: "#33374c".into(),

            accent: "#2d539e".into(),
            warning: "#c57339".into(),
            error: "#cc517a".into(),
            success: "#668e3d".into(),
        }
    }

    /// TOML ファイルからテーマを読み込み
    pub fn from_file(path: PathBuf) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }

    /// テーマを TOML ファイルへ保存
    pub fn save_to_file(&self, path: PathBuf) -> Result<(), anyhow::Error> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// テーマ管理
///
/// 現在のテーマの保持とランタイムでの切り替えを担当します。
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 既定のテーマ管理を生成 (Dark テーマ)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
            ],
        }
    }

    /// 現在のテーマを返す
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    /// 現在のテーマ名を返す
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// テーマ切り替え (名前指定)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        if let Some((found, theme)) = self.available_themes.iter().find(|(n, _)| n == name) {
            self.current_name = found.clone();
            self.current_theme = theme.clone();
            Ok(())
        } else {
            Err(format!("Theme not found: {}", name))
        }
    }

    /// 次のテーマへ巡回
    pub fn cycle_theme(&mut self) {
        let current_index = self
            .available_themes
            .iter()
            .position(|(name, _)| *name == self.current_name)
            .unwrap_or(0);

        let next_index = (current_index + 1) % self.available_themes.len();
        let (name, theme) = &self.available_themes[next_index];
        self.current_name = name.clone();
        self.current_theme = theme.clone();
    }

    /// 使用可能なテーマ名の一覧
    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// カスタムテーマの追加
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        self.available_themes.push((name, theme));
    }

    /// 設定ディレクトリからテーマファイルを読み込み
    pub fn load_themes_from_config_dir(&mut self) -> Result<(), anyhow::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let themes_dir = config_dir.join("tasklite").join("themes");

            if themes_dir.exists() {
                for entry in fs::read_dir(themes_dir)? {
                    let entry = entry?;
                    let path = entry.path();

                    if path.extension().and_then(|s| s.to_str()) == Some("toml") {
                        if let Ok(theme) = Theme::from_file(path.clone()) {
                            let name = path
                                .file_stem()
                                .and_then(|s| s.to_str())
                                .unwrap_or("custom")
                                .to_string();

                            self.add_theme(name, theme);
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(22, 24, 33));
    }

    #[test]
    fn test_light_theme_creation() {
        let theme = Theme::light();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(250, 250, 250));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#161821"), Color::Rgb(22, 24, 33));
        // 桁数が不正なら Reset
        assert_eq!(parse_hex_color("#fff"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("Blue"), Color::Blue);
        assert_eq!(parse_named_color("unknown"), Color::Reset);
    }

    #[test]
    fn test_theme_manager_creation() {
        let manager = ThemeManager::new();
        assert_eq!(manager.available_themes().len(), 2);
        assert_eq!(manager.current_name(), "dark");
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert!(manager.switch_theme("sepia").is_err());
        // 失敗しても現在のテーマは変わらない
        assert_eq!(manager.current_name(), "light");
    }

    #[test]
    fn test_theme_cycling() {
        let mut manager = ThemeManager::new();
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "light");
        manager.cycle_theme();
        assert_eq!(manager.current_name(), "dark");
    }

    #[test]
    fn test_theme_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        Theme::dark().save_to_file(path.clone()).unwrap();
        let loaded = Theme::from_file(path).unwrap();
        assert_eq!(loaded.bg_primary.to_color(), Theme::dark().bg_primary.to_color());
    }
}
