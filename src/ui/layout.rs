#![allow(dead_code)]
// Layout system - 画面レイアウト
//
// 縦方向の分割:
// - 1 行目: タブバー (タイトル + タブ + 時刻)
// - 中間: 本体 (プロセステーブル or リソースパネル)、検索行は必要時のみ
// - 最終行: フッター (F キー一覧)
// 最小サイズ未満の端末では警告画面を表示する。

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 最小端末サイズ
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// レイアウトモード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 通常表示
    Normal,
    /// 端末が小さすぎる
    TooSmall,
}

/// アクティブなタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Processes,
    Resources,
}

impl ActiveTab {
    /// タブ切り替え
    pub fn toggle(&mut self) {
        *self = match self {
            ActiveTab::Processes => ActiveTab::Resources,
            ActiveTab::Resources => ActiveTab::Processes,
        };
    }

    /// タブのインデックス (タブバー描画用)
    pub fn index(self) -> usize {
        match self {
            ActiveTab::Processes => 0,
            ActiveTab::Resources => 1,
        }
    }
}

/// 計算済みのレイアウト領域
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 上段タブバー領域
    pub tab_bar: Rect,
    /// 検索入力行 (非表示のときは高さ 0)
    pub search_bar: Rect,
    /// 本体領域
    pub body: Rect,
    /// 下段フッター領域
    pub footer: Rect,
}

/// レイアウト管理
#[derive(Debug, Clone)]
pub struct LayoutManager {
    mode: LayoutMode,
    active_tab: ActiveTab,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            active_tab: ActiveTab::default(),
            terminal_size: (0, 0),
            areas: LayoutAreas::default(),
        }
    }

    /// 端末サイズから領域を再計算する
    ///
    /// search_visible が真のときだけ検索行に 1 行割り当てる。
    pub fn update(&mut self, size: Rect, search_visible: bool) {
        self.terminal_size = (size.width, size.height);

        if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
            self.mode = LayoutMode::TooSmall;
            return;
        }
        self.mode = LayoutMode::Normal;

        let search_height = if search_visible { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(search_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.areas = LayoutAreas {
            tab_bar: chunks[0],
            search_bar: chunks[1],
            body: chunks[2],
            footer: chunks[3],
        };
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn switch_tab(&mut self) {
        self.active_tab.toggle();
    }
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30), false);

        assert_eq!(manager.mode(), LayoutMode::Normal);
        let areas = manager.areas();
        assert_eq!(areas.tab_bar.height, 1);
        assert_eq!(areas.search_bar.height, 0);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.body.height, 28);
    }

    #[test]
    fn test_layout_with_search_row() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30), true);

        let areas = manager.areas();
        assert_eq!(areas.search_bar.height, 1);
        assert_eq!(areas.body.height, 27);
    }

    #[test]
    fn test_too_small_terminal() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 40, 10), false);
        assert_eq!(manager.mode(), LayoutMode::TooSmall);

        // 十分な大きさに戻れば通常モードに復帰
        manager.update(Rect::new(0, 0, 80, 24), false);
        assert_eq!(manager.mode(), LayoutMode::Normal);
    }

    #[test]
    fn test_tab_toggle() {
        let mut manager = LayoutManager::new();
        assert_eq!(manager.active_tab(), ActiveTab::Processes);
        manager.switch_tab();
        assert_eq!(manager.active_tab(), ActiveTab::Resources);
        manager.switch_tab();
        assert_eq!(manager.active_tab(), ActiveTab::Processes);
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(ActiveTab::Processes.index(), 0);
        assert_eq!(ActiveTab::Resources.index(), 1);
    }
}
