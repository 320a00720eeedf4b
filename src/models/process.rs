#![allow(dead_code)]

/// プロセス 1 件分のサンプル
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    /// プロセス ID
    pub pid: u32,
    /// プロセス名
    pub name: String,
    /// CPU 使用率 (%)
    pub cpu_usage: f32,
    /// メモリ使用量 (MiB)
    pub memory_mb: f64,
}

/// プロセスタブの表示状態
///
/// サンプリング結果そのものは App が保持し、ここでは選択・スクロール・
/// 検索パターンだけを持つ。検索は名前の部分一致 (大文字小文字無視)。
#[derive(Debug, Clone, Default)]
pub struct ProcessTabState {
    /// 選択中の行 (フィルタ後のインデックス)
    pub selected_index: usize,
    /// スクロールオフセット
    pub scroll_offset: usize,
    /// 検索パターン
    pub search: String,
    /// 検索入力モード中かどうか
    pub search_active: bool,
}

impl ProcessTabState {
    pub fn new() -> Self {
        Self::default()
    }

    /// エントリが検索パターンに一致するか
    pub fn matches(&self, name: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.search.to_lowercase())
    }

    /// フィルタ後の行数に合わせて選択位置を補正
    pub fn clamp_selection(&mut self, filtered_len: usize) {
        if filtered_len == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
        } else if self.selected_index >= filtered_len {
            self.selected_index = filtered_len - 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, filtered_len: usize) {
        if filtered_len > 0 && self.selected_index + 1 < filtered_len {
            self.selected_index += 1;
        }
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected_index = self.selected_index.saturating_sub(page.max(1));
    }

    pub fn page_down(&mut self, page: usize, filtered_len: usize) {
        if filtered_len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + page.max(1)).min(filtered_len - 1);
    }

    pub fn go_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn go_bottom(&mut self, filtered_len: usize) {
        self.selected_index = filtered_len.saturating_sub(1);
    }

    /// 表示領域の高さに合わせてスクロールオフセットを追従させる
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
    }

    /// 検索パターンを消して入力モードも抜ける
    pub fn clear_search(&mut self) {
        self.search.clear();
        self.search_active = false;
    }
}
