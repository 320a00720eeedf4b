#![allow(dead_code)]

use crate::core::actions::Action;
use crate::models::{ProcessInfo, ProcessTabState, StatsHistory, SystemStats};
use crate::system::Monitor;
use crate::ui::{
    ActiveTab, DialogKind, I18n, Language, LayoutManager, SettingsDraft, ThemeManager,
};
use crate::utils::error::{Result, TaskLiteError};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};

#[cfg(test)]
mod tests;

/// 保存対象の設定値
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct PersistedSettings {
    interval_ms: u64,
    top_n: usize,
    language: String,
}

/// 設定ファイルのペイロード
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedAppState {
    version: u32,
    theme: String,
    settings: PersistedSettings,
}

/// アプリ状態
pub struct App {
    /// 終了フラグ
    pub should_quit: bool,
    /// レイアウト管理
    pub layout: LayoutManager,
    /// システムサンプラ
    monitor: Monitor,
    /// 文字列リゾルバ (現在の言語を保持)
    i18n: I18n,
    /// 最新のプロセスサンプル (CPU 降順、top_n 件)
    pub processes: Vec<ProcessInfo>,
    /// プロセスタブの表示状態
    pub process_tab: ProcessTabState,
    /// 最新のシステム統計
    pub stats: SystemStats,
    /// リソース履歴
    pub history: StatsHistory,
    /// 更新間隔 (ミリ秒)
    pub interval_ms: u64,
    /// プロセス表示数
    pub top_n: usize,
    /// 現在表示中のダイアログ
    pub dialog: Option<DialogKind>,
    /// トーストメッセージ (3 秒後に自動消滅)
    pub toast_message: Option<(String, Instant)>,
    /// テーマ管理
    pub theme_manager: ThemeManager,
    /// 前回サンプリング時刻 (経過判定用)
    last_sample: Option<Instant>,
    /// 前回サンプリングの壁時計時刻 (タブバー表示用)
    last_sample_time: Option<SystemTime>,
    /// 1 画面に収まるテーブル行数 (描画時に更新)
    visible_rows: usize,
    /// テストで設定保存先を隔離するための override
    state_store_override: Option<PathBuf>,
}

impl App {
    const SETTINGS_VERSION: u32 = 1;
    const DEFAULT_INTERVAL_MS: u64 = 1000;
    const DEFAULT_TOP_N: usize = 30;
    const MIN_INTERVAL_MS: u64 = 200;
    const MAX_INTERVAL_MS: u64 = 10_000;
    const MIN_TOP_N: usize = 5;
    const MAX_TOP_N: usize = 100;
    const TOAST_DURATION: Duration = Duration::from_secs(3);

    pub fn new() -> Result<Self> {
        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            monitor: Monitor::new(),
            i18n: I18n::default(),
            processes: Vec::new(),
            process_tab: ProcessTabState::new(),
            stats: SystemStats::default(),
            history: StatsHistory::new(),
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            top_n: Self::DEFAULT_TOP_N,
            dialog: None,
            toast_message: None,
            theme_manager: ThemeManager::new(),
            last_sample: None,
            last_sample_time: None,
            visible_rows: 10,
            state_store_override: None,
        };
        let _ = app.theme_manager.load_themes_from_config_dir();
        app.load_persisted_state();
        app.sample();
        Ok(app)
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static TEST_APP_COUNTER: AtomicUsize = AtomicUsize::new(0);
        let suffix = TEST_APP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let state_store_override = std::env::temp_dir().join(format!(
            "tasklite-test-settings-{}-{}.toml",
            std::process::id(),
            suffix
        ));

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            monitor: Monitor::new(),
            i18n: I18n::default(),
            processes: Vec::new(),
            process_tab: ProcessTabState::new(),
            stats: SystemStats::default(),
            history: StatsHistory::new(),
            interval_ms: Self::DEFAULT_INTERVAL_MS,
            top_n: Self::DEFAULT_TOP_N,
            dialog: None,
            toast_message: None,
            theme_manager: ThemeManager::new(),
            last_sample: None,
            last_sample_time: None,
            visible_rows: 10,
            state_store_override: Some(state_store_override),
        }
    }

    /// 終了
    pub fn quit(&mut self) {
        let _ = self.save_persisted_state();
        self.should_quit = true;
    }

    /// 終了状態の確認
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn i18n(&self) -> I18n {
        self.i18n
    }

    pub fn language(&self) -> Language {
        self.i18n.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.i18n = I18n::new(language);
    }

    // ---------------------------------------------------------------
    // サンプリング
    // ---------------------------------------------------------------

    /// 更新間隔
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// 定期処理: 間隔が経過していれば再サンプリングし、トーストを失効させる
    pub fn tick(&mut self) {
        let due = match self.last_sample {
            Some(at) => at.elapsed() >= self.interval(),
            None => true,
        };
        if due {
            self.sample();
        }

        if let Some((_, shown_at)) = &self.toast_message {
            if shown_at.elapsed() >= Self::TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }

    /// 今すぐ再サンプリング
    pub fn sample(&mut self) {
        self.processes = self.monitor.processes(self.top_n);
        self.stats = self.monitor.stats();
        self.history.push(&self.stats);
        self.last_sample = Some(Instant::now());
        self.last_sample_time = Some(SystemTime::now());

        let filtered_len = self.visible_processes().len();
        self.process_tab.clamp_selection(filtered_len);
    }

    pub fn last_sample_time(&self) -> Option<SystemTime> {
        self.last_sample_time
    }

    /// 描画側から 1 画面の行数を知らせてもらう (ページ移動とスクロール追従用)
    pub fn set_visible_rows(&mut self, rows: usize) {
        self.visible_rows = rows;
        self.process_tab.adjust_scroll(rows.max(1));
    }

    // ---------------------------------------------------------------
    // プロセスタブ
    // ---------------------------------------------------------------

    /// 検索フィルタ適用後のプロセス一覧
    pub fn visible_processes(&self) -> Vec<&ProcessInfo> {
        self.processes
            .iter()
            .filter(|p| self.process_tab.matches(&p.name))
            .collect()
    }

    /// 選択中のプロセス
    pub fn selected_process(&self) -> Option<&ProcessInfo> {
        let visible = self.visible_processes();
        visible.get(self.process_tab.selected_index).copied()
    }

    /// 検索入力モード中かどうか
    pub fn is_search_active(&self) -> bool {
        self.process_tab.search_active
    }

    /// 検索行を表示すべきか (入力中またはパターンあり)
    pub fn is_search_visible(&self) -> bool {
        self.process_tab.search_active || !self.process_tab.search.is_empty()
    }

    pub fn start_search(&mut self) {
        self.layout_to_processes();
        self.process_tab.search_active = true;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.process_tab.search.push(c);
        let filtered_len = self.visible_processes().len();
        self.process_tab.clamp_selection(filtered_len);
    }

    pub fn search_backspace(&mut self) {
        self.process_tab.search.pop();
    }

    /// 検索入力を終える (keep が偽ならパターンも破棄)
    pub fn finish_search(&mut self, keep: bool) {
        if keep {
            self.process_tab.search_active = false;
        } else {
            self.process_tab.clear_search();
        }
        let filtered_len = self.visible_processes().len();
        self.process_tab.clamp_selection(filtered_len);
    }

    /// リソースタブにいたらプロセスタブへ移動
    fn layout_to_processes(&mut self) {
        if self.layout.active_tab() != ActiveTab::Processes {
            self.layout.switch_tab();
        }
    }

    // ---------------------------------------------------------------
    // アクション実行
    // ---------------------------------------------------------------

    /// 通常モードのアクション実行
    pub fn execute_action(&mut self, action: Action) {
        let filtered_len = self.visible_processes().len();
        let page = self.visible_rows.max(1);

        match action {
            Action::MoveUp => self.process_tab.move_up(),
            Action::MoveDown => self.process_tab.move_down(filtered_len),
            Action::PageUp => self.process_tab.page_up(page),
            Action::PageDown => self.process_tab.page_down(page, filtered_len),
            Action::GoToTop => self.process_tab.go_top(),
            Action::GoToBottom => self.process_tab.go_bottom(filtered_len),
            Action::SwitchTab => self.layout.switch_tab(),
            Action::StartSearch => self.start_search(),
            Action::KillSelected => self.open_kill_dialog(),
            Action::ShowHelp => {
                self.dialog = Some(DialogKind::Help { scroll_offset: 0 });
            }
            Action::OpenSettings => self.open_settings_dialog(),
            Action::Refresh => self.sample(),
            Action::Quit => self.quit(),
        }
        self.process_tab.adjust_scroll(page);
    }

    // ---------------------------------------------------------------
    // ダイアログ
    // ---------------------------------------------------------------

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 選択中プロセスに対する終了確認ダイアログを開く
    pub fn open_kill_dialog(&mut self) {
        self.layout_to_processes();
        let target = self
            .selected_process()
            .map(|process| (process.pid, process.name.clone()));
        if let Some((pid, name)) = target {
            self.dialog = Some(DialogKind::KillConfirm {
                pid,
                name,
                selected_button: 0,
            });
        }
    }

    /// 終了確認ダイアログのボタン切り替え (Tab / Left / Right)
    pub fn kill_dialog_toggle_button(&mut self) {
        if let Some(DialogKind::KillConfirm {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = 1 - *selected_button;
        }
    }

    /// 終了確認ダイアログで Enter
    pub fn confirm_kill_dialog(&mut self) {
        let Some(DialogKind::KillConfirm {
            pid,
            selected_button,
            ..
        }) = &self.dialog
        else {
            return;
        };
        let pid = *pid;
        let confirmed = *selected_button == 0;
        self.close_dialog();

        if confirmed {
            self.kill_process(pid);
        }
    }

    /// プロセスを終了し、結果をトースト / エラーダイアログで通知
    fn kill_process(&mut self, pid: u32) {
        match self.monitor.kill(pid) {
            Ok(()) => {
                self.toast(self.i18n.tr("dialogs.killSuccess").to_string());
                self.sample();
            }
            Err(err) => {
                // killFailed テンプレート側に定型句があるので理由だけ埋め込む
                let reason = match err {
                    TaskLiteError::Process(msg) => msg,
                    other => other.to_string(),
                };
                let message = self.i18n.fmt("dialogs.killFailed", &[("error", reason)]);
                self.dialog = Some(DialogKind::Error { message });
            }
        }
    }

    /// 設定ダイアログを開く (現在値からドラフトを作る)
    pub fn open_settings_dialog(&mut self) {
        self.dialog = Some(DialogKind::Settings(SettingsDraft {
            interval_input: self.interval_ms.to_string(),
            top_n_input: self.top_n.to_string(),
            language: self.language(),
            focused_field: 0,
        }));
    }

    fn settings_draft_mut(&mut self) -> Option<&mut SettingsDraft> {
        match &mut self.dialog {
            Some(DialogKind::Settings(draft)) => Some(draft),
            _ => None,
        }
    }

    pub fn settings_focus_next(&mut self) {
        if let Some(draft) = self.settings_draft_mut() {
            draft.focus_next();
        }
    }

    pub fn settings_focus_prev(&mut self) {
        if let Some(draft) = self.settings_draft_mut() {
            draft.focus_prev();
        }
    }

    pub fn settings_input_char(&mut self, c: char) {
        if let Some(draft) = self.settings_draft_mut() {
            draft.input_char(c);
        }
    }

    pub fn settings_backspace(&mut self) {
        if let Some(draft) = self.settings_draft_mut() {
            draft.backspace();
        }
    }

    pub fn settings_toggle_language(&mut self) {
        if let Some(draft) = self.settings_draft_mut() {
            draft.toggle_language();
        }
    }

    /// 設定ダイアログで Enter: ドラフトを適用して保存
    pub fn confirm_settings_dialog(&mut self) {
        let Some(DialogKind::Settings(draft)) = self.dialog.take() else {
            return;
        };

        self.interval_ms = draft
            .interval_input
            .parse()
            .unwrap_or(Self::DEFAULT_INTERVAL_MS)
            .clamp(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS);
        self.top_n = draft
            .top_n_input
            .parse()
            .unwrap_or(Self::DEFAULT_TOP_N)
            .clamp(Self::MIN_TOP_N, Self::MAX_TOP_N);
        self.set_language(draft.language);

        let _ = self.save_persisted_state();
        // 新しい top_n をすぐ反映する
        self.sample();
    }

    /// ヘルプダイアログのスクロール
    pub fn help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset += 1;
        }
    }

    pub fn help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    // ---------------------------------------------------------------
    // トースト
    // ---------------------------------------------------------------

    pub fn toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(text, _)| text.as_str())
    }

    // ---------------------------------------------------------------
    // 設定の永続化
    // ---------------------------------------------------------------

    fn state_store_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.state_store_override {
            return Some(path.clone());
        }
        if let Ok(custom) = env::var("TASKLITE_SETTINGS_FILE") {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        env::var_os("HOME")
            .map(PathBuf::from)
            .map(|home| home.join(".tasklite").join("settings.toml"))
    }

    fn encode_app_state(&self) -> std::result::Result<String, toml::ser::Error> {
        let payload = PersistedAppState {
            version: Self::SETTINGS_VERSION,
            theme: self.theme_manager.current_name().to_string(),
            settings: PersistedSettings {
                interval_ms: self.interval_ms,
                top_n: self.top_n,
                language: self.language().code().to_string(),
            },
        };
        toml::to_string_pretty(&payload)
    }

    fn decode_app_state(data: &str) -> Option<PersistedAppState> {
        let parsed: PersistedAppState = toml::from_str(data).ok()?;
        if parsed.version != Self::SETTINGS_VERSION {
            return None;
        }
        if parsed.theme.trim().is_empty() {
            return None;
        }
        Some(parsed)
    }

    fn save_persisted_state(&self) -> std::io::Result<()> {
        let Some(path) = self.state_store_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = self
            .encode_app_state()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, data)
    }

    fn load_persisted_state(&mut self) {
        let Some(path) = self.state_store_path() else {
            return;
        };
        let Ok(data) = fs::read_to_string(path) else {
            return;
        };
        let Some(state) = Self::decode_app_state(&data) else {
            return;
        };

        self.interval_ms = state
            .settings
            .interval_ms
            .clamp(Self::MIN_INTERVAL_MS, Self::MAX_INTERVAL_MS);
        self.top_n = state
            .settings
            .top_n
            .clamp(Self::MIN_TOP_N, Self::MAX_TOP_N);
        self.set_language(Language::from_code(&state.settings.language));
        let _ = self.theme_manager.switch_theme(&state.theme);
    }
}
