mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use core::actions::{find_action, footer_commands, Action};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use ui::{
    ActiveTab, Dialog, DialogKind, Footer, LayoutMode, ProcessTable, ResourcePanel, SearchBar,
    TabBar, WarningScreen,
};
use utils::error::Result;
use utils::formatter::format_clock;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new()?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // レイアウト更新
            app.layout.update(size, app.is_search_visible());

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    // 警告画面表示
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => {
                    // ページ移動とスクロール追従のために 1 画面の行数を知らせる
                    let body_height = app.layout.areas().body.height;
                    app.set_visible_rows(ProcessTable::visible_rows(body_height));
                    render_main_ui(f, app);
                }
            }
        })?;

        // 次のサンプリングを逃さない程度のタイムアウトでイベントを待つ
        let poll_timeout = Duration::from_millis(100).min(app.interval());
        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.is_dialog_active() {
                    // ダイアログモードのキー処理
                    handle_dialog_keys(app, key.modifiers, key.code);
                } else if app.is_search_active() {
                    // 検索入力モードのキー処理
                    handle_search_keys(app, key.modifiers, key.code);
                } else {
                    // 通常モードのキー処理
                    handle_normal_keys(app, key.modifiers, key.code);
                }
            }
        }

        // 更新間隔が経過していれば再サンプリング
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 通常モードのキー処理 (アクションレジストリ参照)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 検索入力モードのキー処理
fn handle_search_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 確定 (パターンを保持して入力モードだけ抜ける)
        (_, KeyCode::Enter) => app.finish_search(true),
        // 取り消し (パターンも破棄)
        (_, KeyCode::Esc) => app.finish_search(false),
        (_, KeyCode::Backspace) => app.search_backspace(),
        // 入力中でも選択は動かせる
        (_, KeyCode::Up) => app.execute_action(Action::MoveUp),
        (_, KeyCode::Down) => app.execute_action(Action::MoveDown),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.search_input_char(c),
        _ => {}
    }
}

/// ダイアログモードのキー処理
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let dialog_kind = match &app.dialog {
        Some(kind) => kind.clone(),
        None => return,
    };

    match dialog_kind {
        DialogKind::KillConfirm { .. } => handle_kill_confirm_keys(app, modifiers, code),
        DialogKind::Error { .. } => handle_message_dialog_keys(app, modifiers, code),
        DialogKind::Settings(_) => handle_settings_dialog_keys(app, modifiers, code),
        DialogKind::Help { .. } => handle_help_dialog_keys(app, modifiers, code),
    }
}

/// 終了確認ダイアログのキー処理
fn handle_kill_confirm_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // ボタン切り替え
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => {
            app.kill_dialog_toggle_button();
        }
        // 選択中のボタンで確定
        (_, KeyCode::Enter) => app.confirm_kill_dialog(),
        // 取り消し
        (_, KeyCode::Esc) => app.close_dialog(),
        _ => {}
    }
}

/// メッセージ/エラーダイアログのキー処理
fn handle_message_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// 設定ダイアログのキー処理
fn handle_settings_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        // 適用して保存
        (_, KeyCode::Enter) => app.confirm_settings_dialog(),
        // 破棄
        (_, KeyCode::Esc) => app.close_dialog(),
        // フィールド移動
        (KeyModifiers::NONE, KeyCode::Tab) | (_, KeyCode::Down) => app.settings_focus_next(),
        (KeyModifiers::SHIFT, KeyCode::BackTab) | (_, KeyCode::Up) => app.settings_focus_prev(),
        // 言語切り替え
        (_, KeyCode::Left) | (_, KeyCode::Right) => app.settings_toggle_language(),
        // 数値入力
        (KeyModifiers::NONE, KeyCode::Char(c)) => app.settings_input_char(c),
        (_, KeyCode::Backspace) => app.settings_backspace(),
        _ => {}
    }
}

/// ヘルプダイアログのキー処理
fn handle_help_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_dialog();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_up();
        }
        _ => {}
    }
}

/// メイン UI 描画
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas().clone();
    let theme = app.theme_manager.current();
    let i18n = app.i18n();

    // タブバー
    let clock = app
        .last_sample_time()
        .map(format_clock)
        .unwrap_or_default();
    let tab_bar = TabBar::new()
        .title(i18n.tr("title"))
        .tabs(vec![i18n.tr("tabs.processes"), i18n.tr("tabs.resources")])
        .active(app.layout.active_tab().index())
        .clock(&clock)
        .language(app.language().display_name())
        .theme(theme);
    f.render_widget(tab_bar, areas.tab_bar);

    // 検索行 (表示中のときのみ高さ > 0)
    if areas.search_bar.height > 0 {
        let search_bar = SearchBar::new(&app.process_tab.search)
            .active(app.is_search_active())
            .i18n(i18n)
            .theme(theme);
        f.render_widget(search_bar, areas.search_bar);
    }

    // 本体
    match app.layout.active_tab() {
        ActiveTab::Processes => {
            let visible = app.visible_processes();
            let table = ProcessTable::new(&visible)
                .selected_index(app.process_tab.selected_index)
                .scroll_offset(app.process_tab.scroll_offset)
                .i18n(i18n)
                .theme(theme);
            f.render_widget(table, areas.body);
        }
        ActiveTab::Resources => {
            let panel = ResourcePanel::new(app.stats)
                .cpu_history(app.history.cpu())
                .memory_history(app.history.memory())
                .i18n(i18n)
                .theme(theme);
            f.render_widget(panel, areas.body);
        }
    }

    // フッター
    let footer = Footer::new()
        .commands(footer_commands(i18n))
        .toast(app.toast_text())
        .theme(theme);
    f.render_widget(footer, areas.footer);

    // ダイアログは最前面
    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).i18n(i18n).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
