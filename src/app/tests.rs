use super::*;
use crate::ui::LayoutMode;
use ratatui::layout::Rect;

fn make_test_app() -> App {
    App::new_for_test()
}

fn inject_processes(app: &mut App, entries: &[(u32, &str, f32)]) {
    app.processes = entries
        .iter()
        .map(|(pid, name, cpu)| ProcessInfo {
            pid: *pid,
            name: name.to_string(),
            cpu_usage: *cpu,
            memory_mb: 64.0,
        })
        .collect();
}

/// サンプリングの基本検査: top_n 件以下、CPU 降順
#[test]
fn test_sample_respects_top_n() {
    let mut app = make_test_app();
    app.top_n = 10;
    app.sample();

    assert!(app.processes.len() <= 10);
    for pair in app.processes.windows(2) {
        assert!(pair[0].cpu_usage >= pair[1].cpu_usage);
    }
    assert!(app.stats.memory_total_mb > 0.0);
    assert_eq!(app.history.len(), 1);
}

#[test]
fn test_visible_processes_filtered_by_search() {
    let mut app = make_test_app();
    inject_processes(
        &mut app,
        &[(1, "firefox", 5.0), (2, "chrome", 3.0), (3, "bash", 1.0)],
    );

    assert_eq!(app.visible_processes().len(), 3);

    app.process_tab.search = "fire".to_string();
    let visible = app.visible_processes();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "firefox");
}

#[test]
fn test_selected_process_follows_filter() {
    let mut app = make_test_app();
    inject_processes(
        &mut app,
        &[(1, "firefox", 5.0), (2, "chrome", 3.0), (3, "bash", 1.0)],
    );

    app.execute_action(Action::MoveDown);
    assert_eq!(app.selected_process().unwrap().name, "chrome");

    // フィルタで行数が減ったら選択位置が補正される
    app.process_tab.search = "bash".to_string();
    app.process_tab.clamp_selection(app.visible_processes().len());
    assert_eq!(app.selected_process().unwrap().name, "bash");
}

#[test]
fn test_navigation_actions() {
    let mut app = make_test_app();
    inject_processes(
        &mut app,
        &[(1, "a", 4.0), (2, "b", 3.0), (3, "c", 2.0), (4, "d", 1.0)],
    );

    app.execute_action(Action::GoToBottom);
    assert_eq!(app.process_tab.selected_index, 3);
    app.execute_action(Action::MoveUp);
    assert_eq!(app.process_tab.selected_index, 2);
    app.execute_action(Action::GoToTop);
    assert_eq!(app.process_tab.selected_index, 0);
    // 先頭からはそれ以上動かない
    app.execute_action(Action::MoveUp);
    assert_eq!(app.process_tab.selected_index, 0);
}

#[test]
fn test_switch_tab_action() {
    let mut app = make_test_app();
    assert_eq!(app.layout.active_tab(), ActiveTab::Processes);
    app.execute_action(Action::SwitchTab);
    assert_eq!(app.layout.active_tab(), ActiveTab::Resources);
}

#[test]
fn test_search_flow() {
    let mut app = make_test_app();
    inject_processes(&mut app, &[(1, "firefox", 5.0), (2, "chrome", 3.0)]);

    app.execute_action(Action::StartSearch);
    assert!(app.is_search_active());
    assert!(app.is_search_visible());

    app.search_input_char('c');
    app.search_input_char('h');
    assert_eq!(app.visible_processes().len(), 1);

    // Enter はパターンを保持して入力モードだけ抜ける
    app.finish_search(true);
    assert!(!app.is_search_active());
    assert!(app.is_search_visible());
    assert_eq!(app.process_tab.search, "ch");

    // Esc はパターンも破棄
    app.start_search();
    app.finish_search(false);
    assert!(!app.is_search_visible());
    assert!(app.process_tab.search.is_empty());
}

#[test]
fn test_search_from_resources_tab_switches_back() {
    let mut app = make_test_app();
    app.execute_action(Action::SwitchTab);
    assert_eq!(app.layout.active_tab(), ActiveTab::Resources);

    app.execute_action(Action::StartSearch);
    assert_eq!(app.layout.active_tab(), ActiveTab::Processes);
    assert!(app.is_search_active());
}

/// 終了確認ダイアログ: 開く → キャンセル
#[test]
fn test_kill_dialog_cancel() {
    let mut app = make_test_app();
    inject_processes(&mut app, &[(1234, "chrome.exe", 5.0)]);

    app.execute_action(Action::KillSelected);
    match &app.dialog {
        Some(DialogKind::KillConfirm {
            pid,
            name,
            selected_button,
        }) => {
            assert_eq!(*pid, 1234);
            assert_eq!(name, "chrome.exe");
            assert_eq!(*selected_button, 0);
        }
        other => panic!("unexpected dialog: {:?}", other),
    }

    // Cancel ボタンに切り替えて Enter
    app.kill_dialog_toggle_button();
    app.confirm_kill_dialog();
    assert!(app.dialog.is_none());
    assert!(app.toast_message.is_none());
}

/// 終了確認ダイアログ: 存在しない PID ならエラーダイアログ
#[test]
fn test_kill_nonexistent_process_shows_error_dialog() {
    let mut app = make_test_app();
    inject_processes(&mut app, &[(4_294_000_000, "ghost", 0.0)]);

    app.execute_action(Action::KillSelected);
    app.confirm_kill_dialog();

    match &app.dialog {
        Some(DialogKind::Error { message }) => {
            assert_eq!(message, "Failed to kill process: Process not found");
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
}

/// エラーメッセージも言語設定に従う
#[test]
fn test_kill_error_message_localized() {
    let mut app = make_test_app();
    app.set_language(Language::Japanese);
    inject_processes(&mut app, &[(4_294_000_000, "ghost", 0.0)]);

    app.execute_action(Action::KillSelected);
    app.confirm_kill_dialog();

    match &app.dialog {
        Some(DialogKind::Error { message }) => {
            assert_eq!(
                message,
                "プロセスの終了に失敗しました: Process not found"
            );
        }
        other => panic!("unexpected dialog: {:?}", other),
    }
}

#[test]
fn test_kill_dialog_requires_selection() {
    let mut app = make_test_app();
    // プロセスなしでは開かない
    app.execute_action(Action::KillSelected);
    assert!(app.dialog.is_none());
}

#[test]
fn test_settings_dialog_apply() {
    let mut app = make_test_app();
    app.execute_action(Action::OpenSettings);

    match &app.dialog {
        Some(DialogKind::Settings(draft)) => {
            assert_eq!(draft.interval_input, "1000");
            assert_eq!(draft.top_n_input, "30");
            assert_eq!(draft.language, Language::English);
        }
        other => panic!("unexpected dialog: {:?}", other),
    }

    // 更新間隔を 2000ms に、言語を日本語に変更
    app.settings_backspace();
    app.settings_backspace();
    app.settings_backspace();
    app.settings_backspace();
    app.settings_input_char('2');
    app.settings_input_char('0');
    app.settings_input_char('0');
    app.settings_input_char('0');
    app.settings_focus_next();
    app.settings_focus_next();
    app.settings_toggle_language();
    app.confirm_settings_dialog();

    assert!(app.dialog.is_none());
    assert_eq!(app.interval_ms, 2000);
    assert_eq!(app.language(), Language::Japanese);
    assert_eq!(app.i18n().tr("tabs.processes"), "プロセス");
}

#[test]
fn test_settings_values_clamped() {
    let mut app = make_test_app();
    app.open_settings_dialog();

    if let Some(DialogKind::Settings(draft)) = &mut app.dialog {
        draft.interval_input = "50".to_string();
        draft.top_n_input = "99999".to_string();
    }
    app.confirm_settings_dialog();

    assert_eq!(app.interval_ms, 200);
    assert_eq!(app.top_n, 100);
}

#[test]
fn test_settings_invalid_input_falls_back_to_default() {
    let mut app = make_test_app();
    app.open_settings_dialog();

    if let Some(DialogKind::Settings(draft)) = &mut app.dialog {
        draft.interval_input = String::new();
        draft.top_n_input = String::new();
    }
    app.confirm_settings_dialog();

    assert_eq!(app.interval_ms, 1000);
    assert_eq!(app.top_n, 30);
}

#[test]
fn test_help_dialog_scroll() {
    let mut app = make_test_app();
    app.execute_action(Action::ShowHelp);

    app.help_scroll_down();
    app.help_scroll_down();
    match &app.dialog {
        Some(DialogKind::Help { scroll_offset }) => assert_eq!(*scroll_offset, 2),
        other => panic!("unexpected dialog: {:?}", other),
    }

    app.help_scroll_up();
    app.help_scroll_up();
    app.help_scroll_up();
    match &app.dialog {
        Some(DialogKind::Help { scroll_offset }) => assert_eq!(*scroll_offset, 0),
        other => panic!("unexpected dialog: {:?}", other),
    }
}

#[test]
fn test_quit_sets_flag() {
    let mut app = make_test_app();
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}

/// 設定の保存と復元のラウンドトリップ
#[test]
fn test_settings_persistence_round_trip() {
    let mut app = make_test_app();
    app.interval_ms = 2500;
    app.top_n = 42;
    app.set_language(Language::Japanese);
    let _ = app.theme_manager.switch_theme("light");
    app.save_persisted_state().unwrap();

    let mut loaded = make_test_app();
    loaded.state_store_override = app.state_store_override.clone();
    loaded.load_persisted_state();

    assert_eq!(loaded.interval_ms, 2500);
    assert_eq!(loaded.top_n, 42);
    assert_eq!(loaded.language(), Language::Japanese);
    assert_eq!(loaded.theme_manager.current_name(), "light");
}

#[test]
fn test_decode_rejects_wrong_version() {
    let data = r#"
version = 999
theme = "dark"

[settings]
interval_ms = 1000
top_n = 30
language = "en"
"#;
    assert!(App::decode_app_state(data).is_none());
}

#[test]
fn test_decode_rejects_empty_theme() {
    let data = r#"
version = 1
theme = ""

[settings]
interval_ms = 1000
top_n = 30
language = "en"
"#;
    assert!(App::decode_app_state(data).is_none());
}

#[test]
fn test_decode_rejects_garbage() {
    assert!(App::decode_app_state("not toml at all {{{").is_none());
}

#[test]
fn test_load_clamps_out_of_range_values() {
    let mut app = make_test_app();
    let path = app.state_store_path().unwrap();
    let data = r#"
version = 1
theme = "dark"

[settings]
interval_ms = 99999
top_n = 1
language = "ja"
"#;
    std::fs::write(&path, data).unwrap();
    app.load_persisted_state();

    assert_eq!(app.interval_ms, 10_000);
    assert_eq!(app.top_n, 5);
    assert_eq!(app.language(), Language::Japanese);
}

#[test]
fn test_toast_lifecycle() {
    let mut app = make_test_app();
    assert!(app.toast_text().is_none());
    app.toast("done".to_string());
    assert_eq!(app.toast_text(), Some("done"));
    // 表示直後の tick では消えない
    app.tick();
    assert!(app.toast_text().is_some());
}

#[test]
fn test_layout_too_small_detection() {
    let mut app = make_test_app();
    app.layout.update(Rect::new(0, 0, 30, 8), false);
    assert_eq!(app.layout.mode(), LayoutMode::TooSmall);
    app.layout.update(Rect::new(0, 0, 100, 30), false);
    assert_eq!(app.layout.mode(), LayoutMode::Normal);
}
