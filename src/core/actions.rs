#![allow(dead_code)]
//! アクションシステム — 単一の真実の源 (Single Source of Truth)
//!
//! すべてのキーバインド、フッターの項目、ヘルプ内容は
//! このモジュールのレジストリを参照します。

use crate::ui::components::footer::CommandItem;
use crate::ui::{I18n, Language};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// すべてのアクションの列挙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    SwitchTab,
    // Process
    StartSearch,
    KillSelected,
    // System
    ShowHelp,
    OpenSettings,
    Refresh,
    Quit,
}

/// アクションカテゴリ (ヘルプ表示のグループ分け)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Process,
    System,
}

impl ActionCategory {
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::English, ActionCategory::Navigation) => "Navigation",
            (Language::Japanese, ActionCategory::Navigation) => "ナビゲーション",
            (Language::English, ActionCategory::Process) => "Process",
            (Language::Japanese, ActionCategory::Process) => "プロセス操作",
            (Language::English, ActionCategory::System) => "System",
            (Language::Japanese, ActionCategory::System) => "システム",
        }
    }
}

/// アクション定義 (メタデータ)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    /// ヘルプ表示のラベル (英語、日本語)
    pub label_en: &'static str,
    pub label_ja: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: &'static str,
}

/// キーバインド定義
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// すべてのアクションメタデータ
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label_en: "Move up / down",
        label_ja: "上下移動",
        category: ActionCategory::Navigation,
        shortcut_display: "Up/k, Down/j",
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label_en: "Page up / down",
        label_ja: "ページ移動",
        category: ActionCategory::Navigation,
        shortcut_display: "PgUp / PgDn",
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label_en: "Top / bottom",
        label_ja: "先頭 / 末尾",
        category: ActionCategory::Navigation,
        shortcut_display: "g/Home, G/End",
    },
    ActionDef {
        action: Action::SwitchTab,
        id: "switch_tab",
        label_en: "Switch tab",
        label_ja: "タブ切り替え",
        category: ActionCategory::Navigation,
        shortcut_display: "Tab",
    },
    // Process
    ActionDef {
        action: Action::StartSearch,
        id: "search",
        label_en: "Search processes",
        label_ja: "プロセス検索",
        category: ActionCategory::Process,
        shortcut_display: "F3, /",
    },
    ActionDef {
        action: Action::KillSelected,
        id: "kill",
        label_en: "Kill selected process",
        label_ja: "選択プロセスを終了",
        category: ActionCategory::Process,
        shortcut_display: "F9, Del",
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label_en: "Keyboard help",
        label_ja: "キー操作ヘルプ",
        category: ActionCategory::System,
        shortcut_display: "F1, ?",
    },
    ActionDef {
        action: Action::OpenSettings,
        id: "settings",
        label_en: "Settings",
        label_ja: "設定",
        category: ActionCategory::System,
        shortcut_display: "F2",
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        label_en: "Refresh now",
        label_ja: "今すぐ更新",
        category: ActionCategory::System,
        shortcut_display: "F5, Ctrl+R",
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label_en: "Quit",
        label_ja: "終了",
        category: ActionCategory::System,
        shortcut_display: "F10, q",
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // ナビゲーション
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::MoveDown,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::Char('g'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::GoToTop,
        },
        KeyBinding {
            code: KeyCode::End,
            modifiers: None,
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::Char('G'),
            modifiers: None,
            action: Action::GoToBottom,
        },
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::SwitchTab,
        },
        // プロセス操作
        KeyBinding {
            code: KeyCode::F(3),
            modifiers: None,
            action: Action::StartSearch,
        },
        KeyBinding {
            code: KeyCode::Char('/'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::StartSearch,
        },
        KeyBinding {
            code: KeyCode::F(9),
            modifiers: None,
            action: Action::KillSelected,
        },
        KeyBinding {
            code: KeyCode::Delete,
            modifiers: None,
            action: Action::KillSelected,
        },
        // システム
        KeyBinding {
            code: KeyCode::F(1),
            modifiers: None,
            action: Action::ShowHelp,
        },
        KeyBinding {
            code: KeyCode::Char('?'),
            modifiers: None,
            action: Action::ShowHelp,
        },
        KeyBinding {
            code: KeyCode::F(2),
            modifiers: None,
            action: Action::OpenSettings,
        },
        KeyBinding {
            code: KeyCode::F(5),
            modifiers: None,
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::Char('r'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Refresh,
        },
        KeyBinding {
            code: KeyCode::F(10),
            modifiers: None,
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// キーバインド一覧 (初回のみ構築)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// キー入力からアクションを引く
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

/// ヘルプダイアログの 1 行分
pub struct HelpEntry {
    pub keys: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
}

/// ヘルプダイアログに表示する行をレジストリから生成
pub fn help_entries(language: Language) -> Vec<HelpEntry> {
    ACTION_DEFS
        .iter()
        .map(|def| HelpEntry {
            keys: def.shortcut_display,
            label: match language {
                Language::English => def.label_en,
                Language::Japanese => def.label_ja,
            },
            category: def.category,
        })
        .collect()
}

/// フッターの F キー項目をカタログのラベルで生成
pub fn footer_commands(i18n: I18n) -> Vec<CommandItem> {
    vec![
        CommandItem::new("F1", i18n.tr("footer.f1")),
        CommandItem::new("F2", i18n.tr("footer.f2")),
        CommandItem::new("F3", i18n.tr("footer.f3")),
        CommandItem::new("F9", i18n.tr("footer.f9")),
        CommandItem::new("F10", i18n.tr("footer.f10")),
    ]
}
