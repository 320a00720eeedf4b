#![allow(dead_code)]
// i18n - ローカライズ文字列カタログとドットキー解決
//
// すべての表示文字列は言語別の静的ツリーに格納し、
// "dialogs.killConfirm" のようなドット区切りキーで参照する。
// 解決に失敗した場合はキーをそのまま返す (UI は常に何かを描画できる)。

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Japanese,
}

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "ja" => Language::Japanese,
            _ => Language::English,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Japanese => "日本語",
        }
    }

    /// 言語切り替え (設定ダイアログの Left/Right 用)
    pub fn toggle(&mut self) {
        *self = match self {
            Language::English => Language::Japanese,
            Language::Japanese => Language::English,
        };
    }
}

/// リソースツリーのノード
///
/// 内部ノードは名前付きグループ、葉は表示文字列。
/// 葉の文字列は `{name}` 形式のプレースホルダを含むことがある。
#[derive(Debug)]
enum Node {
    Group(&'static [(&'static str, Node)]),
    Leaf(&'static str),
}

static EN: Node = Node::Group(&[
    ("title", Node::Leaf("TaskLite")),
    (
        "tabs",
        Node::Group(&[
            ("processes", Node::Leaf("Processes")),
            ("resources", Node::Leaf("Resources")),
        ]),
    ),
    (
        "processTable",
        Node::Group(&[
            ("pid", Node::Leaf("PID")),
            ("name", Node::Leaf("Process Name")),
            ("cpu", Node::Leaf("CPU%")),
            ("memory", Node::Leaf("Memory")),
            ("action", Node::Leaf("Action")),
            ("kill", Node::Leaf("Kill")),
            ("search", Node::Leaf("Search processes...")),
        ]),
    ),
    (
        "resources",
        Node::Group(&[
            ("cpu", Node::Leaf("CPU Usage")),
            ("memory", Node::Leaf("Memory Usage")),
            ("used", Node::Leaf("Used")),
            ("total", Node::Leaf("Total")),
            ("history", Node::Leaf("History")),
        ]),
    ),
    (
        "settings",
        Node::Group(&[
            ("interval", Node::Leaf("Interval")),
            ("topN", Node::Leaf("Top N")),
            ("language", Node::Leaf("Language")),
            ("ms", Node::Leaf("ms")),
        ]),
    ),
    (
        "dialogs",
        Node::Group(&[
            (
                "killConfirm",
                Node::Leaf("Kill process \"{name}\" (PID: {pid})?"),
            ),
            ("killSuccess", Node::Leaf("Process terminated successfully")),
            ("killFailed", Node::Leaf("Failed to kill process: {error}")),
        ]),
    ),
    (
        "footer",
        Node::Group(&[
            ("f1", Node::Leaf("Help")),
            ("f2", Node::Leaf("Setup")),
            ("f3", Node::Leaf("Search")),
            ("f9", Node::Leaf("Kill")),
            ("f10", Node::Leaf("Quit")),
        ]),
    ),
]);

static JA: Node = Node::Group(&[
    ("title", Node::Leaf("TaskLite")),
    (
        "tabs",
        Node::Group(&[
            ("processes", Node::Leaf("プロセス")),
            ("resources", Node::Leaf("リソース")),
        ]),
    ),
    (
        "processTable",
        Node::Group(&[
            ("pid", Node::Leaf("PID")),
            ("name", Node::Leaf("プロセス名")),
            ("cpu", Node::Leaf("CPU%")),
            ("memory", Node::Leaf("メモリ")),
            ("action", Node::Leaf("操作")),
            ("kill", Node::Leaf("終了")),
            ("search", Node::Leaf("プロセスを検索...")),
        ]),
    ),
    (
        "resources",
        Node::Group(&[
            ("cpu", Node::Leaf("CPU使用率")),
            ("memory", Node::Leaf("メモリ使用率")),
            ("used", Node::Leaf("使用中")),
            ("total", Node::Leaf("合計")),
            ("history", Node::Leaf("履歴")),
        ]),
    ),
    (
        "settings",
        Node::Group(&[
            ("interval", Node::Leaf("更新間隔")),
            ("topN", Node::Leaf("表示数")),
            ("language", Node::Leaf("言語")),
            ("ms", Node::Leaf("ミリ秒")),
        ]),
    ),
    (
        "dialogs",
        Node::Group(&[
            (
                "killConfirm",
                Node::Leaf("プロセス「{name}」(PID: {pid})を終了しますか？"),
            ),
            ("killSuccess", Node::Leaf("プロセスを終了しました")),
            (
                "killFailed",
                Node::Leaf("プロセスの終了に失敗しました: {error}"),
            ),
        ]),
    ),
    (
        "footer",
        Node::Group(&[
            ("f1", Node::Leaf("ヘルプ")),
            ("f2", Node::Leaf("設定")),
            ("f3", Node::Leaf("検索")),
            ("f9", Node::Leaf("終了")),
            ("f10", Node::Leaf("終了")),
        ]),
    ),
]);

fn tree(language: Language) -> &'static Node {
    match language {
        Language::English => &EN,
        Language::Japanese => &JA,
    }
}

/// ドットキーでツリーを降りて葉のテンプレートを取り出す
///
/// 途中のセグメントが見つからない、葉に対してさらに降りようとした、
/// 終端がグループだった、のいずれも None。
fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let mut node = tree(language);
    for segment in key.split('.') {
        match node {
            Node::Group(children) => {
                node = &children.iter().find(|(name, _)| *name == segment)?.1;
            }
            Node::Leaf(_) => return None,
        }
    }
    match node {
        Node::Leaf(template) => Some(template),
        Node::Group(_) => None,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `{identifier}` を左から右へ 1 パスで置換する
///
/// identifier は単語構成文字 (英数字と _) のみ。対応する引数がなければ
/// 空文字列に置換する。置換後の値を再走査することはない。
/// `{}` や閉じられていない `{`、単語構成文字以外を含む中括弧は
/// そのまま出力する。
fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            out.push(ch);
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if is_word_char(c) {
                token.push(c);
                chars.next();
            } else if c == '}' {
                closed = true;
                chars.next();
                break;
            } else {
                break;
            }
        }

        if closed && !token.is_empty() {
            if let Some((_, value)) = args.iter().find(|(name, _)| *name == token) {
                out.push_str(value);
            }
            // 引数がなければ空文字列 (何も出力しない)
        } else {
            out.push('{');
            out.push_str(&token);
            if closed {
                out.push('}');
            }
        }
    }

    out
}

/// ローカライズ文字列リゾルバ
///
/// 言語を 1 つ保持し、ドットキーを表示文字列に解決する。
/// カタログは不変な静的データなので Copy で持ち回れる。
#[derive(Debug, Clone, Copy, Default)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    /// キーを解決してテンプレートをそのまま返す
    ///
    /// プレースホルダは展開しない。解決に失敗した場合はキー自身を返す。
    pub fn tr<'a>(self, key: &'a str) -> &'a str {
        lookup(self.language, key).unwrap_or(key)
    }

    /// キーを解決してプレースホルダを引数で置換する
    ///
    /// 解決に失敗した場合はキー自身を返す (置換は行わない)。
    pub fn fmt(self, key: &str, args: &[(&str, String)]) -> String {
        match lookup(self.language, key) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Japanese.code(), "ja");
        assert_eq!(Language::from_code("ja"), Language::Japanese);
        assert_eq!(Language::from_code("en"), Language::English);
        // 未知のコードは English にフォールバック
        assert_eq!(Language::from_code("ko"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
    }

    #[test]
    fn test_language_toggle() {
        let mut lang = Language::English;
        lang.toggle();
        assert_eq!(lang, Language::Japanese);
        lang.toggle();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_tr_resolves_leaf() {
        assert_eq!(I18n::new(Language::English).tr("tabs.processes"), "Processes");
        assert_eq!(I18n::new(Language::Japanese).tr("tabs.processes"), "プロセス");
        assert_eq!(I18n::new(Language::English).tr("title"), "TaskLite");
    }

    #[test]
    fn test_tr_footer_keys() {
        assert_eq!(I18n::new(Language::English).tr("footer.f9"), "Kill");
        assert_eq!(I18n::new(Language::Japanese).tr("footer.f9"), "終了");
        assert_eq!(I18n::new(Language::English).tr("footer.f10"), "Quit");
    }

    #[test]
    fn test_tr_missing_key_returns_key() {
        let i18n = I18n::new(Language::English);
        assert_eq!(i18n.tr("nonexistent.path"), "nonexistent.path");
        assert_eq!(i18n.tr("tabs.nonexistent"), "tabs.nonexistent");
        assert_eq!(i18n.tr(""), "");
    }

    #[test]
    fn test_tr_group_is_not_a_leaf() {
        // グループで終わるキーも解決失敗扱い
        assert_eq!(I18n::new(Language::English).tr("tabs"), "tabs");
        assert_eq!(I18n::new(Language::English).tr("dialogs"), "dialogs");
    }

    #[test]
    fn test_tr_descending_past_leaf_fails() {
        assert_eq!(I18n::new(Language::English).tr("title.extra"), "title.extra");
    }

    #[test]
    fn test_tr_keeps_placeholders_verbatim() {
        // 引数なしの解決ではプレースホルダを展開しない
        assert_eq!(
            I18n::new(Language::English).tr("dialogs.killConfirm"),
            "Kill process \"{name}\" (PID: {pid})?"
        );
    }

    #[test]
    fn test_fmt_kill_confirm() {
        let i18n = I18n::new(Language::English);
        let result = i18n.fmt(
            "dialogs.killConfirm",
            &[
                ("name", "chrome.exe".to_string()),
                ("pid", 1234.to_string()),
            ],
        );
        assert_eq!(result, "Kill process \"chrome.exe\" (PID: 1234)?");
    }

    #[test]
    fn test_fmt_kill_confirm_japanese() {
        let i18n = I18n::new(Language::Japanese);
        let result = i18n.fmt(
            "dialogs.killConfirm",
            &[("name", "firefox".to_string()), ("pid", 42.to_string())],
        );
        assert_eq!(result, "プロセス「firefox」(PID: 42)を終了しますか？");
    }

    #[test]
    fn test_fmt_missing_arg_becomes_empty() {
        let i18n = I18n::new(Language::English);
        let result = i18n.fmt("dialogs.killConfirm", &[]);
        assert_eq!(result, "Kill process \"\" (PID: )?");
    }

    #[test]
    fn test_fmt_missing_key_returns_key() {
        let i18n = I18n::new(Language::English);
        assert_eq!(
            i18n.fmt("nonexistent.path", &[("name", "x".to_string())]),
            "nonexistent.path"
        );
    }

    #[test]
    fn test_fmt_is_deterministic() {
        let i18n = I18n::new(Language::English);
        let args = [("error", "Process not found".to_string())];
        let first = i18n.fmt("dialogs.killFailed", &args);
        let second = i18n.fmt("dialogs.killFailed", &args);
        assert_eq!(first, second);
        assert_eq!(first, "Failed to kill process: Process not found");
    }

    #[test]
    fn test_interpolate_is_single_pass() {
        // 置換後の値にプレースホルダが含まれても再展開しない
        let result = interpolate(
            "a={a} b={b}",
            &[("a", "{b}".to_string()), ("b", "X".to_string())],
        );
        assert_eq!(result, "a={b} b=X");
    }

    #[test]
    fn test_interpolate_repeated_tokens() {
        let result = interpolate("{x} and {x}", &[("x", "A".to_string())]);
        assert_eq!(result, "A and A");
    }

    #[test]
    fn test_interpolate_malformed_braces() {
        // 閉じられていない中括弧
        assert_eq!(interpolate("Hello {world", &[]), "Hello {world");
        // 空の中括弧
        assert_eq!(interpolate("Hello {}", &[]), "Hello {}");
        // 単語構成文字以外を含む
        assert_eq!(interpolate("{a b}", &[("a", "X".to_string())]), "{a b}");
        // 中括弧なし
        assert_eq!(interpolate("Hello World", &[]), "Hello World");
        // 二重中括弧の内側だけ置換される
        assert_eq!(interpolate("{{x}}", &[("x", "A".to_string())]), "{A}");
    }

    /// ツリーからすべてのドットキーを収集
    fn collect_keys(node: &'static Node, prefix: &str, out: &mut Vec<String>) {
        match node {
            Node::Leaf(_) => out.push(prefix.to_string()),
            Node::Group(children) => {
                for (name, child) in children.iter() {
                    let key = if prefix.is_empty() {
                        (*name).to_string()
                    } else {
                        format!("{}.{}", prefix, name)
                    };
                    collect_keys(child, &key, out);
                }
            }
        }
    }

    #[test]
    fn test_catalog_parity_between_languages() {
        // 片方の言語にだけ存在するキーは翻訳漏れ
        let mut en_keys = Vec::new();
        let mut ja_keys = Vec::new();
        collect_keys(&EN, "", &mut en_keys);
        collect_keys(&JA, "", &mut ja_keys);
        en_keys.sort();
        ja_keys.sort();
        assert_eq!(en_keys, ja_keys);
        assert!(!en_keys.is_empty());
    }

    #[test]
    fn test_every_key_resolves_to_stored_template() {
        // 定義済みキーはすべて葉のテンプレートをそのまま返す
        let mut keys = Vec::new();
        collect_keys(&EN, "", &mut keys);
        for key in &keys {
            let resolved = I18n::new(Language::English).tr(key);
            assert_ne!(resolved, key.as_str(), "key should resolve: {}", key);
        }
    }
}
