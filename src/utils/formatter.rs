// Formatters - メモリ量、パーセント、時刻の表示整形

use chrono::{DateTime, Local};
use std::time::SystemTime;
use unicode_width::UnicodeWidthChar;

/// メモリ量 (MiB) を読みやすい形式にフォーマット
///
/// 1024 MiB 以上は GB 表記に切り替える
///
/// # Examples
/// ```
/// use tasklite::utils::formatter::format_memory;
///
/// assert_eq!(format_memory(0.0), "0.0 MB");
/// assert_eq!(format_memory(512.25), "512.3 MB");
/// assert_eq!(format_memory(2048.0), "2.00 GB");
/// ```
pub fn format_memory(mb: f64) -> String {
    const GB: f64 = 1024.0;

    if mb >= GB {
        format!("{:.2} GB", mb / GB)
    } else {
        format!("{:.1} MB", mb)
    }
}

/// 使用率を小数 1 桁のパーセント表記にフォーマット
///
/// # Examples
/// ```
/// use tasklite::utils::formatter::format_percent;
///
/// assert_eq!(format_percent(0.0), "0.0%");
/// assert_eq!(format_percent(42.35), "42.3%");
/// assert_eq!(format_percent(100.0), "100.0%");
/// ```
pub fn format_percent(value: f32) -> String {
    format!("{:.1}%", value)
}

/// システム時刻を "HH:MM:SS" 形式にフォーマット (最終更新時刻の表示用)
///
/// # Examples
/// ```
/// use std::time::SystemTime;
/// use tasklite::utils::formatter::format_clock;
///
/// let formatted = format_clock(SystemTime::now());
/// // 常に "14:30:05" 形式 (8文字)
/// assert_eq!(formatted.len(), 8);
/// ```
pub fn format_clock(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%H:%M:%S").to_string()
}

/// 文字列を表示幅 max_width 以内に切り詰める
///
/// CJK 文字は 2 セル幅として数える。切り詰めた場合は末尾に "…" を付ける。
///
/// # Examples
/// ```
/// use tasklite::utils::formatter::truncate_to_width;
///
/// assert_eq!(truncate_to_width("firefox", 10), "firefox");
/// assert_eq!(truncate_to_width("verylongprocessname", 8), "verylon…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // "…" の 1 セル分を残して詰める
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw > max_width - 1 {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_memory_mb() {
        assert_eq!(format_memory(0.0), "0.0 MB");
        assert_eq!(format_memory(1.0), "1.0 MB");
        assert_eq!(format_memory(875.44), "875.4 MB");
        assert_eq!(format_memory(1023.9), "1023.9 MB");
    }

    #[test]
    fn test_format_memory_gb() {
        assert_eq!(format_memory(1024.0), "1.00 GB");
        assert_eq!(format_memory(2560.0), "2.50 GB");
        assert_eq!(format_memory(16384.0), "16.00 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(7.25), "7.2%");
        assert_eq!(format_percent(99.96), "100.0%");
    }

    #[test]
    fn test_format_clock() {
        let formatted = format_clock(SystemTime::now());
        // 常に "HH:MM:SS" 形式 (8文字)
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.matches(':').count(), 2);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("chrome", 10), "chrome");
        assert_eq!(truncate_to_width("chrome", 6), "chrome");
        assert_eq!(truncate_to_width("chromium-browser", 8), "chromiu…");
    }

    #[test]
    fn test_truncate_cjk() {
        // 全角文字は 2 セル幅
        assert_eq!(truncate_to_width("プロセス", 8), "プロセス");
        assert_eq!(truncate_to_width("プロセス", 6), "プロ…");
        assert_eq!(truncate_to_width("プロセス", 5), "プロ…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
