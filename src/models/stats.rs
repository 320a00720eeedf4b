#![allow(dead_code)]

/// システム全体のリソース統計
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SystemStats {
    /// 全体 CPU 使用率 (%)
    pub cpu_usage: f32,
    /// 使用中メモリ (MiB)
    pub memory_used_mb: f64,
    /// 合計メモリ (MiB)
    pub memory_total_mb: f64,
    /// メモリ使用率 (%)
    pub memory_usage_percent: f32,
}

/// リソースタブのスパークライン用履歴
///
/// 直近 capacity 件の CPU・メモリ使用率 (%) を保持する固定長リング。
/// 容量を超えると最古のサンプルを捨てる。
#[derive(Debug, Clone)]
pub struct StatsHistory {
    cpu: Vec<u64>,
    memory: Vec<u64>,
    capacity: usize,
}

impl StatsHistory {
    /// 既定の履歴長 (サンプル数)
    pub const DEFAULT_CAPACITY: usize = 60;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cpu: Vec::with_capacity(capacity),
            memory: Vec::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    /// 統計サンプルを 1 件追加
    ///
    /// Sparkline が u64 を要求するのでパーセント値を丸めて格納する。
    pub fn push(&mut self, stats: &SystemStats) {
        push_capped(&mut self.cpu, stats.cpu_usage.round() as u64, self.capacity);
        push_capped(
            &mut self.memory,
            stats.memory_usage_percent.round() as u64,
            self.capacity,
        );
    }

    pub fn cpu(&self) -> &[u64] {
        &self.cpu
    }

    pub fn memory(&self) -> &[u64] {
        &self.memory
    }

    pub fn len(&self) -> usize {
        self.cpu.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty()
    }
}

impl Default for StatsHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn push_capped(buf: &mut Vec<u64>, value: u64, capacity: usize) {
    if buf.len() == capacity {
        buf.remove(0);
    }
    buf.push(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(cpu: f32, mem_percent: f32) -> SystemStats {
        SystemStats {
            cpu_usage: cpu,
            memory_used_mb: 0.0,
            memory_total_mb: 0.0,
            memory_usage_percent: mem_percent,
        }
    }

    #[test]
    fn test_history_starts_empty() {
        let history = StatsHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_history_push() {
        let mut history = StatsHistory::new();
        history.push(&stats(25.4, 50.6));
        assert_eq!(history.cpu(), &[25]);
        assert_eq!(history.memory(), &[51]);
    }

    #[test]
    fn test_history_drops_oldest_at_capacity() {
        let mut history = StatsHistory::with_capacity(3);
        for i in 0..5 {
            history.push(&stats(i as f32, 0.0));
        }
        assert_eq!(history.len(), 3);
        // 最古の 0, 1 が押し出される
        assert_eq!(history.cpu(), &[2, 3, 4]);
    }

    #[test]
    fn test_history_capacity_at_least_one() {
        let mut history = StatsHistory::with_capacity(0);
        history.push(&stats(1.0, 1.0));
        history.push(&stats(2.0, 2.0));
        assert_eq!(history.cpu(), &[2]);
    }
}
