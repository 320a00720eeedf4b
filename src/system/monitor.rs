// System monitor - sysinfo によるプロセス・リソースのサンプリング
//
// 取得はすべて同期呼び出し。呼び出し側 (メインループ) が更新間隔を制御する。

use crate::models::{ProcessInfo, SystemStats};
use crate::utils::error::{Result, TaskLiteError};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// システム情報のサンプラ
///
/// sysinfo::System を 1 つ抱え、必要な項目だけをリフレッシュする。
pub struct Monitor {
    system: System,
}

impl Monitor {
    pub fn new() -> Self {
        let mut system = System::new();
        // CPU 使用率は前回値との差分なので初回に一度読んでおく
        system.refresh_cpu_usage();
        system.refresh_memory();
        Self { system }
    }

    /// CPU 使用率の降順で上位 top_n 件のプロセスを返す
    pub fn processes(&mut self, top_n: usize) -> Vec<ProcessInfo> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::new().with_cpu().with_memory(),
        );

        let mut processes: Vec<ProcessInfo> = self
            .system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().into_owned(),
                cpu_usage: process.cpu_usage(),
                memory_mb: process.memory() as f64 / BYTES_PER_MIB,
            })
            .collect();

        // 同率の順序は問わないので unstable sort で十分
        processes.sort_unstable_by(|a, b| {
            b.cpu_usage
                .partial_cmp(&a.cpu_usage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        processes.truncate(top_n);
        processes
    }

    /// システム全体の CPU・メモリ統計を返す
    pub fn stats(&mut self) -> SystemStats {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let memory_total = self.system.total_memory() as f64 / BYTES_PER_MIB;
        let memory_used = self.system.used_memory() as f64 / BYTES_PER_MIB;
        let memory_percent = if memory_total > 0.0 {
            ((memory_used / memory_total) * 100.0) as f32
        } else {
            0.0
        };

        SystemStats {
            cpu_usage: self.system.global_cpu_usage(),
            memory_used_mb: memory_used,
            memory_total_mb: memory_total,
            memory_usage_percent: memory_percent,
        }
    }

    /// PID 指定でプロセスを終了する
    ///
    /// 見つからない場合と kill が拒否された場合はエラーメッセージを分ける。
    pub fn kill(&self, pid: u32) -> Result<()> {
        let target = sysinfo::Pid::from_u32(pid);
        match self.system.process(target) {
            Some(process) => {
                if process.kill() {
                    Ok(())
                } else {
                    Err(TaskLiteError::Process(
                        "Failed to kill process (insufficient permissions or system process)"
                            .to_string(),
                    ))
                }
            }
            None => Err(TaskLiteError::Process("Process not found".to_string())),
        }
    }
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_sanity() {
        let mut monitor = Monitor::new();
        let stats = monitor.stats();

        assert!(stats.memory_total_mb > 0.0);
        assert!(stats.memory_used_mb <= stats.memory_total_mb);
        assert!(stats.memory_usage_percent >= 0.0);
        assert!(stats.memory_usage_percent <= 100.0);
        assert!(stats.cpu_usage >= 0.0);
    }

    #[test]
    fn test_processes_respects_top_n() {
        let mut monitor = Monitor::new();
        let processes = monitor.processes(5);
        assert!(processes.len() <= 5);
        // テストプロセス自身は必ず存在する
        assert!(!monitor.processes(usize::MAX).is_empty());
    }

    #[test]
    fn test_processes_sorted_by_cpu_descending() {
        let mut monitor = Monitor::new();
        let processes = monitor.processes(50);
        for pair in processes.windows(2) {
            assert!(pair[0].cpu_usage >= pair[1].cpu_usage);
        }
    }

    #[test]
    fn test_kill_unknown_pid_fails() {
        let mut monitor = Monitor::new();
        // プロセス一覧を読み込んでから存在しない PID を指定
        let _ = monitor.processes(1);
        let result = monitor.kill(u32::MAX - 1);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Process not found"), "{}", message);
    }
}
