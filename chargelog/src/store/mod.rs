//! トランザクションログストア
//!
//! 受理済みログレコードをプロセス存続期間のみメモリ内で保持する。
//! 永続化も複数インスタンス間の共有も行わない（明示的な非目標）。

use crate::common::types::LogEntry;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// ログストアの抽象境界
///
/// エンドポイントはこのtraitのみに依存する。バッキング実装を
/// 外部永続ストアへ差し替える場合もこの境界を維持する。
#[async_trait]
pub trait LogStore: Send + Sync {
    /// レコードを末尾へ追加する
    ///
    /// `txHash`による重複排除は行わない。重複ハッシュも別レコードとして
    /// 保存される（一意性の不変条件は存在しない）。
    async fn append(&self, entry: LogEntry);

    /// 保存済みレコード全件を挿入順（古い順）で返す
    async fn all(&self) -> Vec<LogEntry>;

    /// 現在保持しているレコード数を返す
    async fn len(&self) -> usize;
}

/// インメモリ実装
///
/// 構築時に空の状態を注入する。モジュールレベルのシングルトンは持たない。
/// 保持上限を設定した場合、上限到達時は最古のレコードから追い出す。
#[derive(Clone)]
pub struct MemoryLogStore {
    entries: Arc<RwLock<VecDeque<LogEntry>>>,
    capacity: Option<usize>,
}

impl MemoryLogStore {
    /// 上限なしのストアを作成する
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 保持上限付きのストアを作成する（0は上限なし）
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            capacity: (capacity > 0).then_some(capacity),
        }
    }
}

impl Default for MemoryLogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn append(&self, entry: LogEntry) {
        let mut entries = self.entries.write().await;
        if let Some(capacity) = self.capacity {
            while entries.len() >= capacity {
                entries.pop_front();
            }
        }
        entries.push_back(entry);
    }

    async fn all(&self) -> Vec<LogEntry> {
        let entries = self.entries.read().await;
        entries.iter().cloned().collect()
    }

    async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}
