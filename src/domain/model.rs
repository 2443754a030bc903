use serde::Serialize;

/// Outcome of a non-blocking call: either it completed, or it reported that it
/// would have had to wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readiness {
    Ready,
    WouldBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingReadReport {
    pub path: String,
    pub bytes: usize,
    pub chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NonBlockingReport {
    pub target: String,
    pub connect: Readiness,
    /// `None` when the read would have blocked.
    pub first_read: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncCallReport {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AsyncReport {
    pub results: Vec<String>,
    pub delay_ms: u64,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionReport {
    pub blocking: BlockingReadReport,
    pub non_blocking: NonBlockingReport,
    pub sync_call: SyncCallReport,
    pub asynchronous: AsyncReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImmutableFieldReport {
    pub shallow_before: i64,
    pub shallow_after_rebind: i64,
    pub deep_after_copy: i64,
    pub deep_after_rebind: i64,
    /// Whether the shallow copy pointed at the very same value as the original
    /// right after copying.
    pub shallow_shared_value: bool,
    pub deep_shared_value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutableFieldReport {
    pub original: Vec<i64>,
    pub shallow: Vec<i64>,
    pub deep: Vec<i64>,
    pub shallow_shares_data: bool,
    pub deep_shares_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyReport {
    pub immutable_field: ImmutableFieldReport,
    pub mutable_field: MutableFieldReport,
}
