//! Intent 模块 - 展示层意图的统一分发
//!
//! 展示层把用户操作 (提交、编辑、删除、刷新) 序列化为 `ListingIntent`，
//! 由控制器统一分发。

use serde::{Deserialize, Serialize};

use crate::models::MutationRequest;

/// 展示层意图
///
/// 使用 `#[serde(tag = "type", content = "data")]` 使 JSON 结构清晰：
///
/// ```json
/// { "type": "Delete", "data": { "id": "p1" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ListingIntent {
    /// 创建 (requestCreate)
    Create(MutationRequest),
    /// 更新 (requestUpdate)
    Update { id: String, request: MutationRequest },
    /// 删除 (requestDelete)，调用前展示层已完成确认
    Delete { id: String },
    /// 开始编辑 (requestEdit)
    Edit { id: String },
    /// 取消编辑 (requestCancelEdit)
    CancelEdit,
    /// 全量刷新 (requestRefresh)
    Refresh,
}

impl ListingIntent {
    /// 是否为变更操作 (占用变更槽位)
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ListingIntent::Create(_) | ListingIntent::Update { .. } | ListingIntent::Delete { .. }
        )
    }

    /// 意图名称 (日志用)
    pub fn name(&self) -> &'static str {
        match self {
            ListingIntent::Create(_) => "Create",
            ListingIntent::Update { .. } => "Update",
            ListingIntent::Delete { .. } => "Delete",
            ListingIntent::Edit { .. } => "Edit",
            ListingIntent::CancelEdit => "CancelEdit",
            ListingIntent::Refresh => "Refresh",
        }
    }
}
