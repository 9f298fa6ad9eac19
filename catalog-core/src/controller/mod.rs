//! ListingController - 商品列表生命周期控制器
//!
//! 持有本地商品集合，串行化 create/update/delete 调用，并在每次变更成功后
//! 全量重新拉取 (不做乐观的本地补丁)。
//!
//! - 同一时刻只允许一个变更在途，其余立即返回 `ListingError::Busy`
//! - 多个 `load_all` 竞争时，只有最后发起的那次结果能写入状态

mod error;
mod intent;
mod state;

pub use error::{ListingError, ListingResult};
pub use state::{CatalogView, MutationKind, Phase};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use catalog_client::{CatalogTransport, ClientError};
use shared::{Listing, ListingDraft, MutationRequest};
use tokio::sync::watch;

use crate::draft::to_draft;

/// `load_all` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 结果已写入状态 (集合大小)
    Applied(usize),
    /// 期间有更新的 load 发起，本次结果被丢弃
    Superseded,
}

/// 商品列表控制器
///
/// 每个目录会话一个实例，显式传给展示层；展示层通过 `subscribe()` 观察
/// `CatalogView` 快照，通过各操作方法转发用户意图。
pub struct ListingController<T: CatalogTransport + ?Sized> {
    transport: Arc<T>,
    /// 唯一的状态源
    view: watch::Sender<CatalogView>,
    /// 最近一次发起的 load 序号
    load_ticket: AtomicU64,
    /// 变更槽位
    mutation_slot: AtomicBool,
}

/// 变更槽位守卫，drop 时释放槽位 (包括调用方中途丢弃 future)
struct MutationGuard<'a> {
    slot: &'a AtomicBool,
    view: &'a watch::Sender<CatalogView>,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.view.send_modify(|v| {
            v.pending = None;
            self.slot.store(false, Ordering::Release);
        });
    }
}

/// 在途 load 守卫
///
/// future 在结果写入前被丢弃时，若它仍是最后发起的 load，则退出 Loading
struct LoadGuard<'a> {
    ticket: u64,
    latest: &'a AtomicU64,
    view: &'a watch::Sender<CatalogView>,
    settled: bool,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let ticket = self.ticket;
        let cleared = self.view.send_if_modified(|v| {
            if self.latest.load(Ordering::Acquire) != ticket || !v.loading {
                return false;
            }
            v.loading = false;
            true
        });
        if cleared {
            tracing::debug!(ticket, "Latest load dropped before completion");
        }
    }
}

impl<T: CatalogTransport + ?Sized> ListingController<T> {
    /// 创建控制器，初始状态为 Loading (尚未发起请求)
    pub fn new(transport: Arc<T>) -> Self {
        let (view, _) = watch::channel(CatalogView::initial());
        Self {
            transport,
            view,
            load_ticket: AtomicU64::new(0),
            mutation_slot: AtomicBool::new(false),
        }
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<CatalogView> {
        self.view.subscribe()
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> CatalogView {
        self.view.borrow().clone()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// 全量拉取商品集合
    ///
    /// 失败时降级为空集合 + 错误信息，调用方可再次调用重试。
    pub async fn load_all(&self) -> ListingResult<LoadOutcome> {
        self.fetch(true).await
    }

    /// 显式全量刷新 (requestRefresh)
    pub async fn refresh(&self) -> ListingResult<LoadOutcome> {
        tracing::info!("Full catalog refresh requested");
        self.load_all().await
    }

    async fn fetch(&self, show_loading: bool) -> ListingResult<LoadOutcome> {
        let ticket = self.load_ticket.fetch_add(1, Ordering::AcqRel) + 1;
        if show_loading {
            self.view.send_if_modified(|v| !std::mem::replace(&mut v.loading, true));
        }
        tracing::debug!(ticket, "Loading listings");
        let mut guard = LoadGuard {
            ticket,
            latest: &self.load_ticket,
            view: &self.view,
            settled: false,
        };

        let result = self.transport.list().await.map_err(ListingError::from);

        // 序号比较和写入在同一把锁内完成，晚到的旧响应不会覆盖新状态
        let mut outcome = Ok(LoadOutcome::Superseded);
        self.view.send_if_modified(|v| {
            if self.load_ticket.load(Ordering::Acquire) != ticket {
                return false;
            }
            v.loading = false;
            outcome = match result {
                Ok(listings) => {
                    let count = listings.len();
                    v.listings = Arc::from(listings);
                    v.error = None;
                    Ok(LoadOutcome::Applied(count))
                }
                Err(err) => {
                    v.listings = Arc::from(Vec::new());
                    v.error = Some(err.to_string());
                    Err(err)
                }
            };
            true
        });
        guard.settled = true;

        match &outcome {
            Ok(LoadOutcome::Applied(count)) => tracing::info!(ticket, count, "Listings loaded"),
            Ok(LoadOutcome::Superseded) => {
                tracing::debug!(ticket, "Discarding stale listing response")
            }
            Err(e) => tracing::warn!(ticket, error = %e, "Failed to load listings"),
        }
        outcome
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// 创建商品
    ///
    /// 成功: 全量重新同步并关闭表单。失败: 保留草稿和集合不变。
    pub async fn create(&self, request: &MutationRequest) -> ListingResult<Listing> {
        let _guard = self.begin_mutation(MutationKind::Create)?;
        match self.transport.create(request).await {
            Ok(listing) => {
                tracing::info!(id = %listing.id, "Listing created");
                self.resync().await;
                self.close_form();
                Ok(listing)
            }
            Err(e) => Err(self.fail(MutationKind::Create, e)),
        }
    }

    /// 更新商品
    ///
    /// 不预先检查 id 是否在集合中；未知 id 由服务端拒绝。
    pub async fn update(&self, id: &str, request: &MutationRequest) -> ListingResult<Listing> {
        let _guard = self.begin_mutation(MutationKind::Update)?;
        match self.transport.update(id, request).await {
            Ok(listing) => {
                tracing::info!(id = %id, "Listing updated");
                self.resync().await;
                self.close_form();
                Ok(listing)
            }
            Err(e) => Err(self.fail(MutationKind::Update, e)),
        }
    }

    /// 删除商品
    ///
    /// 确认由展示层负责，这里无条件执行。不自动重试。
    pub async fn delete(&self, id: &str) -> ListingResult<()> {
        let _guard = self.begin_mutation(MutationKind::Delete)?;
        match self.transport.delete(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Listing deleted");
                self.view.send_if_modified(|v| {
                    if v.editing.as_deref() != Some(id) {
                        return false;
                    }
                    v.editing = None;
                    v.draft = None;
                    true
                });
                self.resync().await;
                Ok(())
            }
            Err(e) => Err(self.fail(MutationKind::Delete, e)),
        }
    }

    fn begin_mutation(&self, kind: MutationKind) -> ListingResult<MutationGuard<'_>> {
        // 槽位和 pending 在同一把锁内切换，Busy 总能报告真正在途的操作
        let mut busy = None;
        self.view.send_if_modified(|v| {
            if self.mutation_slot.swap(true, Ordering::AcqRel) {
                busy = Some(v.pending.unwrap_or(kind));
                return false;
            }
            v.pending = Some(kind);
            true
        });
        if let Some(in_flight) = busy {
            tracing::warn!(requested = %kind, in_flight = %in_flight, "Mutation rejected: busy");
            return Err(ListingError::Busy(in_flight));
        }

        tracing::debug!(kind = %kind, "Mutation started");
        Ok(MutationGuard {
            slot: &self.mutation_slot,
            view: &self.view,
        })
    }

    /// 变更后的全量同步；失败已记录在状态中
    async fn resync(&self) {
        let _ = self.fetch(false).await;
    }

    fn fail(&self, kind: MutationKind, err: ClientError) -> ListingError {
        let err = ListingError::from(err);
        tracing::warn!(kind = %kind, error = %err, "Mutation failed");
        self.view.send_modify(|v| v.error = Some(err.to_string()));
        err
    }

    fn close_form(&self) {
        self.view.send_if_modified(|v| {
            let changed = v.draft.is_some() || v.editing.is_some();
            v.draft = None;
            v.editing = None;
            changed
        });
    }

    // ========================================================================
    // Draft / Edit state
    // ========================================================================

    /// 打开空白表单 (新建商品)
    pub fn begin_create(&self) {
        self.view.send_modify(|v| {
            v.editing = None;
            v.draft = Some(ListingDraft::blank());
        });
    }

    /// 开始编辑：记录 id 指针并由商品生成草稿
    pub fn begin_edit(&self, listing: &Listing) {
        tracing::debug!(id = %listing.id, "Begin edit");
        self.view.send_modify(|v| {
            v.editing = Some(listing.id.clone());
            v.draft = to_draft(Some(listing));
        });
    }

    /// 按 id 开始编辑 (requestEdit)
    pub fn begin_edit_by_id(&self, id: &str) -> ListingResult<()> {
        let listing = self.view.borrow().find(id).cloned();
        match listing {
            Some(listing) => {
                self.begin_edit(&listing);
                Ok(())
            }
            None => {
                let err = ListingError::Unexpected(format!("listing {} is not in the catalog", id));
                self.view.send_modify(|v| v.error = Some(err.to_string()));
                Err(err)
            }
        }
    }

    /// 记录表单输入
    pub fn stage_draft(&self, draft: ListingDraft) {
        self.view.send_modify(|v| v.draft = Some(draft));
    }

    /// 取消编辑，幂等
    pub fn cancel_edit(&self) {
        self.close_form();
    }

    /// 显式关闭错误提示
    pub fn dismiss_error(&self) {
        self.view.send_if_modified(|v| v.error.take().is_some());
    }
}
