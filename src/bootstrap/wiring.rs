//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP gateway, clock) / 创建 infra 层具体实现
//! - ✅ Hand out controllers and use cases built on them / 构造控制器与用例
//! - ✅ Refuse configs that can never produce a request / 拒绝无法发出请求的配置
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! - Paging, search and cache rules live in `nh-app`
//! - 分页、搜索与缓存规则属于 `nh-app`
//!
//! ❌ **No config loading / 禁止加载配置**
//! - Config is already layered in config.rs
//! - 配置已在 config.rs 中分层加载

use std::sync::Arc;

use anyhow::{ensure, Context};
use nh_app::usecases::{CreateNote, DeleteNote, ListNotes};
use nh_app::{ControllerOptions, NotesController, QueryCache};
use nh_core::config::AppConfig;
use nh_core::ports::{ClockPort, NotesGatewayPort};
use nh_infra::{HttpNotesGateway, SystemClock};
use tokio::time::Duration;

pub struct AppDeps {
    pub gateway: Arc<dyn NotesGatewayPort>,
    pub clock: Arc<dyn ClockPort>,
    pub config: AppConfig,
}

impl AppDeps {
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            per_page: self.config.per_page,
            debounce: Duration::from_millis(self.config.debounce_ms),
        }
    }

    pub fn notes_controller(&self) -> NotesController {
        let cache = Arc::new(QueryCache::new(
            Arc::clone(&self.clock),
            self.config.stale_time_ms,
        ));
        NotesController::new(Arc::clone(&self.gateway), cache, self.controller_options())
    }

    pub fn list_notes(&self) -> ListNotes {
        ListNotes::from_arc(Arc::clone(&self.gateway), self.config.per_page)
    }

    pub fn create_note(&self) -> CreateNote {
        CreateNote::from_arc(Arc::clone(&self.gateway))
    }

    pub fn delete_note(&self) -> DeleteNote {
        DeleteNote::from_arc(Arc::clone(&self.gateway))
    }
}

/// Build the dependency set from a loaded config.
///
/// # Errors
///
/// Fails on a zero `per_page` or `request_timeout_secs` (neither can produce
/// a working request) and when the HTTP client cannot be built.
pub fn wire(config: AppConfig) -> anyhow::Result<AppDeps> {
    ensure!(config.per_page > 0, "per_page must be greater than 0");
    ensure!(
        config.request_timeout_secs > 0,
        "request_timeout_secs must be greater than 0"
    );
    if config.token.is_none() {
        tracing::warn!("no API token configured; requests will be sent without Authorization");
    }

    let gateway = HttpNotesGateway::from_config(&config).context("Failed to build notes gateway")?;

    Ok(AppDeps {
        gateway: Arc::new(gateway),
        clock: Arc::new(SystemClock),
        config,
    })
}
