//! Query identity and the keyed result cache.
//! 查询标识与按键缓存。
//!
//! ## Rules / 规则
//!
//! - A key is fetched at most once at a time / 同一键同时最多一次请求
//! - A fresh entry is served without a request / 新鲜条目直接复用
//! - Invalidation drops results of fetches already in flight / 失效会丢弃进行中请求的结果

mod cache;
mod key;

pub use cache::{CachedQuery, FetchTicket, QueryCache};
pub use key::{QueryKey, NOTES_NAMESPACE};
