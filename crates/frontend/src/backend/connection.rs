use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::auth::AuthHandle;
use super::config::{config, BackendConfig};
use super::store::StoreHandle;

/// Handles to the two hosted services the application talks to.
pub struct Backend {
    pub auth: AuthHandle,
    pub store: StoreHandle,
}

impl Backend {
    fn connect(cfg: &'static BackendConfig) -> Self {
        log::info!("connecting backend services for project {}", cfg.project_id);
        Backend {
            auth: AuthHandle::new(cfg.auth_endpoint, cfg.api_key),
            store: StoreHandle::new(cfg.store_endpoint, cfg.api_key),
        }
    }
}

// The UI runs single-threaded, so process-wide state is a thread_local cell.
thread_local! {
    static BACKEND: OnceCell<Rc<Backend>> = const { OnceCell::new() };
}

/// The process-wide backend connection.
///
/// Built from the fixed configuration on first use; every later call returns
/// the existing connection.
pub fn backend() -> Rc<Backend> {
    BACKEND.with(|cell| {
        cell.get_or_init(|| Rc::new(Backend::connect(config())))
            .clone()
    })
}
