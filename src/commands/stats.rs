use super::session;
use crate::libs::{backend::SessionBackend, view::View};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let manager = session().await;
    View::stats(&manager.stats());

    match manager.backend() {
        SessionBackend::Local(store) => View::storage_info(
            false,
            &store.primary_path().display().to_string(),
            manager.tasks().len(),
            store.last_saved().as_ref(),
        ),
        SessionBackend::Remote(api) => View::storage_info(true, api.base_url(), manager.tasks().len(), None),
    }
    Ok(())
}
