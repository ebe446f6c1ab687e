pub mod headless_mode;
pub mod setup;
pub mod summary_mode;
pub mod tui_mode;

pub use headless_mode::run_headless_mode;
pub use setup::{SessionData, setup_session};
pub use summary_mode::run_summary_mode;
pub use tui_mode::run_tui_mode;

use tokio::task::JoinHandle;

/// Wait for the background tasks of a session to stop after shutdown was sent.
pub(crate) async fn join_background_tasks(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        let _ = handle.await;
    }
}
