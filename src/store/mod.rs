pub mod file_io;
pub mod recovery;
pub mod task_store;

pub use file_io::StoreError;
pub use task_store::{Stats, TaskStore};
