pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage;
#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use models::UserProfile;
pub use session::{Session, PROFILE_KEY, TOKEN_KEY};
pub use storage::SessionStorage;
