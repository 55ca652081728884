pub mod settings;
pub mod store;

pub use settings::{MAX_OFFSET_MINUTES, ProfileSettings};
pub use store::{MemoryProfileStore, ProfileStore, load_or_create};
