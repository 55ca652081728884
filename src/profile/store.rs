use std::cell::RefCell;

use crate::error::Result;
use crate::models::UserProfile;

/// Where a user profile is persisted.
///
/// The schedule core never talks to a store; callers load a profile, pass
/// its offsets in, and route every change through
/// [`ProfileSettings`](crate::profile::ProfileSettings).
pub trait ProfileStore {
    fn load(&self) -> Result<Option<UserProfile>>;
    fn save(&self, profile: &UserProfile) -> Result<()>;
}

/// In-process store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    slot: RefCell<Option<UserProfile>>,
    saves: RefCell<usize>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(profile: UserProfile) -> Self {
        Self {
            slot: RefCell::new(Some(profile)),
            saves: RefCell::new(0),
        }
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        *self.slot.borrow_mut() = Some(profile.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

impl<S: ProfileStore + ?Sized> ProfileStore for &S {
    fn load(&self) -> Result<Option<UserProfile>> {
        (**self).load()
    }

    fn save(&self, profile: &UserProfile) -> Result<()> {
        (**self).save(profile)
    }
}

/// Load the stored profile, creating and saving a fresh one when absent.
pub fn load_or_create(store: &impl ProfileStore, id: &str) -> Result<UserProfile> {
    if let Some(profile) = store.load()? {
        log::debug!("loaded profile '{}'", profile.id);
        return Ok(profile);
    }
    let profile = UserProfile::new(id);
    store.save(&profile)?;
    log::info!("created profile '{}'", id);
    Ok(profile)
}
