use validator::Validate;

use super::UserProfile;
use crate::{Result, Store, store::Documents};

/// Profile of the local user, stored as a single document.
pub struct ProfileRepository<S> {
    profiles: Documents<S, UserProfile>,
}

impl<S: Store> ProfileRepository<S> {
    pub const COLLECTION: &'static str = "profiles";
    const KEY: &'static str = "current";

    pub fn new(store: S) -> Self {
        Self {
            profiles: Documents::new(store, Self::COLLECTION),
        }
    }

    /// Stored profile, or the default profile when none was saved yet.
    pub async fn get(&self) -> Result<UserProfile> {
        Ok(self.profiles.get(Self::KEY).await?.unwrap_or_default())
    }

    /// Replace the whole profile. Labels are normalized before saving.
    #[tracing::instrument(skip_all)]
    pub async fn update_preferences(&self, profile: UserProfile) -> Result<UserProfile> {
        let profile = profile.normalized();
        profile.validate()?;

        self.profiles.put(Self::KEY, &profile).await?;

        tracing::info!(
            preferences = profile.dietary_preferences.len(),
            restrictions = profile.dietary_restrictions.len(),
            "profile updated"
        );

        Ok(profile)
    }
}
