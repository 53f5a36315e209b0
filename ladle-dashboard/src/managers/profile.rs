//! Restaurant profile management
//!
//! The profile is a single record, not a collection, so this manager talks
//! to the transport directly instead of going through the list controller.

use std::sync::Arc;

use ladle_client::{ApiTransport, endpoints};
use shared::models::{Restaurant, RestaurantProfileUpdate};

use crate::forms::CuisineForm;
use crate::notify::{Notice, NoticeQueue};
use crate::session::{NOT_AUTHORIZED_MESSAGE, Session};

/// Orchestrates the profile tab: cuisine, image and the recipe-box flag
pub struct ProfileManager<T: ApiTransport> {
    session: Session,
    transport: Arc<T>,
    profile: Option<Restaurant>,
    error: Option<String>,
    pub notices: NoticeQueue,
    auth_error: Option<&'static str>,
}

impl<T: ApiTransport> ProfileManager<T> {
    pub fn new(transport: Arc<T>, session: Session) -> Self {
        Self {
            session,
            transport,
            profile: None,
            error: None,
            notices: NoticeQueue::new(),
            auth_error: None,
        }
    }

    pub fn auth_error(&self) -> Option<&'static str> {
        self.auth_error
    }

    pub fn profile(&self) -> Option<&Restaurant> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) {
        if !self.session.can_manage() {
            self.auth_error = Some(NOT_AUTHORIZED_MESSAGE);
            return;
        }
        self.auth_error = None;
        match self
            .transport
            .get::<Restaurant>(&endpoints::restaurant_profile())
            .await
        {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "profile fetch failed");
                self.error = Some(e.user_message());
                self.notices.error("Failed to load profile");
            }
        }
    }

    /// Persist a profile update; the returned record replaces the cache
    pub async fn save(&mut self, update: RestaurantProfileUpdate) -> bool {
        match self
            .transport
            .put::<Restaurant, _>(&endpoints::restaurant_profile(), &update)
            .await
        {
            Ok(profile) => {
                self.profile = Some(profile);
                self.notices.success("Profile updated");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "profile update failed");
                self.notices.error(e.user_message());
                false
            }
        }
    }

    pub async fn save_cuisine(&mut self, form: CuisineForm) -> bool {
        self.save(form.into_update()).await
    }

    pub async fn set_image_url(&mut self, url: impl Into<String>) -> bool {
        self.save(RestaurantProfileUpdate {
            image_url: Some(url.into()),
            ..Default::default()
        })
        .await
    }

    /// Toggle custom-order intake (the recipe box feature flag)
    pub async fn set_recipe_box(&mut self, enabled: bool) -> bool {
        self.save(RestaurantProfileUpdate {
            has_recipe_box: Some(enabled),
            ..Default::default()
        })
        .await
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }
}
