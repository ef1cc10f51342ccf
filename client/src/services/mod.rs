//! One typed service per backend entity.
//!
//! Services translate typed requests into HTTP calls, perform light input
//! validation before anything touches the network, and return either the
//! decoded response or a normalized [`crate::api::ApiError`]. They hold no
//! state.

mod babies;
mod badges;
mod care;
mod closet;
mod family;
mod notifications;
mod taxonomy;

pub use babies::BabyService;
pub use badges::BadgeService;
pub use care::CareService;
pub use closet::ClosetService;
pub use family::FamilyService;
pub use notifications::NotificationService;
pub use taxonomy::TaxonomyService;

use crate::api::ApiClient;

/// All entity services, sharing a single [`ApiClient`]
#[derive(Debug, Clone)]
pub struct Services {
    pub babies: BabyService,
    pub family: FamilyService,
    pub badges: BadgeService,
    pub notifications: NotificationService,
    pub care: CareService,
    pub closet: ClosetService,
    pub taxonomy: TaxonomyService,
}

impl Services {
    pub fn new(api: ApiClient) -> Self {
        Self {
            babies: BabyService::new(api.clone()),
            family: FamilyService::new(api.clone()),
            badges: BadgeService::new(api.clone()),
            notifications: NotificationService::new(api.clone()),
            care: CareService::new(api.clone()),
            closet: ClosetService::new(api.clone()),
            taxonomy: TaxonomyService::new(api),
        }
    }
}
