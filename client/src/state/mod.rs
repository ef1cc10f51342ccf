//! One state slice per entity, plus the [`AppState`] that composes them.
//!
//! A slice is a plain struct of loaded records, operation flags, and the last
//! error message. It starts empty, is mutated only through its own transition
//! methods, and lives exactly as long as the hosting process. The embedding
//! application owns the `AppState` and passes it `&mut` into operations; no
//! global store exists.

mod babies;
mod badges;
mod care;
mod closet;
mod family;
mod notifications;
mod taxonomy;

pub use babies::BabyState;
pub use badges::BadgeState;
pub use care::CareState;
pub use closet::ClosetState;
pub use family::FamilyState;
pub use notifications::NotificationState;
pub use taxonomy::TaxonomyState;

/// Whole-app client state, one slice per entity
#[derive(Debug, Default)]
pub struct AppState {
    pub babies: BabyState,
    pub family: FamilyState,
    pub badges: BadgeState,
    pub notifications: NotificationState,
    pub care: CareState,
    pub closet: ClosetState,
    pub taxonomy: TaxonomyState,
}

impl AppState {
    /// Fresh, empty state; every list is unloaded and no operation is in flight
    pub fn new() -> Self {
        Self::default()
    }
}
