// src/store/mod.rs

pub mod pickup_registry;
pub mod reservation_ledger;
pub mod tour_catalog;

use std::sync::Arc;
use tokio::sync::RwLock;

pub use pickup_registry::PickupRegistry;
pub use reservation_ledger::ReservationLedger;
pub use tour_catalog::TourCatalog;

/// As três coleções da sessão administrativa, num objeto explícito em vez de
/// estado global mutável.
///
/// O estado é dono de si mesmo durante a vida da sessão; o serviço remoto
/// seria a fonte da verdade quando não estamos em modo mock, mas esta
/// implementação opera inteiramente em memória.
///
/// Uma única `RwLock` cobre o conjunto: cada mutação segura o guard de
/// escrita do início ao fim, então CRUD e consultas nunca se intercalam —
/// o mesmo modelo sequencial do console original.
#[derive(Debug, Default)]
pub struct SessionStore {
    pub pickups: PickupRegistry,
    pub tours: TourCatalog,
    pub reservations: ReservationLedger,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type SharedStore = Arc<RwLock<SessionStore>>;

pub fn shared() -> SharedStore {
    Arc::new(RwLock::new(SessionStore::new()))
}
