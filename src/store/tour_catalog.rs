// src/store/tour_catalog.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::tour::{CreateTourPayload, Tour, TourListQuery, TourStatus, UpdateTourPayload},
    store::pickup_registry::PickupRegistry,
};

/// Catálogo de passeios.
#[derive(Debug, Default, Clone)]
pub struct TourCatalog {
    items: Vec<Tour>,
}

impl TourCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: Uuid) -> Option<&Tour> {
        self.items.iter().find(|t| t.id == id)
    }

    /// Cria um passeio com id gerado e `current = 0`.
    ///
    /// Os `pickup_ids` são guardados como vieram; não validamos a existência
    /// contra o registro de embarque.
    pub fn create(&mut self, input: CreateTourPayload) -> Tour {
        let now = Utc::now();
        let tour = Tour {
            id: Uuid::new_v4(),
            title: input.title,
            date: input.date,
            deadline: input.deadline,
            capacity: input.capacity,
            price: input.price,
            status: input.status,
            current: 0,
            description: input.description,
            image_url: input.image_url,
            pickup_ids: input.pickup_ids,
            created_at: now,
            updated_at: now,
        };
        self.items.push(tour.clone());
        tour
    }

    /// Substitui todos os campos mutáveis de uma vez (o editor envia o
    /// formulário inteiro). Id desconhecido vira 404, não um drop silencioso.
    pub fn update(&mut self, id: Uuid, input: UpdateTourPayload) -> Result<Tour, AppError> {
        let tour = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::TourNotFound)?;

        tour.title = input.title;
        tour.date = input.date;
        tour.deadline = input.deadline;
        tour.capacity = input.capacity;
        tour.price = input.price;
        tour.status = input.status;
        tour.description = input.description;
        tour.image_url = input.image_url;
        tour.pickup_ids = input.pickup_ids;
        tour.updated_at = Utc::now();
        Ok(tour.clone())
    }

    /// Remove e devolve o passeio. Sem cascata: reservas que o referenciam
    /// permanecem intactas, com a referência órfã.
    pub fn delete(&mut self, id: Uuid) -> Result<Tour, AppError> {
        let pos = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or(AppError::TourNotFound)?;
        Ok(self.items.remove(pos))
    }

    /// Listagem com intervalo de datas opcional, em ordem de inserção.
    pub fn list(&self, query: &TourListQuery) -> Vec<Tour> {
        self.items
            .iter()
            .filter(|t| query.date_from.is_none_or(|from| t.date >= from))
            .filter(|t| query.date_to.is_none_or(|to| t.date <= to))
            .cloned()
            .collect()
    }

    /// Resolve os `pickup_ids` do passeio para nomes de exibição, na ordem
    /// em que foram guardados, caindo para o id cru quando o ponto não
    /// existe mais.
    pub fn resolve_pickup_names(&self, tour: &Tour, registry: &PickupRegistry) -> Vec<String> {
        tour.pickup_ids
            .iter()
            .map(|id| registry.display_name(*id))
            .collect()
    }

    // Usados pelo serviço de booking ao recalcular a ocupação; a camada do
    // catálogo em si nunca deriva status de current/capacity.

    pub fn set_current(&mut self, id: Uuid, current: u32) -> Result<(), AppError> {
        let tour = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::TourNotFound)?;
        tour.current = current;
        tour.updated_at = Utc::now();
        Ok(())
    }

    pub fn set_status(&mut self, id: Uuid, status: TourStatus) -> Result<(), AppError> {
        let tour = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::TourNotFound)?;
        tour.status = status;
        tour.updated_at = Utc::now();
        Ok(())
    }
}
