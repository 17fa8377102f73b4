// src/services/booking.rs

use std::sync::Arc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        reservation::{CreateReservationPayload, Reservation, ReservationStatus},
        tour::TourStatus,
    },
    services::line::Notifier,
    store::SharedStore,
};

/// Fluxos de reserva que atravessam as três coleções.
///
/// O catálogo nunca deriva status sozinho; é este serviço que aplica os
/// ajustes Full/Open e o recálculo de `current` como passos explícitos do
/// fluxo, segurando o guard de escrita do início ao fim de cada mutação.
#[derive(Clone)]
pub struct BookingService {
    store: SharedStore,
    notifier: Arc<dyn Notifier>,
}

impl BookingService {
    pub fn new(store: SharedStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Entrada manual pelo console. Exige que o passeio exista e que o grupo
    /// caiba na capacidade restante; ou aplica tudo, ou não muda nada.
    pub async fn create_manual(
        &self,
        payload: CreateReservationPayload,
    ) -> Result<Reservation, AppError> {
        let mut store = self.store.write().await;

        let tour = store
            .tours
            .get(payload.tour_id)
            .cloned()
            .ok_or(AppError::TourNotFound)?;

        // checked_add: um count absurdo deve virar CapacityExceeded, nunca
        // estourar a soma
        let headcount = store.reservations.confirmed_headcount(tour.id);
        if headcount
            .checked_add(payload.count)
            .is_none_or(|total| total > tour.capacity)
        {
            return Err(AppError::CapacityExceeded);
        }

        let created = store.reservations.create(payload, Some(&tour));

        // bookkeeping: ocupação recalculada a partir do livro-razão
        let new_headcount = headcount + created.count;
        store.tours.set_current(tour.id, new_headcount)?;
        if new_headcount >= tour.capacity && tour.status == TourStatus::Open {
            store.tours.set_status(tour.id, TourStatus::Full)?;
        }

        Ok(created)
    }

    /// Transição de status (na prática, cancelamento). Quando o passeio
    /// referenciado ainda existe, a ocupação é recalculada e um passeio
    /// `full` volta para `open` se sobrar vaga. A notificação LINE sai
    /// depois do guard e nunca desfaz a mutação se falhar.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        let updated = {
            let mut store = self.store.write().await;
            let updated = store.reservations.set_status(id, new_status)?;

            // referência órfã (passeio já apagado) é tolerada: só pulamos
            // o bookkeeping
            if let Some(tour) = store.tours.get(updated.tour_id).cloned() {
                let headcount = store.reservations.confirmed_headcount(tour.id);
                store.tours.set_current(tour.id, headcount)?;
                if tour.status == TourStatus::Full && headcount < tour.capacity {
                    store.tours.set_status(tour.id, TourStatus::Open)?;
                }
            }
            updated
        };

        if let Some(line_user_id) = &updated.line_user_id {
            let date = updated
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            if let Err(e) = self
                .notifier
                .notify_cancellation(line_user_id, &updated.tour_name, &date)
                .await
            {
                tracing::warn!("Notificação de cancelamento falhou: {}", e);
            }
        }

        Ok(updated)
    }
}
