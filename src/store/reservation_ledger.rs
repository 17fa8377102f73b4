// src/store/reservation_ledger.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        reservation::{
            CreateReservationPayload, Reservation, ReservationQuery, ReservationStatus,
            ReservationSummary,
        },
        tour::Tour,
    },
};

/// Livro-razão de reservas.
///
/// Reservas nunca são removidas; canceladas continuam listáveis e apenas
/// saem dos totais agregados.
#[derive(Debug, Default, Clone)]
pub struct ReservationLedger {
    items: Vec<Reservation>,
}

impl ReservationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Reservation> {
        self.items.iter().find(|r| r.id == id)
    }

    /// Insere uma reserva manual, sempre com status `confirmed`.
    ///
    /// `tour_name` e `date` são copiados do passeio no momento da criação
    /// (snapshot desnormalizado). Quando o passeio não existe, a reserva é
    /// criada mesmo assim, com `tour_name` vazio e `date` ausente — é o
    /// comportamento documentado; a camada HTTP rejeita antes de chegar aqui.
    pub fn create(&mut self, input: CreateReservationPayload, tour: Option<&Tour>) -> Reservation {
        let reservation = Reservation {
            id: Uuid::new_v4(),
            tour_id: input.tour_id,
            tour_name: tour.map(|t| t.title.clone()).unwrap_or_default(),
            date: tour.map(|t| t.date),
            name: input.name,
            phone: input.phone,
            address: input.address,
            count: input.count,
            amount: input.amount,
            status: ReservationStatus::Confirmed,
            pickup: input.pickup,
            seat_pref: input.seat_pref,
            line_user_id: None,
            is_manual_entry: true,
            created_at: Utc::now(),
            cancelled_at: None,
        };
        self.items.push(reservation.clone());
        reservation
    }

    /// Transição de status. A única permitida é confirmed -> cancelled;
    /// não existe "des-cancelar" pela interface exposta.
    pub fn set_status(
        &mut self,
        id: Uuid,
        new_status: ReservationStatus,
    ) -> Result<Reservation, AppError> {
        let reservation = self
            .items
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::ReservationNotFound)?;

        if reservation.status != ReservationStatus::Confirmed
            || new_status != ReservationStatus::Cancelled
        {
            return Err(AppError::InvalidStatusTransition);
        }

        reservation.status = ReservationStatus::Cancelled;
        reservation.cancelled_at = Some(Utc::now());
        Ok(reservation.clone())
    }

    /// Consulta filtrada + agregados.
    ///
    /// Os critérios são conjuntivos (AND) e a ordem de inserção é preservada
    /// entre os resultados. Canceladas aparecem na sequência quando casam com
    /// o filtro, mas ficam fora dos dois totais.
    pub fn query(&self, query: &ReservationQuery) -> (Vec<Reservation>, ReservationSummary) {
        let needle = query.tour_name.as_ref().map(|n| n.to_lowercase());

        let matches: Vec<Reservation> = self
            .items
            .iter()
            .filter(|r| {
                needle
                    .as_ref()
                    .is_none_or(|n| r.tour_name.to_lowercase().contains(n))
            })
            .filter(|r| query.date.is_none_or(|d| r.date == Some(d)))
            .filter(|r| {
                query
                    .date_from
                    .is_none_or(|from| r.date.is_some_and(|d| d >= from))
            })
            .filter(|r| {
                query
                    .date_to
                    .is_none_or(|to| r.date.is_some_and(|d| d <= to))
            })
            .filter(|r| query.status.matches(r.status))
            .cloned()
            .collect();

        let mut summary = ReservationSummary {
            people_total: 0,
            sales_total: Decimal::ZERO,
        };
        for r in &matches {
            if r.status != ReservationStatus::Cancelled {
                summary.people_total = summary.people_total.saturating_add(r.count);
                summary.sales_total += r.amount;
            }
        }

        (matches, summary)
    }

    /// Soma dos grupos confirmados de um passeio; usada pelo serviço de
    /// booking para checar capacidade e recalcular `current`.
    pub fn confirmed_headcount(&self, tour_id: Uuid) -> u32 {
        self.items
            .iter()
            .filter(|r| r.tour_id == tour_id && r.status == ReservationStatus::Confirmed)
            .map(|r| r.count)
            .sum()
    }
}
