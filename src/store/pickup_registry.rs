// src/store/pickup_registry.rs

use chrono::Utc;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::{
    common::error::AppError,
    models::pickup::{PickupPoint, UpdatePickupPayload},
};

/// Registro de pontos de embarque.
///
/// Mantém a ordem de inserção internamente; toda listagem sai ordenada de
/// forma ascendente por `sort_order`.
#[derive(Debug, Default, Clone)]
pub struct PickupRegistry {
    items: Vec<PickupPoint>,
}

impl PickupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&PickupPoint> {
        self.items.iter().find(|p| p.id == id)
    }

    /// Cria um ponto de embarque.
    ///
    /// Nome vazio (após trim) é rejeitado antes de qualquer mutação.
    /// Sem `sort_order` explícito, assume (quantidade atual + 1).
    pub fn add(&mut self, name: &str, sort_order: Option<u32>) -> Result<PickupPoint, AppError> {
        let name = name.trim();
        if name.is_empty() {
            let mut errors = ValidationErrors::new();
            let mut err = ValidationError::new("length");
            err.message = Some("O nome do ponto de embarque é obrigatório.".into());
            errors.add("name", err);
            return Err(AppError::ValidationError(errors));
        }

        let now = Utc::now();
        let pickup = PickupPoint {
            id: Uuid::new_v4(),
            name: name.to_string(),
            sort_order: sort_order.unwrap_or(self.items.len() as u32 + 1),
            active: true,
            created_at: now,
            updated_at: now,
        };
        self.items.push(pickup.clone());
        Ok(pickup)
    }

    /// Inverte o flag `active`. Id desconhecido vira 404, não um no-op.
    pub fn toggle_active(&mut self, id: Uuid) -> Result<PickupPoint, AppError> {
        let pickup = self
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::PickupNotFound)?;
        pickup.active = !pickup.active;
        pickup.updated_at = Utc::now();
        Ok(pickup.clone())
    }

    /// Atualização parcial (nome / ordem / ativo).
    pub fn update(&mut self, id: Uuid, input: UpdatePickupPayload) -> Result<PickupPoint, AppError> {
        let pickup = self
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::PickupNotFound)?;

        if let Some(name) = input.name {
            pickup.name = name.trim().to_string();
        }
        if let Some(sort_order) = input.sort_order {
            pickup.sort_order = sort_order;
        }
        if let Some(active) = input.active {
            pickup.active = active;
        }
        pickup.updated_at = Utc::now();
        Ok(pickup.clone())
    }

    /// Remove e devolve o ponto (o handler devolve o registro removido para
    /// o console exibir o nome na confirmação). Não há cascata: passeios e
    /// reservas que o referenciam ficam com a referência órfã.
    pub fn delete(&mut self, id: Uuid) -> Result<PickupPoint, AppError> {
        let pos = self
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(AppError::PickupNotFound)?;
        Ok(self.items.remove(pos))
    }

    /// Listagem ordenada por `sort_order` ascendente.
    /// Com `active_only`, exclui os inativos (opções da reserva manual).
    pub fn list(&self, active_only: bool) -> Vec<PickupPoint> {
        let mut result: Vec<PickupPoint> = self
            .items
            .iter()
            .filter(|p| !active_only || p.active)
            .cloned()
            .collect();
        result.sort_by_key(|p| p.sort_order);
        result
    }

    /// Resolve um id para o nome de exibição, caindo para o id cru quando o
    /// ponto não existe mais (referência órfã tolerada).
    pub fn display_name(&self, id: Uuid) -> String {
        self.get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
