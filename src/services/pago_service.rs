// src/services/pago_service.rs

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::{AppError, RuleError},
    db::pago_repo::PagoRepository,
    models::pago::{MetodoPago, Pago},
};

/// Sugestão de "mês pago" para um pagamento novo: o máximo `mesPago`
/// já registrado no contrato + 1, voltando a 1 depois de dezembro.
/// Sem pagamentos anteriores, sugere o mês corrente. Só sugestão: o
/// usuário pode sobrescrever.
pub fn sugerir_proximo_mes(pagos: &[Pago], mes_actual: u32) -> u32 {
    match pagos.iter().map(|p| p.mes_pago).max() {
        None => mes_actual,
        Some(max) if max >= 12 => 1,
        Some(max) => (max + 1) as u32,
    }
}

#[derive(Clone)]
pub struct PagoService {
    repo: PagoRepository,
}

impl PagoService {
    pub fn new(repo: PagoRepository) -> Self {
        Self { repo }
    }

    pub async fn listar(&self, contract_id: Option<i64>) -> Result<Vec<Pago>, AppError> {
        self.repo.listar(contract_id).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Pago, AppError> {
        self.repo.obtener(id).await
    }

    pub async fn crear(
        &self,
        contract_id: i64,
        valor: Decimal,
        metodo_pago: MetodoPago,
        mes_pago: i32,
        fecha_pago: NaiveDate,
    ) -> Result<Pago, AppError> {
        validar_campos(valor, mes_pago)?;
        self.repo
            .crear(contract_id, valor, metodo_pago, mes_pago, fecha_pago)
            .await
    }

    pub async fn actualizar(
        &self,
        id: i64,
        valor: Decimal,
        metodo_pago: MetodoPago,
        mes_pago: i32,
        fecha_pago: NaiveDate,
    ) -> Result<Pago, AppError> {
        validar_campos(valor, mes_pago)?;
        self.repo
            .actualizar(id, valor, metodo_pago, mes_pago, fecha_pago)
            .await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        self.repo.eliminar(id).await
    }

    /// Recalculada toda vez que o formulário troca de contrato.
    pub async fn sugerencia_mes(&self, contract_id: i64) -> Result<u32, AppError> {
        let pagos = self.repo.listar(Some(contract_id)).await?;
        Ok(sugerir_proximo_mes(&pagos, Utc::now().month()))
    }
}

fn validar_campos(valor: Decimal, mes_pago: i32) -> Result<(), RuleError> {
    if valor < Decimal::ZERO {
        return Err(RuleError::invalid("valor", "El valor no puede ser negativo."));
    }
    if !(1..=12).contains(&mes_pago) {
        return Err(RuleError::invalid(
            "mesPago",
            "El mes de pago debe estar entre 1 y 12.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pago(mes_pago: i32) -> Pago {
        Pago {
            id: mes_pago as i64,
            contract_id: 1,
            valor: Decimal::new(15000, 2),
            metodo_pago: MetodoPago::Efectivo,
            mes_pago,
            fecha_pago: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn sugerencia_avanza_al_mes_siguiente() {
        let pagos = vec![pago(3), pago(1), pago(2)];
        assert_eq!(sugerir_proximo_mes(&pagos, 8), 4);
    }

    #[test]
    fn sugerencia_envuelve_en_el_limite_del_ano() {
        let pagos = vec![pago(10), pago(11), pago(12)];
        assert_eq!(sugerir_proximo_mes(&pagos, 8), 1);
    }

    #[test]
    fn sin_pagos_sugiere_el_mes_corriente() {
        assert_eq!(sugerir_proximo_mes(&[], 7), 7);
    }

    #[test]
    fn mes_fuera_de_rango_es_invalido() {
        assert!(validar_campos(Decimal::new(100, 0), 0).is_err());
        assert!(validar_campos(Decimal::new(100, 0), 13).is_err());
        assert!(validar_campos(Decimal::new(100, 0), 12).is_ok());
    }

    #[test]
    fn valor_negativo_es_invalido() {
        let err = validar_campos(Decimal::new(-1, 0), 5).unwrap_err();
        assert_eq!(err.field, "valor");
    }
}
