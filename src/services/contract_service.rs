// src/services/contract_service.rs
//
// Regra de vínculo de contratos: um contrato nasce apontando para
// exatamente um ejemplar sem contrato ativo, e o ejemplar e o cliente
// ficam fixos depois disso.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    common::error::{AppError, RuleError},
    db::{contract_repo::ContractRepository, specimen_repo::SpecimenRepository},
    models::contract::{Contract, ContractEstado},
    models::specimen::Specimen,
    services::assignment::{normalizar_id, parsear_id, RawId},
};

// Entrada de criação como chega do formulário.
#[derive(Debug, Clone, Default)]
pub struct BorradorContrato {
    pub client_id: Option<RawId>,
    pub specimen_id: Option<RawId>,
    pub servicio_ids: Vec<i64>,
    pub fecha_inicio: Option<NaiveDate>,
    pub precio_mensual: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContratoValido {
    pub client_id: i64,
    pub specimen_id: i64,
    pub servicio_ids: Vec<i64>,
    pub fecha_inicio: NaiveDate,
    pub precio_mensual: Decimal,
}

/// Validação local de criação de contrato: cliente, ejemplar, pelo
/// menos um serviço, data de início e preço não-negativo. Puro.
pub fn validar_creacion_contrato(borrador: &BorradorContrato) -> Result<ContratoValido, RuleError> {
    let client_token =
        normalizar_id(borrador.client_id.as_ref()).ok_or_else(|| RuleError::required("clientId"))?;
    let specimen_token = normalizar_id(borrador.specimen_id.as_ref())
        .ok_or_else(|| RuleError::required("specimenId"))?;

    if borrador.servicio_ids.is_empty() {
        return Err(RuleError::required("servicioIds"));
    }

    let fecha_inicio = borrador
        .fecha_inicio
        .ok_or_else(|| RuleError::required("fechaInicio"))?;

    let precio_mensual = borrador
        .precio_mensual
        .ok_or_else(|| RuleError::required("precioMensual"))?;
    if precio_mensual < Decimal::ZERO {
        return Err(RuleError::invalid(
            "precioMensual",
            "El precio mensual no puede ser negativo.",
        ));
    }

    Ok(ContratoValido {
        client_id: parsear_id("clientId", &client_token)?,
        specimen_id: parsear_id("specimenId", &specimen_token)?,
        servicio_ids: borrador.servicio_ids.clone(),
        fecha_inicio,
        precio_mensual,
    })
}

/// Filtra os ejemplares elegíveis para um contrato novo: só um contrato
/// ATIVO desqualifica; finalizado ou cancelado liberam o ejemplar de novo.
pub fn ejemplares_disponibles(ejemplares: &[Specimen], contratos: &[Contract]) -> Vec<Specimen> {
    ejemplares
        .iter()
        .filter(|e| {
            !contratos
                .iter()
                .any(|c| c.estado == ContractEstado::Activo && c.specimen_id == e.id)
        })
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct ContractService {
    contratos: ContractRepository,
    ejemplares: SpecimenRepository,
}

impl ContractService {
    pub fn new(contratos: ContractRepository, ejemplares: SpecimenRepository) -> Self {
        Self {
            contratos,
            ejemplares,
        }
    }

    pub async fn listar(&self) -> Result<Vec<Contract>, AppError> {
        self.contratos.listar().await
    }

    pub async fn obtener(&self, id: i64) -> Result<Contract, AppError> {
        self.contratos.obtener(id).await
    }

    pub async fn crear(&self, borrador: &BorradorContrato) -> Result<Contract, AppError> {
        let valido = validar_creacion_contrato(borrador)?;

        // Checagens contra o estado atual do ejemplar. O índice parcial
        // no banco cobre a corrida entre duas criações simultâneas.
        let ejemplar = self.ejemplares.obtener(valido.specimen_id).await?;

        if ejemplar.contract_id.is_some() {
            return Err(RuleError::invalid(
                "specimenId",
                "El ejemplar ya está vinculado a un contrato activo.",
            )
            .into());
        }

        if let Some(dueno) = ejemplar.client_id {
            if dueno != valido.client_id {
                return Err(RuleError::invalid(
                    "clientId",
                    "El contrato debe pertenecer al propietario actual del ejemplar.",
                )
                .into());
            }
        }

        tracing::info!(
            ejemplar = valido.specimen_id,
            cliente = valido.client_id,
            "creando contrato"
        );

        self.contratos.crear(&valido).await
    }

    pub async fn actualizar(
        &self,
        id: i64,
        fecha_inicio: NaiveDate,
        precio_mensual: Decimal,
        estado: ContractEstado,
        servicio_ids: Option<&[i64]>,
    ) -> Result<Contract, AppError> {
        if precio_mensual < Decimal::ZERO {
            return Err(RuleError::invalid(
                "precioMensual",
                "El precio mensual no puede ser negativo.",
            )
            .into());
        }

        if let Some(servicios) = servicio_ids {
            if servicios.is_empty() {
                return Err(RuleError::required("servicioIds").into());
            }
        }

        self.contratos
            .actualizar(id, fecha_inicio, precio_mensual, estado, servicio_ids)
            .await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        self.contratos.eliminar(id).await
    }

    /// Ejemplares que podem entrar num contrato novo, para o seletor do
    /// formulário de criação.
    pub async fn disponibles(&self) -> Result<Vec<Specimen>, AppError> {
        let ejemplares = self.ejemplares.listar(None).await?;
        let contratos = self.contratos.listar().await?;
        Ok(ejemplares_disponibles(&ejemplares, &contratos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::RuleKind;
    use chrono::Utc;

    fn ejemplar(id: i64) -> Specimen {
        Specimen {
            id,
            name: format!("ejemplar-{}", id),
            breed: None,
            color: None,
            birth_date: None,
            category_id: None,
            sede_id: None,
            client_id: None,
            contract_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn contrato(specimen_id: i64, estado: ContractEstado) -> Contract {
        Contract {
            id: specimen_id * 100,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            precio_mensual: Decimal::new(15000, 2),
            client_id: 1,
            specimen_id,
            estado,
            servicio_ids: vec![1],
            created_at: Utc::now(),
        }
    }

    fn borrador_completo() -> BorradorContrato {
        BorradorContrato {
            client_id: Some(RawId::Num(1)),
            specimen_id: Some(RawId::Text("2".to_string())),
            servicio_ids: vec![1, 3],
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 6, 1),
            precio_mensual: Some(Decimal::new(10000, 2)),
        }
    }

    #[test]
    fn solo_el_contrato_activo_desqualifica() {
        let ejemplares = vec![ejemplar(1), ejemplar(2)];
        let contratos = vec![
            contrato(1, ContractEstado::Activo),
            contrato(2, ContractEstado::Finalizado),
        ];

        let disponibles = ejemplares_disponibles(&ejemplares, &contratos);
        let ids: Vec<i64> = disponibles.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn cancelado_tambien_libera_el_ejemplar() {
        let ejemplares = vec![ejemplar(7)];
        let contratos = vec![contrato(7, ContractEstado::Cancelado)];
        assert_eq!(ejemplares_disponibles(&ejemplares, &contratos).len(), 1);
    }

    #[test]
    fn crear_contrato_exige_todos_los_campos() {
        let mut sin_cliente = borrador_completo();
        sin_cliente.client_id = None;
        let err = validar_creacion_contrato(&sin_cliente).unwrap_err();
        assert_eq!(err.field, "clientId");
        assert_eq!(err.kind, RuleKind::Required);

        let mut sin_ejemplar = borrador_completo();
        sin_ejemplar.specimen_id = Some(RawId::Text("  ".to_string()));
        let err = validar_creacion_contrato(&sin_ejemplar).unwrap_err();
        assert_eq!(err.field, "specimenId");

        let mut sin_servicios = borrador_completo();
        sin_servicios.servicio_ids.clear();
        let err = validar_creacion_contrato(&sin_servicios).unwrap_err();
        assert_eq!(err.field, "servicioIds");

        let mut sin_fecha = borrador_completo();
        sin_fecha.fecha_inicio = None;
        let err = validar_creacion_contrato(&sin_fecha).unwrap_err();
        assert_eq!(err.field, "fechaInicio");
    }

    #[test]
    fn precio_negativo_es_invalido() {
        let mut b = borrador_completo();
        b.precio_mensual = Some(Decimal::new(-100, 2));
        let err = validar_creacion_contrato(&b).unwrap_err();
        assert_eq!(err.field, "precioMensual");
        assert_eq!(err.kind, RuleKind::Invalid);
    }

    #[test]
    fn validacion_normaliza_ids_mixtos() {
        let valido = validar_creacion_contrato(&borrador_completo()).unwrap();
        assert_eq!(valido.client_id, 1);
        assert_eq!(valido.specimen_id, 2);
    }
}
