pub mod assignment;
pub mod contract_service;
pub mod grouping;
pub mod pago_service;
pub mod specimen_service;

pub use contract_service::ContractService;
pub use pago_service::PagoService;
pub use specimen_service::SpecimenService;

// Cenário completo sobre a camada pura: criação validada, movimiento
// sem cambio rejeitado, diff mínimo, e elegibilidade de contrato antes
// e depois do vínculo. Nada aqui toca o banco.
#[cfg(test)]
mod flujo_asignacion {
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    use crate::common::error::RuleKind;
    use crate::models::contract::{Contract, ContractEstado};
    use crate::models::specimen::Specimen;
    use crate::services::assignment::{
        calcular_diff_movimiento, validar_creacion, BorradorEjemplar, EstadoAsignacion,
        MovimientoPropuesto, RawId,
    };
    use crate::services::contract_service::ejemplares_disponibles;

    fn persistido(id: i64, valido: &crate::services::assignment::AsignacionValida) -> Specimen {
        Specimen {
            id,
            name: valido.name.clone(),
            breed: valido.breed.clone(),
            color: valido.color.clone(),
            birth_date: valido.birth_date,
            category_id: valido.category_id.parse().ok(),
            sede_id: valido.sede_id.parse().ok(),
            client_id: valido.client_id.as_ref().and_then(|c| c.parse().ok()),
            contract_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn contrato_para(specimen_id: i64, estado: ContractEstado) -> Contract {
        Contract {
            id: 50,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            precio_mensual: Decimal::new(20000, 2),
            client_id: 4,
            specimen_id,
            estado,
            servicio_ids: vec![1],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn ciclo_de_vida_de_rex() {
        // 1. Criação válida de Rex en la categoría 1, sede 2.
        let borrador = BorradorEjemplar {
            name: "Rex".to_string(),
            category_id: Some(RawId::Text("1".to_string())),
            sede_id: Some(RawId::Text("2".to_string())),
            ..Default::default()
        };
        let valido = validar_creacion(&borrador).unwrap();
        let rex = persistido(10, &valido);
        assert_eq!(rex.category_id, Some(1));
        assert_eq!(rex.sede_id, Some(2));

        // 2. Movimiento idéntico al estado actual → NoChange.
        let estado = EstadoAsignacion::del_ejemplar(&rex);
        let igual = MovimientoPropuesto {
            category_id: Some(RawId::Text("1".to_string())),
            sede_id: Some(RawId::Num(2)),
            client_id: None,
        };
        let err = calcular_diff_movimiento(&estado, &igual).unwrap_err();
        assert_eq!(err.kind, RuleKind::NoChange);

        // 3. Cambio de sede → diff con exactamente esa clave.
        let a_sede_3 = MovimientoPropuesto {
            category_id: Some(RawId::Num(1)),
            sede_id: Some(RawId::Text("3".to_string())),
            client_id: None,
        };
        let cambios = calcular_diff_movimiento(&estado, &a_sede_3).unwrap();
        assert_eq!(cambios.sede_id, Some(Some("3".to_string())));
        assert!(cambios.category_id.is_none());
        assert!(cambios.client_id.is_none());

        // 4. Con un contrato activo Rex desaparece de los elegibles...
        let otros = vec![rex.clone(), persistido(11, &valido)];
        let activos = vec![contrato_para(rex.id, ContractEstado::Activo)];
        let disponibles = ejemplares_disponibles(&otros, &activos);
        assert!(disponibles.iter().all(|e| e.id != rex.id));
        assert_eq!(disponibles.len(), 1);

        // ...y vuelve cuando el contrato se finaliza.
        let finalizados = vec![contrato_para(rex.id, ContractEstado::Finalizado)];
        let disponibles = ejemplares_disponibles(&otros, &finalizados);
        assert!(disponibles.iter().any(|e| e.id == rex.id));
    }
}
