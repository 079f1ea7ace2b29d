// src/services/assignment.rs
//
// Motor de asignación de ejemplares: valida e calcula a tripla
// {categoryId, sedeId, clientId} de um ejemplar na criação, edição e
// movimentação. Tudo aqui é puro: nenhum acesso a banco ou rede, os
// dados chegam prontos e o resultado é um valor ou um RuleError.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::common::error::RuleError;
use crate::models::specimen::Specimen;

// Identificador cru vindo do JSON. Formulários HTML mandam strings,
// payloads de API mandam números; nunca assumimos um dos dois.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Text(String),
}

/// Normaliza um identificador para um token opaco comparável.
/// Número vira a sua forma decimal; string é aparada e a vazia vira
/// `None` (igual a ausente/null). Toda comparação de igualdade entre
/// identificadores DEVE passar por aqui antes.
pub fn normalizar_id(raw: Option<&RawId>) -> Option<String> {
    match raw {
        None => None,
        Some(RawId::Num(n)) => Some(n.to_string()),
        Some(RawId::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
    }
}

/// Converte um token já normalizado para a chave numérica do banco.
/// É a fronteira de persistência: o motor em si nunca assume numérico.
pub fn parsear_id(field: &str, token: &str) -> Result<i64, RuleError> {
    token
        .parse::<i64>()
        .map_err(|_| RuleError::invalid(field, format!("Identificador inválido: '{}'.", token)))
}

// Estado atual das associações de um ejemplar, já normalizado.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstadoAsignacion {
    pub category_id: Option<String>,
    pub sede_id: Option<String>,
    pub client_id: Option<String>,
    pub contrato_activo: bool,
}

impl EstadoAsignacion {
    pub fn del_ejemplar(e: &Specimen) -> Self {
        Self {
            category_id: e.category_id.map(|id| id.to_string()),
            sede_id: e.sede_id.map(|id| id.to_string()),
            client_id: e.client_id.map(|id| id.to_string()),
            contrato_activo: e.contract_id.is_some(),
        }
    }
}

// Entrada de criação/edição como chega do formulário.
#[derive(Debug, Clone, Default)]
pub struct BorradorEjemplar {
    pub name: String,
    pub category_id: Option<RawId>,
    pub sede_id: Option<RawId>,
    pub client_id: Option<RawId>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

// Resultado de uma validação bem-sucedida: nome aparado e os três
// identificadores já normalizados (categoria e sede garantidos).
#[derive(Debug, Clone, PartialEq)]
pub struct AsignacionValida {
    pub name: String,
    pub category_id: String,
    pub sede_id: String,
    pub client_id: Option<String>,
    pub breed: Option<String>,
    pub color: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// Validação de criação: nome, categoria e sede são obrigatórios;
/// o propietario é opcional. Puro, sem efeitos.
pub fn validar_creacion(borrador: &BorradorEjemplar) -> Result<AsignacionValida, RuleError> {
    let name = borrador.name.trim();
    if name.is_empty() {
        return Err(RuleError::required("name"));
    }

    let category_id =
        normalizar_id(borrador.category_id.as_ref()).ok_or_else(|| RuleError::required("categoryId"))?;
    let sede_id =
        normalizar_id(borrador.sede_id.as_ref()).ok_or_else(|| RuleError::required("sedeId"))?;

    Ok(AsignacionValida {
        name: name.to_string(),
        category_id,
        sede_id,
        client_id: normalizar_id(borrador.client_id.as_ref()),
        breed: borrador.breed.clone(),
        color: borrador.color.clone(),
        birth_date: borrador.birth_date,
    })
}

/// Validação de edição completa: mesmos campos obrigatórios da criação.
/// Além disso, um ejemplar com contrato ativo não pode trocar de dono
/// por uma edição comum; o contrato fixa o propietario.
pub fn validar_edicion(
    actual: &EstadoAsignacion,
    borrador: &BorradorEjemplar,
) -> Result<AsignacionValida, RuleError> {
    let valido = validar_creacion(borrador)?;

    if actual.contrato_activo && valido.client_id != actual.client_id {
        return Err(RuleError::invalid(
            "clientId",
            "El ejemplar tiene un contrato activo; el propietario no puede cambiar sin liberar el contrato.",
        ));
    }

    Ok(valido)
}

// Tripla proposta por uma operação de movimiento. É o estado COMPLETO
// desejado: null/ausente significa "sin asociación", não "sem mudança".
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovimientoPropuesto {
    #[schema(value_type = Option<String>, example = "3")]
    pub category_id: Option<RawId>,
    #[schema(value_type = Option<String>, example = "1")]
    pub sede_id: Option<RawId>,
    #[schema(value_type = Option<String>)]
    pub client_id: Option<RawId>,
}

// Diff mínimo de um movimiento. O nível de fora (`Option`) marca se o
// campo mudou; o de dentro é o novo valor (possivelmente nulo).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CambiosAsignacion {
    pub category_id: Option<Option<String>>,
    pub sede_id: Option<Option<String>>,
    pub client_id: Option<Option<String>>,
}

impl CambiosAsignacion {
    pub fn esta_vacio(&self) -> bool {
        self.category_id.is_none() && self.sede_id.is_none() && self.client_id.is_none()
    }
}

/// Calcula o diff mínimo de um movimiento. Cada campo só entra no diff
/// se o valor proposto, normalizado, difere do atual; um diff vazio é
/// rejeitado com `NoChange` para a UI fechar sem chamar a API.
///
/// Mandar só o que mudou não é conveniência: um movimiento é uma
/// operação auditada e um registro completo sobrescreveria edições
/// concorrentes de campos descritivos (breed, color...) feitas entre a
/// carga e o submit.
pub fn calcular_diff_movimiento(
    actual: &EstadoAsignacion,
    propuesto: &MovimientoPropuesto,
) -> Result<CambiosAsignacion, RuleError> {
    let mut cambios = CambiosAsignacion::default();

    let categoria = normalizar_id(propuesto.category_id.as_ref());
    if categoria != actual.category_id {
        cambios.category_id = Some(categoria);
    }

    let sede = normalizar_id(propuesto.sede_id.as_ref());
    if sede != actual.sede_id {
        cambios.sede_id = Some(sede);
    }

    let cliente = normalizar_id(propuesto.client_id.as_ref());
    if cliente != actual.client_id {
        cambios.client_id = Some(cliente);
    }

    if cambios.esta_vacio() {
        return Err(RuleError::no_change());
    }

    // Mesma política da edição: contrato ativo fixa o dono.
    if actual.contrato_activo && cambios.client_id.is_some() {
        return Err(RuleError::invalid(
            "clientId",
            "El ejemplar tiene un contrato activo; el propietario no puede cambiar sin liberar el contrato.",
        ));
    }

    Ok(cambios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::RuleKind;

    fn borrador_completo() -> BorradorEjemplar {
        BorradorEjemplar {
            name: "Rex".to_string(),
            category_id: Some(RawId::Text("1".to_string())),
            sede_id: Some(RawId::Num(2)),
            client_id: None,
            breed: Some("Criollo".to_string()),
            color: None,
            birth_date: None,
        }
    }

    fn estado(cat: Option<&str>, sede: Option<&str>, cliente: Option<&str>) -> EstadoAsignacion {
        EstadoAsignacion {
            category_id: cat.map(str::to_string),
            sede_id: sede.map(str::to_string),
            client_id: cliente.map(str::to_string),
            contrato_activo: false,
        }
    }

    #[test]
    fn normalizacion_es_segura_para_comparar() {
        assert_eq!(
            normalizar_id(Some(&RawId::Num(5))),
            normalizar_id(Some(&RawId::Text("5".to_string())))
        );
        assert_eq!(normalizar_id(Some(&RawId::Text("".to_string()))), None);
        assert_eq!(normalizar_id(Some(&RawId::Text("  ".to_string()))), None);
        assert_eq!(normalizar_id(None), None);
        assert_eq!(
            normalizar_id(Some(&RawId::Text(" 7 ".to_string()))),
            Some("7".to_string())
        );
    }

    #[test]
    fn crear_exige_nombre() {
        let mut b = borrador_completo();
        b.name = "   ".to_string();
        let err = validar_creacion(&b).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.kind, RuleKind::Required);
    }

    #[test]
    fn crear_exige_categoria_y_sede() {
        let mut sin_categoria = borrador_completo();
        sin_categoria.category_id = Some(RawId::Text("".to_string()));
        let err = validar_creacion(&sin_categoria).unwrap_err();
        assert_eq!(err.field, "categoryId");
        assert_eq!(err.kind, RuleKind::Required);

        let mut sin_sede = borrador_completo();
        sin_sede.sede_id = None;
        let err = validar_creacion(&sin_sede).unwrap_err();
        assert_eq!(err.field, "sedeId");
        assert_eq!(err.kind, RuleKind::Required);
    }

    #[test]
    fn crear_normaliza_ids_mixtos() {
        let valido = validar_creacion(&borrador_completo()).unwrap();
        assert_eq!(valido.category_id, "1");
        assert_eq!(valido.sede_id, "2");
        assert_eq!(valido.client_id, None);
    }

    #[test]
    fn edicion_bloquea_cambio_de_dueno_con_contrato_activo() {
        let mut actual = estado(Some("1"), Some("2"), Some("9"));
        actual.contrato_activo = true;

        let mut b = borrador_completo();
        b.client_id = Some(RawId::Num(10));
        let err = validar_edicion(&actual, &b).unwrap_err();
        assert_eq!(err.field, "clientId");
        assert_eq!(err.kind, RuleKind::Invalid);

        // Mantendo o mesmo dono a edição passa.
        b.client_id = Some(RawId::Text("9".to_string()));
        assert!(validar_edicion(&actual, &b).is_ok());
    }

    #[test]
    fn movimiento_sin_cambio_es_rechazado() {
        let actual = estado(Some("1"), Some("2"), None);
        let propuesto = MovimientoPropuesto {
            category_id: Some(RawId::Num(1)),
            sede_id: Some(RawId::Text("2".to_string())),
            client_id: None,
        };
        let err = calcular_diff_movimiento(&actual, &propuesto).unwrap_err();
        assert_eq!(err.kind, RuleKind::NoChange);
    }

    #[test]
    fn diff_de_movimiento_es_minimo() {
        let actual = estado(Some("1"), Some("2"), None);
        let propuesto = MovimientoPropuesto {
            category_id: Some(RawId::Text("1".to_string())),
            sede_id: Some(RawId::Num(3)),
            client_id: None,
        };
        let cambios = calcular_diff_movimiento(&actual, &propuesto).unwrap();
        assert_eq!(cambios.sede_id, Some(Some("3".to_string())));
        assert_eq!(cambios.category_id, None);
        assert_eq!(cambios.client_id, None);
    }

    #[test]
    fn movimiento_puede_anular_una_asociacion() {
        let actual = estado(Some("1"), Some("2"), Some("9"));
        let propuesto = MovimientoPropuesto {
            category_id: Some(RawId::Num(1)),
            sede_id: Some(RawId::Num(2)),
            client_id: Some(RawId::Text("".to_string())), // limpia el dueño
        };
        let cambios = calcular_diff_movimiento(&actual, &propuesto).unwrap();
        assert_eq!(cambios.client_id, Some(None));
        assert_eq!(cambios.category_id, None);
        assert_eq!(cambios.sede_id, None);
    }

    #[test]
    fn movimiento_no_cambia_dueno_con_contrato_activo() {
        let mut actual = estado(Some("1"), Some("2"), Some("9"));
        actual.contrato_activo = true;
        let propuesto = MovimientoPropuesto {
            category_id: Some(RawId::Num(1)),
            sede_id: Some(RawId::Num(2)),
            client_id: Some(RawId::Num(10)),
        };
        let err = calcular_diff_movimiento(&actual, &propuesto).unwrap_err();
        assert_eq!(err.field, "clientId");
    }

    #[test]
    fn parsear_id_rechaza_tokens_no_numericos() {
        assert_eq!(parsear_id("categoryId", "42").unwrap(), 42);
        let err = parsear_id("categoryId", "abc").unwrap_err();
        assert_eq!(err.field, "categoryId");
        assert_eq!(err.kind, RuleKind::Invalid);
    }
}
