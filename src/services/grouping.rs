// src/services/grouping.rs
//
// View-model de agrupamento por categoria. Transformação pura sobre a
// coleção de ejemplares, recalculada a cada listagem; não guarda estado.

use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::specimen::Specimen;

// Chave sentinela para ejemplares sem categoria.
pub const SIN_CATEGORIA: &str = "sin-categoria";

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrupoCategoria {
    // categoryId normalizado para string, ou `sin-categoria`.
    pub categoria: String,
    pub ejemplares: Vec<Specimen>,
}

/// Particiona a coleção por categoria: cada ejemplar cai em exatamente
/// um grupo. A ordem dos grupos é a de primeira aparição na fonte, e a
/// ordem dentro de cada grupo é a ordem da coleção de entrada.
pub fn agrupar_por_categoria(ejemplares: &[Specimen]) -> Vec<GrupoCategoria> {
    let mut indice: HashMap<String, usize> = HashMap::new();
    let mut grupos: Vec<GrupoCategoria> = Vec::new();

    for ejemplar in ejemplares {
        let clave = ejemplar
            .category_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| SIN_CATEGORIA.to_string());

        let pos = *indice.entry(clave.clone()).or_insert_with(|| {
            grupos.push(GrupoCategoria {
                categoria: clave,
                ejemplares: Vec::new(),
            });
            grupos.len() - 1
        });

        grupos[pos].ejemplares.push(ejemplar.clone());
    }

    grupos
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ejemplar(id: i64, category_id: Option<i64>) -> Specimen {
        Specimen {
            id,
            name: format!("ejemplar-{}", id),
            breed: None,
            color: None,
            birth_date: None,
            category_id,
            sede_id: None,
            client_id: None,
            contract_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn particion_es_total() {
        let coleccion = vec![
            ejemplar(1, Some(10)),
            ejemplar(2, None),
            ejemplar(3, Some(10)),
            ejemplar(4, Some(20)),
            ejemplar(5, None),
        ];
        let grupos = agrupar_por_categoria(&coleccion);

        let total: usize = grupos.iter().map(|g| g.ejemplares.len()).sum();
        assert_eq!(total, coleccion.len());

        let sin = grupos.iter().find(|g| g.categoria == SIN_CATEGORIA).unwrap();
        let ids: Vec<i64> = sin.ejemplares.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn orden_de_grupos_es_de_primera_aparicion() {
        let coleccion = vec![
            ejemplar(1, Some(20)),
            ejemplar(2, None),
            ejemplar(3, Some(10)),
            ejemplar(4, Some(20)),
        ];
        let grupos = agrupar_por_categoria(&coleccion);
        let claves: Vec<&str> = grupos.iter().map(|g| g.categoria.as_str()).collect();
        assert_eq!(claves, vec!["20", SIN_CATEGORIA, "10"]);

        // Dentro do grupo, ordem da fonte.
        assert_eq!(
            grupos[0].ejemplares.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 4]
        );
    }

    #[test]
    fn coleccion_vacia_produce_cero_grupos() {
        assert!(agrupar_por_categoria(&[]).is_empty());
    }
}
