// src/services/specimen_service.rs
//
// Orquestra o motor de asignación (puro) com o repositório: o serviço
// busca o estado atual, chama o motor e persiste o resultado. As regras
// em si nunca ficam aqui dentro.

use crate::{
    common::error::AppError,
    db::specimen_repo::{CambiosEjemplar, NuevoEjemplar, SpecimenRepository},
    models::specimen::Specimen,
    services::assignment::{
        calcular_diff_movimiento, parsear_id, validar_creacion, validar_edicion, BorradorEjemplar,
        EstadoAsignacion, MovimientoPropuesto,
    },
    services::grouping::{agrupar_por_categoria, GrupoCategoria},
};

#[derive(Clone)]
pub struct SpecimenService {
    repo: SpecimenRepository,
}

impl SpecimenService {
    pub fn new(repo: SpecimenRepository) -> Self {
        Self { repo }
    }

    pub async fn listar(&self, category_id: Option<i64>) -> Result<Vec<Specimen>, AppError> {
        self.repo.listar(category_id).await
    }

    pub async fn obtener(&self, id: i64) -> Result<Specimen, AppError> {
        self.repo.obtener(id).await
    }

    pub async fn crear(&self, borrador: &BorradorEjemplar) -> Result<Specimen, AppError> {
        let valido = validar_creacion(borrador)?;
        let nuevo = NuevoEjemplar::desde_valido(&valido)?;
        self.repo.crear(&nuevo).await
    }

    pub async fn editar(&self, id: i64, borrador: &BorradorEjemplar) -> Result<Specimen, AppError> {
        let actual = self.repo.obtener(id).await?;
        let estado = EstadoAsignacion::del_ejemplar(&actual);

        let valido = validar_edicion(&estado, borrador)?;
        let nuevo = NuevoEjemplar::desde_valido(&valido)?;
        self.repo.actualizar(id, &nuevo).await
    }

    /// Movimiento: só a tripla relacional. O motor calcula o diff
    /// mínimo e o repositório escreve apenas as colunas que mudaram.
    pub async fn mover(
        &self,
        id: i64,
        propuesto: &MovimientoPropuesto,
    ) -> Result<Specimen, AppError> {
        let actual = self.repo.obtener(id).await?;
        let estado = EstadoAsignacion::del_ejemplar(&actual);

        let cambios = calcular_diff_movimiento(&estado, propuesto)?;

        // Fronteira de persistência: tokens → chaves do banco.
        let cambios_bd = CambiosEjemplar {
            category_id: parsear_campo(&cambios.category_id, "categoryId")?,
            sede_id: parsear_campo(&cambios.sede_id, "sedeId")?,
            client_id: parsear_campo(&cambios.client_id, "clientId")?,
        };

        tracing::info!(
            ejemplar = id,
            categoria = cambios_bd.category_id.is_some(),
            sede = cambios_bd.sede_id.is_some(),
            cliente = cambios_bd.client_id.is_some(),
            "movimiento de ejemplar"
        );

        self.repo.actualizar_asignacion(id, &cambios_bd).await
    }

    pub async fn eliminar(&self, id: i64) -> Result<(), AppError> {
        self.repo.eliminar(id).await
    }

    pub async fn agrupados(&self) -> Result<Vec<GrupoCategoria>, AppError> {
        let ejemplares = self.repo.listar(None).await?;
        Ok(agrupar_por_categoria(&ejemplares))
    }
}

fn parsear_campo(
    campo: &Option<Option<String>>,
    nombre: &str,
) -> Result<Option<Option<i64>>, AppError> {
    match campo {
        None => Ok(None),
        Some(None) => Ok(Some(None)),
        Some(Some(token)) => Ok(Some(Some(parsear_id(nombre, token)?))),
    }
}
