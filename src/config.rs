// src/config.rs

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::{env, time::Duration};

use crate::{
    db::{
        CategoryRepository, ClientRepository, ContractRepository, PagoRepository,
        RegistroRepository, SedeRepository, ServicioRepository, SpecimenRepository,
    },
    services::{ContractService, PagoService, SpecimenService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,

    // Entidades simples: os handlers falam direto com o repositório.
    pub category_repo: CategoryRepository,
    pub sede_repo: SedeRepository,
    pub client_repo: ClientRepository,
    pub servicio_repo: ServicioRepository,
    pub registro_repo: RegistroRepository,

    // Onde existe regra de negócio, entra um serviço na frente.
    pub specimen_service: SpecimenService,
    pub contract_service: ContractService,
    pub pago_service: PagoService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // --- Monta o gráfico de dependências ---
        let specimen_repo = SpecimenRepository::new(db_pool.clone());
        let contract_repo = ContractRepository::new(db_pool.clone());

        let specimen_service = SpecimenService::new(specimen_repo.clone());
        let contract_service = ContractService::new(contract_repo, specimen_repo);
        let pago_service = PagoService::new(PagoRepository::new(db_pool.clone()));

        Ok(Self {
            category_repo: CategoryRepository::new(db_pool.clone()),
            sede_repo: SedeRepository::new(db_pool.clone()),
            client_repo: ClientRepository::new(db_pool.clone()),
            servicio_repo: ServicioRepository::new(db_pool.clone()),
            registro_repo: RegistroRepository::new(db_pool.clone()),
            specimen_service,
            contract_service,
            pago_service,
            db_pool,
        })
    }
}
