//src/main.rs

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // `expect` é aceitável aqui: se a configuração falhar, a aplicação
    // não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    let category_routes = Router::new()
        .route(
            "/",
            get(handlers::categories::list_categories).post(handlers::categories::create_category),
        )
        .route(
            "/{id}",
            get(handlers::categories::get_category)
                .put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        );

    let sede_routes = Router::new()
        .route(
            "/",
            get(handlers::sedes::list_sedes).post(handlers::sedes::create_sede),
        )
        .route(
            "/{id}",
            get(handlers::sedes::get_sede)
                .put(handlers::sedes::update_sede)
                .delete(handlers::sedes::delete_sede),
        );

    let client_routes = Router::new()
        .route(
            "/",
            get(handlers::clients::list_clients).post(handlers::clients::create_client),
        )
        .route(
            "/{id}",
            get(handlers::clients::get_client)
                .put(handlers::clients::update_client)
                .delete(handlers::clients::delete_client),
        );

    let servicio_routes = Router::new()
        .route(
            "/",
            get(handlers::servicios::list_servicios).post(handlers::servicios::create_servicio),
        )
        .route(
            "/{id}",
            get(handlers::servicios::get_servicio)
                .put(handlers::servicios::update_servicio)
                .delete(handlers::servicios::delete_servicio),
        );

    let specimen_routes = Router::new()
        .route(
            "/",
            get(handlers::specimens::list_specimens).post(handlers::specimens::create_specimen),
        )
        .route("/agrupados", get(handlers::specimens::list_specimens_agrupados))
        .route(
            "/{id}",
            get(handlers::specimens::get_specimen)
                .put(handlers::specimens::update_specimen)
                .delete(handlers::specimens::delete_specimen),
        )
        // Movimiento é uma operação distinta da edição: só a tripla
        // relacional, com payload mínimo.
        .route("/{id}/move", put(handlers::specimens::move_specimen));

    let contract_routes = Router::new()
        .route(
            "/",
            get(handlers::contracts::list_contracts).post(handlers::contracts::create_contract),
        )
        .route(
            "/ejemplares-disponibles",
            get(handlers::contracts::list_ejemplares_disponibles),
        )
        .route(
            "/{id}",
            get(handlers::contracts::get_contract)
                .put(handlers::contracts::update_contract)
                .delete(handlers::contracts::delete_contract),
        );

    let pago_routes = Router::new()
        .route(
            "/",
            get(handlers::pagos::list_pagos).post(handlers::pagos::create_pago),
        )
        .route("/sugerencia-mes", get(handlers::pagos::sugerencia_mes))
        .route(
            "/{id}",
            get(handlers::pagos::get_pago)
                .put(handlers::pagos::update_pago)
                .delete(handlers::pagos::delete_pago),
        );

    let registro_routes = Router::new()
        .route(
            "/alimentacion",
            get(handlers::registros::list_alimentaciones)
                .post(handlers::registros::create_alimentacion),
        )
        .route(
            "/alimentacion/{id}",
            axum::routing::delete(handlers::registros::delete_alimentacion),
        )
        .route(
            "/medicina",
            get(handlers::registros::list_medicinas).post(handlers::registros::create_medicina),
        )
        .route(
            "/medicina/{id}",
            axum::routing::delete(handlers::registros::delete_medicina),
        )
        .route(
            "/vacunacion",
            get(handlers::registros::list_vacunaciones)
                .post(handlers::registros::create_vacunacion),
        )
        .route(
            "/vacunacion/{id}",
            axum::routing::delete(handlers::registros::delete_vacunacion),
        );

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/categories", category_routes)
        .nest("/api/sedes", sede_routes)
        .nest("/api/clients", client_routes)
        .nest("/api/servicios", servicio_routes)
        .nest("/api/specimens", specimen_routes)
        .nest("/api/contracts", contract_routes)
        .nest("/api/pagos", pago_routes)
        .nest("/api/registros", registro_routes)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()),
        )
        .with_state(app_state);

    // Inicia o servidor
    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .await
        .expect("Erro no servidor Axum");
}
