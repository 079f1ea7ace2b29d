// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;
use crate::services;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Categorías ---
        handlers::categories::list_categories,
        handlers::categories::create_category,
        handlers::categories::get_category,
        handlers::categories::update_category,
        handlers::categories::delete_category,

        // --- Sedes ---
        handlers::sedes::list_sedes,
        handlers::sedes::create_sede,
        handlers::sedes::get_sede,
        handlers::sedes::update_sede,
        handlers::sedes::delete_sede,

        // --- Clientes ---
        handlers::clients::list_clients,
        handlers::clients::create_client,
        handlers::clients::get_client,
        handlers::clients::update_client,
        handlers::clients::delete_client,

        // --- Servicios ---
        handlers::servicios::list_servicios,
        handlers::servicios::create_servicio,
        handlers::servicios::get_servicio,
        handlers::servicios::update_servicio,
        handlers::servicios::delete_servicio,

        // --- Ejemplares ---
        handlers::specimens::list_specimens,
        handlers::specimens::list_specimens_agrupados,
        handlers::specimens::create_specimen,
        handlers::specimens::get_specimen,
        handlers::specimens::update_specimen,
        handlers::specimens::move_specimen,
        handlers::specimens::delete_specimen,

        // --- Contratos ---
        handlers::contracts::list_contracts,
        handlers::contracts::list_ejemplares_disponibles,
        handlers::contracts::create_contract,
        handlers::contracts::get_contract,
        handlers::contracts::update_contract,
        handlers::contracts::delete_contract,

        // --- Pagos ---
        handlers::pagos::list_pagos,
        handlers::pagos::sugerencia_mes,
        handlers::pagos::create_pago,
        handlers::pagos::get_pago,
        handlers::pagos::update_pago,
        handlers::pagos::delete_pago,

        // --- Registros de cuidado ---
        handlers::registros::list_alimentaciones,
        handlers::registros::create_alimentacion,
        handlers::registros::delete_alimentacion,
        handlers::registros::list_medicinas,
        handlers::registros::create_medicina,
        handlers::registros::delete_medicina,
        handlers::registros::list_vacunaciones,
        handlers::registros::create_vacunacion,
        handlers::registros::delete_vacunacion,
    ),
    components(
        schemas(
            models::category::Category,
            models::category::CategoryEstado,
            models::sede::Sede,
            models::client::Client,
            models::servicio::Servicio,
            models::specimen::Specimen,
            models::contract::Contract,
            models::contract::ContractEstado,
            models::pago::Pago,
            models::pago::MetodoPago,
            models::registro::Alimentacion,
            models::registro::Medicina,
            models::registro::Vacunacion,

            services::assignment::MovimientoPropuesto,
            services::grouping::GrupoCategoria,

            handlers::categories::CategoryPayload,
            handlers::sedes::SedePayload,
            handlers::clients::ClientPayload,
            handlers::servicios::ServicioPayload,
            handlers::specimens::SpecimenPayload,
            handlers::contracts::CreateContractPayload,
            handlers::contracts::UpdateContractPayload,
            handlers::pagos::CreatePagoPayload,
            handlers::pagos::UpdatePagoPayload,
            handlers::registros::AlimentacionPayload,
            handlers::registros::MedicinaPayload,
            handlers::registros::VacunacionPayload,
        )
    ),
    tags(
        (name = "Categorías", description = "Clasificación de ejemplares"),
        (name = "Sedes", description = "Ubicaciones físicas"),
        (name = "Clientes", description = "Propietarios de ejemplares"),
        (name = "Servicios", description = "Catálogo de servicios"),
        (name = "Ejemplares", description = "Registro y reubicación de ejemplares"),
        (name = "Contratos", description = "Contratos de servicio"),
        (name = "Pagos", description = "Pagos de contratos"),
        (name = "Registros", description = "Historial de cuidado")
    )
)]
pub struct ApiDoc;
