pub mod category_repo;
pub use category_repo::CategoryRepository;
pub mod sede_repo;
pub use sede_repo::SedeRepository;
pub mod client_repo;
pub use client_repo::ClientRepository;
pub mod servicio_repo;
pub use servicio_repo::ServicioRepository;
pub mod specimen_repo;
pub use specimen_repo::SpecimenRepository;
pub mod contract_repo;
pub use contract_repo::ContractRepository;
pub mod pago_repo;
pub use pago_repo::PagoRepository;
pub mod registro_repo;
pub use registro_repo::RegistroRepository;
