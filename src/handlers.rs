pub mod categories;
pub mod clients;
pub mod contracts;
pub mod pagos;
pub mod registros;
pub mod sedes;
pub mod servicios;
pub mod specimens;
