pub mod category;
pub mod client;
pub mod contract;
pub mod pago;
pub mod registro;
pub mod sede;
pub mod servicio;
pub mod specimen;
