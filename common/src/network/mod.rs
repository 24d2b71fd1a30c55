pub mod addr;
pub mod ports;
