//! Port definitions (interfaces to the outside world)

pub mod backend_gateway;
