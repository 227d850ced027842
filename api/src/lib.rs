// Library exports for testing and the server binary

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
