// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of the HTTP layer

pub mod repositories;
pub mod selection;
pub mod team;
pub mod timer;
pub mod user;
