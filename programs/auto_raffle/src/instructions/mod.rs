pub mod admin;
pub mod enter;
pub mod fulfill;
pub mod getters;
pub mod upkeep;
