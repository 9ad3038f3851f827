pub mod clustering;
pub mod entities;
pub mod geo;
pub mod schedule;
pub mod value_objects;
