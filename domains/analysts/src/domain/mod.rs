//! Domain entities for the Analysts domain

pub mod entities;
