// Service module exports

pub mod draw;
pub mod grid;
pub mod hit_test;
pub mod layout;
pub mod palette;
pub mod selection;
