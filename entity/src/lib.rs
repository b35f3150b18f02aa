pub mod prelude;

pub mod battle;
