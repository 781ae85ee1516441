pub mod generate;
pub mod lookup;
pub mod verify;
