pub mod badges;
pub mod cards;
pub mod common;
pub mod empty_state;
pub mod layout;
