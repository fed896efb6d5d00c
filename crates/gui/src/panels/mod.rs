pub mod cards;
pub mod map_view;
pub mod recommendations;
pub mod table;
