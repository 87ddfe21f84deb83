pub mod cells;
pub mod console;
pub mod detail;
pub mod filter_bar;
pub mod grid_cards;
pub mod grid_table;
pub mod packer_dialog;
pub mod sign_in;
pub mod styles;

pub use console::Console;
pub use sign_in::SignInBoundary;
