pub mod ui;
pub mod wizard;
