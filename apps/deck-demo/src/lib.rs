pub mod app;
mod stage;

pub use stage::Stage;
