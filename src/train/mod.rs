pub mod trainer;

pub use trainer::train_epochs;
