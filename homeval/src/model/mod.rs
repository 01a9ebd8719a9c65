pub mod features;
pub mod loader;
pub mod regressor;
pub mod store;
pub mod vocabulary;

pub use regressor::Regressor;
pub use store::ModelStore;
pub use vocabulary::LocationVocabulary;
