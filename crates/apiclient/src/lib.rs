pub mod abstract_trait;
pub mod builder;
pub mod di;
pub mod domain;
pub mod service;
pub mod state;
pub mod store;
pub mod transport;
