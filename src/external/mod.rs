pub mod dataset_provider;
pub mod flipside;
