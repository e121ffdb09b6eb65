pub mod run_application;

pub use run_application::RunApplicationUseCase;
