pub mod use_cases;

pub use use_cases::generation::GenerateAssetsUseCase;
pub use use_cases::history::HistoryStore;
pub use use_cases::router::{GenerationRouter, RoutedResponse};
