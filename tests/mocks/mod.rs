mod mock_dispatcher;
mod mock_provider;

pub use mock_dispatcher::MockDispatcher;
pub use mock_provider::MockProvider;
