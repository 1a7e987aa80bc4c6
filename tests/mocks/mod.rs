pub mod mock_form_listener;
pub mod mock_relay;

pub use mock_form_listener::MockFormListener;
pub use mock_relay::MockRelay;
