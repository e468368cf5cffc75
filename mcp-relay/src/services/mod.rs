pub mod echo;
pub mod gateway;
pub mod relay_client;
pub mod transcript;

pub use echo::{echo, EchoResponse};
pub use gateway::Gateway;
pub use relay_client::{RelayClient, RelayClientConfig, RelayClientError};
pub use transcript::get_transcript;
