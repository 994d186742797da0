//! Petstore server entry point
//!
//! Serves the application on a fixed local port with development logging.

use petstore_core::logging::{self, Profile};
use petstore_server::{App, AppConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    logging::init(Profile::Development);

    let app = App::new(AppConfig::default());
    app.run("127.0.0.1:5555").await
}
