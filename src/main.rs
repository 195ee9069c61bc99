use std::sync::Arc;

use convo::{App, api::ApiClient};
use dioxus::{logger::tracing::Level, prelude::*};

fn main() {
    dioxus::logger::init(Level::INFO).unwrap();
    let api = Arc::new(ApiClient::from_env());
    LaunchBuilder::new().with_context(api).launch(App)
}
