use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;
use tracing::info;

use agenda_api::configuration::get_static_configuration;
use agenda_api::run;
use agenda_api::store::{PersonStore, DATABASE_PATH};
use agenda_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let subscriber = get_subscriber(String::from("agenda-api"), String::from("info"));
    init_subscriber(subscriber);

    let configuration = get_static_configuration().expect("failed to load configs");
    let store = PersonStore::open(DATABASE_PATH)
        .await
        .expect("failed to open the database");

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, configuration.application_port));
    let listener = TcpListener::bind(address).await.expect("failed to bind port");

    info!("Starting server at port {}...", configuration.application_port);

    run(listener, store).await.expect("server failed")
}
