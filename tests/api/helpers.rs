use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use agenda_api::store::PersonStore;

pub async fn spawn_app() -> String {
    let test_address = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
    let test_listener = tokio::net::TcpListener::bind(test_address)
        .await
        .expect("failed to bind random port");
    let local_address = test_listener.local_addr().unwrap();
    let store = PersonStore::open(test_database_path())
        .await
        .expect("failed to open the test database");

    tokio::spawn(agenda_api::run(test_listener, store));
    format!("http://{}", local_address)
}

pub fn test_database_path() -> PathBuf {
    std::env::temp_dir().join(format!("agenda-test-{}.db", ulid::Ulid::new()))
}
