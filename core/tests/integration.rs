//! Full lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the provider,
//! resource and data source over real HTTP through the default
//! `UreqTransport`, exactly as an orchestrator would.

use std::net::SocketAddr;

use todo_provider::config::{BASEURL_ENV, PASSWORD_ENV, USERNAME_ENV};
use todo_provider::{
    ConfigValue, DeclaredConfig, ErrorKind, MapEnv, Provider, ProviderData, TodoDataSource,
    TodoList, TodoResource,
};

/// Start the mock server on a random local port and return its address.
fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn list(items: &[&str]) -> TodoList {
    items.iter().copied().collect()
}

fn configure(addr: SocketAddr) -> ProviderData {
    let env = MapEnv::new()
        .with(USERNAME_ENV, "alice")
        .with(PASSWORD_ENV, "secret")
        .with(BASEURL_ENV, "http://ignored.invalid");
    let declared = DeclaredConfig {
        baseurl: ConfigValue::known(format!("http://{addr}")),
        ..DeclaredConfig::default()
    };
    Provider::new("test").configure(&declared, &env).unwrap()
}

#[test]
fn crud_lifecycle() {
    let addr = spawn_server();
    let data = configure(addr);

    let mut resource = TodoResource::new();
    resource.configure(data.clone()).unwrap();
    let mut source = TodoDataSource::new();
    source.configure(data).unwrap();

    // Step 1: read, the store starts empty.
    assert!(resource.read().unwrap().is_empty());

    // Step 2: create.
    let created = resource.create(&list(&["buy milk"])).unwrap();
    assert_eq!(created, list(&["buy milk"]));

    // Step 3: data source sees the same collection.
    assert_eq!(source.read().unwrap(), list(&["buy milk"]));

    // Step 4: update with a duplicate; the store's echo is committed.
    let updated = resource.update(&list(&["buy milk", "walk dog", "buy milk"])).unwrap();
    assert_eq!(updated, list(&["buy milk", "walk dog"]));
    assert_eq!(resource.state(), Some(&list(&["buy milk", "walk dog"])));

    // Step 5: two reads agree.
    assert_eq!(resource.read().unwrap(), source.read().unwrap());

    // Step 6: delete.
    let deleted = resource.delete().unwrap();
    assert!(deleted.is_empty());
    assert_eq!(resource.state(), Some(&TodoList::default()));

    // Step 7: data source sees the empty store.
    assert!(source.read().unwrap().is_empty());
}

#[test]
fn declared_base_url_beats_environment() {
    let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
    assert_eq!(
        configure(addr),
        ProviderData::BaseUrl(format!("http://{addr}"))
    );
}

#[test]
fn wrong_endpoint_status_keeps_state() {
    let addr = spawn_server();
    let mut resource = TodoResource::new();
    resource
        .configure(ProviderData::BaseUrl(format!("http://{addr}")))
        .unwrap();
    resource.create(&list(&["kept"])).unwrap();

    // Point the resource at a path prefix the server does not route.
    resource
        .configure(ProviderData::BaseUrl(format!("http://{addr}/missing")))
        .unwrap();
    let diags = resource.delete().unwrap_err();

    assert_eq!(diags.iter().next().unwrap().kind, ErrorKind::Protocol);
    assert_eq!(resource.state(), Some(&list(&["kept"])));
}

#[test]
fn unreachable_store_is_a_transport_error() {
    // Bind then drop to obtain a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let mut source = TodoDataSource::new();
    source
        .configure(ProviderData::BaseUrl(format!("http://{addr}")))
        .unwrap();
    let diags = source.read().unwrap_err();

    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.kind, ErrorKind::Transport);
    assert_eq!(diag.summary, "Unable to hit the /get endpoint");
}
