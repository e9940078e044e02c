use std::net::TcpListener;
use std::time::Duration;
use verso_server::Server;

#[tokio::test]
async fn occupied_port_is_fatal() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind helper listener");
    let addr = listener.local_addr().expect("local addr");

    let server = Server::builder()
        .address(addr.ip())
        .port(addr.port())
        .build()
        .expect("server builds");

    // Binding must fail immediately; no retries, no silent success.
    match tokio::time::timeout(Duration::from_secs(5), server.run()).await {
        Ok(Err(_)) => {}
        Ok(Ok(())) => panic!("server exited cleanly on an occupied port"),
        Err(_) => panic!("server kept serving on an occupied port"),
    }

    drop(listener);
}
