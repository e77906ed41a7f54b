#[tokio::main]
async fn main() {
    echo::start_server().await;
}
