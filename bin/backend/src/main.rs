//! Darkfluid Backend Binary
//!
//! Serves the account pairing surface and static game content as a
//! single server. Runs on BIND_ADDR (e.g. 0.0.0.0:8888); content loads
//! from DATA_DIR (default `data`).

#[tokio::main]
async fn main() {
    df_core::log();
    df_core::kys();
    df_server::run().await.unwrap();
}
